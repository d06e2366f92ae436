//! Game outcomes.

use serde::{Deserialize, Serialize};

use crate::core::piece::PieceKind;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No Fox is left on the board. Geese win.
    FoxRemoved,
    /// The Fox has no legal move. Geese win.
    FoxTrapped,
    /// Too few Geese remain to trap the Fox. Fox wins.
    GeeseDecimated,
    /// Too many moves without a capture.
    Draw,
}

impl Outcome {
    /// The winning side, `None` for a draw.
    #[must_use]
    pub const fn winner(self) -> Option<PieceKind> {
        match self {
            Outcome::FoxRemoved | Outcome::FoxTrapped => Some(PieceKind::Goose),
            Outcome::GeeseDecimated => Some(PieceKind::Fox),
            Outcome::Draw => None,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(self, side: PieceKind) -> bool {
        self.winner() == Some(side)
    }

    /// Announcement shown to players when the game ends.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Outcome::FoxRemoved => "The Fox is gone! Game over.",
            Outcome::FoxTrapped => "Geese win! The Fox is trapped.",
            Outcome::GeeseDecimated => "Fox wins! Too many geese were captured.",
            Outcome::Draw => "Draw! Move limit without a capture reached.",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winners() {
        assert!(Outcome::FoxRemoved.is_winner(PieceKind::Goose));
        assert!(Outcome::FoxTrapped.is_winner(PieceKind::Goose));
        assert!(!Outcome::FoxTrapped.is_winner(PieceKind::Fox));
        assert!(Outcome::GeeseDecimated.is_winner(PieceKind::Fox));

        assert_eq!(Outcome::Draw.winner(), None);
        assert!(!Outcome::Draw.is_winner(PieceKind::Fox));
        assert!(!Outcome::Draw.is_winner(PieceKind::Goose));
    }

    #[test]
    fn test_display_is_message() {
        assert_eq!(Outcome::FoxTrapped.to_string(), Outcome::FoxTrapped.message());
    }
}
