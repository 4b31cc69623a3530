//! User-facing text in the supported languages.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use solo_tictactoe::Outcome;
use strum::{Display, EnumString};

/// Language of the on-screen text.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Russian.
    Ru,
}

impl Locale {
    /// Window title.
    pub fn title(self) -> &'static str {
        match self {
            Self::En => "Game: Tic-Tac-Toe",
            Self::Ru => "Игра: Крестики-нолики",
        }
    }

    /// Result text for a finished game; nothing while the game runs.
    pub fn outcome(self, outcome: Outcome) -> Option<&'static str> {
        let text = match (self, outcome) {
            (_, Outcome::InProgress) => return None,
            (Self::En, Outcome::PlayerWins) => "You win!",
            (Self::En, Outcome::OpponentWins) => "The computer wins!",
            (Self::En, Outcome::Draw) => "Draw",
            (Self::Ru, Outcome::PlayerWins) => "Вы победили!",
            (Self::Ru, Outcome::OpponentWins) => "Компьютер победил!",
            (Self::Ru, Outcome::Draw) => "Ничья",
        };
        Some(text)
    }

    /// Prompt shown while waiting for the player.
    pub fn your_move(self) -> &'static str {
        match self {
            Self::En => "Your move",
            Self::Ru => "Ваш ход",
        }
    }

    /// Label of the restart control.
    pub fn restart(self) -> &'static str {
        match self {
            Self::En => "r: start over",
            Self::Ru => "r: начать заново",
        }
    }

    /// Key help for playing and quitting.
    pub fn controls(self) -> &'static str {
        match self {
            Self::En => "arrows/hjkl: move  enter/space/1-9: play  q: quit",
            Self::Ru => "стрелки/hjkl: выбор  enter/пробел/1-9: ход  q: выход",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_text_while_in_progress() {
        assert_eq!(Locale::En.outcome(Outcome::InProgress), None);
        assert_eq!(Locale::Ru.outcome(Outcome::InProgress), None);
    }

    #[test]
    fn test_outcome_text() {
        assert_eq!(Locale::En.outcome(Outcome::PlayerWins), Some("You win!"));
        assert_eq!(Locale::Ru.outcome(Outcome::OpponentWins), Some("Компьютер победил!"));
        assert_eq!(Locale::Ru.outcome(Outcome::Draw), Some("Ничья"));
    }

    #[test]
    fn test_parse_locale() {
        assert_eq!("ru".parse::<Locale>(), Ok(Locale::Ru));
        assert_eq!(Locale::En.to_string(), "en");
        assert!("de".parse::<Locale>().is_err());
    }
}
