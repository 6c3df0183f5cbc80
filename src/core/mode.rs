use serde::Serialize;
use std::str::FromStr;

/// Colouring behaviour applied when the pointer enters a cell
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Default,
    Random,
    Darken,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Default => "Default",
            Mode::Random => "Random",
            Mode::Darken => "Darken",
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Mode::Default),
            "random" => Ok(Mode::Random),
            "darken" => Ok(Mode::Darken),
            other => Err(format!("unknown mode '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(" Darken ".parse::<Mode>(), Ok(Mode::Darken));
        assert_eq!("RANDOM".parse::<Mode>(), Ok(Mode::Random));
        assert!("rainbow".parse::<Mode>().is_err());
    }

    #[test]
    fn test_initial_mode_is_default() {
        assert_eq!(Mode::default(), Mode::Default);
    }
}
