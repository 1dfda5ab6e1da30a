use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Site section a conversation widget is embedded in.
///
/// Supplied once per conversation instance by the host and never mutated by
/// the resolver. The enum is closed on purpose: an unrecognized page tag is
/// rejected at the parsing boundary instead of falling through to a
/// catch-all response at resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageContext {
    Home,
    Barbers,
    AiAssistant,
    Booking,
}

impl PageContext {
    pub const ALL: [PageContext; 4] = [
        PageContext::Home,
        PageContext::Barbers,
        PageContext::AiAssistant,
        PageContext::Booking,
    ];

    /// Kebab-case tag used on the wire and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PageContext::Home => "home",
            PageContext::Barbers => "barbers",
            PageContext::AiAssistant => "ai-assistant",
            PageContext::Booking => "booking",
        }
    }
}

impl fmt::Display for PageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageContext {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(PageContext::Home),
            "barbers" => Ok(PageContext::Barbers),
            "ai-assistant" => Ok(PageContext::AiAssistant),
            "booking" => Ok(PageContext::Booking),
            other => Err(EngineError::UnknownPage(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::PageContext;

    #[test]
    fn tags_round_trip_through_from_str() {
        for page in PageContext::ALL {
            assert_eq!(page.as_str().parse::<PageContext>().unwrap(), page);
        }
    }

    #[test]
    fn parsing_is_case_insensitive_and_trims() {
        assert_eq!(
            " AI-Assistant ".parse::<PageContext>().unwrap(),
            PageContext::AiAssistant
        );
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert!("checkout".parse::<PageContext>().is_err());
    }
}
