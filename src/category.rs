use crate::codes::{self, StatusEntry};
use std::{fmt, str::FromStr};

/// The class of a status code, given by its hundreds digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatusCategory {
    /// 1xx
    Info,
    /// 2xx
    Ok,
    /// 3xx
    Redirect,
    /// 4xx
    ClientError,
    /// 5xx
    ServerError,
}

impl StatusCategory {
    pub const ALL: [StatusCategory; 5] = [
        StatusCategory::Info,
        StatusCategory::Ok,
        StatusCategory::Redirect,
        StatusCategory::ClientError,
        StatusCategory::ServerError,
    ];

    /// Determine the class of a status code from its numeric range.
    /// Returns `None` for anything outside `100..600`.
    pub const fn from_code(code: u16) -> Option<Self> {
        match code {
            100..=199 => Some(Self::Info),
            200..=299 => Some(Self::Ok),
            300..=399 => Some(Self::Redirect),
            400..=499 => Some(Self::ClientError),
            500..=599 => Some(Self::ServerError),
            _ => None,
        }
    }

    /// The label used to prefix status texts, e.g. `CLIENT ERROR`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Ok => "OK",
            Self::Redirect => "REDIRECT",
            Self::ClientError => "CLIENT ERROR",
            Self::ServerError => "SERVER ERROR",
        }
    }

    /// All recognized status codes of this class.
    pub fn entries(self) -> &'static [StatusEntry] {
        match self {
            Self::Info => codes::INFORMATION,
            Self::Ok => codes::SUCCESSFUL,
            Self::Redirect => codes::REDIRECTION,
            Self::ClientError => codes::CLIENT_ERROR,
            Self::ServerError => codes::SERVER_ERROR,
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatusCategory {
    type Err = String;

    /// Accepts the label in any case, with `-` or `_` in place of the space,
    /// or the class written as e.g. `4xx`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|category| {
                let class = format!("{}XX", *category as u8 + 1);
                normalized == category.label() || normalized == class
            })
            .ok_or_else(|| format!("unknown status category: {s:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_by_range() {
        assert_eq!(StatusCategory::from_code(99), None);
        assert_eq!(StatusCategory::from_code(100), Some(StatusCategory::Info));
        assert_eq!(StatusCategory::from_code(199), Some(StatusCategory::Info));
        assert_eq!(StatusCategory::from_code(200), Some(StatusCategory::Ok));
        assert_eq!(StatusCategory::from_code(308), Some(StatusCategory::Redirect));
        assert_eq!(StatusCategory::from_code(451), Some(StatusCategory::ClientError));
        assert_eq!(StatusCategory::from_code(599), Some(StatusCategory::ServerError));
        assert_eq!(StatusCategory::from_code(600), None);
        assert_eq!(StatusCategory::from_code(0), None);
    }

    #[test]
    fn entries_belong_to_category() {
        for category in StatusCategory::ALL {
            assert!(!category.entries().is_empty());
            for entry in category.entries() {
                assert_eq!(entry.category(), category, "{}", entry.name());
            }
        }
    }

    fn parse(s: &str) -> Result<StatusCategory, String> {
        s.parse()
    }

    #[test]
    fn parse_labels() {
        assert_eq!(parse("info"), Ok(StatusCategory::Info));
        assert_eq!(parse("OK"), Ok(StatusCategory::Ok));
        assert_eq!(parse("Redirect"), Ok(StatusCategory::Redirect));
        assert_eq!(parse("client error"), Ok(StatusCategory::ClientError));
        assert_eq!(parse("client-error"), Ok(StatusCategory::ClientError));
        assert_eq!(parse(" SERVER_ERROR "), Ok(StatusCategory::ServerError));
        assert_eq!(parse("4xx"), Ok(StatusCategory::ClientError));
        assert_eq!(parse("1XX"), Ok(StatusCategory::Info));
        assert!(parse("teapot").is_err());
        assert!(parse("6xx").is_err());
    }

    #[test]
    fn display_is_label() {
        assert_eq!(StatusCategory::ClientError.to_string(), "CLIENT ERROR");
        for category in StatusCategory::ALL {
            assert_eq!(parse(&category.to_string()), Ok(category));
        }
    }
}
