//! Human-readable text for status codes.
//!
//! Both tables are built on first use from the registry and never change
//! afterwards, so lookups can be made from any thread.

use crate::codes;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static STATUS_TEXT: Lazy<HashMap<u16, &'static str>> =
    Lazy::new(|| codes::entries().map(|entry| (entry.code, entry.text)).collect());

static STATUS_TEXT_WITH_PREFIX: Lazy<HashMap<u16, String>> = Lazy::new(|| {
    codes::entries()
        .map(|entry| (entry.code, format!("{}: {}", entry.category(), entry.text)))
        .collect()
});

/// Get the text for a status code, e.g. `Not Found` for 404.
///
/// With `with_prefix` the text starts with the label of the code's class,
/// e.g. `CLIENT ERROR: Not Found`. Codes that are not recognized give
/// `None`, never an empty or placeholder string.
pub fn status_text(code: u16, with_prefix: bool) -> Option<&'static str> {
    if with_prefix {
        STATUS_TEXT_WITH_PREFIX.get(&code).map(String::as_str)
    } else {
        STATUS_TEXT.get(&code).copied()
    }
}

/// Same as `status_text(code, false)`.
pub fn status_text_plain(code: u16) -> Option<&'static str> {
    status_text(code, false)
}

/// Same as `status_text(code, true)`.
pub fn status_text_with_prefix(code: u16) -> Option<&'static str> {
    status_text(code, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{all_status_codes, StatusCategory};

    const PREFIXES: [&str; 5] = ["INFO:", "OK:", "REDIRECT:", "CLIENT ERROR:", "SERVER ERROR:"];

    #[test]
    fn every_code_has_text() {
        for (name, &code) in all_status_codes() {
            let text = status_text(code, false).unwrap_or_else(|| panic!("no text for {name}"));
            assert!(!text.is_empty(), "{name}");
        }
    }

    #[test]
    fn every_code_has_prefixed_text() {
        for &code in all_status_codes().values() {
            let text = status_text(code, true).unwrap().to_ascii_uppercase();
            assert!(PREFIXES.iter().any(|prefix| text.starts_with(prefix)), "{text}");
        }
    }

    #[test]
    fn prefix_matches_range() {
        for &code in all_status_codes().values() {
            let expected = match code {
                100..=199 => "INFO: ",
                200..=299 => "OK: ",
                300..=399 => "REDIRECT: ",
                400..=499 => "CLIENT ERROR: ",
                500..=599 => "SERVER ERROR: ",
                _ => panic!("{code} out of range"),
            };
            let plain = status_text(code, false).unwrap();
            assert_eq!(status_text(code, true).unwrap(), format!("{expected}{plain}"));
        }
    }

    #[test]
    fn examples() {
        assert_eq!(status_text(404, false), Some("Not Found"));
        assert_eq!(status_text(404, true), Some("CLIENT ERROR: Not Found"));
        assert_eq!(status_text(200, false), Some("OK"));
        assert_eq!(status_text(200, true), Some("OK: OK"));
        assert_eq!(status_text(100, true), Some("INFO: Continue"));
        assert_eq!(status_text(418, false), Some("I'm a teapot"));
        assert_eq!(status_text(308, true), Some("REDIRECT: Permanent Redirect"));
        assert_eq!(status_text(511, true), Some("SERVER ERROR: Network Authentication Required"));
        assert_eq!(status_text_plain(crate::GONE), Some("Gone"));
        assert_eq!(status_text_with_prefix(crate::CREATED), Some("OK: Created"));
    }

    #[test]
    fn unknown_codes() {
        for code in [0, 99, 199, 420, 599, 600, 999, u16::MAX] {
            assert_eq!(status_text(code, false), None);
            assert_eq!(status_text(code, true), None);
        }
    }

    #[test]
    fn repeated_calls_agree() {
        for code in [200, 404, 999] {
            for with_prefix in [false, true] {
                let first = status_text(code, with_prefix);
                assert_eq!(status_text(code, with_prefix), first);
                assert_eq!(status_text(code, with_prefix), first);
            }
        }
    }

    #[test]
    fn lookups_from_many_threads() {
        let handles: Vec<_> = StatusCategory::ALL
            .into_iter()
            .map(|category| {
                std::thread::spawn(move || {
                    category
                        .entries()
                        .iter()
                        .map(|entry| status_text(entry.code, true))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for (handle, category) in handles.into_iter().zip(StatusCategory::ALL) {
            for text in handle.join().unwrap() {
                assert!(text.unwrap().starts_with(category.label()));
            }
        }
    }
}
