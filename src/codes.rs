//! Named constants for every recognized HTTP status code, grouped by class.

use crate::category::StatusCategory;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// A recognized status code together with its constant name and its short
/// reason phrase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StatusEntry {
    pub(crate) name: &'static str,
    pub(crate) code: u16,
    pub(crate) text: &'static str,
}

impl StatusEntry {
    /// Name of the constant, e.g. `NOT_FOUND`.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn code(&self) -> u16 {
        self.code
    }

    /// Short reason phrase, e.g. `Not Found`.
    pub const fn text(&self) -> &'static str {
        self.text
    }

    /// The class this entry belongs to.
    pub fn category(&self) -> StatusCategory {
        match StatusCategory::from_code(self.code) {
            Some(category) => category,
            // every table is range checked at compile time
            None => unreachable!("status code {} outside 100..600", self.code),
        }
    }
}

/// Declares one `u16` constant per status code and a table of the
/// corresponding [`StatusEntry`] values, so names and texts are written once.
macro_rules! status_codes {
    (
        $table:ident;
        $( $(#[$attr:meta])* $name:ident = $code:literal, $text:literal; )*
    ) => {
        $(
            $(#[$attr])*
            pub const $name: u16 = $code;
        )*

        /// Every status code of this class in ascending order.
        pub const $table: &[$crate::codes::StatusEntry] = &[
            $(
                $crate::codes::StatusEntry {
                    name: stringify!($name),
                    code: $code,
                    text: $text,
                },
            )*
        ];
    };
}

pub mod client_error;
pub mod information;
pub mod redirection;
pub mod server_error;
pub mod successful;

pub use self::{client_error::*, information::*, redirection::*, server_error::*, successful::*};

/// The category tables in code order, each paired with the class it must
/// belong to.
pub(crate) const TABLES: [(StatusCategory, &[StatusEntry]); 5] = [
    (StatusCategory::Info, INFORMATION),
    (StatusCategory::Ok, SUCCESSFUL),
    (StatusCategory::Redirect, REDIRECTION),
    (StatusCategory::ClientError, CLIENT_ERROR),
    (StatusCategory::ServerError, SERVER_ERROR),
];

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn in_category(code: u16, category: StatusCategory) -> bool {
    match StatusCategory::from_code(code) {
        Some(found) => found as u8 == category as u8,
        None => false,
    }
}

/// Checks all tables together: names and codes are unique across classes,
/// each code lies in the range of its class and each has a phrase.
const fn registry_is_consistent(tables: &[(StatusCategory, &[StatusEntry])]) -> bool {
    let mut t = 0;
    while t < tables.len() {
        let (category, entries) = tables[t];
        let mut e = 0;
        while e < entries.len() {
            let entry = entries[e];
            if !in_category(entry.code, category) || entry.text.is_empty() {
                return false;
            }
            // compare against every entry that comes later, in this table or the next ones
            let mut u = t;
            let mut f = e + 1;
            while u < tables.len() {
                let others = tables[u].1;
                while f < others.len() {
                    if str_eq(entry.name, others[f].name) || entry.code == others[f].code {
                        return false;
                    }
                    f += 1;
                }
                u += 1;
                f = 0;
            }
            e += 1;
        }
        t += 1;
    }
    true
}

const _: () = assert!(
    registry_is_consistent(&TABLES),
    "status code tables contain a duplicate name or code, a code outside its class, or an empty text"
);

static ALL_STATUS_CODES: Lazy<BTreeMap<&'static str, u16>> =
    Lazy::new(|| entries().map(|entry| (entry.name, entry.code)).collect());

/// The aggregate name to code mapping of all five classes.
pub fn all_status_codes() -> &'static BTreeMap<&'static str, u16> {
    &ALL_STATUS_CODES
}

/// Every recognized status code in ascending order.
pub fn entries() -> impl Iterator<Item = &'static StatusEntry> {
    let tables: &'static [_] = &TABLES;
    tables.iter().flat_map(|&(_, table)| table.iter())
}

/// Find the entry for a status code, if it is a recognized one.
pub fn entry(code: u16) -> Option<&'static StatusEntry> {
    let tables: &'static [(StatusCategory, &[StatusEntry])] = &TABLES;
    let &(_, table) = tables
        .iter()
        .find(|(category, _)| in_category(code, *category))?;
    table.iter().find(|entry| entry.code == code)
}

/// The name of the constant for a status code, e.g. `NOT_FOUND` for 404.
pub fn status_name(code: u16) -> Option<&'static str> {
    entry(code).map(|entry| entry.name)
}
