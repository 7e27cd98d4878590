// src/account.rs
//! DMM account session: a cookie source and nothing else. Login happens
//! elsewhere; the scraper only replays the cookies it is handed.

use crate::config::consts::REGION_FLAG;

/// What the cookie source yielded: one preassembled header string, or an
/// ordered list of cookie pairs.
#[derive(Clone, Debug)]
pub enum Cookie {
    Single(String),
    Many(Vec<String>),
}

impl Cookie {
    /// Build the `cookie` header value; lists join with `"; "`.
    pub fn header(&self) -> String {
        match self {
            Cookie::Single(c) => c.clone(),
            Cookie::Many(list) => list.join("; "),
        }
    }
}

/// An authenticated DMM account. Immutable once constructed.
pub struct Account {
    cookie: Cookie,
}

impl Account {
    pub fn new(cookie: Cookie) -> Self {
        Self { cookie }
    }

    pub fn cookie_header(&self) -> String {
        self.cookie.header()
    }

    /// Whether the Japan region flag (`ccky=1`) is set in the cookie header.
    pub fn has_region_flag(&self) -> bool {
        self.cookie_header().contains(REGION_FLAG)
    }
}
