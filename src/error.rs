// SPDX-License-Identifier: MPL-2.0
use crate::domain::page::PageId;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    /// A page list was built without any page.
    EmptyPageList,
    /// Two pages of the same list share an id.
    DuplicatePageId(PageId),
    /// Page ids are positive; zero was supplied.
    InvalidPageId(u32),
    /// The requested page is not part of the page list.
    PageNotFound(PageId),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::EmptyPageList => write!(f, "Page Error: page list is empty"),
            Error::DuplicatePageId(id) => write!(f, "Page Error: duplicate page id {}", id),
            Error::InvalidPageId(raw) => write!(f, "Page Error: invalid page id {}", raw),
            Error::PageNotFound(id) => write!(f, "Page Error: page {} not found", id),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn page_not_found_mentions_id() {
        let id = PageId::new(7).expect("7 is a valid page id");
        let err = Error::PageNotFound(id);
        assert_eq!(format!("{}", err), "Page Error: page 7 not found");
    }
}
