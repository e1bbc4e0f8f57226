// SPDX-License-Identifier: MPL-2.0
use std::fmt;

use crate::application::port::CatalogError;
use crate::domain::graph::GraphDocumentError;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Document(GraphDocumentError),
    Catalog(CatalogError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Document(e) => write!(f, "Document Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
        }
    }
}

impl From<GraphDocumentError> for Error {
    fn from(err: GraphDocumentError) -> Self {
        Error::Document(err)
    }
}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

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
    fn from_document_error_produces_document_variant() {
        let err: Error = GraphDocumentError::Malformed("unexpected token".into()).into();
        match err {
            Error::Document(inner) => {
                assert!(format!("{}", inner).contains("unexpected token"));
            }
            _ => panic!("expected Document variant"),
        }
    }

    #[test]
    fn from_catalog_error_produces_catalog_variant() {
        let err: Error = CatalogError::Unavailable("connection refused".into()).into();
        assert!(format!("{}", err).contains("connection refused"));
    }
}
