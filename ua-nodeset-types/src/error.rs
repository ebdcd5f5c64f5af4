use thiserror::Error;

/// Errors raised while parsing the canonical text form of an identity type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty identity text")]
    Empty,
    #[error("unknown identifier prefix in {0:?}")]
    UnknownPrefix(String),
    #[error("invalid namespace index: {0:?}")]
    InvalidNamespaceIndex(String),
    #[error("invalid numeric identifier: {0:?}")]
    InvalidNumeric(String),
    #[error("invalid guid identifier: {0:?}")]
    InvalidGuid(String),
    #[error("invalid opaque identifier: {0:?}")]
    InvalidOpaque(String),
    #[error("invalid server index: {0:?}")]
    InvalidServerIndex(String),
    #[error("invalid qualified name: {0:?}")]
    InvalidQualifiedName(String),
}
