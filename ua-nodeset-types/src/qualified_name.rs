use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A namespace-qualified browse name, rendered as `<namespace>:<name>`.
///
/// A bare name parses into namespace 0, and the name itself may contain `:`
/// after the first separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualifiedName {
    namespace_index: u16,
    name: String,
}

impl QualifiedName {
    /// Null browse name: empty name in namespace 0.
    pub const NULL: QualifiedName = QualifiedName {
        namespace_index: 0,
        name: String::new(),
    };

    pub fn new(namespace_index: u16, name: impl Into<String>) -> Self {
        Self {
            namespace_index,
            name: name.into(),
        }
    }

    #[inline]
    pub fn namespace_index(&self) -> u16 {
        self.namespace_index
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_null(&self) -> bool {
        self.namespace_index == 0 && self.name.is_empty()
    }

    pub fn parse(text: &str) -> Result<Self, ParseError> {
        match text.split_once(':') {
            Some((index, name)) => {
                let namespace_index = index
                    .parse::<u16>()
                    .map_err(|_| ParseError::InvalidQualifiedName(text.to_owned()))?;
                Ok(Self::new(namespace_index, name))
            }
            None => Ok(Self::new(0, text)),
        }
    }
}

impl Display for QualifiedName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace_index, self.name)
    }
}

impl FromStr for QualifiedName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
