use crate::error::ParseError;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// The identifier payload of a [`NodeId`].
///
/// The canonical text prefixes are `i=` (numeric), `s=` (string), `g=` (guid)
/// and `b=` (opaque, base64 standard alphabet with padding).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Identifier {
    Numeric(u32),
    String(String),
    Guid(Uuid),
    Opaque(Bytes),
}

impl Identifier {
    pub fn is_null(&self) -> bool {
        match self {
            Identifier::Numeric(v) => *v == 0,
            Identifier::String(s) => s.is_empty(),
            Identifier::Guid(g) => g.is_nil(),
            Identifier::Opaque(b) => b.is_empty(),
        }
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(v) => write!(f, "i={}", v),
            Identifier::String(s) => write!(f, "s={}", s),
            Identifier::Guid(g) => write!(f, "g={}", g.hyphenated()),
            Identifier::Opaque(b) => write!(f, "b={}", BASE64.encode(b)),
        }
    }
}

/// A node identity within a server: a namespace index plus an identifier.
///
/// The canonical text form always prints the namespace, `ns=<u16>;` followed
/// by the identifier, and `parse(format(x)) == x` holds for every identifier
/// kind and namespace index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId {
    namespace_index: u16,
    identifier: Identifier,
}

impl NodeId {
    /// Null numeric identity in namespace 0.
    pub const NULL_NUMERIC: NodeId = NodeId {
        namespace_index: 0,
        identifier: Identifier::Numeric(0),
    };
    /// Null string identity in namespace 0.
    pub const NULL_STRING: NodeId = NodeId {
        namespace_index: 0,
        identifier: Identifier::String(String::new()),
    };
    /// Null guid identity in namespace 0.
    pub const NULL_GUID: NodeId = NodeId {
        namespace_index: 0,
        identifier: Identifier::Guid(Uuid::nil()),
    };
    /// Null opaque identity in namespace 0.
    pub const NULL_OPAQUE: NodeId = NodeId {
        namespace_index: 0,
        identifier: Identifier::Opaque(Bytes::new()),
    };

    pub fn new(namespace_index: u16, identifier: Identifier) -> Self {
        Self {
            namespace_index,
            identifier,
        }
    }

    pub fn numeric(namespace_index: u16, value: u32) -> Self {
        Self::new(namespace_index, Identifier::Numeric(value))
    }

    pub fn string(namespace_index: u16, value: impl Into<String>) -> Self {
        Self::new(namespace_index, Identifier::String(value.into()))
    }

    pub fn guid(namespace_index: u16, value: Uuid) -> Self {
        Self::new(namespace_index, Identifier::Guid(value))
    }

    pub fn opaque(namespace_index: u16, value: impl Into<Bytes>) -> Self {
        Self::new(namespace_index, Identifier::Opaque(value.into()))
    }

    #[inline]
    pub fn namespace_index(&self) -> u16 {
        self.namespace_index
    }

    #[inline]
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn is_null(&self) -> bool {
        self.namespace_index == 0 && self.identifier.is_null()
    }

    /// Parses the canonical text form. The `ns=<u16>;` prefix is optional and
    /// defaults to namespace 0.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        if text.is_empty() {
            return Err(ParseError::Empty);
        }
        let (namespace_index, rest) = split_namespace(text)?;
        let identifier = parse_identifier(rest)?;
        Ok(Self {
            namespace_index,
            identifier,
        })
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ns={};{}", self.namespace_index, self.identifier)
    }
}

impl FromStr for NodeId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

pub(crate) fn split_namespace(text: &str) -> Result<(u16, &str), ParseError> {
    match text.strip_prefix("ns=") {
        Some(rest) => {
            let (index, identifier) = rest
                .split_once(';')
                .ok_or_else(|| ParseError::InvalidNamespaceIndex(text.to_owned()))?;
            let namespace_index = index
                .parse::<u16>()
                .map_err(|_| ParseError::InvalidNamespaceIndex(index.to_owned()))?;
            Ok((namespace_index, identifier))
        }
        None => Ok((0, text)),
    }
}

pub(crate) fn parse_identifier(text: &str) -> Result<Identifier, ParseError> {
    if text.is_empty() {
        return Err(ParseError::Empty);
    }
    if let Some(value) = text.strip_prefix("i=") {
        let value = value
            .parse::<u32>()
            .map_err(|_| ParseError::InvalidNumeric(text.to_owned()))?;
        return Ok(Identifier::Numeric(value));
    }
    if let Some(value) = text.strip_prefix("s=") {
        return Ok(Identifier::String(value.to_owned()));
    }
    if let Some(value) = text.strip_prefix("g=") {
        let value = Uuid::parse_str(value).map_err(|_| ParseError::InvalidGuid(text.to_owned()))?;
        return Ok(Identifier::Guid(value));
    }
    if let Some(value) = text.strip_prefix("b=") {
        let value = BASE64
            .decode(value)
            .map_err(|_| ParseError::InvalidOpaque(text.to_owned()))?;
        return Ok(Identifier::Opaque(Bytes::from(value)));
    }
    Err(ParseError::UnknownPrefix(text.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_identifier_kind() {
        let ids = [
            NodeId::numeric(0, 2253),
            NodeId::numeric(42, u32::MAX),
            NodeId::string(1, "Channel.Device.Point"),
            NodeId::string(0, "with;semicolon=and=equals"),
            NodeId::guid(7, Uuid::from_u128(0x0102_0304_0506_0708_090a_0b0c_0d0e_0f10)),
            NodeId::opaque(65535, Bytes::from_static(b"\x00\xff\x10raw")),
        ];
        for id in ids {
            let text = id.to_string();
            assert_eq!(NodeId::parse(&text).unwrap(), id, "round trip of {text}");
        }
    }

    #[test]
    fn format_always_prints_namespace() {
        assert_eq!(NodeId::numeric(0, 85).to_string(), "ns=0;i=85");
        assert_eq!(NodeId::numeric(2, 85).to_string(), "ns=2;i=85");
    }

    #[test]
    fn namespace_prefix_is_optional_on_parse() {
        assert_eq!(NodeId::parse("i=11489").unwrap(), NodeId::numeric(0, 11489));
        assert_eq!(
            NodeId::parse("ns=3;s=abc").unwrap(),
            NodeId::string(3, "abc")
        );
    }

    #[test]
    fn string_identifier_keeps_remainder_verbatim() {
        let id = NodeId::parse("ns=1;s=a;b=c").unwrap();
        assert_eq!(id, NodeId::string(1, "a;b=c"));
    }

    #[test]
    fn guid_renders_lowercase_hyphenated() {
        let uuid = Uuid::parse_str("72962B91-FA75-4AE6-8D28-B404DC7DAF63").unwrap();
        assert_eq!(
            NodeId::guid(0, uuid).to_string(),
            "ns=0;g=72962b91-fa75-4ae6-8d28-b404dc7daf63"
        );
    }

    #[test]
    fn rejects_malformed_text() {
        assert_eq!(NodeId::parse(""), Err(ParseError::Empty));
        assert!(matches!(
            NodeId::parse("x=1"),
            Err(ParseError::UnknownPrefix(_))
        ));
        assert!(matches!(
            NodeId::parse("i=abc"),
            Err(ParseError::InvalidNumeric(_))
        ));
        assert!(matches!(
            NodeId::parse("i=4294967296"),
            Err(ParseError::InvalidNumeric(_))
        ));
        assert!(matches!(
            NodeId::parse("ns=65536;i=1"),
            Err(ParseError::InvalidNamespaceIndex(_))
        ));
        assert!(matches!(
            NodeId::parse("ns=1i=1"),
            Err(ParseError::InvalidNamespaceIndex(_))
        ));
        assert!(matches!(
            NodeId::parse("g=not-a-guid"),
            Err(ParseError::InvalidGuid(_))
        ));
        assert!(matches!(
            NodeId::parse("b=@@@"),
            Err(ParseError::InvalidOpaque(_))
        ));
    }

    #[test]
    fn null_values_per_kind() {
        assert!(NodeId::NULL_NUMERIC.is_null());
        assert!(NodeId::NULL_STRING.is_null());
        assert!(NodeId::NULL_GUID.is_null());
        assert!(NodeId::NULL_OPAQUE.is_null());
        assert!(!NodeId::numeric(0, 1).is_null());
        assert!(!NodeId::string(1, "").is_null());
    }
}
