use crate::error::ParseError;
use crate::node_id::{parse_identifier, split_namespace, Identifier, NodeId};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A [`NodeId`] extended with a server index and an optional namespace URI,
/// used wherever a reference target may live outside the local server.
///
/// Canonical text prints `svr=<u32>;` first, then `nsu=<uri>;` if a URI is
/// present, else `ns=<u16>;` when the index is non-zero, then the identifier.
/// Each prefix is optional on parse, in that order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExpandedNodeId {
    server_index: u32,
    namespace_uri: Option<String>,
    namespace_index: u16,
    identifier: Identifier,
}

impl ExpandedNodeId {
    pub fn new(
        server_index: u32,
        namespace_uri: Option<String>,
        namespace_index: u16,
        identifier: Identifier,
    ) -> Self {
        Self {
            server_index,
            namespace_uri,
            namespace_index,
            identifier,
        }
    }

    #[inline]
    pub fn server_index(&self) -> u32 {
        self.server_index
    }

    #[inline]
    pub fn namespace_uri(&self) -> Option<&str> {
        self.namespace_uri.as_deref()
    }

    #[inline]
    pub fn namespace_index(&self) -> u16 {
        self.namespace_index
    }

    #[inline]
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// True when the identity refers to the local server.
    #[inline]
    pub fn is_local(&self) -> bool {
        self.server_index == 0
    }

    /// The inner [`NodeId`], available when the identity is local and carries
    /// no namespace URI.
    pub fn local(&self) -> Option<NodeId> {
        if self.is_local() && self.namespace_uri.is_none() {
            Some(NodeId::new(self.namespace_index, self.identifier.clone()))
        } else {
            None
        }
    }

    pub fn parse(text: &str) -> Result<Self, ParseError> {
        if text.is_empty() {
            return Err(ParseError::Empty);
        }
        let (server_index, rest) = match text.strip_prefix("svr=") {
            Some(rest) => {
                let (index, rest) = rest
                    .split_once(';')
                    .ok_or_else(|| ParseError::InvalidServerIndex(text.to_owned()))?;
                let server_index = index
                    .parse::<u32>()
                    .map_err(|_| ParseError::InvalidServerIndex(index.to_owned()))?;
                (server_index, rest)
            }
            None => (0, text),
        };
        let (namespace_uri, rest) = match rest.strip_prefix("nsu=") {
            Some(tail) => {
                let (uri, rest) = tail
                    .split_once(';')
                    .ok_or_else(|| ParseError::UnknownPrefix(text.to_owned()))?;
                (Some(uri.to_owned()), rest)
            }
            None => (None, rest),
        };
        let (namespace_index, rest) = split_namespace(rest)?;
        let identifier = parse_identifier(rest)?;
        Ok(Self {
            server_index,
            namespace_uri,
            namespace_index,
            identifier,
        })
    }
}

impl From<NodeId> for ExpandedNodeId {
    fn from(node_id: NodeId) -> Self {
        Self {
            server_index: 0,
            namespace_uri: None,
            namespace_index: node_id.namespace_index(),
            identifier: node_id.identifier().clone(),
        }
    }
}

impl Display for ExpandedNodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "svr={};", self.server_index)?;
        match &self.namespace_uri {
            Some(uri) => write!(f, "nsu={};", uri)?,
            None if self.namespace_index != 0 => write!(f, "ns={};", self.namespace_index)?,
            None => {}
        }
        write!(f, "{}", self.identifier)
    }
}

impl FromStr for ExpandedNodeId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_canonical_forms() {
        for text in [
            "svr=0;i=2004",
            "svr=3;ns=2;i=19",
            "svr=0;nsu=http://opcfoundation.org/UA/;i=85",
            "svr=1;s=Channel.Point",
            "svr=0;ns=9;b=AQID",
        ] {
            let parsed = ExpandedNodeId::parse(text).unwrap();
            assert_eq!(parsed.to_string(), text, "round trip of {text}");
        }
    }

    #[test]
    fn server_prefix_defaults_to_zero() {
        let parsed = ExpandedNodeId::parse("i=11489").unwrap();
        assert_eq!(parsed, ExpandedNodeId::from(NodeId::numeric(0, 11489)));
        assert!(parsed.is_local());
    }

    #[test]
    fn conversion_from_node_id_is_local() {
        let expanded = ExpandedNodeId::from(NodeId::numeric(0, 2253));
        assert_eq!(expanded.to_string(), "svr=0;i=2253");
        assert_eq!(expanded.local(), Some(NodeId::numeric(0, 2253)));
    }

    #[test]
    fn remote_or_uri_bearing_identities_have_no_local_form() {
        let remote = ExpandedNodeId::parse("svr=4;i=85").unwrap();
        assert!(!remote.is_local());
        assert_eq!(remote.local(), None);

        let with_uri = ExpandedNodeId::parse("nsu=urn:other:namespace;i=85").unwrap();
        assert!(with_uri.is_local());
        assert_eq!(with_uri.local(), None);
    }

    #[test]
    fn rejects_malformed_server_index() {
        assert!(matches!(
            ExpandedNodeId::parse("svr=zz;i=1"),
            Err(ParseError::InvalidServerIndex(_))
        ));
        assert!(matches!(
            ExpandedNodeId::parse("svr=1"),
            Err(ParseError::InvalidServerIndex(_))
        ));
    }
}
