use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use ua_nodeset_types::{ExpandedNodeId, NodeId};

/// Namespace URI of the standard OPC UA namespace.
pub const STANDARD_NAMESPACE_URI: &str = "http://opcfoundation.org/UA/";

static STANDARD_CONTEXT: Lazy<Arc<NodeContext>> =
    Lazy::new(|| Arc::new(NodeContext::new(0, STANDARD_NAMESPACE_URI)));

/// The namespace a set of nodes is built against. Shared via `Arc` and
/// injected explicitly wherever nodes are constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeContext {
    pub namespace_index: u16,
    pub namespace_uri: String,
}

impl NodeContext {
    pub fn new(namespace_index: u16, namespace_uri: impl Into<String>) -> Self {
        Self {
            namespace_index,
            namespace_uri: namespace_uri.into(),
        }
    }

    /// The standard namespace-0 context.
    pub fn standard() -> Arc<NodeContext> {
        Arc::clone(&STANDARD_CONTEXT)
    }

    /// Resolves a reference target to a local [`NodeId`], when it refers to
    /// this server: either a plain local identity, or one qualified with this
    /// context's namespace URI.
    pub fn resolve(&self, target: &ExpandedNodeId) -> Option<NodeId> {
        if !target.is_local() {
            return None;
        }
        match target.namespace_uri() {
            Some(uri) if uri == self.namespace_uri => Some(NodeId::new(
                self.namespace_index,
                target.identifier().clone(),
            )),
            Some(_) => None,
            None => Some(NodeId::new(
                target.namespace_index(),
                target.identifier().clone(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_context_is_namespace_zero() {
        let context = NodeContext::standard();
        assert_eq!(context.namespace_index, 0);
        assert_eq!(context.namespace_uri, STANDARD_NAMESPACE_URI);
    }

    #[test]
    fn resolves_local_targets() {
        let context = NodeContext::standard();
        let target = ExpandedNodeId::parse("svr=0;i=2253").unwrap();
        assert_eq!(context.resolve(&target), Some(NodeId::numeric(0, 2253)));
    }

    #[test]
    fn resolves_matching_uri_targets() {
        let context = NodeContext::standard();
        let target =
            ExpandedNodeId::parse("svr=0;nsu=http://opcfoundation.org/UA/;i=85").unwrap();
        assert_eq!(context.resolve(&target), Some(NodeId::numeric(0, 85)));
    }

    #[test]
    fn rejects_remote_and_foreign_uri_targets() {
        let context = NodeContext::standard();
        assert_eq!(
            context.resolve(&ExpandedNodeId::parse("svr=3;i=85").unwrap()),
            None
        );
        assert_eq!(
            context.resolve(&ExpandedNodeId::parse("nsu=urn:vendor:model;i=85").unwrap()),
            None
        );
    }
}
