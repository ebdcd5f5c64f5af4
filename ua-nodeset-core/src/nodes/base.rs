use crate::context::NodeContext;
use crate::error::{Error, Result};
use crate::reference::Reference;
use serde::{Deserialize, Serialize};
use ua_nodeset_types::{LocalizedText, NodeId, QualifiedName};

/// Attributes and the owned reference set common to every node class.
///
/// The reference collection is a set keyed by the full
/// `(source, reference_type, target, is_forward)` tuple, with insertion order
/// preserved for read views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeBase {
    node_id: NodeId,
    browse_name: QualifiedName,
    display_name: LocalizedText,
    description: LocalizedText,
    write_mask: u32,
    user_write_mask: u32,
    access_restrictions: Option<u16>,
    references: Vec<Reference>,
}

impl NodeBase {
    /// Builds the common attribute block. A node id whose namespace differs
    /// from the context's is a fatal configuration error.
    pub fn new(
        context: &NodeContext,
        node_id: NodeId,
        browse_name: QualifiedName,
        display_name: LocalizedText,
    ) -> Result<Self> {
        if node_id.namespace_index() != context.namespace_index {
            return Err(Error::NamespaceMismatch {
                node: node_id,
                context_namespace: context.namespace_index,
            });
        }
        Ok(Self {
            node_id,
            browse_name,
            display_name,
            description: LocalizedText::NULL,
            write_mask: 0,
            user_write_mask: 0,
            access_restrictions: None,
            references: Vec::new(),
        })
    }

    pub fn with_description(mut self, description: LocalizedText) -> Self {
        self.description = description;
        self
    }

    pub fn with_write_masks(mut self, write_mask: u32, user_write_mask: u32) -> Self {
        self.write_mask = write_mask;
        self.user_write_mask = user_write_mask;
        self
    }

    pub fn with_access_restrictions(mut self, access_restrictions: u16) -> Self {
        self.access_restrictions = Some(access_restrictions);
        self
    }

    #[inline]
    pub fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    #[inline]
    pub fn browse_name(&self) -> &QualifiedName {
        &self.browse_name
    }

    #[inline]
    pub fn display_name(&self) -> &LocalizedText {
        &self.display_name
    }

    #[inline]
    pub fn description(&self) -> &LocalizedText {
        &self.description
    }

    #[inline]
    pub fn write_mask(&self) -> u32 {
        self.write_mask
    }

    #[inline]
    pub fn user_write_mask(&self) -> u32 {
        self.user_write_mask
    }

    #[inline]
    pub fn access_restrictions(&self) -> Option<u16> {
        self.access_restrictions
    }

    /// Adds a reference, returning whether it was newly inserted. Re-adding
    /// an equal 4-tuple is a no-op.
    pub fn add_reference(&mut self, reference: Reference) -> bool {
        if self.references.contains(&reference) {
            return false;
        }
        self.references.push(reference);
        true
    }

    /// Read view of the stored references, in insertion order.
    #[inline]
    pub fn references(&self) -> &[Reference] {
        &self.references
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ua_nodeset_types::ExpandedNodeId;

    fn base() -> NodeBase {
        NodeBase::new(
            &NodeContext::standard(),
            NodeId::numeric(0, 12543),
            QualifiedName::new(0, "OpenWithMasks"),
            LocalizedText::english("OpenWithMasks"),
        )
        .unwrap()
    }

    fn component_of_trust_list() -> Reference {
        Reference::new(
            NodeId::numeric(0, 12543),
            NodeId::numeric(0, 47),
            ExpandedNodeId::from(NodeId::numeric(0, 12522)),
            false,
        )
    }

    #[test]
    fn add_reference_is_idempotent() {
        let mut base = base();
        assert!(base.add_reference(component_of_trust_list()));
        assert!(!base.add_reference(component_of_trust_list()));
        assert_eq!(base.references().len(), 1);
    }

    #[test]
    fn references_preserve_insertion_order() {
        let mut base = base();
        let first = component_of_trust_list();
        let second = Reference::new(
            NodeId::numeric(0, 12543),
            NodeId::numeric(0, 37),
            ExpandedNodeId::from(NodeId::numeric(0, 78)),
            true,
        );
        base.add_reference(first.clone());
        base.add_reference(second.clone());
        base.add_reference(first.clone());
        assert_eq!(base.references(), &[first, second]);
    }

    #[test]
    fn mismatched_namespace_is_rejected() {
        let err = NodeBase::new(
            &NodeContext::standard(),
            NodeId::numeric(2, 1),
            QualifiedName::new(0, "X"),
            LocalizedText::english("X"),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::NamespaceMismatch {
                context_namespace: 0,
                ..
            }
        ));
    }
}
