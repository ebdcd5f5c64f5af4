use crate::error::{Error, Result};
use crate::node_class::NodeClass;
use crate::nodes::Node;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;
use ua_nodeset_types::NodeId;

/// What to do when a node id is registered twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Refuse the second registration.
    #[default]
    Reject,
    /// Replace the stored node with the new one.
    Replace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ManagerConfig {
    #[serde(default)]
    pub on_duplicate: DuplicatePolicy,
}

/// Node registry keyed by node id.
///
/// Lookups clone the stored node, so readers never hold a map guard across
/// their own work.
#[derive(Debug, Default)]
pub struct NodeManager {
    nodes: DashMap<NodeId, Node>,
    config: ManagerConfig,
}

impl NodeManager {
    pub fn new(config: ManagerConfig) -> Self {
        Self {
            nodes: DashMap::new(),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Registers a node under its own id. A second registration of the same
    /// id follows the configured [`DuplicatePolicy`].
    pub fn insert(&self, node: Node) -> Result<()> {
        let node_id = node.node_id().clone();
        match self.nodes.entry(node_id) {
            Entry::Vacant(entry) => {
                entry.insert(node);
                Ok(())
            }
            Entry::Occupied(mut entry) => match self.config.on_duplicate {
                DuplicatePolicy::Reject => Err(Error::DuplicateNode(entry.key().clone())),
                DuplicatePolicy::Replace => {
                    debug!(node_id = %entry.key(), "replacing registered node");
                    entry.insert(node);
                    Ok(())
                }
            },
        }
    }

    /// Clones the node registered under `node_id`, if any.
    pub fn get(&self, node_id: &NodeId) -> Option<Node> {
        self.nodes.get(node_id).map(|entry| entry.value().clone())
    }

    pub fn contains(&self, node_id: &NodeId) -> bool {
        self.nodes.contains_key(node_id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ids of every registered node, in no particular order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Number of registered nodes per class. Classes with no nodes are
    /// omitted.
    pub fn class_counts(&self) -> HashMap<NodeClass, usize> {
        let mut counts = HashMap::new();
        for entry in self.nodes.iter() {
            *counts.entry(entry.value().node_class()).or_insert(0) += 1;
        }
        counts
    }

    /// Total number of stored references across all nodes. Mirror halves
    /// count separately.
    pub fn reference_count(&self) -> usize {
        self.nodes
            .iter()
            .map(|entry| entry.value().references().len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::NodeContext;
    use crate::nodes::{NodeBase, ObjectNode, ObjectTypeNode};
    use ua_nodeset_types::{LocalizedText, QualifiedName};

    fn object(id: u32, name: &str) -> Node {
        let base = NodeBase::new(
            &NodeContext::standard(),
            NodeId::numeric(0, id),
            QualifiedName::new(0, name),
            LocalizedText::english(name),
        )
        .unwrap();
        Node::from(ObjectNode::new(base))
    }

    fn object_type(id: u32, name: &str) -> Node {
        let base = NodeBase::new(
            &NodeContext::standard(),
            NodeId::numeric(0, id),
            QualifiedName::new(0, name),
            LocalizedText::english(name),
        )
        .unwrap();
        Node::from(ObjectTypeNode::new(base, false))
    }

    #[test]
    fn insert_and_get_round_trip() {
        let manager = NodeManager::default();
        manager.insert(object(85, "Objects")).unwrap();
        assert!(manager.contains(&NodeId::numeric(0, 85)));
        assert_eq!(manager.len(), 1);
        let node = manager.get(&NodeId::numeric(0, 85)).unwrap();
        assert_eq!(node.browse_name(), &QualifiedName::new(0, "Objects"));
        assert!(manager.get(&NodeId::numeric(0, 86)).is_none());
    }

    #[test]
    fn reject_policy_refuses_a_second_registration() {
        let manager = NodeManager::default();
        manager.insert(object(85, "Objects")).unwrap();
        let err = manager.insert(object(85, "Shadow")).unwrap_err();
        assert!(matches!(err, Error::DuplicateNode(id) if id == NodeId::numeric(0, 85)));
        let kept = manager.get(&NodeId::numeric(0, 85)).unwrap();
        assert_eq!(kept.browse_name(), &QualifiedName::new(0, "Objects"));
    }

    #[test]
    fn replace_policy_overwrites() {
        let manager = NodeManager::new(ManagerConfig {
            on_duplicate: DuplicatePolicy::Replace,
        });
        manager.insert(object(85, "Objects")).unwrap();
        manager.insert(object(85, "Replacement")).unwrap();
        assert_eq!(manager.len(), 1);
        let kept = manager.get(&NodeId::numeric(0, 85)).unwrap();
        assert_eq!(kept.browse_name(), &QualifiedName::new(0, "Replacement"));
    }

    #[test]
    fn class_counts_group_by_variant() {
        let manager = NodeManager::default();
        manager.insert(object(85, "Objects")).unwrap();
        manager.insert(object(86, "Types")).unwrap();
        manager.insert(object_type(61, "FolderType")).unwrap();
        let counts = manager.class_counts();
        assert_eq!(counts.get(&NodeClass::Object), Some(&2));
        assert_eq!(counts.get(&NodeClass::ObjectType), Some(&1));
        assert_eq!(counts.get(&NodeClass::View), None);
    }

    #[test]
    fn duplicate_policy_serde_uses_snake_case() {
        let json = serde_json::to_string(&DuplicatePolicy::Reject).unwrap();
        assert_eq!(json, "\"reject\"");
        let back: DuplicatePolicy = serde_json::from_str("\"replace\"").unwrap();
        assert_eq!(back, DuplicatePolicy::Replace);
    }
}
