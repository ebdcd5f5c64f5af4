use crate::error::{Error, Result};
use crate::manager::NodeManager;
use tracing::debug;

/// Checks that every local reference between two registered nodes is stored
/// in both directions.
///
/// References to remote servers, to URI-qualified namespaces and to
/// unregistered nodes are outside the audit. The first violation is returned
/// as [`Error::MissingMirror`] carrying the un-mirrored reference.
pub fn verify_mirrors(manager: &NodeManager) -> Result<()> {
    let mut audited = 0usize;
    for node_id in manager.node_ids() {
        let Some(node) = manager.get(&node_id) else {
            continue;
        };
        for reference in node.references() {
            let Some(mirror) = reference.mirrored() else {
                continue;
            };
            let Some(counterpart) = manager.get(mirror.source()) else {
                continue;
            };
            if !counterpart.references().contains(&mirror) {
                return Err(Error::MissingMirror(reference.clone()));
            }
            audited += 1;
        }
    }
    debug!(references = audited, "mirror audit passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::NodeContext;
    use crate::nodes::{Node, NodeBase, ObjectNode};
    use crate::reference::Reference;
    use ua_nodeset_types::{ExpandedNodeId, LocalizedText, NodeId, QualifiedName};

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

    fn organizes(source: u32, target: u32, forward: bool) -> Reference {
        Reference::new(
            NodeId::numeric(0, source),
            NodeId::numeric(0, 35),
            ExpandedNodeId::from(NodeId::numeric(0, target)),
            forward,
        )
    }

    #[test]
    fn mirrored_pair_passes() {
        let manager = NodeManager::default();
        let mut objects = object(85, "Objects");
        objects.add_reference(organizes(85, 2253, true));
        let mut server = object(2253, "Server");
        server.add_reference(organizes(2253, 85, false));
        manager.insert(objects).unwrap();
        manager.insert(server).unwrap();
        assert!(verify_mirrors(&manager).is_ok());
    }

    #[test]
    fn missing_half_is_reported() {
        let manager = NodeManager::default();
        let mut objects = object(85, "Objects");
        objects.add_reference(organizes(85, 2253, true));
        manager.insert(objects).unwrap();
        manager.insert(object(2253, "Server")).unwrap();
        let err = verify_mirrors(&manager).unwrap_err();
        match err {
            Error::MissingMirror(reference) => {
                assert_eq!(reference.source(), &NodeId::numeric(0, 85));
                assert!(reference.is_forward());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unregistered_target_is_outside_the_audit() {
        let manager = NodeManager::default();
        let mut objects = object(85, "Objects");
        objects.add_reference(organizes(85, 2253, true));
        manager.insert(objects).unwrap();
        assert!(verify_mirrors(&manager).is_ok());
    }

    #[test]
    fn remote_target_is_outside_the_audit() {
        let manager = NodeManager::default();
        let mut objects = object(85, "Objects");
        objects.add_reference(Reference::new(
            NodeId::numeric(0, 85),
            NodeId::numeric(0, 35),
            ExpandedNodeId::new(1, None, 0, NodeId::numeric(0, 2253).identifier().clone()),
            true,
        ));
        manager.insert(objects).unwrap();
        assert!(verify_mirrors(&manager).is_ok());
    }
}
