use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use ua_nodeset_types::{ExpandedNodeId, NodeId};

/// A typed, directed edge as stored on a specific node.
///
/// `is_forward` records the direction from the perspective of the storing
/// node: `true` when the edge runs from this node toward the target, `false`
/// when this is the local record of an edge that conceptually runs from the
/// target to this node. Identity, equality and hashing are exactly the
/// 4-tuple; a reference never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    source: NodeId,
    reference_type: NodeId,
    target: ExpandedNodeId,
    is_forward: bool,
}

impl Reference {
    pub fn new(
        source: NodeId,
        reference_type: NodeId,
        target: ExpandedNodeId,
        is_forward: bool,
    ) -> Self {
        Self {
            source,
            reference_type,
            target,
            is_forward,
        }
    }

    #[inline]
    pub fn source(&self) -> &NodeId {
        &self.source
    }

    #[inline]
    pub fn reference_type(&self) -> &NodeId {
        &self.reference_type
    }

    #[inline]
    pub fn target(&self) -> &ExpandedNodeId {
        &self.target
    }

    #[inline]
    pub fn is_forward(&self) -> bool {
        self.is_forward
    }

    /// The 4-tuple the target node must store for this edge to be mirror
    /// consistent, when the target is local.
    pub fn mirrored(&self) -> Option<Reference> {
        let target = self.target.local()?;
        Some(Reference {
            source: target,
            reference_type: self.reference_type.clone(),
            target: ExpandedNodeId::from(self.source.clone()),
            is_forward: !self.is_forward,
        })
    }
}

impl Display for Reference {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} --{}--> {}, {})",
            self.source,
            self.reference_type,
            self.target,
            if self.is_forward { "forward" } else { "inverse" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn reference(source: u32, reference_type: u32, target: u32, forward: bool) -> Reference {
        Reference::new(
            NodeId::numeric(0, source),
            NodeId::numeric(0, reference_type),
            ExpandedNodeId::from(NodeId::numeric(0, target)),
            forward,
        )
    }

    #[test]
    fn equality_is_the_full_tuple() {
        let a = reference(12543, 47, 12522, false);
        assert_eq!(a, reference(12543, 47, 12522, false));
        assert_ne!(a, reference(12543, 47, 12522, true));
        assert_ne!(a, reference(12543, 46, 12522, false));
        assert_ne!(a, reference(12544, 47, 12522, false));
    }

    #[test]
    fn hashing_matches_equality() {
        let mut set = HashSet::new();
        set.insert(reference(2430, 53, 2408, false));
        assert!(!set.insert(reference(2430, 53, 2408, false)));
        assert!(set.insert(reference(2430, 53, 2408, true)));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn mirrored_negates_direction_and_swaps_endpoints() {
        let forward = reference(2004, 47, 11489, true);
        let mirror = forward.mirrored().unwrap();
        assert_eq!(mirror, reference(11489, 47, 2004, false));
        assert_eq!(mirror.mirrored().unwrap(), forward);
    }

    #[test]
    fn remote_targets_have_no_mirror_obligation() {
        let remote = Reference::new(
            NodeId::numeric(0, 85),
            NodeId::numeric(0, 35),
            ExpandedNodeId::parse("svr=2;i=99").unwrap(),
            true,
        );
        assert!(remote.mirrored().is_none());
    }
}
