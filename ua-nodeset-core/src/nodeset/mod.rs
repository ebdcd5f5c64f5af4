//! Descriptor tables for the standard namespace-0 node set.
//!
//! The tables are organised per node class and are closed over themselves:
//! every reference type and target appearing in a row is itself one of the
//! loaded nodes, and every reference appears in both directions. Duplicate
//! rows carried over from the published model are kept verbatim; the loader
//! absorbs them.

mod data_types;
mod methods;
mod object_types;
mod objects;
mod reference_types;
mod variable_types;
mod variables;

pub use data_types::DATA_TYPES;
pub use methods::METHODS;
pub use object_types::OBJECT_TYPES;
pub use objects::OBJECTS;
pub use reference_types::REFERENCE_TYPES;
pub use variable_types::VARIABLE_TYPES;
pub use variables::VARIABLES;

use crate::loader::{NodeSpec, RefSpec};

/// Canonical ids of the reference types used by the table rows.
pub(crate) mod ids {
    pub(crate) const ORGANIZES: &str = "ns=0;i=35";
    pub(crate) const HAS_MODELLING_RULE: &str = "ns=0;i=37";
    pub(crate) const HAS_TYPE_DEFINITION: &str = "ns=0;i=40";
    pub(crate) const HAS_SUBTYPE: &str = "ns=0;i=45";
    pub(crate) const HAS_PROPERTY: &str = "ns=0;i=46";
    pub(crate) const HAS_COMPONENT: &str = "ns=0;i=47";
    pub(crate) const FROM_STATE: &str = "ns=0;i=51";
    pub(crate) const TO_STATE: &str = "ns=0;i=52";
    pub(crate) const HAS_CAUSE: &str = "ns=0;i=53";
    pub(crate) const HAS_EFFECT: &str = "ns=0;i=54";
    pub(crate) const ALWAYS_GENERATES_EVENT: &str = "ns=0;i=3065";
}

const fn rf(reference_type: &'static str, target: &'static str, forward: bool) -> RefSpec {
    RefSpec {
        reference_type,
        target,
        forward,
    }
}

/// Every standard descriptor, chained in table order.
pub fn standard_nodes() -> impl Iterator<Item = &'static NodeSpec> {
    REFERENCE_TYPES
        .iter()
        .chain(OBJECT_TYPES.iter())
        .chain(VARIABLE_TYPES.iter())
        .chain(DATA_TYPES.iter())
        .chain(OBJECTS.iter())
        .chain(VARIABLES.iter())
        .chain(METHODS.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tables_carry_the_expected_node_counts() {
        assert_eq!(REFERENCE_TYPES.len(), 27);
        assert_eq!(OBJECT_TYPES.len(), 14);
        assert_eq!(VARIABLE_TYPES.len(), 3);
        assert_eq!(DATA_TYPES.len(), 13);
        assert_eq!(OBJECTS.len(), 24);
        assert_eq!(VARIABLES.len(), 12);
        assert_eq!(METHODS.len(), 10);
        assert_eq!(standard_nodes().count(), 103);
    }

    #[test]
    fn node_ids_are_unique_across_tables() {
        let mut seen = HashSet::new();
        for descriptor in standard_nodes() {
            assert!(
                seen.insert(descriptor.node_id),
                "{} appears twice",
                descriptor.node_id
            );
        }
    }

    #[test]
    fn every_row_targets_a_node_in_the_tables() {
        let ids: HashSet<&str> = standard_nodes().map(|d| d.node_id).collect();
        let targets: HashSet<String> = ids
            .iter()
            .map(|id| match id.strip_prefix("ns=0;") {
                Some(tail) => format!("svr=0;{tail}"),
                None => format!("svr=0;{id}"),
            })
            .collect();
        for descriptor in standard_nodes() {
            for row in descriptor.references {
                assert!(
                    ids.contains(row.reference_type),
                    "{} uses unknown reference type {}",
                    descriptor.node_id,
                    row.reference_type
                );
                assert!(
                    targets.contains(row.target),
                    "{} targets unknown node {}",
                    descriptor.node_id,
                    row.target
                );
            }
        }
    }
}
