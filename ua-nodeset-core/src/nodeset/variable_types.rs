use super::{ids, rf};
use crate::loader::{ClassSpec, NodeSpec, ValueSpec};

/// The base variable types and PropertyType.
pub static VARIABLE_TYPES: &[NodeSpec] = &[
    NodeSpec {
        node_id: "ns=0;i=62",
        browse_name: "0:BaseVariableType",
        display_name: "BaseVariableType",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::VariableType {
            value: ValueSpec::Null,
            data_type: "ns=0;i=24",
            value_rank: -2,
            is_abstract: true,
        },
        references: &[
            rf(ids::HAS_SUBTYPE, "svr=0;i=63", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=68", true),
            rf(ids::ORGANIZES, "svr=0;i=89", false),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=63",
        browse_name: "0:BaseDataVariableType",
        display_name: "BaseDataVariableType",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::VariableType {
            value: ValueSpec::Null,
            data_type: "ns=0;i=24",
            value_rank: -2,
            is_abstract: false,
        },
        references: &[rf(ids::HAS_SUBTYPE, "svr=0;i=62", false)],
    },
    NodeSpec {
        node_id: "ns=0;i=68",
        browse_name: "0:PropertyType",
        display_name: "PropertyType",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::VariableType {
            value: ValueSpec::Null,
            data_type: "ns=0;i=24",
            value_rank: -2,
            is_abstract: false,
        },
        references: &[
            rf(ids::HAS_SUBTYPE, "svr=0;i=62", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=111", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=112", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=113", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2392", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2393", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2394", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2395", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2396", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2397", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2398", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=11490", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=11491", false),
        ],
    },
];
