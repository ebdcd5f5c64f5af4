use super::{ids, rf};
use crate::loader::{ClassSpec, NodeSpec, ValueSpec};

/// Properties of the modelling rules, the program machine and GetMonitoredItems.
pub static VARIABLES: &[NodeSpec] = &[
    NodeSpec {
        node_id: "ns=0;i=111",
        browse_name: "0:NamingRule",
        display_name: "NamingRule",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Variable {
            value: ValueSpec::Int32(1),
            data_type: "ns=0;i=120",
            value_rank: -1,
            access_level: 1,
            user_access_level: 1,
        },
        references: &[
            rf(ids::HAS_PROPERTY, "svr=0;i=77", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=68", true),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=78", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=112",
        browse_name: "0:NamingRule",
        display_name: "NamingRule",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Variable {
            value: ValueSpec::Int32(1),
            data_type: "ns=0;i=120",
            value_rank: -1,
            access_level: 1,
            user_access_level: 1,
        },
        references: &[
            rf(ids::HAS_PROPERTY, "svr=0;i=78", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=68", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=113",
        browse_name: "0:NamingRule",
        display_name: "NamingRule",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Variable {
            value: ValueSpec::Int32(2),
            data_type: "ns=0;i=120",
            value_rank: -1,
            access_level: 1,
            user_access_level: 1,
        },
        references: &[
            rf(ids::HAS_PROPERTY, "svr=0;i=80", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=68", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2392",
        browse_name: "0:Creatable",
        display_name: "Creatable",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Variable {
            value: ValueSpec::Null,
            data_type: "ns=0;i=1",
            value_rank: -1,
            access_level: 1,
            user_access_level: 1,
        },
        references: &[
            rf(ids::HAS_PROPERTY, "svr=0;i=2391", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=68", true),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=78", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2393",
        browse_name: "0:Deletable",
        display_name: "Deletable",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Variable {
            value: ValueSpec::Null,
            data_type: "ns=0;i=1",
            value_rank: -1,
            access_level: 1,
            user_access_level: 1,
        },
        references: &[
            rf(ids::HAS_PROPERTY, "svr=0;i=2391", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=68", true),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=78", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2394",
        browse_name: "0:AutoDelete",
        display_name: "AutoDelete",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Variable {
            value: ValueSpec::Null,
            data_type: "ns=0;i=1",
            value_rank: -1,
            access_level: 1,
            user_access_level: 1,
        },
        references: &[
            rf(ids::HAS_PROPERTY, "svr=0;i=2391", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=68", true),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=78", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2395",
        browse_name: "0:RecycleCount",
        display_name: "RecycleCount",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Variable {
            value: ValueSpec::Null,
            data_type: "ns=0;i=6",
            value_rank: -1,
            access_level: 1,
            user_access_level: 1,
        },
        references: &[
            rf(ids::HAS_PROPERTY, "svr=0;i=2391", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=68", true),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=78", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2396",
        browse_name: "0:InstanceCount",
        display_name: "InstanceCount",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Variable {
            value: ValueSpec::Null,
            data_type: "ns=0;i=7",
            value_rank: -1,
            access_level: 1,
            user_access_level: 1,
        },
        references: &[
            rf(ids::HAS_PROPERTY, "svr=0;i=2391", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=68", true),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=80", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2397",
        browse_name: "0:MaxInstanceCount",
        display_name: "MaxInstanceCount",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Variable {
            value: ValueSpec::Null,
            data_type: "ns=0;i=7",
            value_rank: -1,
            access_level: 1,
            user_access_level: 1,
        },
        references: &[
            rf(ids::HAS_PROPERTY, "svr=0;i=2391", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=68", true),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=80", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2398",
        browse_name: "0:MaxRecycled",
        display_name: "MaxRecycled",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Variable {
            value: ValueSpec::Null,
            data_type: "ns=0;i=7",
            value_rank: -1,
            access_level: 1,
            user_access_level: 1,
        },
        references: &[
            rf(ids::HAS_PROPERTY, "svr=0;i=2391", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=68", true),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=80", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=11490",
        browse_name: "0:InputArguments",
        display_name: "InputArguments",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Variable {
            value: ValueSpec::Null,
            data_type: "ns=0;i=296",
            value_rank: 1,
            access_level: 1,
            user_access_level: 1,
        },
        references: &[
            rf(ids::HAS_PROPERTY, "svr=0;i=11489", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=68", true),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=78", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=11491",
        browse_name: "0:OutputArguments",
        display_name: "OutputArguments",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Variable {
            value: ValueSpec::Null,
            data_type: "ns=0;i=296",
            value_rank: 1,
            access_level: 1,
            user_access_level: 1,
        },
        references: &[
            rf(ids::HAS_PROPERTY, "svr=0;i=11489", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=68", true),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=78", true),
        ],
    },
];
