use super::{ids, rf};
use crate::loader::{ClassSpec, NodeSpec};

/// The data type tree backing the standard variables.
pub static DATA_TYPES: &[NodeSpec] = &[
    NodeSpec {
        node_id: "ns=0;i=1",
        browse_name: "0:Boolean",
        display_name: "Boolean",
        description: Some("Describes a value that is either TRUE or FALSE."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::DataType { is_abstract: false },
        references: &[rf(ids::HAS_SUBTYPE, "svr=0;i=24", false)],
    },
    NodeSpec {
        node_id: "ns=0;i=6",
        browse_name: "0:Int32",
        display_name: "Int32",
        description: Some("Describes a value that is an integer between −2,147,483,648  and 2,147,483,647."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::DataType { is_abstract: false },
        references: &[rf(ids::HAS_SUBTYPE, "svr=0;i=27", false)],
    },
    NodeSpec {
        node_id: "ns=0;i=7",
        browse_name: "0:UInt32",
        display_name: "UInt32",
        description: Some("Describes a value that is an integer between 0 and 4,294,967,295."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::DataType { is_abstract: false },
        references: &[rf(ids::HAS_SUBTYPE, "svr=0;i=28", false)],
    },
    NodeSpec {
        node_id: "ns=0;i=12",
        browse_name: "0:String",
        display_name: "String",
        description: Some("Describes a value that is a sequence of printable Unicode characters."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::DataType { is_abstract: false },
        references: &[rf(ids::HAS_SUBTYPE, "svr=0;i=24", false)],
    },
    NodeSpec {
        node_id: "ns=0;i=21",
        browse_name: "0:LocalizedText",
        display_name: "LocalizedText",
        description: Some("Describes a value that is human readable Unicode text with a locale identifier."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::DataType { is_abstract: false },
        references: &[rf(ids::HAS_SUBTYPE, "svr=0;i=24", false)],
    },
    NodeSpec {
        node_id: "ns=0;i=22",
        browse_name: "0:Structure",
        display_name: "Structure",
        description: Some("Describes a value that is any type of structure that can be described with a data encoding."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::DataType { is_abstract: true },
        references: &[
            rf(ids::HAS_SUBTYPE, "svr=0;i=24", false),
            rf(ids::HAS_SUBTYPE, "svr=0;i=296", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=24",
        browse_name: "0:BaseDataType",
        display_name: "BaseDataType",
        description: Some("Describes a value that can have any valid DataType."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::DataType { is_abstract: true },
        references: &[
            rf(ids::HAS_SUBTYPE, "svr=0;i=26", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=29", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=1", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=12", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=21", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=22", true),
            rf(ids::ORGANIZES, "svr=0;i=90", false),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=26",
        browse_name: "0:Number",
        display_name: "Number",
        description: Some("Describes a value that can have any numeric DataType."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::DataType { is_abstract: true },
        references: &[
            rf(ids::HAS_SUBTYPE, "svr=0;i=24", false),
            rf(ids::HAS_SUBTYPE, "svr=0;i=27", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=28", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=27",
        browse_name: "0:Integer",
        display_name: "Integer",
        description: Some("Describes a value that can have any integer DataType."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::DataType { is_abstract: true },
        references: &[
            rf(ids::HAS_SUBTYPE, "svr=0;i=26", false),
            rf(ids::HAS_SUBTYPE, "svr=0;i=6", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=28",
        browse_name: "0:UInteger",
        display_name: "UInteger",
        description: Some("Describes a value that can have any unsigned integer DataType."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::DataType { is_abstract: true },
        references: &[
            rf(ids::HAS_SUBTYPE, "svr=0;i=26", false),
            rf(ids::HAS_SUBTYPE, "svr=0;i=7", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=29",
        browse_name: "0:Enumeration",
        display_name: "Enumeration",
        description: Some("Describes a value that is an enumerated DataType."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::DataType { is_abstract: true },
        references: &[
            rf(ids::HAS_SUBTYPE, "svr=0;i=24", false),
            rf(ids::HAS_SUBTYPE, "svr=0;i=120", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=120",
        browse_name: "0:NamingRuleType",
        display_name: "NamingRuleType",
        description: Some("Describes a value that specifies the significance of the BrowseName for an instance declaration."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::DataType { is_abstract: false },
        references: &[rf(ids::HAS_SUBTYPE, "svr=0;i=29", false)],
    },
    NodeSpec {
        node_id: "ns=0;i=296",
        browse_name: "0:Argument",
        display_name: "Argument",
        description: Some("An argument for a method."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::DataType { is_abstract: false },
        references: &[rf(ids::HAS_SUBTYPE, "svr=0;i=22", false)],
    },
];
