use super::{ids, rf};
use crate::loader::{ClassSpec, NodeSpec};

/// Program control, trust list and monitored item methods.
pub static METHODS: &[NodeSpec] = &[
    NodeSpec {
        node_id: "ns=0;i=2426",
        browse_name: "0:Start",
        display_name: "Start",
        description: Some("Causes the Program to transition from the Ready state to the Running state."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Method {
            executable: true,
            user_executable: true,
        },
        references: &[
            rf(ids::HAS_COMPONENT, "svr=0;i=2391", false),
            rf(ids::HAS_CAUSE, "svr=0;i=2410", false),
            rf(ids::HAS_CAUSE, "svr=0;i=2410", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=78", true),
            rf(ids::ALWAYS_GENERATES_EVENT, "svr=0;i=2378", true),
            rf(ids::HAS_COMPONENT, "svr=0;i=2391", false),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2427",
        browse_name: "0:Suspend",
        display_name: "Suspend",
        description: Some("Causes the Program to transition from the Running state to the Suspended state."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Method {
            executable: true,
            user_executable: true,
        },
        references: &[
            rf(ids::HAS_COMPONENT, "svr=0;i=2391", false),
            rf(ids::HAS_CAUSE, "svr=0;i=2416", false),
            rf(ids::HAS_CAUSE, "svr=0;i=2416", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=78", true),
            rf(ids::ALWAYS_GENERATES_EVENT, "svr=0;i=2378", true),
            rf(ids::HAS_COMPONENT, "svr=0;i=2391", false),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2428",
        browse_name: "0:Resume",
        display_name: "Resume",
        description: Some("Causes the Program to transition from the Suspended state to the Running state."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Method {
            executable: true,
            user_executable: true,
        },
        references: &[
            rf(ids::HAS_COMPONENT, "svr=0;i=2391", false),
            rf(ids::HAS_CAUSE, "svr=0;i=2418", false),
            rf(ids::HAS_CAUSE, "svr=0;i=2418", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=78", true),
            rf(ids::ALWAYS_GENERATES_EVENT, "svr=0;i=2378", true),
            rf(ids::HAS_COMPONENT, "svr=0;i=2391", false),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2429",
        browse_name: "0:Halt",
        display_name: "Halt",
        description: Some("Causes the Program to transition from the Ready, Running or Suspended state to the Halted state."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Method {
            executable: true,
            user_executable: true,
        },
        references: &[
            rf(ids::HAS_COMPONENT, "svr=0;i=2391", false),
            rf(ids::HAS_CAUSE, "svr=0;i=2412", false),
            rf(ids::HAS_CAUSE, "svr=0;i=2420", false),
            rf(ids::HAS_CAUSE, "svr=0;i=2424", false),
            rf(ids::HAS_CAUSE, "svr=0;i=2412", false),
            rf(ids::HAS_CAUSE, "svr=0;i=2420", false),
            rf(ids::HAS_CAUSE, "svr=0;i=2424", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=78", true),
            rf(ids::ALWAYS_GENERATES_EVENT, "svr=0;i=2378", true),
            rf(ids::HAS_COMPONENT, "svr=0;i=2391", false),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2430",
        browse_name: "0:Reset",
        display_name: "Reset",
        description: Some("Causes the Program to transition from the Halted state to the Ready state."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Method {
            executable: true,
            user_executable: true,
        },
        references: &[
            rf(ids::HAS_COMPONENT, "svr=0;i=2391", false),
            rf(ids::HAS_CAUSE, "svr=0;i=2408", false),
            rf(ids::HAS_CAUSE, "svr=0;i=2408", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=78", true),
            rf(ids::ALWAYS_GENERATES_EVENT, "svr=0;i=2378", true),
            rf(ids::HAS_COMPONENT, "svr=0;i=2391", false),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=11489",
        browse_name: "0:GetMonitoredItems",
        display_name: "GetMonitoredItems",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Method {
            executable: true,
            user_executable: true,
        },
        references: &[
            rf(ids::HAS_COMPONENT, "svr=0;i=2004", false),
            rf(ids::HAS_PROPERTY, "svr=0;i=11490", true),
            rf(ids::HAS_PROPERTY, "svr=0;i=11491", true),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=80", true),
            rf(ids::HAS_COMPONENT, "svr=0;i=2004", false),
            rf(ids::HAS_PROPERTY, "svr=0;i=11490", true),
            rf(ids::HAS_PROPERTY, "svr=0;i=11491", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=12543",
        browse_name: "0:OpenWithMasks",
        display_name: "OpenWithMasks",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Method {
            executable: true,
            user_executable: true,
        },
        references: &[
            rf(ids::HAS_COMPONENT, "svr=0;i=12522", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=78", true),
            rf(ids::HAS_COMPONENT, "svr=0;i=12522", false),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=12546",
        browse_name: "0:CloseAndUpdate",
        display_name: "CloseAndUpdate",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Method {
            executable: true,
            user_executable: true,
        },
        references: &[
            rf(ids::HAS_COMPONENT, "svr=0;i=12522", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=80", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=12548",
        browse_name: "0:AddCertificate",
        display_name: "AddCertificate",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Method {
            executable: true,
            user_executable: true,
        },
        references: &[
            rf(ids::HAS_COMPONENT, "svr=0;i=12522", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=80", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=12550",
        browse_name: "0:RemoveCertificate",
        display_name: "RemoveCertificate",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Method {
            executable: true,
            user_executable: true,
        },
        references: &[
            rf(ids::HAS_COMPONENT, "svr=0;i=12522", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=80", true),
        ],
    },
];
