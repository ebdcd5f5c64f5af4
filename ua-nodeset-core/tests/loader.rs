mod common;

use common::{init_tracing, nid};
use ua_nodeset_core::{
    audit, ClassSpec, DuplicatePolicy, Error, LoadState, ManagerConfig, NodeContext, NodeManager,
    NodeSetLoader, NodeSpec, RefSpec,
};
use ua_nodeset_types::{NodeId, QualifiedName};

const fn row(reference_type: &'static str, target: &'static str, forward: bool) -> RefSpec {
    RefSpec {
        reference_type,
        target,
        forward,
    }
}

const fn object(
    node_id: &'static str,
    browse_name: &'static str,
    display_name: &'static str,
    references: &'static [RefSpec],
) -> NodeSpec {
    NodeSpec {
        node_id,
        browse_name,
        display_name,
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Object { event_notifier: 0 },
        references,
    }
}

static FOLDERS: &[NodeSpec] = &[
    object(
        "ns=0;i=85",
        "0:Objects",
        "Objects",
        &[row("ns=0;i=35", "svr=0;i=86", true)],
    ),
    object(
        "ns=0;i=86",
        "0:Types",
        "Types",
        &[row("ns=0;i=35", "svr=0;i=85", false)],
    ),
];

fn loader() -> NodeSetLoader {
    NodeSetLoader::new(NodeContext::standard(), NodeManager::default())
}

#[test]
fn successful_load_moves_to_loaded_and_finishes() {
    init_tracing();
    let mut loader = loader();
    assert_eq!(loader.state(), &LoadState::NotLoaded);
    let summary = loader.load(FOLDERS).unwrap();
    assert_eq!(summary.nodes_loaded, 2);
    assert_eq!(summary.references_added, 2);
    assert_eq!(summary.duplicates_absorbed, 0);
    assert_eq!(loader.state(), &LoadState::Loaded);
    let manager = loader.finish().unwrap();
    assert_eq!(manager.len(), 2);
    assert!(manager.contains(&nid(85)));
    assert!(manager.contains(&nid(86)));
}

#[test]
fn second_load_is_refused() {
    init_tracing();
    let mut loader = loader();
    loader.load(FOLDERS).unwrap();
    let err = loader.load(FOLDERS).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidLoaderState {
            operation: "load",
            ..
        }
    ));
}

#[test]
fn finish_requires_a_completed_load() {
    init_tracing();
    let err = loader().finish().unwrap_err();
    match err {
        Error::InvalidLoaderState { operation, state } => {
            assert_eq!(operation, "finish");
            assert_eq!(state, "not loaded");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_descriptor_fails_the_load() {
    init_tracing();
    static BROKEN: &[NodeSpec] = &[
        object("ns=0;i=85", "0:Objects", "Objects", &[]),
        object("ns=0;x=1", "0:Broken", "Broken", &[]),
    ];
    let mut loader = loader();
    let err = loader.load(BROKEN).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    assert!(matches!(loader.state(), LoadState::Failed(_)));
    assert!(loader.finish().is_err());
}

#[test]
fn self_loop_is_rejected() {
    init_tracing();
    static LOOPED: &[NodeSpec] = &[object(
        "ns=0;i=85",
        "0:Objects",
        "Objects",
        &[row("ns=0;i=35", "svr=0;i=85", true)],
    )];
    let mut loader = loader();
    let err = loader.load(LOOPED).unwrap_err();
    match err {
        Error::InvalidReference { source, .. } => assert_eq!(source, nid(85)),
        other => panic!("unexpected error: {other}"),
    }
    assert!(matches!(loader.state(), LoadState::Failed(_)));
}

#[test]
fn unparseable_target_is_rejected() {
    init_tracing();
    static BAD_TARGET: &[NodeSpec] = &[object(
        "ns=0;i=85",
        "0:Objects",
        "Objects",
        &[row("ns=0;i=35", "svr=0;x=9", true)],
    )];
    let err = loader().load(BAD_TARGET).unwrap_err();
    match err {
        Error::InvalidReference { source, detail } => {
            assert_eq!(source, nid(85));
            assert!(detail.contains("bad target"), "detail was {detail}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn duplicate_node_id_is_rejected_by_default() {
    init_tracing();
    static TWICE: &[NodeSpec] = &[
        object("ns=0;i=85", "0:Objects", "Objects", &[]),
        object("ns=0;i=85", "0:Shadow", "Shadow", &[]),
    ];
    let mut loader = loader();
    let err = loader.load(TWICE).unwrap_err();
    assert!(matches!(err, Error::DuplicateNode(id) if id == nid(85)));
    assert!(matches!(loader.state(), LoadState::Failed(_)));
}

#[test]
fn duplicate_node_id_replace_keeps_the_later_node() {
    init_tracing();
    static TWICE: &[NodeSpec] = &[
        object("ns=0;i=85", "0:Objects", "Objects", &[]),
        object("ns=0;i=85", "0:Replacement", "Replacement", &[]),
    ];
    let config = ManagerConfig {
        on_duplicate: DuplicatePolicy::Replace,
    };
    let mut loader = NodeSetLoader::new(NodeContext::standard(), NodeManager::new(config));
    loader.load(TWICE).unwrap();
    let manager = loader.finish().unwrap();
    assert_eq!(manager.len(), 1);
    let kept = manager.get(&nid(85)).unwrap();
    assert_eq!(kept.browse_name(), &QualifiedName::new(0, "Replacement"));
}

#[test]
fn repeated_rows_are_absorbed_not_stored() {
    init_tracing();
    static REPEATED: &[NodeSpec] = &[
        object(
            "ns=0;i=85",
            "0:Objects",
            "Objects",
            &[
                row("ns=0;i=35", "svr=0;i=86", true),
                row("ns=0;i=35", "svr=0;i=86", true),
            ],
        ),
        object(
            "ns=0;i=86",
            "0:Types",
            "Types",
            &[row("ns=0;i=35", "svr=0;i=85", false)],
        ),
    ];
    let mut loader = loader();
    let summary = loader.load(REPEATED).unwrap();
    assert_eq!(summary.references_added, 3);
    assert_eq!(summary.duplicates_absorbed, 1);
    let manager = loader.finish().unwrap();
    assert_eq!(manager.get(&nid(85)).unwrap().references().len(), 1);
}

#[test]
fn one_sided_reference_fails_the_mirror_audit() {
    init_tracing();
    static ONE_SIDED: &[NodeSpec] = &[
        object(
            "ns=0;i=85",
            "0:Objects",
            "Objects",
            &[row("ns=0;i=35", "svr=0;i=86", true)],
        ),
        object("ns=0;i=86", "0:Types", "Types", &[]),
    ];
    let mut loader = loader();
    loader.load(ONE_SIDED).unwrap();
    let err = audit::verify_mirrors(loader.manager()).unwrap_err();
    match err {
        Error::MissingMirror(reference) => {
            assert_eq!(reference.source(), &nid(85));
            assert!(reference.is_forward());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn foreign_namespace_descriptor_is_rejected() {
    init_tracing();
    static FOREIGN: &[NodeSpec] = &[object("ns=2;i=1", "0:Elsewhere", "Elsewhere", &[])];
    let mut loader = loader();
    let err = loader.load(FOREIGN).unwrap_err();
    match err {
        Error::NamespaceMismatch {
            node,
            context_namespace,
        } => {
            assert_eq!(node, NodeId::numeric(2, 1));
            assert_eq!(context_namespace, 0);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(matches!(loader.state(), LoadState::Failed(_)));
}
