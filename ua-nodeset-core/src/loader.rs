use crate::context::NodeContext;
use crate::error::{Error, Result};
use crate::manager::NodeManager;
use crate::nodes::{
    DataTypeNode, MethodNode, Node, NodeBase, ObjectNode, ObjectTypeNode, ReferenceTypeNode,
    VariableNode, VariableTypeNode, ViewNode,
};
use crate::reference::Reference;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::sync::Arc;
use tracing::debug;
use ua_nodeset_types::{DataValue, ExpandedNodeId, LocalizedText, NodeId, QualifiedName, Variant};

/// One reference row of a node descriptor. Identities are kept in text form
/// so descriptor tables can live in `static` data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefSpec {
    pub reference_type: &'static str,
    pub target: &'static str,
    pub forward: bool,
}

/// Initial value of a variable or variable type descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSpec {
    Null,
    Boolean(bool),
    Int32(i32),
    UInt32(u32),
    Text(&'static str),
}

impl From<ValueSpec> for Variant {
    fn from(value: ValueSpec) -> Self {
        match value {
            ValueSpec::Null => Variant::Null,
            ValueSpec::Boolean(value) => Variant::Boolean(value),
            ValueSpec::Int32(value) => Variant::Int32(value),
            ValueSpec::UInt32(value) => Variant::UInt32(value),
            ValueSpec::Text(value) => Variant::String(value.to_owned()),
        }
    }
}

/// Class-specific attributes of a node descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassSpec {
    Object {
        event_notifier: u8,
    },
    Variable {
        value: ValueSpec,
        data_type: &'static str,
        value_rank: i32,
        access_level: u8,
        user_access_level: u8,
    },
    Method {
        executable: bool,
        user_executable: bool,
    },
    ObjectType {
        is_abstract: bool,
    },
    VariableType {
        value: ValueSpec,
        data_type: &'static str,
        value_rank: i32,
        is_abstract: bool,
    },
    ReferenceType {
        is_abstract: bool,
        symmetric: bool,
        inverse_name: Option<&'static str>,
    },
    DataType {
        is_abstract: bool,
    },
    View {
        contains_no_loops: bool,
        event_notifier: u8,
    },
}

/// Declarative descriptor for one node and the references it owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeSpec {
    pub node_id: &'static str,
    /// `<namespace>:<name>` form, the namespace prefix optional for index 0.
    pub browse_name: &'static str,
    pub display_name: &'static str,
    pub description: Option<&'static str>,
    pub write_mask: u32,
    pub user_write_mask: u32,
    pub class: ClassSpec,
    pub references: &'static [RefSpec],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoaderOptions {
    /// Audit mirror consistency after a successful load.
    #[serde(default)]
    pub verify_mirrors: bool,
}

/// Where the loader is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
    Failed(String),
}

impl Display for LoadState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LoadState::NotLoaded => f.write_str("not loaded"),
            LoadState::Loading => f.write_str("loading"),
            LoadState::Loaded => f.write_str("loaded"),
            LoadState::Failed(_) => f.write_str("failed"),
        }
    }
}

/// Counters reported by a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoadSummary {
    pub nodes_loaded: usize,
    pub references_added: usize,
    pub duplicates_absorbed: usize,
}

/// Drives descriptor tables into a [`NodeManager`].
///
/// The loader moves `NotLoaded -> Loading -> Loaded` on success and parks in
/// `Failed` on the first error. A failed loader refuses both another `load`
/// and `finish`.
#[derive(Debug)]
pub struct NodeSetLoader {
    context: Arc<NodeContext>,
    manager: NodeManager,
    state: LoadState,
}

impl NodeSetLoader {
    pub fn new(context: Arc<NodeContext>, manager: NodeManager) -> Self {
        Self {
            context,
            manager,
            state: LoadState::NotLoaded,
        }
    }

    #[inline]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Read access to the partially or fully populated registry. Useful for
    /// audits that run before [`finish`](Self::finish).
    #[inline]
    pub fn manager(&self) -> &NodeManager {
        &self.manager
    }

    /// Loads every descriptor, registering each node with its references.
    /// Re-added reference tuples are absorbed and counted, not errors.
    pub fn load<'a>(
        &mut self,
        descriptors: impl IntoIterator<Item = &'a NodeSpec>,
    ) -> Result<LoadSummary> {
        if self.state != LoadState::NotLoaded {
            return Err(Error::InvalidLoaderState {
                operation: "load",
                state: self.state.to_string(),
            });
        }
        self.state = LoadState::Loading;
        match self.load_all(descriptors) {
            Ok(summary) => {
                self.state = LoadState::Loaded;
                debug!(
                    nodes = summary.nodes_loaded,
                    references = summary.references_added,
                    duplicates_absorbed = summary.duplicates_absorbed,
                    "descriptor load complete"
                );
                Ok(summary)
            }
            Err(err) => {
                self.state = LoadState::Failed(err.to_string());
                Err(err)
            }
        }
    }

    /// Hands out the populated registry. Only a loader in the `Loaded` state
    /// may finish.
    pub fn finish(self) -> Result<NodeManager> {
        match self.state {
            LoadState::Loaded => Ok(self.manager),
            state => Err(Error::InvalidLoaderState {
                operation: "finish",
                state: state.to_string(),
            }),
        }
    }

    fn load_all<'a>(
        &mut self,
        descriptors: impl IntoIterator<Item = &'a NodeSpec>,
    ) -> Result<LoadSummary> {
        let mut summary = LoadSummary::default();
        for descriptor in descriptors {
            self.load_one(descriptor, &mut summary)?;
        }
        Ok(summary)
    }

    fn load_one(&mut self, descriptor: &NodeSpec, summary: &mut LoadSummary) -> Result<()> {
        let mut node = self.build_node(descriptor)?;
        for reference in descriptor.references {
            let reference = self.build_reference(node.node_id(), reference)?;
            if node.add_reference(reference) {
                summary.references_added += 1;
            } else {
                summary.duplicates_absorbed += 1;
            }
        }
        self.manager.insert(node)?;
        summary.nodes_loaded += 1;
        Ok(())
    }

    fn build_node(&self, descriptor: &NodeSpec) -> Result<Node> {
        let node_id = NodeId::parse(descriptor.node_id)?;
        let browse_name = QualifiedName::parse(descriptor.browse_name)?;
        let mut base = NodeBase::new(
            &self.context,
            node_id,
            browse_name,
            LocalizedText::english(descriptor.display_name),
        )?
        .with_write_masks(descriptor.write_mask, descriptor.user_write_mask);
        if let Some(description) = descriptor.description {
            base = base.with_description(LocalizedText::english(description));
        }
        let node = match descriptor.class {
            ClassSpec::Object { event_notifier } => {
                Node::from(ObjectNode::new(base).with_event_notifier(event_notifier))
            }
            ClassSpec::Variable {
                value,
                data_type,
                value_rank,
                access_level,
                user_access_level,
            } => {
                let data_type = self.parse_attribute_id(base.node_id(), "data type", data_type)?;
                Node::from(
                    VariableNode::new(base, DataValue::new(value), data_type, value_rank)
                        .with_access_levels(access_level, user_access_level),
                )
            }
            ClassSpec::Method {
                executable,
                user_executable,
            } => Node::from(MethodNode::new(base, executable, user_executable)),
            ClassSpec::ObjectType { is_abstract } => {
                Node::from(ObjectTypeNode::new(base, is_abstract))
            }
            ClassSpec::VariableType {
                value,
                data_type,
                value_rank,
                is_abstract,
            } => {
                let data_type = self.parse_attribute_id(base.node_id(), "data type", data_type)?;
                Node::from(VariableTypeNode::new(
                    base,
                    DataValue::new(value),
                    data_type,
                    value_rank,
                    is_abstract,
                ))
            }
            ClassSpec::ReferenceType {
                is_abstract,
                symmetric,
                inverse_name,
            } => {
                let mut node = ReferenceTypeNode::new(base, is_abstract, symmetric);
                if let Some(inverse_name) = inverse_name {
                    node = node.with_inverse_name(LocalizedText::english(inverse_name));
                }
                Node::from(node)
            }
            ClassSpec::DataType { is_abstract } => Node::from(DataTypeNode::new(base, is_abstract)),
            ClassSpec::View {
                contains_no_loops,
                event_notifier,
            } => Node::from(ViewNode::new(base, contains_no_loops, event_notifier)),
        };
        Ok(node)
    }

    fn build_reference(&self, source: &NodeId, descriptor: &RefSpec) -> Result<Reference> {
        let reference_type =
            self.parse_attribute_id(source, "reference type", descriptor.reference_type)?;
        let target = ExpandedNodeId::parse(descriptor.target).map_err(|err| {
            Error::InvalidReference {
                source: source.clone(),
                detail: format!("bad target `{}`: {err}", descriptor.target),
            }
        })?;
        if self.context.resolve(&target).as_ref() == Some(source) {
            return Err(Error::InvalidReference {
                source: source.clone(),
                detail: "reference targets its own source".to_owned(),
            });
        }
        Ok(Reference::new(
            source.clone(),
            reference_type,
            target,
            descriptor.forward,
        ))
    }

    fn parse_attribute_id(&self, node: &NodeId, attribute: &str, text: &str) -> Result<NodeId> {
        NodeId::parse(text).map_err(|err| Error::InvalidReference {
            source: node.clone(),
            detail: format!("bad {attribute} `{text}`: {err}"),
        })
    }
}
