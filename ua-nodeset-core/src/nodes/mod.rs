mod base;
mod instance;
mod types;

pub use base::NodeBase;
pub use instance::{MethodNode, ObjectNode, VariableNode, ViewNode};
pub use types::{DataTypeNode, ObjectTypeNode, ReferenceTypeNode, VariableTypeNode};

use crate::node_class::NodeClass;
use crate::reference::Reference;
use serde::{Deserialize, Serialize};
use ua_nodeset_types::{LocalizedText, NodeId, QualifiedName};

/// A node of any class. The variant fixes the class for the lifetime of the
/// node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node_class")]
pub enum Node {
    Object(ObjectNode),
    Variable(VariableNode),
    Method(MethodNode),
    ObjectType(ObjectTypeNode),
    VariableType(VariableTypeNode),
    ReferenceType(ReferenceTypeNode),
    DataType(DataTypeNode),
    View(ViewNode),
}

impl Node {
    #[inline]
    pub fn node_class(&self) -> NodeClass {
        match self {
            Node::Object(_) => NodeClass::Object,
            Node::Variable(_) => NodeClass::Variable,
            Node::Method(_) => NodeClass::Method,
            Node::ObjectType(_) => NodeClass::ObjectType,
            Node::VariableType(_) => NodeClass::VariableType,
            Node::ReferenceType(_) => NodeClass::ReferenceType,
            Node::DataType(_) => NodeClass::DataType,
            Node::View(_) => NodeClass::View,
        }
    }

    #[inline]
    pub fn base(&self) -> &NodeBase {
        match self {
            Node::Object(node) => &node.base,
            Node::Variable(node) => &node.base,
            Node::Method(node) => &node.base,
            Node::ObjectType(node) => &node.base,
            Node::VariableType(node) => &node.base,
            Node::ReferenceType(node) => &node.base,
            Node::DataType(node) => &node.base,
            Node::View(node) => &node.base,
        }
    }

    #[inline]
    pub fn base_mut(&mut self) -> &mut NodeBase {
        match self {
            Node::Object(node) => &mut node.base,
            Node::Variable(node) => &mut node.base,
            Node::Method(node) => &mut node.base,
            Node::ObjectType(node) => &mut node.base,
            Node::VariableType(node) => &mut node.base,
            Node::ReferenceType(node) => &mut node.base,
            Node::DataType(node) => &mut node.base,
            Node::View(node) => &mut node.base,
        }
    }

    #[inline]
    pub fn node_id(&self) -> &NodeId {
        self.base().node_id()
    }

    #[inline]
    pub fn browse_name(&self) -> &QualifiedName {
        self.base().browse_name()
    }

    #[inline]
    pub fn display_name(&self) -> &LocalizedText {
        self.base().display_name()
    }

    /// Adds a reference on the node, returning whether it was newly inserted.
    pub fn add_reference(&mut self, reference: Reference) -> bool {
        self.base_mut().add_reference(reference)
    }

    #[inline]
    pub fn references(&self) -> &[Reference] {
        self.base().references()
    }
}

impl From<ObjectNode> for Node {
    fn from(node: ObjectNode) -> Self {
        Node::Object(node)
    }
}

impl From<VariableNode> for Node {
    fn from(node: VariableNode) -> Self {
        Node::Variable(node)
    }
}

impl From<MethodNode> for Node {
    fn from(node: MethodNode) -> Self {
        Node::Method(node)
    }
}

impl From<ObjectTypeNode> for Node {
    fn from(node: ObjectTypeNode) -> Self {
        Node::ObjectType(node)
    }
}

impl From<VariableTypeNode> for Node {
    fn from(node: VariableTypeNode) -> Self {
        Node::VariableType(node)
    }
}

impl From<ReferenceTypeNode> for Node {
    fn from(node: ReferenceTypeNode) -> Self {
        Node::ReferenceType(node)
    }
}

impl From<DataTypeNode> for Node {
    fn from(node: DataTypeNode) -> Self {
        Node::DataType(node)
    }
}

impl From<ViewNode> for Node {
    fn from(node: ViewNode) -> Self {
        Node::View(node)
    }
}
