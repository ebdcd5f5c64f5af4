use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// The node classes of the model, with the wire-fixed bit values.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum NodeClass {
    Object = 1,
    Variable = 2,
    Method = 4,
    ObjectType = 8,
    VariableType = 16,
    ReferenceType = 32,
    DataType = 64,
    View = 128,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid node class value: {0}")]
pub struct InvalidNodeClass(pub u8);

impl NodeClass {
    /// Every class, in ascending bit order.
    pub const ALL: [NodeClass; 8] = [
        NodeClass::Object,
        NodeClass::Variable,
        NodeClass::Method,
        NodeClass::ObjectType,
        NodeClass::VariableType,
        NodeClass::ReferenceType,
        NodeClass::DataType,
        NodeClass::View,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeClass::Object => "Object",
            NodeClass::Variable => "Variable",
            NodeClass::Method => "Method",
            NodeClass::ObjectType => "ObjectType",
            NodeClass::VariableType => "VariableType",
            NodeClass::ReferenceType => "ReferenceType",
            NodeClass::DataType => "DataType",
            NodeClass::View => "View",
        }
    }
}

impl TryFrom<u8> for NodeClass {
    type Error = InvalidNodeClass;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(NodeClass::Object),
            2 => Ok(NodeClass::Variable),
            4 => Ok(NodeClass::Method),
            8 => Ok(NodeClass::ObjectType),
            16 => Ok(NodeClass::VariableType),
            32 => Ok(NodeClass::ReferenceType),
            64 => Ok(NodeClass::DataType),
            128 => Ok(NodeClass::View),
            other => Err(InvalidNodeClass(other)),
        }
    }
}

impl Display for NodeClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
