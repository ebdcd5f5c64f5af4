use super::base::NodeBase;
use serde::{Deserialize, Serialize};
use ua_nodeset_types::{DataValue, LocalizedText, NodeId};

/// Object type node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectTypeNode {
    pub base: NodeBase,
    pub is_abstract: bool,
}

impl ObjectTypeNode {
    pub fn new(base: NodeBase, is_abstract: bool) -> Self {
        Self { base, is_abstract }
    }
}

/// Variable type node. Carries the default value, data type and rank that
/// instances inherit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableTypeNode {
    pub base: NodeBase,
    pub value: DataValue,
    pub data_type: NodeId,
    pub value_rank: i32,
    pub array_dimensions: Option<Vec<u32>>,
    pub is_abstract: bool,
}

impl VariableTypeNode {
    pub fn new(
        base: NodeBase,
        value: DataValue,
        data_type: NodeId,
        value_rank: i32,
        is_abstract: bool,
    ) -> Self {
        Self {
            base,
            value,
            data_type,
            value_rank,
            array_dimensions: None,
            is_abstract,
        }
    }

    pub fn with_array_dimensions(mut self, array_dimensions: Vec<u32>) -> Self {
        self.array_dimensions = Some(array_dimensions);
        self
    }
}

/// Reference type node.
///
/// `inverse_name` stays NULL for symmetric types, where the relation reads
/// the same in both directions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTypeNode {
    pub base: NodeBase,
    pub is_abstract: bool,
    pub symmetric: bool,
    pub inverse_name: LocalizedText,
}

impl ReferenceTypeNode {
    pub fn new(base: NodeBase, is_abstract: bool, symmetric: bool) -> Self {
        Self {
            base,
            is_abstract,
            symmetric,
            inverse_name: LocalizedText::NULL,
        }
    }

    pub fn with_inverse_name(mut self, inverse_name: LocalizedText) -> Self {
        self.inverse_name = inverse_name;
        self
    }
}

/// Data type node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataTypeNode {
    pub base: NodeBase,
    pub is_abstract: bool,
}

impl DataTypeNode {
    pub fn new(base: NodeBase, is_abstract: bool) -> Self {
        Self { base, is_abstract }
    }
}
