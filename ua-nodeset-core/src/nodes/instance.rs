use super::base::NodeBase;
use serde::{Deserialize, Serialize};
use ua_nodeset_types::{DataValue, NodeId};

/// Object instance node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectNode {
    pub base: NodeBase,
    pub event_notifier: u8,
}

impl ObjectNode {
    pub fn new(base: NodeBase) -> Self {
        Self {
            base,
            event_notifier: 0,
        }
    }

    pub fn with_event_notifier(mut self, event_notifier: u8) -> Self {
        self.event_notifier = event_notifier;
        self
    }
}

/// Variable instance node. The current value is carried as a timestamped
/// [`DataValue`] next to the declared data type and rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableNode {
    pub base: NodeBase,
    pub value: DataValue,
    pub data_type: NodeId,
    pub value_rank: i32,
    pub array_dimensions: Option<Vec<u32>>,
    pub access_level: u8,
    pub user_access_level: u8,
    pub minimum_sampling_interval: f64,
    pub historizing: bool,
}

impl VariableNode {
    pub fn new(base: NodeBase, value: DataValue, data_type: NodeId, value_rank: i32) -> Self {
        Self {
            base,
            value,
            data_type,
            value_rank,
            array_dimensions: None,
            access_level: 0,
            user_access_level: 0,
            minimum_sampling_interval: 0.0,
            historizing: false,
        }
    }

    pub fn with_array_dimensions(mut self, array_dimensions: Vec<u32>) -> Self {
        self.array_dimensions = Some(array_dimensions);
        self
    }

    pub fn with_access_levels(mut self, access_level: u8, user_access_level: u8) -> Self {
        self.access_level = access_level;
        self.user_access_level = user_access_level;
        self
    }

    pub fn with_minimum_sampling_interval(mut self, interval: f64) -> Self {
        self.minimum_sampling_interval = interval;
        self
    }

    pub fn with_historizing(mut self, historizing: bool) -> Self {
        self.historizing = historizing;
        self
    }
}

/// Method instance node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodNode {
    pub base: NodeBase,
    pub executable: bool,
    pub user_executable: bool,
}

impl MethodNode {
    pub fn new(base: NodeBase, executable: bool, user_executable: bool) -> Self {
        Self {
            base,
            executable,
            user_executable,
        }
    }
}

/// View node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewNode {
    pub base: NodeBase,
    pub contains_no_loops: bool,
    pub event_notifier: u8,
}

impl ViewNode {
    pub fn new(base: NodeBase, contains_no_loops: bool, event_notifier: u8) -> Self {
        Self {
            base,
            contains_no_loops,
            event_notifier,
        }
    }
}
