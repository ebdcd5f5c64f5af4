use crate::localized_text::LocalizedText;
use crate::node_id::NodeId;
use crate::qualified_name::QualifiedName;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A closed union over the value kinds a variable or variable type carries in
/// this model.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Variant {
    #[default]
    Null,
    Boolean(bool),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    Double(f64),
    String(String),
    DateTime(DateTime<Utc>),
    Guid(Uuid),
    ByteString(Bytes),
    NodeId(NodeId),
    QualifiedName(QualifiedName),
    LocalizedText(LocalizedText),
}

impl Variant {
    pub fn type_name(&self) -> &'static str {
        match self {
            Variant::Null => "Null",
            Variant::Boolean(_) => "Boolean",
            Variant::Int32(_) => "Int32",
            Variant::UInt32(_) => "UInt32",
            Variant::Int64(_) => "Int64",
            Variant::Double(_) => "Double",
            Variant::String(_) => "String",
            Variant::DateTime(_) => "DateTime",
            Variant::Guid(_) => "Guid",
            Variant::ByteString(_) => "ByteString",
            Variant::NodeId(_) => "NodeId",
            Variant::QualifiedName(_) => "QualifiedName",
            Variant::LocalizedText(_) => "LocalizedText",
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Variant::Null)
    }
}

impl From<bool> for Variant {
    fn from(value: bool) -> Self {
        Variant::Boolean(value)
    }
}

impl From<i32> for Variant {
    fn from(value: i32) -> Self {
        Variant::Int32(value)
    }
}

impl From<u32> for Variant {
    fn from(value: u32) -> Self {
        Variant::UInt32(value)
    }
}

impl From<i64> for Variant {
    fn from(value: i64) -> Self {
        Variant::Int64(value)
    }
}

impl From<f64> for Variant {
    fn from(value: f64) -> Self {
        Variant::Double(value)
    }
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Variant::String(value.to_owned())
    }
}

impl From<String> for Variant {
    fn from(value: String) -> Self {
        Variant::String(value)
    }
}

/// A [`Variant`] plus the optional timestamps recorded alongside it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataValue {
    pub value: Variant,
    pub source_timestamp: Option<DateTime<Utc>>,
    pub server_timestamp: Option<DateTime<Utc>>,
}

impl DataValue {
    pub fn new(value: impl Into<Variant>) -> Self {
        Self {
            value: value.into(),
            source_timestamp: None,
            server_timestamp: None,
        }
    }

    pub fn with_source_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.source_timestamp = Some(timestamp);
        self
    }

    pub fn with_server_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.server_timestamp = Some(timestamp);
        self
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }
}

impl From<Variant> for DataValue {
    fn from(value: Variant) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_data_value_is_null_without_timestamps() {
        let value = DataValue::default();
        assert!(value.is_null());
        assert!(value.source_timestamp.is_none());
        assert!(value.server_timestamp.is_none());
    }

    #[test]
    fn type_names_follow_the_variant() {
        assert_eq!(Variant::Null.type_name(), "Null");
        assert_eq!(Variant::from(1i32).type_name(), "Int32");
        assert_eq!(Variant::from(2u32).type_name(), "UInt32");
        assert_eq!(Variant::from("x").type_name(), "String");
        assert_eq!(
            Variant::NodeId(NodeId::numeric(0, 85)).type_name(),
            "NodeId"
        );
    }

    #[test]
    fn timestamps_attach_through_builders() {
        let at = Utc::now();
        let value = DataValue::new(true)
            .with_source_timestamp(at)
            .with_server_timestamp(at);
        assert_eq!(value.value, Variant::Boolean(true));
        assert_eq!(value.source_timestamp, Some(at));
        assert_eq!(value.server_timestamp, Some(at));
    }
}
