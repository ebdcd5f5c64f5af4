mod error;
mod expanded_node_id;
mod localized_text;
mod node_id;
mod qualified_name;
mod value;

pub type ParseResult<T, E = ParseError> = Result<T, E>;

pub use error::ParseError;
pub use expanded_node_id::ExpandedNodeId;
pub use localized_text::LocalizedText;
pub use node_id::{Identifier, NodeId};
pub use qualified_name::QualifiedName;
pub use value::{DataValue, Variant};
