mod address_space;
pub mod audit;
mod context;
mod error;
mod loader;
mod manager;
mod node_class;
mod nodes;
pub mod nodeset;
mod reference;

pub use address_space::AddressSpace;
pub use context::{NodeContext, STANDARD_NAMESPACE_URI};
pub use error::{Error, Result};
pub use loader::{
    ClassSpec, LoadState, LoadSummary, LoaderOptions, NodeSetLoader, NodeSpec, RefSpec, ValueSpec,
};
pub use manager::{DuplicatePolicy, ManagerConfig, NodeManager};
pub use node_class::{InvalidNodeClass, NodeClass};
pub use nodes::{
    DataTypeNode, MethodNode, Node, NodeBase, ObjectNode, ObjectTypeNode, ReferenceTypeNode,
    VariableNode, VariableTypeNode, ViewNode,
};
pub use reference::Reference;
