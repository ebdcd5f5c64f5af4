use crate::reference::Reference;
use thiserror::Error;
use ua_nodeset_types::{NodeId, ParseError};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised on the load path. All of them are fatal: a partially built
/// address space is never published.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Parse(#[from] ParseError),
    #[error("node {0} is already registered")]
    DuplicateNode(NodeId),
    // `r#source` keeps thiserror 1.x from treating this NodeId field as the
    // error's source() cause; it is the same identifier as `source` to callers.
    #[error("invalid reference on {source}: {detail}")]
    InvalidReference { r#source: NodeId, detail: String },
    #[error("node {node} does not belong to context namespace {context_namespace}")]
    NamespaceMismatch {
        node: NodeId,
        context_namespace: u16,
    },
    #[error("missing mirror for {0}")]
    MissingMirror(Reference),
    #[error("cannot {operation} while the loader is {state}")]
    InvalidLoaderState {
        operation: &'static str,
        state: String,
    },
}
