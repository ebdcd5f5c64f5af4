use crate::audit;
use crate::context::NodeContext;
use crate::error::Result;
use crate::loader::{LoadSummary, LoaderOptions, NodeSetLoader};
use crate::manager::{ManagerConfig, NodeManager};
use crate::nodes::Node;
use crate::nodeset;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;
use ua_nodeset_types::NodeId;

/// The fully loaded standard address space.
///
/// The registry is wrapped in an [`Arc`] only after the load has succeeded,
/// so a shared manager is always complete.
#[derive(Debug)]
pub struct AddressSpace {
    context: Arc<NodeContext>,
    manager: Arc<NodeManager>,
    summary: LoadSummary,
}

impl AddressSpace {
    /// Loads the standard node set with default settings.
    pub fn load() -> Result<Self> {
        Self::load_with(ManagerConfig::default(), LoaderOptions::default())
    }

    /// Loads the standard node set with explicit registry and loader
    /// settings.
    pub fn load_with(config: ManagerConfig, options: LoaderOptions) -> Result<Self> {
        let started = Instant::now();
        let context = NodeContext::standard();
        let mut loader = NodeSetLoader::new(context.clone(), NodeManager::new(config));
        let summary = loader.load(nodeset::standard_nodes())?;
        if options.verify_mirrors {
            audit::verify_mirrors(loader.manager())?;
        }
        let manager = Arc::new(loader.finish()?);
        info!(
            nodes = summary.nodes_loaded,
            references = summary.references_added,
            duplicates_absorbed = summary.duplicates_absorbed,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "standard address space loaded"
        );
        Ok(Self {
            context,
            manager,
            summary,
        })
    }

    #[inline]
    pub fn context(&self) -> &Arc<NodeContext> {
        &self.context
    }

    #[inline]
    pub fn manager(&self) -> &Arc<NodeManager> {
        &self.manager
    }

    #[inline]
    pub fn summary(&self) -> LoadSummary {
        self.summary
    }

    /// Clones the node registered under `node_id`, if any.
    pub fn get(&self, node_id: &NodeId) -> Option<Node> {
        self.manager.get(node_id)
    }
}
