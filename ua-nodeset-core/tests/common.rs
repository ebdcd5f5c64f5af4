use std::sync::Once;
use tracing::Level;
use ua_nodeset_types::NodeId;

static INIT_TRACING: Once = Once::new();

pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_target(false)
            .without_time()
            .try_init();
    });
}

/// Numeric node id in the standard namespace.
pub fn nid(id: u32) -> NodeId {
    NodeId::numeric(0, id)
}
