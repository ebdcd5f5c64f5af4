use clap::{Parser, ValueEnum};
use std::collections::BTreeMap;
use tracing_subscriber::EnvFilter;
use ua_nodeset_core::{AddressSpace, DuplicatePolicy, LoaderOptions, ManagerConfig, NodeClass};

/// Loads the standard OPC UA address space and reports its shape.
#[derive(Parser)]
#[command(name = "ua-nodeset")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Standard address space loader", long_about = None)]
struct Cli {
    /// Log filter, e.g. `info` or `ua_nodeset_core=debug`
    #[arg(short, long, env = "UA_NODESET_LOG", default_value = "info")]
    log_level: String,

    /// What to do when a node id is registered twice
    #[arg(long, value_enum, default_value = "reject")]
    on_duplicate: OnDuplicate,

    /// Audit mirror consistency after loading
    #[arg(long)]
    verify: bool,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OnDuplicate {
    Reject,
    Replace,
}

impl From<OnDuplicate> for DuplicatePolicy {
    fn from(value: OnDuplicate) -> Self {
        match value {
            OnDuplicate::Reject => DuplicatePolicy::Reject,
            OnDuplicate::Replace => DuplicatePolicy::Replace,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .try_init();

    let config = ManagerConfig {
        on_duplicate: cli.on_duplicate.into(),
    };
    let options = LoaderOptions {
        verify_mirrors: cli.verify,
    };
    let space = AddressSpace::load_with(config, options)?;

    match cli.format {
        Format::Text => print_text(&space),
        Format::Json => print_json(&space)?,
    }
    Ok(())
}

fn print_text(space: &AddressSpace) {
    let counts = space.manager().class_counts();
    let summary = space.summary();
    println!("standard address space");
    for class in NodeClass::ALL {
        let count = counts.get(&class).copied().unwrap_or(0);
        println!("  {:<14} {:>5}", class.as_str(), count);
    }
    println!("  {:<14} {:>5}", "nodes", summary.nodes_loaded);
    println!("  {:<14} {:>5}", "references", summary.references_added);
    println!("  {:<14} {:>5}", "absorbed", summary.duplicates_absorbed);
}

fn print_json(space: &AddressSpace) -> anyhow::Result<()> {
    let counts = space.manager().class_counts();
    let classes: BTreeMap<&str, usize> = NodeClass::ALL
        .iter()
        .map(|class| (class.as_str(), counts.get(class).copied().unwrap_or(0)))
        .collect();
    let report = serde_json::json!({
        "classes": classes,
        "summary": space.summary(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
