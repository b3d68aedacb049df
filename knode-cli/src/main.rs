mod app;
mod output;

use anyhow::Context;
use clap::Parser;

use crate::app::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Show knode logs on stderr unless --json; --verbose enables debug;
    // RUST_LOG overrides.
    if !cli.json {
        let level = if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .filter_module("knode", level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false)
            .init();
    }

    let node = knode::Node::from_file(&cli.path)
        .with_context(|| format!("failed to decode {}", cli.path.display()))?;

    log::debug!(
        "decoded version {} with {} instance(s)",
        node.version,
        node.instances.len()
    );

    output::print_node(&node, cli.json)
}
