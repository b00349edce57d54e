//! # Resolver Audit
//!
//! Prints the host's effective DNS resolver configuration as one table.

mod bootstrap;
mod di;
mod output;

use clap::Parser;
use output::OutputFormat;
use resolver_audit_domain::{AggregationStrategy, CliOverrides, QueryContext};
use std::io::Write;

#[derive(Parser)]
#[command(name = "resolver-audit")]
#[command(version)]
#[command(about = "Reports nameserver, sortlist and search entries from every resolver source")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Aggregation strategy: files (resolv.conf + nmcli) or library (libresolv)
    #[arg(short = 's', long)]
    strategy: Option<AggregationStrategy>,

    /// resolv.conf path read by the files strategy
    #[arg(long)]
    resolv_conf: Option<String>,

    /// Collect inside the network namespace of this process
    #[arg(short = 'p', long)]
    pid: Option<u32>,

    /// Output format: table or json
    #[arg(short = 'f', long, default_value = "table")]
    format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        strategy: cli.strategy,
        resolv_conf_path: cli.resolv_conf,
        log_level: cli.log_level,
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    let context = QueryContext {
        pid_with_namespace: cli.pid,
    };
    let entries = di::build_dispatcher(&config).execute(&context).await;

    let rendered = output::render(&entries, cli.format)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered.trim_end())?;

    Ok(())
}
