use resolver_audit_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        strategy = %config.sources.strategy,
        resolv_conf = %config.sources.resolv_conf_path,
        "Configuration loaded"
    );

    Ok(config)
}
