use ipgroups_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        web_port = config.server.web_port,
        bind = %config.server.bind_address,
        groups = config.groups.len(),
        cache_ttl_secs = config.cache.ttl_secs,
        refresh_interval_secs = config.cache.refresh_interval_secs,
        "Configuration loaded"
    );

    Ok(config)
}
