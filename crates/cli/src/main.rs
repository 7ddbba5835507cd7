use clap::Parser;
use ipgroups_domain::CliOverrides;
use ipgroups_jobs::{CacheRefreshJob, CacheSweepJob, JobRunner};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "ipgroups")]
#[command(version)]
#[command(about = "Group-based domain-to-IP resolver with a TTL cache and HTTP API")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// DNS lookup timeout in milliseconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Cache TTL in seconds
    #[arg(long)]
    cache_ttl: Option<u64>,

    /// Cache refresh interval in seconds
    #[arg(long)]
    refresh_interval: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
        timeout_ms: cli.timeout,
        ttl_secs: cli.cache_ttl,
        refresh_interval_secs: cli.refresh_interval,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting ipgroups v{}", env!("CARGO_PKG_VERSION"));

    if config.groups.is_empty() {
        warn!("No groups configured; resolve endpoints will return 404");
    }

    // Dependency wiring - resolver, cache, use cases
    let services = di::Services::new(&config);

    // Background loops share one cancellation signal; main owns it and
    // joins both handles before exiting
    let shutdown = CancellationToken::new();
    let job_handles = JobRunner::new()
        .with_refresh(
            CacheRefreshJob::new(
                Arc::clone(&services.cache),
                Arc::clone(&services.groups),
                config.cache.refresh_interval_secs,
            )
            .with_cancellation(shutdown.child_token()),
        )
        .with_sweep(
            CacheSweepJob::new(Arc::clone(&services.cache))
                .with_cancellation(shutdown.child_token()),
        )
        .start();

    // Start web server (blocking until shutdown)
    let web_addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.web_port)
        .parse()
        .expect("Invalid address");

    server::start_web_server(web_addr, services.app_state(), &config.server, shutdown.clone())
        .await?;

    shutdown.cancel();
    futures::future::join_all(job_handles).await;

    info!("Server shutdown complete");
    Ok(())
}
