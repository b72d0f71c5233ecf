//! `roster serve` command.

use tracing::debug;

use crate::cli::ConfigArgs;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::server::{self, Server};
use crate::telemetry;

/// Execute the `serve` command.
///
/// Resolves configuration, installs logging, and serves a fresh registry
/// until Ctrl-C.
///
/// # Errors
///
/// Returns an error string if configuration, runtime startup, binding, or
/// serving fails.
pub fn run(args: &ConfigArgs) -> Result<(), String> {
    let config = Config::load(args).map_err(|e| e.to_string())?;
    telemetry::init(&config.log_filter);
    debug!(?config, "configuration resolved");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))?;

    runtime.block_on(async {
        let server = Server::bind(&config, ServiceContext::live())
            .await
            .map_err(|e| format!("Failed to bind {}: {e}", config.bind_addr()))?;
        server.run(server::ctrl_c()).await.map_err(|e| format!("Server error: {e}"))
    })
}
