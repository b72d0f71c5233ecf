//! Server lifecycle: bind, serve, shut down.

use std::future::Future;
use std::io;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::Config;
use crate::context::ServiceContext;
use crate::http;

/// A bound listener paired with the router it will serve.
pub struct Server {
    listener: TcpListener,
    app: Router,
}

impl Server {
    /// Binds the configured address and builds the router over `ctx`.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the address cannot be bound.
    pub async fn bind(config: &Config, ctx: ServiceContext) -> io::Result<Self> {
        let listener = TcpListener::bind(config.bind_addr()).await?;
        let app = http::router(ctx, config.expose_test_routes);
        Ok(Self { listener, app })
    }

    /// The address actually bound; differs from the config when port 0 was requested.
    ///
    /// # Errors
    ///
    /// Returns the I/O error reported by the socket.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serves requests until `shutdown` resolves, then drains in-flight requests.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if accepting connections fails.
    pub async fn run<F>(self, shutdown: F) -> io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!(addr = %self.local_addr()?, "listening");
        axum::serve(self.listener, self.app).with_graceful_shutdown(shutdown).await?;
        info!("server stopped");
        Ok(())
    }
}

/// Resolves on Ctrl-C.
///
/// If the signal handler cannot be installed this never resolves, so the
/// server keeps running instead of exiting immediately.
pub async fn ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown requested"),
        Err(e) => {
            warn!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    }
}
