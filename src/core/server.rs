use std::net::SocketAddr;
use axum::Router;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Serves `app` on `addr` until Ctrl-C or SIGTERM is received.
pub async fn serve(app: Router, addr: SocketAddr) -> anyhow::Result<()> {
    let app = app.layer(TraceLayer::new_for_http());
    info!(%addr, "listening");
    axum::Server::try_bind(&addr)?
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!(%addr, "stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::warn!(%err, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::warn!(%err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}

// Binds `app` to an ephemeral local port and returns its base url.
#[cfg(test)]
pub(crate) async fn spawn_test_server(app: Router) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("should bind test listener");
    let addr = listener.local_addr().expect("should have local addr");
    let server = axum::Server::from_tcp(listener).expect("should build test server")
        .serve(app.into_make_service());
    tokio::spawn(async move {
        if let Err(err) = server.await {
            eprintln!("test server error: {}", err);
        }
    });
    format!("http://{}", addr)
}
