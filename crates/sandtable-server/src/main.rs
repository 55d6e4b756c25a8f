use std::sync::Arc;

use sandtable_server::{Server, ServerConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let server = Arc::new(Server::new(ServerConfig::from_env()));

    let signal_server = Arc::clone(&server);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupt received");
            signal_server.shutdown();
        }
    });

    if let Err(e) = server.run().await {
        tracing::error!("server error: {e}");
        std::process::exit(1);
    }
}
