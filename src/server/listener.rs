use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::gateway::ProtocolHandler;
use crate::http::connection::Connection;

pub async fn run(cfg: &Config, handler: Arc<ProtocolHandler>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", cfg.server.listen_addr);

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let handler = handler.clone();
        tokio::spawn(async move {
            let conn = Connection::new(socket, handler);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
