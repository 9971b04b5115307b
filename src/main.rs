use std::sync::Arc;

use casgate::backend::memory::MemoryBackend;
use casgate::config::Config;
use casgate::gateway::ProtocolHandler;
use casgate::resolver::PathResolver;
use casgate::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    // Stand-in store until a real content-addressed backend is wired in.
    let backend = Arc::new(demo_store());
    let resolver = PathResolver::new(backend, cfg.resolver.empty_listing);
    let handler = Arc::new(ProtocolHandler::new(resolver));

    tokio::select! {
        res = server::listener::run(&cfg, handler) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}

fn demo_store() -> MemoryBackend {
    let mut store = MemoryBackend::new();
    store.insert_dir("/cas/demo", &["index.html", "readme.txt", "media"]);
    store.insert_file(
        "/cas/demo/index.html",
        "<!DOCTYPE html><html><body><h1>casgate demo</h1></body></html>",
    );
    store.insert_file("/cas/demo/readme.txt", "served from the demo store\n");
    store.insert_dir("/cas/demo/media", &["pixel.png"]);
    store.insert_file(
        "/cas/demo/media/pixel.png",
        &b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR"[..],
    );
    store
}
