//! Taskdash server
//!
//! Owns the in-memory task store, proxies the remote posts/users feed, and
//! serves the web UI. State is process-local: the store reseeds from the
//! demo fixtures on every start.

mod web;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::sync::RwLock;

use crate::web::WebState;

#[derive(Parser)]
#[command(name = "taskdash-server")]
#[command(about = "Admin dashboard for task management and posts browsing")]
#[command(version)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Base URL of the remote posts/users API
    #[arg(long, default_value = "https://jsonplaceholder.typicode.com")]
    feed_url: String,

    /// Directory holding the built WASM bundle
    #[arg(long, default_value = "crates/web/pkg")]
    pkg_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let state = Arc::new(WebState {
        board: RwLock::new(tasks::TaskStore::seeded()),
        feed: feed::Client::new(args.feed_url.as_str()),
    });

    let app = web::build_router(state, &args.pkg_dir);

    tracing::info!("listening on http://{}", &args.addr);

    let listener = tokio::net::TcpListener::bind(&args.addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
