use std::net::{Ipv4Addr, SocketAddr};

use anyhow::Context;
use repository::init_repository;
use tokio::net::TcpListener;
use tracing::info;
use util::load_config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = load_config("Config.toml")?;

    let conn_string = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => config["database"]["url"]
            .as_str()
            .context("database.url was not found in Config.toml")?
            .to_string(),
    };

    let port = config["server"]["port"]
        .as_integer()
        .context("server.port was not found in Config.toml")? as u16;

    let repository = init_repository(&conn_string).await?;
    let router = api::serve(repository)?;

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = TcpListener::bind(addr).await?;
    info!(task = "start api serving", %addr);

    axum::serve(listener, router).await?;

    Ok(())
}
