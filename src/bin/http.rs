#[cfg(feature = "http_api")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::net::SocketAddr;

    use dispatch_board::{BoardConfig, ScheduleStore, http_api, logging};

    logging::init();
    let config = BoardConfig::from_env()?;
    let addr: SocketAddr = config.http_addr.parse()?;
    let store = ScheduleStore::from_config(&config)?;

    println!("dispatch-board HTTP API listening on http://{addr}");
    http_api::serve(addr, store, config).await?;
    Ok(())
}

#[cfg(not(feature = "http_api"))]
fn main() {
    eprintln!("Rebuild with the `http_api` feature to enable the HTTP server.");
}
