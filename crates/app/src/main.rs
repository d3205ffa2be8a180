use std::str::FromStr;
use std::sync::Arc;

use qatalog_fetch::{HttpSource, DEFAULT_DATA_URL};

fn init_tracing() {
    let env = std::env::var("QATALOG_LOG").unwrap_or_else(|_| "info".to_string());
    let filter = tracing_subscriber::EnvFilter::from_str(&env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    init_tracing();
    let url =
        std::env::var("QATALOG_DATA_URL").unwrap_or_else(|_| DEFAULT_DATA_URL.to_string());
    tracing::info!(url = %url, "loading catalog");
    let handle = qatalog_store::spawn_load(Arc::new(HttpSource::new(url)));
    if let Err(e) = qatalog_gui::run_native(handle) {
        eprintln!("GUI error: {}", e);
        std::process::exit(1);
    }
}
