//! Run one QC dispatch against a live endpoint and print the reshaped
//! dashboard state as JSON.
//!
//! ```bash
//! VRTRACK_QC_URL=http://localhost:3000 cargo run --bin qc_fetch -- donor_qc '{"donor": "d1"}'
//! ```

use std::sync::Arc;

use qc_client::HttpClient;
use qc_dashboard::{DashboardState, DispatchOptions, Dispatcher};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let base_url = std::env::var("VRTRACK_QC_URL")
        .unwrap_or_else(|_| "http://localhost:3000".to_string());

    let mut argv = std::env::args().skip(1);
    let method = argv.next().unwrap_or_else(|| "labels".to_string());
    let args: serde_json::Value = match argv.next() {
        Some(raw) => serde_json::from_str(&raw)?,
        None => serde_json::json!({}),
    };

    let dispatcher = Dispatcher::new(Arc::new(HttpClient::new(&base_url)));
    let mut state = DashboardState::default();
    dispatcher
        .dispatch(&method, args, DispatchOptions::default(), &mut state)
        .await;

    for err in state.errors.items() {
        eprintln!("error: {err}");
    }
    println!("{}", serde_json::to_string_pretty(&state.snapshot())?);
    Ok(())
}
