use core_server::ServerConfig;
use core_server::router::start_server;
use memory_data_provider::DataLayer;
use serde_json::{Value, json};

use crate::utils;

pub fn create_config() -> ServerConfig {
    ServerConfig {
        hide_error_response_cause: true,
        ..Default::default()
    }
}

/// Boots a server with an empty, isolated store on an ephemeral port and
/// returns its base url.
pub fn spawn_server() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let config = create_config();
    let _handle =
        tokio::spawn(async move { start_server(listener, config, DataLayer::build()).await });

    base_url
}

pub fn claim_request_body() -> Value {
    json!({
        "beneficiaryName": "Ramesh Oraon",
        "village": "Bansjore",
        "district": "Ranchi",
        "state": "Jharkhand",
        "claimType": "Individual Forest Right",
        "landArea": "2 acres",
        "documents": ["Aadhaar card", "land sketch", "Gram Sabha resolution"],
        "coordinates": "23.3441,85.3096"
    })
}

/// Creates a claim through the API and returns its `data` object.
pub async fn create_claim(base_url: &str, body: &Value) -> Value {
    let resp = utils::client()
        .post(format!("{base_url}/api/claims"))
        .json(body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp: Value = resp.json().await.unwrap();
    resp["data"].clone()
}
