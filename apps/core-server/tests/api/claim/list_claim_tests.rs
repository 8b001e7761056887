use std::time::Duration;

use serde_json::{Value, json};

use crate::{fixtures, utils};

#[tokio::test]
async fn test_list_claims_empty_store() {
    // GIVEN
    let base_url = fixtures::spawn_server();

    // WHEN
    let resp = utils::client()
        .get(format!("{base_url}/api/claims"))
        .send()
        .await
        .unwrap();

    // THEN
    assert_eq!(resp.status(), 200);
    let resp: Value = resp.json().await.unwrap();
    assert_eq!(resp["success"], true);
    assert_eq!(resp["data"], json!([]));
}

#[tokio::test]
async fn test_list_claims_newest_first() {
    // GIVEN
    let base_url = fixtures::spawn_server();

    let mut body = fixtures::claim_request_body();
    body["beneficiaryName"] = json!("First Beneficiary");
    let first = fixtures::create_claim(&base_url, &body).await;

    tokio::time::sleep(Duration::from_millis(10)).await;

    body["beneficiaryName"] = json!("Second Beneficiary");
    let second = fixtures::create_claim(&base_url, &body).await;

    // WHEN
    let resp = utils::client()
        .get(format!("{base_url}/api/claims"))
        .send()
        .await
        .unwrap();

    // THEN
    assert_eq!(resp.status(), 200);
    let resp: Value = resp.json().await.unwrap();

    let data = resp["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["id"], second["id"]);
    assert_eq!(data[1]["id"], first["id"]);
}
