use serde_json::Value;
use uuid::Uuid;

use crate::{fixtures, utils};

#[tokio::test]
async fn test_get_claim_success() {
    // GIVEN
    let base_url = fixtures::spawn_server();
    let created = fixtures::create_claim(&base_url, &fixtures::claim_request_body()).await;
    let id = created["id"].as_str().unwrap();

    // WHEN
    let resp = utils::client()
        .get(format!("{base_url}/api/claims/{id}"))
        .send()
        .await
        .unwrap();

    // THEN
    assert_eq!(resp.status(), 200);
    let resp: Value = resp.json().await.unwrap();
    assert_eq!(resp["success"], true);
    assert_eq!(resp["data"], created);
}

#[tokio::test]
async fn test_get_claim_unknown_id_returns_404() {
    // GIVEN
    let base_url = fixtures::spawn_server();

    // WHEN
    let resp = utils::client()
        .get(format!("{base_url}/api/claims/{}", Uuid::new_v4()))
        .send()
        .await
        .unwrap();

    // THEN
    assert_eq!(resp.status(), 404);
    let resp: Value = resp.json().await.unwrap();
    assert_eq!(resp["success"], false);
}

#[tokio::test]
async fn test_get_claim_malformed_id_returns_400() {
    // GIVEN
    let base_url = fixtures::spawn_server();

    // WHEN
    let resp = utils::client()
        .get(format!("{base_url}/api/claims/not-a-uuid"))
        .send()
        .await
        .unwrap();

    // THEN
    assert_eq!(resp.status(), 400);
    let resp: Value = resp.json().await.unwrap();
    assert_eq!(resp["success"], false);
}
