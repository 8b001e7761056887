use std::time::Duration;

use serde_json::{Value, json};
use uuid::Uuid;

use crate::{fixtures, utils};

#[tokio::test]
async fn test_update_claim_status_success() {
    // GIVEN
    let base_url = fixtures::spawn_server();
    let created = fixtures::create_claim(&base_url, &fixtures::claim_request_body()).await;
    let id = created["id"].as_str().unwrap();

    // the wire format has millisecond precision; make sure the update lands
    // in a later millisecond than the creation
    tokio::time::sleep(Duration::from_millis(10)).await;

    // WHEN
    let resp = utils::client()
        .patch(format!("{base_url}/api/claims/{id}/status"))
        .json(&json!({ "status": "approved" }))
        .send()
        .await
        .unwrap();

    // THEN
    assert_eq!(resp.status(), 200);
    let resp: Value = resp.json().await.unwrap();
    assert_eq!(resp["success"], true);

    let data = &resp["data"];
    assert_eq!(data["status"], "approved");
    assert_eq!(data["createdAt"], created["createdAt"]);
    // fixed-width RFC3339 UTC strings compare chronologically
    assert!(data["updatedAt"].as_str().unwrap() > created["updatedAt"].as_str().unwrap());
}

#[tokio::test]
async fn test_update_claim_status_allows_any_transition() {
    // GIVEN
    let base_url = fixtures::spawn_server();
    let created = fixtures::create_claim(&base_url, &fixtures::claim_request_body()).await;
    let id = created["id"].as_str().unwrap();

    for status in ["rejected", "pending", "approved"] {
        // WHEN
        let resp = utils::client()
            .patch(format!("{base_url}/api/claims/{id}/status"))
            .json(&json!({ "status": status }))
            .send()
            .await
            .unwrap();

        // THEN
        assert_eq!(resp.status(), 200);
        let resp: Value = resp.json().await.unwrap();
        assert_eq!(resp["data"]["status"], status);
    }
}

#[tokio::test]
async fn test_update_claim_status_unknown_id_returns_404() {
    // GIVEN
    let base_url = fixtures::spawn_server();

    // WHEN
    let resp = utils::client()
        .patch(format!("{base_url}/api/claims/{}/status", Uuid::new_v4()))
        .json(&json!({ "status": "approved" }))
        .send()
        .await
        .unwrap();

    // THEN
    assert_eq!(resp.status(), 404);
    let resp: Value = resp.json().await.unwrap();
    assert_eq!(resp["success"], false);
}

#[tokio::test]
async fn test_update_claim_status_rejects_unknown_status() {
    // GIVEN
    let base_url = fixtures::spawn_server();
    let created = fixtures::create_claim(&base_url, &fixtures::claim_request_body()).await;
    let id = created["id"].as_str().unwrap();

    // WHEN
    let resp = utils::client()
        .patch(format!("{base_url}/api/claims/{id}/status"))
        .json(&json!({ "status": "archived" }))
        .send()
        .await
        .unwrap();

    // THEN
    assert_eq!(resp.status(), 400);
    let resp: Value = resp.json().await.unwrap();
    assert_eq!(resp["success"], false);
}
