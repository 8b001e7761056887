use std::time::Duration;

use serde_json::{Value, json};

use crate::{fixtures, utils};

async fn submit_message(base_url: &str, name: &str) {
    let resp = utils::client()
        .post(format!("{base_url}/api/contact"))
        .json(&json!({
            "name": name,
            "email": "contact@example.com",
            "organization": "Gram Sabha Bansjore",
            "message": "Please share the claim process details."
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_list_contact_messages_empty_store() {
    // GIVEN
    let base_url = fixtures::spawn_server();

    // WHEN
    let resp = utils::client()
        .get(format!("{base_url}/api/contact"))
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
async fn test_list_contact_messages_newest_first() {
    // GIVEN
    let base_url = fixtures::spawn_server();

    submit_message(&base_url, "First Sender").await;
    tokio::time::sleep(Duration::from_millis(10)).await;
    submit_message(&base_url, "Second Sender").await;

    // WHEN
    let resp = utils::client()
        .get(format!("{base_url}/api/contact"))
        .send()
        .await
        .unwrap();

    // THEN
    assert_eq!(resp.status(), 200);
    let resp: Value = resp.json().await.unwrap();

    let data = resp["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["name"], "Second Sender");
    assert_eq!(data[1]["name"], "First Sender");
}
