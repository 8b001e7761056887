use serde_json::{Value, json};

use crate::{fixtures, utils};

#[tokio::test]
async fn test_create_contact_message_success() {
    // GIVEN
    let base_url = fixtures::spawn_server();

    // WHEN
    let resp = utils::client()
        .post(format!("{base_url}/api/contact"))
        .json(&json!({
            "name": "Asha Devi",
            "email": "asha@example.com",
            "organization": "Vanvasi Seva Kendra",
            "message": "Requesting help with a community claim."
        }))
        .send()
        .await
        .unwrap();

    // THEN
    assert_eq!(resp.status(), 200);
    let resp: Value = resp.json().await.unwrap();
    assert_eq!(resp["success"], true);
    assert_eq!(resp["message"], "Contact message received successfully");

    let id = resp["id"].as_str().unwrap();
    assert!(!id.is_empty());

    let list = utils::client()
        .get(format!("{base_url}/api/contact"))
        .send()
        .await
        .unwrap();
    let list: Value = list.json().await.unwrap();
    let data = list["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"].as_str().unwrap(), id);
    assert_eq!(data[0]["name"], "Asha Devi");
}

#[tokio::test]
async fn test_create_contact_message_with_malformed_email_fails() {
    // GIVEN
    let base_url = fixtures::spawn_server();

    // WHEN
    let resp = utils::client()
        .post(format!("{base_url}/api/contact"))
        .json(&json!({
            "name": "Asha Devi",
            "email": "not-an-email",
            "organization": "Vanvasi Seva Kendra",
            "message": "Hello"
        }))
        .send()
        .await
        .unwrap();

    // THEN
    assert_eq!(resp.status(), 400);
    let resp: Value = resp.json().await.unwrap();
    assert_eq!(resp["success"], false);

    let errors = resp["errors"].as_array().unwrap();
    assert!(errors.iter().any(|error| error["field"] == "email"));
}

#[tokio::test]
async fn test_create_contact_message_with_missing_field_fails() {
    // GIVEN
    let base_url = fixtures::spawn_server();

    // WHEN
    let resp = utils::client()
        .post(format!("{base_url}/api/contact"))
        .json(&json!({
            "name": "Asha Devi",
            "email": "asha@example.com"
        }))
        .send()
        .await
        .unwrap();

    // THEN
    assert_eq!(resp.status(), 400);
    let resp: Value = resp.json().await.unwrap();
    assert_eq!(resp["success"], false);
}
