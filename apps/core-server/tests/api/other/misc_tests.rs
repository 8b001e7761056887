use crate::{fixtures, utils};

#[tokio::test]
async fn test_health_check() {
    // GIVEN
    let base_url = fixtures::spawn_server();

    // WHEN
    let resp = utils::client()
        .get(format!("{base_url}/health"))
        .send()
        .await
        .unwrap();

    // THEN
    assert_eq!(resp.status(), 204);
}
