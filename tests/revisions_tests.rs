use directus_client::transport::mock::MockTransport;
use directus_client::{Client, PrimaryKey, QueryParams};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

fn mock_client() -> (Client, Arc<MockTransport>) {
    let transport = Arc::new(MockTransport::new());
    (Client::with_transport(transport.clone()), transport)
}

fn fields_params() -> QueryParams {
    QueryParams::new().with("fields", json!(["title", "author"]))
}

// ── item_revisions ──────────────────────────────────────────────

#[tokio::test]
async fn revisions_error_on_missing_collection() {
    let (client, transport) = mock_client();

    let err = client.item_revisions("", 15, None).await.unwrap_err();
    assert!(err.is_validation());
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn revisions_error_on_missing_primary_key() {
    let (client, transport) = mock_client();

    let err = client.item_revisions("projects", "", None).await.unwrap_err();
    assert!(err.is_validation());
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn revisions_call_get_on_the_items_endpoint() {
    let (client, transport) = mock_client();
    transport.queue_response(json!({ "data": [] }));

    client
        .item_revisions("projects", 15, Some(fields_params()))
        .await
        .unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/items/projects/15/revisions");
    assert_eq!(requests[0].params, Some(fields_params()));
    assert_eq!(requests[0].body, None);
}

#[tokio::test]
async fn revisions_call_get_on_the_system_endpoint() {
    let (client, transport) = mock_client();
    transport.queue_response(json!({ "data": [] }));

    client
        .item_revisions("directus_users", 15, Some(fields_params()))
        .await
        .unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/users/15/revisions");
    assert_eq!(requests[0].params, Some(fields_params()));
}

#[tokio::test]
async fn revisions_are_unwrapped_from_the_envelope() {
    let (client, transport) = mock_client();
    transport.queue_response(json!({
        "data": [
            { "id": 130, "collection": "projects", "item": 15, "delta": { "title": "v2" } },
            { "id": 131, "collection": "projects", "item": 15, "delta": { "title": "v3" } }
        ]
    }));

    let revisions = client.item_revisions("projects", 15, None).await.unwrap();

    assert_eq!(revisions.len(), 2);
    assert_eq!(revisions[0].id, Some(130));
    assert_eq!(revisions[1].delta["title"], json!("v3"));
    assert_eq!(revisions[0].item, Some(PrimaryKey::Integer(15)));
}

#[tokio::test]
async fn revisions_accept_textual_primary_keys() {
    let (client, transport) = mock_client();
    transport.queue_response(json!({ "data": [] }));

    client
        .item_revisions("pages", "about-us", None)
        .await
        .unwrap();

    assert_eq!(transport.requests()[0].path, "/items/pages/about-us/revisions");
}

// ── revert ──────────────────────────────────────────────────────

#[tokio::test]
async fn revert_errors_on_missing_collection() {
    let (client, transport) = mock_client();

    let err = client.revert("", 15, 130).await.unwrap_err();
    assert!(err.is_validation());
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn revert_errors_on_missing_primary_key() {
    let (client, transport) = mock_client();

    let err = client.revert("projects", "", 130).await.unwrap_err();
    assert!(err.is_validation());
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn revert_errors_on_missing_revision_id() {
    let (client, transport) = mock_client();

    let err = client.revert("projects", 15, "").await.unwrap_err();
    assert!(err.is_validation());
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn revert_calls_patch_on_the_items_endpoint() {
    let (client, transport) = mock_client();
    transport.queue_response(json!({ "data": { "id": 15, "title": "Launch" } }));

    let reverted = client.revert("projects", 15, 130).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "PATCH");
    assert_eq!(requests[0].path, "/items/projects/15/revert/130");
    assert_eq!(requests[0].body, None);
    assert_eq!(reverted["title"], json!("Launch"));
}

#[tokio::test]
async fn revert_calls_patch_on_the_system_endpoint() {
    let (client, transport) = mock_client();

    client.revert("directus_users", 15, 130).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "PATCH");
    assert_eq!(requests[0].path, "/users/15/revert/130");
    assert_eq!(requests[0].body, None);
}
