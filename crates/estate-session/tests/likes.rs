//! Integration tests for `LikeRegistry` optimistic toggling.

use std::time::Duration;

use estate_api::EstateClient;
use estate_session::{LikeError, LikeRegistry};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn registry_for(server: &MockServer) -> LikeRegistry {
    let client = EstateClient::new(&server.uri(), 5, "estate-test/0.1")
        .expect("client construction should not fail");
    LikeRegistry::new(client)
}

async fn mount_liked(server: &MockServer, ids: &[i64]) {
    let records: Vec<serde_json::Value> = ids
        .iter()
        .enumerate()
        .map(|(i, id)| json!({"id": i + 1, "ad_id": id, "liked_at": "2025-01-01"}))
        .collect();
    Mock::given(method("GET"))
        .and(path("/likes/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(records))
        .mount(server)
        .await;
}

#[tokio::test]
async fn load_likes_fetches_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/likes/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "ad_id": 7, "liked_at": "2025-01-01"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let registry = registry_for(&server);
    registry.load_likes().await;
    registry.load_likes().await;

    assert!(registry.is_liked(7).await);
    assert!(!registry.is_liked(8).await);
}

#[tokio::test]
async fn unauthenticated_load_leaves_registry_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/likes/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Not authenticated"})))
        .mount(&server)
        .await;

    let registry = registry_for(&server);
    registry.load_likes().await;
    assert!(registry.liked_ids().await.is_empty());
}

#[tokio::test]
async fn toggle_likes_then_unlikes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/like/"))
        .and(body_json(json!({"ad_id": 10})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Ad liked successfully"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/like/10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Ad unliked successfully"})))
        .expect(1)
        .mount(&server)
        .await;

    let registry = registry_for(&server);
    assert!(registry.toggle(10).await.unwrap());
    assert!(registry.is_liked(10).await);

    assert!(!registry.toggle(10).await.unwrap());
    assert!(!registry.is_liked(10).await);
    assert!(!registry.is_pending(10).await);
}

#[tokio::test]
async fn rejected_like_rolls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/like/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"detail": "Ad already liked"})))
        .mount(&server)
        .await;

    let registry = registry_for(&server);
    let err = registry.toggle(10).await.unwrap_err();

    assert!(
        matches!(err, LikeError::Mutation { listing_id: 10, ref message, .. } if message == "Ad already liked"),
        "got {err:?}"
    );
    assert!(!registry.is_liked(10).await);
    assert!(!registry.is_pending(10).await);
}

#[tokio::test]
async fn failed_unlike_restores_like() {
    let server = MockServer::start().await;
    mount_liked(&server, &[10]).await;
    Mock::given(method("DELETE"))
        .and(path("/like/10"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let registry = registry_for(&server);
    registry.load_likes().await;
    assert!(registry.toggle(10).await.is_err());
    assert!(registry.is_liked(10).await);
}

#[tokio::test]
async fn optimistic_state_is_visible_and_second_toggle_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/like/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "Ad liked successfully"}))
                .set_delay(Duration::from_millis(300)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let registry = registry_for(&server);
    let (first, (liked_during, second)) = tokio::join!(registry.toggle(10), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        (registry.is_liked(10).await, registry.toggle(10).await)
    });

    assert!(liked_during);
    assert!(matches!(second, Err(LikeError::InFlight { listing_id: 10 })));
    assert!(first.unwrap());
    assert!(registry.is_liked(10).await);
}

#[tokio::test]
async fn toggles_on_different_listings_are_independent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/like/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "Ad liked successfully"}))
                .set_delay(Duration::from_millis(100)),
        )
        .expect(2)
        .mount(&server)
        .await;

    let registry = registry_for(&server);
    let (a, b) = tokio::join!(registry.toggle(1), registry.toggle(2));
    assert!(a.unwrap());
    assert!(b.unwrap());
    assert_eq!(registry.liked_ids().await.into_iter().collect::<Vec<_>>(), vec![1, 2]);
}

#[tokio::test]
async fn late_snapshot_keeps_toggle_confirmed_during_load() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/likes/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_millis(300)),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/like/"))
        .and(body_json(json!({"ad_id": 10})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Ad liked successfully"})))
        .expect(1)
        .mount(&server)
        .await;

    let registry = registry_for(&server);
    let ((), toggled) = tokio::join!(registry.load_likes(), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        registry.toggle(10).await
    });

    assert!(toggled.unwrap());
    assert!(registry.is_liked(10).await);
}

#[tokio::test]
async fn concurrent_loads_fetch_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/likes/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": 1, "ad_id": 5, "liked_at": "2025-01-01"}]))
                .set_delay(Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let registry = registry_for(&server);
    tokio::join!(registry.load_likes(), registry.load_likes());

    assert!(registry.is_liked(5).await);
}
