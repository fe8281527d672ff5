// Router-level checks against a freshly seeded site.

use api_rest::{router, AppState};
use api_shared::{ChapterRes, HeroRes, ListChaptersRes, ReadChapterRes, SiteInfoRes};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use saga_core::{CoreConfig, SiteState};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

fn app() -> axum::Router {
    let site = SiteState::initialise(&CoreConfig::default()).expect("seeded site");
    router(AppState::new(site))
}

async fn send(app: &axum::Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes()
        .to_vec();
    (status, bytes)
}

async fn get_json<T: DeserializeOwned>(app: &axum::Router, uri: &str) -> (StatusCode, T) {
    let (status, bytes) = send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await;
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

#[tokio::test]
async fn lists_seed_chapters_in_number_order() {
    let app = app();
    let (status, res): (_, ListChaptersRes) = get_json(&app, "/chapters").await;

    assert_eq!(status, StatusCode::OK);
    let numbers: Vec<i64> = res.chapters.iter().map(|c| c.number).collect();
    assert_eq!(numbers, [1, 2, 3]);
    assert_eq!(res.chapters[0].label, "Chapter 1");
    assert!(res.empty_message.is_none());
}

#[tokio::test]
async fn nova_query_matches_chapters_two_and_three() {
    let app = app();
    let (_, res): (_, ListChaptersRes) = get_json(&app, "/chapters?q=NOVA").await;

    let ids: Vec<&str> = res.chapters.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["ch2", "ch3"]);
    assert_eq!(res.query, "NOVA");
}

#[tokio::test]
async fn unmatched_query_reports_empty_state() {
    let app = app();
    let (status, res): (_, ListChaptersRes) = get_json(&app, "/chapters?q=zzzz").await;

    assert_eq!(status, StatusCode::OK);
    assert!(res.chapters.is_empty());
    assert_eq!(
        res.empty_message.as_deref(),
        Some("No chapters match your search.")
    );
}

#[tokio::test]
async fn created_chapter_is_listed_and_readable() {
    let app = app();
    let (status, bytes) = send(
        &app,
        json_request(
            Method::POST,
            "/chapters",
            r#"{"title":"Nova Rising","number":"2","tags":" Nova ,, Ojas ","content":"A\nB"}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created: ChapterRes = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(created.number, 2);
    assert_eq!(created.tags, vec!["Nova", "Ojas"]);

    let (_, res): (_, ListChaptersRes) = get_json(&app, "/chapters?q=nova").await;
    let ids: Vec<&str> = res.chapters.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["ch2", created.id.as_str(), "ch3"]);

    let (status, view): (_, ReadChapterRes) =
        get_json(&app, &format!("/chapters/{}", created.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view.heading, "Chapter 2: Nova Rising");
    assert_eq!(view.content, "A\nB");
}

#[tokio::test]
async fn empty_body_creates_default_chapter() {
    let app = app();
    let (status, bytes) = send(&app, json_request(Method::POST, "/chapters", "{}")).await;

    assert_eq!(status, StatusCode::CREATED);
    let created: ChapterRes = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(created.title, "Untitled");
    assert_eq!(created.number, 1);
    assert_eq!(created.content, "(Your chapter text…)");
    assert!(created.tags.is_empty());
}

#[tokio::test]
async fn mistyped_fields_create_default_chapter() {
    let app = app();
    let (status, bytes) = send(
        &app,
        json_request(
            Method::POST,
            "/chapters",
            r#"{"title":5,"number":true,"tags":["A","B"],"content":null}"#,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let created: ChapterRes = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(created.title, "Untitled");
    assert_eq!(created.number, 1);
    assert!(created.tags.is_empty());
    assert_eq!(created.content, "(Your chapter text…)");
}

#[tokio::test]
async fn partial_body_keeps_given_fields() {
    let app = app();
    let (status, bytes) = send(
        &app,
        json_request(Method::POST, "/chapters", r#"{"number":7,"teaser":"Soon"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let created: ChapterRes = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(created.number, 7);
    assert_eq!(created.teaser, "Soon");
    assert_eq!(created.title, "Untitled");
}

#[tokio::test]
async fn malformed_chapter_id_is_bad_request() {
    let app = app();
    let (status, _) = send(
        &app,
        Request::builder()
            .uri("/chapters/%20x")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_chapter_is_not_found() {
    let app = app();
    let (status, _) = send(
        &app,
        Request::builder()
            .uri("/chapters/ch99")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn hero_set_and_reset() {
    let app = app();

    let (_, bytes) = send(
        &app,
        json_request(Method::PUT, "/hero", r#"{"url":"https://example.com/h.jpg"}"#),
    )
    .await;
    let hero: HeroRes = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(hero.url, "https://example.com/h.jpg");
    assert!(!hero.is_default);

    let (_, info): (_, SiteInfoRes) = get_json(&app, "/site").await;
    assert_eq!(info.hero_url, "https://example.com/h.jpg");

    let (_, bytes) = send(
        &app,
        Request::builder()
            .method(Method::DELETE)
            .uri("/hero")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    let hero: HeroRes = serde_json::from_slice(&bytes).unwrap();
    assert!(hero.is_default);

    let (_, bytes) = send(&app, json_request(Method::PUT, "/hero", r#"{"url":""}"#)).await;
    let hero: HeroRes = serde_json::from_slice(&bytes).unwrap();
    assert!(hero.is_default);
}

#[tokio::test]
async fn health_is_ok() {
    let app = app();
    let (status, bytes) = send(
        &app,
        Request::builder().uri("/health").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["ok"], true);
}
