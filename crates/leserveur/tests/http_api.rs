//! Endpoint tests driven through the router with `tower::ServiceExt`.

use axum::body::Body;
use http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::util::ServiceExt;

use leserveur::config::ServerConfig;
use leserveur::handlers::{create_router, AppState};

fn app() -> axum::Router {
    create_router().with_state(AppState::new(ServerConfig::default()))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is JSON")
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body is UTF-8")
}

fn seo_check_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/seo-check")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request")
}

#[tokio::test]
async fn seo_check_scores_known_blog_url() {
    let response = app()
        .oneshot(seo_check_request(
            serde_json::json!({ "url": "https://example.com/blog/1" }),
        ))
        .await
        .expect("request");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "public, max-age=300"
    );

    let json = body_json(response).await;
    assert_eq!(json["url"], "https://example.com/blog/1");
    assert_eq!(json["score"], 100);
    assert_eq!(json["recommendations"], serde_json::json!([]));
    assert!(json.get("title").is_some());
    assert!(json.get("openGraph").is_some());
    assert!(json.get("structured_data").is_some());
}

#[tokio::test]
async fn seo_check_contact_url_lists_recommendations() {
    let response = app()
        .oneshot(seo_check_request(
            serde_json::json!({ "url": "https://example.com/contacto" }),
        ))
        .await
        .expect("request");

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let recommendations = json["recommendations"].as_array().expect("array");
    assert!(recommendations
        .iter()
        .any(|r| r == "Twitter Card image is missing"));
}

#[tokio::test]
async fn seo_check_requires_url() {
    let response = app()
        .oneshot(seo_check_request(serde_json::json!({})))
        .await
        .expect("request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "URL is required");
}

#[tokio::test]
async fn seo_check_rejects_blank_url() {
    let response = app()
        .oneshot(seo_check_request(serde_json::json!({ "url": "   " })))
        .await
        .expect("request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn sitemap_renders_all_demo_entries() {
    let request = Request::builder()
        .uri("/sitemap.xml")
        .header("x-forwarded-proto", "https")
        .header(header::HOST, "example.com")
        .body(Body::empty())
        .expect("build request");

    let response = app().oneshot(request).await.expect("request");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/xml");
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "public, max-age=3600"
    );

    let xml = body_text(response).await;
    assert!(xml.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
    assert_eq!(xml.matches("<url>").count(), 13);
    assert!(xml.contains("<loc>https://example.com/blog/1</loc>"));
    assert!(xml.contains("<loc>https://example.com/categoria/seo</loc>"));
}

#[tokio::test]
async fn robots_txt_references_sitemap() {
    let request = Request::builder()
        .uri("/robots.txt")
        .body(Body::empty())
        .expect("build request");

    let response = app().oneshot(request).await.expect("request");

    assert_eq!(response.status(), StatusCode::OK);
    let text = body_text(response).await;
    assert!(text.contains("User-agent: *"));
    assert!(text.contains("Disallow: /private/"));
    assert!(text.contains("Sitemap: http://localhost:3000/sitemap.xml"));
}

#[tokio::test]
async fn site_stats_returns_fixed_aggregate() {
    let request = Request::builder()
        .uri("/api/site-stats")
        .body(Body::empty())
        .expect("build request");

    let response = app().oneshot(request).await.expect("request");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "public, max-age=3600"
    );

    let json = body_json(response).await;
    assert_eq!(json["totalPages"], 7);
    assert_eq!(json["totalBlogPosts"], 5);
    assert!(json["technicalSeo"]["hasSitemap"].as_bool().unwrap());
}

#[tokio::test]
async fn health_reports_ok() {
    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .expect("build request");

    let response = app().oneshot(request).await.expect("request");

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "leseo");
}
