mod handlers;
pub mod render;
mod state;

use std::env;

use axum::http::HeaderValue;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;

use crate::logging;

pub async fn run() -> anyhow::Result<()> {
    let app_state = state::build_prerendered_state()?;
    let app = router(app_state).layer(middleware::from_fn(logging::access_log_middleware));

    let bind = env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let listener = TcpListener::bind(format!("{bind}:{port}")).await?;
    tracing::info!("Server running on http://{bind}:{port}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Route table plus per-request middleware. The access-log layer is added
/// by [`run`]; it needs the peer address, which only exists on a real
/// connection.
fn router(app_state: state::AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index_handler))
        .route("/blogs", get(handlers::blogs_handler))
        .route("/blogs/{slug}", get(handlers::blog_post_handler))
        .route("/docs", get(handlers::docs_handler))
        .route("/contact", post(handlers::contact_handler))
        .route("/sitemap.xml", get(handlers::sitemap_handler))
        .nest_service("/assets", ServeDir::new("static"))
        .fallback(handlers::not_found_handler)
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(handlers::security_middleware))
        .layer(middleware::from_fn(cache_headers_middleware))
        .with_state(app_state)
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = sigterm.recv() => {},
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

async fn cache_headers_middleware(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::http::Response<axum::body::Body> {
    let cache_enabled = env::var("CACHE_ENABLED")
        .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE" | "on" | "ON"))
        .unwrap_or(false);
    let is_asset = req.uri().path().starts_with("/assets/");
    let mut res = next.run(req).await;

    let cc = if is_asset && cache_enabled {
        "public, max-age=31536000, immutable"
    } else {
        "no-cache, must-revalidate"
    };
    res.headers_mut().insert(
        axum::http::header::CACHE_CONTROL,
        HeaderValue::from_static(cc),
    );
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let state = state::build_prerendered_state().expect("startup must succeed");
        router(state)
    }

    async fn get_page(app: Router, uri: &str) -> (StatusCode, String) {
        let res = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = res.status();
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[tokio::test]
    async fn landing_page_serves_all_sections() {
        let (status, body) = get_page(test_router(), "/").await;
        assert_eq!(status, StatusCode::OK);
        for id in ["home", "about", "skills", "projects", "education", "contact"] {
            assert!(body.contains(&format!(r#"id="{id}""#)), "missing {id}");
        }
        assert!(body.contains("Atithi Singh"));
        // the nonce token must never leak into a response
        assert!(!body.contains("__CSP_NONCE__"));
    }

    #[tokio::test]
    async fn blog_index_lists_featured_articles() {
        let (status, body) = get_page(test_router(), "/blogs").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Technical Blogs"));
        assert!(body.contains("Building Redis from Scratch"));
    }

    #[tokio::test]
    async fn known_slug_serves_the_matching_article() {
        let (status, body) =
            get_page(test_router(), "/blogs/building-redis-from-scratch").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("RESP Protocol"));
        assert!(body.contains("<pre style="));
    }

    #[tokio::test]
    async fn unknown_slug_renders_the_fallback() {
        let (status, body) = get_page(test_router(), "/blogs/not-a-real-article").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Blog Post Not Found"));
        assert!(body.contains(r#"href="/blogs""#));
    }

    #[tokio::test]
    async fn docs_page_lists_every_project() {
        let (status, body) = get_page(test_router(), "/docs").await;
        assert_eq!(status, StatusCode::OK);
        for title in ["Veren", "HLS Video Streaming Platform", "Redis Implementation", "Zerodha Clone"] {
            assert!(body.contains(title), "missing project {title}");
        }
    }

    #[tokio::test]
    async fn unknown_route_falls_back_to_404() {
        let (status, _) = get_page(test_router(), "/definitely/not/here").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn sitemap_is_served_as_xml() {
        let res = test_router()
            .oneshot(
                Request::builder()
                    .uri("/sitemap.xml")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let ct = res.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(ct.to_str().unwrap().starts_with("application/xml"));
    }

    #[tokio::test]
    async fn responses_carry_security_headers() {
        let res = test_router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let headers = res.headers();
        assert!(headers.contains_key(header::CONTENT_SECURITY_POLICY));
        assert_eq!(headers.get(header::X_FRAME_OPTIONS).unwrap(), "SAMEORIGIN");
        assert_eq!(
            headers.get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
            "nosniff"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn contact_submission_redirects_to_success_variant() {
        let res = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/contact")
                    .header(
                        header::CONTENT_TYPE,
                        "application/x-www-form-urlencoded",
                    )
                    .body(Body::from(
                        "name=Ada&email=ada%40example.com&subject=Hi&message=Hello",
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            res.headers().get(header::LOCATION).unwrap(),
            "/?sent=1#contact"
        );
    }

    #[tokio::test]
    async fn sent_query_selects_the_success_variant() {
        let (status, body) = get_page(test_router(), "/?sent=1").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Message sent"));
    }
}
