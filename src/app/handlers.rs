use axum::{
    body::Body,
    extract::{Extension, Form, Path, Query, State},
    http::{HeaderValue, Request, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::contact::{ContactForm, FormFields};

use super::{render::inject_runtime_tokens, state::AppState};

const CSP_PREFIX: &str = "default-src 'self'; script-src 'self' 'nonce-";
const CSP_SUFFIX: &str = "'; style-src 'self' 'unsafe-inline'; img-src 'self' data:; font-src 'self'; connect-src 'self'; object-src 'none'; frame-ancestors 'self'; base-uri 'self'";

#[derive(Debug, serde::Deserialize)]
pub struct IndexQuery {
    sent: Option<String>,
}

pub async fn index_handler(
    State(state): State<AppState>,
    Query(params): Query<IndexQuery>,
    Extension(nonce): Extension<String>,
) -> Response {
    let sent = matches!(params.sent.as_deref(), Some("1") | Some("true"));
    let template = if sent {
        &state.prerender_home_sent
    } else {
        &state.prerender_home
    };
    Html(inject_runtime_tokens(template, &nonce)).into_response()
}

pub async fn blogs_handler(
    State(state): State<AppState>,
    Extension(nonce): Extension<String>,
) -> Response {
    Html(inject_runtime_tokens(&state.prerender_blogs, &nonce)).into_response()
}

pub async fn blog_post_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Extension(nonce): Extension<String>,
) -> Response {
    let prerendered = match state.article_pages.get(slug.as_str()) {
        Some(p) => p,
        None => return not_found_response(&state, &nonce),
    };
    Html(inject_runtime_tokens(prerendered, &nonce)).into_response()
}

pub async fn docs_handler(
    State(state): State<AppState>,
    Extension(nonce): Extension<String>,
) -> Response {
    Html(inject_runtime_tokens(&state.prerender_docs, &nonce)).into_response()
}

/// Simulated contact submission. The payload is logged and dropped; the
/// fixed delay inside [`ContactForm::submit`] is the whole "delivery".
pub async fn contact_handler(Form(fields): Form<FormFields>) -> Response {
    let mut form = ContactForm::with_fields(fields);
    tracing::info!(
        name = %form.fields().name,
        subject = %form.fields().subject,
        "contact submission received (simulated delivery, payload discarded)"
    );
    if form.submit().await {
        tracing::debug!(status = ?form.status(), "simulated delivery settled");
    }
    Redirect::to("/?sent=1#contact").into_response()
}

pub async fn sitemap_handler(State(state): State<AppState>) -> Response {
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "application/xml; charset=utf-8",
        )],
        state.sitemap.as_ref().to_string(),
    )
        .into_response()
}

pub async fn not_found_handler(
    State(state): State<AppState>,
    Extension(nonce): Extension<String>,
) -> Response {
    not_found_response(&state, &nonce)
}

pub fn not_found_response(state: &AppState, nonce: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(inject_runtime_tokens(&state.not_found, nonce)),
    )
        .into_response()
}

pub async fn security_middleware(mut req: Request<Body>, next: Next) -> Response {
    let nonce = generate_nonce();
    req.extensions_mut().insert(nonce.clone());

    if req.uri().path().len() >= 200 {
        return StatusCode::URI_TOO_LONG.into_response();
    }
    let mut res = next.run(req).await;
    let res_headers = res.headers_mut();
    res_headers.insert(
        axum::http::header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    res_headers.insert(
        axum::http::header::X_FRAME_OPTIONS,
        HeaderValue::from_static("SAMEORIGIN"),
    );
    res_headers.insert(
        axum::http::header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    let mut csp = String::with_capacity(CSP_PREFIX.len() + nonce.len() + CSP_SUFFIX.len());
    csp.push_str(CSP_PREFIX);
    csp.push_str(&nonce);
    csp.push_str(CSP_SUFFIX);
    if let Ok(val) = HeaderValue::from_str(&csp) {
        res_headers.insert(axum::http::header::CONTENT_SECURITY_POLICY, val);
    }
    res_headers.insert(
        "Cross-Origin-Opener-Policy",
        HeaderValue::from_static("same-origin"),
    );
    res
}

#[inline]
fn generate_nonce() -> String {
    use rand::Rng;
    let charset = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::rng();
    (0..16)
        .map(|_| {
            let idx = rng.random_range(0..charset.len());
            charset[idx] as char
        })
        .collect()
}
