use std::collections::HashMap;

use leptos::prelude::*;
use serde_json::json;

use crate::components::{ArticleListPage, ArticlePage, DocsPage, HomePage, NotFoundPage};
use crate::content::Article;
use crate::sections::{resolve_active, Section, ACTIVATION_BAND};

#[cfg(not(debug_assertions))]
use minify_html::{minify, Cfg as HtmlMinCfg};

pub(crate) const CSP_NONCE_TOKEN: &str = "__CSP_NONCE__";
pub(crate) const SITE_URL: &str = "https://atithisingh.dev";
const SITE_NAME: &str = "Atithi Singh";
const SITE_DESCRIPTION: &str =
    "Atithi Singh - backend developer building complex systems from first principles.";

#[derive(Clone, Debug, Default)]
pub(crate) struct HtmlOptions {
    pub meta: Option<HashMap<String, String>>,
    pub structured_data: Option<Vec<String>>,
    pub head_scripts: Vec<String>,
}

pub(crate) fn wrap_html_with_options(body: &str, title: &str, opts: &HtmlOptions) -> String {
    let meta_tags = opts.meta.as_ref().map(render_meta_tags).unwrap_or_default();
    let structured_json = opts
        .structured_data
        .as_ref()
        .map(|entries| {
            entries
                .iter()
                .map(|s| {
                    format!(
                        r#"<script type="application/ld+json" nonce="{CSP_NONCE_TOKEN}">{s}</script>"#
                    )
                })
                .collect::<Vec<_>>()
                .join("\n  ")
        })
        .unwrap_or_default();
    let head_scripts = if opts.head_scripts.is_empty() {
        String::new()
    } else {
        opts.head_scripts.join("\n  ")
    };
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{title}</title>
  {meta_tags}
  {structured_json}
  <meta name="theme-color" content="#0a0f0a" />
  <link rel="icon" href="/assets/favicon.svg" type="image/svg+xml" />
  <link rel="stylesheet" href="/assets/css/site.css" />
  {head_scripts}
</head>
<body>
{body}
<script src="/assets/js/site.js" nonce="{CSP_NONCE_TOKEN}" defer></script>
</body>
</html>"##
    )
}

/// Scrollspy configuration script for the landing page. The section order
/// and the activation band come straight from the Rust registry so the
/// client cannot drift from [`crate::sections::resolve_active`].
fn scrollspy_config_script() -> String {
    // No geometry exists at render time; an empty snapshot resolves to the
    // section the page opens on.
    let config = json!({
        "band": ACTIVATION_BAND,
        "initial": resolve_active(&[], Section::Home).id(),
        "sections": Section::ALL.iter().map(|s| s.id()).collect::<Vec<_>>(),
    });
    format!(r#"<script nonce="{CSP_NONCE_TOKEN}">window.__SCROLLSPY = {config};</script>"#)
}

pub(crate) fn prerender_home_page(sent: bool) -> String {
    let rendered = Owner::new_root(None).with(|| view! { <HomePage sent=sent /> }.to_html());

    let opts = HtmlOptions {
        meta: Some(site_meta("/", "website", SITE_DESCRIPTION)),
        structured_data: Some(vec![
            build_site_structured_data(),
            build_person_structured_data(),
        ]),
        head_scripts: vec![scrollspy_config_script()],
    };
    maybe_minify(wrap_html_with_options(
        &rendered,
        "Atithi Singh | Backend Developer",
        &opts,
    ))
}

pub(crate) fn prerender_blog_index_page() -> String {
    let rendered = Owner::new_root(None).with(|| view! { <ArticleListPage /> }.to_html());

    let opts = HtmlOptions {
        meta: Some(site_meta(
            "/blogs",
            "website",
            "Deep-dive articles on backend topics, systems programming, and infrastructure.",
        )),
        structured_data: Some(vec![build_site_structured_data()]),
        ..Default::default()
    };
    maybe_minify(wrap_html_with_options(
        &rendered,
        "Technical Blogs | Atithi Singh",
        &opts,
    ))
}

pub(crate) fn prerender_article_page(article: &'static Article, body_html: &str) -> String {
    let body = body_html.to_string();
    let rendered = Owner::new_root(None)
        .with(|| view! { <ArticlePage article=article body_html=body /> }.to_html());

    let path = format!("/blogs/{}", article.slug);
    let mut meta = site_meta(&path, "article", article.excerpt);
    meta.insert("og:title".to_string(), article.title.to_string());
    meta.insert(
        "article:published_time".to_string(),
        article.date.to_string(),
    );

    let opts = HtmlOptions {
        meta: Some(meta),
        structured_data: Some(vec![
            build_site_structured_data(),
            build_article_structured_data(article),
        ]),
        ..Default::default()
    };
    maybe_minify(wrap_html_with_options(
        &rendered,
        &format!("{} | Atithi Singh", article.title),
        &opts,
    ))
}

pub(crate) fn prerender_docs_page() -> String {
    let rendered = Owner::new_root(None).with(|| view! { <DocsPage /> }.to_html());

    let opts = HtmlOptions {
        meta: Some(site_meta(
            "/docs",
            "website",
            "Documentation for all my projects, from architecture decisions to implementation details.",
        )),
        structured_data: Some(vec![build_site_structured_data()]),
        ..Default::default()
    };
    maybe_minify(wrap_html_with_options(
        &rendered,
        "Project Documentation | Atithi Singh",
        &opts,
    ))
}

pub(crate) fn prerender_not_found_page() -> String {
    let rendered = Owner::new_root(None).with(|| view! { <NotFoundPage /> }.to_html());

    let mut meta = HashMap::new();
    meta.insert("robots".to_string(), "noindex, nofollow".to_string());
    let opts = HtmlOptions {
        meta: Some(meta),
        ..Default::default()
    };
    maybe_minify(wrap_html_with_options(
        &rendered,
        "Not Found | Atithi Singh",
        &opts,
    ))
}

pub(crate) fn inject_runtime_tokens(template: &str, nonce: &str) -> String {
    template.replace(CSP_NONCE_TOKEN, nonce)
}

fn site_meta(path: &str, og_type: &str, description: &str) -> HashMap<String, String> {
    let mut m = HashMap::new();
    m.insert("description".to_string(), description.to_string());
    m.insert("og:description".to_string(), description.to_string());
    m.insert("og:site_name".to_string(), SITE_NAME.to_string());
    m.insert("og:type".to_string(), og_type.to_string());
    m.insert("og:locale".to_string(), "en_US".to_string());
    m.insert("link:canonical".to_string(), format!("{SITE_URL}{path}"));
    m
}

fn render_meta_tags(meta: &HashMap<String, String>) -> String {
    meta.iter()
        .map(|(k, v)| {
            if let Some(rel) = k.strip_prefix("link:") {
                return format!(r#"<link rel="{rel}" href="{v}" />"#);
            }

            // Open Graph and article keys use property, the rest use name
            let attr = if k.starts_with("og:") || k.starts_with("article:") {
                "property"
            } else {
                "name"
            };
            format!(r#"<meta {attr}="{k}" content="{v}" />"#)
        })
        .collect::<Vec<_>>()
        .join("\n  ")
}

fn build_site_structured_data() -> String {
    json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "@id": format!("{SITE_URL}/#website"),
        "url": SITE_URL,
        "name": SITE_NAME,
        "inLanguage": "en",
        "description": SITE_DESCRIPTION,
    })
    .to_string()
}

fn build_person_structured_data() -> String {
    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "@id": format!("{SITE_URL}/#person"),
        "name": SITE_NAME,
        "url": SITE_URL,
        "jobTitle": "Backend Developer",
        "sameAs": [
            "https://github.com/atithi4dev",
            "https://www.linkedin.com/in/singhatithi",
            "https://twitter.com/bifreak_dev",
        ],
    })
    .to_string()
}

fn build_article_structured_data(article: &Article) -> String {
    json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": article.title,
        "description": article.excerpt,
        "url": format!("{SITE_URL}/blogs/{}", article.slug),
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": format!("{SITE_URL}/blogs/{}", article.slug),
        },
        "inLanguage": "en",
        "datePublished": article.date,
        "keywords": article.tags,
        "author": {
            "@type": "Person",
            "name": SITE_NAME,
            "url": SITE_URL,
        },
    })
    .to_string()
}

#[cfg(not(debug_assertions))]
fn maybe_minify(html: String) -> String {
    let cfg = HtmlMinCfg {
        minify_js: true,
        minify_css: false,
        ..Default::default()
    };
    let min = minify(html.as_bytes(), &cfg);
    String::from_utf8(min).unwrap_or(html)
}

#[cfg(debug_assertions)]
fn maybe_minify(html: String) -> String {
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_carries_meta_and_nonce_token() {
        let html = prerender_home_page(false);
        assert!(html.contains(CSP_NONCE_TOKEN));
        assert!(html.contains(r#"property="og:site_name""#));
        assert!(html.contains("window.__SCROLLSPY"));
    }

    #[test]
    fn home_page_contains_every_section_id() {
        let html = prerender_home_page(false);
        for section in Section::ALL {
            assert!(
                html.contains(&format!(r#"id="{}""#, section.id())),
                "missing section {}",
                section.id()
            );
        }
    }

    #[test]
    fn sent_variant_shows_success_banner() {
        let plain = prerender_home_page(false);
        let sent = prerender_home_page(true);
        assert!(!plain.contains("Message sent"));
        assert!(sent.contains("Message sent"));
    }

    #[test]
    fn nonce_injection_replaces_every_token() {
        let html = prerender_blog_index_page();
        let injected = inject_runtime_tokens(&html, "abc123");
        assert!(!injected.contains(CSP_NONCE_TOKEN));
        assert!(injected.contains(r#"nonce="abc123""#));
    }
}
