use std::{collections::HashMap, sync::Arc};

use crate::content::{self, ARTICLES};
use crate::{markdown, sitemap};

use super::render::{
    prerender_article_page, prerender_blog_index_page, prerender_docs_page, prerender_home_page,
    prerender_not_found_page, SITE_URL,
};

/// Every page the site can serve, prerendered at startup. Handlers only do
/// a lookup and per-request token injection; nothing here mutates after
/// construction.
#[derive(Clone)]
pub struct AppState {
    pub(crate) prerender_home: Arc<str>,
    pub(crate) prerender_home_sent: Arc<str>,
    pub(crate) prerender_blogs: Arc<str>,
    pub(crate) prerender_docs: Arc<str>,
    pub(crate) article_pages: Arc<HashMap<&'static str, Arc<str>>>,
    pub(crate) not_found: Arc<str>,
    pub(crate) sitemap: Arc<str>,
}

pub fn build_prerendered_state() -> anyhow::Result<AppState> {
    content::validate()?;

    let mut article_pages = HashMap::with_capacity(ARTICLES.len());
    for article in ARTICLES.iter() {
        let body_html = markdown::render(article.body);
        let page = prerender_article_page(article, &body_html);
        article_pages.insert(article.slug, Arc::<str>::from(page));
    }
    tracing::debug!("prerendered {} article pages", article_pages.len());

    Ok(AppState {
        prerender_home: Arc::from(prerender_home_page(false)),
        prerender_home_sent: Arc::from(prerender_home_page(true)),
        prerender_blogs: Arc::from(prerender_blog_index_page()),
        prerender_docs: Arc::from(prerender_docs_page()),
        article_pages: Arc::new(article_pages),
        not_found: Arc::from(prerender_not_found_page()),
        sitemap: Arc::from(sitemap::build(SITE_URL)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_builds_and_covers_every_slug() {
        let state = build_prerendered_state().expect("startup must succeed");
        for article in ARTICLES.iter() {
            assert!(
                state.article_pages.contains_key(article.slug),
                "missing prerendered page for {}",
                article.slug
            );
        }
    }

    #[test]
    fn article_pages_contain_highlighted_code() {
        let state = build_prerendered_state().expect("startup must succeed");
        let page = state
            .article_pages
            .get("building-redis-from-scratch")
            .expect("present");
        // the article body carries fenced go blocks
        assert!(page.contains("<pre style="));
    }
}
