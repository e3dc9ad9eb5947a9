//! Immutable site content: articles, projects, navigation.
//!
//! Everything here is compiled into the binary and loaded exactly once.
//! [`validate`] runs at startup and turns invariant violations into startup
//! errors so request handlers never see inconsistent data.

pub mod articles;
pub mod projects;

use std::collections::HashSet;
use std::sync::LazyLock;

use anyhow::ensure;
use regex::Regex;

pub use articles::{Article, Difficulty, ARTICLES};
pub use projects::{Project, ProjectStatus, PROJECTS};

/// One top-level navigation entry. `section` names the landing-page section
/// the entry maps to when scroll tracking is active on `/`.
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub section: &'static str,
}

pub static NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        path: "/",
        label: "Home",
        section: "home",
    },
    NavItem {
        path: "/blogs",
        label: "Blogs",
        section: "blogs",
    },
    NavItem {
        path: "/docs",
        label: "Docs",
        section: "docs",
    },
];

// Lowercase alphanumeric runs joined by single dashes.
static SLUG_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid regex"));

/// Load-time invariants: every article slug is URL-safe and pairwise unique.
pub fn validate() -> anyhow::Result<()> {
    let mut seen = HashSet::new();
    for article in ARTICLES.iter() {
        ensure!(
            SLUG_SHAPE.is_match(article.slug),
            "article {} has a malformed slug: {:?}",
            article.id,
            article.slug
        );
        ensure!(
            seen.insert(article.slug),
            "duplicate article slug: {:?}",
            article.slug
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_passes_validation() {
        validate().expect("shipped content must satisfy its invariants");
    }

    #[test]
    fn slugs_are_pairwise_unique() {
        let mut seen = HashSet::new();
        for article in ARTICLES.iter() {
            assert!(seen.insert(article.slug), "duplicate slug {}", article.slug);
        }
    }

    #[test]
    fn lookup_finds_every_article_by_its_slug() {
        for article in ARTICLES.iter() {
            let found = articles::find_by_slug(article.slug).expect("present");
            assert_eq!(found.id, article.id);
        }
    }

    #[test]
    fn lookup_misses_unknown_slug() {
        assert!(articles::find_by_slug("no-such-article").is_none());
        assert!(articles::find_by_slug("").is_none());
    }

    #[test]
    fn featured_filter_preserves_relative_order() {
        let featured: Vec<u32> = articles::featured().map(|a| a.id).collect();
        let expected: Vec<u32> = ARTICLES
            .iter()
            .filter(|a| a.featured)
            .map(|a| a.id)
            .collect();
        assert_eq!(featured, expected);
        assert!(featured.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn project_links_are_independently_optional() {
        // one project has a repo but no demo
        assert!(PROJECTS
            .iter()
            .any(|p| p.github.is_some() && p.demo.is_none()));
    }
}
