//! Sitemap generation. Built once at startup from the route table and the
//! article collection, then served from memory.

use crate::content::ARTICLES;

struct SitemapEntry {
    loc: String,
    lastmod: Option<&'static str>,
}

pub fn build(site_url: &str) -> String {
    let homepage_lastmod = ARTICLES.iter().map(|a| a.date).max();

    let mut urls = Vec::with_capacity(ARTICLES.len() + 3);
    urls.push(SitemapEntry {
        loc: format!("{site_url}/"),
        lastmod: homepage_lastmod,
    });
    urls.push(SitemapEntry {
        loc: format!("{site_url}/blogs"),
        lastmod: homepage_lastmod,
    });
    urls.push(SitemapEntry {
        loc: format!("{site_url}/docs"),
        lastmod: None,
    });
    for article in ARTICLES.iter() {
        urls.push(SitemapEntry {
            loc: format!("{site_url}/blogs/{}", article.slug),
            lastmod: Some(article.date),
        });
    }

    render_xml(&urls)
}

fn render_xml(urls: &[SitemapEntry]) -> String {
    let mut body = String::new();
    for entry in urls {
        body.push_str("  <url>\n");
        body.push_str(&format!("    <loc>{}</loc>\n", entry.loc));
        if let Some(lastmod) = entry.lastmod {
            body.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
        }
        body.push_str("  </url>\n");
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{body}</urlset>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sitemap_covers_every_article() {
        let xml = build("https://example.com");
        for article in ARTICLES.iter() {
            assert!(xml.contains(&format!("<loc>https://example.com/blogs/{}</loc>", article.slug)));
        }
        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(xml.contains("<loc>https://example.com/docs</loc>"));
    }

    #[test]
    fn homepage_lastmod_is_latest_article_date() {
        let xml = build("https://example.com");
        assert!(xml.contains("<lastmod>2024-02-20</lastmod>"));
    }
}
