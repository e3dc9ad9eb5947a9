use leptos::prelude::*;

use super::{DifficultyBadge, Footer, Navbar, SectionIntro, TagList};
use crate::content::{articles, Article};

#[component]
pub fn ArticleListPage() -> impl IntoView {
    let featured = articles::featured()
        .map(|article| view! { <ArticleCard article=article in_featured_grid=true /> })
        .collect::<Vec<_>>();

    let all = crate::content::ARTICLES
        .iter()
        .map(|article| view! { <ArticleCard article=article in_featured_grid=false /> })
        .collect::<Vec<_>>();

    view! {
        <div class="page">
            <Navbar current_path="/blogs".to_string() />
            <main>
                <section class="section page-hero">
                    <div class="section-inner">
                        <SectionIntro
                            title="Technical Blogs"
                            command="cat blogs/*.md"
                            blurb="Deep-dive articles on complex backend topics, systems programming, and infrastructure. Proving expertise through detailed technical writing."
                        />
                    </div>
                </section>
                <section class="section">
                    <div class="section-inner">
                        <h2 class="column-title centered">"Featured Articles"</h2>
                        <div class="card-grid">{featured}</div>
                        <h2 class="column-title centered">"All Articles"</h2>
                        <div class="card-grid card-grid-dense">{all}</div>
                    </div>
                </section>
            </main>
            <Footer />
        </div>
    }
}

#[component]
fn ArticleCard(article: &'static Article, in_featured_grid: bool) -> impl IntoView {
    // The featured grid labels every card; the all-articles grid only tags
    // the featured subset.
    let featured_badge = if in_featured_grid || article.featured {
        Some(view! { <span class="badge badge-featured">"Featured"</span> })
    } else {
        None
    };

    view! {
        <div class="card article-card">
            <div class="card-head">
                <div>
                    <h3 class="card-title">{article.title}</h3>
                    <p class="card-body">{article.excerpt}</p>
                </div>
                {featured_badge}
            </div>
            <div class="card-meta-row">
                <span class="read-time">{article.read_time}</span>
                <DifficultyBadge difficulty=article.difficulty />
                <span class="card-meta">{article.date}</span>
            </div>
            <TagList tags=article.tags />
            <a class="btn-terminal btn-small" href=format!("/blogs/{}", article.slug)>
                "Read Article"
            </a>
        </div>
    }
}

#[component]
pub fn ArticlePage(article: &'static Article, body_html: String) -> impl IntoView {
    view! {
        <div class="page">
            <Navbar current_path=format!("/blogs/{}", article.slug) />
            <main>
                <section class="section page-hero">
                    <div class="section-inner article-header">
                        <h1 class="article-title">{article.title}</h1>
                        <div class="card-meta-row centered">
                            <span class="read-time">{article.read_time}</span>
                            <DifficultyBadge difficulty=article.difficulty />
                            <span class="card-meta">{article.date}</span>
                        </div>
                        <TagList tags=article.tags />
                    </div>
                </section>
                <section class="section">
                    <div class="section-inner article-body">
                        <article class="prose" inner_html=body_html></article>
                        <a class="btn-terminal btn-outline" href="/blogs">"Back to Blogs"</a>
                    </div>
                </section>
            </main>
            <Footer />
        </div>
    }
}

/// Terminal state for an unknown slug. The single recovery action is the
/// link back to the article list.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page">
            <Navbar current_path="/blogs".to_string() />
            <main class="notfound">
                <div class="notfound-card">
                    <h1>"Blog Post Not Found"</h1>
                    <a class="btn-terminal" href="/blogs">"Back to Blogs"</a>
                </div>
            </main>
        </div>
    }
}
