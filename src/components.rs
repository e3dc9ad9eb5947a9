mod blog;
mod contact;
mod docs;
mod home;

pub use blog::{ArticleListPage, ArticlePage, NotFoundPage};
pub use docs::DocsPage;
pub use home::HomePage;

use leptos::prelude::*;

use crate::content::{Difficulty, NAV_ITEMS};

#[component]
pub fn Navbar(current_path: String) -> impl IntoView {
    let links = NAV_ITEMS
        .iter()
        .map(|item| {
            let active = current_path == item.path
                || (item.path != "/" && current_path.starts_with(item.path));
            view! {
                <a
                    class=if active { "nav-link active" } else { "nav-link" }
                    href=item.path
                    data-section=item.section
                >
                    {item.label}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav id="navbar" class="navbar">
            <div class="nav-inner">
                <a class="nav-logo" href="/" aria-label="home">
                    <span class="prompt-char">"atithi@dev:~$"</span>
                </a>
                <div class="nav-links">{links}</div>
            </div>
        </nav>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-inner">
                <span class="prompt-line">
                    <span class="prompt-char">"$"</span>
                    " exit 0"
                </span>
                <p class="footer-note">
                    "Built from first principles. Atithi Singh."
                </p>
                <div class="footer-links">
                    <a href="https://github.com/atithi4dev" target="_blank" rel="noreferrer">"GitHub"</a>
                    <a href="https://www.linkedin.com/in/singhatithi" target="_blank" rel="noreferrer">"LinkedIn"</a>
                    <a href="https://twitter.com/bifreak_dev" target="_blank" rel="noreferrer">"Twitter"</a>
                </div>
            </div>
        </footer>
    }
}

/// The `$ command` line every section opens with.
#[component]
pub fn TerminalPrompt(command: &'static str) -> impl IntoView {
    view! {
        <div class="prompt-line">
            <span class="prompt-char cursor-blink">"$"</span>
            " "
            {command}
        </div>
    }
}

/// Shared page/section intro: big title, terminal prompt, one-line blurb.
#[component]
pub fn SectionIntro(
    title: &'static str,
    command: &'static str,
    blurb: &'static str,
) -> impl IntoView {
    view! {
        <div class="section-intro">
            <h2 class="section-title gradient-text">{title}</h2>
            <TerminalPrompt command=command />
            <p class="section-blurb">{blurb}</p>
        </div>
    }
}

#[component]
pub fn DifficultyBadge(difficulty: Difficulty) -> impl IntoView {
    view! {
        <span class=format!("badge {}", difficulty.css_class())>{difficulty.label()}</span>
    }
}

#[component]
pub fn TagList(tags: &'static [&'static str]) -> impl IntoView {
    let chips = tags
        .iter()
        .map(|&tag| view! { <span class="tag-chip">{tag}</span> })
        .collect::<Vec<_>>();
    view! { <div class="tag-list">{chips}</div> }
}
