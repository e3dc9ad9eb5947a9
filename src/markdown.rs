//! Article body rendering: markdown to HTML with highlighted code fences.

use std::sync::LazyLock;

use pulldown_cmark::{html, CodeBlockKind, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

const CODE_THEME: &str = "base16-ocean.dark";

/// Render an article body to HTML.
///
/// Fenced code blocks carrying a language token are replaced with
/// syntect-highlighted HTML; untagged fences and unknown languages fall back
/// to an escaped `<pre><code>` block. Everything else is plain
/// pulldown-cmark output.
pub fn render(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::all());
    let events: Vec<Event> = parser.collect();

    let mut processed = Vec::with_capacity(events.len());
    let mut i = 0;
    while i < events.len() {
        match &events[i] {
            Event::Start(Tag::CodeBlock(kind)) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                    _ => None,
                };
                let mut code = String::new();
                i += 1;
                while i < events.len() {
                    match &events[i] {
                        Event::End(TagEnd::CodeBlock) => break,
                        Event::Text(text) => code.push_str(text),
                        _ => {}
                    }
                    i += 1;
                }
                processed.push(Event::Html(highlight_block(lang.as_deref(), &code).into()));
            }
            other => processed.push(other.clone()),
        }
        i += 1;
    }

    let mut out = String::new();
    html::push_html(&mut out, processed.into_iter());
    out
}

fn highlight_block(lang: Option<&str>, code: &str) -> String {
    let syntax = lang.and_then(|token| SYNTAX_SET.find_syntax_by_token(token));
    match syntax {
        Some(syntax) => {
            let theme = &THEME_SET.themes[CODE_THEME];
            highlighted_html_for_string(code, &SYNTAX_SET, syntax, theme)
                .unwrap_or_else(|_| plain_block(code))
        }
        None => plain_block(code),
    }
}

fn plain_block(code: &str) -> String {
    format!(
        "<pre><code>{}</code></pre>",
        html_escape::encode_text(code)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_fence_is_highlighted() {
        let out = render("```go\nfunc main() {}\n```\n");
        // syntect emits an inline-styled <pre>, not a bare one
        assert!(out.contains("<pre style="));
        assert!(out.contains("main"));
    }

    #[test]
    fn unknown_language_falls_back_to_plain_block() {
        let out = render("```definitely-not-a-language\nx <- 1\n```\n");
        assert!(out.contains("<pre><code>"));
        assert!(!out.contains("<pre style="));
    }

    #[test]
    fn untagged_fence_is_plain_and_escaped() {
        let out = render("```\n<script>alert(1)</script>\n```\n");
        assert!(out.contains("<pre><code>"));
        assert!(out.contains("&lt;script&gt;"));
    }

    #[test]
    fn inline_code_stays_inline() {
        let out = render("run `GET /docs` twice");
        assert!(out.contains("<code>GET /docs</code>"));
        assert!(!out.contains("<pre"));
    }

    #[test]
    fn headings_and_paragraphs_render() {
        let out = render("# Title\n\nBody text.\n");
        assert!(out.contains("<h1>Title</h1>"));
        assert!(out.contains("<p>Body text.</p>"));
    }
}
