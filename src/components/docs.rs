use leptos::prelude::*;

use super::{Footer, Navbar, SectionIntro, TagList};
use crate::content::{Project, PROJECTS};

#[component]
pub fn DocsPage() -> impl IntoView {
    let cards = PROJECTS
        .iter()
        .map(|project| view! { <ProjectDocCard project=project /> })
        .collect::<Vec<_>>();

    view! {
        <div class="page">
            <Navbar current_path="/docs".to_string() />
            <main>
                <section class="section page-hero">
                    <div class="section-inner">
                        <SectionIntro
                            title="Project Documentation"
                            command="ls -la docs/"
                            blurb="Comprehensive documentation for all my projects. From architecture decisions to implementation details, everything you need to understand and contribute."
                        />
                    </div>
                </section>
                <section class="section">
                    <div class="section-inner">
                        <div class="card-grid">{cards}</div>
                    </div>
                </section>
            </main>
            <Footer />
        </div>
    }
}

#[component]
fn ProjectDocCard(project: &'static Project) -> impl IntoView {
    let features = project
        .features
        .iter()
        .map(|&feature| {
            view! {
                <li class="feature-row">
                    <span class="prompt-char">">"</span>
                    <span>{feature}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="card doc-card">
            <div class="card-head">
                <div>
                    <h3 class="card-title">{project.title}</h3>
                    <p class="card-subtitle">{project.subtitle}</p>
                </div>
                <div class="badge-stack">
                    {project.version.map(|v| view! { <span class="badge badge-version">{v}</span> })}
                    <span class="badge badge-status">{project.status.label()}</span>
                </div>
            </div>
            <p class="card-body">{project.long_description}</p>
            <h4 class="card-section-title">"Technology Stack"</h4>
            <TagList tags=project.tech />
            <h4 class="card-section-title">"Key Features"</h4>
            <ul class="feature-list">{features}</ul>
            <div class="card-foot">
                <span class="card-meta">{project.category}</span>
                <div class="card-links">
                    {project.github.map(|href| view! {
                        <a class="btn-terminal btn-small" href=href target="_blank" rel="noreferrer">"Source"</a>
                    })}
                    {project.demo.map(|href| view! {
                        <a class="btn-terminal btn-small btn-outline" href=href target="_blank" rel="noreferrer">"Live Demo"</a>
                    })}
                </div>
            </div>
        </div>
    }
}
