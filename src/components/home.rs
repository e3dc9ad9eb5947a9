//! Landing-page sections. Section `id` attributes are the contract with the
//! scrollspy script; they must match `sections::Section::id`.

use leptos::prelude::*;

use super::contact::ContactSection;
use super::{Footer, Navbar, SectionIntro, TagList, TerminalPrompt};
use crate::content::PROJECTS;

#[component]
pub fn HomePage(sent: bool) -> impl IntoView {
    view! {
        <div class="page">
            <Navbar current_path="/".to_string() />
            <main>
                <Hero />
                <About />
                <Skills />
                <ProjectsSection />
                <Education />
                <ContactSection sent=sent />
            </main>
            <Footer />
        </div>
    }
}

const HERO_BADGES: &[&str] = &[
    "Go",
    "TypeScript",
    "JavaScript",
    "Redis",
    "PostgreSQL",
    "MongoDB",
    "C++",
    "Python",
];

#[component]
fn Hero() -> impl IntoView {
    let badges = HERO_BADGES
        .iter()
        .map(|&tech| view! { <span class="tag-chip">{tech}</span> })
        .collect::<Vec<_>>();

    view! {
        <section id="home" class="section hero">
            <div class="section-inner hero-inner">
                <TerminalPrompt command="whoami" />
                <h1 class="hero-name curvy-text">"Atithi Singh"</h1>
                <div class="hero-role">
                    "Backend Developer | CS Student | Infrastructure Enthusiast"
                </div>
                <p class="hero-pitch">
                    "Building complex systems from first principles. Learning by reconstructing what others use."
                    <span class="hero-stack">"Node - Go - Neovim - Linux - Backend Development"</span>
                </p>
                <div class="tag-list hero-badges">{badges}</div>
                <div class="hero-actions">
                    <a class="btn-terminal" href="#projects" data-scroll-to="projects">"View Projects"</a>
                    <a class="btn-terminal btn-outline" href="#contact" data-scroll-to="contact">"Get In Touch"</a>
                </div>
            </div>
        </section>
    }
}

const ABOUT_POINTS: &[&str] = &[
    "Second year CS student passionate about infrastructure",
    "Learning by building - Redis, Zerodha clone, streaming platforms from scratch",
    "Focus on backend development and system design",
    "Linux enthusiast exploring low-level programming",
];

const ABOUT_STATS: &[(&str, &str)] = &[
    ("Projects Built", "4+"),
    ("Technologies", "10+"),
    ("Years Coding", "2+"),
    ("Current Year", "2nd"),
];

#[component]
fn About() -> impl IntoView {
    let points = ABOUT_POINTS
        .iter()
        .map(|&point| {
            view! {
                <li class="about-point">
                    <span class="prompt-char">">"</span>
                    <span>{point}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    let stats = ABOUT_STATS
        .iter()
        .map(|&(label, value)| {
            view! {
                <div class="stat-card">
                    <div class="stat-value">{value}</div>
                    <div class="stat-label">{label}</div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="about" class="section section-alt">
            <div class="section-inner">
                <SectionIntro
                    title="About Me"
                    command="cat about.txt"
                    blurb="Tech identity: learner and builder"
                />
                <div class="two-column">
                    <div>
                        <h3 class="column-title">"Who I Am"</h3>
                        <ul class="about-points">{points}</ul>
                        <div class="terminal-box">
                            <h4>"Currently Exploring"</h4>
                            <p>
                                "Distributed systems internals, container runtimes, and whatever the next rabbit hole turns out to be."
                            </p>
                        </div>
                    </div>
                    <div class="stat-grid">{stats}</div>
                </div>
            </div>
        </section>
    }
}

struct Skill {
    name: &'static str,
    level: &'static str,
}

struct SkillGroup {
    title: &'static str,
    skills: &'static [Skill],
}

const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Languages & Runtimes",
        skills: &[
            Skill { name: "Go", level: "advanced" },
            Skill { name: "Node.js", level: "advanced" },
            Skill { name: "Python", level: "advanced" },
            Skill { name: "C/C++", level: "intermediate" },
            Skill { name: "JavaScript/TS", level: "advanced" },
        ],
    },
    SkillGroup {
        title: "Infrastructure & DevOps",
        skills: &[
            Skill { name: "Docker", level: "advanced" },
            Skill { name: "Kubernetes", level: "intermediate" },
            Skill { name: "Linux", level: "advanced" },
            Skill { name: "CI/CD", level: "intermediate" },
            Skill { name: "AWS (ECS/ECR/S3)", level: "intermediate" },
            Skill { name: "Networking", level: "intermediate" },
        ],
    },
    SkillGroup {
        title: "Databases",
        skills: &[
            Skill { name: "PostgreSQL", level: "advanced" },
            Skill { name: "Redis", level: "advanced" },
            Skill { name: "MongoDB", level: "intermediate" },
        ],
    },
    SkillGroup {
        title: "Backend & Media",
        skills: &[
            Skill { name: "HLS Streaming", level: "advanced" },
            Skill { name: "FFmpeg", level: "intermediate" },
            Skill { name: "WebRTC", level: "intermediate" },
            Skill { name: "WebSocket", level: "advanced" },
            Skill { name: "REST APIs", level: "advanced" },
        ],
    },
    SkillGroup {
        title: "Systems",
        skills: &[
            Skill { name: "Distributed Systems", level: "intermediate" },
            Skill { name: "System Design", level: "intermediate" },
            Skill { name: "Microservices", level: "intermediate" },
        ],
    },
];

const TOOLS: &[(&str, &str)] = &[
    ("Neovim", "daily driver"),
    ("Git", "version control"),
    ("VS Code", "when needed"),
    ("Postman", "API testing"),
    ("Warp", "terminal"),
    ("Linux", "dev environment"),
];

#[component]
fn Skills() -> impl IntoView {
    let groups = SKILL_GROUPS
        .iter()
        .map(|group| {
            let chips = group
                .skills
                .iter()
                .map(|skill| {
                    view! {
                        <div class=format!("skill-chip level-{}", skill.level)>
                            <span class="skill-name">{skill.name}</span>
                            <span class="skill-level">{skill.level}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <div class="skill-group">
                    <h3 class="column-title">{group.title}</h3>
                    <div class="skill-chips">{chips}</div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let tools = TOOLS
        .iter()
        .map(|&(name, note)| {
            view! {
                <div class="tool-card">
                    <div class="tool-name">{name}</div>
                    <div class="tool-note">{note}</div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="skills" class="section">
            <div class="section-inner">
                <SectionIntro
                    title="Skills"
                    command="cat skills.json"
                    blurb="The stack I reach for, and how well I know it"
                />
                <div class="skill-groups">{groups}</div>
                <h3 class="column-title">"Daily Tools"</h3>
                <div class="tool-grid">{tools}</div>
            </div>
        </section>
    }
}

#[component]
fn ProjectsSection() -> impl IntoView {
    let cards = PROJECTS
        .iter()
        .map(|project| {
            let links = view! {
                <div class="card-links">
                    {project.github.map(|href| view! {
                        <a class="btn-terminal btn-small" href=href target="_blank" rel="noreferrer">"Source"</a>
                    })}
                    {project.demo.map(|href| view! {
                        <a class="btn-terminal btn-small btn-outline" href=href target="_blank" rel="noreferrer">"Live Demo"</a>
                    })}
                </div>
            };
            view! {
                <div class="card project-card">
                    <div class="card-head">
                        <div>
                            <h3 class="card-title">{project.title}</h3>
                            <p class="card-subtitle">{project.subtitle}</p>
                        </div>
                        <span class="badge badge-status">{project.status.label()}</span>
                    </div>
                    <p class="card-body">{project.description}</p>
                    <TagList tags=project.tech />
                    {links}
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="projects" class="section section-alt">
            <div class="section-inner">
                <SectionIntro
                    title="Projects"
                    command="ls ~/projects"
                    blurb="Systems rebuilt from scratch to understand how they really work"
                />
                <div class="card-grid">{cards}</div>
            </div>
        </section>
    }
}

struct Certification {
    name: &'static str,
    issuer: &'static str,
    status: &'static str,
}

const CERTIFICATIONS: &[Certification] = &[
    Certification {
        name: "Docker Fundamentals",
        issuer: "Docker",
        status: "Completed",
    },
    Certification {
        name: "Kubernetes Basics",
        issuer: "CNCF",
        status: "In Progress",
    },
    Certification {
        name: "Linux Command Line",
        issuer: "Online Course",
        status: "Completed",
    },
];

#[component]
fn Education() -> impl IntoView {
    let certs = CERTIFICATIONS
        .iter()
        .map(|cert| {
            view! {
                <li class="cert-row">
                    <div>
                        <div class="cert-name">{cert.name}</div>
                        <div class="cert-issuer">{cert.issuer}</div>
                    </div>
                    <span class="badge badge-status">{cert.status}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="education" class="section">
            <div class="section-inner">
                <SectionIntro
                    title="Education"
                    command="cat education.log"
                    blurb="Formal grounding plus whatever certifications fill the gaps"
                />
                <div class="two-column">
                    <div class="card">
                        <div class="card-head">
                            <h3 class="card-title">"Bachelor of Technology in Computer Science and Engineering"</h3>
                            <span class="badge badge-status">"Current"</span>
                        </div>
                        <p class="card-subtitle">"Amity University Uttar Pradesh"</p>
                        <p class="card-meta">"2024 - 2028"</p>
                        <p class="card-body">
                            "Focus on systems programming, algorithms, and distributed systems"
                        </p>
                    </div>
                    <div class="card">
                        <h3 class="card-title">"Certifications"</h3>
                        <ul class="cert-list">{certs}</ul>
                    </div>
                </div>
            </div>
        </section>
    }
}
