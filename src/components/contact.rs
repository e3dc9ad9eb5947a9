use leptos::prelude::*;

use super::SectionIntro;

struct ContactLink {
    label: &'static str,
    value: &'static str,
    href: &'static str,
}

const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        label: "Email",
        value: "atithisingh.dev@gmail.com",
        href: "mailto:atithisingh.dev@gmail.com",
    },
    ContactLink {
        label: "LinkedIn",
        value: "linkedin.com/in/singhatithi",
        href: "https://www.linkedin.com/in/singhatithi",
    },
    ContactLink {
        label: "GitHub",
        value: "github.com/atithi4dev",
        href: "https://github.com/atithi4dev",
    },
    ContactLink {
        label: "Twitter",
        value: "@bifreak_dev",
        href: "https://twitter.com/bifreak_dev",
    },
];

/// The contact section of the landing page.
///
/// The form posts to `/contact`, which only simulates delivery. When `sent`
/// is true (the post-submit redirect) the success banner replaces the intro
/// blurb and the fields render fresh and empty.
#[component]
pub fn ContactSection(sent: bool) -> impl IntoView {
    let links = CONTACT_LINKS
        .iter()
        .map(|link| {
            view! {
                <a class="contact-link" href=link.href target="_blank" rel="noopener noreferrer">
                    <span class="contact-label">{link.label}</span>
                    <span class="contact-value">{link.value}</span>
                </a>
            }
        })
        .collect::<Vec<_>>();

    let banner = if sent {
        Some(view! {
            <div class="form-success" role="status">
                "Message sent. Thanks for reaching out - I'll get back to you soon."
            </div>
        })
    } else {
        None
    };

    view! {
        <section id="contact" class="section section-alt">
            <div class="section-inner">
                <SectionIntro
                    title="Get In Touch"
                    command="echo \"Let's connect!\""
                    blurb="Open to interesting backend/infrastructure opportunities. Let's discuss systems programming, distributed systems, or any complex technical challenges."
                />
                <div class="two-column">
                    <div>
                        <h3 class="column-title">"Contact Information"</h3>
                        <div class="contact-links">{links}</div>
                    </div>
                    <div>
                        <h3 class="column-title">"Send a Message"</h3>
                        {banner}
                        <form id="contact-form" class="contact-form" action="/contact" method="post">
                            <input
                                class="form-field"
                                type="text"
                                name="name"
                                placeholder="Name"
                                required=true
                            />
                            <input
                                class="form-field"
                                type="email"
                                name="email"
                                placeholder="Email"
                                required=true
                            />
                            <input
                                class="form-field"
                                type="text"
                                name="subject"
                                placeholder="Subject"
                                required=true
                            />
                            <textarea
                                class="form-field form-message"
                                name="message"
                                placeholder="Message"
                                rows="6"
                                required=true
                            ></textarea>
                            <button id="contact-submit" class="btn-terminal" type="submit">
                                "Send Message"
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}
