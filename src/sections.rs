use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::contact::CopyEmailButton;
use crate::content::{Anchor, Icon, Project, Registry, TimelineSide, ABOUT, HIGHLIGHTS, PROFILE_LINKS};
use crate::date::current_year;
use crate::hooks::use_reveal;
use crate::modal::{ModalState, ProjectModal};
use crate::ui::{Badge, GlassCard, IconGlyph, SectionShell};

#[component]
pub fn AboutSection() -> Element {
    let config = use_context::<SiteConfig>();
    let reveal = use_reveal();
    rsx! {
        section { id: Anchor::About.id(), class: "page-section about",
            div {
                class: reveal.class("section-inner about-grid"),
                onmounted: move |event| reveal.mount(event),
                div { class: "about-intro",
                    div { class: "avatar-frame" }
                    h2 { class: "section-title", "About" }
                    p { class: "muted", "{ABOUT}" }
                }
                div { class: "about-cards",
                    GlassCard {
                        h3 { class: "card-title", "Highlights" }
                        ul { class: "bullet-list",
                            for highlight in HIGHLIGHTS.iter() {
                                li { key: "{highlight}", "{highlight}" }
                            }
                        }
                    }
                    GlassCard {
                        h3 { class: "card-title", "Contact" }
                        div { class: "link-row",
                            a { href: "mailto:{config.email}", class: "text-link", "{config.email}" }
                            CopyEmailButton {}
                            for link in PROFILE_LINKS.iter() {
                                a {
                                    key: "{link.label}",
                                    href: "{link.url}",
                                    target: "_blank",
                                    rel: "noreferrer",
                                    class: "text-link",
                                    "{link.label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ExperienceSection() -> Element {
    let registry = use_context::<Registry>();
    rsx! {
        SectionShell { anchor_id: Anchor::Experience.id().to_string(), title: "Experience".to_string(),
            div { class: "timeline",
                div { class: "timeline-rail" }
                for entry in registry.experience().iter() {
                    div {
                        key: "{entry.title}",
                        class: match entry.side {
                            TimelineSide::Right => "timeline-item right",
                            TimelineSide::Left => "timeline-item left",
                        },
                        div { class: "timeline-dot" }
                        GlassCard {
                            h3 { class: "card-title", "{entry.title} — {entry.organisation}" }
                            p { class: "muted", "{entry.summary}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project, on_open: EventHandler<Project>) -> Element {
    let details = project.clone();
    rsx! {
        div { class: "glass-card project-card",
            div { class: "project-thumb",
                img { src: "{project.image}", alt: "{project.title}" }
            }
            div { class: "project-body",
                h3 { class: "card-title", "{project.title}" }
                p { class: "muted", "{project.summary}" }
                div { class: "badge-row",
                    for tag in project.stack.iter() {
                        Badge { key: "{tag}", label: tag.to_string() }
                    }
                }
                div { class: "project-actions",
                    a {
                        href: "{project.github_url}",
                        target: "_blank",
                        rel: "noreferrer",
                        class: "chip-link",
                        IconGlyph { icon: Icon::Github }
                        " GitHub"
                    }
                    a {
                        href: "{project.demo_url}",
                        target: "_blank",
                        rel: "noreferrer",
                        class: "chip-link",
                        IconGlyph { icon: Icon::ExternalLink }
                        " Live"
                    }
                    button {
                        r#type: "button",
                        class: "gradient-button push-right",
                        onclick: move |_| on_open.call(details.clone()),
                        "Details"
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProjectsSection() -> Element {
    let registry = use_context::<Registry>();
    let mut modal = use_signal(ModalState::default);
    rsx! {
        SectionShell { anchor_id: Anchor::Projects.id().to_string(), title: "Projects".to_string(),
            div { class: "card-grid",
                for project in registry.projects().iter() {
                    ProjectCard {
                        key: "{project.key}",
                        project: project.clone(),
                        on_open: move |project: Project| {
                            tracing::debug!("modal: open {}", project.key);
                            modal.write().open(project);
                        },
                    }
                }
            }
        }
        ProjectModal { state: modal }
    }
}

#[component]
pub fn SkillsSection() -> Element {
    let registry = use_context::<Registry>();
    rsx! {
        SectionShell { anchor_id: Anchor::Skills.id().to_string(), title: "Skills".to_string(),
            div { class: "card-grid",
                for group in registry.skills().iter() {
                    GlassCard { key: "{group.category}",
                        h3 { class: "card-title", "{group.category}" }
                        div { class: "badge-row",
                            for skill in group.skills.iter() {
                                Badge { key: "{skill}", label: skill.to_string(), gradient: Some(true) }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn AchievementsSection() -> Element {
    let registry = use_context::<Registry>();
    rsx! {
        SectionShell { anchor_id: Anchor::Achievements.id().to_string(), title: "Achievements".to_string(),
            div { class: "card-grid",
                for achievement in registry.achievements().iter() {
                    GlassCard { key: "{achievement}",
                        p { class: "small", "{achievement}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let config = use_context::<SiteConfig>();
    let year = current_year();
    let top = Anchor::Home.href();
    rsx! {
        footer { class: "site-footer",
            div { class: "footer-inner",
                p { "© {year} {config.owner}. All rights reserved." }
                div { class: "footer-links",
                    a { href: "{top}", class: "text-link", "Back to top" }
                    a { href: "{config.resume_path}", class: "text-link", "Resume" }
                }
            }
        }
    }
}
