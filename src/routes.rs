use dioxus::prelude::*;
use dioxus_router::{Link, Routable, Router};

use crate::config::SiteConfig;
use crate::contact::ContactSection;
use crate::content::{Anchor, Registry};
use crate::hero::Hero;
use crate::hooks::use_scroll_tracker;
use crate::navbar::Navbar;
use crate::scroll::{scroll_to_top, ScrollState};
use crate::sections::{AboutSection, AchievementsSection, ExperienceSection, Footer, ProjectsSection, SkillsSection};
use crate::theme::use_theme_provider;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config = use_context_provider(SiteConfig::default);
    use_context_provider(Registry::load);
    use_theme_provider(config.theme_storage_key);

    rsx! {
        document::Title { "{config.owner} | Portfolio" }
        document::Meta { name: "description", content: "{config.owner} — {config.headline}." }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        script { r#type: "module", src: "{config.scene_loader_url}" }
        Router::<Route> {}
    }
}

#[derive(Clone, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn Home() -> Element {
    let config = use_context::<SiteConfig>();
    let scroll = use_scroll_tracker(ScrollState::starting_at(Anchor::Home), config.scroll);

    rsx! {
        div { class: "page",
            Navbar {}
            Hero {}
            AboutSection {}
            ExperienceSection {}
            ProjectsSection {}
            SkillsSection {}
            AchievementsSection {}
            ContactSection {}
            Footer {}
            if scroll().past_threshold {
                button {
                    r#type: "button",
                    class: "back-to-top",
                    aria_label: "Scroll to top",
                    onclick: move |_| scroll_to_top(),
                    "↑"
                }
            }
        }
    }
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        document::Title { "Not Found | Portfolio" }
        div { class: "page not-found",
            h1 { class: "section-title", "Nothing at /{path}" }
            p { class: "muted", "This site is a single page." }
            Link { to: Route::Home {}, class: "gradient-button", "Back home" }
        }
    }
}
