use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::content::Anchor;
use crate::hooks::use_typing;

#[component]
pub fn Hero() -> Element {
    let config = use_context::<SiteConfig>();
    let typed = use_typing(config.roles, config.typing);
    let projects = Anchor::Projects.href();

    rsx! {
        section { id: Anchor::Home.id(), class: "hero",
            div { class: "hero-scene",
                spline-viewer { "url": "{config.scene_url}", "loading-anim-type": "spinner-small-dark" }
            }
            div { class: "hero-shade" }
            div { class: "hero-content",
                div { class: "hero-copy fade-up",
                    p { class: "hero-kicker", "{config.owner}" }
                    h1 { class: "hero-title", "{config.headline}" }
                    p { class: "hero-typed", aria_live: "polite", "{typed}" }
                    div { class: "hero-actions",
                        a { href: "{projects}", class: "solid-button", "View Projects" }
                        a { href: "{config.resume_path}", download: "", class: "gradient-button", "Download Resume" }
                    }
                }
            }
        }
    }
}
