use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::content::{Anchor, Icon, NAV_LINKS};
use crate::hooks::use_scroll_state;
use crate::theme::use_theme;
use crate::ui::IconGlyph;

fn link_class(base: &str, active: bool) -> String {
    if active {
        format!("{base} is-active")
    } else {
        base.to_string()
    }
}

#[component]
pub fn Navbar() -> Element {
    let config = use_context::<SiteConfig>();
    let scroll = use_scroll_state();
    let mut theme = use_theme();
    let active = scroll().active;
    let home = Anchor::Home.href();
    let toggle_icon = if theme.current().is_dark() { Icon::Sun } else { Icon::Moon };

    rsx! {
        header { class: "navbar-shell",
            nav { class: "navbar", aria_label: "Sections",
                div { class: "navbar-row",
                    a { href: "{home}", class: "brand", "{config.owner}" }
                    div { class: "nav-desktop",
                        for link in NAV_LINKS.iter() {
                            a {
                                key: "{link.anchor.id()}",
                                href: "{link.anchor.href()}",
                                class: link_class("nav-link", active == Some(link.anchor)),
                                IconGlyph { icon: link.icon }
                                " {link.label}"
                            }
                        }
                    }
                    button {
                        r#type: "button",
                        class: "theme-toggle",
                        aria_label: "Toggle theme",
                        onclick: move |_| {
                            let next = theme.toggle();
                            tracing::debug!("theme: switched to {}", next.as_str());
                        },
                        IconGlyph { icon: toggle_icon, size: Some(18) }
                    }
                }
                div { class: "nav-mobile",
                    for link in NAV_LINKS.iter() {
                        a {
                            key: "{link.anchor.id()}",
                            href: "{link.anchor.href()}",
                            class: link_class("nav-chip", active == Some(link.anchor)),
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn active_link_gets_highlight_class() {
        assert_eq!(link_class("nav-link", true), "nav-link is-active");
        assert_eq!(link_class("nav-chip", false), "nav-chip");
    }
}
