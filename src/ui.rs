use dioxus::prelude::*;

use crate::content::Icon;
use crate::hooks::use_reveal;

#[component]
pub fn SectionShell(anchor_id: String, title: String, wide: Option<bool>, children: Element) -> Element {
    let reveal = use_reveal();
    let width = if wide.unwrap_or(true) { "section-inner" } else { "section-inner narrow" };
    rsx! {
        section { id: "{anchor_id}", class: "page-section",
            div {
                class: reveal.class(width),
                onmounted: move |event| reveal.mount(event),
                h2 { class: "section-title", "{title}" }
                {children}
            }
        }
    }
}

#[component]
pub fn GlassCard(children: Element, class: Option<String>) -> Element {
    let extra = class.unwrap_or_default();
    rsx! {
        div { class: "glass-card {extra}",
            {children}
        }
    }
}

#[component]
pub fn Badge(label: String, gradient: Option<bool>) -> Element {
    let class = if gradient.unwrap_or(false) { "badge badge-gradient" } else { "badge" };
    rsx! {
        span { class: "{class}", "{label}" }
    }
}

fn icon_paths(icon: Icon) -> &'static [&'static str] {
    match icon {
        Icon::Home => &["M3 10.5 12 3l9 7.5V20a1 1 0 0 1-1 1h-5v-6H9v6H4a1 1 0 0 1-1-1z"],
        Icon::User => &["M8 8a4 4 0 1 0 8 0a4 4 0 1 0-8 0", "M4 21a8 8 0 0 1 16 0"],
        Icon::Briefcase => &[
            "M4 7h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2z",
            "M16 7V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v2",
        ],
        Icon::Folder => &["M4 4h5l2 3h9a1 1 0 0 1 1 1v11a1 1 0 0 1-1 1H4a1 1 0 0 1-1-1V5a1 1 0 0 1 1-1z"],
        Icon::Wrench => &["M14.7 6.3a4 4 0 0 0-5.4 5.4L3 18l3 3 6.3-6.3a4 4 0 0 0 5.4-5.4l-2.5 2.5-2.4-.6-.6-2.4z"],
        Icon::Award => &["M6 8a6 6 0 1 0 12 0a6 6 0 1 0-12 0", "M8.2 13.9 7 22l5-3 5 3-1.2-8.1"],
        Icon::Mail => &[
            "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "m22 6-10 7L2 6",
        ],
        Icon::Sun => &[
            "M8 12a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
            "M12 2v2M12 20v2M4.9 4.9l1.4 1.4M17.7 17.7l1.4 1.4M2 12h2M20 12h2M4.9 19.1l1.4-1.4M17.7 6.3l1.4-1.4",
        ],
        Icon::Moon => &["M21 12.8A9 9 0 1 1 11.2 3a7 7 0 0 0 9.8 9.8z"],
        Icon::Github => &[
            "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.1-1.3-.3-2.5-1-3.5.3-1.2.3-2.4 0-3.5 0 0-1 0-3 1.5-2.6-.5-5.4-.5-8 0C6 2 5 2 5 2c-.3 1.1-.3 2.3 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.4.5-.7 1.1-.9 1.7-.1.6-.2 1.2-.1 1.8v4",
            "M9 18c-4.5 2-5-2-7-2",
        ],
        Icon::ExternalLink => &["M15 3h6v6", "M10 14 21 3", "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"],
        Icon::Copy => &[
            "M10 8h10a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H10a2 2 0 0 1-2-2V10a2 2 0 0 1 2-2z",
            "M4 16a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h10a2 2 0 0 1 2 2",
        ],
    }
}

#[component]
pub fn IconGlyph(icon: Icon, size: Option<u32>) -> Element {
    let size = size.unwrap_or(16);
    rsx! {
        svg {
            class: "icon",
            "width": "{size}",
            "height": "{size}",
            "viewBox": "0 0 24 24",
            "fill": "none",
            "stroke": "currentColor",
            "stroke-width": "2",
            "stroke-linecap": "round",
            "stroke-linejoin": "round",
            "aria-hidden": "true",
            for d in icon_paths(icon).iter() {
                path { "d": "{d}" }
            }
        }
    }
}
