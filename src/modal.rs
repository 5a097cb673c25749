use dioxus::prelude::*;

use crate::content::{Icon, Project};
use crate::ui::{Badge, IconGlyph};

/// The project shown in the detail overlay. Opening replaces, never stacks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalState {
    open: Option<Project>,
}

impl ModalState {
    pub fn open(&mut self, project: Project) {
        self.open = Some(project);
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn current(&self) -> Option<&Project> {
        self.open.as_ref()
    }
}

#[component]
pub fn ProjectModal(state: Signal<ModalState>) -> Element {
    let Some(project) = state.read().current().cloned() else {
        return rsx! {};
    };
    let mut state = state;

    rsx! {
        div {
            class: "modal-backdrop",
            role: "dialog",
            aria_label: "{project.title} details",
            onclick: move |_| state.write().close(),
            div {
                class: "modal-panel",
                onclick: move |event| event.stop_propagation(),
                div { class: "modal-heading",
                    img { class: "modal-thumb", src: "{project.image}", alt: "{project.title}" }
                    div {
                        h3 { class: "modal-title", "{project.title}" }
                        p { class: "modal-summary", "{project.summary}" }
                    }
                }
                p { class: "modal-details", "{project.details}" }
                div { class: "badge-row",
                    for tag in project.stack.iter() {
                        Badge { key: "{tag}", label: tag.to_string() }
                    }
                }
                div { class: "modal-actions",
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
                        onclick: move |_| state.write().close(),
                        "Close"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Registry;
    use pretty_assertions::assert_eq;

    #[test]
    fn opening_replaces_the_open_project() {
        let registry = Registry::builtin().unwrap();
        let mut modal = ModalState::default();
        modal.open(registry.project("safecool").cloned().unwrap());
        modal.open(registry.project("gitnova").cloned().unwrap());
        assert_eq!(modal.current().map(|project| project.key), Some("gitnova"));
    }

    #[test]
    fn closing_an_empty_modal_is_a_no_op() {
        let mut modal = ModalState::default();
        modal.close();
        assert_eq!(modal, ModalState::default());
        assert!(modal.current().is_none());
    }
}
