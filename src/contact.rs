use dioxus::prelude::*;
use thiserror::Error;

use crate::config::SiteConfig;
use crate::content::{Anchor, Icon, PROFILE_LINKS};
use crate::ui::{IconGlyph, SectionShell};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ContactError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter your email.")]
    MissingEmail,
    #[error("That email address doesn't look right.")]
    InvalidEmail,
    #[error("Please write a message.")]
    MissingMessage,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !looks_like_email(email) {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }

    /// `mailto:` link carrying the form as subject and body.
    pub fn mailto(&self, to: &str) -> Result<String, ContactError> {
        self.validate()?;
        let name = self.name.trim();
        let subject = format!("Portfolio contact from {name}");
        let body = format!(
            "Name: {name}\nEmail: {}\n\n{}",
            self.email.trim(),
            self.message.trim()
        );
        Ok(format!(
            "mailto:{to}?subject={}&body={}",
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        ))
    }
}

fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}

/// Hands a URL to the browser's mail handler. Nothing comes back.
fn open_mail_client(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if window.location().set_href(url).is_err() {
            tracing::debug!("contact: mail client hand-off failed");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("contact: would open {url}");
    }
}

pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window().ok_or_else(|| "window missing".to_string())?;
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|_| "clipboard write rejected".to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = text;
        Err("clipboard unavailable".to_string())
    }
}

#[component]
pub fn CopyEmailButton() -> Element {
    let email = use_context::<SiteConfig>().email;
    let mut copied = use_signal(|| false);
    rsx! {
        button {
            r#type: "button",
            class: "chip-link chip-small",
            onclick: move |_| {
                spawn(async move {
                    match copy_to_clipboard(email).await {
                        Ok(()) => copied.set(true),
                        Err(err) => tracing::debug!("contact: copy failed: {err}"),
                    }
                });
            },
            IconGlyph { icon: Icon::Copy, size: Some(14) }
            if copied() { " Copied" } else { " Copy Email" }
        }
    }
}

#[component]
pub fn ContactSection() -> Element {
    let config = use_context::<SiteConfig>();
    let email = config.email;
    let mut form = use_signal(ContactForm::default);
    let mut error = use_signal(|| None::<ContactError>);

    rsx! {
        SectionShell { anchor_id: Anchor::Contact.id().to_string(), title: "Contact".to_string(), wide: Some(false),
            form {
                class: "glass-card contact-form",
                onsubmit: move |event| {
                    event.prevent_default();
                    match form.read().mailto(email) {
                        Ok(url) => {
                            error.set(None);
                            open_mail_client(&url);
                        }
                        Err(err) => error.set(Some(err)),
                    }
                },
                div { class: "contact-row",
                    input {
                        name: "name",
                        required: true,
                        placeholder: "Your Name",
                        class: "field",
                        value: "{form().name}",
                        oninput: move |event| form.write().name = event.value(),
                    }
                    input {
                        r#type: "email",
                        name: "email",
                        required: true,
                        placeholder: "Your Email",
                        class: "field",
                        value: "{form().email}",
                        oninput: move |event| form.write().email = event.value(),
                    }
                }
                textarea {
                    name: "message",
                    required: true,
                    rows: "5",
                    placeholder: "Message",
                    class: "field",
                    value: "{form().message}",
                    oninput: move |event| form.write().message = event.value(),
                }
                if let Some(err) = error() {
                    p { class: "form-error", "{err}" }
                }
                div { class: "contact-actions",
                    button { r#type: "submit", class: "gradient-button", "Send" }
                    a { href: "{config.resume_path}", class: "text-link", "Resume" }
                    for link in PROFILE_LINKS.iter().filter(|link| link.label != "Framer") {
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
