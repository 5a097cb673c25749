use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

const DARK_CLASS: &str = "dark";
#[cfg(target_arch = "wasm32")]
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// One named value in client-local storage.
pub trait PreferenceSlot {
    fn read(&self) -> Option<String>;
    fn write(&self, value: &str) -> Result<(), String>;
}

/// `window.localStorage` entry. A missing or throwing storage reads as empty.
#[cfg(target_arch = "wasm32")]
pub struct BrowserSlot {
    key: &'static str,
}

#[cfg(target_arch = "wasm32")]
impl BrowserSlot {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceSlot for BrowserSlot {
    fn read(&self) -> Option<String> {
        Self::storage()?.get_item(self.key).ok().flatten()
    }

    fn write(&self, value: &str) -> Result<(), String> {
        let storage = Self::storage().ok_or_else(|| "local storage unavailable".to_string())?;
        storage
            .set_item(self.key, value)
            .map_err(|_| format!("local storage rejected {}", self.key))
    }
}

/// In-process slot. Remembers every write.
#[derive(Default)]
pub struct MemorySlot {
    value: RefCell<Option<String>>,
    writes: RefCell<Vec<String>>,
}

#[cfg(test)]
impl MemorySlot {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: RefCell::new(Some(value.to_string())),
            writes: RefCell::new(Vec::new()),
        }
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

impl PreferenceSlot for MemorySlot {
    fn read(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn write(&self, value: &str) -> Result<(), String> {
        *self.value.borrow_mut() = Some(value.to_string());
        self.writes.borrow_mut().push(value.to_string());
        Ok(())
    }
}

/// Any non-empty stored value wins, and only `dark` means dark. Without one
/// the platform colour scheme decides, then light.
pub fn resolve_initial_theme(slot: &dyn PreferenceSlot, platform_prefers_dark: Option<bool>) -> Theme {
    if let Some(stored) = slot.read().filter(|value| !value.is_empty()) {
        return Theme::parse(&stored).unwrap_or(Theme::Light);
    }
    match platform_prefers_dark {
        Some(true) => Theme::Dark,
        _ => Theme::Light,
    }
}

pub fn apply_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            tracing::debug!("theme: document element missing");
            return;
        };
        if root
            .class_list()
            .toggle_with_force(DARK_CLASS, theme.is_dark())
            .is_err()
        {
            tracing::debug!("theme: class toggle failed");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (theme, DARK_CLASS);
    }
}

pub fn toggle_theme(current: Theme, slot: &dyn PreferenceSlot) -> Theme {
    let next = current.flipped();
    apply_theme(next);
    if let Err(err) = slot.write(next.as_str()) {
        tracing::debug!("theme: preference not persisted: {err}");
    }
    next
}

pub fn platform_prefers_dark() -> Option<bool> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let query = window.match_media(DARK_SCHEME_QUERY).ok().flatten()?;
        Some(query.matches())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Shared handle over the page theme. Only `toggle` writes.
#[derive(Clone)]
pub struct ThemeController {
    theme: Signal<Theme>,
    slot: Rc<dyn PreferenceSlot>,
}

impl ThemeController {
    pub fn current(&self) -> Theme {
        (self.theme)()
    }

    pub fn toggle(&mut self) -> Theme {
        let next = toggle_theme(self.current(), self.slot.as_ref());
        self.theme.set(next);
        next
    }
}

/// Resolves and applies the theme once, then shares it with descendants.
pub fn use_theme_provider(storage_key: &'static str) -> ThemeController {
    use_context_provider(move || {
        #[cfg(target_arch = "wasm32")]
        let slot: Rc<dyn PreferenceSlot> = Rc::new(BrowserSlot::new(storage_key));
        #[cfg(not(target_arch = "wasm32"))]
        let slot: Rc<dyn PreferenceSlot> = {
            tracing::debug!("theme: no browser storage for {storage_key}, keeping it in memory");
            Rc::new(MemorySlot::default())
        };
        let theme = resolve_initial_theme(slot.as_ref(), platform_prefers_dark());
        tracing::debug!("theme: resolved {}", theme.as_str());
        apply_theme(theme);
        ThemeController {
            theme: Signal::new(theme),
            slot,
        }
    })
}

pub fn use_theme() -> ThemeController {
    use_context::<ThemeController>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn platform_preference_applies_without_stored_value() {
        let slot = MemorySlot::default();
        assert_eq!(resolve_initial_theme(&slot, Some(true)), Theme::Dark);
        assert_eq!(resolve_initial_theme(&slot, Some(false)), Theme::Light);
        assert_eq!(resolve_initial_theme(&slot, None), Theme::Light);
    }

    #[test]
    fn stored_value_beats_platform_preference() {
        let slot = MemorySlot::with_value("light");
        assert_eq!(resolve_initial_theme(&slot, Some(true)), Theme::Light);
        let slot = MemorySlot::with_value("dark");
        assert_eq!(resolve_initial_theme(&slot, Some(false)), Theme::Dark);
    }

    #[test]
    fn unknown_stored_value_means_light() {
        let slot = MemorySlot::with_value("solarized");
        assert_eq!(resolve_initial_theme(&slot, Some(true)), Theme::Light);
    }

    #[test]
    fn empty_stored_value_defers_to_platform() {
        let slot = MemorySlot::with_value("");
        assert_eq!(resolve_initial_theme(&slot, Some(true)), Theme::Dark);
        assert_eq!(resolve_initial_theme(&slot, None), Theme::Light);
    }

    #[test]
    fn toggling_twice_round_trips_with_two_writes() {
        let slot = MemorySlot::default();
        let first = toggle_theme(Theme::Light, &slot);
        let second = toggle_theme(first, &slot);
        assert_eq!(first, Theme::Dark);
        assert_eq!(second, Theme::Light);
        assert_eq!(slot.writes(), vec!["dark".to_string(), "light".to_string()]);
        assert_eq!(resolve_initial_theme(&slot, Some(true)), Theme::Light);
    }

    struct BrokenSlot;

    impl PreferenceSlot for BrokenSlot {
        fn read(&self) -> Option<String> {
            None
        }

        fn write(&self, _value: &str) -> Result<(), String> {
            Err("quota exceeded".to_string())
        }
    }

    #[test]
    fn failed_write_still_flips() {
        assert_eq!(toggle_theme(Theme::Dark, &BrokenSlot), Theme::Light);
        assert_eq!(resolve_initial_theme(&BrokenSlot, None), Theme::Light);
    }
}
