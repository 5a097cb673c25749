use dioxus::prelude::*;

use crate::config::{ScrollConfig, TypingConfig};
use crate::reveal::reveal_class;
use crate::scroll::ScrollState;
use crate::typing::TypingAnimator;
#[cfg(target_arch = "wasm32")]
use crate::content::NAV_LINKS;
#[cfg(target_arch = "wasm32")]
use crate::reveal::RevealObserver;
#[cfg(target_arch = "wasm32")]
use crate::schedule::{BrowserScheduler, PendingTimer};
#[cfg(target_arch = "wasm32")]
use crate::scroll::{current_scroll_y, measure_sections, ScrollTracker, WindowScroll};

/// Tracks the scroll position for the whole page and shares the result as a
/// `Signal<ScrollState>` context. Call once, from the page root.
pub fn use_scroll_tracker(initial: ScrollState, config: ScrollConfig) -> Signal<ScrollState> {
    let state = use_context_provider(|| Signal::new(initial));

    #[cfg(target_arch = "wasm32")]
    {
        let mut tracker = use_signal(|| None::<ScrollTracker<WindowScroll>>);
        use_effect(move || {
            if tracker.peek().is_some() {
                return;
            }
            let mut state = state;
            let refresh = move || {
                let previous = *state.peek();
                let next = previous.observe(current_scroll_y(), &measure_sections(NAV_LINKS), config);
                if next != previous {
                    state.set(next);
                }
            };
            tracker.set(Some(ScrollTracker::attach(&WindowScroll, refresh)));
        });

        use_drop(move || {
            drop(tracker.write().take());
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = config;
    }

    state
}

pub fn use_scroll_state() -> Signal<ScrollState> {
    use_context::<Signal<ScrollState>>()
}

/// Text of a looping typing animation. One timer is pending at a time; a new
/// phase drops the previous one.
pub fn use_typing(strings: &'static [&'static str], config: TypingConfig) -> String {
    let animator = use_signal(move || TypingAnimator::new(strings, config));

    #[cfg(target_arch = "wasm32")]
    {
        let mut timer = use_signal(|| PendingTimer::new(BrowserScheduler));
        use_effect(move || {
            let delay = animator.read().delay_ms();
            let mut animator = animator;
            timer.write().arm(delay, move || animator.write().tick());
        });

        use_drop(move || {
            timer.write().cancel();
        });
    }

    let text = animator.read().text();
    text
}

/// Reveal-on-scroll state for one element, attached through `onmounted`.
#[derive(Clone, Copy)]
pub struct Reveal {
    visible: Signal<bool>,
    #[cfg(target_arch = "wasm32")]
    target: Signal<Option<web_sys::Element>>,
}

impl Reveal {
    pub fn class(&self, base: &str) -> String {
        reveal_class(base, (self.visible)())
    }

    pub fn mount(&self, event: MountedEvent) {
        #[cfg(target_arch = "wasm32")]
        {
            use dioxus::web::WebEventExt;
            use wasm_bindgen::JsCast;

            let mut target = self.target;
            let element = event.data.as_ref().as_web_event();
            if let Ok(node) = element.dyn_into::<web_sys::Element>() {
                target.set(Some(node));
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = event;
        }
    }
}

/// Starts hidden in the browser and flips to visible once, when the element
/// first scrolls into view. Off the browser everything is visible.
pub fn use_reveal() -> Reveal {
    let visible = use_signal(|| cfg!(not(target_arch = "wasm32")));

    #[cfg(target_arch = "wasm32")]
    let target = {
        let target = use_signal(|| None::<web_sys::Element>);
        let mut observer = use_signal(|| None::<RevealObserver>);
        use_effect(move || {
            let Some(element) = target.read().as_ref().cloned() else {
                return;
            };
            if observer.peek().is_some() || *visible.peek() {
                return;
            }
            let mut visible = visible;
            match RevealObserver::observe(&element, move || visible.set(true)) {
                Some(handle) => observer.set(Some(handle)),
                None => {
                    tracing::debug!("reveal: observer unavailable, showing immediately");
                    visible.set(true);
                }
            }
        });

        use_drop(move || {
            drop(observer.write().take());
        });
        target
    };

    Reveal {
        visible,
        #[cfg(target_arch = "wasm32")]
        target,
    }
}
