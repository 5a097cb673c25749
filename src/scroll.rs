#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::config::ScrollConfig;
use crate::content::{Anchor, NavLink};

/// A nav section and its top offset in the document, if it is rendered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionOffset {
    pub anchor: Anchor,
    pub top: Option<f64>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub active: Option<Anchor>,
    pub past_threshold: bool,
}

impl ScrollState {
    pub fn starting_at(anchor: Anchor) -> Self {
        Self {
            active: Some(anchor),
            past_threshold: false,
        }
    }

    /// Next state for a scroll offset. Keeps the previous anchor when no
    /// section qualifies.
    pub fn observe(&self, scroll_y: f64, sections: &[SectionOffset], config: ScrollConfig) -> Self {
        Self {
            active: resolve_active(sections, scroll_y, config.lookahead).or(self.active),
            past_threshold: scroll_y > config.back_to_top_after,
        }
    }
}

/// Lowest section whose top has been scrolled past.
pub fn resolve_active(sections: &[SectionOffset], scroll_y: f64, lookahead: f64) -> Option<Anchor> {
    let line = scroll_y + lookahead;
    sections
        .iter()
        .rev()
        .find(|section| section.top.is_some_and(|top| top <= line))
        .map(|section| section.anchor)
}

#[cfg(target_arch = "wasm32")]
pub fn measure_sections(links: &[NavLink]) -> Vec<SectionOffset> {
    let document = web_sys::window().and_then(|window| window.document());
    links
        .iter()
        .map(|link| {
            let top = document
                .as_ref()
                .and_then(|document| document.get_element_by_id(link.anchor.id()))
                .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
                .map(|element| element.offset_top() as f64);
            SectionOffset {
                anchor: link.anchor,
                top,
            }
        })
        .collect()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn measure_sections(links: &[NavLink]) -> Vec<SectionOffset> {
    links
        .iter()
        .map(|link| SectionOffset {
            anchor: link.anchor,
            top: None,
        })
        .collect()
}

#[cfg(target_arch = "wasm32")]
pub fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Delivers scroll events. Dropping a subscription unsubscribes.
#[cfg(any(target_arch = "wasm32", test))]
pub trait ScrollSource {
    type Subscription;
    fn subscribe(&self, on_scroll: Box<dyn FnMut()>) -> Option<Self::Subscription>;
}

/// Keeps one scroll subscription alive for as long as it lives.
#[cfg(any(target_arch = "wasm32", test))]
pub struct ScrollTracker<S: ScrollSource> {
    _subscription: Option<S::Subscription>,
}

#[cfg(any(target_arch = "wasm32", test))]
impl<S: ScrollSource> ScrollTracker<S> {
    /// Runs `refresh` once now, then on every scroll event until dropped.
    pub fn attach(source: &S, mut refresh: impl FnMut() + 'static) -> Self {
        refresh();
        let subscription = source.subscribe(Box::new(refresh));
        if subscription.is_none() {
            tracing::debug!("scroll: no event source, tracking the initial offset only");
        }
        Self {
            _subscription: subscription,
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowScroll;

#[cfg(target_arch = "wasm32")]
impl ScrollSource for WindowScroll {
    type Subscription = ScrollListener;

    fn subscribe(&self, on_scroll: Box<dyn FnMut()>) -> Option<ScrollListener> {
        ScrollListener::attach(on_scroll)
    }
}

/// Window `scroll` listener, removed when dropped.
#[cfg(target_arch = "wasm32")]
pub struct ScrollListener {
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(target_arch = "wasm32")]
impl ScrollListener {
    pub fn attach(mut on_scroll: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            on_scroll();
        }) as Box<dyn FnMut(web_sys::Event)>);
        window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
            .ok()?;
        tracing::debug!("scroll: listener attached");
        Some(Self { closure })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("scroll", self.closure.as_ref().unchecked_ref());
        }
        tracing::debug!("scroll: listener removed");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::content::NAV_LINKS;
    use pretty_assertions::assert_eq;

    type Listeners = Rc<RefCell<Vec<Option<Box<dyn FnMut()>>>>>;

    #[derive(Default)]
    struct FakeWindow {
        listeners: Listeners,
    }

    struct FakeSubscription {
        slot: usize,
        listeners: Listeners,
    }

    impl Drop for FakeSubscription {
        fn drop(&mut self) {
            self.listeners.borrow_mut()[self.slot] = None;
        }
    }

    impl ScrollSource for FakeWindow {
        type Subscription = FakeSubscription;

        fn subscribe(&self, on_scroll: Box<dyn FnMut()>) -> Option<FakeSubscription> {
            let mut listeners = self.listeners.borrow_mut();
            listeners.push(Some(on_scroll));
            Some(FakeSubscription {
                slot: listeners.len() - 1,
                listeners: self.listeners.clone(),
            })
        }
    }

    impl FakeWindow {
        fn live(&self) -> usize {
            self.listeners.borrow().iter().filter(|listener| listener.is_some()).count()
        }

        fn scroll(&self) {
            for listener in self.listeners.borrow_mut().iter_mut().flatten() {
                listener();
            }
        }
    }

    struct NoScroll;

    impl ScrollSource for NoScroll {
        type Subscription = ();

        fn subscribe(&self, _on_scroll: Box<dyn FnMut()>) -> Option<()> {
            None
        }
    }

    fn tracked(
        state: &Rc<Cell<ScrollState>>,
        offset: &Rc<Cell<f64>>,
    ) -> impl FnMut() + 'static {
        let state = state.clone();
        let offset = offset.clone();
        let sections = page();
        move || state.set(state.get().observe(offset.get(), &sections, ScrollConfig::default()))
    }

    fn page() -> Vec<SectionOffset> {
        NAV_LINKS
            .iter()
            .enumerate()
            .map(|(index, link)| SectionOffset {
                anchor: link.anchor,
                top: Some(index as f64 * 1000.0),
            })
            .collect()
    }

    #[test]
    fn picks_last_section_above_the_lookahead_line() {
        let sections = page();
        let cases = [
            (0.0, Anchor::Home),
            (879.0, Anchor::Home),
            (880.0, Anchor::About),
            (1500.0, Anchor::About),
            (2900.0, Anchor::Projects),
            (20_000.0, Anchor::Contact),
        ];
        for (scroll_y, expected) in cases {
            assert_eq!(resolve_active(&sections, scroll_y, 120.0), Some(expected), "scroll_y={scroll_y}");
        }
    }

    #[test]
    fn keeps_previous_anchor_when_nothing_qualifies() {
        let sections = vec![
            SectionOffset { anchor: Anchor::Home, top: Some(500.0) },
            SectionOffset { anchor: Anchor::About, top: Some(900.0) },
        ];
        let state = ScrollState::starting_at(Anchor::About);
        let next = state.observe(0.0, &sections, ScrollConfig::default());
        assert_eq!(next.active, Some(Anchor::About));
    }

    #[test]
    fn no_sections_leaves_fresh_state_without_anchor() {
        let next = ScrollState::default().observe(5000.0, &[], ScrollConfig::default());
        assert_eq!(next.active, None);
        assert!(next.past_threshold);
    }

    #[test]
    fn missing_sections_are_skipped() {
        let mut sections = page();
        sections[2].top = None;
        assert_eq!(resolve_active(&sections, 2000.0, 120.0), Some(Anchor::About));
    }

    #[test]
    fn back_to_top_threshold_is_exclusive() {
        let state = ScrollState::default();
        let config = ScrollConfig::default();
        assert!(!state.observe(600.0, &[], config).past_threshold);
        assert!(state.observe(601.0, &[], config).past_threshold);
        assert!(!state.observe(0.0, &[], config).past_threshold);
    }

    #[test]
    fn off_browser_measurement_reports_nothing() {
        let sections = measure_sections(NAV_LINKS);
        assert_eq!(sections.len(), NAV_LINKS.len());
        assert!(sections.iter().all(|section| section.top.is_none()));
    }

    #[test]
    fn tracker_evaluates_on_attach_and_on_scroll() {
        let window = FakeWindow::default();
        let state = Rc::new(Cell::new(ScrollState::starting_at(Anchor::Home)));
        let offset = Rc::new(Cell::new(2900.0));

        let _tracker = ScrollTracker::attach(&window, tracked(&state, &offset));
        assert_eq!(state.get().active, Some(Anchor::Projects));
        assert!(state.get().past_threshold);

        offset.set(1500.0);
        window.scroll();
        assert_eq!(state.get(), ScrollState { active: Some(Anchor::About), past_threshold: true });
    }

    #[test]
    fn dropping_the_tracker_releases_its_listener() {
        let window = FakeWindow::default();
        let state = Rc::new(Cell::new(ScrollState::starting_at(Anchor::Home)));
        let offset = Rc::new(Cell::new(0.0));

        let tracker = ScrollTracker::attach(&window, tracked(&state, &offset));
        assert_eq!(window.live(), 1);

        drop(tracker);
        assert_eq!(window.live(), 0);

        offset.set(5000.0);
        window.scroll();
        assert_eq!(state.get(), ScrollState::starting_at(Anchor::Home));
    }

    #[test]
    fn missing_source_still_evaluates_once() {
        let state = Rc::new(Cell::new(ScrollState::default()));
        let offset = Rc::new(Cell::new(880.0));
        let _tracker = ScrollTracker::attach(&NoScroll, tracked(&state, &offset));
        assert_eq!(state.get().active, Some(Anchor::About));
    }
}
