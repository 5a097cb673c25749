#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

/// Share of an element that has to be on screen before it reveals.
#[cfg(any(target_arch = "wasm32", test))]
pub const REVEAL_RATIO: f64 = 0.2;
// Browsers report the crossing ratio with rounding error.
#[cfg(any(target_arch = "wasm32", test))]
const RATIO_SLACK: f64 = 0.01;

pub fn reveal_class(base: &str, visible: bool) -> String {
    if visible {
        format!("{base} reveal is-visible")
    } else {
        format!("{base} reveal")
    }
}

#[cfg(any(target_arch = "wasm32", test))]
pub fn crosses_reveal_line(is_intersecting: bool, ratio: f64) -> bool {
    is_intersecting && ratio + RATIO_SLACK >= REVEAL_RATIO
}

/// Watches one element and fires once, the first time it crosses
/// `REVEAL_RATIO`. Disconnects when dropped.
#[cfg(target_arch = "wasm32")]
pub struct RevealObserver {
    observer: web_sys::IntersectionObserver,
    _closure: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(target_arch = "wasm32")]
impl RevealObserver {
    pub fn observe(target: &web_sys::Element, mut on_reveal: impl FnMut() + 'static) -> Option<Self> {
        let closure = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let revealed = entries.iter().any(|entry| {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    crosses_reveal_line(entry.is_intersecting(), entry.intersection_ratio())
                });
                if revealed {
                    observer.disconnect();
                    on_reveal();
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);
        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_RATIO));
        let observer =
            web_sys::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options).ok()?;
        observer.observe(target);
        Some(Self {
            observer,
            _closure: closure,
        })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn visible_class_is_added_on_top_of_reveal() {
        assert_eq!(reveal_class("section-inner", false), "section-inner reveal");
        assert_eq!(reveal_class("section-inner", true), "section-inner reveal is-visible");
    }

    #[test]
    fn reveals_once_a_fifth_is_on_screen() {
        assert!(!crosses_reveal_line(true, 0.05));
        assert!(crosses_reveal_line(true, 0.199_99));
        assert!(crosses_reveal_line(true, 0.6));
        assert!(!crosses_reveal_line(false, 0.0));
    }
}
