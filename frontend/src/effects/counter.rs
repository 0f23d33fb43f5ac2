use std::cell::{Cell, RefCell};
use std::rc::Rc;

use yew::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::effects::reveal::OneShotObserver;

pub const COUNT_DURATION_MS: f64 = 1600.0;
const COUNT_THRESHOLD: f64 = 0.4;

pub fn parse_target(raw: &str) -> Option<u64> {
    raw.trim().replace(',', "").parse().ok()
}

/// Value shown `elapsed_ms` into the animation, eased out so the count
/// slows down as it approaches the target.
pub fn counter_value(target: u64, elapsed_ms: f64, duration_ms: f64) -> u64 {
    if duration_ms <= 0.0 || elapsed_ms >= duration_ms {
        return target;
    }
    let progress = (elapsed_ms / duration_ms).max(0.0);
    let eased = 1.0 - (1.0 - progress).powi(3);
    (target as f64 * eased).round() as u64
}

type FrameCallback = Closure<dyn FnMut(f64)>;

fn request_frame(callback: &FrameCallback) {
    if let Some(window) = web_sys::window() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

fn animate_count(element: Element, target: u64) {
    let started_at = Rc::new(Cell::new(None::<f64>));
    let frame: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let next_frame = frame.clone();

    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        let start = match started_at.get() {
            Some(start) => start,
            None => {
                started_at.set(Some(now));
                now
            }
        };
        let elapsed = now - start;
        element.set_text_content(Some(&counter_value(target, elapsed, COUNT_DURATION_MS).to_string()));

        if elapsed >= COUNT_DURATION_MS {
            // last frame, release the closure
            let _ = next_frame.borrow_mut().take();
            return;
        }
        if let Some(callback) = next_frame.borrow().as_ref() {
            request_frame(callback);
        }
    }) as Box<dyn FnMut(f64)>));

    let first = frame.borrow();
    if let Some(callback) = first.as_ref() {
        request_frame(callback);
    }
}

/// Counts every `.count[data-target]` up from zero the first time it
/// becomes visible.
#[hook]
pub fn use_count_up() {
    use_effect_with_deps(
        move |_| {
            let observer = OneShotObserver::observe_all(".count[data-target]", COUNT_THRESHOLD, "0px", |element| {
                match element.get_attribute("data-target").as_deref().and_then(parse_target) {
                    Some(target) => animate_count(element, target),
                    None => log::warn!("Ignoring counter with unreadable data-target"),
                }
            });
            move || drop(observer)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_lands_on_target() {
        assert_eq!(counter_value(250, 0.0, COUNT_DURATION_MS), 0);
        assert_eq!(counter_value(250, COUNT_DURATION_MS, COUNT_DURATION_MS), 250);
        assert_eq!(counter_value(250, COUNT_DURATION_MS * 3.0, COUNT_DURATION_MS), 250);
    }

    #[test]
    fn eases_out() {
        let halfway = counter_value(1000, COUNT_DURATION_MS / 2.0, COUNT_DURATION_MS);
        assert_eq!(halfway, 875);
        let mut last = 0;
        for step in 0..=16 {
            let value = counter_value(1000, step as f64 * 100.0, COUNT_DURATION_MS);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        assert_eq!(counter_value(42, 0.0, 0.0), 42);
    }

    #[test]
    fn targets_parse_with_separators() {
        assert_eq!(parse_target("1,200"), Some(1200));
        assert_eq!(parse_target(" 15 "), Some(15));
        assert_eq!(parse_target("many"), None);
    }
}
