use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent, ScrollBehavior, ScrollToOptions};

use crate::dom;
use crate::error::SiteError;
use crate::motion::easing::Easing;
use crate::motion::tween::{Animator, Tween};

pub const SCROLL_MS: f64 = 600.0;

const IN_PAGE_ANCHOR: &str = "a[href^=\"#\"]";

/// Document offset to scroll to for a target whose viewport top is `rect_top`.
pub fn target_y(rect_top: f64, scroll_y: f64) -> f64 {
    (rect_top + scroll_y).round()
}

/// Selector for an in-page link, `None` for a bare `#`.
pub fn fragment_selector(href: &str) -> Option<&str> {
    href.strip_prefix('#')
        .filter(|id| !id.trim().is_empty())
        .map(|_| href)
}

pub fn scroll_to(y: f64, animator: Animator) {
    let Ok(window) = dom::window() else {
        return;
    };
    match animator {
        Animator::Frames => {
            let tween = Tween::new(dom::scroll_y(), y, SCROLL_MS).easing(Easing::EaseInOut);
            let target = window.clone();
            animator.run(tween, move |v| target.scroll_to_with_x_and_y(0.0, v), || ());
        }
        Animator::Immediate => {
            let mut options = ScrollToOptions::new();
            #[allow(deprecated)]
            {
                options.top(y);
                options.behavior(ScrollBehavior::Smooth);
            }
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Document-level click delegation for `href="#…"` links.
pub struct AnchorScroll {
    document: Document,
    on_click: Closure<dyn FnMut(MouseEvent)>,
}

impl Drop for AnchorScroll {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref());
    }
}

pub fn attach() -> Result<AnchorScroll, SiteError> {
    let document = dom::document()?;
    let animator = Animator::detect();

    let lookup = document.clone();
    let on_click = Closure::wrap(Box::new(move |event: MouseEvent| {
        let Some(anchor) = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(IN_PAGE_ANCHOR).ok().flatten())
        else {
            return;
        };
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        let Some(selector) = fragment_selector(&href) else {
            return;
        };
        event.prevent_default();

        match lookup.query_selector(selector) {
            Ok(Some(target)) => {
                let y = target_y(target.get_bounding_client_rect().top(), dom::scroll_y());
                scroll_to(y, animator);
            }
            _ => debug!("anchor target {} not found", selector),
        }
    }) as Box<dyn FnMut(MouseEvent)>);

    document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    info!("Smooth anchor scrolling attached ({:?})", animator);

    Ok(AnchorScroll { document, on_click })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_is_rounded_document_offset() {
        assert_eq!(target_y(120.4, 300.0), 420.0);
        assert_eq!(target_y(-80.6, 1000.0), 919.0);
    }

    #[test]
    fn bare_hash_has_no_target() {
        assert_eq!(fragment_selector("#"), None);
        assert_eq!(fragment_selector("# "), None);
        assert_eq!(fragment_selector("#gallery"), Some("#gallery"));
        assert_eq!(fragment_selector("/elsewhere"), None);
    }
}
