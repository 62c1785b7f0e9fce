use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info};
use web_sys::Element;

use super::observer::Observer;
use super::reveal::{RevealGroup, Timeline, GALLERY_ROOT_MARGIN, GALLERY_STAGGER_MS, HISTORY_ROOT_MARGIN};
use crate::dom;
use crate::error::SiteError;

fn index_of(elements: &[Element], target: &Element) -> Option<usize> {
    elements.iter().position(|element| element == target)
}

/// Timeline modules get a sticky `in-view` class; the big year label follows
/// the module currently crossing the reading band.
pub fn attach_history() -> Result<Observer, SiteError> {
    let section = dom::by_id(dom::HISTORY)?;
    let year_label = dom::by_id(dom::HISTORY_YEAR)?;
    let modules = dom::query_all(&section, dom::TIMELINE_MODULE)?;

    let years = modules
        .iter()
        .map(|module| module.get_attribute("data-year"))
        .collect();
    let mut timeline = Timeline::new(years);

    let tracked = modules.clone();
    let observer = Observer::new(HISTORY_ROOT_MARGIN, move |batch, _| {
        let entries: Vec<(usize, bool)> = batch
            .iter()
            .filter_map(|(target, hit)| index_of(&tracked, target).map(|i| (i, *hit)))
            .collect();

        for index in timeline.on_entries(&entries) {
            dom::set_class(&tracked[index], "in-view", true);
        }
        if let Some(year) = timeline.label() {
            if year_label.text_content().as_deref() != Some(year) {
                year_label.set_text_content(Some(year));
            }
        }
    })?;

    observer.observe_all(&modules);
    info!("History timeline attached ({} modules)", modules.len());
    Ok(observer)
}

/// Gallery wipes reveal once, staggered by their order in the gallery.
pub fn attach_gallery_wipes() -> Result<Observer, SiteError> {
    let gallery = dom::by_id(dom::GALLERY)?;
    let wipes = dom::query_all(&gallery, dom::WIPE)?;
    let group = Rc::new(RefCell::new(RevealGroup::new(wipes.len(), GALLERY_STAGGER_MS)));

    let tracked = wipes.clone();
    let observer = Observer::new(GALLERY_ROOT_MARGIN, move |batch, observer| {
        let hits: Vec<usize> = batch
            .iter()
            .filter(|(_, hit)| *hit)
            .filter_map(|(target, _)| index_of(&tracked, target))
            .collect();

        let plans = group.borrow_mut().observe_batch(&hits);
        for plan in plans {
            let element = tracked[plan.index].clone();
            observer.unobserve(&element);

            let group = group.clone();
            Timeout::new(plan.delay_ms, move || {
                dom::set_class(&element, "visible", true);
                let mut group = group.borrow_mut();
                group.confirm(plan.index);
                if group.is_complete() {
                    debug!("every gallery wipe revealed");
                }
            })
            .forget();
        }
    })?;

    observer.observe_all(&wipes);
    info!("Gallery wipes attached ({} items)", wipes.len());
    Ok(observer)
}
