//! Scroll-triggered reveal flags shared by every page section.
//!
//! Elements opt in by carrying the scope class and a `data-element-id`
//! attribute. Once an element has intersected the viewport its id stays in
//! the visible set for the lifetime of the owning component.

use std::collections::HashSet;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

pub const ELEMENT_ID_ATTR: &str = "data-element-id";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl RevealOptions {
    /// Whole page sections.
    pub const SECTION: Self = Self { threshold: 0.1, root_margin: "0px 0px -100px 0px" };
    pub const ELEMENT: Self = Self { threshold: 0.2, root_margin: "0px 0px -50px 0px" };
    pub const CARD: Self = Self { threshold: 0.15, root_margin: "0px 0px -30px 0px" };
    pub const TIMELINE: Self = Self { threshold: 0.3, root_margin: "0px 0px -50px 0px" };
}

/// Monotonic set of element ids that have entered the viewport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilitySet {
    visible: HashSet<String>,
    everything: bool,
}

impl VisibilitySet {
    /// Returns true when the id was not visible before.
    pub fn mark_visible(&mut self, id: impl Into<String>) -> bool {
        !self.everything && self.visible.insert(id.into())
    }

    /// Fallback when the browser cannot observe intersections.
    pub fn reveal_all(&mut self) -> bool {
        !std::mem::replace(&mut self.everything, true)
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.everything || self.visible.contains(id)
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }
}

pub enum RevealAction {
    Seen(Vec<String>),
    RevealAll,
}

impl Reducible for VisibilitySet {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            RevealAction::Seen(ids) => ids
                .into_iter()
                .fold(false, |changed, id| next.mark_visible(id) || changed),
            RevealAction::RevealAll => next.reveal_all(),
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[derive(Clone)]
pub struct RevealHandle {
    set: UseReducerHandle<VisibilitySet>,
}

impl RevealHandle {
    pub fn is_visible(&self, id: &str) -> bool {
        self.set.is_visible(id)
    }

    /// Presentation class for an element: `revealed` once seen.
    pub fn class(&self, id: &str) -> &'static str {
        if self.is_visible(id) {
            "revealed"
        } else {
            "concealed"
        }
    }
}

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct ObserverGuard {
    observer: IntersectionObserver,
    _on_entries: EntriesCallback,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observes every element with class `scope` and tracks which ones have been
/// seen. The DOM is re-scanned whenever `deps` changes, e.g. after a filter
/// swaps the rendered cards. Ids seen before the re-scan stay visible.
#[hook]
pub fn use_reveal<D>(scope: &'static str, options: RevealOptions, deps: D) -> RevealHandle
where
    D: PartialEq + 'static,
{
    let set = use_reducer(VisibilitySet::default);

    {
        let dispatcher = set.dispatcher();
        use_effect_with_deps(
            move |_| {
                let guard = match observe_scope(scope, options, dispatcher.clone()) {
                    Ok(guard) => Some(guard),
                    Err(reason) => {
                        warn!("Reveal scope '{}' shown without animation: {}", scope, reason);
                        dispatcher.dispatch(RevealAction::RevealAll);
                        None
                    }
                };
                move || drop(guard)
            },
            deps,
        );
    }

    RevealHandle { set }
}

fn observe_scope(
    scope: &'static str,
    options: RevealOptions,
    dispatcher: UseReducerDispatcher<VisibilitySet>,
) -> Result<ObserverGuard, String> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "no document".to_string())?;

    let on_entries = EntriesCallback::new(move |entries: Array, _observer: IntersectionObserver| {
        let seen: Vec<String> = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .filter(|entry| entry.is_intersecting())
            .filter_map(|entry| entry.target().get_attribute(ELEMENT_ID_ATTR))
            .collect();
        if !seen.is_empty() {
            dispatcher.dispatch(RevealAction::Seen(seen));
        }
    });

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);
    let observer = IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &init)
        .map_err(|e| format!("{:?}", e))?;

    let nodes = document
        .query_selector_all(&format!(".{}", scope))
        .map_err(|e| format!("{:?}", e))?;
    for index in 0..nodes.length() {
        if let Some(element) = nodes.item(index).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&element);
        }
    }
    debug!("Observing {} elements in reveal scope '{}'", nodes.length(), scope);

    Ok(ObserverGuard { observer, _on_entries: on_entries })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marking_is_idempotent() {
        let mut set = VisibilitySet::default();
        assert!(set.mark_visible("header"));
        assert!(!set.mark_visible("header"));
        assert_eq!(set.len(), 1);
        assert!(set.is_visible("header"));
        assert!(!set.is_visible("filters"));
    }

    #[test]
    fn reducer_only_grows() {
        let set = Rc::new(VisibilitySet::default());
        let set = set.reduce(RevealAction::Seen(vec!["badge".into(), "title".into()]));
        let set = set.reduce(RevealAction::Seen(vec!["title".into()]));
        assert_eq!(set.len(), 2);
        assert!(set.is_visible("badge"));
    }

    #[test]
    fn reducer_keeps_state_when_nothing_new() {
        let first = Rc::new(VisibilitySet::default())
            .reduce(RevealAction::Seen(vec!["stats".into()]));
        let second = Rc::clone(&first).reduce(RevealAction::Seen(vec!["stats".into()]));
        assert!(Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn reveal_all_shows_unknown_ids() {
        let set = Rc::new(VisibilitySet::default()).reduce(RevealAction::RevealAll);
        assert!(set.is_visible("never-registered"));
    }

    #[test]
    fn presets_match_section_margins() {
        assert_eq!(RevealOptions::SECTION.threshold, 0.1);
        assert_eq!(RevealOptions::ELEMENT.root_margin, "0px 0px -50px 0px");
        assert!(RevealOptions::CARD.threshold < RevealOptions::ELEMENT.threshold);
    }
}
