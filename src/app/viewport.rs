use leptos::{ev, html, prelude::*};
use leptos_use::{
    use_event_listener, use_intersection_observer_with_options, use_window,
    UseIntersectionObserverOptions, UseIntersectionObserverReturn,
};

use crate::interaction::{
    PointerPosition, SectionId, SectionVisibility, ViewState, VISIBILITY_THRESHOLD,
};

#[derive(Debug, Clone, Copy)]
pub struct SectionRefs {
    hero: NodeRef<html::Section>,
    work: NodeRef<html::Section>,
    about: NodeRef<html::Section>,
    contact: NodeRef<html::Section>,
}

impl SectionRefs {
    pub fn new() -> Self {
        Self {
            hero: NodeRef::new(),
            work: NodeRef::new(),
            about: NodeRef::new(),
            contact: NodeRef::new(),
        }
    }

    pub fn get(&self, section: SectionId) -> NodeRef<html::Section> {
        match section {
            SectionId::Hero => self.hero,
            SectionId::Work => self.work,
            SectionId::About => self.about,
            SectionId::Contact => self.contact,
        }
    }

    pub fn scroll_to(&self, section: SectionId) {
        if let Some(el) = self.get(section).get_untracked() {
            el.scroll_into_view();
        }
    }
}

/// Feeds pointer moves and section visibility into `view_state` for as long
/// as the calling component lives. Both listeners are released on cleanup.
pub fn use_viewport_tracker(view_state: RwSignal<ViewState>, sections: SectionRefs) {
    let stop_pointer = use_event_listener(use_window(), ev::mousemove, move |ev| {
        let pointer = PointerPosition::new(ev.client_x() as f64, ev.client_y() as f64);
        view_state.update(|v| v.move_pointer(pointer));
    });
    // leptos-use also removes the listener when the owner is cleaned up; the
    // explicit stop keeps release tied to this scope either way
    on_cleanup(stop_pointer);

    for section in SectionId::ALL {
        let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
            sections.get(section),
            move |entries, _| {
                let reports = entries
                    .iter()
                    .filter_map(|entry| {
                        SectionVisibility::from_dom(
                            &entry.target().id(),
                            entry.intersection_ratio(),
                            entry.is_intersecting(),
                        )
                        .map_err(|err| log::warn!("ignoring intersection report: {err}"))
                        .ok()
                    })
                    .collect::<Vec<_>>();
                // skip the notify when nothing moved so the nav doesn't re-render
                view_state.maybe_update(|v| v.observe(reports));
            },
            UseIntersectionObserverOptions::default().thresholds(vec![VISIBILITY_THRESHOLD]),
        );
        // stop() disconnects the observer; same scope-bound release as above
        on_cleanup(stop);
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_state_released_with_owner() {
        let owner = Owner::new();
        let view_state = owner.with(|| {
            let view_state = RwSignal::new(ViewState::default());
            use_viewport_tracker(view_state, SectionRefs::new());
            view_state
        });
        assert_eq!(view_state.try_update(|v| v.mount()), Some(()));

        owner.cleanup();
        // nothing registered by the tracker can write into the page state now
        assert_eq!(view_state.try_update(|v| v.mount()), None);
        assert!(view_state.try_with_untracked(|v| v.loaded()).is_none());
    }
}
