use leptos::prelude::*;

use super::viewport::SectionRefs;
use crate::content::Owner;
use crate::interaction::{SectionId, ViewState};

#[component]
pub fn CursorGlow(view_state: RwSignal<ViewState>) -> impl IntoView {
    let style = move || {
        let (x, y) = view_state.with(|v| v.glow_offset());
        format!("transform: translate({x}px, {y}px)")
    };
    view! {
        <div
            class="cursor-glow pointer-events-none fixed top-0 left-0 z-0 w-[400px] h-[400px] rounded-full"
            style=style
        />
    }
}

#[component]
pub fn Nav(view_state: RwSignal<ViewState>, sections: SectionRefs, owner: &'static Owner) -> impl IntoView {
    let logo = format!("{} © {}", owner.initials, super::contact::copyright_year());

    view! {
        <nav class="nav fixed top-0 inset-x-0 z-40 flex items-center justify-between px-6 md:px-16 py-8 mix-blend-difference">
            <button
                class="text-sm tracking-[0.2em] uppercase font-mono"
                on:click=move |_| window().scroll_to_with_x_and_y(0.0, 0.0)
            >
                {logo}
            </button>
            <button
                class="md:hidden flex flex-col gap-1.5 p-2"
                aria-label="Toggle menu"
                on:click=move |_| view_state.update(ViewState::toggle_menu)
            >
                <span class="block w-6 h-px bg-paper" />
                <span class="block w-6 h-px bg-paper" />
                <span class="block w-6 h-px bg-paper" />
            </button>
            <div class=move || {
                if view_state.with(|v| v.mobile_menu_open()) {
                    "nav-links open"
                } else {
                    "nav-links"
                }
            }>
                {SectionId::NAV
                    .into_iter()
                    .map(|section| {
                        view! {
                            <button
                                class=move || {
                                    if view_state.with(|v| v.is_active(section)) {
                                        "nav-link active"
                                    } else {
                                        "nav-link"
                                    }
                                }
                                on:click=move |_| {
                                    view_state.update(ViewState::close_menu);
                                    sections.scroll_to(section);
                                }
                            >
                                {section.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
