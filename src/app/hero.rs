use leptos::prelude::*;

use super::viewport::SectionRefs;
use crate::content::Owner;
use crate::interaction::{SectionId, ViewState};

#[component]
pub fn Hero(view_state: RwSignal<ViewState>, sections: SectionRefs, owner: &'static Owner) -> impl IntoView {
    // staggered reveal once the page has mounted
    let reveal = move |delay: &'static str| {
        move || {
            let state = if view_state.with(|v| v.loaded()) {
                "opacity-100 translate-y-0"
            } else {
                "opacity-0 translate-y-10"
            };
            format!("block transition-all duration-1000 {delay} {state}")
        }
    };

    view! {
        <section
            id=SectionId::Hero.as_str()
            node_ref=sections.get(SectionId::Hero)
            class="relative min-h-screen flex flex-col justify-center px-6 md:px-16"
        >
            <div class=reveal("delay-100")>
                <div class="w-16 h-px bg-accent mb-8" />
            </div>
            <p class=move || {
                format!("font-mono text-xs tracking-[0.3em] uppercase text-muted mb-6 {}", reveal("delay-200")())
            }>{owner.role.clone()}</p>
            <h1 class="hero-title font-serif leading-[0.9] text-[clamp(56px,14vw,180px)]">
                <span class=reveal("delay-300")>{owner.first_name.clone()}</span>
                <span class=move || format!("italic pl-[10vw] {}", reveal("delay-500")())>
                    {owner.last_name.clone()}
                </span>
            </h1>
            <button
                class="scroll-indicator absolute bottom-12 left-6 md:left-16 flex items-center gap-4 hover:opacity-70"
                on:click=move |_| sections.scroll_to(SectionId::Work)
            >
                <div class="w-px h-16 bg-muted animate-pulse" />
                <span class="font-mono text-xs tracking-[0.2em] uppercase text-muted">
                    "Scroll to explore"
                </span>
            </button>
        </section>
    }
}
