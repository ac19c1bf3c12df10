use leptos::{ev::KeyboardEvent, ev::MouseEvent, prelude::*};

use super::viewport::SectionRefs;
use crate::content::{Portfolio, Project};
use crate::interaction::{ModalTarget, SectionId, SelectionState};

#[component]
pub fn Work(
    sections: SectionRefs,
    selection: RwSignal<SelectionState>,
    portfolio: &'static Portfolio,
) -> impl IntoView {
    view! {
        <section
            id=SectionId::Work.as_str()
            node_ref=sections.get(SectionId::Work)
            class="section-work px-6 md:px-16 py-32"
        >
            <div class="flex items-baseline justify-between border-b border-muted/30 pb-8 mb-16">
                <h2 class="text-[clamp(40px,8vw,96px)] font-serif">"Selected Work"</h2>
                <span class="font-mono text-sm text-muted">
                    {format!("( {} )", portfolio.project_count_label())}
                </span>
            </div>
            <div class="flex flex-col gap-[2px]">
                {portfolio
                    .projects
                    .iter()
                    .map(|project| view! { <ProjectRow project selection /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectRow(project: &'static Project, selection: RwSignal<SelectionState>) -> impl IntoView {
    let id = project.id;
    let hovered = move || selection.with(|s| s.is_hovered(id));

    view! {
        <div
            class="project-item group relative grid grid-cols-[1fr_auto] md:grid-cols-[1fr_200px_100px_48px] items-center gap-8 py-10 border-b border-muted/20 cursor-pointer"
            role="button"
            tabindex="0"
            on:mouseenter=move |_| selection.update(|s| s.hover(id))
            on:mouseleave=move |_| selection.update(SelectionState::clear_hover)
            on:click=move |_| selection.update(|s| s.open(project))
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Enter" {
                    selection.update(|s| s.open(project));
                }
            }
        >
            <div
                class="absolute left-0 top-0 h-full w-[3px] transition-opacity duration-500"
                style:background-color=project.accent_color.clone()
                style:opacity=move || if hovered() { "1" } else { "0" }
            />
            <div class="relative">
                <h3 class=move || {
                    if hovered() {
                        "project-title font-serif transition-transform duration-500 translate-x-6"
                    } else {
                        "project-title font-serif transition-transform duration-500"
                    }
                }>{project.title.clone()}</h3>
                <p class=move || {
                    if hovered() {
                        "project-desc max-w-xl text-muted overflow-hidden transition-all duration-500 max-h-40 opacity-100 mt-4"
                    } else {
                        "project-desc max-w-xl text-muted overflow-hidden transition-all duration-500 max-h-0 opacity-0"
                    }
                }>{project.short_description.clone()}</p>
            </div>
            <span class="project-category hidden md:block font-mono text-xs uppercase tracking-[0.15em] text-muted">
                {project.category.clone()}
            </span>
            <span class="project-year hidden md:block font-mono text-xs text-muted">
                {project.year.clone()}
            </span>
            <div class="project-arrow flex justify-end">
                <svg
                    width="24"
                    height="24"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke=project.accent_color.clone()
                    stroke-width="1.5"
                >
                    <path d="M7 17L17 7M17 7H7M17 7V17" />
                </svg>
            </div>
        </div>
    }
}

/// Full project detail. Only a click on the backdrop or the close button dismisses it.
#[component]
pub fn ProjectModal(selection: RwSignal<SelectionState>) -> impl IntoView {
    // memoized so hover changes elsewhere don't rebuild the open modal
    let opened = Memo::new(move |_| selection.with(|s| s.opened().cloned()));
    let dismiss = move |target: ModalTarget| selection.maybe_update(|s| s.click_modal(target));

    move || {
        opened.get().map(|project| {
            view! {
                <div
                    class="modal-overlay fixed inset-0 z-50 flex items-center justify-center bg-ink/90 backdrop-blur-sm p-6"
                    on:click=move |_| dismiss(ModalTarget::Overlay)
                >
                    <div
                        class="modal-content relative w-full max-w-3xl max-h-[90vh] overflow-y-auto bg-ink border border-muted/30 p-8 md:p-16"
                        on:click=move |ev: MouseEvent| {
                            ev.stop_propagation();
                            dismiss(ModalTarget::Content);
                        }
                    >
                        <button
                            class="modal-close absolute top-6 right-6 text-muted hover:text-paper"
                            aria-label="Close modal"
                            on:click=move |ev: MouseEvent| {
                                ev.stop_propagation();
                                dismiss(ModalTarget::CloseButton);
                            }
                        >
                            <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5">
                                <path d="M18 6L6 18M6 6l12 12" />
                            </svg>
                        </button>
                        <div
                            class="modal-header pl-6 mb-12"
                            style:border-left=format!("3px solid {}", project.accent_color)
                        >
                            <span class="font-mono text-xs uppercase tracking-[0.2em] text-muted">
                                {project.category.clone()}
                            </span>
                            <h2 class="font-serif text-5xl md:text-6xl my-4">{project.title.clone()}</h2>
                            <p class="text-lg leading-relaxed text-paper/80">
                                {project.full_description.clone()}
                            </p>
                        </div>
                        <div class="modal-meta grid grid-cols-1 md:grid-cols-3 gap-8 mb-12">
                            <MetaItem label="Role" value=project.role.clone() />
                            <MetaItem label="Duration" value=project.duration.clone() />
                            <MetaItem label="Tools" value=project.tools.join(", ") />
                        </div>
                        <div class="modal-highlights mb-12">
                            <h4 class="font-mono text-xs uppercase tracking-[0.2em] text-muted mb-4">
                                "Key Highlights"
                            </h4>
                            <ul class="space-y-3">
                                {project
                                    .highlights
                                    .iter()
                                    .map(|h| view! { <li class="pl-6 relative">{h.clone()}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                        <button class="modal-cta inline-flex items-center gap-3 border border-accent text-accent px-8 py-4 font-mono text-sm uppercase tracking-[0.15em] hover:bg-accent hover:text-ink">
                            "View Full Project"
                            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5">
                                <path d="M5 12h14M12 5l7 7-7 7" />
                            </svg>
                        </button>
                    </div>
                </div>
            }
        })
    }
}

#[component]
fn MetaItem(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div>
            <h4 class="font-mono text-xs uppercase tracking-[0.2em] text-muted mb-2">{label}</h4>
            <p>{value}</p>
        </div>
    }
}
