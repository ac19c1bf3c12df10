use chrono::{DateTime, Datelike, Utc};
use leptos::{ev::Event, prelude::*};
use std::time::Duration;

use super::viewport::SectionRefs;
use crate::content::Portfolio;
use crate::interaction::{
    ContactController, Field, Scheduler, SectionId, Step, SubmissionStatus,
};

type FormController = ContactController<TimeoutHandle>;

pub fn copyright_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or_else(|_| Utc::now().year())
}

/// Runs contact form timers on the browser's `setTimeout`.
#[derive(Clone, Copy)]
struct BrowserScheduler {
    controller: RwSignal<FormController>,
}

impl Scheduler for BrowserScheduler {
    type Handle = TimeoutHandle;

    fn schedule(&mut self, delay: Duration, step: Step) -> Option<TimeoutHandle> {
        let controller = self.controller;
        set_timeout_with_handle(
            move || {
                let mut scheduler = BrowserScheduler { controller };
                // the owner may already be gone; then there is nothing to update
                controller.try_update(|c| c.advance(step, &mut scheduler));
            },
            delay,
        )
        .map_err(|err| log::warn!("setTimeout failed for {step:?}: {err:?}"))
        .ok()
    }

    fn cancel(&mut self, handle: TimeoutHandle) {
        handle.clear();
    }
}

#[component]
pub fn Contact(sections: SectionRefs, portfolio: &'static Portfolio) -> impl IntoView {
    let controller = RwSignal::new(FormController::default());
    on_cleanup(move || {
        controller.try_update(|c| c.teardown(&mut BrowserScheduler { controller }));
    });

    let status = move || controller.with(|c| c.status());
    let owner = &portfolio.owner;
    let mailto = format!("mailto:{}", owner.email);

    view! {
        <section
            id=SectionId::Contact.as_str()
            node_ref=sections.get(SectionId::Contact)
            class="section-contact relative min-h-screen flex flex-col justify-between px-6 md:px-16 pt-32 pb-12 border-t border-muted/20"
        >
            <div class="contact-content grid grid-cols-1 lg:grid-cols-[2fr_1fr] gap-16">
                <div class="contact-main">
                    <p class="font-serif text-[clamp(40px,7vw,88px)] leading-none mb-16">
                        "Let's create something"
                    </p>
                    <form
                        class="contact-form flex flex-col gap-8 max-w-2xl"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            controller
                                .update(|c| {
                                    if let Err(err) = c.submit(&mut BrowserScheduler { controller }) {
                                        log::debug!("contact form not sent: {err}");
                                    }
                                });
                        }
                    >
                        <FormField controller field=Field::Name kind="text" placeholder="Your name" />
                        <FormField
                            controller
                            field=Field::Email
                            kind="email"
                            placeholder="your@email.com"
                        />
                        <div class="form-group flex flex-col gap-2">
                            <label for="message" class="font-mono text-xs uppercase tracking-[0.2em] text-muted">
                                {Field::Message.label()}
                            </label>
                            <textarea
                                id="message"
                                rows="4"
                                placeholder="Tell me about your project..."
                                class="bg-transparent border-b border-muted/40 py-3 focus:outline-none focus:border-accent resize-none"
                                prop:value=move || controller.with(|c| c.fields().message.clone())
                                on:input=move |ev: Event| {
                                    controller.update(|c| c.edit(Field::Message, event_target_value(&ev)))
                                }
                            />
                        </div>
                        <button
                            type="submit"
                            class=move || {
                                let tone = match status() {
                                    SubmissionStatus::Error => "border-red text-red",
                                    SubmissionStatus::Success => "border-accent bg-accent text-ink",
                                    _ => "border-accent text-accent hover:bg-accent hover:text-ink",
                                };
                                format!(
                                    "submit-btn self-start inline-flex items-center gap-3 border px-8 py-4 font-mono text-sm uppercase tracking-[0.15em] disabled:opacity-50 disabled:cursor-wait {tone}",
                                )
                            }
                            disabled=move || controller.with(|c| c.is_busy())
                        >
                            {move || status().button_label()}
                            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5">
                                <path d="M22 2L11 13M22 2l-7 20-4-9-9-4 20-7z" />
                            </svg>
                        </button>
                    </form>
                    <div class="contact-alt mt-12 font-mono text-sm text-muted">
                        <span>"Or email directly: "</span>
                        <a href=mailto class="text-paper underline underline-offset-4">
                            {owner.email.clone()}
                        </a>
                    </div>
                </div>
                <div class="social-links flex lg:flex-col gap-6 lg:items-end lg:justify-end">
                    {portfolio
                        .social_links
                        .iter()
                        .map(|social| {
                            view! {
                                <a
                                    href=social.url.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="font-mono text-sm uppercase tracking-[0.2em] hover:text-accent"
                                >
                                    {social.name.clone()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="contact-footer flex justify-between mt-24 pt-8 border-t border-muted/20 font-mono text-xs text-muted">
                <span>{format!("© {} All rights reserved", copyright_year())}</span>
                <span>"Designed with intention"</span>
            </div>
        </section>
    }
}

#[component]
fn FormField(
    controller: RwSignal<FormController>,
    field: Field,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let id = field.label().to_lowercase();
    view! {
        <div class="form-group flex flex-col gap-2">
            <label for=id.clone() class="font-mono text-xs uppercase tracking-[0.2em] text-muted">
                {field.label()}
            </label>
            <input
                id=id
                type=kind
                placeholder=placeholder
                class="bg-transparent border-b border-muted/40 py-3 focus:outline-none focus:border-accent"
                prop:value=move || controller.with(|c| c.fields().get(field).to_string())
                on:input=move |ev: Event| controller.update(|c| c.edit(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_year_from_build_time() {
        let year = copyright_year();
        assert!(year >= 2024, "build year should be current, got {year}");
    }
}
