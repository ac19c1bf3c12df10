use leptos::prelude::*;

use super::viewport::SectionRefs;
use crate::content::Portfolio;
use crate::interaction::SectionId;

#[component]
pub fn About(sections: SectionRefs, portfolio: &'static Portfolio) -> impl IntoView {
    let owner = &portfolio.owner;

    view! {
        <section
            id=SectionId::About.as_str()
            node_ref=sections.get(SectionId::About)
            class="section-about grid grid-cols-1 lg:grid-cols-[2fr_1fr] gap-16 px-6 md:px-16 py-32 border-t border-muted/20"
        >
            <div>
                <h2 class="font-mono text-xs uppercase tracking-[0.3em] text-muted mb-12">"About"</h2>
                <div class="profile-image-container relative w-48 h-60 mb-12 overflow-hidden">
                    <div class="absolute inset-0 border border-accent translate-x-3 translate-y-3" />
                    <img
                        src=owner.portrait.clone()
                        alt=owner.full_name()
                        class="relative w-full h-full object-cover grayscale contrast-110"
                    />
                    <div class="absolute bottom-3 right-3 bg-ink px-2 py-1">
                        <span class="font-mono text-xs text-accent">{owner.initials.clone()}</span>
                    </div>
                </div>
                <p class="about-headline font-serif text-[clamp(28px,4vw,48px)] leading-tight mb-8">
                    "I craft " <em class="italic text-paper">"intuitive"</em> " "
                    {owner.headline.clone()}
                </p>
                <p class="max-w-2xl text-lg leading-relaxed text-paper/70">{owner.bio.clone()}</p>
            </div>
            <div class="about-details flex flex-col gap-12">
                <DetailList title="Services" items=&portfolio.services />
                <DetailList title="Recognition" items=&portfolio.recognition />
            </div>
        </section>
    }
}

#[component]
fn DetailList(title: &'static str, items: &'static Vec<String>) -> impl IntoView {
    view! {
        <div>
            <h3 class="font-mono text-xs uppercase tracking-[0.3em] text-muted mb-6">{title}</h3>
            <ul class="list-none">
                {items
                    .iter()
                    .map(|item| {
                        view! { <li class="py-2 border-b border-muted/20">{item.clone()}</li> }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
