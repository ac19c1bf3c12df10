mod about;
mod contact;
mod hero;
mod nav;
mod viewport;
mod work;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::Portfolio;
use crate::interaction::{SelectionState, ViewState};

use about::About;
use contact::Contact;
use hero::Hero;
use nav::{CursorGlow, Nav};
use viewport::{use_viewport_tracker, SectionRefs};
use work::{ProjectModal, Work};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-ink text-paper font-serif">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let owner = &Portfolio::bundled().owner;
    let site_name = owner.full_name();

    view! {
        <Title formatter=move |title| format!("{site_name} - {title}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// The whole site: every section shares one view state and one selection.
#[component]
fn PortfolioPage() -> impl IntoView {
    let portfolio = Portfolio::bundled();
    let view_state = RwSignal::new(ViewState::default());
    let selection = RwSignal::new(SelectionState::default());
    let sections = SectionRefs::new();

    // only runs once hydrated, so SSR output stays in the pre-animation state
    Effect::new(move |_| view_state.update(ViewState::mount));
    use_viewport_tracker(view_state, sections);

    view! {
        <Title text=portfolio.owner.role.clone() />
        <div class="relative min-h-screen overflow-x-hidden">
            <CursorGlow view_state />
            <Nav view_state sections owner=&portfolio.owner />
            <Hero view_state sections owner=&portfolio.owner />
            <Work sections selection portfolio />
            <ProjectModal selection />
            <About sections portfolio />
            <Contact sections portfolio />
        </div>
    }
}
