use leptos::prelude::*;
use leptos_meta::{
    MetaTags,
    Stylesheet,
    Title,
    provide_meta_context,
};
use leptos_router::{
    components::{
        Route,
        Router,
        Routes,
        A,
    },
    StaticSegment,
};

use crate::{
    error::AppError,
    error_template::ErrorTemplate,
    notify::{
        NotificationArea,
        Notifications,
    },
    search::SearchPage,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    Notifications::provide();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/dcapp.css"/>
        <Title text="Court Data Fetcher"/>

        <Router>
            <nav>
                <A href="/">"Search"</A>
                <A href="/features">"Features"</A>
                <A href="/about">"About"</A>
            </nav>
            <main>
                <Routes fallback=|| {
                    let mut outside_errors = Errors::default();
                    outside_errors.insert_with_default_key(AppError::NotFound);
                    view! {
                        <ErrorTemplate errors=outside_errors/>
                    }
                }>
                    <Route path=StaticSegment("") view=SearchPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("features") view=FeaturesPage/>
                </Routes>
            </main>
            <NotificationArea/>
        </Router>
    }
}

#[component]
fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About | Court Data Fetcher"/>
        <div class="main">
            <h1>"About"</h1>
            <p>
                "Court Data Fetcher looks up the current status of a case \
                from the case status portal of a court, showing the parties, \
                the filing and next hearing dates, and the orders issued so far."
            </p>
            <p>
                "Every search is recorded so recent searches can be listed. \
                When the portal cannot be reached, or asks for a CAPTCHA, \
                sample data is shown instead."
            </p>
        </div>
    }
}

#[component]
fn FeaturesPage() -> impl IntoView {
    view! {
        <Title text="Features | Court Data Fetcher"/>
        <div class="main">
            <h1>"Features"</h1>
            <dl>
                <dt>"Case search"</dt>
                <dd>"Search by case type, case number and filing year."</dd>
                <dt>"Order downloads"</dt>
                <dd>"Download the documents of the orders listed for a case."</dd>
                <dt>"Remembered input"</dt>
                <dd>"The last search is kept in the browser and restored on return."</dd>
                <dt>"Keyboard shortcuts"</dt>
                <dd>"Ctrl+Enter (Cmd+Enter) searches; Escape clears the form and results."</dd>
            </dl>
        </div>
    }
}
