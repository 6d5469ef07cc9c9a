use crate::config::SiteConfig;
use crate::pages::{HomePage, PostPage};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    provide_meta_context();
    let config = SiteConfig::load();
    let site_title = config.title.clone();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href=config.path_to("site.css") />
                <link rel="shortcut icon" type="image/ico" href=config.path_to("favicon.ico") />
                <Title
                    formatter={
                        let site_title = site_title.clone();
                        move |text| format!("{text} - {site_title}")
                    }
                    text=site_title.clone()
                />
            </head>

            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(SiteConfig::load());
    view! {
        <Router>
            <Routes fallback=|| "Page not found".into_view()>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/posts/:slug") view=PostPage />
            </Routes>
        </Router>
    }
}
