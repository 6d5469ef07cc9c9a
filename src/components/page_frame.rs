use crate::components::site_title::TitleMark;
use crate::config::SiteConfig;
use crate::typography::{rhythm, scale};
use crate::utils::time::current_year;
use leptos::either::Either;
use leptos::prelude::*;
use leptos_router::hooks::use_url;

/// How prominently the header renders the site identity mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderEmphasis {
    /// The landing page: the mark is the page heading.
    Primary,
    /// Inner pages: the mark steps back to a subheading.
    Secondary,
}

/// True when `current` is the site root, ignoring a trailing slash.
pub fn is_root_path(current: &str, root: &str) -> bool {
    fn normalize(path: &str) -> &str {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() { "/" } else { trimmed }
    }
    normalize(current) == normalize(root)
}

pub fn header_emphasis(current: &str, root: &str) -> HeaderEmphasis {
    if is_root_path(current, root) {
        HeaderEmphasis::Primary
    } else {
        HeaderEmphasis::Secondary
    }
}

/// Page chrome shared by every route: conditional header, the page's own
/// content rendered verbatim in `<main>`, and the attribution footer.
///
/// The current path normally comes from the router; callers outside a
/// `Router` (server-side rendering of a single frame, tests) can inject
/// it through `current_path`.
#[component]
pub fn PageFrame(
    #[prop(optional)] current_path: Option<String>,
    children: Children,
) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let path = match current_path {
        Some(path) => Signal::derive(move || path.clone()),
        None => {
            let url = use_url();
            Signal::derive(move || url.read().path().to_string())
        }
    };
    let root_path = config.root_path();

    let heading = scale(1.5);
    let primary_style = format!(
        "font-size: {}; line-height: {}; margin-bottom: {}; margin-top: 0; text-align: center",
        heading.font_size,
        heading.line_height,
        rhythm(1.5),
    );
    let secondary_style = "font-family: Montserrat, sans-serif; margin-top: 0; text-align: center";

    let header = move || match header_emphasis(&path.get(), &root_path) {
        HeaderEmphasis::Primary => Either::Left(view! {
            <h1 style=primary_style.clone()>
                <TitleMark />
            </h1>
        }),
        HeaderEmphasis::Secondary => Either::Right(view! {
            <h3 style=secondary_style>
                <TitleMark />
            </h3>
        }),
    };

    let container_style = format!(
        "margin-left: auto; margin-right: auto; max-width: {}; padding: {} {}",
        rhythm(24.0),
        rhythm(1.5),
        rhythm(0.75),
    );

    view! {
        <div style=container_style>
            <header>{header}</header>
            <main>{children()}</main>
            <Footer />
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    view! {
        <footer style="text-align: center; color: #999">
            {format!("© Copyright {}, ", current_year())}
            <a href=config.author_url.clone()>{config.author.clone()}</a>
            ". Powered by "
            <a href="https://leptos.dev">"Leptos"</a>
        </footer>
    }
}


#[cfg(all(test, feature = "ssr"))]
mod render_tests {
    use super::PageFrame;
    use crate::config::SiteConfig;
    use leptos::prelude::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            title: "My Blog".to_string(),
            author: "A. Author".to_string(),
            author_url: "https://example.com".to_string(),
            path_prefix: String::new(),
            logo: None,
        }
    }

    fn render(current_path: &str) -> String {
        let owner = Owner::new();
        owner.set();
        provide_context(test_config());
        let current_path = current_path.to_string();
        view! {
            <PageFrame current_path=current_path>
                <p class="entry">"Hand-written entry body"</p>
            </PageFrame>
        }
        .to_html()
    }

    #[test]
    fn children_appear_verbatim_inside_main() {
        let html = render("/posts/hello");
        let open = html.find("<main>").expect("main region present");
        let close = html.find("</main>").expect("main region closed");
        let main_region = &html[open + "<main>".len()..close];
        assert!(main_region.contains(r#"<p class="entry">Hand-written entry body</p>"#));
    }

    #[test]
    fn the_landing_page_renders_the_heading_title() {
        let html = render("/");
        assert!(html.contains("<h1"));
        assert!(!html.contains("<h3"));
    }

    #[test]
    fn inner_pages_render_the_subheading_title() {
        let html = render("/posts/hello");
        assert!(html.contains("<h3"));
        assert!(!html.contains("<h1"));
    }
}
