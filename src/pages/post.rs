use crate::components::PageFrame;
use crate::services::post_service::get_post;
use crate::typography::{rhythm, scale};
use leptos::Params;
use leptos::either::Either;
use leptos::prelude::*;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

#[derive(Params, PartialEq, Clone, Debug)]
pub struct PostParams {
    pub slug: Option<String>,
}

#[component]
pub fn PostPage() -> impl IntoView {
    let params = use_params::<PostParams>();
    let slug = Memo::new(move |_| {
        params
            .read()
            .as_ref()
            .ok()
            .and_then(|p| p.slug.clone())
            .unwrap_or_default()
    });
    let post_resource = Resource::new(move || slug.get(), get_post);

    let title_scale = scale(1.0);
    let title_style = format!(
        "font-size: {}; line-height: {}; margin-top: {}; margin-bottom: 0",
        title_scale.font_size,
        title_scale.line_height,
        rhythm(1.0),
    );
    let date_style = format!(
        "display: block; margin-bottom: {}; color: #999",
        rhythm(1.0),
    );

    view! {
        <PageFrame>
            <Suspense fallback=|| {
                view! { <p>"Loading..."</p> }
            }>
                {move || {
                    let title_style = title_style.clone();
                    let date_style = date_style.clone();
                    post_resource
                        .get()
                        .map(|result| match result {
                            Ok(post) => {
                                Either::Left(
                                    view! {
                                        <article>
                                            <h1 style=title_style>{post.title.clone()}</h1>
                                            <small style=date_style>{post.display_date()}</small>
                                            <div inner_html=post.html.clone() />
                                        </article>
                                    },
                                )
                            }
                            Err(_) => {
                                Either::Right(view! { <p>"Post not found."</p> })
                            }
                        })
                }}
            </Suspense>
        </PageFrame>
    }
}
