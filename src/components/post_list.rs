use crate::services::post_service::get_posts;
use crate::typography::{rhythm, scale};
use leptos::either::Either;
use leptos::prelude::*;

#[component]
pub fn PostList() -> impl IntoView {
    let posts_resource = Resource::new(|| (), move |_| get_posts());

    let title_scale = scale(0.25);
    let title_style = format!(
        "font-size: {}; line-height: {}; margin-bottom: {}; margin-top: {}",
        title_scale.font_size,
        title_scale.line_height,
        rhythm(0.25),
        rhythm(1.0),
    );

    view! {
        <Suspense fallback=move || {
            view! { <p>"Loading posts..."</p> }
        }>
            {move || {
                let title_style = title_style.clone();
                posts_resource
                    .get()
                    .map(|result| match result {
                        Ok(posts) => {
                            Either::Left(
                                view! {
                                    <For
                                        each=move || posts.clone()
                                        key=|post| post.slug.clone()
                                        children=move |post| {
                                            let href = format!("/posts/{}", post.slug);
                                            let display_date = post.display_date();
                                            view! {
                                                <article>
                                                    <h3 style=title_style.clone()>
                                                        <a href=href style="box-shadow: none">
                                                            {post.title.clone()}
                                                        </a>
                                                    </h3>
                                                    <small>{display_date}</small>
                                                    <p>{post.description.clone()}</p>
                                                </article>
                                            }
                                        }
                                    />
                                },
                            )
                        }
                        Err(e) => {
                            Either::Right(
                                view! {
                                    <p style="color: #999">
                                        {format!("Failed to load posts: {}", e)}
                                    </p>
                                },
                            )
                        }
                    })
            }}
        </Suspense>
    }
}
