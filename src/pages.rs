use crate::components::{PageFrame, PostList};
use leptos::prelude::*;

pub mod post;
pub use post::PostPage;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageFrame>
            <PostList />
        </PageFrame>
    }
}
