use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Listing-level view of a post, enough for the front page feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
    pub description: String,
}

/// A fully resolved post, body already rendered to HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
    pub description: String,
    pub html: String,
}

impl PostSummary {
    pub fn display_date(&self) -> String {
        format_date(self.date)
    }
}

impl Post {
    pub fn display_date(&self) -> String {
        format_date(self.date)
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(feature = "pulldown-cmark")]
pub fn render_markdown(markdown: &str) -> String {
    use pulldown_cmark::{Options, Parser, html};

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_GFM);

    let parser = Parser::new_ext(markdown, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}

#[cfg(not(feature = "pulldown-cmark"))]
pub fn render_markdown(markdown: &str) -> String {
    markdown.to_string()
}

#[cfg(feature = "ssr")]
pub use registry::{ContentError, find, summaries};

#[cfg(feature = "ssr")]
mod registry {
    use super::{Post, PostSummary, render_markdown};
    use chrono::NaiveDate;
    use lazy_static::lazy_static;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum ContentError {
        #[error("no post with slug \"{0}\"")]
        UnknownSlug(String),
    }

    struct StoredPost {
        slug: &'static str,
        title: &'static str,
        date: NaiveDate,
        description: &'static str,
        markdown: &'static str,
    }

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("post dates are valid")
    }

    lazy_static! {
        static ref POSTS: Vec<StoredPost> = {
            let mut posts = vec![
                StoredPost {
                    slug: "hello-world",
                    title: "Hello World",
                    date: ymd(2026, 1, 12),
                    description: "First entry, and what this site is for.",
                    markdown: include_str!("../content/hello-world.md"),
                },
                StoredPost {
                    slug: "small-tools",
                    title: "Small Tools",
                    date: ymd(2026, 3, 4),
                    description: "Notes on the scripts that never make it to a repo.",
                    markdown: include_str!("../content/small-tools.md"),
                },
                StoredPost {
                    slug: "reading-in-the-margins",
                    title: "Reading in the Margins",
                    date: ymd(2026, 6, 21),
                    description: "On annotating papers, and a system that finally stuck.",
                    markdown: include_str!("../content/reading-in-the-margins.md"),
                },
            ];
            // Newest first, the order the front page shows them in.
            posts.sort_by(|a, b| b.date.cmp(&a.date));
            posts
        };
    }

    pub fn summaries() -> Vec<PostSummary> {
        POSTS
            .iter()
            .map(|post| PostSummary {
                slug: post.slug.to_string(),
                title: post.title.to_string(),
                date: post.date,
                description: post.description.to_string(),
            })
            .collect()
    }

    pub fn find(slug: &str) -> Result<Post, ContentError> {
        let stored = POSTS
            .iter()
            .find(|post| post.slug == slug)
            .ok_or_else(|| ContentError::UnknownSlug(slug.to_string()))?;
        Ok(Post {
            slug: stored.slug.to_string(),
            title: stored.title.to_string(),
            date: stored.date,
            description: stored.description.to_string(),
            html: render_markdown(stored.markdown),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::format_date;
    use chrono::NaiveDate;

    #[test]
    fn dates_display_long_form() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
        assert_eq!(format_date(date), "January 12, 2026");
        let single_digit = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
        assert_eq!(format_date(single_digit), "March 4, 2026");
    }
}
