use crate::config::{LogoImage, SiteConfig};
use crate::typography::rhythm;
use leptos::either::Either;
use leptos::prelude::*;

/// What the header identity mark should contain.
#[derive(Debug, Clone, PartialEq)]
pub enum TitleVariant {
    Text { label: String },
    Image { image: LogoImage, alt: String },
}

/// The resolved identity mark: a link to the site root wrapping either
/// the title text or the logo image.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleLink {
    pub href: String,
    pub variant: TitleVariant,
}

/// Decides the title slot contents from the site config. A missing logo
/// descriptor degrades to the text variant rather than failing.
pub fn title_link(config: &SiteConfig) -> TitleLink {
    let variant = match &config.logo {
        Some(image) => TitleVariant::Image {
            image: image.clone(),
            alt: config.title.clone(),
        },
        None => TitleVariant::Text {
            label: config.title.clone(),
        },
    };
    TitleLink {
        href: config.root_path(),
        variant,
    }
}

const LINK_STYLE: &str = "box-shadow: none; text-decoration: none; color: inherit";

#[component]
pub fn TitleMark() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let link = title_link(&config);

    match link.variant {
        TitleVariant::Image { image, alt } => Either::Left(view! {
            <a href=link.href style=LINK_STYLE>
                <img
                    src=image.src.clone()
                    srcset=image.srcset()
                    sizes=image.sizes.clone()
                    width=image.width.to_string()
                    height=image.height.to_string()
                    alt=alt
                    style=format!("height: {}; margin-bottom: 0; vertical-align: middle", rhythm(2.0))
                />
            </a>
        }),
        TitleVariant::Text { label } => Either::Right(view! {
            <a href=link.href style=LINK_STYLE>
                {label}
            </a>
        }),
    }
}
