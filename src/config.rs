use serde::{Deserialize, Serialize};

/// Pre-resolved responsive image descriptor for the site logo.
///
/// The sources are produced ahead of time by whatever pipeline generates
/// the assets under `public/`; by the time a component sees this value
/// there is nothing left to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoImage {
    /// Fallback source for browsers without `srcset` support.
    pub src: String,
    /// (url, intrinsic width in px) pairs, narrowest first.
    pub sources: Vec<(String, u32)>,
    /// The `sizes` attribute value.
    pub sizes: String,
    pub width: u32,
    pub height: u32,
}

impl LogoImage {
    /// Renders the standard comma-separated `srcset` attribute value.
    pub fn srcset(&self) -> String {
        self.sources
            .iter()
            .map(|(url, width)| format!("{url} {width}w"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Site identity and routing constants, injected into the view tree as
/// context by `App` rather than read as ambient globals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub title: String,
    pub author: String,
    pub author_url: String,
    /// Build-time prefix the site is served under, without a trailing
    /// slash. Empty when the site lives at the origin root.
    pub path_prefix: String,
    /// Present when the header should show the logo image instead of
    /// the text title.
    pub logo: Option<LogoImage>,
}

impl SiteConfig {
    pub fn load() -> Self {
        let mut config = SiteConfig {
            title: "Field Notes".to_string(),
            author: "M. Harlow".to_string(),
            author_url: "https://mharlow.dev".to_string(),
            path_prefix: option_env!("SITE_PATH_PREFIX").unwrap_or("").to_string(),
            logo: None,
        };
        if cfg!(feature = "logo-title") {
            config.logo = Some(config.default_logo());
        }
        config
    }

    /// The landing route as the router sees it. The host serving the
    /// site strips `path_prefix` before requests reach the route tree,
    /// so route-space paths never carry it and the root is `/` in every
    /// deployment.
    pub fn root_path(&self) -> String {
        "/".to_string()
    }

    /// Joins a root-relative path onto the site prefix. For asset URLs
    /// and other references the browser resolves itself; in-app
    /// navigation stays in route space and must not use this.
    pub fn path_to(&self, rel: &str) -> String {
        format!("{}/{}", self.path_prefix, rel.trim_start_matches('/'))
    }

    fn default_logo(&self) -> LogoImage {
        LogoImage {
            src: self.path_to("logo.svg"),
            sources: vec![(self.path_to("logo.svg"), 80)],
            sizes: "80px".to_string(),
            width: 80,
            height: 80,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LogoImage, SiteConfig};

    fn config() -> SiteConfig {
        SiteConfig {
            title: "My Blog".to_string(),
            author: "A. Author".to_string(),
            author_url: "https://example.com".to_string(),
            path_prefix: String::new(),
            logo: None,
        }
    }

    #[test]
    fn root_path_without_prefix_is_slash() {
        assert_eq!(config().root_path(), "/");
    }

    #[test]
    fn the_route_root_ignores_the_prefix() {
        // The host strips the prefix before the router sees a path, so
        // the landing route is "/" even on a prefixed deployment.
        let mut config = config();
        config.path_prefix = "/blog".to_string();
        assert_eq!(config.root_path(), "/");
    }

    #[test]
    fn browser_facing_paths_include_the_prefix() {
        let mut config = config();
        config.path_prefix = "/blog".to_string();
        assert_eq!(config.path_to("/posts/hello"), "/blog/posts/hello");
        assert_eq!(config.path_to("site.css"), "/blog/site.css");
    }

    #[test]
    fn the_logo_asset_url_includes_the_prefix() {
        let mut config = config();
        config.path_prefix = "/blog".to_string();
        let logo = config.default_logo();
        assert_eq!(logo.src, "/blog/logo.svg");
    }

    #[test]
    fn srcset_lists_sources_with_widths() {
        let logo = LogoImage {
            src: "/logo/logo-80.png".to_string(),
            sources: vec![
                ("/logo/logo-80.png".to_string(), 80),
                ("/logo/logo-160.png".to_string(), 160),
            ],
            sizes: "80px".to_string(),
            width: 80,
            height: 80,
        };
        assert_eq!(logo.srcset(), "/logo/logo-80.png 80w, /logo/logo-160.png 160w");
    }

    #[test]
    fn logo_descriptor_survives_the_serialization_boundary() {
        let logo = LogoImage {
            src: "/logo/logo-80.png".to_string(),
            sources: vec![("/logo/logo-80.png".to_string(), 80)],
            sizes: "80px".to_string(),
            width: 80,
            height: 80,
        };
        let json = serde_json::to_string(&logo).unwrap();
        let back: LogoImage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, logo);
    }
}
