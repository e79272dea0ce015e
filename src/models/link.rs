//! Navigation link types.

use serde::{Deserialize, Serialize};

/// A single bookmark on the navigation page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub title: String,
    pub url: String,
    /// Icon identifier: image URL, data URI, glyph name or emoji.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl NavLink {
    pub fn new(title: &str, url: &str, icon: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            url: url.to_string(),
            icon: icon.map(str::to_string),
        }
    }
}

/// Links manifest as served over HTTP.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkManifest {
    #[serde(default)]
    pub links: Vec<NavLink>,
}

impl LinkManifest {
    /// Built-in links shown when no manifest can be fetched.
    pub fn builtin() -> Self {
        Self {
            links: vec![
                NavLink::new(
                    "Rust",
                    "https://www.rust-lang.org",
                    Some("https://www.rust-lang.org/static/images/favicon-32x32.png"),
                ),
                NavLink::new("Docs", "https://docs.rs", Some("BookOpen")),
                NavLink::new("Search", "https://duckduckgo.com", Some("Search")),
                NavLink::new("Home", "/", Some("Home")),
                NavLink::new("Launch", "https://leptos.dev", Some("🚀")),
                NavLink::new("Bookmark", "about:blank", None),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_parse() {
        let json = r#"{"links":[
            {"title":"A","url":"https://a","icon":"Globe"},
            {"title":"B","url":"https://b"}
        ]}"#;
        let manifest: LinkManifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.links.len(), 2);
        assert_eq!(manifest.links[0].icon.as_deref(), Some("Globe"));
        assert_eq!(manifest.links[1].icon, None);
    }

    #[test]
    fn test_manifest_missing_links_is_empty() {
        let manifest: LinkManifest = serde_json::from_str("{}").unwrap();
        assert!(manifest.links.is_empty());
    }

    #[test]
    fn test_builtin_not_empty() {
        assert!(!LinkManifest::builtin().links.is_empty());
    }
}
