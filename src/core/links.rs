//! Navigation links loading.

use leptos::logging::warn;

use crate::core::error::FetchError;
use crate::core::sync::SyncStatusHub;
use crate::models::LinkManifest;
use crate::utils::fetch_json;

/// Fetch the links manifest, announcing the fetch as a sync operation.
///
/// Any failure falls back to [`LinkManifest::builtin`].
pub async fn load_links(url: &str, hub: &SyncStatusHub) -> LinkManifest {
    let _sync = hub.begin();
    resolve_manifest(fetch_json::<LinkManifest>(url).await)
}

/// Pick the links to show for a fetch outcome.
fn resolve_manifest(result: Result<LinkManifest, FetchError>) -> LinkManifest {
    match result {
        Ok(manifest) if !manifest.links.is_empty() => manifest,
        Ok(_) => LinkManifest::builtin(),
        Err(e) => {
            warn!("Failed to load links manifest, using built-in links: {}", e);
            LinkManifest::builtin()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NavLink;

    #[test]
    fn test_fetched_manifest_wins() {
        let fetched = LinkManifest {
            links: vec![NavLink::new("A", "https://a", Some("Globe"))],
        };
        assert_eq!(resolve_manifest(Ok(fetched.clone())), fetched);
    }

    #[test]
    fn test_empty_manifest_uses_builtin() {
        assert_eq!(
            resolve_manifest(Ok(LinkManifest::default())),
            LinkManifest::builtin()
        );
    }

    #[test]
    fn test_error_uses_builtin() {
        assert_eq!(
            resolve_manifest(Err(FetchError::HttpError(404))),
            LinkManifest::builtin()
        );
        assert_eq!(
            resolve_manifest(Err(FetchError::Timeout)),
            LinkManifest::builtin()
        );
    }
}
