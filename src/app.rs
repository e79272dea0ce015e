//! Root application module.
//!
//! The [`App`] component is the composition root: it builds the icon
//! cache, the sync hub and the locale once and provides them to the tree.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::{NavPage, SyncContext};
use crate::config::icon::CACHE_KEY;
use crate::core::{IconCache, KeyValueStore, LocalStore, Locale, SyncStatusHub};

/// Application-wide services.
///
/// Each field is also provided as its own context so components depend
/// only on what they use.
#[derive(Clone)]
pub struct AppContext {
    /// Loaded-image memo shared by every `SmartIcon`.
    pub icon_cache: IconCache,
    /// Sync status publisher owned by the storage layer.
    pub sync: SyncStatusHub,
    /// Display language and translation lookup.
    pub locale: Locale,
}

impl AppContext {
    /// Build services on top of `store`.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            icon_cache: IconCache::load(store.clone(), CACHE_KEY),
            sync: SyncStatusHub::new(),
            locale: Locale::restore(store),
        }
    }

    /// Provide every service as context for the current owner.
    pub fn provide(self) {
        provide_context(SyncContext(Arc::new(self.sync.clone())));
        provide_context(self.icon_cache.clone());
        provide_context(self.sync.clone());
        provide_context(self.locale);
        provide_context(self);
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    AppContext::new(Arc::new(LocalStore)).provide();

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #a0a0a0; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <NavPage />
        </ErrorBoundary>
    }
}
