//! Background sync status line.
//!
//! Shows a spinner and a localized "syncing" label while the storage
//! service reports an active sync. Nothing is rendered otherwise.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons::SPINNER_GLYPH;
use crate::config::sync::{MESSAGE_KEY, SPINNER_SIZE};
use crate::core::{Locale, Subscription, SyncCallback, SyncStatusSource};

stylance::import_crate_style!(css, "src/components/sync_indicator/sync_indicator.module.css");

/// Sync status source provided at the application root.
#[derive(Clone)]
pub struct SyncContext(pub Arc<dyn SyncStatusSource>);

/// Visibility flag mirrored from sync notifications.
///
/// Starts hidden. Writes after the owning component is disposed are
/// silently dropped.
#[derive(Clone, Copy)]
pub struct SyncVisibility {
    is_syncing: RwSignal<bool>,
}

impl SyncVisibility {
    pub fn new() -> Self {
        Self {
            is_syncing: RwSignal::new(false),
        }
    }

    /// Current value (tracked).
    pub fn is_syncing(&self) -> bool {
        self.is_syncing.get()
    }

    /// Replace the flag with a pushed value.
    pub fn apply(&self, syncing: bool) {
        let _ = self.is_syncing.try_set(syncing);
    }

    /// Register with `source`; the flag follows it until the returned
    /// subscription is dropped.
    pub fn subscribe(&self, source: &dyn SyncStatusSource) -> Subscription {
        let visibility = *self;
        let callback: SyncCallback = Arc::new(move |syncing| visibility.apply(syncing));
        source.subscribe(callback)
    }
}

impl Default for SyncVisibility {
    fn default() -> Self {
        Self::new()
    }
}

/// Spinner with localized label, visible only while syncing.
#[component]
pub fn SyncIndicator() -> impl IntoView {
    let SyncContext(source) =
        use_context::<SyncContext>().expect("SyncContext must be provided at root");
    let locale = use_context::<Locale>().expect("Locale must be provided at root");

    let visibility = SyncVisibility::new();
    let subscription = visibility.subscribe(source.as_ref());
    on_cleanup(move || drop(subscription));

    view! {
        <Show when=move || visibility.is_syncing()>
            <div class=css::bar>
                <div class=css::status>
                    <span class=css::spinner>
                        <Icon
                            icon=SPINNER_GLYPH
                            width=format!("{}px", SPINNER_SIZE)
                            height=format!("{}px", SPINNER_SIZE)
                        />
                    </span>
                    <span>{move || locale.t(MESSAGE_KEY)}</span>
                </div>
            </div>
        </Show>
    }
}
