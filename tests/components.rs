//! Browser tests for the mounted components.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::sync::Arc;

use leptos::prelude::*;
use modern_nav::components::{SmartIcon, SyncContext, SyncIndicator};
use modern_nav::config::icon::CACHE_KEY;
use modern_nav::core::{IconCache, KeyValueStore, Locale, MemoryStore, SyncStatusHub};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlElement, HtmlImageElement};

wasm_bindgen_test_configure!(run_in_browser);

fn container() -> HtmlElement {
    let el = document()
        .create_element("div")
        .unwrap()
        .unchecked_into::<HtmlElement>();
    document().body().unwrap().append_child(&el).unwrap();
    el
}

fn img(el: &HtmlElement) -> Option<HtmlImageElement> {
    el.query_selector("img")
        .unwrap()
        .map(|e| e.unchecked_into::<HtmlImageElement>())
}

fn fire(img: &HtmlImageElement, kind: &str) {
    img.dispatch_event(&Event::new(kind).unwrap()).unwrap();
}

fn mount_icon(el: &HtmlElement, cache: IconCache, icon: Option<&'static str>) {
    leptos::mount::mount_to(el.clone(), move || {
        provide_context(cache);
        view! { <SmartIcon icon=icon.map(str::to_string) size=24 /> }
    })
    .forget();
}

#[wasm_bindgen_test]
fn renders_literal_text() {
    let el = container();
    let cache = IconCache::load(Arc::new(MemoryStore::new()), CACHE_KEY);
    mount_icon(&el, cache, Some("hello"));

    assert_eq!(el.text_content().unwrap(), "hello");
    assert!(el.query_selector("svg").unwrap().is_none());
}

#[wasm_bindgen_test]
fn renders_default_glyph_without_identifier() {
    let el = container();
    let cache = IconCache::load(Arc::new(MemoryStore::new()), CACHE_KEY);
    mount_icon(&el, cache, None);

    let svg = el.query_selector("svg").unwrap().unwrap();
    assert_eq!(svg.get_attribute("width").as_deref(), Some("24px"));
}

#[wasm_bindgen_test]
fn renders_named_glyph() {
    let el = container();
    let cache = IconCache::load(Arc::new(MemoryStore::new()), CACHE_KEY);
    mount_icon(&el, cache, Some("Star"));

    let svg = el.query_selector("svg").unwrap().unwrap();
    assert!(svg.get_attribute("style").unwrap().contains("stroke-width: 1.5"));
    assert!(img(&el).is_none());
}

#[wasm_bindgen_test]
async fn unseen_image_fades_in_and_is_cached() {
    let el = container();
    let store = Arc::new(MemoryStore::new());
    let cache = IconCache::load(store.clone(), CACHE_KEY);
    mount_icon(&el, cache.clone(), Some("https://x/y.png"));

    let image = img(&el).unwrap();
    let hidden = image.class_name();

    fire(&image, "load");
    leptos::task::tick().await;

    assert_ne!(image.class_name(), hidden);
    assert!(cache.has("https://x/y.png"));
    assert!(store.get_item(CACHE_KEY).unwrap().contains("https://x/y.png"));
}

#[wasm_bindgen_test]
async fn failed_image_falls_back_to_default_glyph() {
    let el = container();
    let cache = IconCache::load(Arc::new(MemoryStore::new()), CACHE_KEY);
    mount_icon(&el, cache.clone(), Some("https://x/missing.png"));

    fire(&img(&el).unwrap(), "error");
    leptos::task::tick().await;

    assert!(img(&el).is_none());
    assert!(el.query_selector("svg").unwrap().is_some());
    assert!(!cache.has("https://x/missing.png"));
}

#[wasm_bindgen_test]
async fn new_identifier_clears_failure_and_same_identifier_keeps_node() {
    let el = container();
    let cache = IconCache::load(Arc::new(MemoryStore::new()), CACHE_KEY);
    let icon = RwSignal::new(Some("https://x/a.png".to_string()));
    leptos::mount::mount_to(el.clone(), move || {
        provide_context(cache);
        view! { <SmartIcon icon=Signal::derive(move || icon.get()) size=24 /> }
    })
    .forget();

    fire(&img(&el).unwrap(), "error");
    leptos::task::tick().await;
    assert!(img(&el).is_none());
    assert!(el.query_selector("svg").unwrap().is_some());

    // Same failed identifier again: the failure sticks.
    icon.set(Some("https://x/a.png".to_string()));
    leptos::task::tick().await;
    assert!(img(&el).is_none());

    icon.set(Some("https://x/b.png".to_string()));
    leptos::task::tick().await;
    let image = img(&el).unwrap();
    assert_eq!(image.get_attribute("src").as_deref(), Some("https://x/b.png"));

    icon.set(Some("https://x/b.png".to_string()));
    leptos::task::tick().await;
    assert_eq!(img(&el).unwrap(), image);
}

#[wasm_bindgen_test]
async fn sync_indicator_follows_hub() {
    let el = container();
    let hub = SyncStatusHub::new();
    let source = hub.clone();
    let locale = Locale::restore(Arc::new(MemoryStore::new()));
    let handle = leptos::mount::mount_to(el.clone(), move || {
        provide_context(SyncContext(Arc::new(source)));
        provide_context(locale);
        view! { <SyncIndicator /> }
    });

    assert_eq!(el.text_content().unwrap(), "");

    hub.publish(true);
    leptos::task::tick().await;
    assert_eq!(el.text_content().unwrap(), "Syncing...");
    assert!(el.query_selector("svg").unwrap().is_some());

    locale.toggle();
    leptos::task::tick().await;
    assert_eq!(el.text_content().unwrap(), "同步中...");

    hub.publish(false);
    leptos::task::tick().await;
    assert_eq!(el.text_content().unwrap(), "");

    drop(handle);
    assert_eq!(hub.subscriber_count(), 0);
    hub.publish(true);
}
