//! Navigation page: bookmark grid with language toggle.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::smart_icon::SmartIcon;
use crate::components::sync_indicator::SyncIndicator;
use crate::config::LINKS_MANIFEST_URL;
use crate::core::{Locale, SyncStatusHub, load_links};
use crate::models::NavLink;

stylance::import_crate_style!(css, "src/components/nav/nav.module.css");

/// Icon size inside a bookmark tile.
const TILE_ICON_SIZE: u32 = 28;

#[component]
pub fn NavPage() -> impl IntoView {
    let hub = use_context::<SyncStatusHub>().expect("SyncStatusHub must be provided at root");
    let locale = use_context::<Locale>().expect("Locale must be provided at root");

    let links = RwSignal::new(Vec::<NavLink>::new());
    let loaded = RwSignal::new(false);

    spawn_local(async move {
        let manifest = load_links(LINKS_MANIFEST_URL, &hub).await;
        let _ = links.try_set(manifest.links);
        let _ = loaded.try_set(true);
    });

    view! {
        <main class=css::page>
            <header class=css::header>
                <h1 class=css::title>{move || locale.t("app_title")}</h1>
                <button class=css::langButton on:click=move |_| locale.toggle()>
                    {move || locale.t("switch_language")}
                </button>
            </header>

            <SyncIndicator />

            <section>
                <h2 class=css::heading>{move || locale.t("links_heading")}</h2>
                <Show when=move || loaded.get() && links.with(Vec::is_empty)>
                    <p class=css::empty>{move || locale.t("links_empty")}</p>
                </Show>
                <ul class=css::grid>
                    <For
                        each=move || links.get()
                        key=|link| link.url.clone()
                        children=move |link| {
                            view! { <LinkTile link=link /> }
                        }
                    />
                </ul>
            </section>
        </main>
    }
}

#[component]
fn LinkTile(link: NavLink) -> impl IntoView {
    let tooltip = link.title.clone();

    view! {
        <li>
            <a class=css::link href=link.url title=tooltip>
                <SmartIcon
                    icon=link.icon
                    size=TILE_ICON_SIZE
                    class=css::iconBox
                    img_class=css::iconImage
                />
                <span class=css::linkTitle>{link.title}</span>
            </a>
        </li>
    }
}
