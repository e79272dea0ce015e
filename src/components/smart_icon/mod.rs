//! Icon renderer for navigation entries.
//!
//! Resolves an icon identifier to one of:
//!
//! | Identifier | Rendered as |
//! |------------|-------------|
//! | absent / empty | default link glyph |
//! | `http…` / `data:…` | `<img>`, faded in on first load, default glyph on error |
//! | known glyph name | lucide glyph, stroke width 1.5 |
//! | anything else | literal text (emoji) |
//!
//! Image loads are remembered in the [`IconCache`] from context so the
//! same URL renders at full opacity immediately next time.

use leptos::logging::log;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons::{DEFAULT_GLYPH, GlyphRegistry};
use crate::config::icon::{DEFAULT_SIZE, GLYPH_STROKE_WIDTH};
use crate::core::IconCache;
use crate::models::{IconSource, ImageStatus};

stylance::import_crate_style!(css, "src/components/smart_icon/smart_icon.module.css");

fn px(size: u32) -> String {
    format!("{}px", size)
}

/// Icon for an identifier that may be a URL, data URI, glyph name or emoji.
#[component]
pub fn SmartIcon(
    /// Icon identifier.
    #[prop(optional, into)]
    icon: MaybeProp<String>,
    /// Edge length in pixels.
    #[prop(default = DEFAULT_SIZE)]
    size: u32,
    /// Container class.
    #[prop(optional, into)]
    class: String,
    /// Class for the `<img>` element (image identifiers only).
    #[prop(optional, into)]
    img_class: String,
) -> impl IntoView {
    let cache = use_context::<IconCache>().expect("IconCache must be provided at root");
    let registry = GlyphRegistry::global();

    // Reassigning the same identifier must not reset the image state.
    let identifier = Memo::new(move |_| icon.get());

    move || {
        let source =
            identifier.with(|id| IconSource::classify(id.as_deref(), |name| registry.get(name)));

        match source {
            IconSource::Default => default_glyph(size, &class).into_any(),
            IconSource::Image(url) => view! {
                <ImageIcon
                    url=url
                    size=size
                    class=class.clone()
                    img_class=img_class.clone()
                    cache=cache.clone()
                />
            }
            .into_any(),
            IconSource::Glyph(glyph) => view! {
                <span class=format!("{} {}", css::glyph, class)>
                    <Icon
                        icon=glyph
                        width=px(size)
                        height=px(size)
                        style=format!("stroke-width: {}", GLYPH_STROKE_WIDTH)
                    />
                </span>
            }
            .into_any(),
            IconSource::Text(text) => view! {
                <span
                    class=format!("{} {}", css::text, class)
                    style=format!("font-size: {}", px(size))
                >
                    {text}
                </span>
            }
            .into_any(),
        }
    }
}

fn default_glyph(size: u32, class: &str) -> impl IntoView + use<> {
    view! {
        <span class=format!("{} {}", css::glyph, class)>
            <Icon icon=DEFAULT_GLYPH width=px(size) height=px(size) />
        </span>
    }
}

// =============================================================================
// Image Case
// =============================================================================

/// Load state of one image identifier, owned by one [`ImageIcon`].
///
/// Writes go through `try_update`, so events delivered after the owning
/// component is disposed are dropped.
#[derive(Clone)]
struct ImageLoad {
    url: String,
    cache: IconCache,
    status: RwSignal<ImageStatus>,
}

impl ImageLoad {
    fn new(url: String, cache: IconCache) -> Self {
        let status = RwSignal::new(ImageStatus::initial(cache.has(&url)));
        Self { url, cache, status }
    }

    /// Native `load` event.
    fn loaded(&self) {
        let status = self.status.try_update(|s| {
            *s = s.on_load();
            *s
        });
        if status.is_some_and(ImageStatus::is_visible) {
            self.cache.add(&self.url);
        }
    }

    /// Native `error` event. Failures are never cached.
    fn failed(&self) {
        if self.status.try_update(|s| *s = s.on_error()).is_some() {
            log!("Icon image failed to load, using default glyph: {}", self.url);
        }
    }

    fn status(&self) -> ImageStatus {
        self.status.get_untracked()
    }
}

/// `<img>` branch of [`SmartIcon`]. A new identifier mounts a new instance,
/// which is what clears a previous failure.
#[component]
fn ImageIcon(
    url: String,
    size: u32,
    class: String,
    img_class: String,
    cache: IconCache,
) -> impl IntoView {
    let load = ImageLoad::new(url, cache);
    let status = load.status;
    let failed = Memo::new(move |_| status.get() == ImageStatus::Failed);

    let img_classes = move || {
        let opacity = if status.get().is_visible() {
            css::visible
        } else {
            css::hidden
        };
        format!("{} {} {}", css::image, img_class, opacity)
    };

    move || {
        if failed.get() {
            return default_glyph(size, &class).into_any();
        }

        let on_load = load.clone();
        let on_error = load.clone();
        view! {
            <div class=format!("{} {}", css::imageBox, class)>
                <img
                    src=load.url.clone()
                    alt="icon"
                    class=img_classes.clone()
                    on:load=move |_| on_load.loaded()
                    on:error=move |_| on_error.failed()
                />
            </div>
        }
        .into_any()
    }
}
