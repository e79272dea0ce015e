//! Icon identifier classification and image load status.

use icondata::Icon;

use crate::config::icon::IMAGE_PREFIXES;

/// Check if an identifier refers to an image (remote URL or data URI).
pub fn is_image_identifier(identifier: &str) -> bool {
    IMAGE_PREFIXES.iter().any(|p| identifier.starts_with(p))
}

/// What an icon identifier resolves to.
///
/// Resolution order is fixed: absent/empty, image reference, named glyph,
/// literal text.
#[derive(Clone)]
pub enum IconSource {
    /// No identifier; render the default glyph.
    Default,
    /// URL or data URI.
    Image(String),
    /// Named vector glyph.
    Glyph(Icon),
    /// Anything else, rendered verbatim (usually an emoji).
    Text(String),
}

impl IconSource {
    /// Classify `identifier`, resolving glyph names through `glyph`.
    pub fn classify(identifier: Option<&str>, glyph: impl FnOnce(&str) -> Option<Icon>) -> Self {
        let Some(id) = identifier.filter(|id| !id.is_empty()) else {
            return Self::Default;
        };

        if is_image_identifier(id) {
            Self::Image(id.to_string())
        } else if let Some(icon) = glyph(id) {
            Self::Glyph(icon)
        } else {
            Self::Text(id.to_string())
        }
    }
}

/// Load status of a single image identifier within one component instance.
///
/// `Loaded` is terminal and cached. `Failed` is terminal only for the
/// current identifier; a new identifier starts over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageStatus {
    /// Waiting for the native `load` event; rendered transparent.
    #[default]
    Loading,
    /// Loaded at least once; rendered opaque.
    Loaded,
    /// The native `error` event fired; the default glyph is shown instead.
    Failed,
}

impl ImageStatus {
    /// Status for a freshly assigned identifier.
    pub fn initial(cached: bool) -> Self {
        if cached { Self::Loaded } else { Self::Loading }
    }

    /// Transition on the native `load` event.
    pub fn on_load(self) -> Self {
        match self {
            Self::Failed => Self::Failed,
            Self::Loading | Self::Loaded => Self::Loaded,
        }
    }

    /// Transition on the native `error` event.
    pub fn on_error(self) -> Self {
        Self::Failed
    }

    /// Whether the image is rendered at full opacity.
    pub fn is_visible(self) -> bool {
        self == Self::Loaded
    }
}
