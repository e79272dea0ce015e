//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Translation tables are loaded at compile time using `include_str!`.

// =============================================================================
// Icon Configuration
// =============================================================================

/// Icon rendering defaults.
pub mod icon {
    /// localStorage key holding the JSON array of loaded icon URLs.
    pub const CACHE_KEY: &str = "modern-nav-icon-cache-v1";

    /// Default icon edge length in pixels.
    pub const DEFAULT_SIZE: u32 = 20;

    /// Stroke weight applied to named vector glyphs.
    pub const GLYPH_STROKE_WIDTH: f32 = 1.5;

    /// Identifier prefixes treated as image references.
    pub const IMAGE_PREFIXES: &[&str] = &["http", "data:"];
}

// =============================================================================
// Sync Indicator Configuration
// =============================================================================

/// Sync indicator defaults.
pub mod sync {
    /// Spinner glyph size in pixels.
    pub const SPINNER_SIZE: u32 = 12;

    /// Localization key for the indicator label.
    pub const MESSAGE_KEY: &str = "syncing_msg";
}

// =============================================================================
// Localization
// =============================================================================

/// Localization configuration.
pub mod i18n {
    /// English translation table.
    pub const EN_TABLE: &str = include_str!("../assets/i18n/en.toml");

    /// Simplified Chinese translation table.
    pub const ZH_TABLE: &str = include_str!("../assets/i18n/zh.toml");

    /// localStorage key for the selected language.
    pub const LANGUAGE_KEY: &str = "modern-nav-language";
}

// =============================================================================
// Network Configuration
// =============================================================================

/// Navigation links manifest location.
pub const LINKS_MANIFEST_URL: &str = "links.json";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: u32 = 10_000;
