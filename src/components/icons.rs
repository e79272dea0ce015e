//! Centralized icon definitions.
//!
//! Named glyphs are resolved through [`GlyphRegistry`], a closed table of
//! lucide icons keyed by their library name (`"BookOpen"`, `"House"`, ...).
//! A few legacy names are kept as aliases so older manifests still resolve.

use std::collections::HashMap;
use std::sync::LazyLock;

use icondata::Icon;

/// Glyph rendered when there is no identifier or an image failed to load.
pub const DEFAULT_GLYPH: Icon = icondata::LuLink;

/// Spinner glyph used by the sync indicator.
pub const SPINNER_GLYPH: Icon = icondata::LuLoaderCircle;

// =============================================================================
// Glyph Table
// =============================================================================

const LUCIDE_GLYPHS: &[(&str, Icon)] = &[
    ("BookOpen", icondata::LuBookOpen),
    ("Bookmark", icondata::LuBookmark),
    ("Briefcase", icondata::LuBriefcase),
    ("Calendar", icondata::LuCalendar),
    ("Camera", icondata::LuCamera),
    ("ChevronLeft", icondata::LuChevronLeft),
    ("ChevronRight", icondata::LuChevronRight),
    ("Cloud", icondata::LuCloud),
    ("Code", icondata::LuCode),
    ("Compass", icondata::LuCompass),
    ("Download", icondata::LuDownload),
    ("EllipsisVertical", icondata::LuEllipsisVertical),
    ("ExternalLink", icondata::LuExternalLink),
    ("File", icondata::LuFile),
    ("FileText", icondata::LuFileText),
    ("Folder", icondata::LuFolder),
    ("FolderOpen", icondata::LuFolderOpen),
    ("Globe", icondata::LuGlobe),
    ("Heart", icondata::LuHeart),
    ("House", icondata::LuHouse),
    ("Image", icondata::LuImage),
    ("LayoutGrid", icondata::LuLayoutGrid),
    ("Link", icondata::LuLink),
    ("List", icondata::LuList),
    ("LoaderCircle", icondata::LuLoaderCircle),
    ("Lock", icondata::LuLock),
    ("Mail", icondata::LuMail),
    ("MapPin", icondata::LuMapPin),
    ("Music", icondata::LuMusic),
    ("Newspaper", icondata::LuNewspaper),
    ("Pencil", icondata::LuPencil),
    ("Plus", icondata::LuPlus),
    ("Search", icondata::LuSearch),
    ("Settings", icondata::LuSettings),
    ("Share2", icondata::LuShare2),
    ("ShoppingCart", icondata::LuShoppingCart),
    ("Star", icondata::LuStar),
    ("Terminal", icondata::LuTerminal),
    ("User", icondata::LuUser),
    ("Video", icondata::LuVideo),
    ("X", icondata::LuX),
    ("Zap", icondata::LuZap),
];

/// Pre-rename names still accepted by the library.
const LEGACY_ALIASES: &[(&str, &str)] = &[
    ("Home", "House"),
    ("Loader2", "LoaderCircle"),
    ("MoreVertical", "EllipsisVertical"),
];

// =============================================================================
// Registry
// =============================================================================

/// Lookup table from glyph name to icon data.
pub struct GlyphRegistry {
    glyphs: HashMap<&'static str, Icon>,
}

static REGISTRY: LazyLock<GlyphRegistry> =
    LazyLock::new(|| GlyphRegistry::from_table(LUCIDE_GLYPHS, LEGACY_ALIASES));

impl GlyphRegistry {
    /// The process-wide registry, built on first use.
    pub fn global() -> &'static Self {
        &REGISTRY
    }

    fn from_table(table: &[(&'static str, Icon)], aliases: &[(&'static str, &str)]) -> Self {
        let mut glyphs: HashMap<&'static str, Icon> = table.iter().copied().collect();
        for (alias, target) in aliases {
            if let Some(icon) = glyphs.get(target).copied() {
                glyphs.insert(*alias, icon);
            }
        }
        Self { glyphs }
    }

    /// Exact, case-sensitive lookup. Unknown names are `None`.
    pub fn get(&self, name: &str) -> Option<Icon> {
        self.glyphs.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.glyphs.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}
