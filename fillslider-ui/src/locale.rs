//! # Locale and layout direction
//!
//! Components read the text direction from a [`LocaleService`] on every
//! build. Nothing is cached between builds, so swapping the locale behind a
//! [`LocaleHandle`] flips the next build immediately.
//!
//! ## Usage
//!
//! ```
//! use fillslider_ui::locale::{LayoutDirection, Locale, LocaleService, Side};
//!
//! let locale = Locale::new("he-IL");
//! assert_eq!(locale.direction(), LayoutDirection::Rtl);
//! assert_eq!(locale.direction().leading_side(), Side::Right);
//! ```

use std::sync::Arc;

use parking_lot::RwLock;

/// Script subtags written right to left.
const RTL_SCRIPTS: &[&str] = &[
    "arab", "syrc", "samr", "mand", "thaa", "mend", "nkoo", "adlm", "rohg", "hebr",
];

/// Languages written right to left when no script subtag is given.
const RTL_LANGS: &[&str] = &[
    "ae", "ar", "arc", "bcc", "bqi", "ckb", "dv", "fa", "glk", "he", "ku", "mzn", "nqo", "pnb",
    "ps", "sd", "ug", "ur", "yi",
];

/// Horizontal edge of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    /// The left edge.
    Left,
    /// The right edge.
    Right,
}

impl Side {
    /// Keyword used for this side in style declarations.
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    /// The other edge.
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text and layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LayoutDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

impl LayoutDirection {
    /// Edge that progress starts from.
    pub fn leading_side(self) -> Side {
        match self {
            LayoutDirection::Ltr => Side::Left,
            LayoutDirection::Rtl => Side::Right,
        }
    }

    /// Edge that progress runs towards.
    pub fn trailing_side(self) -> Side {
        self.leading_side().opposite()
    }

    /// Returns `true` for [`LayoutDirection::Rtl`].
    pub fn is_rtl(self) -> bool {
        self == LayoutDirection::Rtl
    }

    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            LayoutDirection::Ltr => LayoutDirection::Rtl,
            LayoutDirection::Rtl => LayoutDirection::Ltr,
        }
    }
}

/// A BCP-47 locale tag together with its derived direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    tag: String,
    direction: LayoutDirection,
}

impl Locale {
    /// Parses the direction out of a locale tag such as `ar-EG` or
    /// `az-Arab-IR`.
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        let direction = direction_of(&tag);
        Self { tag, direction }
    }

    /// The locale tag as given.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Direction derived from the tag.
    pub fn direction(&self) -> LayoutDirection {
        self.direction
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en-US")
    }
}

fn direction_of(tag: &str) -> LayoutDirection {
    let mut parts = tag.split(['-', '_']).filter(|p| !p.is_empty());
    let Some(language) = parts.next() else {
        return LayoutDirection::Ltr;
    };
    let language = language.to_ascii_lowercase();

    // A script subtag is always four letters and takes precedence.
    if let Some(script) = parts.find(|p| p.len() == 4 && p.chars().all(|c| c.is_ascii_alphabetic()))
    {
        let script = script.to_ascii_lowercase();
        return if RTL_SCRIPTS.contains(&script.as_str()) {
            LayoutDirection::Rtl
        } else {
            LayoutDirection::Ltr
        };
    }

    if RTL_LANGS.contains(&language.as_str()) {
        LayoutDirection::Rtl
    } else {
        LayoutDirection::Ltr
    }
}

/// Read-only source of the current layout direction.
pub trait LocaleService {
    /// Current direction. Called once per build.
    fn direction(&self) -> LayoutDirection;
}

impl LocaleService for Locale {
    fn direction(&self) -> LayoutDirection {
        self.direction
    }
}

impl LocaleService for LayoutDirection {
    fn direction(&self) -> LayoutDirection {
        *self
    }
}

/// Shared, switchable locale.
///
/// Clones share the same underlying locale.
#[derive(Debug, Clone, Default)]
pub struct LocaleHandle {
    inner: Arc<RwLock<Locale>>,
}

impl LocaleHandle {
    /// Creates a handle holding `locale`.
    pub fn new(locale: Locale) -> Self {
        Self {
            inner: Arc::new(RwLock::new(locale)),
        }
    }

    /// Replaces the current locale.
    pub fn set_locale(&self, locale: Locale) {
        tracing::debug!(tag = locale.tag(), "locale changed");
        *self.inner.write() = locale;
    }

    /// Snapshot of the current locale.
    pub fn locale(&self) -> Locale {
        self.inner.read().clone()
    }
}

impl LocaleService for LocaleHandle {
    fn direction(&self) -> LayoutDirection {
        self.inner.read().direction()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rtl_languages() {
        for tag in ["ar", "ar-EG", "he-IL", "fa", "ur-PK", "yi"] {
            assert_eq!(Locale::new(tag).direction(), LayoutDirection::Rtl, "{tag}");
        }
    }

    #[test]
    fn ltr_languages() {
        for tag in ["en-US", "de", "ja-JP", "zh-Hans-CN", ""] {
            assert_eq!(Locale::new(tag).direction(), LayoutDirection::Ltr, "{tag}");
        }
    }

    #[test]
    fn script_subtag_wins() {
        assert_eq!(Locale::new("az-Arab-IR").direction(), LayoutDirection::Rtl);
        assert_eq!(Locale::new("ku-Latn").direction(), LayoutDirection::Ltr);
        assert_eq!(Locale::new("ku").direction(), LayoutDirection::Rtl);
    }

    #[test]
    fn sides_mirror() {
        assert_eq!(LayoutDirection::Ltr.leading_side(), Side::Left);
        assert_eq!(LayoutDirection::Rtl.leading_side(), Side::Right);
        assert_eq!(LayoutDirection::Ltr.trailing_side(), Side::Right);
        assert_eq!(LayoutDirection::Rtl.flipped(), LayoutDirection::Ltr);
        assert_eq!(Side::Left.opposite().as_str(), "right");
    }

    #[test]
    fn handle_switch_is_seen_on_next_read() {
        let handle = LocaleHandle::default();
        let reader = handle.clone();
        assert_eq!(reader.direction(), LayoutDirection::Ltr);
        handle.set_locale(Locale::new("ar"));
        assert_eq!(reader.direction(), LayoutDirection::Rtl);
        assert_eq!(reader.locale().tag(), "ar");
    }
}
