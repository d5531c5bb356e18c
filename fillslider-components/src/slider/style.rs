//! Presentation of [`TrackGeometry`] as class names and style declarations.
//!
//! The geometry stays numeric; everything string-shaped happens here so a
//! different surface can swap this module out.

use std::borrow::Cow;

use fillslider_ui::{LayoutDirection, Side};

use super::geometry::{FillSegment, HandlePosition, TrackGeometry, TrackSegment};

/// Root element class.
pub const SLIDER: &str = "slider";
/// Root modifier for the simple origin-to-thumb fill.
pub const SLIDER_FILLED: &str = "slider--filled";
/// Root modifier for a disabled slider.
pub const SLIDER_DISABLED: &str = "slider--disabled";
/// Track segment class.
pub const TRACK: &str = "slider-track";
/// Handle class.
pub const HANDLE: &str = "slider-handle";
/// Handle hover state.
pub const IS_HOVERED: &str = "is-hovered";
/// Handle drag state.
pub const IS_DRAGGED: &str = "is-dragged";
/// Focus ring state on the handle.
pub const IS_FOCUSED: &str = "is-focused";
/// Hidden native input class.
pub const INPUT: &str = "slider-input";
/// Tick mark class.
pub const TICK: &str = "slider-tick";
/// Tick mark at or below the thumb.
pub const TICK_ACTIVE: &str = "slider-tick--active";
/// Offset fill class.
pub const FILL: &str = "slider-fill";
/// Offset fill whose thumb end is on the trailing side.
pub const FILL_RIGHT: &str = "slider-fill--right";

/// Custom property carrying the track background.
pub const TRACK_COLOR_PROPERTY: &str = "--slider-track-color";
/// Custom property scaling a segment's background to the whole track.
pub const TRACK_BACKGROUND_SIZE_PROPERTY: &str = "--track-background-size";
/// Custom property pinning a segment's background to its track end.
pub const TRACK_BACKGROUND_POSITION_PROPERTY: &str = "--track-background-position";

/// Ordered, de-duplicated class names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClassList(Vec<&'static str>);

impl ClassList {
    /// A list holding `base`.
    pub fn new(base: &'static str) -> Self {
        Self(vec![base])
    }

    /// Adds `class` when `enabled`.
    pub fn with_if(mut self, class: &'static str, enabled: bool) -> Self {
        if enabled && !self.0.contains(&class) {
            self.0.push(class);
        }
        self
    }

    /// Returns `true` if `class` is present.
    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| *c == class)
    }

    /// Class names in order.
    pub fn as_slice(&self) -> &[&'static str] {
        &self.0
    }
}

impl std::fmt::Display for ClassList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// Ordered style declarations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Style(Vec<(Cow<'static, str>, String)>);

impl Style {
    /// No declarations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a declaration.
    pub fn with(
        mut self,
        property: impl Into<Cow<'static, str>>,
        value: impl Into<String>,
    ) -> Self {
        self.0.push((property.into(), value.into()));
        self
    }

    /// Value of the last declaration for `property`.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Returns `true` when empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (name, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{name}: {value};")?;
        }
        Ok(())
    }
}

/// Formats a fraction as a percentage with at most four decimals.
///
/// Non-finite fractions are written as-is (`inf%`).
pub fn format_percent(fraction: f64) -> String {
    let percent = fraction * 100.0 + 0.0;
    if !percent.is_finite() {
        return format!("{percent}%");
    }
    let fixed = format!("{percent:.4}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    let trimmed = if trimmed == "-0" { "0" } else { trimmed };
    format!("{trimmed}%")
}

fn background_position(side: Side) -> &'static str {
    match side {
        Side::Left => "0",
        Side::Right => "100%",
    }
}

/// Style for either track half.
pub fn track_style(segment: &TrackSegment) -> Style {
    Style::new()
        .with("width", format_percent(segment.width))
        .with(TRACK_BACKGROUND_SIZE_PROPERTY, format_percent(segment.tiling_hint))
        .with(
            TRACK_BACKGROUND_POSITION_PROPERTY,
            background_position(segment.side),
        )
}

/// Style placing the handle.
pub fn handle_style(handle: &HandlePosition) -> Style {
    Style::new().with(handle.side.as_str(), format_percent(handle.edge_offset))
}

/// Classes for the handle.
pub fn handle_classes(is_hovered: bool, is_dragged: bool, is_focused: bool) -> ClassList {
    ClassList::new(HANDLE)
        .with_if(IS_HOVERED, is_hovered)
        .with_if(IS_DRAGGED, is_dragged)
        .with_if(IS_FOCUSED, is_focused)
}

/// Style placing the offset fill.
pub fn fill_style(fill: &FillSegment) -> Style {
    Style::new()
        .with(fill.side.as_str(), format_percent(fill.edge_offset))
        .with("width", format_percent(fill.width))
}

/// Classes for the offset fill.
pub fn fill_classes(fill: &FillSegment) -> ClassList {
    ClassList::new(FILL).with_if(FILL_RIGHT, fill.is_right_of_offset)
}

/// Classes for the root element.
pub fn root_classes(geometry: &TrackGeometry, is_disabled: bool) -> ClassList {
    ClassList::new(SLIDER)
        .with_if(SLIDER_FILLED, geometry.is_simple_filled)
        .with_if(SLIDER_DISABLED, is_disabled)
}

/// Root style. Carries the track gradient, drawn towards the trailing edge.
pub fn root_style(direction: LayoutDirection, track_gradient: Option<&[String]>) -> Style {
    match track_gradient {
        Some(stops) if !stops.is_empty() => Style::new().with(
            TRACK_COLOR_PROPERTY,
            format!(
                "linear-gradient(to {}, {})",
                direction.trailing_side(),
                stops.join(", ")
            ),
        ),
        _ => Style::new(),
    }
}
