//! Track geometry: where the track halves, handle and offset fill sit for a
//! given thumb percent and layout direction.

use fillslider_ui::{LayoutDirection, Side, SliderEngine};

use super::normalize::THUMB_INDEX;

/// One of the two track halves split at the thumb.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TrackSegment {
    /// Edge the segment is anchored to.
    pub side: Side,
    /// Distance of the segment from `side`, as a fraction of the track.
    pub edge_offset: f64,
    /// Width as a fraction of the track.
    pub width: f64,
    /// Background scale that keeps a track-wide texture continuous across
    /// the cut: `1 / width`. Infinite for a zero-width segment.
    pub tiling_hint: f64,
}

impl TrackSegment {
    fn anchored(side: Side, width: f64) -> Self {
        Self {
            side,
            edge_offset: 0.0,
            width,
            tiling_hint: 1.0 / width,
        }
    }
}

/// Position of the handle's center.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HandlePosition {
    /// Leading edge of the layout direction.
    pub side: Side,
    /// Distance from `side`, as a fraction of the track.
    pub edge_offset: f64,
}

/// Highlighted span between the fill offset and the thumb.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FillSegment {
    /// Leading edge of the layout direction.
    pub side: Side,
    /// Distance of the nearer end from `side`.
    pub edge_offset: f64,
    /// Width as a fraction of the track.
    pub width: f64,
    /// Percent of the (clamped) fill offset.
    pub offset_percent: f64,
    /// The thumb sits past the offset. Selects the `--right` variant.
    pub is_right_of_offset: bool,
}

/// Fill styling the caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FillRequest {
    /// Simple origin-to-thumb fill requested.
    pub is_filled: bool,
    /// Raw fill anchor in value units, before clamping.
    pub fill_offset: Option<f64>,
}

/// Everything a renderer needs to lay out one slider build.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TrackGeometry {
    /// Direction the geometry was computed for.
    pub direction: LayoutDirection,
    /// Thumb position in `[0, 1]`.
    pub thumb_percent: f64,
    /// Track from the leading edge up to the thumb.
    pub lower: TrackSegment,
    /// Track from the thumb to the trailing edge.
    pub upper: TrackSegment,
    /// Handle position.
    pub handle: HandlePosition,
    /// Offset fill, present only when it was requested with an offset.
    pub fill: Option<FillSegment>,
    /// Simple filled style. Never set together with `fill`.
    pub is_simple_filled: bool,
}

impl TrackGeometry {
    /// Reads the thumb and fill offset percents from `engine` and lays out
    /// the track.
    ///
    /// The fill offset is clamped to the thumb's bounds before conversion.
    pub fn compute(
        engine: &dyn SliderEngine,
        fill: FillRequest,
        direction: LayoutDirection,
    ) -> Self {
        let thumb_percent = engine.thumb_percent(THUMB_INDEX);
        let offset_percent = fill.fill_offset.map(|offset| {
            let min = engine.thumb_min_value(THUMB_INDEX);
            let max = engine.thumb_max_value(THUMB_INDEX);
            let clamped = offset.max(min).min(max);
            if clamped != offset {
                tracing::trace!(offset, clamped, "fill offset clamped to thumb bounds");
            }
            engine.value_percent(clamped)
        });
        Self::from_percents(thumb_percent, fill.is_filled, offset_percent, direction)
    }

    /// Lays out the track from already-converted percents.
    ///
    /// The offset fill appears only when `is_filled` is set and an offset
    /// percent is given; the offset then suppresses the simple filled style.
    pub fn from_percents(
        thumb_percent: f64,
        is_filled: bool,
        offset_percent: Option<f64>,
        direction: LayoutDirection,
    ) -> Self {
        let thumb_percent = unit_clamp(thumb_percent);
        let leading = direction.leading_side();

        let lower = TrackSegment::anchored(leading, thumb_percent);
        let upper = TrackSegment::anchored(leading.opposite(), 1.0 - thumb_percent);
        let handle = HandlePosition {
            side: leading,
            edge_offset: thumb_percent,
        };

        let fill = match offset_percent {
            Some(offset_percent) if is_filled => {
                Some(fill_segment(thumb_percent, unit_clamp(offset_percent), leading))
            }
            _ => None,
        };

        Self {
            direction,
            thumb_percent,
            lower,
            upper,
            handle,
            fill,
            is_simple_filled: is_filled && offset_percent.is_none(),
        }
    }
}

fn fill_segment(thumb_percent: f64, offset_percent: f64, side: Side) -> FillSegment {
    let width_delta = thumb_percent - offset_percent;
    let is_right_of_offset = width_delta > 0.0;
    let edge_offset = if is_right_of_offset {
        offset_percent
    } else {
        thumb_percent
    };
    FillSegment {
        side,
        edge_offset,
        width: width_delta.abs(),
        offset_percent,
        is_right_of_offset,
    }
}

fn unit_clamp(percent: f64) -> f64 {
    if percent.is_nan() {
        return 0.0;
    }
    percent.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use fillslider_ui::{SliderState, SliderStateArgs};

    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn engine(value: f64) -> SliderState {
        SliderState::new(SliderStateArgs::new(1).value(vec![value])).unwrap()
    }

    fn offset_fill(value: f64, offset: f64, direction: LayoutDirection) -> TrackGeometry {
        TrackGeometry::compute(
            &engine(value),
            FillRequest {
                is_filled: true,
                fill_offset: Some(offset),
            },
            direction,
        )
    }

    #[test]
    fn widths_always_sum_to_one() {
        for i in 0..=100 {
            let p = i as f64 / 100.0;
            let g = TrackGeometry::from_percents(p, false, None, LayoutDirection::Ltr);
            assert!(approx(g.lower.width + g.upper.width, 1.0), "{p}");
        }
    }

    #[test]
    fn midpoint_ltr() {
        let g = TrackGeometry::compute(&engine(50.0), FillRequest::default(), LayoutDirection::Ltr);
        assert_eq!(g.thumb_percent, 0.5);
        assert_eq!(g.lower.width, 0.5);
        assert_eq!(g.upper.width, 0.5);
        assert_eq!(g.lower.side, Side::Left);
        assert_eq!(g.upper.side, Side::Right);
        assert_eq!(g.handle, HandlePosition { side: Side::Left, edge_offset: 0.5 });
        assert_eq!(g.lower.tiling_hint, 2.0);
        assert!(g.fill.is_none());
    }

    #[test]
    fn fill_with_thumb_left_of_offset() {
        let g = offset_fill(30.0, 70.0, LayoutDirection::Ltr);
        let fill = g.fill.unwrap();
        assert!(approx(fill.offset_percent, 0.7));
        assert!(!fill.is_right_of_offset);
        assert!(approx(fill.edge_offset, 0.3));
        assert!(approx(fill.width, 0.4));
    }

    #[test]
    fn fill_with_thumb_right_of_offset() {
        let g = offset_fill(70.0, 30.0, LayoutDirection::Ltr);
        let fill = g.fill.unwrap();
        assert!(fill.is_right_of_offset);
        assert!(approx(fill.edge_offset, 0.3));
        assert!(approx(fill.width, 0.4));
    }

    #[test]
    fn fill_spans_min_to_max_of_thumb_and_offset() {
        for value in [0.0, 12.0, 50.0, 88.0, 100.0] {
            for offset in [0.0, 25.0, 50.0, 75.0, 100.0] {
                let fill = offset_fill(value, offset, LayoutDirection::Ltr).fill.unwrap();
                let thumb = value / 100.0;
                let anchor = offset / 100.0;
                assert!(approx(fill.edge_offset, thumb.min(anchor)));
                assert!(approx(fill.edge_offset + fill.width, thumb.max(anchor)));
            }
        }
    }

    #[test]
    fn thumb_on_offset_is_not_right_of_it() {
        let fill = offset_fill(40.0, 40.0, LayoutDirection::Ltr).fill.unwrap();
        assert!(!fill.is_right_of_offset);
        assert_eq!(fill.width, 0.0);
    }

    #[test]
    fn out_of_range_offset_is_clamped() {
        let fill = offset_fill(50.0, 250.0, LayoutDirection::Ltr).fill.unwrap();
        assert_eq!(fill.offset_percent, 1.0);
        let fill = offset_fill(50.0, -40.0, LayoutDirection::Ltr).fill.unwrap();
        assert_eq!(fill.offset_percent, 0.0);
        assert!(fill.is_right_of_offset);
    }

    #[test]
    fn right_flag_follows_current_thumb() {
        let before = offset_fill(20.0, 50.0, LayoutDirection::Ltr).fill.unwrap();
        let after = offset_fill(80.0, 50.0, LayoutDirection::Ltr).fill.unwrap();
        assert!(!before.is_right_of_offset);
        assert!(after.is_right_of_offset);
    }

    #[test]
    fn rtl_mirrors_sides_not_widths() {
        let ltr = offset_fill(70.0, 30.0, LayoutDirection::Ltr);
        let rtl = offset_fill(70.0, 30.0, LayoutDirection::Rtl);

        assert_eq!(rtl.handle.side, Side::Right);
        assert_eq!(rtl.lower.side, Side::Right);
        assert_eq!(rtl.upper.side, Side::Left);
        assert_eq!(rtl.fill.unwrap().side, Side::Right);

        assert_eq!(ltr.lower.width, rtl.lower.width);
        assert_eq!(ltr.upper.width, rtl.upper.width);
        assert_eq!(ltr.handle.edge_offset, rtl.handle.edge_offset);
        let (l, r) = (ltr.fill.unwrap(), rtl.fill.unwrap());
        assert_eq!((l.edge_offset, l.width), (r.edge_offset, r.width));
    }

    #[test]
    fn offset_suppresses_simple_fill() {
        let simple = TrackGeometry::from_percents(0.4, true, None, LayoutDirection::Ltr);
        assert!(simple.is_simple_filled);
        assert!(simple.fill.is_none());

        let offset = TrackGeometry::from_percents(0.4, true, Some(0.1), LayoutDirection::Ltr);
        assert!(!offset.is_simple_filled);
        assert!(offset.fill.is_some());
    }

    #[test]
    fn offset_without_filled_draws_nothing() {
        let g = TrackGeometry::from_percents(0.4, false, Some(0.1), LayoutDirection::Ltr);
        assert!(g.fill.is_none());
        assert!(!g.is_simple_filled);
    }

    #[test]
    fn degenerate_ends_keep_zero_width_segments() {
        let start = TrackGeometry::from_percents(0.0, false, None, LayoutDirection::Ltr);
        assert_eq!(start.lower.width, 0.0);
        assert!(start.lower.tiling_hint.is_infinite());
        assert_eq!(start.upper.tiling_hint, 1.0);

        let end = TrackGeometry::from_percents(1.0, false, None, LayoutDirection::Rtl);
        assert_eq!(end.upper.width, 0.0);
        assert!(end.upper.tiling_hint.is_infinite());
    }

    #[test]
    fn percent_is_kept_in_unit_range() {
        let g = TrackGeometry::from_percents(1.7, false, None, LayoutDirection::Ltr);
        assert_eq!(g.thumb_percent, 1.0);
        let g = TrackGeometry::from_percents(f64::NAN, false, None, LayoutDirection::Ltr);
        assert_eq!(g.thumb_percent, 0.0);
    }
}
