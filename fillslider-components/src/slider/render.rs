//! Node types emitted by a slider build and the helpers that fill them in.

use fillslider_ui::{EventProps, SliderEngine};

use super::{
    SliderArgs,
    geometry::{FillSegment, HandlePosition, TrackGeometry, TrackSegment},
    normalize::THUMB_INDEX,
    style::{self, ClassList, Style},
};

/// A lower or upper track half.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TrackNode {
    /// Geometry of the half.
    pub segment: TrackSegment,
    /// Class names.
    pub class_names: ClassList,
    /// Style declarations.
    pub style: Style,
}

/// A tick mark.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TickNode {
    /// Position along the track.
    pub percent: f64,
    /// At or below the thumb.
    pub is_active: bool,
    /// Class names.
    pub class_names: ClassList,
    /// Style declarations.
    pub style: Style,
}

/// The visually hidden native input inside the handle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HiddenInput {
    /// Range minimum.
    pub min: f64,
    /// Range maximum.
    pub max: f64,
    /// Step.
    pub step: f64,
    /// Current value.
    pub value: f64,
    /// Accessible label.
    pub label: Option<String>,
    /// Input is disabled.
    pub disabled: bool,
    /// Class names.
    pub class_names: ClassList,
}

/// The focus-ring-wrapped handle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HandleNode {
    /// Handle position.
    pub position: HandlePosition,
    /// Pointer is over the handle.
    pub is_hovered: bool,
    /// Thumb is being dragged.
    pub is_dragged: bool,
    /// Focus ring is shown.
    pub is_focused: bool,
    /// Class names.
    pub class_names: ClassList,
    /// Style declarations.
    pub style: Style,
    /// Thumb handlers merged with hover handlers.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub event_props: EventProps,
    /// Native input for keyboard and assistive interaction.
    pub input: HiddenInput,
}

/// The offset fill.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FillNode {
    /// Fill geometry.
    pub segment: FillSegment,
    /// Class names.
    pub class_names: ClassList,
    /// Style declarations.
    pub style: Style,
}

/// One child of the slider's track container.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum SliderNode {
    /// Track from the leading edge to the thumb.
    LowerTrack(TrackNode),
    /// Tick mark.
    Tick(TickNode),
    /// Handle.
    Handle(HandleNode),
    /// Track from the thumb to the trailing edge.
    UpperTrack(TrackNode),
    /// Offset fill.
    Fill(FillNode),
}

impl SliderNode {
    /// Short name of the node kind.
    pub fn kind(&self) -> &'static str {
        match self {
            SliderNode::LowerTrack(_) => "lower_track",
            SliderNode::Tick(_) => "tick",
            SliderNode::Handle(_) => "handle",
            SliderNode::UpperTrack(_) => "upper_track",
            SliderNode::Fill(_) => "fill",
        }
    }
}

/// The slider's root element.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RootNode {
    /// Class names.
    pub class_names: ClassList,
    /// Style declarations.
    pub style: Style,
    /// Visible label.
    pub label: Option<String>,
}

/// Result of one slider build.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SliderOutput {
    /// Root element.
    pub root: RootNode,
    /// Geometry the children were laid out from.
    pub geometry: TrackGeometry,
    /// Children in paint order: lower track, ticks, handle, upper track,
    /// fill.
    pub children: Vec<SliderNode>,
}

impl SliderOutput {
    /// The handle node.
    pub fn handle(&self) -> Option<&HandleNode> {
        self.children.iter().find_map(|node| match node {
            SliderNode::Handle(handle) => Some(handle),
            _ => None,
        })
    }

    /// The fill node, if drawn.
    pub fn fill(&self) -> Option<&FillNode> {
        self.children.iter().find_map(|node| match node {
            SliderNode::Fill(fill) => Some(fill),
            _ => None,
        })
    }
}

/// Per-build handle state read from the services.
pub(super) struct HandleState {
    pub is_hovered: bool,
    pub is_dragged: bool,
    pub is_focused: bool,
    pub event_props: EventProps,
}

pub(super) fn render_track(segment: TrackSegment) -> TrackNode {
    TrackNode {
        segment,
        class_names: ClassList::new(style::TRACK),
        style: style::track_style(&segment),
    }
}

pub(super) fn render_ticks(
    engine: &dyn SliderEngine,
    geometry: &TrackGeometry,
    tick_count: usize,
) -> Vec<TickNode> {
    let side = geometry.direction.leading_side();
    engine
        .tick_percents(tick_count)
        .into_iter()
        .map(|percent| {
            let is_active = percent <= geometry.thumb_percent;
            TickNode {
                percent,
                is_active,
                class_names: ClassList::new(style::TICK).with_if(style::TICK_ACTIVE, is_active),
                style: Style::new().with(side.as_str(), style::format_percent(percent)),
            }
        })
        .collect()
}

pub(super) fn render_handle(
    args: &SliderArgs,
    engine: &dyn SliderEngine,
    geometry: &TrackGeometry,
    state: HandleState,
) -> HandleNode {
    let input = HiddenInput {
        min: engine.thumb_min_value(THUMB_INDEX),
        max: engine.thumb_max_value(THUMB_INDEX),
        step: engine.step(),
        value: engine.thumb_value(THUMB_INDEX),
        label: args.label.clone(),
        disabled: args.is_disabled,
        class_names: ClassList::new(style::INPUT),
    };
    HandleNode {
        position: geometry.handle,
        is_hovered: state.is_hovered,
        is_dragged: state.is_dragged,
        is_focused: state.is_focused,
        class_names: style::handle_classes(state.is_hovered, state.is_dragged, state.is_focused),
        style: style::handle_style(&geometry.handle),
        event_props: state.event_props,
        input,
    }
}

pub(super) fn render_fill(segment: FillSegment) -> FillNode {
    FillNode {
        segment,
        class_names: style::fill_classes(&segment),
        style: style::fill_style(&segment),
    }
}

pub(super) fn render_root(args: &SliderArgs, geometry: &TrackGeometry) -> RootNode {
    RootNode {
        class_names: style::root_classes(geometry, args.is_disabled),
        style: style::root_style(geometry.direction, args.track_gradient.as_deref()),
        label: args.label.clone(),
    }
}
