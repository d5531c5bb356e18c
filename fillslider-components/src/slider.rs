//! A single-thumb slider with an optional offset fill.
//!
//! ## Usage
//!
//! Use to let users pick one value from a continuous range, optionally
//! highlighting the span between the value and a fixed anchor (for example
//! a balance control centred on zero).
//!
//! A build reads everything it needs from a [`SliderContext`] and returns a
//! [`SliderOutput`]: the root element plus its children in paint order. No
//! percent or direction is cached between builds.
use derive_setters::Setters;
use fillslider_ui::{
    CallbackWith, EventProps, HoverService, HoverState, LocaleService, SliderEngine, SliderState,
    SliderStateError,
};

pub use geometry::{FillRequest, FillSegment, HandlePosition, TrackGeometry, TrackSegment};
pub use render::{
    FillNode, HandleNode, HiddenInput, RootNode, SliderNode, SliderOutput, TickNode, TrackNode,
};

use normalize::THUMB_INDEX;
use render::{HandleState, render_fill, render_handle, render_root, render_ticks, render_track};

pub mod geometry;
pub mod normalize;
mod render;
pub mod style;

/// Arguments for the [`slider`] component.
#[derive(PartialEq, Clone, Debug, Setters)]
pub struct SliderArgs {
    /// Controlled value. Leave unset for an uncontrolled slider.
    #[setters(strip_option)]
    pub value: Option<f64>,
    /// Initial value of an uncontrolled slider.
    #[setters(strip_option)]
    pub default_value: Option<f64>,
    /// Called with the new value whenever it changes.
    #[setters(skip)]
    pub on_change: Option<CallbackWith<f64>>,
    /// Called with the final value when a drag ends.
    #[setters(skip)]
    pub on_change_end: Option<CallbackWith<f64>>,
    /// Draw the simple fill from the origin to the thumb, or, together with
    /// `fill_offset`, the fill between the offset and the thumb.
    pub is_filled: bool,
    /// Anchor of the offset fill, in value units. Clamped to the range.
    #[setters(strip_option)]
    pub fill_offset: Option<f64>,
    /// Colour stops for a track gradient, listed from the leading edge.
    #[setters(strip_option, into)]
    pub track_gradient: Option<Vec<String>>,
    /// Range minimum.
    pub min_value: f64,
    /// Range maximum.
    pub max_value: f64,
    /// Step between selectable values.
    pub step: f64,
    /// Visible and accessible label.
    #[setters(strip_option, into)]
    pub label: Option<String>,
    /// Disable interaction.
    pub is_disabled: bool,
    /// Number of tick marks, including both ends. Fewer than two draws none.
    pub tick_count: usize,
}

impl SliderArgs {
    /// Sets the on_change handler.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.on_change = Some(CallbackWith::new(on_change));
        self
    }

    /// Sets the on_change handler using a shared callback.
    pub fn on_change_shared(mut self, on_change: impl Into<CallbackWith<f64>>) -> Self {
        self.on_change = Some(on_change.into());
        self
    }

    /// Sets the on_change_end handler.
    pub fn on_change_end<F>(mut self, on_change_end: F) -> Self
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.on_change_end = Some(CallbackWith::new(on_change_end));
        self
    }

    fn fill_request(&self) -> FillRequest {
        FillRequest {
            is_filled: self.is_filled,
            fill_offset: self.fill_offset,
        }
    }
}

impl Default for SliderArgs {
    fn default() -> Self {
        Self {
            value: None,
            default_value: None,
            on_change: None,
            on_change_end: None,
            is_filled: false,
            fill_offset: None,
            track_gradient: None,
            min_value: 0.0,
            max_value: 100.0,
            step: 1.0,
            label: None,
            is_disabled: false,
            tick_count: 0,
        }
    }
}

/// Read-only services one slider build consults.
pub struct SliderContext<'a> {
    /// Thumb positions, bounds and drag state.
    pub engine: &'a dyn SliderEngine,
    /// Layout direction.
    pub locale: &'a dyn LocaleService,
    /// Hover flag and handlers for the handle.
    pub hover: &'a dyn HoverService,
    /// Whether the focus ring should be drawn around the handle.
    pub is_focus_visible: bool,
    /// Thumb handlers supplied by the engine's host.
    pub thumb_props: EventProps,
}

/// # slider
///
/// Builds a single-thumb slider.
///
/// ## Parameters
///
/// - `args` — value, fill and range configuration; see [`SliderArgs`].
/// - `cx` — the services to read from; see [`SliderContext`].
///
/// ## Examples
///
/// ```
/// use fillslider_components::slider::{SliderArgs, SliderContext, SliderNode, normalize, slider};
/// use fillslider_ui::{EventProps, LayoutDirection, NoHover, SliderState};
///
/// let args = SliderArgs::default().value(30.0).is_filled(true).fill_offset(70.0);
/// let engine = SliderState::new(normalize::engine_args(&args))?;
/// let output = slider(
///     &args,
///     &SliderContext {
///         engine: &engine,
///         locale: &LayoutDirection::Ltr,
///         hover: &NoHover,
///         is_focus_visible: false,
///         thumb_props: EventProps::new(),
///     },
/// );
///
/// let kinds: Vec<_> = output.children.iter().map(SliderNode::kind).collect();
/// assert_eq!(kinds, ["lower_track", "handle", "upper_track", "fill"]);
/// assert_eq!(output.fill().unwrap().style.to_string(), "left: 30%; width: 40%;");
/// # Ok::<(), fillslider_ui::SliderStateError>(())
/// ```
pub fn slider(args: &SliderArgs, cx: &SliderContext<'_>) -> SliderOutput {
    let direction = cx.locale.direction();
    let geometry = TrackGeometry::compute(cx.engine, args.fill_request(), direction);
    tracing::debug!(
        thumb_percent = geometry.thumb_percent,
        ?direction,
        has_fill = geometry.fill.is_some(),
        "slider build"
    );

    let is_hovered = cx.hover.is_hovered();
    let handle_state = HandleState {
        is_hovered,
        is_dragged: cx.engine.is_thumb_dragging(THUMB_INDEX),
        is_focused: cx.is_focus_visible,
        event_props: cx.thumb_props.clone().merge(&cx.hover.hover_props()),
    };

    let mut children = Vec::with_capacity(4 + args.tick_count);
    children.push(SliderNode::LowerTrack(render_track(geometry.lower)));
    children.extend(
        render_ticks(cx.engine, &geometry, args.tick_count)
            .into_iter()
            .map(SliderNode::Tick),
    );
    children.push(SliderNode::Handle(render_handle(
        args,
        cx.engine,
        &geometry,
        handle_state,
    )));
    children.push(SliderNode::UpperTrack(render_track(geometry.upper)));
    if let Some(fill) = geometry.fill {
        children.push(SliderNode::Fill(render_fill(fill)));
    }

    SliderOutput {
        root: render_root(args, &geometry),
        geometry,
        children,
    }
}

/// Owns the engine, hover and focus state for one slider.
pub struct SliderController {
    state: SliderState,
    hover: HoverState,
    is_focused: bool,
}

impl SliderController {
    /// Creates a controller whose engine is configured from `args`.
    pub fn new(args: &SliderArgs) -> Result<Self, SliderStateError> {
        let state = SliderState::new(normalize::engine_args(args))?;
        let hover = HoverState::new();
        hover.set_disabled(args.is_disabled);
        Ok(Self {
            state,
            hover,
            is_focused: false,
        })
    }

    /// Pushes the disabled flag and a controlled `value` from `args` into the
    /// engine. Call before each build when either can change.
    pub fn sync(&mut self, args: &SliderArgs) -> Result<(), SliderStateError> {
        self.hover.set_disabled(args.is_disabled);
        self.state.set_disabled(args.is_disabled);
        match args.value {
            Some(value) => self.state.set_values(normalize::wrap_value(value)),
            None => Ok(()),
        }
    }

    /// The engine.
    pub fn state(&self) -> &SliderState {
        &self.state
    }

    /// The engine, for driving value and drag changes.
    pub fn state_mut(&mut self) -> &mut SliderState {
        &mut self.state
    }

    /// Hover state of the handle.
    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    /// Shows or hides the focus ring.
    pub fn set_focused(&mut self, focused: bool) {
        self.is_focused = focused;
    }

    /// Returns `true` if the focus ring is shown.
    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    /// Builds the slider against this controller's state.
    pub fn build(&self, args: &SliderArgs, locale: &dyn LocaleService) -> SliderOutput {
        slider(
            args,
            &SliderContext {
                engine: &self.state,
                locale,
                hover: &self.hover,
                is_focus_visible: self.is_focused,
                thumb_props: EventProps::new(),
            },
        )
    }
}
