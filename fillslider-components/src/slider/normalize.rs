//! Single-value adapter over the multi-thumb engine.
//!
//! The engine speaks ordered sequences; the slider speaks one scalar. Values
//! cross the boundary through [`wrap_value`] and [`unwrap_values`] only.

use fillslider_ui::{CallbackWith, SliderStateArgs, ThumbValues};
use smallvec::smallvec;

use super::SliderArgs;

/// The engine always runs with exactly one thumb.
pub const THUMB_COUNT: usize = 1;

/// Index of the only thumb.
pub const THUMB_INDEX: usize = 0;

/// Scalar to one-element sequence.
pub fn wrap_value(value: f64) -> ThumbValues {
    smallvec![value]
}

/// One-element sequence to scalar. `None` for an empty sequence.
pub fn unwrap_values(values: &[f64]) -> Option<f64> {
    values.first().copied()
}

/// Adapts a scalar handler to the engine's sequence handler.
pub fn wrap_on_change(on_change: CallbackWith<f64>) -> CallbackWith<ThumbValues> {
    CallbackWith::new(move |values: ThumbValues| {
        if let Some(value) = unwrap_values(&values) {
            on_change.call(value);
        }
    })
}

/// Builds the engine arguments for a single-thumb slider.
///
/// `value` and `default_value` pass through untouched; settling which one
/// wins is the engine's business.
pub fn engine_args(args: &SliderArgs) -> SliderStateArgs {
    SliderStateArgs {
        count: THUMB_COUNT,
        min_value: args.min_value,
        max_value: args.max_value,
        step: args.step,
        value: args.value.map(wrap_value),
        default_value: args.default_value.map(wrap_value),
        on_change: args.on_change.clone().map(wrap_on_change),
        on_change_end: args.on_change_end.clone().map(wrap_on_change),
        is_disabled: args.is_disabled,
    }
}
