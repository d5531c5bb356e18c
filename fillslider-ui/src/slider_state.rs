//! # Multi-thumb slider state
//!
//! [`SliderEngine`] is the query surface components render from: thumb
//! percentages, per-thumb bounds and drag flags. [`SliderState`] is the
//! stock engine. It owns range, step and drag bookkeeping for any number of
//! thumbs and works either controlled (values supplied on every build) or
//! uncontrolled (values kept internally).
//!
//! ## Usage
//!
//! ```
//! use fillslider_ui::slider_state::{SliderEngine, SliderState, SliderStateArgs};
//!
//! let mut state = SliderState::new(SliderStateArgs::new(1).default_value(vec![25.0]))?;
//! assert_eq!(state.thumb_percent(0), 0.25);
//!
//! state.set_thumb_value(0, 60.4);
//! assert_eq!(state.thumb_value(0), 60.0);
//! # Ok::<(), fillslider_ui::slider_state::SliderStateError>(())
//! ```

use smallvec::SmallVec;
use thiserror::Error;

use crate::prop::CallbackWith;

/// Ordered thumb values. Single-thumb sliders never spill to the heap.
pub type ThumbValues = SmallVec<[f64; 2]>;

/// Errors reported when configuring or addressing a [`SliderState`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderStateError {
    /// `min_value` is above `max_value`, or either is not finite.
    #[error("invalid slider range: min {min} must be finite and not above max {max}")]
    InvalidRange {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// Step is zero, negative or not finite.
    #[error("invalid slider step {0}: must be finite and positive")]
    InvalidStep(f64),
    /// A value sequence does not have one entry per thumb.
    #[error("expected {expected} thumb values, got {actual}")]
    ThumbCountMismatch {
        /// Configured thumb count.
        expected: usize,
        /// Length of the supplied sequence.
        actual: usize,
    },
    /// A thumb index past the configured count.
    #[error("thumb index {index} out of bounds for {count} thumbs")]
    ThumbOutOfBounds {
        /// Requested index.
        index: usize,
        /// Configured thumb count.
        count: usize,
    },
}

/// Queries a slider component renders from.
///
/// Indices past the thumb count are a caller bug; the stock engine clamps
/// them to the last thumb.
pub trait SliderEngine {
    /// Position of thumb `index` within the range, in `[0, 1]`.
    fn thumb_percent(&self, index: usize) -> f64;

    /// Position of an arbitrary `value` within the range, in `[0, 1]`.
    fn value_percent(&self, value: f64) -> f64;

    /// Lowest value thumb `index` may take.
    fn thumb_min_value(&self, index: usize) -> f64;

    /// Highest value thumb `index` may take.
    fn thumb_max_value(&self, index: usize) -> f64;

    /// Whether thumb `index` is being dragged.
    fn is_thumb_dragging(&self, index: usize) -> bool;

    /// Current value of thumb `index`.
    fn thumb_value(&self, index: usize) -> f64;

    /// All thumb values in order.
    fn values(&self) -> ThumbValues;

    /// Range minimum.
    fn min_value(&self) -> f64;

    /// Range maximum.
    fn max_value(&self) -> f64;

    /// Step between selectable values.
    fn step(&self) -> f64;

    /// Evenly spaced tick positions including both ends. Fewer than two ticks
    /// yields none.
    fn tick_percents(&self, tick_count: usize) -> Vec<f64> {
        if tick_count < 2 {
            return Vec::new();
        }
        let denom = (tick_count - 1) as f64;
        (0..tick_count).map(|i| i as f64 / denom).collect()
    }
}

/// Configuration for [`SliderState`].
#[derive(Clone, PartialEq, Debug)]
pub struct SliderStateArgs {
    /// Number of thumbs.
    pub count: usize,
    /// Range minimum.
    pub min_value: f64,
    /// Range maximum.
    pub max_value: f64,
    /// Step between selectable values.
    pub step: f64,
    /// Controlled values. When present the engine reports exactly these.
    pub value: Option<ThumbValues>,
    /// Initial values for the uncontrolled case.
    pub default_value: Option<ThumbValues>,
    /// Fired with the full sequence whenever a thumb moves.
    pub on_change: Option<CallbackWith<ThumbValues>>,
    /// Fired with the full sequence when a drag ends.
    pub on_change_end: Option<CallbackWith<ThumbValues>>,
    /// Ignore value changes.
    pub is_disabled: bool,
}

impl SliderStateArgs {
    /// Arguments for `count` thumbs over `0..=100` with step 1.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            min_value: 0.0,
            max_value: 100.0,
            step: 1.0,
            value: None,
            default_value: None,
            on_change: None,
            on_change_end: None,
            is_disabled: false,
        }
    }

    /// Sets the range.
    pub fn range(mut self, min_value: f64, max_value: f64) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    /// Sets the step.
    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Sets controlled values.
    pub fn value(mut self, value: impl Into<ThumbValues>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets initial uncontrolled values.
    pub fn default_value(mut self, value: impl Into<ThumbValues>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Sets the change handler.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(ThumbValues) + Send + Sync + 'static,
    {
        self.on_change = Some(CallbackWith::new(on_change));
        self
    }

    /// Sets the drag-end handler.
    pub fn on_change_end<F>(mut self, on_change_end: F) -> Self
    where
        F: Fn(ThumbValues) + Send + Sync + 'static,
    {
        self.on_change_end = Some(CallbackWith::new(on_change_end));
        self
    }

    /// Disables value changes.
    pub fn disabled(mut self, is_disabled: bool) -> Self {
        self.is_disabled = is_disabled;
        self
    }
}

impl Default for SliderStateArgs {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Stock [`SliderEngine`] implementation.
#[derive(Debug, Clone)]
pub struct SliderState {
    min_value: f64,
    max_value: f64,
    step: f64,
    values: ThumbValues,
    dragging: SmallVec<[bool; 2]>,
    controlled: bool,
    is_disabled: bool,
    on_change: Option<CallbackWith<ThumbValues>>,
    on_change_end: Option<CallbackWith<ThumbValues>>,
}

impl SliderState {
    /// Validates `args` and builds the state.
    pub fn new(args: SliderStateArgs) -> Result<Self, SliderStateError> {
        let SliderStateArgs {
            count,
            min_value,
            max_value,
            step,
            value,
            default_value,
            on_change,
            on_change_end,
            is_disabled,
        } = args;

        if !min_value.is_finite() || !max_value.is_finite() || min_value > max_value {
            return Err(SliderStateError::InvalidRange {
                min: min_value,
                max: max_value,
            });
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(SliderStateError::InvalidStep(step));
        }

        let controlled = value.is_some();
        let values = match value.or(default_value) {
            Some(values) => {
                if values.len() != count {
                    return Err(SliderStateError::ThumbCountMismatch {
                        expected: count,
                        actual: values.len(),
                    });
                }
                values
            }
            None => evenly_spaced(count, min_value, max_value),
        };

        tracing::trace!(count, min_value, max_value, step, controlled, "slider state created");

        Ok(Self {
            min_value,
            max_value,
            step,
            values,
            dragging: SmallVec::from_elem(false, count),
            controlled,
            is_disabled,
            on_change,
            on_change_end,
        })
    }

    /// Number of thumbs.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when values are supplied by the caller.
    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    /// Returns `true` when value changes are ignored.
    pub fn is_disabled(&self) -> bool {
        self.is_disabled
    }

    /// Enables or disables value changes. Drag flags are left untouched.
    pub fn set_disabled(&mut self, is_disabled: bool) {
        self.is_disabled = is_disabled;
    }

    /// Re-syncs controlled values. Has no effect on uncontrolled state.
    pub fn set_values(&mut self, values: impl Into<ThumbValues>) -> Result<(), SliderStateError> {
        let values = values.into();
        if values.len() != self.count() {
            return Err(SliderStateError::ThumbCountMismatch {
                expected: self.count(),
                actual: values.len(),
            });
        }
        if self.controlled {
            self.values = values;
        }
        Ok(())
    }

    /// Moves thumb `index` towards `value`.
    ///
    /// The value is snapped to the step grid and clamped between the
    /// neighbouring thumbs. `on_change` fires only if the sequence changed.
    /// Controlled state reports the change but keeps the caller's values.
    pub fn set_thumb_value(&mut self, index: usize, value: f64) {
        if self.is_disabled || index >= self.count() || !value.is_finite() {
            tracing::debug!(index, value, "ignored slider value update");
            return;
        }

        let snapped = self.snap(value);
        let next = snapped.clamp(self.thumb_min_value(index), self.thumb_max_value(index));
        if next == self.values[index] {
            return;
        }

        let mut values = self.values.clone();
        values[index] = next;
        if !self.controlled {
            self.values = values.clone();
        }
        if let Some(on_change) = &self.on_change {
            on_change.call(values);
        }
    }

    /// Moves thumb `index` to a fraction of the range.
    pub fn set_thumb_percent(&mut self, index: usize, percent: f64) {
        let value = self.percent_value(percent);
        self.set_thumb_value(index, value);
    }

    /// Moves thumb `index` up by `steps` steps.
    pub fn increment_thumb(&mut self, index: usize, steps: u32) {
        if index >= self.count() {
            return;
        }
        let value = self.values[index] + self.step * f64::from(steps);
        self.set_thumb_value(index, value);
    }

    /// Moves thumb `index` down by `steps` steps.
    pub fn decrement_thumb(&mut self, index: usize, steps: u32) {
        if index >= self.count() {
            return;
        }
        let value = self.values[index] - self.step * f64::from(steps);
        self.set_thumb_value(index, value);
    }

    /// Starts or ends a drag on thumb `index`. Ending a drag fires
    /// `on_change_end`.
    pub fn set_thumb_dragging(
        &mut self,
        index: usize,
        dragging: bool,
    ) -> Result<(), SliderStateError> {
        let count = self.count();
        let slot = self
            .dragging
            .get_mut(index)
            .ok_or(SliderStateError::ThumbOutOfBounds { index, count })?;
        let was_dragging = std::mem::replace(slot, dragging);
        if was_dragging
            && !dragging
            && let Some(on_change_end) = &self.on_change_end
        {
            on_change_end.call(self.values.clone());
        }
        Ok(())
    }

    /// Converts a fraction of the range to a value.
    pub fn percent_value(&self, percent: f64) -> f64 {
        let percent = percent.clamp(0.0, 1.0);
        self.min_value + percent * (self.max_value - self.min_value)
    }

    fn snap(&self, value: f64) -> f64 {
        let steps = ((value - self.min_value) / self.step).round();
        let snapped = self.min_value + steps * self.step;
        // Strip float noise such as 0.30000000000000004.
        let decimals = step_decimals(self.step);
        let factor = 10f64.powi(decimals);
        ((snapped * factor).round() / factor).clamp(self.min_value, self.max_value)
    }

    fn thumb_index(&self, index: usize) -> usize {
        index.min(self.count().saturating_sub(1))
    }
}

impl SliderEngine for SliderState {
    fn thumb_percent(&self, index: usize) -> f64 {
        self.value_percent(self.thumb_value(index))
    }

    fn value_percent(&self, value: f64) -> f64 {
        let range = self.max_value - self.min_value;
        if range <= 0.0 {
            return 0.0;
        }
        ((value - self.min_value) / range).clamp(0.0, 1.0)
    }

    fn thumb_min_value(&self, index: usize) -> f64 {
        let index = self.thumb_index(index);
        if index == 0 {
            self.min_value
        } else {
            self.values[index - 1]
        }
    }

    fn thumb_max_value(&self, index: usize) -> f64 {
        let index = self.thumb_index(index);
        if index + 1 >= self.count() {
            self.max_value
        } else {
            self.values[index + 1]
        }
    }

    fn is_thumb_dragging(&self, index: usize) -> bool {
        self.dragging.get(index).copied().unwrap_or(false)
    }

    fn thumb_value(&self, index: usize) -> f64 {
        self.values
            .get(self.thumb_index(index))
            .copied()
            .unwrap_or(self.min_value)
    }

    fn values(&self) -> ThumbValues {
        self.values.clone()
    }

    fn min_value(&self) -> f64 {
        self.min_value
    }

    fn max_value(&self) -> f64 {
        self.max_value
    }

    fn step(&self) -> f64 {
        self.step
    }
}

fn evenly_spaced(count: usize, min: f64, max: f64) -> ThumbValues {
    if count <= 1 {
        return SmallVec::from_elem(min, count);
    }
    let span = (max - min) / (count - 1) as f64;
    (0..count).map(|i| min + span * i as f64).collect()
}

fn step_decimals(step: f64) -> i32 {
    let text = format!("{step}");
    text.split_once('.')
        .map(|(_, fraction)| fraction.len() as i32)
        .unwrap_or(0)
        .min(15)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;
    use smallvec::smallvec;

    use super::*;

    #[test]
    fn rejects_bad_config() {
        assert_eq!(
            SliderState::new(SliderStateArgs::new(1).range(10.0, 0.0)).err(),
            Some(SliderStateError::InvalidRange {
                min: 10.0,
                max: 0.0
            })
        );
        assert_eq!(
            SliderState::new(SliderStateArgs::new(1).step(0.0)).err(),
            Some(SliderStateError::InvalidStep(0.0))
        );
        assert_eq!(
            SliderState::new(SliderStateArgs::new(1).default_value(vec![1.0, 2.0])).err(),
            Some(SliderStateError::ThumbCountMismatch {
                expected: 1,
                actual: 2
            })
        );
    }

    #[test]
    fn single_thumb_defaults_to_min() {
        let state = SliderState::new(SliderStateArgs::new(1).range(-20.0, 20.0)).unwrap();
        assert_eq!(state.values().as_slice(), &[-20.0]);
        assert_eq!(state.thumb_percent(0), 0.0);
    }

    #[test]
    fn value_percent_clamps() {
        let state = SliderState::new(SliderStateArgs::new(1)).unwrap();
        assert_eq!(state.value_percent(50.0), 0.5);
        assert_eq!(state.value_percent(-5.0), 0.0);
        assert_eq!(state.value_percent(500.0), 1.0);
    }

    #[test]
    fn empty_range_maps_to_zero() {
        let state = SliderState::new(SliderStateArgs::new(1).range(5.0, 5.0)).unwrap();
        assert_eq!(state.value_percent(5.0), 0.0);
    }

    #[test]
    fn thumb_bounds_follow_neighbours() {
        let state =
            SliderState::new(SliderStateArgs::new(3).default_value(vec![10.0, 40.0, 90.0]))
                .unwrap();
        assert_eq!(state.thumb_min_value(0), 0.0);
        assert_eq!(state.thumb_max_value(0), 40.0);
        assert_eq!(state.thumb_min_value(1), 10.0);
        assert_eq!(state.thumb_max_value(1), 90.0);
        assert_eq!(state.thumb_max_value(2), 100.0);
    }

    #[test]
    fn uncontrolled_updates_snap_and_notify() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut state = SliderState::new(
            SliderStateArgs::new(1)
                .step(5.0)
                .on_change(move |values| sink.lock().push(values[0])),
        )
        .unwrap();

        state.set_thumb_value(0, 42.0);
        assert_eq!(state.thumb_value(0), 40.0);
        state.set_thumb_value(0, 41.0);
        state.set_thumb_value(0, 120.0);
        assert_eq!(state.thumb_value(0), 100.0);
        assert_eq!(*seen.lock(), vec![40.0, 100.0]);
    }

    #[test]
    fn controlled_reports_but_keeps_values() {
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        let mut state = SliderState::new(
            SliderStateArgs::new(1)
                .value(vec![30.0])
                .on_change(move |values| *sink.lock() = Some(values)),
        )
        .unwrap();

        state.set_thumb_value(0, 70.0);
        assert_eq!(state.thumb_value(0), 30.0);
        assert_eq!(seen.lock().clone(), Some(smallvec![70.0]));

        state.set_values(vec![70.0]).unwrap();
        assert_eq!(state.thumb_percent(0), 0.7);
    }

    #[test]
    fn fractional_steps_do_not_drift() {
        let mut state =
            SliderState::new(SliderStateArgs::new(1).range(0.0, 1.0).step(0.1)).unwrap();
        state.increment_thumb(0, 3);
        assert_eq!(state.thumb_value(0), 0.3);
        state.decrement_thumb(0, 1);
        assert_eq!(state.thumb_value(0), 0.2);
    }

    #[test]
    fn percent_moves_thumb() {
        let mut state = SliderState::new(SliderStateArgs::new(1)).unwrap();
        state.set_thumb_percent(0, 0.25);
        assert_eq!(state.thumb_value(0), 25.0);
    }

    #[test]
    fn disabled_ignores_updates() {
        let mut state = SliderState::new(SliderStateArgs::new(1).disabled(true)).unwrap();
        state.set_thumb_value(0, 50.0);
        assert_eq!(state.thumb_value(0), 0.0);
    }

    #[test]
    fn disabling_later_freezes_value() {
        let mut state = SliderState::new(SliderStateArgs::new(1)).unwrap();
        state.set_thumb_value(0, 30.0);
        state.set_disabled(true);
        assert!(state.is_disabled());
        state.set_thumb_value(0, 90.0);
        assert_eq!(state.thumb_value(0), 30.0);

        state.set_disabled(false);
        state.set_thumb_value(0, 90.0);
        assert_eq!(state.thumb_value(0), 90.0);
    }

    #[test]
    fn drag_end_fires_change_end() {
        let ended = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&ended);
        let mut state = SliderState::new(
            SliderStateArgs::new(1).on_change_end(move |_| *sink.lock() += 1),
        )
        .unwrap();

        state.set_thumb_dragging(0, true).unwrap();
        assert!(state.is_thumb_dragging(0));
        state.set_thumb_dragging(0, false).unwrap();
        assert!(!state.is_thumb_dragging(0));
        assert_eq!(*ended.lock(), 1);

        assert_eq!(
            state.set_thumb_dragging(3, true),
            Err(SliderStateError::ThumbOutOfBounds { index: 3, count: 1 })
        );
    }

    #[test]
    fn tick_percents_cover_both_ends() {
        let state = SliderState::new(SliderStateArgs::new(1)).unwrap();
        assert!(state.tick_percents(1).is_empty());
        assert_eq!(state.tick_percents(5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn multi_thumb_defaults_are_spread() {
        let state = SliderState::new(SliderStateArgs::new(3)).unwrap();
        assert_eq!(state.values().as_slice(), &[0.0, 50.0, 100.0]);
    }
}
