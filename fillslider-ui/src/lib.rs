//! Framework primitives shared by fillslider components.
//!
//! # Services
//!
//! Components never reach for ambient globals. Everything a build needs is
//! passed in explicitly and read once per build:
//!
//! - [`locale::LocaleService`] supplies the layout direction.
//! - [`hover::HoverService`] supplies the hover flag and the handlers that
//!   keep it current.
//! - [`slider_state::SliderEngine`] supplies thumb positions, bounds and drag
//!   state.
//!
//! # Callbacks
//!
//! [`Callback`] and [`CallbackWith`] compare by identity so they can live in
//! `PartialEq` argument structs.
//!
//! ```
//! use fillslider_ui::CallbackWith;
//!
//! let on_change = CallbackWith::new(|value: f64| println!("value: {value}"));
//! let same = on_change.clone();
//! assert!(on_change == same);
//! on_change.call(0.5);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod event;
pub mod hover;
pub mod locale;
pub mod prop;
pub mod slider_state;

pub use event::EventProps;
pub use hover::{HoverService, HoverState, NoHover};
pub use locale::{LayoutDirection, Locale, LocaleHandle, LocaleService, Side};
pub use prop::{Callback, CallbackWith};
pub use slider_state::{
    SliderEngine, SliderState, SliderStateArgs, SliderStateError, ThumbValues,
};
