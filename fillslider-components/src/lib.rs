//! Components for fillslider.
//!
//! # Example
//!
//! ```
//! use fillslider_components::slider::{SliderArgs, SliderController};
//! use fillslider_ui::Locale;
//!
//! let args = SliderArgs::default()
//!     .default_value(25.0)
//!     .label("Balance")
//!     .on_change(|value| println!("balance: {value}"));
//! let controller = SliderController::new(&args)?;
//!
//! let output = controller.build(&args, &Locale::new("fa-IR"));
//! assert_eq!(output.handle().map(|h| h.style.to_string()).as_deref(), Some("right: 25%;"));
//! # Ok::<(), fillslider_ui::SliderStateError>(())
//! ```
#![deny(missing_docs, clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod slider;
