// SPDX-License-Identifier: MPL-2.0
//! Alert and confirm dialogs.
//!
//! - [`window`] - `Window` built from a `Variant` and its `Actions`
//! - [`gate`] - `Gate`, the single slot for the open window

mod gate;
mod window;

pub use gate::Gate;
pub use window::{Actions, Callback, Variant, Window};
