// SPDX-License-Identifier: MPL-2.0
//! `herald` is a small notification center for graphical interfaces.
//!
//! It stacks transient, self-expiring toast notifications and shows at most
//! one blocking alert or confirm dialog at a time. The logic runs against a
//! pluggable [`surface::Surface`] and [`timer::Timers`] pair; an in-memory
//! [`surface::Tree`] and a deterministic [`timer::TimerQueue`] are provided,
//! together with an iced renderer in [`ui`].
//!
//! ```
//! use herald::{config::Config, surface::Tree, timer::TimerQueue, Herald};
//! use std::time::Duration;
//!
//! let mut herald = Herald::new(Config::default(), Tree::new(), TimerQueue::new());
//! herald.notify("Image saved");
//! assert!(herald.confirm("Discard changes?", |accepted| println!("{accepted}")));
//! assert!(!herald.alert("Busy", |_| {}));
//!
//! herald.advance(Duration::from_secs(5));
//! assert!(herald.notifications().is_empty());
//! ```

pub mod app;
pub mod center;
pub mod config;
pub mod error;
pub mod modal;
pub mod notifications;
pub mod surface;
pub mod timer;
pub mod ui;

pub use center::Herald;
