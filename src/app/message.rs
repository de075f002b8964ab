// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The message draft was edited.
    DraftChanged(String),
    Notify,
    Alert,
    Confirm,
    /// A rendered notification-center node was pressed.
    Surface(ui::Message),
    Tick(Instant), // Drives pending notification timers
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Settings file to use instead of the per-user one.
    pub config_path: Option<PathBuf>,
}
