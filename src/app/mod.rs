// SPDX-License-Identifier: MPL-2.0
//! Demo application showing the notification center inside an iced window.
//!
//! The `App` owns a `Herald` bound to a [`Tree`] surface and a [`TimerQueue`].
//! Buttons trigger notifications and dialogs, a tick subscription advances
//! the timers while any are pending, and dialog outcomes are reported back as
//! notifications.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::surface::Tree;
use crate::timer::TimerQueue;
use crate::ui::{self, design_tokens::spacing};
use crate::Herald;
use iced::widget::{button, text_input, Column, Container, Row, Stack, Text};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Instant;

const DEFAULT_DRAFT: &str = "Hello from Herald";

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;

/// Root iced application state.
pub struct App {
    herald: Herald<Tree, TimerQueue>,
    draft: String,
    /// Instant of the previous tick, `None` while the timers are idle.
    last_tick: Option<Instant>,
    /// Dialog outcomes not yet reported.
    outcomes: Rc<RefCell<Vec<bool>>>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("notifications", &self.herald.notifications().len())
            .field("modal_open", &self.herald.is_modal_open())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let config = load_config(&flags);
    let boot = move || App::new(config.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

fn load_config(flags: &Flags) -> Config {
    let loaded = match &flags.config_path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    loaded.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "using default settings");
        Config::default()
    })
}

impl App {
    fn new(config: Config) -> (Self, Task<Message>) {
        let app = Self {
            herald: Herald::new(config, Tree::new(), TimerQueue::new()),
            draft: DEFAULT_DRAFT.to_string(),
            last_tick: None,
            outcomes: Rc::new(RefCell::new(Vec::new())),
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Herald")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(!self.herald.timers().is_idle())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DraftChanged(draft) => {
                self.draft = draft;
            }
            Message::Notify => {
                self.herald.notify(&self.draft);
            }
            Message::Alert => {
                let sink = Rc::clone(&self.outcomes);
                let shown = self
                    .herald
                    .alert(self.draft.clone(), move |accepted| {
                        sink.borrow_mut().push(accepted);
                    });
                if !shown {
                    self.herald.notify("A dialog is already open");
                }
            }
            Message::Confirm => {
                let sink = Rc::clone(&self.outcomes);
                let shown = self
                    .herald
                    .confirm(self.draft.clone(), move |accepted| {
                        sink.borrow_mut().push(accepted);
                    });
                if !shown {
                    self.herald.notify("A dialog is already open");
                }
            }
            Message::Surface(ui::Message::Pressed(node)) => {
                self.herald.interact(node);
                self.report_outcomes();
            }
            Message::Tick(now) => {
                let elapsed = self
                    .last_tick
                    .map(|previous| now.saturating_duration_since(previous))
                    .unwrap_or_default();
                self.last_tick = Some(now);
                self.herald.advance(elapsed);
            }
        }

        // Idle time must not count against the next notification.
        if self.herald.timers().is_idle() {
            self.last_tick = None;
        }
        Task::none()
    }

    fn report_outcomes(&mut self) {
        let outcomes: Vec<bool> = self.outcomes.borrow_mut().drain(..).collect();
        for accepted in outcomes {
            self.herald
                .notify(if accepted { "Accepted" } else { "Refused" });
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let controls = Row::new()
            .spacing(spacing::XS)
            .push(button(Text::new("Notify")).on_press(Message::Notify))
            .push(button(Text::new("Alert")).on_press(Message::Alert))
            .push(button(Text::new("Confirm")).on_press(Message::Confirm));

        let content = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(
                text_input("Message", &self.draft)
                    .on_input(Message::DraftChanged)
                    .on_submit(Message::Notify),
            )
            .push(controls);

        Stack::new()
            .push(
                Container::new(content)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .push(ui::view(self.herald.surface()).map(Message::Surface))
            .into()
    }
}
