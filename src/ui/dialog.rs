// SPDX-License-Identifier: MPL-2.0
//! Dialog rendering for modal overlay nodes.
//!
//! The overlay covers the whole window with a dimmed backdrop and centers
//! the window container on it. Every node inside reports presses as
//! [`Message::Pressed`], so the notification center decides what a press
//! means.

use super::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use super::Message;
use crate::surface::{Class, NodeId, Tree};
use iced::widget::{button, container, mouse_area, opaque, Column, Container, Row, Text};
use iced::{alignment, Background, Color, Element, Length, Theme};

/// Renders one layer per attached overlay.
pub fn layers(tree: &Tree) -> Vec<Element<'_, Message>> {
    tree.roots_of(|class| class == Class::Overlay)
        .map(|id| opaque(node(tree, id)))
        .collect()
}

fn children(tree: &Tree, id: NodeId) -> Vec<Element<'_, Message>> {
    tree.node(id)
        .map(|n| n.children().iter().map(|&child| node(tree, child)).collect())
        .unwrap_or_default()
}

fn node(tree: &Tree, id: NodeId) -> Element<'_, Message> {
    let Some(current) = tree.node(id) else {
        return Column::new().into();
    };

    match current.class() {
        Class::Overlay => Container::new(Column::with_children(children(tree, id)))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(backdrop_style)
            .into(),
        Class::Window => Container::new(
            Column::with_children(children(tree, id)).spacing(spacing::LG),
        )
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::LG)
        .style(window_style)
        .into(),
        Class::Content => mouse_area(
            Text::new(current.text())
                .size(typography::BODY_LG)
                .width(Length::Fill),
        )
        .on_press(Message::Pressed(id))
        .into(),
        Class::ActionBar => Container::new(
            Row::with_children(children(tree, id)).spacing(spacing::XS),
        )
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .into(),
        Class::Button => button(Text::new(current.text()).size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .on_press(Message::Pressed(id))
            .style(action_button_style)
            .into(),
        Class::Notification(_) => Text::new(current.text()).into(),
    }
}

/// Style for the backdrop (semi-transparent overlay).
fn backdrop_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Style for the window container (the dialog box itself).
fn window_style(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(Background::Color(base.color)),
        border: iced::Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        text_color: Some(base.text),
        ..Default::default()
    }
}

/// Style for the accept and refuse controls.
fn action_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_600,
        button::Status::Active => palette::PRIMARY_500,
        button::Status::Disabled => Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::PRIMARY_500
        },
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::timer::TimerQueue;
    use crate::Herald;

    #[test]
    fn one_layer_per_open_dialog() {
        let mut herald = Herald::new(Config::default(), Tree::new(), TimerQueue::new());
        assert!(layers(herald.surface()).is_empty());

        herald.confirm("Quit?", |_| {});
        herald.notify("toasts are not dialogs");

        assert_eq!(layers(herald.surface()).len(), 1);
    }

    #[test]
    fn hovered_button_is_darker() {
        let theme = Theme::Light;
        let active = action_button_style(&theme, button::Status::Active);
        let hovered = action_button_style(&theme, button::Status::Hovered);

        assert_ne!(active.background, hovered.background);
        assert_eq!(active.text_color, palette::WHITE);
    }
}
