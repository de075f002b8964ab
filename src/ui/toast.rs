// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering notification nodes.
//!
//! Toasts are small cards anchored to the bottom-right corner. Each one is
//! lifted by the stacking offset stored on its node, and inactive toasts are
//! drawn faded until their activation timer fires.

use super::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use super::Message;
use crate::surface::{Class, Node, Tree, Visibility};
use iced::widget::{container, Container, Text};
use iced::{alignment, Background, Color, Element, Length, Padding, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single notification node.
    pub fn view(node: &Node) -> Element<'_, Message> {
        let active = matches!(node.class(), Class::Notification(Visibility::Active));

        let message_widget = Text::new(node.text())
            .size(typography::BODY)
            .width(Length::Fill);

        Container::new(message_widget)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, active))
            .into()
    }

    /// Renders one full-window layer per attached notification.
    ///
    /// Each layer anchors its toast bottom-right, lifted by the node offset.
    pub fn layers(tree: &Tree) -> Vec<Element<'_, Message>> {
        tree.roots_of(|class| matches!(class, Class::Notification(_)))
            .filter_map(|id| tree.node(id).map(Self::layer))
            .collect()
    }

    fn layer(node: &Node) -> Element<'_, Message> {
        Container::new(Self::view(node))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(Padding {
                top: 0.0,
                right: spacing::MD,
                bottom: spacing::MD + node.offset() as f32,
                left: 0.0,
            })
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .into()
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, active: bool) -> container::Style {
    let alpha = if active {
        opacity::OPAQUE
    } else {
        opacity::TOAST_INACTIVE
    };
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(Background::Color(Color { a: alpha, ..base.color })),
        border: iced::Border {
            color: Color {
                a: alpha,
                ..palette::INFO_500
            },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: if active { shadow::MD } else { shadow::NONE },
        text_color: Some(Color { a: alpha, ..base.text }),
        ..Default::default()
    }
}
