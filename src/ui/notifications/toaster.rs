// SPDX-License-Identifier: MPL-2.0
//! Toaster view rendering the store's open toasts.
//!
//! Toasts appear as small cards in the bottom-right corner with a
//! variant-colored border, an optional action button and a close button.
//! Closing toasts (`open == false`) are hidden while they wait for removal.

use super::store::ToastStore;
use super::toast::{Toast, ToastId, Variant};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, tooltip, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Messages emitted by the toaster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Close button pressed.
    Dismiss(ToastId),
    /// Action button pressed. Handled by whoever attached the action.
    Action(ToastId),
    /// Periodic tick firing due removals.
    Tick,
}

/// Rendering entry points for toasts.
pub struct Toaster;

impl Toaster {
    /// Renders a single toast card.
    pub fn view<'a>(toast: &Toast) -> Element<'a, Message> {
        let id = toast.id;
        let accent_color = variant_accent(toast.variant);

        let mut body = Column::new().spacing(spacing::XXS);
        if let Some(title) = &toast.title {
            body = body.push(
                Text::new(title.clone())
                    .size(typography::BODY_LG)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.palette().text),
                    }),
            );
        }
        if let Some(description) = &toast.description {
            body = body.push(
                Text::new(description.clone())
                    .size(typography::BODY_SM)
                    .style(|theme: &Theme| text::Style {
                        color: Some(Color {
                            a: opacity::OVERLAY_HOVER,
                            ..theme.palette().text
                        }),
                    }),
            );
        }

        // Layout: [title/description] [action] [close]
        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(body)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );

        if let Some(action) = &toast.action {
            let action_button: Element<'a, Message> =
                button(Text::new(action.label().to_owned()).size(typography::BODY_SM))
                    .on_press(Message::Action(id))
                    .padding([spacing::XXS, spacing::XS])
                    .style(move |theme: &Theme, status: button::Status| {
                        action_button_style(theme, status, accent_color)
                    })
                    .into();

            content = match action.alt_text() {
                Some(alt_text) => content.push(
                    tooltip(
                        action_button,
                        Text::new(alt_text.to_owned()).size(typography::CAPTION),
                        tooltip::Position::Top,
                    )
                    .gap(spacing::XXS)
                    .style(container::rounded_box),
                ),
                None => content.push(action_button),
            };
        }

        let dismiss_button = button(Text::new("×").size(typography::BODY))
            .on_press(Message::Dismiss(id))
            .padding(spacing::XXS)
            .style(dismiss_button_style);
        content = content.push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders the overlay with every open toast, stacked bottom-right.
    pub fn view_overlay<'a>(store: &ToastStore) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = visible_toasts(store)
            .iter()
            .map(|toast| Self::view(toast))
            .collect();

        if toasts.is_empty() {
            // Empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into()
        }
    }
}

/// Toasts that should be drawn, newest first.
fn visible_toasts(store: &ToastStore) -> Vec<Toast> {
    store
        .toasts()
        .into_iter()
        .filter(|toast| toast.open)
        .collect()
}

fn variant_accent(variant: Variant) -> Color {
    match variant {
        Variant::Default => palette::GRAY_400,
        Variant::Destructive => palette::ERROR_500,
    }
}

fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn action_button_style(theme: &Theme, status: button::Status, accent_color: Color) -> button::Style {
    let base = theme.extended_palette().background.base;
    let background = match status {
        button::Status::Hovered => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..accent_color
        })),
        button::Status::Pressed => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..accent_color
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let (background, text_color) = match status {
        button::Status::Active => (None, base.text),
        button::Status::Hovered => (
            Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            base.text,
        ),
        button::Status::Pressed => (
            Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            base.text,
        ),
        button::Status::Disabled => (
            None,
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
        ),
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
