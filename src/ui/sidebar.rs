// SPDX-License-Identifier: MPL-2.0
//! Navigation sidebar.
//!
//! The sidebar starts open. The header button toggles it; the close button,
//! the backdrop and Escape close it. On narrow windows it is drawn as a drawer
//! over the page, and picking a menu entry there also closes it.

use crate::app::Screen;
use crate::ui::design_tokens::{border, opacity, palette, radius, sizing, spacing, typography};
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// Entry of the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub title: &'static str,
    pub screen: Screen,
}

const MENU_ITEMS: [MenuItem; 3] = [
    MenuItem {
        title: "Dashboard",
        screen: Screen::Dashboard,
    },
    MenuItem {
        title: "Users",
        screen: Screen::Users,
    },
    MenuItem {
        title: "Sales",
        screen: Screen::Sales,
    },
];

/// Returns the navigation menu, in display order.
#[must_use]
pub fn menu_items() -> &'static [MenuItem] {
    &MENU_ITEMS
}

/// Messages emitted by the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Toggle,
    Close,
    Navigate(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Screen),
}

/// Open/closed state of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    is_open: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new(true)
    }
}

impl State {
    #[must_use]
    pub fn new(is_open: bool) -> Self {
        Self { is_open }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Applies a sidebar message and returns the event for the parent.
    pub fn update(&mut self, message: Message, is_drawer: bool) -> Event {
        match message {
            Message::Toggle => {
                self.toggle();
                Event::None
            }
            Message::Close => {
                self.close();
                Event::None
            }
            Message::Navigate(screen) => {
                if is_drawer {
                    self.close();
                }
                Event::Navigate(screen)
            }
        }
    }
}

/// Contextual data needed to render the sidebar.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext {
    pub current: Screen,
    /// Drawn as an overlay drawer with its own close button.
    pub is_drawer: bool,
}

/// Renders the sidebar panel.
pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let mut top = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(Text::new("Pet Manager").size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill));

    if ctx.is_drawer {
        top = top.push(
            button(Text::new("×").size(typography::TITLE_MD))
                .on_press(Message::Close)
                .padding(spacing::XXS)
                .style(|theme: &Theme, status: button::Status| {
                    menu_button_style(theme, status, false)
                }),
        );
    }

    let mut menu = Column::new().spacing(spacing::XXS).push(top);
    for item in menu_items() {
        let active = item.screen == ctx.current;
        menu = menu.push(
            button(Text::new(item.title).size(typography::BODY))
                .width(Length::Fill)
                .padding([spacing::XS, spacing::SM])
                .on_press(Message::Navigate(item.screen))
                .style(move |theme: &Theme, status: button::Status| {
                    menu_button_style(theme, status, active)
                }),
        );
    }

    Container::new(menu.padding(spacing::MD))
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(panel_style)
        .into()
}

/// Renders the translucent backdrop shown behind the sidebar drawer.
pub fn backdrop<'a>() -> Element<'a, Message> {
    button(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(0)
        .on_press(Message::Close)
        .style(|_theme: &Theme, _status: button::Status| button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            })),
            ..Default::default()
        })
        .into()
}

fn panel_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

fn menu_button_style(theme: &Theme, status: button::Status, active: bool) -> button::Style {
    let base = theme.extended_palette().background.base;
    let highlight = match (active, status) {
        (true, _) => Some(palette::PRIMARY_500),
        (false, button::Status::Hovered | button::Status::Pressed) => Some(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        }),
        (false, _) => None,
    };

    button::Style {
        background: highlight.map(Background::Color),
        text_color: if active { palette::WHITE } else { base.text },
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_open() {
        assert!(State::default().is_open());
    }

    #[test]
    fn toggle_flips_state() {
        let mut state = State::default();
        assert_eq!(state.update(Message::Toggle, false), Event::None);
        assert!(!state.is_open());
        state.update(Message::Toggle, false);
        assert!(state.is_open());
    }

    #[test]
    fn close_is_idempotent() {
        let mut state = State::default();
        state.update(Message::Close, false);
        state.update(Message::Close, false);
        assert!(!state.is_open());
    }

    #[test]
    fn toggle_after_close_reopens() {
        let mut state = State::default();
        state.update(Message::Toggle, false);
        state.update(Message::Close, false);
        assert!(!state.is_open());
        state.update(Message::Toggle, false);
        assert!(state.is_open());
    }

    #[test]
    fn navigate_in_drawer_closes_sidebar() {
        let mut state = State::default();
        let event = state.update(Message::Navigate(Screen::Users), true);
        assert_eq!(event, Event::Navigate(Screen::Users));
        assert!(!state.is_open());
    }

    #[test]
    fn navigate_beside_page_keeps_sidebar_open() {
        let mut state = State::default();
        state.update(Message::Navigate(Screen::Sales), false);
        assert!(state.is_open());
    }

    #[test]
    fn menu_lists_dashboard_users_sales() {
        let titles: Vec<&str> = menu_items().iter().map(|item| item.title).collect();
        assert_eq!(titles, vec!["Dashboard", "Users", "Sales"]);
    }

    #[test]
    fn active_menu_entry_is_highlighted() {
        let theme = Theme::Light;
        let active = menu_button_style(&theme, button::Status::Active, true);
        let idle = menu_button_style(&theme, button::Status::Active, false);
        assert!(active.background.is_some());
        assert!(idle.background.is_none());
    }
}
