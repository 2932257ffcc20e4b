// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::config::TOAST_TICK_INTERVAL_MS;
use super::Message;
use crate::ui::notifications::ToasterMessage;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Routes Escape (when no widget captured it) and window resizes.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) if matches!(status, event::Status::Ignored) => Some(Message::EscapePressed),
        event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(size.width))
        }
        _ => None,
    })
}

/// Periodic tick driving toast removal. Only subscribed while removals are pending.
pub fn create_tick_subscription() -> Subscription<Message> {
    time::every(Duration::from_millis(TOAST_TICK_INTERVAL_MS))
        .map(|_| Message::Toaster(ToasterMessage::Tick))
}
