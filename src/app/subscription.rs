// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Frame interval of the animation tick (about 60 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Window resizes update the viewport used by the scroll reveal.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(window::Event::Resized(size)) = event {
            return Some(Message::WindowResized(size));
        }
        None
    })
}

/// Ticks every frame while an animation is running, and not at all otherwise.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
