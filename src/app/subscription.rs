// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::browser;
use iced::Subscription;

/// Routes browser subscriptions (window size, spinner frames) to the app.
pub fn create_browser_subscription(state: &browser::State) -> Subscription<Message> {
    browser::subscription(state).map(Message::Browser)
}
