// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::browser;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Browser(browser::Message),
}

impl From<browser::Message> for Message {
    fn from(message: browser::Message) -> Self {
        Message::Browser(message)
    }
}

/// Runtime flags passed in from the launcher.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g., `fr`).
    pub lang: Option<String>,
    /// Optional config directory override (`--config-dir`).
    pub config_dir: Option<String>,
    /// Optional API access key (`--access-key`), beats env and config.
    pub access_key: Option<String>,
    /// Optional API base URL (`--base-url`), beats config.
    pub base_url: Option<String>,
}
