// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Desktop notification adapter using notify-rust (freedesktop D-Bus).

use super::{NotifyAdapter, NotifyError};
use async_trait::async_trait;

const DEFAULT_APP_NAME: &str = "proton-launch";

#[derive(Clone, Debug)]
pub struct DesktopNotifyAdapter {
    app_name: String,
}

impl Default for DesktopNotifyAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopNotifyAdapter {
    pub fn new() -> Self {
        Self::with_app_name(DEFAULT_APP_NAME)
    }

    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }
}

#[async_trait]
impl NotifyAdapter for DesktopNotifyAdapter {
    async fn notify(&self, title: &str, message: &str) -> Result<(), NotifyError> {
        let app_name = self.app_name.clone();
        let title = title.to_string();
        let message = message.to_string();
        // D-Bus delivery blocks; fire and forget on the blocking pool
        tokio::task::spawn_blocking(move || {
            tracing::info!(%title, %message, "sending desktop notification");
            match notify_rust::Notification::new()
                .appname(&app_name)
                .summary(&title)
                .body(&message)
                .show()
            {
                Ok(_) => {
                    tracing::debug!(%title, "desktop notification sent");
                }
                Err(e) => {
                    tracing::warn!(%title, error = %e, "desktop notification failed");
                }
            }
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "desktop_tests.rs"]
mod tests;
