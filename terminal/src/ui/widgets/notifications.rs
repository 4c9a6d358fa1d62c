//! # Notifications Widget
//!
//! Toast notification system using egui-notify for transaction lifecycle
//! updates (sent, confirmed, failed).

use egui_notify::Toasts;

use crate::app::NoticeLevel;

/// Notification manager for the application.
pub struct NotificationManager {
    /// Toast notification system.
    pub toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self {
            toasts: Toasts::default(),
        }
    }
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one toast at the given level.
    pub fn push(&mut self, level: NoticeLevel, message: String) {
        match level {
            NoticeLevel::Info => {
                self.toasts.info(message);
            }
            NoticeLevel::Success => {
                self.toasts.success(message);
            }
            NoticeLevel::Warning => {
                self.toasts.warning(message);
            }
            NoticeLevel::Error => {
                self.toasts.error(message);
            }
        }
    }

    /// Render queued notifications in the UI context.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
