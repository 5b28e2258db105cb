use adw::prelude::*;
use gtk4 as gtk;

use crate::notify::{Notification, Notifier, TOAST_OPTIONS, ToastPosition, ToastTheme};

pub fn apply_theme() {
    let scheme = match TOAST_OPTIONS.theme {
        ToastTheme::Dark => adw::ColorScheme::ForceDark,
    };
    adw::StyleManager::default().set_color_scheme(scheme);
}

/// Shows notifications as adw toasts.
#[derive(Clone)]
pub struct ToastNotifier {
    overlay: adw::ToastOverlay,
    parent: gtk::Window,
}

impl ToastNotifier {
    pub fn new(overlay: &adw::ToastOverlay, parent: &gtk::Window) -> Self {
        // adw::ToastOverlay owns placement and has no drag support
        if TOAST_OPTIONS.position != ToastPosition::TopRight || TOAST_OPTIONS.draggable {
            log::debug!(
                "toast position {:?} and dragging are fixed by the overlay",
                TOAST_OPTIONS.position
            );
        }
        Self {
            overlay: overlay.clone(),
            parent: parent.clone(),
        }
    }
}

impl Notifier for ToastNotifier {
    fn show(&self, notification: Notification) {
        // toast titles are parsed as markup
        let title = glib::markup_escape_text(&notification.message);
        let priority = if notification.is_error() {
            adw::ToastPriority::High
        } else {
            adw::ToastPriority::Normal
        };
        let toast = adw::Toast::builder()
            .title(title.as_str())
            .timeout(crate::utils::toast_timeout_secs(notification.auto_dismiss_ms))
            .priority(priority)
            .build();

        toast.set_button_label(button_label(&notification));
        if let Some(detail) = notification.detail {
            let parent = self.parent.clone();
            toast.connect_button_clicked(move |_| {
                crate::ui::queue_view::show_text_window(&parent, "Submitted event", &detail);
            });
        }

        self.overlay.add_toast(toast);
    }
}

/// Clicking a toast button also dismisses the toast.
fn button_label(notification: &Notification) -> Option<&'static str> {
    if notification.detail.is_some() {
        Some("Details")
    } else if TOAST_OPTIONS.close_on_click {
        Some("Dismiss")
    } else {
        None
    }
}
