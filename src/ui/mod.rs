pub mod main_window;
pub mod queue_view;
pub mod toast;
