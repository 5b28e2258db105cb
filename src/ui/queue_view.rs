use gtk4::prelude::*;
use gtk4 as gtk;

use crate::sink::TagManagerQueue;

pub fn show_text_window(parent: &gtk::Window, title: &str, text: &str) {
    let window = gtk::Window::builder()
        .title(title)
        .transient_for(parent)
        .modal(true)
        .default_width(520)
        .default_height(380)
        .build();

    let view = gtk::TextView::builder()
        .editable(false)
        .monospace(true)
        .wrap_mode(gtk::WrapMode::WordChar)
        .top_margin(12)
        .bottom_margin(12)
        .left_margin(12)
        .right_margin(12)
        .build();
    view.buffer().set_text(text);

    let scroller = gtk::ScrolledWindow::builder()
        .vexpand(true)
        .hexpand(true)
        .child(&view)
        .build();
    window.set_child(Some(&scroller));
    window.present();
}

pub fn queue_summary(queue: &TagManagerQueue, queue_name: &str) -> String {
    match queue.snapshot() {
        Some(entries) => format!(
            "{} entries in {}\n\n{}",
            entries.len(),
            queue_name,
            crate::utils::pretty_queue(&entries)
        ),
        None => format!("{queue_name} does not exist yet, the tag manager container has not been attached."),
    }
}

pub fn show_queue(parent: &gtk::Window, queue: &TagManagerQueue, queue_name: &str) {
    let text = queue_summary(queue, queue_name);
    show_text_window(parent, &format!("Queue {queue_name}"), &text);
}
