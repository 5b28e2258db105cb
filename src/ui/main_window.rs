use adw::prelude::*;
use adw::Application;
use gtk4 as gtk;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::app::AppConfig;
use crate::events::EventDraft;
use crate::pipeline::SubmissionPipeline;
use crate::sink::TagManagerQueue;
use crate::ui::toast::ToastNotifier;

pub fn show_main_window(app: &Application, config: &AppConfig) {
    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("Synthetic Events")
        .default_width(640)
        .default_height(480)
        .build();

    let toast_overlay = adw::ToastOverlay::new();

    let root = gtk::Box::new(gtk::Orientation::Vertical, 12);
    root.set_margin_top(24);
    root.set_margin_bottom(24);
    root.set_margin_start(24);
    root.set_margin_end(24);

    let title = gtk::Label::new(Some("Input data for synthetic events"));
    title.add_css_class("title-2");
    title.set_halign(gtk::Align::Start);
    root.append(&title);

    let hint = gtk::Label::new(Some(
        "This will be used as the name of the event to identify it in Tag Manager",
    ));
    hint.add_css_class("dim-label");
    hint.set_halign(gtk::Align::Start);
    hint.set_wrap(true);
    root.append(&hint);

    let name_label = gtk::Label::new(Some("Event name"));
    name_label.add_css_class("heading");
    name_label.set_halign(gtk::Align::Start);
    let name_entry = gtk::Entry::new();
    name_entry.set_placeholder_text(Some("pageView"));
    name_entry.set_hexpand(true);

    let payload_label = gtk::Label::new(Some("Event params"));
    payload_label.add_css_class("heading");
    payload_label.set_halign(gtk::Align::Start);
    let payload_view = gtk::TextView::builder()
        .monospace(true)
        .wrap_mode(gtk::WrapMode::WordChar)
        .top_margin(6)
        .bottom_margin(6)
        .left_margin(6)
        .right_margin(6)
        .build();
    let payload_scroller = gtk::ScrolledWindow::builder()
        .min_content_height(120)
        .vexpand(true)
        .child(&payload_view)
        .build();
    let payload_frame = gtk::Frame::new(None);
    payload_frame.set_child(Some(&payload_scroller));

    let form = gtk::Box::new(gtk::Orientation::Vertical, 8);
    form.append(&name_label);
    form.append(&name_entry);
    form.append(&payload_label);
    form.append(&payload_frame);
    root.append(&form);

    let submit_btn = gtk::Button::with_label("Submit");
    submit_btn.add_css_class("suggested-action");
    submit_btn.set_halign(gtk::Align::End);
    root.append(&submit_btn);

    toast_overlay.set_child(Some(&root));
    let container = gtk::Box::new(gtk::Orientation::Vertical, 0);
    let header = adw::HeaderBar::new();
    let header_title = gtk::Label::new(Some("Synthetic Events"));
    header.set_title_widget(Some(&header_title));
    let inspect_btn = gtk::Button::with_label("Inspect queue");
    header.pack_end(&inspect_btn);
    container.append(&header);
    container.append(&toast_overlay);
    window.set_content(Some(&container));

    // Keep the draft in sync with the widgets on every keystroke
    let draft = Rc::new(RefCell::new(EventDraft::default()));
    {
        let draft = draft.clone();
        name_entry.connect_changed(move |entry| {
            draft.borrow_mut().event_name = entry.text().to_string();
        });
    }
    {
        let draft = draft.clone();
        payload_view.buffer().connect_changed(move |buffer| {
            let (start, end) = buffer.bounds();
            draft.borrow_mut().event_payload = buffer.text(&start, &end, false).to_string();
        });
    }

    let queue = TagManagerQueue::absent();
    let parent = window.upcast_ref::<gtk::Window>().clone();
    let pipeline = SubmissionPipeline::new(queue.clone(), ToastNotifier::new(&toast_overlay, &parent));

    let on_submit = {
        let name_entry = name_entry.clone();
        let payload_view = payload_view.clone();
        move || {
            let outcome = pipeline.submit(&mut draft.borrow_mut());
            // the draft borrow must be released before the widgets fire `changed`
            if outcome.cleared_draft() {
                name_entry.set_text("");
                payload_view.buffer().set_text("");
            }
        }
    };

    let on_submit: Rc<dyn Fn()> = Rc::new(on_submit);
    {
        let on_submit = on_submit.clone();
        submit_btn.connect_clicked(move |_| (on_submit)());
    }
    {
        let on_submit = on_submit.clone();
        name_entry.connect_activate(move |_| (on_submit)());
    }

    {
        let queue = queue.clone();
        let queue_name = config.queue_name.clone();
        inspect_btn.connect_clicked(move |_| {
            crate::ui::queue_view::show_queue(&parent, &queue, &queue_name);
        });
    }

    // The container creates the queue some time after the window shows up
    {
        let container_url = config.container_url.clone();
        glib::timeout_add_local_once(Duration::from_millis(config.bootstrap_delay_ms), move || {
            crate::bootstrap::install_container(&queue, &container_url, crate::utils::epoch_millis());
        });
    }

    window.present();
}
