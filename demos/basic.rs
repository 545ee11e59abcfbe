//! Standalone demo: opens a window with the color editor.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_chroma::{chroma_picker, ChromaColor};

fn main() {
    let color = RwSignal::new(ChromaColor::from_hex("3b82f6").unwrap());

    floem::Application::new()
        .window(
            move |_| {
                chroma_picker(color).on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((232.0, 480.0))
                    .title("floem-chroma"),
            ),
        )
        .run();
}
