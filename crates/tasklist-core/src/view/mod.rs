//! View Layer
//!
//! Reconciles the task collection into a view model and hands it to a
//! `Renderer`. Any UI toolkit implements `Renderer`; nothing here knows
//! about the DOM.

mod list_view;

pub use list_view::{ListView, TaskRow};

/// Receives a fully reconciled view after every change
pub trait Renderer {
    fn render(&mut self, view: ListView);
}

/// Renderer that keeps every view it was given
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<ListView>,
}

impl RecordingRenderer {
    pub fn last(&self) -> Option<&ListView> {
        self.frames.last()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, view: ListView) {
        self.frames.push(view);
    }
}
