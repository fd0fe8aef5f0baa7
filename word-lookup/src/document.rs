use crate::render::RenderedEntry;
use crate::view::Element;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorBanner {
    pub text: String,
    pub opacity: u8,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    content: Vec<Element>,
    source: Option<Element>,
    error: ErrorBanner,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = ErrorBanner {
            text: message.into(),
            opacity: 1,
        };
    }

    pub fn clear_error(&mut self) {
        self.error = ErrorBanner::default();
    }

    /// Removes rendered sections and the source section; a no-op when empty.
    pub fn clear_results(&mut self) {
        self.content.clear();
        self.source = None;
    }

    pub fn render_entry(&mut self, entry: RenderedEntry) {
        self.content.extend(entry.sections);
        self.source = Some(entry.source);
    }

    pub fn content(&self) -> &[Element] {
        &self.content
    }

    pub fn source(&self) -> Option<&Element> {
        self.source.as_ref()
    }

    pub fn error(&self) -> &ErrorBanner {
        &self.error
    }
}
