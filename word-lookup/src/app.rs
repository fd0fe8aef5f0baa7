use dictionary::{Dictionary, DictionaryError};
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::document::Document;
use crate::lookup::LookupTracker;
use crate::page::{render_page, PageContext};
use crate::render::{render_word, RenderOptions};
use crate::state::{reduce, UiAction, UiState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Rendered,
    NotFound,
    /// Any other failure; the banner shows this message.
    Failed(String),
    /// A newer submission started before this one finished.
    Superseded,
}

/// Owns the page: document, UI state and the lookup in flight.
pub struct App {
    dictionary: Dictionary,
    render_options: RenderOptions,
    fonts: Vec<String>,
    default_prefers_dark: bool,
    lookups: LookupTracker,
    document: Mutex<Document>,
    ui: Mutex<UiState>,
    query: Mutex<String>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            dictionary: Dictionary::with_base_url(config.dictionary.base_url.clone()),
            render_options: RenderOptions {
                source_base_url: config.dictionary.source_base_url.clone(),
            },
            fonts: config.ui.fonts.clone(),
            default_prefers_dark: config.ui.prefers_dark,
            lookups: LookupTracker::new(),
            document: Mutex::new(Document::new()),
            ui: Mutex::new(UiState::default()),
            query: Mutex::new(String::new()),
        }
    }

    /// Looks `word` up and updates the document, unless a newer lookup
    /// has started in the meantime.
    pub async fn submit(&self, word: &str) -> LookupOutcome {
        let dictionary = self.dictionary.clone();
        let owned = word.to_owned();
        let (id, task) = self
            .lookups
            .start(async move { dictionary.get_definition(&owned).await });
        info!(%id, word, "lookup submitted");

        let result = match task.await {
            Ok(result) => result,
            Err(error) if error.is_cancelled() => return LookupOutcome::Superseded,
            Err(error) => {
                warn!(%id, %error, "lookup task failed");
                let message = error.to_string();
                return self
                    .lookups
                    .finish(id, || {
                        self.document.lock().show_error(message.clone());
                        LookupOutcome::Failed(message)
                    })
                    .unwrap_or(LookupOutcome::Superseded);
            }
        };

        self.lookups
            .finish(id, || {
                let mut document = self.document.lock();
                *self.query.lock() = word.to_owned();
                self.apply(&mut document, word, result)
            })
            .unwrap_or(LookupOutcome::Superseded)
    }

    fn apply(
        &self,
        document: &mut Document,
        word: &str,
        result: Result<dictionary::Word, DictionaryError>,
    ) -> LookupOutcome {
        match result {
            Ok(entry) => {
                document.clear_error();
                document.clear_results();
                match render_word(&entry, &self.render_options) {
                    Ok(rendered) => {
                        info!(word = %entry.word, "rendered entry");
                        document.render_entry(rendered);
                        LookupOutcome::Rendered
                    }
                    Err(error) => {
                        warn!(word, %error, "entry could not be rendered");
                        document.show_error(error.to_string());
                        LookupOutcome::Failed(error.to_string())
                    }
                }
            }
            Err(error) if error.is_not_found() => {
                info!(word, "word not found");
                document.clear_results();
                document.show_error(error.to_string());
                LookupOutcome::NotFound
            }
            Err(error) => {
                warn!(word, %error, "lookup failed");
                document.clear_error();
                document.show_error(error.to_string());
                LookupOutcome::Failed(error.to_string())
            }
        }
    }

    /// Starts a fresh page: drops the lookup in flight, clears results and
    /// query, and re-seeds the UI state.
    pub fn load_page(&self, prefers_dark: Option<bool>) {
        self.lookups.cancel();
        *self.document.lock() = Document::new();
        self.query.lock().clear();
        *self.ui.lock() = UiState::default();
        self.init_theme(prefers_dark);
        debug!("page state reset");
    }

    /// Seeds the theme from the browser's preference, or the configured
    /// default when it sent none. Only the first call per page has an effect.
    pub fn init_theme(&self, prefers_dark: Option<bool>) {
        let prefers_dark = prefers_dark.unwrap_or(self.default_prefers_dark);
        self.dispatch(UiAction::InitTheme { prefers_dark });
    }

    pub fn toggle_theme(&self) {
        self.dispatch(UiAction::ToggleTheme);
    }

    pub fn set_font(&self, font: impl Into<String>) {
        self.dispatch(UiAction::SetFont(font.into()));
    }

    fn dispatch(&self, action: UiAction) {
        let mut ui = self.ui.lock();
        *ui = reduce(std::mem::take(&mut *ui), action);
    }

    pub fn ui_state(&self) -> UiState {
        self.ui.lock().clone()
    }

    pub fn document(&self) -> Document {
        self.document.lock().clone()
    }

    pub fn page(&self) -> String {
        let document = self.document.lock();
        let ui = self.ui.lock();
        let query = self.query.lock();
        render_page(&PageContext {
            document: &document,
            ui: &ui,
            fonts: &self.fonts,
            query: &query,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(&Config::default())
    }

    #[test]
    fn init_theme_uses_configured_default_without_hint() {
        let mut config = Config::default();
        config.ui.prefers_dark = true;
        let app = App::new(&config);
        app.init_theme(None);
        assert!(app.ui_state().dark_mode);
        app.init_theme(Some(false));
        assert!(app.ui_state().dark_mode);
    }

    #[test]
    fn theme_and_font_reach_the_page() {
        let app = app();
        app.init_theme(Some(false));
        app.toggle_theme();
        app.set_font("mono");
        let html = app.page();
        assert!(html.contains(r#"class="dark-mode""#));
        assert!(html.contains(r#"data-font="mono""#));
    }

    #[test]
    fn load_page_resets_everything_and_reseeds() {
        let app = app();
        app.init_theme(Some(true));
        app.toggle_theme();
        app.set_font("serif");
        *app.query.lock() = "hello".to_owned();
        app.document.lock().show_error("Word not Found!!!");

        app.load_page(Some(true));
        let ui = app.ui_state();
        assert!(ui.dark_mode);
        assert_eq!(ui.font_family, None);
        assert!(app.query.lock().is_empty());
        assert_eq!(app.document(), Document::new());

        app.load_page(None);
        assert!(!app.ui_state().dark_mode);
    }

    #[test]
    fn not_found_clears_results_and_shows_message() {
        let app = app();
        let mut document = Document::new();
        document.render_entry(crate::render::RenderedEntry {
            sections: vec![crate::view::Element::new("section")],
            source: crate::view::Element::new("section"),
        });
        let outcome = app.apply(&mut document, "zzzzz", Err(DictionaryError::NotFound));
        assert_eq!(outcome, LookupOutcome::NotFound);
        assert!(document.content().is_empty());
        assert!(document.source().is_none());
        assert_eq!(document.error().text, "Word not Found!!!");
        assert_eq!(document.error().opacity, 1);
    }

    #[test]
    fn entry_without_meanings_reports_instead_of_rendering() {
        let app = app();
        let mut document = Document::new();
        let entry = dictionary::Word {
            word: "hmm".into(),
            phonetic: None,
            phonetics: Vec::new(),
            meanings: Vec::new(),
        };
        let outcome = app.apply(&mut document, "hmm", Ok(entry));
        assert!(matches!(outcome, LookupOutcome::Failed(_)));
        assert!(document.content().is_empty());
        assert_eq!(document.error().opacity, 1);
    }
}
