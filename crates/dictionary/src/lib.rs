use dictionary_api::get_definition;
use thiserror::Error;

mod dictionary;
mod dictionary_api;

pub use dictionary::{PartOfSpeech, Phonetic, Word, WordDefinition, WordMeaning};
pub use dictionary_api::DICTIONARY_API_URL;

/// Message shown for any word the service does not know.
pub const NOT_FOUND_MESSAGE: &str = "Word not Found!!!";

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,
    #[error("{0}")]
    Fetch(reqwest::Error),
    #[error("{0}")]
    Deserialize(reqwest::Error),
    #[error("The dictionary returned no entries")]
    Empty,
}

impl DictionaryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DictionaryError::NotFound)
    }
}

#[derive(Clone)]
pub struct Dictionary {
    client: reqwest::Client,
    base_url: String,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::with_base_url(DICTIONARY_API_URL)
    }

    /// Points the client at another deployment of the entries endpoint.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Looks a word up and returns the first entry of the response.
    ///
    /// The word is sent as typed; the service decides whether it is valid.
    pub async fn get_definition(&self, word: &str) -> Result<Word, DictionaryError> {
        get_definition(&self.client, &self.base_url, word).await
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
