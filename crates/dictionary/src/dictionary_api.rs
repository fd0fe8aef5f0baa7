// https://dictionaryapi.dev/ - free, no key, returns an array of homograph entries per word

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Deserialize;
use tracing::debug;

use crate::{DictionaryError, PartOfSpeech, Phonetic, Word, WordDefinition, WordMeaning};

pub const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Characters that cannot appear verbatim inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Deserialize)]
struct ApiWord {
    word: String,
    #[serde(default)]
    phonetic: Option<String>,
    #[serde(default)]
    phonetics: Vec<ApiPhonetic>,
    #[serde(default)]
    meanings: Vec<ApiMeaning>,
}

#[derive(Debug, Deserialize)]
struct ApiPhonetic {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    audio: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiMeaning {
    part_of_speech: String,
    #[serde(default)]
    definitions: Vec<ApiDefinition>,
    #[serde(default)]
    synonyms: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ApiDefinition {
    definition: String,
    #[serde(default)]
    example: Option<String>,
}

impl From<ApiWord> for Word {
    fn from(value: ApiWord) -> Self {
        Word {
            word: value.word,
            phonetic: value.phonetic,
            phonetics: value.phonetics.into_iter().map(Phonetic::from).collect(),
            meanings: value.meanings.into_iter().map(WordMeaning::from).collect(),
        }
    }
}

impl From<ApiPhonetic> for Phonetic {
    fn from(value: ApiPhonetic) -> Self {
        Phonetic {
            text: value.text,
            audio: value.audio,
        }
    }
}

impl From<ApiMeaning> for WordMeaning {
    fn from(value: ApiMeaning) -> Self {
        WordMeaning {
            part_of_speech: PartOfSpeech::from_label(&value.part_of_speech),
            definitions: value
                .definitions
                .into_iter()
                .map(|definition| WordDefinition {
                    definition: definition.definition,
                    example: definition.example,
                })
                .collect(),
            synonyms: value.synonyms,
        }
    }
}

pub(crate) fn entry_url(base_url: &str, word: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        utf8_percent_encode(word, PATH_SEGMENT)
    )
}

pub(crate) async fn get_definition(
    client: &reqwest::Client,
    base_url: &str,
    word: &str,
) -> Result<Word, DictionaryError> {
    let url = entry_url(base_url, word);
    debug!(%url, "requesting dictionary entry");
    let res = client
        .get(&url)
        .send()
        .await
        .map_err(DictionaryError::Fetch)?;
    if !res.status().is_success() {
        debug!(status = %res.status(), word, "dictionary has no entry");
        return Err(DictionaryError::NotFound);
    }
    let entries = res
        .json::<Vec<ApiWord>>()
        .await
        .map_err(DictionaryError::Deserialize)?;
    entries
        .into_iter()
        .next()
        .map(Word::from)
        .ok_or(DictionaryError::Empty)
}
