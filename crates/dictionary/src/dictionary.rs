use std::fmt;

/// The first entry the dictionary service returns for a word.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub word: String,
    pub phonetic: Option<String>,
    pub phonetics: Vec<Phonetic>,
    pub meanings: Vec<WordMeaning>,
}

impl Word {
    /// The phonetic entry shown next to the word, the first one the service lists.
    pub fn primary_phonetic(&self) -> Option<&Phonetic> {
        self.phonetics.first()
    }

    /// Transcription text for the header, falling back to the entry level `phonetic`.
    pub fn phonetic_text(&self) -> Option<&str> {
        self.primary_phonetic()
            .and_then(|phonetic| phonetic.text.as_deref())
            .or(self.phonetic.as_deref())
            .filter(|text| !text.is_empty())
    }

    pub fn audio_url(&self) -> Option<&str> {
        self.primary_phonetic()
            .and_then(|phonetic| phonetic.audio.as_deref())
            .filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Phonetic {
    pub text: Option<String>,
    pub audio: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordMeaning {
    pub part_of_speech: PartOfSpeech,
    pub definitions: Vec<WordDefinition>,
    pub synonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Pronoun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Interjection,
    /// A label the service sent that is not one of the above, kept verbatim.
    Other(String),
}

impl PartOfSpeech {
    pub fn from_label(label: &str) -> Self {
        match label {
            "noun" => PartOfSpeech::Noun,
            "pronoun" => PartOfSpeech::Pronoun,
            "verb" => PartOfSpeech::Verb,
            "adjective" => PartOfSpeech::Adjective,
            "adverb" => PartOfSpeech::Adverb,
            "preposition" => PartOfSpeech::Preposition,
            "conjunction" => PartOfSpeech::Conjunction,
            "interjection" => PartOfSpeech::Interjection,
            other => PartOfSpeech::Other(other.to_owned()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Interjection => "interjection",
            PartOfSpeech::Other(label) => label,
        }
    }

    /// Whether the widget has a synonyms slot for this part of speech.
    pub fn has_synonym_slot(&self) -> bool {
        matches!(
            self,
            PartOfSpeech::Noun
                | PartOfSpeech::Verb
                | PartOfSpeech::Interjection
                | PartOfSpeech::Adjective
                | PartOfSpeech::Adverb
                | PartOfSpeech::Conjunction
        )
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordDefinition {
    pub definition: String,
    pub example: Option<String>,
}
