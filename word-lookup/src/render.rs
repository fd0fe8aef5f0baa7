//! Turns a dictionary entry into view sections.

use dictionary::{PartOfSpeech, Word, WordDefinition, WordMeaning};
use thiserror::Error;

use crate::audio::play_audio;
use crate::view::{Element, ViewNode};

/// Parts of speech shown per entry; later groups are dropped.
pub const MAX_GROUPS: usize = 3;
pub const SOURCE_BASE_URL: &str = "https://en.wiktionary.org/wiki";
pub const NEW_WINDOW_ICON: &str = "./assets/img/icon-new-window.svg";

const PLAY_ICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="75" height="75" viewBox="0 0 75 75"><g fill="#A445ED" fill-rule="evenodd"><circle cx="37.5" cy="37.5" r="37.5" opacity=".25"/><path d="M29 27v21l21-10.5z"/></g></svg>"##;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("No definitions available for \"{0}\"")]
    NoMeanings(String),
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub source_base_url: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            source_base_url: SOURCE_BASE_URL.to_owned(),
        }
    }
}

/// Sections for the content region plus the source section that goes after it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedEntry {
    pub sections: Vec<Element>,
    pub source: Element,
}

/// Every definition and synonym the entry lists under one part of speech.
#[derive(Debug, PartialEq)]
pub struct MeaningGroup<'a> {
    pub part_of_speech: &'a PartOfSpeech,
    pub definitions: Vec<&'a WordDefinition>,
    pub synonyms: Vec<&'a str>,
}

pub fn render_word(word: &Word, options: &RenderOptions) -> Result<RenderedEntry, RenderError> {
    let groups = select_groups(&word.meanings);
    if groups.is_empty() {
        return Err(RenderError::NoMeanings(word.word.clone()));
    }
    let mut sections = Vec::with_capacity(groups.len() + 1);
    sections.push(render_header(word));
    sections.extend(groups.iter().map(render_group));
    Ok(RenderedEntry {
        sections,
        source: render_source(&word.word, options),
    })
}

/// Groups meanings by their part of speech in order of first appearance and
/// keeps the first [`MAX_GROUPS`].
pub fn select_groups(meanings: &[WordMeaning]) -> Vec<MeaningGroup<'_>> {
    let mut groups: Vec<MeaningGroup<'_>> = Vec::new();
    for meaning in meanings {
        let existing = groups
            .iter()
            .position(|group| *group.part_of_speech == meaning.part_of_speech);
        let group = match existing {
            Some(index) => &mut groups[index],
            None => {
                groups.push(MeaningGroup {
                    part_of_speech: &meaning.part_of_speech,
                    definitions: Vec::new(),
                    synonyms: Vec::new(),
                });
                let last = groups.len() - 1;
                &mut groups[last]
            }
        };
        group.definitions.extend(meaning.definitions.iter());
        group
            .synonyms
            .extend(meaning.synonyms.iter().map(String::as_str));
    }
    groups.truncate(MAX_GROUPS);
    groups
}

fn render_header(word: &Word) -> Element {
    let audio = Element::new("button")
        .class("word__audio")
        .class("play")
        .attr("type", "button")
        .attr("onclick", play_audio(word.audio_url().unwrap_or_default()))
        .hidden(word.audio_url().is_none())
        .child(ViewNode::Raw(PLAY_ICON.to_owned()));
    Element::new("section")
        .class("word")
        .child(
            Element::new("div")
                .child(Element::new("h3").class("word__heading").text(&word.word))
                .child(
                    Element::new("p")
                        .class("word__phonetics")
                        .text(word.phonetic_text().unwrap_or_default()),
                ),
        )
        .child(audio)
}

/// Section for one part of speech: heading, definitions and synonyms.
pub fn render_group(group: &MeaningGroup<'_>) -> Element {
    let label = group.part_of_speech.label();
    Element::new("section")
        .class("word__definition")
        .class(css_ident(label))
        .child(
            Element::new("div")
                .class("hr__con")
                .child(Element::new("h4").class("word__definition__heading").text(label))
                .child(Element::new("span").class("hr")),
        )
        .child(Element::new("p").class("meaning").text("Meaning"))
        .child(
            Element::new("ul")
                .class("word__definition__list")
                .children(render_definitions(group)),
        )
        .child(render_synonyms(group))
}

fn render_definitions(group: &MeaningGroup<'_>) -> Vec<Element> {
    let show_examples = *group.part_of_speech != PartOfSpeech::Noun;
    group
        .definitions
        .iter()
        .map(|definition| {
            let item = Element::new("li").text(&definition.definition);
            if show_examples {
                item.child(
                    Element::new("p")
                        .class("word__example")
                        .text(definition.example.as_deref().unwrap_or_default()),
                )
            } else {
                item
            }
        })
        .collect()
}

fn render_synonyms(group: &MeaningGroup<'_>) -> Element {
    let visible = group.part_of_speech.has_synonym_slot() && !group.synonyms.is_empty();
    let lines = if visible {
        group
            .synonyms
            .iter()
            .enumerate()
            .map(|(index, synonym)| {
                Element::new("p")
                    .class(format!("word__definition__synonym__example--{index}"))
                    .text(*synonym)
            })
            .collect()
    } else {
        Vec::new()
    };
    Element::new("div")
        .class("word__definition__synonym")
        .hidden(!visible)
        .child(
            Element::new("p")
                .class("word__definition__synonym__heading")
                .text("Synonyms"),
        )
        .child(
            Element::new("div")
                .class("word__definition__synonym__example")
                .children(lines),
        )
}

pub fn source_url(word: &str, options: &RenderOptions) -> String {
    format!("{}/{}", options.source_base_url.trim_end_matches('/'), word)
}

fn render_source(word: &str, options: &RenderOptions) -> Element {
    let url = source_url(word, options);
    Element::new("section")
        .class("source")
        .child(Element::new("h5").class("source__heading").text("Source:"))
        .child(
            Element::new("a")
                .class("source__url")
                .attr("href", url.clone())
                .attr("target", "_blank")
                .text(url)
                .child(
                    Element::new("img")
                        .class("source__img")
                        .attr("src", NEW_WINDOW_ICON)
                        .attr("alt", "Image of an arrow"),
                ),
        )
}

fn css_ident(label: &str) -> String {
    label
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}
