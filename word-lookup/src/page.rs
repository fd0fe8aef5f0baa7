use crate::audio::PLAY_AUDIO_SCRIPT;
use crate::document::Document;
use crate::state::UiState;
use crate::view::{escape, Element};

const STYLESHEET: &str = r#"
:root { --bg: #ffffff; --fg: #2d2d2d; --muted: #757575; --accent: #a445ed; --rule: #e9e9e9; }
html.dark-mode { --bg: #050505; --fg: #ffffff; --rule: #3a3a3a; }
body { margin: 0 auto; max-width: 46rem; padding: 2rem 1.5rem; background: var(--bg); color: var(--fg); font-family: sans-serif; }
body[data-font="serif"] { font-family: serif; }
body[data-font="mono"] { font-family: monospace; }
.header { display: flex; justify-content: space-between; align-items: center; gap: 1rem; }
.toggle-ball { width: 2.5rem; height: 1.25rem; border-radius: 1rem; border: 0; background: var(--muted); cursor: pointer; }
html.dark-mode .toggle-ball { background: var(--accent); }
.search { display: flex; margin: 2rem 0 0.5rem; }
.search-form { flex: 1; padding: 0.75rem 1rem; border-radius: 1rem; border: 1px solid var(--rule); background: transparent; color: inherit; font: inherit; }
.error-message { color: #ff5252; min-height: 1.2em; transition: opacity 0.2s; }
.word { display: flex; justify-content: space-between; align-items: center; }
.word__heading { font-size: 3rem; margin: 0; }
.word__phonetics { color: var(--accent); }
.word__audio { background: none; border: 0; cursor: pointer; }
.hr__con { display: flex; align-items: center; gap: 1rem; }
.hr { flex: 1; height: 1px; background: var(--rule); }
.meaning, .word__definition__synonym__heading, .source__heading { color: var(--muted); }
.word__example { color: var(--muted); }
.word__definition__synonym { display: flex; gap: 1.5rem; }
.word__definition__synonym__example { color: var(--accent); font-weight: bold; }
.source { border-top: 1px solid var(--rule); padding-top: 1rem; font-size: 0.875rem; }
.source__url { color: inherit; }
"#;

pub struct PageContext<'a> {
    pub document: &'a Document,
    pub ui: &'a UiState,
    pub fonts: &'a [String],
    /// Text to leave in the search field.
    pub query: &'a str,
}

pub fn render_page(ctx: &PageContext<'_>) -> String {
    let html_class = if ctx.ui.dark_mode {
        r#" class="dark-mode""#.to_owned()
    } else {
        String::new()
    };
    let body_font = ctx
        .ui
        .font_family
        .as_deref()
        .map(|font| format!(r#" data-font="{}""#, escape(font)))
        .unwrap_or_default();

    let mut main = String::new();
    for section in ctx.document.content() {
        section.write_html(&mut main);
    }
    let source = ctx
        .document
        .source()
        .map(Element::to_html)
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en"{html_class}>
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Dictionary</title>
    <style>{STYLESHEET}</style>
    <script>{PLAY_AUDIO_SCRIPT}</script>
  </head>
  <body{body_font}>
    {header}
    {search}
    {error}
    <main class="main">{main}</main>
    {source}
  </body>
</html>"#,
        header = render_header(ctx).to_html(),
        search = render_search(ctx.query).to_html(),
        error = render_error(ctx.document).to_html(),
    )
}

fn render_header(ctx: &PageContext<'_>) -> Element {
    let selected = ctx.ui.font_family.as_deref();
    let options = ctx.fonts.iter().map(|font| {
        let option = Element::new("option").attr("value", font.as_str());
        let option = if Some(font.as_str()) == selected {
            option.attr("selected", "selected")
        } else {
            option
        };
        option.text(font.as_str())
    });
    Element::new("header")
        .class("header")
        .child(
            Element::new("form")
                .class("font")
                .attr("method", "post")
                .attr("action", "/font")
                .child(
                    Element::new("select")
                        .class("font__type")
                        .attr("name", "font")
                        .attr("onchange", "this.form.submit()")
                        .children(options),
                ),
        )
        .child(
            Element::new("form")
                .class("toggle")
                .attr("method", "post")
                .attr("action", "/theme")
                .child(
                    Element::new("button")
                        .class("toggle-ball")
                        .attr("type", "submit")
                        .attr("title", "Toggle dark mode"),
                ),
        )
}

fn render_search(query: &str) -> Element {
    Element::new("form")
        .class("search")
        .attr("method", "post")
        .attr("action", "/search")
        .child(
            Element::new("input")
                .class("search-form")
                .attr("type", "text")
                .attr("name", "word")
                .attr("value", query)
                .attr("placeholder", "Search for any word…"),
        )
}

fn render_error(document: &Document) -> Element {
    let banner = document.error();
    Element::new("p")
        .class("error-message")
        .attr("style", format!("opacity: {}", banner.opacity))
        .text(banner.text.as_str())
}
