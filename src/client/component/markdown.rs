use dioxus::prelude::*;
use pulldown_cmark::{html, Event, Options, Parser};

/// Renders markdown to an HTML string.
///
/// Raw HTML in the source is dropped; only markup produced from markdown reaches the page.
pub fn markdown_to_html(text: &str) -> String {
    let parser =
        Parser::new_ext(text, Options::all()).filter(|event| !matches!(event, Event::Html(_)));
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

/// Markdown block, used for entry descriptions authored in the content manager.
#[component]
pub fn Markdown(text: String, class: Option<&'static str>) -> Element {
    let class: &str = class.unwrap_or_default();
    let html = markdown_to_html(&text);

    rsx!(div {
        class: "prose max-w-none {class}",
        dangerous_inner_html: "{html}"
    })
}
