use dioxus::prelude::*;

/// Delimiter rendered between two consecutive breadcrumb items.
pub const SEPARATOR: &str = "›";

#[derive(Clone, Debug, PartialEq)]
pub struct BreadcrumbItem {
    pub label: String,
    pub href: Option<String>,
}

impl BreadcrumbItem {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }
}

/// Navigation trail such as `Home › Dining`.
///
/// Items with an `href` render as links, the rest as plain text; the last item is
/// marked as the current page. An empty trail renders nothing.
#[component]
pub fn Breadcrumb(items: Vec<BreadcrumbItem>) -> Element {
    if items.is_empty() {
        return rsx!();
    }

    let last = items.len() - 1;

    rsx!(nav {
        "aria-label": "Breadcrumb",
        class: "breadcrumbs text-sm",
        ol {
            class: "flex flex-wrap items-center gap-2",
            for (index, item) in items.into_iter().enumerate() {
                li {
                    key: "{index}",
                    class: "flex items-center gap-2",
                    if index > 0 {
                        span { "aria-hidden": "true", class: "opacity-60", "{SEPARATOR}" }
                    }
                    {match (item.href, index == last) {
                        (Some(href), false) => rsx!(a { href: "{href}", class: "link link-hover", "{item.label}" }),
                        (Some(href), true) => rsx!(a { href: "{href}", "aria-current": "page", "{item.label}" }),
                        (None, true) => rsx!(span { "aria-current": "page", class: "font-semibold", "{item.label}" }),
                        (None, false) => rsx!(span { "{item.label}" }),
                    }}
                }
            }
        }
    })
}
