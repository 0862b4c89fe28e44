use dioxus::prelude::*;

/// The rendered preview pane.
///
/// Receives the debounced, already-rendered HTML from the shell; an
/// empty document shows a placeholder instead.
#[component]
pub fn PreviewPane(html: String) -> Element {
    rsx! {
        div { class: "preview-pane",
            if html.is_empty() {
                p { class: "preview-placeholder", "Preview will appear here..." }
            } else {
                div { class: "preview-content", dangerous_inner_html: "{html}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_shows_the_placeholder() {
        let rendered = dioxus_ssr::render_element(rsx! {
            PreviewPane { html: String::new() }
        });

        assert!(rendered.contains("Preview will appear here..."));
        assert!(!rendered.contains("preview-content"));
    }

    #[test]
    fn rendered_html_is_injected_verbatim() {
        let rendered = dioxus_ssr::render_element(rsx! {
            PreviewPane { html: "<h1>Title</h1>".to_string() }
        });

        assert!(rendered.contains("<h1>Title</h1>"));
        assert!(!rendered.contains("Preview will appear here..."));
    }
}
