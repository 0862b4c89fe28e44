use dioxus::prelude::*;
use marknote_engine::FormatAction;

/// Formatting toolbar.
///
/// One button per formatting action; tooltips carry the matching
/// keyboard chord.
#[component]
pub fn Toolbar(on_format: EventHandler<FormatAction>) -> Element {
    rsx! {
        div { class: "toolbar",
            button {
                class: "toolbar-button",
                title: "Bold (Ctrl+B)",
                onclick: move |_| on_format.call(FormatAction::Bold),
                "B"
            }
            button {
                class: "toolbar-button",
                title: "Italic (Ctrl+I)",
                onclick: move |_| on_format.call(FormatAction::Italic),
                "I"
            }

            span { class: "toolbar-separator" }

            button {
                class: "toolbar-button",
                title: "Heading 1 (Ctrl+Shift+1)",
                onclick: move |_| on_format.call(FormatAction::Heading1),
                "H1"
            }
            button {
                class: "toolbar-button",
                title: "Heading 2 (Ctrl+Shift+2)",
                onclick: move |_| on_format.call(FormatAction::Heading2),
                "H2"
            }

            span { class: "toolbar-separator" }

            button {
                class: "toolbar-button",
                title: "Bullet List (Ctrl+Shift+L)",
                onclick: move |_| on_format.call(FormatAction::BulletList),
                "•"
            }
            button {
                class: "toolbar-button",
                title: "Numbered List (Ctrl+Shift+O)",
                onclick: move |_| on_format.call(FormatAction::NumberedList),
                "1."
            }

            span { class: "toolbar-separator" }

            button {
                class: "toolbar-button",
                title: "Link (Ctrl+K)",
                onclick: move |_| on_format.call(FormatAction::Link),
                "🔗"
            }
            button {
                class: "toolbar-button",
                title: "Image (Ctrl+Shift+M)",
                onclick: move |_| on_format.call(FormatAction::Image),
                "🖼"
            }
            button {
                class: "toolbar-button",
                title: "Code Block (Ctrl+Shift+E)",
                onclick: move |_| on_format.call(FormatAction::CodeBlock),
                "<>"
            }
        }
    }
}
