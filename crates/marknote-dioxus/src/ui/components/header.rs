use dioxus::prelude::*;

/// Application header: title on the left, document operations on the
/// right. The PDF button doubles as the busy indicator while an export
/// is in flight.
#[component]
pub fn Header(
    exporting_pdf: bool,
    on_import: EventHandler<()>,
    on_export: EventHandler<()>,
    on_export_pdf: EventHandler<()>,
) -> Element {
    rsx! {
        header { class: "app-header",
            h1 { class: "app-title", "marknote" }
            div { class: "header-actions",
                button {
                    class: "header-button",
                    title: "Import a markdown file",
                    onclick: move |_| on_import.call(()),
                    "Import"
                }
                button {
                    class: "header-button",
                    title: "Export the document as markdown",
                    onclick: move |_| on_export.call(()),
                    "Export"
                }
                button {
                    class: "header-button",
                    title: "Export the rendered document as PDF",
                    disabled: exporting_pdf,
                    onclick: move |_| on_export_pdf.call(()),
                    if exporting_pdf {
                        "Exporting..."
                    } else {
                        "Export PDF"
                    }
                }
            }
        }
    }
}
