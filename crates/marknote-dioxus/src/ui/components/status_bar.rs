use dioxus::prelude::*;

/// A user-visible status strip message.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Info(String),
    Error(String),
}

/// Bottom status strip. Shows the latest operation outcome until
/// dismissed; empty when there is nothing to report.
#[component]
pub fn StatusBar(notice: Option<Notice>, on_dismiss: EventHandler<()>) -> Element {
    let Some(notice) = notice else {
        return rsx! {
            div { class: "status-bar" }
        };
    };

    let (class, message) = match notice {
        Notice::Info(message) => ("status-message status-info", message),
        Notice::Error(message) => ("status-message status-error", message),
    };

    rsx! {
        div { class: "status-bar",
            span { class, "{message}" }
            button {
                class: "status-dismiss",
                title: "Dismiss",
                onclick: move |_| on_dismiss.call(()),
                "×"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_notice_renders_an_empty_strip() {
        let html = dioxus_ssr::render_element(rsx! {
            StatusBar { notice: None, on_dismiss: |_| {} }
        });

        assert!(html.contains("status-bar"));
        assert!(!html.contains("status-message"));
    }

    #[test]
    fn errors_are_marked_as_such() {
        let html = dioxus_ssr::render_element(rsx! {
            StatusBar {
                notice: Some(Notice::Error("PDF export failed".to_string())),
                on_dismiss: |_| {},
            }
        });

        assert!(html.contains("status-error"));
        assert!(html.contains("PDF export failed"));
    }
}
