use dioxus::events::Key;
use dioxus::prelude::*;
use marknote_engine::FormatAction;
use marknote_engine::editing;

/// The raw markdown input pane.
///
/// The textarea is controlled by the shell's text signal; every input
/// event hands the full new value back up. Keydown only handles the
/// formatting chords - everything else passes through to normal text
/// editing.
#[component]
pub fn EditorPane(
    text: String,
    on_change: EventHandler<String>,
    on_format: EventHandler<FormatAction>,
) -> Element {
    rsx! {
        div { class: "editor-pane",
            textarea {
                id: "editor",
                class: "editor-textarea",
                placeholder: "Write your markdown here...",
                spellcheck: false,
                value: text,

                oninput: move |event: Event<FormData>| {
                    on_change.call(event.value());
                },

                onkeydown: move |event: Event<KeyboardData>| {
                    handle_editor_keydown(event, &on_format);
                },
            }
        }
    }
}

fn handle_editor_keydown(event: Event<KeyboardData>, on_format: &EventHandler<FormatAction>) {
    let Key::Character(key) = event.key() else {
        return;
    };

    let modifiers = event.modifiers();
    let command = modifiers.ctrl() || modifiers.meta();

    if let Some(action) = editing::action_for_chord(&key, command, modifiers.shift()) {
        // Several chords collide with native webview shortcuts
        event.prevent_default();
        on_format.call(action);
    }
}
