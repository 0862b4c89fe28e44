use std::time::{Duration, Instant};

use dioxus::document;
use dioxus::prelude::*;
use marknote_config::Config;
use marknote_engine::{
    AutosaveStore, AutosaveTimer, FormatAction, PreviewPipeline, editing, io, pdf,
};

use super::components::{EditorPane, Header, Notice, PreviewPane, StatusBar, Toolbar};

const STYLE_CSS: &str = include_str!("../../assets/style.css");

/// The editor shell: owns the single source-of-truth document text and
/// wires the engine's state machines to real timers.
///
/// Every deferral runs as a spawned task sleeping on a tokio timer; at
/// most one live task exists per concern (autosave countdown, preview
/// debounce), superseded tasks are cancelled before a replacement is
/// spawned, and unmount cancels whatever is still outstanding.
#[component]
pub fn App(config: Config) -> Element {
    let autosave_delay = Duration::from_millis(config.autosave_delay_ms);
    let debounce_window = Duration::from_millis(config.preview_debounce_ms);
    let export_prefix = config.export_prefix.clone();

    let store = use_hook(|| AutosaveStore::new(Config::autosave_path()));
    // Explicit startup restore; the autosave record is never pushed back
    // into the document anywhere else.
    let initial = use_hook(|| store.load_last().unwrap_or_default());

    let mut text = use_signal({
        let initial = initial.clone();
        move || initial
    });
    let mut autosave = use_signal({
        let initial = initial.clone();
        move || AutosaveTimer::new(autosave_delay, &initial)
    });
    let mut pipeline = use_signal({
        let initial = initial.clone();
        move || PreviewPipeline::new(debounce_window, &initial)
    });
    let mut preview_html = use_signal(|| pipeline.peek().html().to_string());

    let mut notice = use_signal(|| None::<Notice>);
    let mut exporting_pdf = use_signal(|| false);

    let mut autosave_task = use_signal(|| None::<Task>);
    let mut debounce_task = use_signal(|| None::<Task>);

    use_drop(move || {
        // Unmount cancels outstanding timers outright; content still
        // inside the idle window is dropped without a final save.
        if let Some(task) = autosave_task.write().take() {
            task.cancel();
        }
        if let Some(task) = debounce_task.write().take() {
            task.cancel();
        }
        autosave.write().cancel();
        pipeline.write().cancel();
    });

    let store_for_save = store.clone();
    let handle_change = use_callback(move |value: String| {
        let now = Instant::now();
        // Commit the new text before scheduling anything derived from it
        text.set(value.clone());

        autosave.write().observe(&value, now);
        if let Some(task) = autosave_task.write().take() {
            task.cancel();
        }
        if autosave.peek().next_deadline().is_some() {
            let store = store_for_save.clone();
            let task = spawn(async move {
                tokio::time::sleep(autosave_delay).await;
                if let Some(content) = autosave.write().poll(Instant::now()) {
                    match store.save(&content) {
                        Ok(()) => log::debug!("Autosaved {} bytes", content.len()),
                        Err(e) => log::warn!("Autosave failed: {e}"),
                    }
                }
            });
            autosave_task.set(Some(task));
        }

        pipeline.write().update(&value, now);
        if let Some(task) = debounce_task.write().take() {
            task.cancel();
        }
        let task = spawn(async move {
            tokio::time::sleep(debounce_window).await;
            if pipeline.write().poll(Instant::now()) {
                let html = pipeline.peek().html().to_string();
                preview_html.set(html);
            }
        });
        debounce_task.set(Some(task));
    });

    let handle_format = use_callback(move |action: FormatAction| {
        spawn(async move {
            let mut selection = document::eval(
                r#"
                const area = document.getElementById("editor");
                dioxus.send([area.selectionStart, area.selectionEnd]);
                "#,
            );
            let Ok((start, end)) = selection.recv::<(usize, usize)>().await else {
                log::warn!("Could not read the editor selection");
                return;
            };

            let outcome = editing::apply(&text.peek(), start, end, action);
            let cursor = outcome.cursor;
            handle_change.call(outcome.text);

            // The replacement does not relocate the caret by itself; wait
            // a tick for the committed value to reach the textarea, then
            // collapse the selection after the inserted block.
            tokio::time::sleep(Duration::from_millis(10)).await;
            let _ = document::eval(&format!(
                r#"
                const area = document.getElementById("editor");
                area.focus();
                area.setSelectionRange({cursor}, {cursor});
                "#
            ))
            .await;
        });
    });

    let handle_import = use_callback(move |_: ()| {
        spawn(async move {
            let picked = rfd::AsyncFileDialog::new()
                .add_filter("Markdown", io::IMPORT_EXTENSIONS)
                .pick_file()
                .await;
            let Some(file) = picked else { return };

            match io::import_file(file.path()) {
                Ok(content) => {
                    // Replaces the document wholesale, no merging
                    handle_change.call(content);
                    notice.set(Some(Notice::Info(format!("Imported {}", file.file_name()))));
                }
                Err(e) => notice.set(Some(Notice::Error(format!("Import failed: {e}")))),
            }
        });
    });

    let prefix_for_export = export_prefix.clone();
    let handle_export = use_callback(move |_: ()| {
        let prefix = prefix_for_export.clone();
        spawn(async move {
            let name = io::export_file_name(&prefix, chrono::Local::now().date_naive());
            let picked = rfd::AsyncFileDialog::new()
                .set_file_name(name)
                .add_filter("Markdown", &["md"])
                .save_file()
                .await;
            let Some(file) = picked else { return };

            match io::export_file(file.path(), &text.peek()) {
                Ok(()) => notice.set(Some(Notice::Info(format!("Exported {}", file.file_name())))),
                Err(e) => notice.set(Some(Notice::Error(format!("Export failed: {e}")))),
            }
        });
    });

    let prefix_for_pdf = export_prefix.clone();
    let handle_export_pdf = use_callback(move |_: ()| {
        if *exporting_pdf.peek() {
            return;
        }
        let content = text.peek().clone();
        if content.trim().is_empty() {
            notice.set(Some(Notice::Error(
                "Nothing to export - the document is empty".to_string(),
            )));
            return;
        }

        exporting_pdf.set(true);
        let prefix = prefix_for_pdf.clone();
        spawn(async move {
            let date = chrono::Local::now().date_naive();
            let picked = rfd::AsyncFileDialog::new()
                .set_file_name(format!("{prefix}-{date}.pdf"))
                .add_filter("PDF", &["pdf"])
                .save_file()
                .await;

            if let Some(file) = picked {
                match pdf::export_pdf(&content, &format!("{prefix}-{date}"), file.path()) {
                    Ok(()) => {
                        notice.set(Some(Notice::Info(format!("Exported {}", file.file_name()))))
                    }
                    Err(e) => notice.set(Some(Notice::Error(format!("PDF export failed: {e}")))),
                }
            }

            // The busy indicator is cleared on every path so a failed
            // export can be retried
            exporting_pdf.set(false);
        });
    });

    rsx! {
        style { {STYLE_CSS} }
        div { class: "app-container",
            Header {
                exporting_pdf: exporting_pdf(),
                on_import: move |_| handle_import.call(()),
                on_export: move |_| handle_export.call(()),
                on_export_pdf: move |_| handle_export_pdf.call(()),
            }
            Toolbar { on_format: move |action| handle_format.call(action) }
            div { class: "editor-panes",
                EditorPane {
                    text: text(),
                    on_change: move |value| handle_change.call(value),
                    on_format: move |action| handle_format.call(action),
                }
                PreviewPane { html: preview_html() }
            }
            StatusBar {
                notice: notice(),
                on_dismiss: move |_| notice.set(None),
            }
        }
    }
}
