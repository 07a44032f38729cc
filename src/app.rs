use std::sync::Arc;

use dioxus::prelude::*;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use tracing::{debug, error};

use crate::config::AppConfig;
use crate::domain::entities::author::AuthorId;
use crate::domain::entities::format::FormatParameters;
use crate::infra::export::docx::DocxExporter;
use crate::ui::components::mapping_panel::MappingPanel;
use crate::ui::components::preview_pane::PreviewPane;
use crate::ui::state::app_state::AppState;
use crate::usecase::ports::exporter::ExportError;
use crate::usecase::services::export_service::ExportService;
use crate::usecase::services::import_service::{auto_map, load_source_file, SUPPORTED_EXTENSIONS};

fn show_error(title: &str, description: String) {
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show();
}

#[component]
pub fn App() -> Element {
    let app_config = use_context::<AppConfig>();
    let state = AppState::new(app_config.render_delay);
    let AppState {
        config,
        preview,
        mut loading,
        mut status,
        ..
    } = state;
    let export_service = use_hook(|| Arc::new(ExportService::new(Arc::new(DocxExporter))));

    let open_file = move |_: MouseEvent| {
        let Some(file_path) = FileDialog::new()
            .add_filter("Spreadsheets", &SUPPORTED_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_file()
        else {
            return;
        };

        state.cancel_pending_render();
        loading.set(true);
        status.set(format!("Loading {}", file_path.display()));

        spawn(async move {
            let path = file_path.clone();
            let loaded = tokio::task::spawn_blocking(move || load_source_file(&path))
                .await
                .map_err(|err| err.to_string())
                .and_then(|result| result.map_err(|err| err.to_string()));

            match loaded {
                Ok(file) => {
                    let rows = file.data.len().saturating_sub(1);
                    let mut next = FormatParameters {
                        file,
                        ..config.peek().clone()
                    };
                    for mapping in next.mappings_mut() {
                        mapping.column = None;
                    }
                    auto_map(&mut next);
                    state.update_config(next);
                    status.set(format!("Loaded {rows} rows from {}", file_path.display()));
                }
                Err(err) => {
                    error!(file = %file_path.display(), %err, "failed to load source file");
                    status.set(format!("Failed to load {}", file_path.display()));
                    show_error("Unable to open file", err);
                }
            }
            loading.set(false);
        });
    };

    let export = move |_: ()| {
        let Some(filename) = export_service.suggested_filename(&preview.peek()) else {
            return;
        };
        let Some(path) = FileDialog::new()
            .set_file_name(filename)
            .add_filter("Word document", &["docx"])
            .save_file()
        else {
            return;
        };

        match export_service.export_to(&preview.peek(), &path) {
            Ok(()) => status.set(format!("Saved {}", path.display())),
            Err(ExportError::NothingToExport) => {}
            Err(err) => {
                error!(file = %path.display(), %err, "export failed");
                status.set("Export failed".to_string());
                show_error("Unable to export", err.to_string());
            }
        }
    };

    let on_reorder = move |order: Vec<AuthorId>| {
        debug!(?order, "author order changed");
    };

    let status_text = status();
    let current_config = config();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; height: 100vh; font-family: sans-serif; background: #f5f6f8;",
            div {
                style: "display: flex; align-items: center; gap: 12px; padding: 8px 16px; border-bottom: 1px solid #ddd; background: #fff;",
                strong { "Author Arranger" }
                button {
                    style: "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                    disabled: loading(),
                    onclick: open_file,
                    "Open spreadsheet…"
                }
                span { style: "color: #666;", "{status_text}" }
            }
            div {
                style: "display: flex; flex: 1; gap: 16px; padding: 16px; overflow: hidden;",
                div {
                    style: "width: 380px; overflow-y: auto;",
                    MappingPanel {
                        config: current_config,
                        on_change: move |next: FormatParameters| state.update_config(next),
                    }
                }
                div {
                    style: "flex: 1; overflow-y: auto;",
                    PreviewPane {
                        preview,
                        loading: loading(),
                        on_reorder,
                        on_export: export,
                    }
                }
            }
        }
    }
}
