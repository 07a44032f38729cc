use std::time::Duration;

use dioxus::prelude::*;
use tracing::debug;

use crate::domain::entities::format::FormatParameters;
use crate::usecase::services::preview_service::PreviewState;
use crate::usecase::services::render_scheduler::RenderScheduler;

#[derive(Clone, Copy)]
pub struct AppState {
    pub config: Signal<FormatParameters>,
    pub preview: Signal<PreviewState>,
    pub scheduler: Signal<RenderScheduler>,
    pub loading: Signal<bool>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new(render_delay: Duration) -> Self {
        Self {
            config: use_signal(FormatParameters::default),
            preview: use_signal(PreviewState::new),
            scheduler: use_signal(|| RenderScheduler::new(render_delay)),
            loading: use_signal(|| false),
            status: use_signal(|| "Open a spreadsheet to begin".to_string()),
        }
    }

    /// Stores the configuration and schedules a deferred preview render. A newer
    /// call supersedes any render still waiting on its delay.
    pub fn update_config(mut self, next: FormatParameters) {
        self.config.set(next.clone());

        let ticket = self.scheduler.write().schedule();
        let delay = self.scheduler.peek().delay();
        let mut scheduler = self.scheduler;
        let mut preview = self.preview;

        spawn(async move {
            tokio::time::sleep(delay).await;
            if !scheduler.write().complete(ticket) {
                debug!("superseded preview render dropped");
                return;
            }
            let change = preview.write().apply_config(next);
            if change.data_changed {
                debug!(authors = preview.peek().authors().len(), "author list rebuilt");
            }
        });
    }

    /// Drops any pending render, e.g. while a new file is loading.
    pub fn cancel_pending_render(mut self) {
        self.scheduler.write().cancel();
    }
}
