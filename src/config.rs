use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use tracing::warn;

use crate::usecase::services::render_scheduler::DEFAULT_RENDER_DELAY;

pub const RENDER_DELAY_ENV: &str = "AUTHOR_ARRANGER_RENDER_DELAY_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub render_delay: Duration,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let project_dirs = ProjectDirs::from("gov", "nih", "author-arranger")
            .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
        let render_delay =
            parse_render_delay(std::env::var(RENDER_DELAY_ENV).ok().as_deref());

        Ok(Self {
            data_dir: project_dirs.data_local_dir().to_path_buf(),
            render_delay,
        })
    }

    pub fn webview_data_dir(&self) -> Result<PathBuf> {
        ensure_webview_data_dir(&self.data_dir)
    }
}

pub fn parse_render_delay(raw: Option<&str>) -> Duration {
    match raw.map(str::trim) {
        None | Some("") => DEFAULT_RENDER_DELAY,
        Some(value) => match value.parse::<u64>() {
            Ok(ms) => Duration::from_millis(ms),
            Err(err) => {
                warn!(value, %err, "ignoring invalid {RENDER_DELAY_ENV}");
                DEFAULT_RENDER_DELAY
            }
        },
    }
}

pub fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}
