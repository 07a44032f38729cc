mod app;
mod config;
mod domain;
mod infra;
mod logging;
mod ui;
mod usecase;

#[cfg(test)]
mod tests;

use config::AppConfig;

fn main() {
    logging::init();

    let app_config = AppConfig::load().expect("should resolve application data directory");
    let webview_data_dir = app_config
        .webview_data_dir()
        .expect("should resolve and create WebView2 data directory");
    tracing::info!(
        data_dir = %app_config.data_dir.display(),
        render_delay_ms = app_config.render_delay.as_millis() as u64,
        "starting author arranger"
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("Author Arranger"))
                .with_data_directory(webview_data_dir),
        )
        .with_context(app_config)
        .launch(app::App);
}
