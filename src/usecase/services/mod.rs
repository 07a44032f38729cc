pub mod arranger_service;
pub mod export_service;
pub mod import_service;
pub mod preview_service;
pub mod render_scheduler;
