pub mod mapping_panel;
pub mod preview_pane;
