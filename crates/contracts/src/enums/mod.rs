pub mod panel_state;
pub mod section_category;
