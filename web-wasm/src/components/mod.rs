pub mod header;
pub mod upload_area;
pub mod analyze_button;
pub mod concern_box;
pub mod ingredient_table;
pub mod reset_button;
