pub mod finger_hints;
pub mod header;
pub mod status_line;
pub mod typing_area;
