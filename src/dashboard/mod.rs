pub mod render;
pub mod view_model;
