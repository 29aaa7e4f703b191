pub mod alert_reducer;
pub mod auth_reducer;
pub mod image_reducer;
