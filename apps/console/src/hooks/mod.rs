pub mod clipboard;
pub mod viewport;
