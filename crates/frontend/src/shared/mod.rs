pub mod api_error;
pub mod api_utils;
pub mod clipboard;
pub mod code_highlight;
pub mod components;
pub mod icons;
