//! Format implementations
//!
//! This module contains all output formats that turn a compiled grammar into text.

pub mod html;
pub mod json;
pub mod tag;

pub use html::HtmlFormat;
pub use json::JsonFormat;
pub use tag::TagFormat;
