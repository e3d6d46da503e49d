//! HTTP Handlers

mod fallback;
mod ping;
mod student;

pub use fallback::*;
pub use ping::*;
pub use student::*;
