//! HTTP Handlers

mod index;
mod script;
mod video;

pub use index::*;
pub use script::*;
pub use video::*;
