//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod render_handlers;
mod script_handlers;

pub use render_handlers::*;
pub use script_handlers::*;
