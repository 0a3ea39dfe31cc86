//! 应用层 - 命令
//!
//! 两个互相独立的用例：脚本生成、视频渲染

mod render_commands;
mod script_commands;

pub mod handlers;

pub use render_commands::*;
pub use script_commands::*;
