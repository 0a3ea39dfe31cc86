//! HTTP Layer - RESTful API
//!
//! 脚本生成与视频渲染两个业务接口，以及存活检查

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
