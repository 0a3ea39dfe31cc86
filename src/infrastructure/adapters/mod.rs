//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod encoder;
pub mod fake;
pub mod openai;
pub mod storage;

pub use encoder::*;
pub use fake::*;
pub use openai::*;
pub use storage::*;
