//! Faceless Factory - 无出镜短视频生成后端
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Brief: 内容需求（赛道、语气、格式、时长）与提示词构建
//! - Script: 模型回复清洗与脚本解析
//!
//! 应用层 (application/):
//! - Ports: 端口定义（文本生成、语音合成、视频生成、编码器、临时文件存储）
//! - Commands: 脚本生成 / 视频渲染命令处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Adapters: OpenAI 兼容客户端、ffmpeg 编码器、文件存储、测试用 Fake

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
