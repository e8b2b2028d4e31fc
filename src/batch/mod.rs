//! # 批量处理模块
//!
//! 对目录中的多个计分表（例如不同功率或不同燃耗步的运行）并行归一化。
//!
//! ## 依赖关系
//! - 被 `commands/normalize.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::TableCollector;
pub use runner::{BatchRunner, ProcessResult};
