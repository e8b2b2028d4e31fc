//! # 数据模型模块
//!
//! 定义计分结果、计分描述与输运结果提供者接口。
//!
//! ## 依赖关系
//! - 被 `catalog.rs`, `normalization/`, `parsers/` 和 `commands/` 使用
//! - 子模块: tally, score, source

pub mod score;
pub mod source;
pub mod tally;

pub use score::{ScoreDescriptor, ScoreWarning, TransportMode};
pub use source::TallySource;
pub use tally::TallyResult;
