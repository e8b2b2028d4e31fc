//! # 解析器模块
//!
//! 读取输运程序导出的计分结果。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: tally_csv

pub mod tally_csv;

pub use tally_csv::{parse_tally_csv, parse_tally_reader, TallyEntry, TallySet};
