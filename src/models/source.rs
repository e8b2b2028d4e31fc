//! # 输运结果提供者接口
//!
//! 归一化核心只消费计分结果，不关心它们来自哪个输运程序或文件格式。
//! 提供者需给出每个 (计分, 计数器) 组合的每源粒子结果，以及输运模式。
//!
//! ## 依赖关系
//! - 被 `parsers/tally_csv.rs` 实现
//! - 被 `commands/` 使用

use crate::error::Result;
use crate::models::{TallyResult, TransportMode};

/// 输运结果提供者
pub trait TallySource {
    /// 模拟使用的输运模式
    fn transport_mode(&self) -> TransportMode;

    /// 按计分名称（以及可选的计数器名称）查找结果
    fn find(&self, score: &str, tally: Option<&str>) -> Result<&TallyResult>;

    /// 所有结果
    fn results(&self) -> Vec<&TallyResult>;
}
