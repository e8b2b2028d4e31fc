//! # 归一化模块
//!
//! 将每源粒子计分换算为每秒物理速率。
//!
//! ## 子模块
//! - `factor`: 由功率和加热率计算归一化因子
//! - `apply`: 将因子作用于计分结果
//! - `consistency`: 每反应能量一致性检查
//!
//! ## 依赖关系
//! - 被 `commands/normalize.rs`, `commands/check.rs` 使用
//! - 使用 `models/`, `units.rs`

pub mod apply;
pub mod consistency;
pub mod factor;

pub use apply::{apply, apply_all};
pub use consistency::{check, ConsistencyReport};
pub use factor::NormalizationFactor;
