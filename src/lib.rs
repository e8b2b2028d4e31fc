//! # tallynorm - Monte Carlo 计分归一化
//!
//! 将输运模拟得到的每源粒子计分（如每个源粒子的裂变数）换算为给定运行功率下的
//! 每秒物理速率，并正确传递统计不确定度。
//!
//! ## 流程
//! 1. 选择能量代理计分（`catalog::validate` 给出建议性警告）
//! 2. 由功率和加热计分计算归一化因子（源粒子/秒）
//! 3. 将因子作用于任意计分
//! 4. 可选：用假设的每反应能量做一致性检查
//!
//! ```
//! use tallynorm::models::TallyResult;
//! use tallynorm::normalization::{apply, NormalizationFactor};
//! use tallynorm::units::Unit;
//!
//! let heating = TallyResult::new("heating-local", 1.2214222086486662e-11, 0.0, Unit::Joule)?;
//! let fission = TallyResult::new("fission", 0.3955335940378975, 0.0, Unit::Count)?;
//!
//! let factor = NormalizationFactor::compute(30000.0, &heating)?;
//! let fission_rate = apply(&factor, &fission)?;
//! assert!((fission_rate.mean() - 9.715e14).abs() / 9.715e14 < 1e-3);
//! # Ok::<(), tallynorm::error::TallyError>(())
//! ```
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── constants.rs     (物理常数)
//!   ├── units.rs         (单位与换算)
//!   ├── catalog.rs       (计分目录)
//!   ├── models/          (数据模型)
//!   ├── normalization/   (归一化核心)
//!   ├── parsers/         (计分表解析)
//!   ├── export.rs        (结果导出)
//!   └── error.rs         (错误处理)
//! ```

pub mod catalog;
pub mod constants;
pub mod error;
pub mod export;
pub mod models;
pub mod normalization;
pub mod parsers;
pub mod units;

pub use error::{Result, TallyError};
pub use models::{TallyResult, TransportMode};
pub use normalization::{ConsistencyReport, NormalizationFactor};
pub use units::Unit;
