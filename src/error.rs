//! # 统一错误处理模块
//!
//! 定义 tallynorm 的所有错误类型，使用 `thiserror` 派生。
//!
//! 致命错误（单位不匹配、未知计分、退化的归一化输入）通过 `Err` 返回；
//! 计分选择的注意事项与一致性偏差属于建议性信息，不在此处定义。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 依赖 `units.rs` 的 Unit（仅用于错误信息）

use crate::units::Unit;
use thiserror::Error;

/// tallynorm 统一错误类型
#[derive(Error, Debug)]
pub enum TallyError {
    // ─────────────────────────────────────────────────────────────
    // 单位错误
    // ─────────────────────────────────────────────────────────────
    #[error("Unit mismatch: cannot convert {from} to {to} (incompatible dimensions)")]
    UnitMismatch { from: Unit, to: Unit },

    #[error("Unknown unit: '{0}'")]
    UnknownUnit(String),

    // ─────────────────────────────────────────────────────────────
    // 计分错误
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown score '{name}': physical meaning cannot be determined")]
    UnknownScore { name: String },

    // ─────────────────────────────────────────────────────────────
    // 归一化错误
    // ─────────────────────────────────────────────────────────────
    #[error("Heating rate must be positive, got {mean:e} J/source (degenerate or unconverged run?)")]
    ZeroHeatingRate { mean: f64 },

    #[error("Power must be positive, got {power}")]
    NonPositivePower { power: f64 },

    #[error("Invalid normalization factor: {0}")]
    InvalidFactor(String),

    #[error("Invalid tally '{name}': {reason}")]
    InvalidTally { name: String, reason: String },

    #[error("Tally not found: score '{score}' (tally: {})", .tally.as_deref().unwrap_or("any"))]
    TallyNotFound {
        score: String,
        tally: Option<String>,
    },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse tally table: {path}\nReason: {reason}")]
    ParseError { path: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, TallyError>;
