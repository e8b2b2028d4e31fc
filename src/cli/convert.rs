//! # convert 子命令 CLI 定义
//!
//! 物理单位换算 (eV <-> J, MW -> MeV/s, ...)
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use super::parse_unit;
use clap::Args;
use tallynorm::Unit;

/// convert 子命令参数
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Value to convert
    #[arg(allow_negative_numbers = true)]
    pub value: f64,

    /// Source unit
    #[arg(value_parser = parse_unit)]
    pub from: Unit,

    /// Target unit
    #[arg(value_parser = parse_unit)]
    pub to: Unit,
}
