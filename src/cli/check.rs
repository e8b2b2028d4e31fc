//! # check 子命令 CLI 定义
//!
//! 每反应能量一致性检查（如假设 200 MeV/fission）。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/check.rs`

use super::{parse_unit, Mode};
use clap::Args;
use std::path::PathBuf;
use tallynorm::constants::NOMINAL_ENERGY_PER_FISSION_MEV;
use tallynorm::Unit;

/// check 子命令参数
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Tally table (CSV)
    pub input: PathBuf,

    /// Score holding the observed heating rate
    #[arg(long)]
    pub heating_score: String,

    /// Score holding the observed reaction rate
    #[arg(long, default_value = "fission")]
    pub reaction_score: String,

    /// Tally name holding both scores (default: first match)
    #[arg(long)]
    pub tally: Option<String>,

    /// Assumed energy released per reaction
    #[arg(long, default_value_t = NOMINAL_ENERGY_PER_FISSION_MEV)]
    pub energy_per_reaction: f64,

    /// Unit of the assumed energy per reaction
    #[arg(long, default_value = "MeV", value_parser = parse_unit)]
    pub energy_unit: Unit,

    /// Relative difference above which a warning is printed
    #[arg(long, default_value_t = 0.05)]
    pub threshold: f64,

    /// Transport mode of the simulation
    #[arg(short, long, value_enum, default_value_t = Mode::NeutronOnly)]
    pub mode: Mode,
}
