//! # normalize 子命令 CLI 定义
//!
//! 由运行功率和加热计分计算归一化因子，并作用于计分表中的所有计分。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/normalize.rs`

use super::{parse_unit, Mode};
use clap::Args;
use std::path::PathBuf;
use tallynorm::Unit;

/// normalize 子命令参数
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Input: tally table (CSV) or directory containing tally tables
    pub input: PathBuf,

    /// Operating power (exact, user supplied)
    #[arg(short, long, env = "TALLYNORM_POWER")]
    pub power: f64,

    /// Unit of the operating power (W, kW, MW, eV/s, MeV/s)
    #[arg(long, default_value = "W", value_parser = parse_unit)]
    pub power_unit: Unit,

    /// Score used as the energy-deposition proxy (e.g. heating, heating-local, fission-q-recoverable)
    #[arg(long)]
    pub heating_score: String,

    /// Tally name holding the heating score (default: first match)
    #[arg(long)]
    pub heating_tally: Option<String>,

    /// Transport mode of the simulation
    #[arg(short, long, value_enum, default_value_t = Mode::NeutronOnly)]
    pub mode: Mode,

    /// Output: CSV file (single mode) or directory (batch mode)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of rows to print in the result table
    #[arg(long, default_value_t = 20)]
    pub top_n: usize,

    // ─────────────────────────────────────────────────────────────
    // 批量处理参数
    // ─────────────────────────────────────────────────────────────
    /// Glob pattern for tally tables (batch mode, e.g. "*.csv,run_*.txt")
    #[arg(long, default_value = "*.csv")]
    pub pattern: String,

    /// Number of parallel jobs (0 = auto, batch mode only)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Recurse into subdirectories (batch mode)
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
