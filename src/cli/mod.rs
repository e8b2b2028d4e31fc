//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `normalize`: 将计分表归一化为每秒速率（单文件或批量目录）
//! - `check`: 每反应能量一致性检查
//! - `scores`: 列出能量代理计分及其注意事项
//! - `convert`: 物理单位换算
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: normalize, check, scores, convert

pub mod check;
pub mod convert;
pub mod normalize;
pub mod scores;

use clap::{Parser, Subcommand, ValueEnum};
use tallynorm::{TransportMode, Unit};

/// tallynorm - Monte Carlo 计分归一化工具
#[derive(Parser)]
#[command(name = "tallynorm")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Normalize Monte Carlo transport tallies to absolute per-second rates",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Normalize per-source-particle tallies to per-second rates using the operating power
    Normalize(normalize::NormalizeArgs),

    /// Compare an assumed energy per reaction against heating / reaction-rate tallies
    Check(check::CheckArgs),

    /// List supported energy-deposition scores and their caveats
    Scores(scores::ScoresArgs),

    /// Convert a value between physical units (eV, MeV, J, W, ...)
    Convert(convert::ConvertArgs),
}

/// 输运模式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum Mode {
    /// Neutron-only transport
    #[default]
    NeutronOnly,
    /// Coupled neutron-photon transport
    Coupled,
}

impl From<Mode> for TransportMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::NeutronOnly => TransportMode::NeutronOnly,
            Mode::Coupled => TransportMode::CoupledNeutronPhoton,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::NeutronOnly => write!(f, "neutron-only"),
            Mode::Coupled => write!(f, "coupled"),
        }
    }
}

/// 解析单位参数
pub fn parse_unit(input: &str) -> Result<Unit, String> {
    input.parse::<Unit>().map_err(|_| {
        format!(
            "Invalid unit '{}'. Use one of: {}",
            input,
            Unit::ALL
                .iter()
                .map(|u| u.symbol())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })
}
