//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `utils/` 以及 tallynorm 库
//! - 子模块: normalize, check, scores, convert

pub mod check;
pub mod convert;
pub mod normalize;
pub mod scores;

use crate::cli::Commands;
use tallynorm::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Normalize(args) => normalize::execute(args),
        Commands::Check(args) => check::execute(args),
        Commands::Scores(args) => scores::execute(args),
        Commands::Convert(args) => convert::execute(args),
    }
}
