//! # scores 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/scores.rs`

use super::Mode;
use clap::Args;

/// scores 子命令参数
#[derive(Args, Debug)]
pub struct ScoresArgs {
    /// Show the warnings each score raises under this transport mode
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,
}
