//! # tallynorm - Monte Carlo 计分归一化工具
//!
//! 将输运模拟的每源粒子计分换算为给定功率下的每秒物理速率。
//!
//! ## 子命令
//! - `normalize` - 计算归一化因子并归一化计分表（单文件或批量目录）
//! - `check`     - 每反应能量一致性检查
//! - `scores`    - 列出能量代理计分及其注意事项
//! - `convert`   - 物理单位换算
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     └── tallynorm 库 (归一化核心、计分目录、解析、导出)
//!   ├── batch/      (批量处理)
//!   └── utils/      (输出与进度条)
//! ```

mod batch;
mod cli;
mod commands;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
