//! # 美化输出工具
//!
//! 提供统一的终端输出样式。库本身从不打印，所有终端输出都经过这里。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块使用
//! - 使用 `colored` crate

use colored::Colorize;
use tallynorm::models::ScoreWarning;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印计分选择警告
pub fn print_score_warnings(warnings: &[ScoreWarning]) {
    for w in warnings {
        println!(
            "{} score {}: {}",
            "[WARN]".yellow().bold(),
            w.score.cyan(),
            w.message
        );
    }
}

/// 打印键值对
pub fn print_field(key: &str, value: &str) {
    println!("  {:<24} {}", key.dimmed(), value);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}
