//! # scores 命令实现
//!
//! 以表格列出计分目录；指定输运模式时同时显示各计分的警告。
//!
//! ## 依赖关系
//! - 使用 `cli/scores.rs` 定义的参数
//! - 使用 tallynorm 的 `catalog`

use crate::cli::scores::ScoresArgs;
use crate::utils::output;

use tabled::{Table, Tabled};
use tallynorm::{catalog, Result, TransportMode};

#[derive(Debug, Clone, Tabled)]
struct ScoreRow {
    #[tabled(rename = "Score")]
    name: String,
    #[tabled(rename = "Coupled")]
    coupled: String,
    #[tabled(rename = "Special data")]
    special_data: String,
    #[tabled(rename = "Physical meaning")]
    meaning: String,
}

/// 执行 scores 命令
pub fn execute(args: ScoresArgs) -> Result<()> {
    output::print_header("Energy-Deposition Scores");

    let yes_no = |b: bool| (if b { "yes" } else { "no" }).to_string();

    let rows: Vec<ScoreRow> = catalog::scores()
        .into_iter()
        .map(|d| ScoreRow {
            name: d.name.to_string(),
            coupled: yes_no(d.requires_coupled_transport),
            special_data: yes_no(d.requires_special_data),
            meaning: d.physical_meaning.to_string(),
        })
        .collect();

    println!("{}", Table::new(&rows));

    if let Some(mode) = args.mode {
        let mode: TransportMode = mode.into();
        output::print_header(&format!("Warnings under {} transport", mode));

        for d in catalog::scores() {
            let warnings = catalog::validate(d.name, mode)?;
            if warnings.is_empty() {
                output::print_success(&format!("'{}' no caveats", d.name));
            } else {
                output::print_score_warnings(&warnings);
            }
        }
    }

    Ok(())
}
