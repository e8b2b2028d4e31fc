//! # 归一化结果导出
//!
//! 将每源粒子结果与对应的每秒速率一同写入 CSV。
//!
//! ## 列
//! tally, score, unit, mean_per_source, std_dev_per_source,
//! rate_per_second, rate_std_dev, relative_error
//!
//! ## 依赖关系
//! - 被 `commands/normalize.rs` 调用
//! - 使用 `parsers/tally_csv.rs` 的 TallyEntry
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{Result, TallyError};
use crate::models::TallyResult;
use crate::normalization::NormalizationFactor;
use crate::parsers::TallyEntry;

use std::io::Write;
use std::path::Path;

/// 导出归一化结果到 CSV 文件
pub fn to_csv(entries: &[TallyEntry], rates: &[TallyResult], output_path: &Path) -> Result<()> {
    let file = std::fs::File::create(output_path).map_err(|e| TallyError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    write_csv(entries, rates, file)?;
    Ok(())
}

/// 写入任意输出流
pub fn write_csv<W: Write>(entries: &[TallyEntry], rates: &[TallyResult], writer: W) -> Result<()> {
    if entries.len() != rates.len() {
        return Err(TallyError::InvalidArgument(format!(
            "{} tallies but {} normalized rates",
            entries.len(),
            rates.len()
        )));
    }

    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record([
        "tally",
        "score",
        "unit",
        "mean_per_source",
        "std_dev_per_source",
        "rate_per_second",
        "rate_std_dev",
        "relative_error",
    ])?;

    for (entry, rate) in entries.iter().zip(rates) {
        wtr.write_record(&[
            entry.tally.clone(),
            entry.score.clone(),
            entry.result.unit().to_string(),
            format!("{:.10e}", entry.result.mean()),
            format!("{:.10e}", entry.result.std_dev()),
            format!("{:.10e}", rate.mean()),
            format!("{:.10e}", rate.std_dev()),
            format!("{:.6}", rate.relative_error()),
        ])?;
    }

    wtr.flush().map_err(|e| TallyError::FileWriteError {
        path: "<csv output>".to_string(),
        source: e,
    })?;

    Ok(())
}

/// 归一化因子摘要行（用于批量模式的汇总文件）
pub fn factor_summary_record(source: &str, factor: &NormalizationFactor) -> [String; 4] {
    [
        source.to_string(),
        format!("{:.10e}", factor.value()),
        format!("{:.10e}", factor.std_dev()),
        format!("{:.6}", factor.relative_error()),
    ]
}
