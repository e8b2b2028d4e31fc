//! # normalize 命令实现
//!
//! 将计分表中的每源粒子计分换算为每秒速率。
//!
//! ## 功能
//! - 检查加热计分选择并显示建议性警告
//! - 由功率和加热计分计算归一化因子
//! - 归一化全部计分，终端表格显示并导出 CSV
//! - 目录输入时并行批量处理，并写出各表的归一化因子汇总
//!
//! ## 依赖关系
//! - 使用 `cli/normalize.rs` 定义的参数
//! - 使用 `batch/` 模块进行批量处理
//! - 使用 tallynorm 的 `catalog`, `normalization`, `parsers`, `export`

use crate::batch::{BatchRunner, ProcessResult, TableCollector};
use crate::cli::normalize::NormalizeArgs;
use crate::utils::output;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tabled::{Table, Tabled};
use tallynorm::models::TallySource;
use tallynorm::normalization::{apply_all, NormalizationFactor};
use tallynorm::parsers::{parse_tally_csv, TallySet};
use tallynorm::{catalog, export, Result, TallyError, TallyResult, TransportMode, Unit};

const OUTPUT_SUFFIX: &str = "_normalized.csv";
const FACTOR_SUMMARY: &str = "normalization_factors.csv";

/// 归一化结果行
#[derive(Debug, Clone, Tabled)]
struct ResultRow {
    #[tabled(rename = "Tally")]
    tally: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Per source")]
    per_source: String,
    #[tabled(rename = "Per second")]
    per_second: String,
    #[tabled(rename = "Rel. Err")]
    rel_err: String,
    #[tabled(rename = "Unit")]
    unit: String,
}

/// 单个计分表的归一化设置
struct NormalizeConfig {
    power: f64,
    power_unit: Unit,
    heating_score: String,
    heating_tally: Option<String>,
    mode: TransportMode,
}

/// 单个计分表的归一化结果
struct NormalizedTable {
    set: TallySet,
    heating: TallyResult,
    factor: NormalizationFactor,
    rates: Vec<TallyResult>,
}

/// 执行 normalize 命令
pub fn execute(args: NormalizeArgs) -> Result<()> {
    output::print_header("Normalizing Tallies to Per-Second Rates");

    let config = NormalizeConfig {
        power: args.power,
        power_unit: args.power_unit,
        heating_score: args.heating_score.clone(),
        heating_tally: args.heating_tally.clone(),
        mode: args.mode.into(),
    };

    // 计分选择警告只依赖计分和模式，对整批相同
    let warnings = catalog::validate(&config.heating_score, config.mode)?;
    output::print_score_warnings(&warnings);

    if args.input.is_file() {
        execute_single_file(&args, &config)
    } else if args.input.is_dir() {
        execute_batch(&args, config)
    } else {
        Err(TallyError::FileNotFound {
            path: args.input.display().to_string(),
        })
    }
}

/// 读取计分表并归一化
fn normalize_table(path: &Path, config: &NormalizeConfig) -> Result<NormalizedTable> {
    let set = parse_tally_csv(path, config.mode)?;

    let heating = set
        .find_entry(&config.heating_score, config.heating_tally.as_deref())?
        .result
        .clone();

    let factor = NormalizationFactor::from_power(config.power, config.power_unit, &heating)?;

    let tallies: Vec<TallyResult> = set.results().into_iter().cloned().collect();
    let rates = apply_all(&factor, &tallies)?;

    Ok(NormalizedTable {
        set,
        heating,
        factor,
        rates,
    })
}

/// 默认输出路径: <stem>_normalized.csv
fn default_output_path(input: &Path, dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("tallies");
    dir.join(format!("{}{}", stem, OUTPUT_SUFFIX))
}

/// 单文件模式
fn execute_single_file(args: &NormalizeArgs, config: &NormalizeConfig) -> Result<()> {
    let table = normalize_table(&args.input, config)?;

    output::print_field("Tally table", &table.set.source);
    output::print_field("Transport mode", &config.mode.to_string());
    output::print_field("Power", &format!("{} {}", config.power, config.power_unit));
    output::print_field("Heating", &table.heating.to_string());
    output::print_field("Normalization factor", &table.factor.to_string());

    let rows: Vec<ResultRow> = table
        .set
        .entries
        .iter()
        .zip(&table.rates)
        .take(args.top_n)
        .map(|(entry, rate)| ResultRow {
            tally: entry.tally.clone(),
            score: entry.score.clone(),
            per_source: format!("{:.6e}", entry.result.mean()),
            per_second: format!("{:.6e}", rate.mean()),
            rel_err: format!("{:.3}%", rate.relative_error() * 100.0),
            unit: format!("{}/s", rate.unit()),
        })
        .collect();

    output::print_header(&format!(
        "Normalized Tallies ({} of {})",
        rows.len(),
        table.rates.len()
    ));
    println!("{}", Table::new(&rows));

    let output_path = match &args.output {
        Some(path) => path.clone(),
        None => {
            let dir = args.input.parent().unwrap_or_else(|| Path::new("."));
            default_output_path(&args.input, dir)
        }
    };

    if output_path.exists() && !args.overwrite {
        output::print_warning(&format!(
            "'{}' already exists (use --overwrite to replace it)",
            output_path.display()
        ));
        return Ok(());
    }

    export::to_csv(&table.set.entries, &table.rates, &output_path)?;
    output::print_success(&format!(
        "Normalized tallies saved to '{}'",
        output_path.display()
    ));

    Ok(())
}

/// 批量处理模式
fn execute_batch(args: &NormalizeArgs, config: NormalizeConfig) -> Result<()> {
    output::print_info(&format!("Batch mode: directory '{}'", args.input.display()));

    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.join("normalized"));

    let tables = TableCollector::new(args.input.clone())
        .with_pattern(&args.pattern)
        .excluding(OUTPUT_SUFFIX)
        .skipping_dir(&output_dir)
        .recursive(args.recursive)
        .collect();

    if tables.is_empty() {
        output::print_warning(&format!(
            "No tally tables found with pattern '{}'",
            args.pattern
        ));
        return Ok(());
    }

    output::print_info(&format!("Found {} tally tables", tables.len()));

    fs::create_dir_all(&output_dir).map_err(|e| TallyError::FileWriteError {
        path: output_dir.display().to_string(),
        source: e,
    })?;

    let factors: Mutex<Vec<(String, NormalizationFactor)>> = Mutex::new(Vec::new());

    let runner = BatchRunner::new(args.jobs);
    let result = runner.run(&tables, |path| {
        let output_path = default_output_path(path, &output_dir);
        if output_path.exists() && !args.overwrite {
            return ProcessResult::Skipped;
        }

        let written = normalize_table(path, &config).and_then(|table| {
            export::to_csv(&table.set.entries, &table.rates, &output_path)?;
            Ok(table.factor)
        });

        match written {
            Ok(factor) => {
                if let Ok(mut f) = factors.lock() {
                    f.push((path.display().to_string(), factor));
                }
                ProcessResult::Success
            }
            Err(e) => ProcessResult::Failed(path.display().to_string(), e.to_string()),
        }
    })?;

    let mut factors = factors.into_inner().unwrap_or_default();
    if !factors.is_empty() {
        factors.sort_by(|a, b| a.0.cmp(&b.0));
        let summary_path = output_dir.join(FACTOR_SUMMARY);
        write_factor_summary(&factors, &summary_path)?;
        output::print_info(&format!(
            "Normalization factors saved to '{}'",
            summary_path.display()
        ));
    }

    output::print_separator();
    output::print_success(&format!(
        "Batch complete ({} tables): {} success, {} skipped, {} failed",
        result.total(),
        result.success,
        result.skipped,
        result.failed
    ));

    if !result.failures.is_empty() {
        output::print_warning("Failed tables:");
        for (path, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", path, err));
        }
        if result.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
        }
    }

    Ok(())
}

/// 写出各表的归一化因子汇总
fn write_factor_summary(factors: &[(String, NormalizationFactor)], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["table", "source_per_second", "std_dev", "relative_error"])?;
    for (source, factor) in factors {
        wtr.write_record(&export::factor_summary_record(source, factor))?;
    }
    wtr.flush().map_err(|e| TallyError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
tally,score,mean,std_dev,unit
core,heating-local,1.2214222086486662e-11,2.4e-14,J
core,fission,0.3955335940378975,0.0008,count
";

    fn config() -> NormalizeConfig {
        NormalizeConfig {
            power: 30.0,
            power_unit: Unit::Kilowatt,
            heating_score: "heating-local".to_string(),
            heating_tally: None,
            mode: TransportMode::NeutronOnly,
        }
    }

    #[test]
    fn test_normalize_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.csv");
        fs::write(&path, TABLE).unwrap();

        let table = normalize_table(&path, &config()).unwrap();
        assert!((table.factor.value() - 2.4562e15).abs() / 2.4562e15 < 1e-3);
        assert!((table.rates[1].mean() - 9.715e14).abs() / 9.715e14 < 1e-3);
        assert_eq!(table.heating.name(), "core/heating-local");
        // 加热计分归一化后等于功率
        assert!((table.rates[0].mean() - 30000.0).abs() < 1e-6);
    }

    #[test]
    fn test_missing_heating_score() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.csv");
        fs::write(&path, TABLE).unwrap();

        let mut cfg = config();
        cfg.heating_score = "heating".to_string();
        assert!(matches!(
            normalize_table(&path, &cfg),
            Err(TallyError::TallyNotFound { .. })
        ));
    }

    #[test]
    fn test_default_output_path() {
        let p = default_output_path(Path::new("/data/run_30kW.csv"), Path::new("/out"));
        assert_eq!(p, PathBuf::from("/out/run_30kW_normalized.csv"));
    }
}
