//! # check 命令实现
//!
//! 用假设的每反应能量（默认 200 MeV/fission）检查加热计分与反应率计分的一致性。
//! 比值与归一化无关，因此直接使用每源粒子结果。
//!
//! ## 依赖关系
//! - 使用 `cli/check.rs` 定义的参数
//! - 使用 tallynorm 的 `normalization::check`, `catalog`, `parsers`

use crate::cli::check::CheckArgs;
use crate::utils::output;

use tabled::{Table, Tabled};
use tallynorm::normalization::{self, ConsistencyReport};
use tallynorm::parsers::{parse_tally_csv, TallySet};
use tallynorm::units::{self, Unit};
use tallynorm::{catalog, Result, TallyError, TallyResult, TransportMode};

#[derive(Debug, Clone, Tabled)]
struct ReportRow {
    #[tabled(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// 执行 check 命令
pub fn execute(args: CheckArgs) -> Result<()> {
    output::print_header("Energy-per-Reaction Consistency Check");

    if !args.input.is_file() {
        return Err(TallyError::FileNotFound {
            path: args.input.display().to_string(),
        });
    }

    let mode: TransportMode = args.mode.into();
    let warnings = catalog::validate(&args.heating_score, mode)?;
    output::print_score_warnings(&warnings);

    let set = parse_tally_csv(&args.input, mode)?;
    let (heating, reactions) = find_pair(
        &set,
        &args.heating_score,
        &args.reaction_score,
        args.tally.as_deref(),
    )?;

    let assumed_j = units::convert(args.energy_per_reaction, args.energy_unit, Unit::Joule)?;
    let report = normalization::check(heating, reactions, assumed_j)?;

    let rows = report_rows(&report, &args)?;
    println!("{}", Table::new(&rows));

    if report.exceeds(args.threshold) {
        output::print_warning(&format!(
            "Relative difference {:+.2}% exceeds threshold {:.2}%; \
             {} {} per reaction is only an approximation",
            report.relative_difference * 100.0,
            args.threshold * 100.0,
            args.energy_per_reaction,
            args.energy_unit
        ));
    } else {
        output::print_success(&format!(
            "Relative difference {:+.2}% within threshold {:.2}%",
            report.relative_difference * 100.0,
            args.threshold * 100.0
        ));
    }

    Ok(())
}

/// 查找加热计分及同一计数器上的反应率计分
///
/// 未指定计数器时先定位加热计分，反应率取自它所在的计数器。
fn find_pair<'a>(
    set: &'a TallySet,
    heating_score: &str,
    reaction_score: &str,
    tally: Option<&str>,
) -> Result<(&'a TallyResult, &'a TallyResult)> {
    let heating = set.find_entry(heating_score, tally)?;
    let reactions = set.find_entry(reaction_score, Some(heating.tally.as_str()))?;
    Ok((&heating.result, &reactions.result))
}

fn report_rows(report: &ConsistencyReport, args: &CheckArgs) -> Result<Vec<ReportRow>> {
    let mut rows = vec![
        ReportRow {
            quantity: format!("Expected heating ({} × {})", args.reaction_score, args.energy_unit),
            value: format!("{:.6e} J/source", report.expected),
        },
        ReportRow {
            quantity: format!("Observed heating ({})", args.heating_score),
            value: format!("{:.6e} J/source", report.observed),
        },
        ReportRow {
            quantity: "Relative difference".to_string(),
            value: format!("{:+.3}%", report.relative_difference * 100.0),
        },
    ];

    if let Some(implied) = report.implied_energy_per_reaction_in(args.energy_unit)? {
        rows.push(ReportRow {
            quantity: "Implied energy per reaction".to_string(),
            value: format!("{:.3} {}", implied, args.energy_unit),
        });
    }

    Ok(rows)
}
