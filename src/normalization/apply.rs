//! # 计分归一化
//!
//! 将归一化因子作用于任意计分结果，得到每秒物理速率。
//!
//! ## 公式
//! μ' = μ · S
//! σ' = |μ'| · sqrt((σ/μ)² + (σ_S/S)²)
//!
//! 计分均值与归一化因子来自不同的计数器（或不同的运行），按相互独立处理。
//! 均值为零的计分结果恒为 (0, 0)。
//!
//! ## 依赖关系
//! - 被 `commands/normalize.rs` 调用
//! - 使用 `normalization/factor.rs`, `models/tally.rs`
//! - 使用 `rayon` 并行处理多个计分

use crate::error::Result;
use crate::models::TallyResult;
use crate::normalization::NormalizationFactor;

use rayon::prelude::*;

/// 将归一化因子作用于单个计分结果
///
/// 结果保留原名称和单位标记，数值为每秒量：归一化后的 J 标记实为 W，
/// count 标记实为 1/s。返回值不能再作为每源粒子加热计分传给
/// `NormalizationFactor::compute`，调用方需自行区分两种基准。
pub fn apply(factor: &NormalizationFactor, tally: &TallyResult) -> Result<TallyResult> {
    if tally.mean() == 0.0 {
        return TallyResult::new(tally.name(), 0.0, 0.0, tally.unit());
    }

    let mean = tally.mean() * factor.value();
    let tally_rel = tally.std_dev() / tally.mean();
    let factor_rel = factor.std_dev() / factor.value();
    let std_dev = mean.abs() * (tally_rel * tally_rel + factor_rel * factor_rel).sqrt();

    TallyResult::new(tally.name(), mean, std_dev, tally.unit())
}

/// 并行归一化多个计分结果（保持输入顺序）
pub fn apply_all(factor: &NormalizationFactor, tallies: &[TallyResult]) -> Result<Vec<TallyResult>> {
    tallies.par_iter().map(|t| apply(factor, t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Unit;

    const POWER_W: f64 = 30000.0;
    const HEATING_J: f64 = 1.2214222086486662e-11;
    const FISSION: f64 = 0.3955335940378975;

    fn reference_factor() -> NormalizationFactor {
        let heating = TallyResult::exact("heating-local", HEATING_J, Unit::Joule).unwrap();
        NormalizationFactor::compute(POWER_W, &heating).unwrap()
    }

    #[test]
    fn test_normalized_heating_keeps_energy_tag() {
        let heating = TallyResult::new("heating-local", HEATING_J, 2.4e-14, Unit::Joule).unwrap();
        let power = apply(&reference_factor(), &heating).unwrap();
        // 标记仍为 J，数值已是 W
        assert_eq!(power.unit(), Unit::Joule);
        assert!((power.mean() - POWER_W).abs() < 1e-6);
    }

    #[test]
    fn test_fission_rate_reference_case() {
        let fission = TallyResult::exact("fission", FISSION, Unit::Count).unwrap();
        let rate = apply(&reference_factor(), &fission).unwrap();
        assert!(
            (rate.mean() - 9.715e14).abs() / 9.715e14 < 1e-3,
            "fission rate should be ~9.715e14 /s, got {:e}",
            rate.mean()
        );
        assert_eq!(rate.name(), "fission");
        assert_eq!(rate.unit(), Unit::Count);
    }

    #[test]
    fn test_zero_tally_stays_zero() {
        let zero = TallyResult::new("absorption", 0.0, 0.0, Unit::Count).unwrap();
        let noisy_factor = NormalizationFactor::new(2.5e15, 1.0e14).unwrap();
        let result = apply(&noisy_factor, &zero).unwrap();
        assert_eq!(result.mean(), 0.0);
        assert_eq!(result.std_dev(), 0.0);
    }

    #[test]
    fn test_identity_factor_leaves_tally_unchanged() {
        let tally = TallyResult::new("fission", FISSION, 0.0123, Unit::Count).unwrap();
        let result = apply(&NormalizationFactor::identity(), &tally).unwrap();
        assert_eq!(result.name(), tally.name());
        assert_eq!(result.unit(), tally.unit());
        assert_eq!(result.mean(), tally.mean());
        assert!((result.std_dev() - tally.std_dev()).abs() < 1e-15);
    }

    #[test]
    fn test_relative_errors_add_in_quadrature() {
        let tally = TallyResult::new("fission", 2.0, 2.0 * 0.03, Unit::Count).unwrap();
        let factor = NormalizationFactor::new(1.0e15, 1.0e15 * 0.04).unwrap();
        let result = apply(&factor, &tally).unwrap();

        assert!((result.mean() - 2.0e15).abs() < 1.0);
        assert!(
            (result.relative_error() - 0.05).abs() < 1e-12,
            "expected 5% combined error, got {}",
            result.relative_error()
        );
    }

    #[test]
    fn test_negative_tally_has_positive_std_dev() {
        let tally = TallyResult::new("current", -0.2, 0.01, Unit::Count).unwrap();
        let result = apply(&NormalizationFactor::new(10.0, 0.0).unwrap(), &tally).unwrap();
        assert!((result.mean() + 2.0).abs() < 1e-12);
        assert!((result.std_dev() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_apply_all_preserves_order() {
        let factor = reference_factor();
        let tallies: Vec<_> = (1..=50)
            .map(|i| TallyResult::new(format!("cell-{}", i), i as f64 * 0.01, 0.0, Unit::Count).unwrap())
            .collect();

        let results = apply_all(&factor, &tallies).unwrap();
        assert_eq!(results.len(), tallies.len());
        for (input, output) in tallies.iter().zip(&results) {
            assert_eq!(input.name(), output.name());
            assert!((output.mean() - input.mean() * factor.value()).abs() <= 1e-3 * output.mean());
        }
    }
}
