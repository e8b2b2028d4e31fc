//! # 一致性检查
//!
//! 用假设的每反应能量（如 200 MeV/fission）乘以观测反应率，
//! 与观测加热率比较，给出相对偏差。
//!
//! 偏差不是错误：200 MeV 只是粗略常数，可回收能量计分通常低几个百分点
//! （约 192.7 MeV）。是否超出可接受范围由调用方判断。
//!
//! ## 依赖关系
//! - 被 `commands/check.rs` 调用
//! - 使用 `models/tally.rs`, `units.rs`

use crate::error::{Result, TallyError};
use crate::models::TallyResult;
use crate::units::{self, Dimension, Unit};

use serde::Serialize;

/// 一致性检查报告
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConsistencyReport {
    /// 反应率 × 假设能量 (J)
    pub expected: f64,
    /// 观测加热率 (J)
    pub observed: f64,
    /// (expected - observed) / observed
    pub relative_difference: f64,
    /// 观测反应率（用于反推每反应能量）
    pub reaction_rate: f64,
}

impl ConsistencyReport {
    /// 相对偏差绝对值是否超过阈值
    pub fn exceeds(&self, threshold: f64) -> bool {
        self.relative_difference.abs() > threshold
    }

    /// 观测数据隐含的每反应能量 (J)，反应率为零时返回 None
    pub fn implied_energy_per_reaction(&self) -> Option<f64> {
        if self.reaction_rate == 0.0 {
            None
        } else {
            Some(self.observed / self.reaction_rate)
        }
    }

    /// 以指定能量单位表示隐含的每反应能量
    pub fn implied_energy_per_reaction_in(&self, unit: Unit) -> Result<Option<f64>> {
        self.implied_energy_per_reaction()
            .map(|e| units::convert(e, Unit::Joule, unit))
            .transpose()
    }
}

/// 比较假设的每反应能量与观测的加热率/反应率之比
///
/// `assumed_energy_per_reaction` 单位为 J。两个计分须基于同一归一化
/// （都为每源粒子或都为每秒）。
pub fn check(
    observed_heating: &TallyResult,
    observed_reaction_rate: &TallyResult,
    assumed_energy_per_reaction: f64,
) -> Result<ConsistencyReport> {
    let heating = observed_heating.convert_to(Unit::Joule)?;

    if observed_reaction_rate.unit().dimension() != Dimension::COUNT {
        return Err(TallyError::UnitMismatch {
            from: observed_reaction_rate.unit(),
            to: Unit::Count,
        });
    }

    let expected = observed_reaction_rate.mean() * assumed_energy_per_reaction;
    let observed = heating.mean();

    let relative_difference = if observed != 0.0 {
        (expected - observed) / observed
    } else if expected == 0.0 {
        0.0
    } else {
        f64::INFINITY
    };

    Ok(ConsistencyReport {
        expected,
        observed,
        relative_difference,
        reaction_rate: observed_reaction_rate.mean(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{EV_PER_MEV, JOULES_PER_EV};
    use crate::normalization::{apply, NormalizationFactor};

    const POWER_W: f64 = 30000.0;
    const HEATING_J: f64 = 1.2214222086486662e-11;
    const FISSION: f64 = 0.3955335940378975;

    fn two_hundred_mev() -> f64 {
        200.0 * EV_PER_MEV * JOULES_PER_EV
    }

    #[test]
    fn test_reference_discrepancy_per_second() {
        let heating = TallyResult::exact("heating-local", HEATING_J, Unit::Joule).unwrap();
        let factor = NormalizationFactor::compute(POWER_W, &heating).unwrap();
        let heating_rate = apply(&factor, &heating).unwrap();
        let fission_rate = TallyResult::exact("fission", 9.715e14, Unit::Count).unwrap();

        let report = check(&heating_rate, &fission_rate, two_hundred_mev()).unwrap();

        assert!((report.observed - POWER_W).abs() < 1e-6);
        assert!(
            (report.relative_difference - 0.037).abs() < 0.002,
            "expected ~3.7% discrepancy, got {}",
            report.relative_difference
        );

        let implied_mev = report
            .implied_energy_per_reaction_in(Unit::MegaElectronVolt)
            .unwrap()
            .unwrap();
        assert!(
            (implied_mev - 192.7).abs() < 0.2,
            "expected ~192.7 MeV/fission, got {}",
            implied_mev
        );
    }

    #[test]
    fn test_per_source_and_per_second_agree() {
        let heating = TallyResult::exact("heating-local", HEATING_J, Unit::Joule).unwrap();
        let fission = TallyResult::exact("fission", FISSION, Unit::Count).unwrap();
        let per_source = check(&heating, &fission, two_hundred_mev()).unwrap();

        let factor = NormalizationFactor::compute(POWER_W, &heating).unwrap();
        let per_second = check(
            &apply(&factor, &heating).unwrap(),
            &apply(&factor, &fission).unwrap(),
            two_hundred_mev(),
        )
        .unwrap();

        assert!((per_source.relative_difference - per_second.relative_difference).abs() < 1e-9);
    }

    #[test]
    fn test_heating_in_ev() {
        let heating =
            TallyResult::exact("heating", HEATING_J / JOULES_PER_EV, Unit::ElectronVolt).unwrap();
        let fission = TallyResult::exact("fission", FISSION, Unit::Count).unwrap();
        let report = check(&heating, &fission, two_hundred_mev()).unwrap();
        assert!((report.observed - HEATING_J).abs() / HEATING_J < 1e-12);
    }

    #[test]
    fn test_discrepancy_is_not_an_error() {
        let heating = TallyResult::exact("heating", 1.0, Unit::Joule).unwrap();
        let reactions = TallyResult::exact("fission", 10.0, Unit::Count).unwrap();
        let report = check(&heating, &reactions, 1.0).unwrap();
        assert!((report.relative_difference - 9.0).abs() < 1e-12);
        assert!(report.exceeds(0.05));
        assert!(!report.exceeds(10.0));
    }

    #[test]
    fn test_zero_observed_heating() {
        let heating = TallyResult::exact("heating", 0.0, Unit::Joule).unwrap();
        let none = TallyResult::exact("fission", 0.0, Unit::Count).unwrap();
        let some = TallyResult::exact("fission", 1.0, Unit::Count).unwrap();

        assert_eq!(check(&heating, &none, 1.0).unwrap().relative_difference, 0.0);
        assert!(check(&heating, &some, 1.0)
            .unwrap()
            .relative_difference
            .is_infinite());
        assert_eq!(check(&heating, &none, 1.0).unwrap().implied_energy_per_reaction(), None);
    }

    #[test]
    fn test_unit_mismatch() {
        let heating = TallyResult::exact("heating", 1.0, Unit::Joule).unwrap();
        let fission = TallyResult::exact("fission", 1.0, Unit::Count).unwrap();

        // 加热率不是能量
        assert!(matches!(
            check(&fission, &fission, 1.0),
            Err(TallyError::UnitMismatch { .. })
        ));
        // 反应率不是计数
        assert!(matches!(
            check(&heating, &heating, 1.0),
            Err(TallyError::UnitMismatch { .. })
        ));
    }
}
