//! # 归一化因子
//!
//! 由运行功率与每源粒子加热率计算每秒源粒子数。
//!
//! ## 公式
//! S = P / H,  σ_S = S · (σ_H / H)
//!
//! 功率视为精确控制参数（零不确定度），统计不确定度只来自
//! Monte Carlo 加热率估计，因此因子的相对不确定度等于加热计分的相对不确定度
//! （随机变量倒数的一阶误差传递）。
//!
//! ## 依赖关系
//! - 被 `normalization/apply.rs`, `commands/normalize.rs` 使用
//! - 使用 `models/tally.rs`, `units.rs`

use crate::error::{Result, TallyError};
use crate::models::TallyResult;
use crate::units::{self, Unit};

use serde::Serialize;

/// 归一化因子（源粒子/秒）
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizationFactor {
    value: f64,
    std_dev: f64,
}

impl NormalizationFactor {
    /// 由功率 (W) 和加热计分计算归一化因子
    ///
    /// 加热计分须为能量单位（先换算为 J/source）。
    pub fn compute(power: f64, heating: &TallyResult) -> Result<Self> {
        // NaN 也视为非正
        if !(power > 0.0) || !power.is_finite() {
            return Err(TallyError::NonPositivePower { power });
        }

        let heating = heating.convert_to(Unit::Joule)?;
        if heating.mean() <= 0.0 {
            return Err(TallyError::ZeroHeatingRate {
                mean: heating.mean(),
            });
        }

        let source_per_sec = power / heating.mean();
        let relative_uncertainty = heating.std_dev() / heating.mean();
        let std_dev = source_per_sec * relative_uncertainty;

        // 极小（次正规）的加热率会使除法溢出
        if !source_per_sec.is_finite() || !std_dev.is_finite() {
            return Err(TallyError::InvalidFactor(format!(
                "{} W over {} J/source is not a finite source rate",
                power,
                heating.mean()
            )));
        }

        Ok(NormalizationFactor {
            value: source_per_sec,
            std_dev,
        })
    }

    /// 功率使用任意功率单位 (W, kW, MW, eV/s, MeV/s)
    pub fn from_power(power: f64, power_unit: Unit, heating: &TallyResult) -> Result<Self> {
        let watts = units::convert(power, power_unit, Unit::Watt)?;
        Self::compute(watts, heating)
    }

    /// 直接给定因子值（例如来自其他运行）
    pub fn new(value: f64, std_dev: f64) -> Result<Self> {
        if !(value > 0.0) || !value.is_finite() {
            return Err(TallyError::InvalidFactor(format!(
                "value must be positive and finite, got {}",
                value
            )));
        }
        if !(std_dev >= 0.0) || !std_dev.is_finite() {
            return Err(TallyError::InvalidFactor(format!(
                "std_dev must be finite and >= 0, got {}",
                std_dev
            )));
        }
        Ok(NormalizationFactor { value, std_dev })
    }

    /// 恒等因子 (1.0 ± 0.0)
    pub fn identity() -> Self {
        NormalizationFactor {
            value: 1.0,
            std_dev: 0.0,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    pub fn relative_error(&self) -> f64 {
        self.std_dev / self.value
    }
}

impl std::fmt::Display for NormalizationFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.6e} ± {:.3e} source/s ({:.3}%)",
            self.value,
            self.std_dev,
            self.relative_error() * 100.0
        )
    }
}
