//! # 计分结果数据模型
//!
//! 存储单个观测量的每源粒子均值与标准差。
//!
//! 构造后不可变：新的统计样本产生新的 TallyResult，而非修改旧值。
//!
//! ## 依赖关系
//! - 被 `normalization/`, `parsers/tally_csv.rs`, `export.rs` 使用
//! - 使用 `units.rs`

use crate::error::{Result, TallyError};
use crate::units::{self, Unit};

use serde::Serialize;

/// 计分结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TallyResult {
    name: String,
    mean: f64,
    std_dev: f64,
    unit: Unit,
}

impl TallyResult {
    /// 创建计分结果，检查 `std_dev >= 0` 且数值有限
    pub fn new(name: impl Into<String>, mean: f64, std_dev: f64, unit: Unit) -> Result<Self> {
        let name = name.into();

        if !mean.is_finite() {
            return Err(TallyError::InvalidTally {
                name,
                reason: format!("mean must be finite, got {}", mean),
            });
        }
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(TallyError::InvalidTally {
                name,
                reason: format!("std_dev must be finite and >= 0, got {}", std_dev),
            });
        }

        Ok(TallyResult {
            name,
            mean,
            std_dev,
            unit,
        })
    }

    /// 精确值（零不确定度）
    pub fn exact(name: impl Into<String>, value: f64, unit: Unit) -> Result<Self> {
        Self::new(name, value, 0.0, unit)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// 相对不确定度 σ/|μ|，均值为零时返回 0
    pub fn relative_error(&self) -> f64 {
        if self.mean == 0.0 {
            0.0
        } else {
            self.std_dev / self.mean.abs()
        }
    }

    /// 换算到另一单位，返回新的结果
    pub fn convert_to(&self, unit: Unit) -> Result<TallyResult> {
        Ok(TallyResult {
            name: self.name.clone(),
            mean: units::convert(self.mean, self.unit, unit)?,
            std_dev: units::convert(self.std_dev, self.unit, unit)?.abs(),
            unit,
        })
    }
}

impl std::fmt::Display for TallyResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} = {:.6e} ± {:.3e} {}",
            self.name, self.mean, self.std_dev, self.unit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_std_dev_rejected() {
        let err = TallyResult::new("fission", 1.0, -0.1, Unit::Count).unwrap_err();
        assert!(matches!(err, TallyError::InvalidTally { .. }));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(TallyResult::new("heating", f64::NAN, 0.0, Unit::ElectronVolt).is_err());
        assert!(TallyResult::new("heating", 1.0, f64::INFINITY, Unit::ElectronVolt).is_err());
    }

    #[test]
    fn test_relative_error() {
        let t = TallyResult::new("fission", 0.4, 0.004, Unit::Count).unwrap();
        assert!((t.relative_error() - 0.01).abs() < 1e-15);

        let zero = TallyResult::new("absorption", 0.0, 0.0, Unit::Count).unwrap();
        assert_eq!(zero.relative_error(), 0.0);
    }

    #[test]
    fn test_convert_to_joule() {
        let ev = TallyResult::new("heating", 7.623e7, 7.623e4, Unit::ElectronVolt).unwrap();
        let j = ev.convert_to(Unit::Joule).unwrap();

        assert_eq!(j.unit(), Unit::Joule);
        assert_eq!(j.name(), "heating");
        assert!((j.mean() - 7.623e7 * 1.602176634e-19).abs() < 1e-25);
        assert!((j.relative_error() - ev.relative_error()).abs() < 1e-12);
        // 原值不变
        assert_eq!(ev.unit(), Unit::ElectronVolt);
    }

    #[test]
    fn test_convert_to_incompatible_unit() {
        let t = TallyResult::new("fission", 0.4, 0.004, Unit::Count).unwrap();
        assert!(matches!(
            t.convert_to(Unit::Joule),
            Err(TallyError::UnitMismatch { .. })
        ));
    }
}
