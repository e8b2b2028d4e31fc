//! # 物理常数
//!
//! 进程级不可变常数，所有单位换算与一致性检查均引用此处，
//! 不在使用点内联魔数。
//!
//! ## 数据来源
//! CODATA 2018（SI 2019 重新定义后 e 为精确值）
//!
//! ## 依赖关系
//! - 被 `units.rs`, `normalization/consistency.rs` 使用
//! - 无外部模块依赖

/// 1 eV 对应的焦耳数（精确值）
pub const JOULES_PER_EV: f64 = 1.602176634e-19;

/// 1 keV 对应的 eV 数
pub const EV_PER_KEV: f64 = 1.0e3;

/// 1 MeV 对应的 eV 数
pub const EV_PER_MEV: f64 = 1.0e6;

pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const SECONDS_PER_HOUR: f64 = 3600.0;
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// 常用的粗略裂变能 (MeV/fission)
///
/// 实际可回收能量通常低几个百分点（约 193 MeV）。
pub const NOMINAL_ENERGY_PER_FISSION_MEV: f64 = 200.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mev_in_joules() {
        let j = NOMINAL_ENERGY_PER_FISSION_MEV * EV_PER_MEV * JOULES_PER_EV;
        assert!((j - 3.204353268e-11).abs() < 1e-20);
    }
}
