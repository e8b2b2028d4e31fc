//! # 物理单位与换算
//!
//! 以枚举标记表示物理单位，每个单位带有到 SI 基准的换算系数
//! （能量 → J，计数 → 次，时间 → s）以及由 {能量, 计数, 时间} 指数
//! 构成的量纲。量纲不同的单位之间不允许换算，防止 eV 与 J 被静默混用。
//!
//! ## 支持的单位
//! - 能量: eV, keV, MeV, J
//! - 计数: count（反应数 / 粒子数）
//! - 时间: s, min, h, d
//! - 功率: W, kW, MW, eV/s, MeV/s
//! - 速率: 1/s
//!
//! ## 依赖关系
//! - 被 `models/`, `normalization/`, `parsers/` 使用
//! - 使用 `constants.rs`

use crate::constants::{
    EV_PER_KEV, EV_PER_MEV, JOULES_PER_EV, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use crate::error::{Result, TallyError};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 量纲：{能量, 计数, 时间} 的整数指数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension {
    pub energy: i8,
    pub count: i8,
    pub time: i8,
}

impl Dimension {
    pub const ENERGY: Dimension = Dimension::new(1, 0, 0);
    pub const COUNT: Dimension = Dimension::new(0, 1, 0);
    pub const TIME: Dimension = Dimension::new(0, 0, 1);
    pub const POWER: Dimension = Dimension::new(1, 0, -1);
    pub const RATE: Dimension = Dimension::new(0, 0, -1);

    pub const fn new(energy: i8, count: i8, time: i8) -> Self {
        Dimension {
            energy,
            count,
            time,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "energy^{} count^{} time^{}",
            self.energy, self.count, self.time
        )
    }
}

/// 物理单位标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Unit {
    ElectronVolt,
    KiloElectronVolt,
    MegaElectronVolt,
    Joule,
    Count,
    Second,
    Minute,
    Hour,
    Day,
    Watt,
    Kilowatt,
    Megawatt,
    ElectronVoltPerSecond,
    MegaElectronVoltPerSecond,
    PerSecond,
}

impl Unit {
    /// 全部单位（用于遍历测试和帮助信息）
    pub const ALL: [Unit; 15] = [
        Unit::ElectronVolt,
        Unit::KiloElectronVolt,
        Unit::MegaElectronVolt,
        Unit::Joule,
        Unit::Count,
        Unit::Second,
        Unit::Minute,
        Unit::Hour,
        Unit::Day,
        Unit::Watt,
        Unit::Kilowatt,
        Unit::Megawatt,
        Unit::ElectronVoltPerSecond,
        Unit::MegaElectronVoltPerSecond,
        Unit::PerSecond,
    ];

    /// 单位的量纲
    pub fn dimension(&self) -> Dimension {
        match self {
            Unit::ElectronVolt | Unit::KiloElectronVolt | Unit::MegaElectronVolt | Unit::Joule => {
                Dimension::ENERGY
            }
            Unit::Count => Dimension::COUNT,
            Unit::Second | Unit::Minute | Unit::Hour | Unit::Day => Dimension::TIME,
            Unit::Watt
            | Unit::Kilowatt
            | Unit::Megawatt
            | Unit::ElectronVoltPerSecond
            | Unit::MegaElectronVoltPerSecond => Dimension::POWER,
            Unit::PerSecond => Dimension::RATE,
        }
    }

    /// 到 SI 基准单位的换算系数
    pub fn to_base(&self) -> f64 {
        match self {
            Unit::ElectronVolt => JOULES_PER_EV,
            Unit::KiloElectronVolt => EV_PER_KEV * JOULES_PER_EV,
            Unit::MegaElectronVolt => EV_PER_MEV * JOULES_PER_EV,
            Unit::Joule => 1.0,
            Unit::Count => 1.0,
            Unit::Second => 1.0,
            Unit::Minute => SECONDS_PER_MINUTE,
            Unit::Hour => SECONDS_PER_HOUR,
            Unit::Day => SECONDS_PER_DAY,
            Unit::Watt => 1.0,
            Unit::Kilowatt => 1.0e3,
            Unit::Megawatt => 1.0e6,
            Unit::ElectronVoltPerSecond => JOULES_PER_EV,
            Unit::MegaElectronVoltPerSecond => EV_PER_MEV * JOULES_PER_EV,
            Unit::PerSecond => 1.0,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::ElectronVolt => "eV",
            Unit::KiloElectronVolt => "keV",
            Unit::MegaElectronVolt => "MeV",
            Unit::Joule => "J",
            Unit::Count => "count",
            Unit::Second => "s",
            Unit::Minute => "min",
            Unit::Hour => "h",
            Unit::Day => "d",
            Unit::Watt => "W",
            Unit::Kilowatt => "kW",
            Unit::Megawatt => "MW",
            Unit::ElectronVoltPerSecond => "eV/s",
            Unit::MegaElectronVoltPerSecond => "MeV/s",
            Unit::PerSecond => "1/s",
        }
    }

    /// 检查两个单位是否量纲兼容
    pub fn is_compatible(&self, other: Unit) -> bool {
        self.dimension() == other.dimension()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Unit {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        // 先区分大小写匹配（MeV 与 mev 之外的 "M"/"m" 前缀有歧义）
        if let Some(unit) = Unit::ALL.iter().find(|u| u.symbol() == trimmed) {
            return Ok(*unit);
        }

        match trimmed.to_lowercase().as_str() {
            "ev" => Ok(Unit::ElectronVolt),
            "kev" => Ok(Unit::KiloElectronVolt),
            "mev" => Ok(Unit::MegaElectronVolt),
            "j" | "joule" | "joules" => Ok(Unit::Joule),
            "count" | "counts" | "reactions" | "particles" | "1" => Ok(Unit::Count),
            "sec" | "second" | "seconds" => Ok(Unit::Second),
            "minute" | "minutes" => Ok(Unit::Minute),
            "hour" | "hours" => Ok(Unit::Hour),
            "day" | "days" => Ok(Unit::Day),
            "w" | "watt" | "watts" => Ok(Unit::Watt),
            "kw" | "kilowatt" | "kilowatts" => Ok(Unit::Kilowatt),
            // 小写 "mw" 按功率量级解释为兆瓦
            "mw" | "megawatt" | "megawatts" => Ok(Unit::Megawatt),
            "ev/s" => Ok(Unit::ElectronVoltPerSecond),
            "mev/s" => Ok(Unit::MegaElectronVoltPerSecond),
            "1/s" | "/s" | "reactions/s" => Ok(Unit::PerSecond),
            _ => Err(TallyError::UnknownUnit(s.to_string())),
        }
    }
}

impl TryFrom<String> for Unit {
    type Error = TallyError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.symbol().to_string()
    }
}

/// 单位换算
///
/// 量纲不同时返回 [`TallyError::UnitMismatch`]，从不静默强制转换。
pub fn convert(value: f64, from_unit: Unit, to_unit: Unit) -> Result<f64> {
    if !from_unit.is_compatible(to_unit) {
        return Err(TallyError::UnitMismatch {
            from: from_unit,
            to: to_unit,
        });
    }
    if from_unit == to_unit {
        return Ok(value);
    }
    Ok(value * from_unit.to_base() / to_unit.to_base())
}
