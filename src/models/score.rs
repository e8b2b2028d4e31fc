//! # 计分描述数据模型
//!
//! 描述能量沉积代理计分的物理含义与适用条件，以及输运模式和建议性警告。
//!
//! ## 依赖关系
//! - 被 `catalog.rs` 使用
//! - 被 `commands/` 用于显示

use serde::Serialize;

/// 输运模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TransportMode {
    /// 仅中子输运
    NeutronOnly,
    /// 中子-光子耦合输运
    CoupledNeutronPhoton,
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportMode::NeutronOnly => write!(f, "neutron-only"),
            TransportMode::CoupledNeutronPhoton => write!(f, "coupled neutron-photon"),
        }
    }
}

/// 计分描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreDescriptor {
    /// 计分名称（与输运程序中的名称一致）
    pub name: &'static str,

    /// 物理含义
    pub physical_meaning: &'static str,

    /// 完整结果是否需要中子-光子耦合输运
    pub requires_coupled_transport: bool,

    /// 是否需要核数据库中并非总是存在的辅助数据
    pub requires_special_data: bool,

    /// 与模式无关的注意事项
    pub caveat: Option<&'static str>,
}

/// 计分选择的建议性警告（非致命）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreWarning {
    pub score: String,
    pub message: String,
}

impl ScoreWarning {
    pub fn new(score: impl Into<String>, message: impl Into<String>) -> Self {
        ScoreWarning {
            score: score.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ScoreWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' {}", self.score, self.message)
    }
}
