//! # 能量沉积计分目录
//!
//! 登记可作为能量代理的计分及其适用条件，并给出计分选择的建议性警告。
//!
//! ## 计分
//! - `heating`: 总 KERMA 加热；仅中子输运时不含光子沉积
//! - `heating-local`: 光子能量就地沉积；需 MT=901 数据
//! - `fission-q-recoverable`: 可回收裂变能（随入射能量变化）
//! - `fission-q-prompt`: 瞬发裂变能
//! - `kappa-fission`: 常数可回收裂变能 × 裂变截面
//!
//! 警告仅供参考：调用方选择的计分始终照常使用。
//!
//! ## 依赖关系
//! - 被 `commands/normalize.rs`, `commands/scores.rs` 调用
//! - 使用 `models/score.rs`

use crate::error::{Result, TallyError};
use crate::models::{ScoreDescriptor, ScoreWarning, TransportMode};

use std::collections::HashMap;
use std::sync::LazyLock;

const PHOTON_OMISSION_WARNING: &str = "omits photon energy deposition; consider heating-local";
const SPECIAL_DATA_WARNING: &str = "requires MT=901 data; verify library support";

/// 计分目录
pub static SCORE_CATALOG: LazyLock<HashMap<&'static str, ScoreDescriptor>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();

        m.insert(
            "heating",
            ScoreDescriptor {
                name: "heating",
                physical_meaning: "Total nuclear heating (KERMA); photon energy is deposited only \
                                   when photons are transported",
                requires_coupled_transport: true,
                requires_special_data: false,
                caveat: None,
            },
        );

        m.insert(
            "heating-local",
            ScoreDescriptor {
                name: "heating-local",
                physical_meaning: "Nuclear heating with secondary photon energy deposited locally \
                                   at the collision site",
                requires_coupled_transport: false,
                requires_special_data: true,
                caveat: None,
            },
        );

        m.insert(
            "fission-q-recoverable",
            ScoreDescriptor {
                name: "fission-q-recoverable",
                physical_meaning: "Recoverable fission energy release (excludes neutrinos), \
                                   dependent on incident energy",
                requires_coupled_transport: false,
                requires_special_data: false,
                caveat: Some("excludes non-fission heating contributions"),
            },
        );

        m.insert(
            "fission-q-prompt",
            ScoreDescriptor {
                name: "fission-q-prompt",
                physical_meaning: "Prompt fission energy release (fragments, prompt neutrons \
                                   and prompt gammas)",
                requires_coupled_transport: false,
                requires_special_data: false,
                caveat: Some("excludes delayed fission energy; prefer fission-q-recoverable"),
            },
        );

        m.insert(
            "kappa-fission",
            ScoreDescriptor {
                name: "kappa-fission",
                physical_meaning: "Fission rate weighted by a constant recoverable energy per \
                                   fission",
                requires_coupled_transport: false,
                requires_special_data: false,
                caveat: Some(
                    "lacks incident-energy dependence; less accurate than fission-q-recoverable",
                ),
            },
        );

        m
    });

/// 查找计分描述
pub fn lookup(name: &str) -> Result<&'static ScoreDescriptor> {
    SCORE_CATALOG
        .get(name.trim())
        .ok_or_else(|| TallyError::UnknownScore {
            name: name.to_string(),
        })
}

/// 检查计分选择，返回建议性警告
pub fn validate(name: &str, mode: TransportMode) -> Result<Vec<ScoreWarning>> {
    let descriptor = lookup(name)?;
    let mut warnings = Vec::new();

    if descriptor.requires_coupled_transport && mode == TransportMode::NeutronOnly {
        warnings.push(ScoreWarning::new(descriptor.name, PHOTON_OMISSION_WARNING));
    }

    if descriptor.requires_special_data {
        warnings.push(ScoreWarning::new(descriptor.name, SPECIAL_DATA_WARNING));
    }

    if let Some(caveat) = descriptor.caveat {
        warnings.push(ScoreWarning::new(descriptor.name, caveat));
    }

    Ok(warnings)
}

/// 按名称排序的全部计分
pub fn scores() -> Vec<&'static ScoreDescriptor> {
    let mut all: Vec<_> = SCORE_CATALOG.values().collect();
    all.sort_by_key(|d| d.name);
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(name: &str, mode: TransportMode) -> Vec<String> {
        validate(name, mode)
            .unwrap()
            .into_iter()
            .map(|w| w.message)
            .collect()
    }

    #[test]
    fn test_lookup_known_score() {
        let d = lookup("heating-local").unwrap();
        assert_eq!(d.name, "heating-local");
        assert!(d.requires_special_data);
        assert!(!d.requires_coupled_transport);
    }

    #[test]
    fn test_lookup_unknown_score() {
        let err = lookup("flux").unwrap_err();
        assert!(matches!(err, TallyError::UnknownScore { ref name } if name == "flux"));
        assert!(validate("flux", TransportMode::NeutronOnly).is_err());
    }

    #[test]
    fn test_heating_neutron_only_warns() {
        assert_eq!(
            messages("heating", TransportMode::NeutronOnly),
            vec!["omits photon energy deposition; consider heating-local"]
        );
    }

    #[test]
    fn test_heating_coupled_is_clean() {
        assert!(messages("heating", TransportMode::CoupledNeutronPhoton).is_empty());
    }

    #[test]
    fn test_heating_local_warns_in_every_mode() {
        for mode in [TransportMode::NeutronOnly, TransportMode::CoupledNeutronPhoton] {
            assert_eq!(
                messages("heating-local", mode),
                vec!["requires MT=901 data; verify library support"]
            );
        }
    }

    #[test]
    fn test_fission_energy_scores_warn() {
        for mode in [TransportMode::NeutronOnly, TransportMode::CoupledNeutronPhoton] {
            assert_eq!(
                messages("fission-q-recoverable", mode),
                vec!["excludes non-fission heating contributions"]
            );
            assert_eq!(
                messages("kappa-fission", mode),
                vec!["lacks incident-energy dependence; less accurate than fission-q-recoverable"]
            );
        }
    }

    #[test]
    fn test_scores_sorted() {
        let names: Vec<_> = scores().iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            vec![
                "fission-q-prompt",
                "fission-q-recoverable",
                "heating",
                "heating-local",
                "kappa-fission"
            ]
        );
    }
}
