// ==========================================
// 人员排班覆盖分析系统 - 配置层
// ==========================================
// 职责: 风险阈值等业务参数的加载与校验
// 说明: "危险"的业务含义因场景而异,阈值必须可配置,
//       默认值仅为占位业务规则
// ==========================================

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ==========================================
// 风险阈值 (Risk Thresholds)
// ==========================================

/// 风险等级判定阈值
///
/// - `delta >= stable_min` → stable
/// - `monitor_floor <= delta < stable_min` → monitor
/// - `delta < monitor_floor` → critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// 覆盖达标下限 (缺省 0: 不出现缺口即为正常)
    #[serde(default = "default_stable_min")]
    pub stable_min: i32,
    /// 关注级下限 (缺省 -2: 缺口不超过两人仅需关注)
    #[serde(default = "default_monitor_floor")]
    pub monitor_floor: i32,
}

fn default_stable_min() -> i32 {
    0
}

fn default_monitor_floor() -> i32 {
    -2
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            stable_min: default_stable_min(),
            monitor_floor: default_monitor_floor(),
        }
    }
}

impl RiskThresholds {
    /// 校验阈值自洽性
    pub fn validate(&self) -> Result<()> {
        if self.monitor_floor >= self.stable_min {
            bail!(
                "风险阈值配置无效: monitor_floor({}) 必须小于 stable_min({})",
                self.monitor_floor,
                self.stable_min
            );
        }
        Ok(())
    }
}

// ==========================================
// CoverageConfig - 引擎配置
// ==========================================

/// 覆盖分析引擎配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageConfig {
    /// 风险等级判定阈值
    #[serde(default)]
    pub risk_thresholds: RiskThresholds,
}

impl CoverageConfig {
    /// 从 JSON 配置文件加载,缺失字段取默认值
    ///
    /// # 参数
    /// - `path`: 配置文件路径
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("配置文件读取失败: {}", path.display()))?;
        let config: CoverageConfig = serde_json::from_str(&raw)
            .with_context(|| format!("配置文件解析失败: {}", path.display()))?;
        config.risk_thresholds.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let thresholds = RiskThresholds::default();
        assert_eq!(thresholds.stable_min, 0);
        assert_eq!(thresholds.monitor_floor, -2);
        assert!(thresholds.validate().is_ok());
    }

    #[test]
    fn test_invalid_thresholds_rejected() {
        let thresholds = RiskThresholds {
            stable_min: -3,
            monitor_floor: -1,
        };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: CoverageConfig =
            serde_json::from_str(r#"{ "risk_thresholds": { "monitor_floor": -5 } }"#).unwrap();
        assert_eq!(config.risk_thresholds.stable_min, 0);
        assert_eq!(config.risk_thresholds.monitor_floor, -5);
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: CoverageConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CoverageConfig::default());
    }
}
