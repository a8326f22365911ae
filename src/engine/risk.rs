// ==========================================
// 人员排班覆盖分析系统 - 风险分类引擎
// ==========================================
// 职责: 由覆盖缺口 delta 判定风险等级
// 输入: delta = available_count - scheduled_count
// 输出: RiskLevel (stable / monitor / critical)
// ==========================================

use crate::config::RiskThresholds;
use crate::domain::types::RiskLevel;

// ==========================================
// RiskClassifier - 风险分类器
// ==========================================

/// 纯函数式的风险分类器,对全体整数 delta 完备,无副作用
pub struct RiskClassifier {
    thresholds: RiskThresholds,
}

impl RiskClassifier {
    /// 构造函数
    ///
    /// # 参数
    /// - `thresholds`: 风险判定阈值 (来自配置层)
    pub fn new(thresholds: RiskThresholds) -> Self {
        Self { thresholds }
    }

    /// 判定风险等级
    ///
    /// 规则 (可解释):
    /// - stable: 覆盖达标或超出基线
    /// - monitor: 轻度缺口
    /// - critical: 缺口超出关注下限
    ///
    /// # 参数
    /// - `delta`: 覆盖缺口 (负数表示人手不足)
    pub fn classify(&self, delta: i32) -> RiskLevel {
        if delta >= self.thresholds.stable_min {
            RiskLevel::Stable
        } else if delta >= self.thresholds.monitor_floor {
            RiskLevel::Monitor
        } else {
            RiskLevel::Critical
        }
    }
}

impl Default for RiskClassifier {
    fn default() -> Self {
        Self::new(RiskThresholds::default())
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_default_thresholds() {
        let classifier = RiskClassifier::default();

        assert_eq!(classifier.classify(3), RiskLevel::Stable);
        assert_eq!(classifier.classify(0), RiskLevel::Stable);
        assert_eq!(classifier.classify(-1), RiskLevel::Monitor);
        assert_eq!(classifier.classify(-2), RiskLevel::Monitor);
        assert_eq!(classifier.classify(-3), RiskLevel::Critical);
        assert_eq!(classifier.classify(i32::MIN), RiskLevel::Critical);
    }

    #[test]
    fn test_classify_is_monotonic() {
        // delta 越小,等级不得更优 (Critical < Monitor < Stable)
        let classifier = RiskClassifier::default();
        let mut prev = classifier.classify(-10);
        for delta in -9..=3 {
            let level = classifier.classify(delta);
            assert!(level >= prev, "delta={} 处单调性被破坏", delta);
            prev = level;
        }
    }

    #[test]
    fn test_classify_custom_thresholds() {
        // 更严格的业务口径: 任何缺口都进入关注,缺一人即危险
        let classifier = RiskClassifier::new(RiskThresholds {
            stable_min: 1,
            monitor_floor: 0,
        });

        assert_eq!(classifier.classify(1), RiskLevel::Stable);
        assert_eq!(classifier.classify(0), RiskLevel::Monitor);
        assert_eq!(classifier.classify(-1), RiskLevel::Critical);
    }
}
