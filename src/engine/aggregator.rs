// ==========================================
// 人员排班覆盖分析系统 - 覆盖聚合引擎
// ==========================================
// 职责: 按 (日期, 班次, 岗位) 聚合基线与有效排班人数
// 输入: 截止日期 + 基线条目 + 更新事件
// 输出: BucketKey -> CoverageBucket 的有序映射
// ==========================================

use crate::config::RiskThresholds;
use crate::domain::coverage::{BucketKey, CoverageBucket};
use crate::domain::schedule::ScheduleEntry;
use crate::domain::types::AssignmentStatus;
use crate::domain::update::UpdateEvent;
use crate::engine::applier::UpdateApplier;
use crate::engine::risk::RiskClassifier;
use chrono::NaiveDate;
use std::collections::BTreeMap;

// ==========================================
// CoverageAggregator - 覆盖聚合引擎
// ==========================================
pub struct CoverageAggregator {
    applier: UpdateApplier,
    classifier: RiskClassifier,
}

impl CoverageAggregator {
    /// 构造函数
    ///
    /// # 参数
    /// - `thresholds`: 风险判定阈值,传递给内部分类器
    pub fn new(thresholds: RiskThresholds) -> Self {
        Self {
            applier: UpdateApplier::new(),
            classifier: RiskClassifier::new(thresholds),
        }
    }

    /// 构建覆盖桶
    ///
    /// 规则:
    /// - scheduled_count: 基线中该键下状态为已排班的条目数,
    ///   固定于基线,不受任何更新事件影响
    /// - available_count: 折叠更新后该键下状态为已排班的条目数
    /// - delta = available_count - scheduled_count
    /// - 两个计数均为零的键不生成桶
    ///
    /// 每个桶调用一次风险分类器。BTreeMap 保证结果按
    /// (date, shift, role) 升序,便于快照对比。
    ///
    /// # 参数
    /// - `as_of`: 截止日期
    /// - `entries`: 基线排班条目
    /// - `events`: 更新事件
    pub fn build_buckets(
        &self,
        as_of: NaiveDate,
        entries: &[ScheduleEntry],
        events: &[UpdateEvent],
    ) -> BTreeMap<BucketKey, CoverageBucket> {
        // 基线计数
        let mut scheduled: BTreeMap<BucketKey, u32> = BTreeMap::new();
        for entry in entries {
            if entry.status != AssignmentStatus::Scheduled {
                continue;
            }
            let key = BucketKey {
                date: entry.date,
                shift: entry.shift,
                role: entry.role.clone(),
            };
            *scheduled.entry(key).or_insert(0) += 1;
        }

        // 折叠更新后的有效计数
        let mut available: BTreeMap<BucketKey, u32> = BTreeMap::new();
        for assignment in self.applier.effective_assignments(as_of, entries, events) {
            if assignment.status != AssignmentStatus::Scheduled {
                continue;
            }
            let key = BucketKey {
                date: assignment.date,
                shift: assignment.shift,
                role: assignment.role,
            };
            *available.entry(key).or_insert(0) += 1;
        }

        // 合并两侧观察到的键
        let mut buckets = BTreeMap::new();
        let keys: Vec<BucketKey> = scheduled
            .keys()
            .chain(available.keys())
            .cloned()
            .collect();
        for key in keys {
            if buckets.contains_key(&key) {
                continue;
            }
            let scheduled_count = scheduled.get(&key).copied().unwrap_or(0);
            let available_count = available.get(&key).copied().unwrap_or(0);
            if scheduled_count == 0 && available_count == 0 {
                continue; // 不生成空桶
            }
            let delta = available_count as i32 - scheduled_count as i32;
            buckets.insert(
                key,
                CoverageBucket {
                    scheduled_count,
                    available_count,
                    delta,
                    risk_level: self.classifier.classify(delta),
                },
            );
        }

        buckets
    }
}

impl Default for CoverageAggregator {
    fn default() -> Self {
        Self::new(RiskThresholds::default())
    }
}
