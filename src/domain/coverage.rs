// ==========================================
// 人员排班覆盖分析系统 - 覆盖分析实体
// ==========================================
// 职责: 定义有效排班、覆盖桶与覆盖洞察
// 红线: 均为派生数据,按请求重算,不持久化、不回写
// ==========================================

use crate::domain::schedule::DateRange;
use crate::domain::types::{AssignmentStatus, RiskLevel, Shift};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// 有效排班 (Effective Assignment)
// ==========================================

/// 把截至某日的全部更新事件折叠到基线后,员工的实际排班状态
///
/// 与 ScheduleEntry 字段一致;新入职事件会合成出
/// 无基线对应的有效排班。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveAssignment {
    pub date: NaiveDate,
    pub employee_id: String,
    pub role: String,
    pub shift: Shift,
    pub status: AssignmentStatus,
}

// ==========================================
// 覆盖桶键 (Bucket Key)
// ==========================================

/// 聚合单元键: (日期, 班次, 岗位)
///
/// 派生 Ord 的字段顺序即输出排序: 按 (date, shift, role) 升序
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BucketKey {
    pub date: NaiveDate,
    pub shift: Shift,
    pub role: String,
}

// ==========================================
// 覆盖桶 (Coverage Bucket)
// ==========================================

/// 同一 (日期, 班次, 岗位) 下的人数统计与风险评级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageBucket {
    /// 基线中该键下状态为已排班的人数 (不受更新事件影响)
    pub scheduled_count: u32,
    /// 应用更新后该键下状态为已排班的人数
    pub available_count: u32,
    /// available_count - scheduled_count, 负数表示缺口
    pub delta: i32,
    /// 风险等级 (由分类器派生)
    pub risk_level: RiskLevel,
}

// ==========================================
// 覆盖洞察 (Coverage Insight)
// ==========================================

/// 单个覆盖桶的对外输出形态: 桶键 + 统计 + 处置建议
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageInsight {
    pub date: NaiveDate,
    pub shift: Shift,
    pub role: String,
    pub scheduled_count: u32,
    pub available_count: u32,
    pub delta: i32,
    pub risk_level: RiskLevel,
    /// 面向人工消费者的处置建议
    pub recommendation: String,
}

impl CoverageInsight {
    /// 由桶键与桶统计组装洞察
    pub fn from_bucket(key: &BucketKey, bucket: &CoverageBucket, recommendation: String) -> Self {
        Self {
            date: key.date,
            shift: key.shift,
            role: key.role.clone(),
            scheduled_count: bucket.scheduled_count,
            available_count: bucket.available_count,
            delta: bucket.delta,
            risk_level: bucket.risk_level,
            recommendation,
        }
    }
}

// ==========================================
// 覆盖报告 (Coverage Report)
// ==========================================

/// 一次查询的完整报告封装
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// 报告生成时间 (UTC)
    pub generated_at: NaiveDateTime,
    /// 基线数据集覆盖的日期区间
    pub date_range: DateRange,
    /// 按 (date, shift, role) 升序的洞察列表
    pub insights: Vec<CoverageInsight>,
    /// 过滤条件回显与汇总信息
    pub metadata: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(date: (i32, u32, u32), shift: Shift, role: &str) -> BucketKey {
        BucketKey {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            shift,
            role: role.to_string(),
        }
    }

    #[test]
    fn test_bucket_key_ordering() {
        // 日期优先,其次班次,最后岗位
        let a = key((2025, 1, 10), Shift::Night, "nurse");
        let b = key((2025, 1, 11), Shift::Morning, "cashier");
        assert!(a < b);

        let c = key((2025, 1, 10), Shift::Morning, "nurse");
        let d = key((2025, 1, 10), Shift::Evening, "nurse");
        assert!(c < d);

        let e = key((2025, 1, 10), Shift::Morning, "cashier");
        let f = key((2025, 1, 10), Shift::Morning, "nurse");
        assert!(e < f);
    }

    #[test]
    fn test_insight_from_bucket() {
        let k = key((2025, 1, 10), Shift::Morning, "nurse");
        let bucket = CoverageBucket {
            scheduled_count: 3,
            available_count: 2,
            delta: -1,
            risk_level: RiskLevel::Monitor,
        };
        let insight = CoverageInsight::from_bucket(&k, &bucket, "观察".to_string());
        assert_eq!(insight.role, "nurse");
        assert_eq!(insight.delta, -1);
        assert_eq!(insight.risk_level, RiskLevel::Monitor);
    }
}
