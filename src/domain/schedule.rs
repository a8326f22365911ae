// ==========================================
// 人员排班覆盖分析系统 - 基线排班实体
// ==========================================
// 职责: 定义排班快照与排班条目
// 红线: 基线数据加载后只读,不允许原地修改
// ==========================================

use crate::domain::types::{AssignmentStatus, Shift};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// 日期区间 (Date Range)
// ==========================================

/// 数据集覆盖的闭区间日期范围
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

// ==========================================
// 排班条目 (Schedule Entry)
// ==========================================

/// 一条计划内的排班记录: 某员工在某日某班次承担某岗位
///
/// 基线数据,加载后不再变化;更新事件只投影出派生状态,
/// 不回写基线。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// 排班日期
    pub date: NaiveDate,
    /// 员工标识 (不透明字符串)
    pub employee_id: String,
    /// 岗位标签
    pub role: String,
    /// 班次
    pub shift: Shift,
    /// 在岗状态 (缺省为已排班)
    #[serde(default)]
    pub status: AssignmentStatus,
}

// ==========================================
// 排班快照 (Schedule Snapshot)
// ==========================================

/// 完整的基线排班数据集
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSnapshot {
    /// 数据集覆盖的日期区间
    pub date_range: DateRange,
    /// 按日期排序的排班条目
    pub staff_schedule: Vec<ScheduleEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_status_defaults_to_scheduled() {
        let json = r#"{
            "date": "2025-01-10",
            "employee_id": "E001",
            "role": "nurse",
            "shift": "morning"
        }"#;
        let entry: ScheduleEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.status, AssignmentStatus::Scheduled);
        assert_eq!(entry.shift, Shift::Morning);
    }

    #[test]
    fn test_snapshot_parse() {
        let json = r#"{
            "date_range": { "start_date": "2025-01-10", "end_date": "2025-01-12" },
            "staff_schedule": [
                { "date": "2025-01-10", "employee_id": "E001", "role": "nurse",
                  "shift": "morning", "status": "unavailable" }
            ]
        }"#;
        let snapshot: ScheduleSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.staff_schedule.len(), 1);
        assert_eq!(
            snapshot.staff_schedule[0].status,
            AssignmentStatus::Unavailable
        );
    }
}
