// ==========================================
// 人员排班覆盖分析系统 - 更新事件实体
// ==========================================
// 职责: 定义排班更新事件及其类型载荷
// 红线: kind 为封闭枚举,未知类型在解析期拒绝,
//       不允许运行期字符串分支
// ==========================================

use crate::domain::schedule::DateRange;
use crate::domain::types::Shift;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// 更新类型 (Update Kind)
// ==========================================

/// 更新事件类型及其专属载荷
///
/// 序列化采用内部标签 `kind`,各变体的字段与事件一起平铺:
/// `{ "date": ..., "employee_id": ..., "kind": "shift_change", "to_shift": "night" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UpdateKind {
    /// 缺勤: 状态置为不可用,条目保留在原桶中
    Absence,
    /// 调班: 仅变更班次
    ShiftChange { to_shift: Shift },
    /// 转岗: 仅变更岗位
    RoleChange { to_role: String },
    /// 新入职: 生成无基线对应的新有效排班
    NewHire { shift: Shift, role: String },
    /// 调动: 班次与岗位的组合变更,至少携带其一
    Transfer {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to_shift: Option<Shift>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to_role: Option<String>,
    },
}

// ==========================================
// 更新事件 (Update Event)
// ==========================================

/// 一条影响某员工排班的更新事件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateEvent {
    /// 事件生效日期
    pub date: NaiveDate,
    /// 员工标识
    pub employee_id: String,
    /// 事件类型与载荷
    #[serde(flatten)]
    pub kind: UpdateKind,
}

// ==========================================
// 更新快照 (Update Snapshot)
// ==========================================

/// 完整的更新事件数据集
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSnapshot {
    /// 数据集覆盖的日期区间
    pub date_range: DateRange,
    /// 按日期排序的更新事件
    pub staff_updates: Vec<UpdateEvent>,
}
