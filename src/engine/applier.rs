// ==========================================
// 人员排班覆盖分析系统 - 更新折叠引擎
// ==========================================
// 职责: 把更新事件投影到基线排班,得出有效排班
// 输入: 截止日期 + 基线条目 + 更新事件
// 输出: 有效排班列表 (基线顺序,新入职按事件顺序追加)
// 红线: 不修改基线,同员工同日期后发事件逐字段覆盖先发事件
// ==========================================

use crate::domain::coverage::EffectiveAssignment;
use crate::domain::schedule::ScheduleEntry;
use crate::domain::types::AssignmentStatus;
use crate::domain::update::{UpdateEvent, UpdateKind};
use chrono::NaiveDate;
use std::collections::HashMap;

// ==========================================
// UpdateApplier - 更新折叠引擎
// ==========================================
pub struct UpdateApplier {
    // 无状态引擎,不需要注入依赖
}

impl UpdateApplier {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 计算截至某日的有效排班
    ///
    /// 算法:
    /// 1. 以基线条目为种子,按 (日期, 员工) 建立索引
    /// 2. 过滤出 `date <= as_of` 的事件,按 (员工, 日期, 原始序号)
    ///    稳定排序,保证数据集未预排序时仍有确定的后写覆盖语义
    /// 3. 逐事件折叠: 缺勤置为不可用,调班/转岗/调动改写对应字段,
    ///    新入职合成无基线对应的有效排班
    ///
    /// 指向不存在 (日期, 员工) 条目的非新入职事件被忽略;
    /// 未被任何事件触及的员工原样通过,状态保持已排班。
    ///
    /// # 参数
    /// - `as_of`: 截止日期 (晚于该日期的事件不参与折叠)
    /// - `entries`: 基线排班条目
    /// - `events`: 更新事件
    pub fn effective_assignments(
        &self,
        as_of: NaiveDate,
        entries: &[ScheduleEntry],
        events: &[UpdateEvent],
    ) -> Vec<EffectiveAssignment> {
        let mut assignments: Vec<EffectiveAssignment> = entries
            .iter()
            .map(|entry| EffectiveAssignment {
                date: entry.date,
                employee_id: entry.employee_id.clone(),
                role: entry.role.clone(),
                shift: entry.shift,
                status: entry.status,
            })
            .collect();

        // (日期, 员工) -> 有效排班下标;重复键以后出现者为准
        let mut index: HashMap<(NaiveDate, String), usize> = HashMap::new();
        for (i, assignment) in assignments.iter().enumerate() {
            index.insert((assignment.date, assignment.employee_id.clone()), i);
        }

        // 稳定排序键: (员工, 日期, 原始序号)
        let mut applicable: Vec<(usize, &UpdateEvent)> = events
            .iter()
            .enumerate()
            .filter(|(_, event)| event.date <= as_of)
            .collect();
        applicable.sort_by(|(ia, a), (ib, b)| {
            (a.employee_id.as_str(), a.date, *ia).cmp(&(b.employee_id.as_str(), b.date, *ib))
        });

        for (_, event) in applicable {
            let key = (event.date, event.employee_id.clone());

            // 新入职: 无需基线条目,必要时就地覆盖同键条目
            if let UpdateKind::NewHire { shift, role } = &event.kind {
                match index.get(&key) {
                    Some(&i) => {
                        let assignment = &mut assignments[i];
                        assignment.shift = *shift;
                        assignment.role = role.clone();
                        assignment.status = AssignmentStatus::Scheduled;
                    }
                    None => {
                        assignments.push(EffectiveAssignment {
                            date: event.date,
                            employee_id: event.employee_id.clone(),
                            role: role.clone(),
                            shift: *shift,
                            status: AssignmentStatus::Scheduled,
                        });
                        index.insert(key, assignments.len() - 1);
                    }
                }
                continue;
            }

            let i = match index.get(&key) {
                Some(&i) => i,
                None => continue,
            };
            let assignment = &mut assignments[i];

            match &event.kind {
                UpdateKind::Absence => {
                    // 条目保留在原桶中,与"基线即不在排班"区分开
                    assignment.status = AssignmentStatus::Unavailable;
                }
                UpdateKind::ShiftChange { to_shift } => {
                    assignment.shift = *to_shift;
                }
                UpdateKind::RoleChange { to_role } => {
                    assignment.role = to_role.clone();
                }
                UpdateKind::Transfer { to_shift, to_role } => {
                    if let Some(shift) = to_shift {
                        assignment.shift = *shift;
                    }
                    if let Some(role) = to_role {
                        assignment.role = role.clone();
                    }
                }
                UpdateKind::NewHire { .. } => {} // 已在上方处理
            }
        }

        assignments
    }
}

impl Default for UpdateApplier {
    fn default() -> Self {
        Self::new()
    }
}
