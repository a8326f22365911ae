// ==========================================
// 人员排班覆盖分析系统 - 领域类型定义
// ==========================================
// 职责: 班次/在岗状态/风险等级枚举
// 序列化格式: snake_case (与数据集 JSON 一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 班次 (Shift)
// ==========================================
// 红线: 枚举制,不接受自由文本班次
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shift {
    Morning, // 早班
    Evening, // 晚班
    Night,   // 夜班
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shift::Morning => write!(f, "morning"),
            Shift::Evening => write!(f, "evening"),
            Shift::Night => write!(f, "night"),
        }
    }
}

impl Shift {
    /// 从字符串解析班次 (大小写不敏感)
    ///
    /// # 返回
    /// - Some(Shift): 已知班次
    /// - None: 未知班次 (由 API 层转换为过滤条件错误)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "morning" => Some(Shift::Morning),
            "evening" => Some(Shift::Evening),
            "night" => Some(Shift::Night),
            _ => None,
        }
    }
}

// ==========================================
// 在岗状态 (Assignment Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    #[default]
    Scheduled,   // 已排班
    Unavailable, // 不可用(缺勤等)
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignmentStatus::Scheduled => write!(f, "scheduled"),
            AssignmentStatus::Unavailable => write!(f, "unavailable"),
        }
    }
}

// ==========================================
// 风险等级 (Risk Level)
// ==========================================
// 顺序: Critical < Monitor < Stable
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Critical, // 危险(缺口严重)
    Monitor,  // 关注(轻度缺口)
    Stable,   // 正常(覆盖达标)
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Critical => write!(f, "critical"),
            RiskLevel::Monitor => write!(f, "monitor"),
            RiskLevel::Stable => write!(f, "stable"),
        }
    }
}
