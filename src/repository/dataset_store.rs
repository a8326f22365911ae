// ==========================================
// 人员排班覆盖分析系统 - 数据集仓储
// ==========================================
// 职责: 从 JSON 数据源加载基线排班与更新事件,按路径记忆化
// 约束: 每个进程生命周期内同一数据源至多加载一次;
//       缓存无 TTL、无失效信号,进程退出时销毁
// ==========================================

use crate::domain::schedule::ScheduleSnapshot;
use crate::domain::update::{UpdateKind, UpdateSnapshot};
use crate::repository::error::{StoreError, StoreResult};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::info;

// ==========================================
// DatasetStore - 数据集仓储
// ==========================================

/// 记忆化的数据集仓储,进程内唯一的共享状态
///
/// 首次访问时惰性加载;并发首访时由写锁保证只发生一次加载,
/// 全部并发调用方观察到同一份完成的结果。预热后读取只走读锁,
/// 底层快照不再变化。
pub struct DatasetStore {
    schedule_path: PathBuf,
    updates_path: PathBuf,
    schedule_cache: RwLock<Option<Arc<ScheduleSnapshot>>>,
    updates_cache: RwLock<Option<Arc<UpdateSnapshot>>>,
}

impl DatasetStore {
    /// 创建数据集仓储
    ///
    /// # 参数
    /// - `schedule_path`: 基线排班 JSON 文件路径
    /// - `updates_path`: 更新事件 JSON 文件路径
    pub fn new(schedule_path: impl Into<PathBuf>, updates_path: impl Into<PathBuf>) -> Self {
        Self {
            schedule_path: schedule_path.into(),
            updates_path: updates_path.into(),
            schedule_cache: RwLock::new(None),
            updates_cache: RwLock::new(None),
        }
    }

    /// 加载基线排班快照 (记忆化)
    ///
    /// # 返回
    /// - Ok(Arc<ScheduleSnapshot>): 进程内共享的同一份快照
    /// - Err(StoreError::DataUnavailable): 数据源不可读或校验失败
    pub fn load_schedule(&self) -> StoreResult<Arc<ScheduleSnapshot>> {
        // 快路径: 预热后的缓存只走读锁
        if let Some(snapshot) = self
            .schedule_cache
            .read()
            .map_err(|e| lock_error(&self.schedule_path, &e))?
            .as_ref()
        {
            return Ok(Arc::clone(snapshot));
        }

        let mut guard = self
            .schedule_cache
            .write()
            .map_err(|e| lock_error(&self.schedule_path, &e))?;
        // 双重检查: 竞争中先到的加载者已填充缓存
        if let Some(snapshot) = guard.as_ref() {
            return Ok(Arc::clone(snapshot));
        }

        let snapshot: ScheduleSnapshot = read_json(&self.schedule_path)?;
        info!(
            path = %self.schedule_path.display(),
            entries = snapshot.staff_schedule.len(),
            "基线排班数据集加载完成"
        );

        let snapshot = Arc::new(snapshot);
        *guard = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// 加载更新事件快照 (记忆化)
    ///
    /// 未知 kind 在反序列化阶段拒绝;调动事件必须携带
    /// 班次或岗位至少其一,否则同样视为 schema 校验失败。
    pub fn load_updates(&self) -> StoreResult<Arc<UpdateSnapshot>> {
        if let Some(snapshot) = self
            .updates_cache
            .read()
            .map_err(|e| lock_error(&self.updates_path, &e))?
            .as_ref()
        {
            return Ok(Arc::clone(snapshot));
        }

        let mut guard = self
            .updates_cache
            .write()
            .map_err(|e| lock_error(&self.updates_path, &e))?;
        if let Some(snapshot) = guard.as_ref() {
            return Ok(Arc::clone(snapshot));
        }

        let snapshot: UpdateSnapshot = read_json(&self.updates_path)?;
        validate_updates(&self.updates_path, &snapshot)?;
        info!(
            path = %self.updates_path.display(),
            events = snapshot.staff_updates.len(),
            "更新事件数据集加载完成"
        );

        let snapshot = Arc::new(snapshot);
        *guard = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }
}

// ==========================================
// 内部辅助函数
// ==========================================

/// 读取并反序列化 JSON 数据源
fn read_json<T: DeserializeOwned>(path: &Path) -> StoreResult<T> {
    let raw = fs::read_to_string(path)
        .map_err(|e| StoreError::unavailable(path.display().to_string(), format!("读取失败: {}", e)))?;
    serde_json::from_str(&raw).map_err(|e| {
        StoreError::unavailable(path.display().to_string(), format!("schema 校验失败: {}", e))
    })
}

/// 反序列化之外的结构校验
fn validate_updates(path: &Path, snapshot: &UpdateSnapshot) -> StoreResult<()> {
    for (idx, event) in snapshot.staff_updates.iter().enumerate() {
        if event.employee_id.trim().is_empty() {
            return Err(StoreError::unavailable(
                path.display().to_string(),
                format!("第{}条更新事件缺少员工标识", idx + 1),
            ));
        }
        if let UpdateKind::Transfer { to_shift, to_role } = &event.kind {
            if to_shift.is_none() && to_role.is_none() {
                return Err(StoreError::unavailable(
                    path.display().to_string(),
                    format!("第{}条调动事件未携带班次或岗位", idx + 1),
                ));
            }
        }
    }
    Ok(())
}

fn lock_error(path: &Path, err: &dyn std::fmt::Display) -> StoreError {
    StoreError::unavailable(path.display().to_string(), format!("锁获取失败: {}", err))
}
