// ==========================================
// 人员排班覆盖分析系统 - 覆盖洞察 API
// ==========================================
// 职责: 对外提供覆盖洞察查询,供 HTTP/工具层调用
// 约束: 过滤校验是本层唯一校验;未知日期不是错误,
//       只产生空结果
// ==========================================

use crate::api::error::{InsightError, InsightResult};
use crate::config::CoverageConfig;
use crate::domain::coverage::{BucketKey, CoverageBucket, CoverageInsight, CoverageReport};
use crate::domain::schedule::ScheduleSnapshot;
use crate::domain::types::{RiskLevel, Shift};
use crate::domain::update::{UpdateKind, UpdateSnapshot};
use crate::engine::aggregator::CoverageAggregator;
use crate::repository::dataset_store::DatasetStore;
use chrono::{NaiveDate, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

// ==========================================
// 查询过滤条件
// ==========================================

/// 覆盖洞察查询的过滤条件,缺省字段不参与过滤
///
/// 日期由外部边界解析为 NaiveDate;班次与岗位以原始字符串
/// 传入,在本层按已知枚举校验。
#[derive(Debug, Clone, Default)]
pub struct InsightFilter {
    pub date: Option<NaiveDate>,
    pub role: Option<String>,
    pub shift: Option<String>,
}

// ==========================================
// InsightApi - 覆盖洞察 API
// ==========================================
pub struct InsightApi {
    store: Arc<DatasetStore>,
    aggregator: CoverageAggregator,
}

impl InsightApi {
    /// 构造函数
    ///
    /// # 参数
    /// - `store`: 进程内共享的数据集仓储
    /// - `config`: 引擎配置 (风险阈值)
    pub fn new(store: Arc<DatasetStore>, config: &CoverageConfig) -> Self {
        Self {
            store,
            aggregator: CoverageAggregator::new(config.risk_thresholds),
        }
    }

    /// 查询覆盖洞察
    ///
    /// 步骤:
    /// 1. 加载数据集 (记忆化,失败时向上传递数据源错误)
    /// 2. 校验班次/岗位过滤条件 (任何计算发生前)
    /// 3. 以日期过滤值或数据集最大日期为截止日期聚合覆盖桶
    /// 4. 应用过滤并合成处置建议
    ///
    /// 结果按 (date, shift, role) 升序,过滤无匹配时返回空列表。
    pub fn get_coverage_insights(
        &self,
        filter: &InsightFilter,
    ) -> InsightResult<Vec<CoverageInsight>> {
        let schedule = self.store.load_schedule()?;
        let updates = self.store.load_updates()?;

        let shift_filter = self.validate_shift_filter(filter)?;
        self.validate_role_filter(filter, &schedule, &updates)?;

        let as_of = match filter.date.or_else(|| latest_date(&schedule, &updates)) {
            Some(d) => d,
            None => return Ok(Vec::new()), // 空数据集
        };

        let buckets =
            self.aggregator
                .build_buckets(as_of, &schedule.staff_schedule, &updates.staff_updates);

        let insights: Vec<CoverageInsight> = buckets
            .iter()
            .filter(|&(key, _)| matches_filter(key, filter, shift_filter))
            .map(|(key, bucket)| {
                CoverageInsight::from_bucket(key, bucket, recommendation(key, bucket))
            })
            .collect();

        debug!(
            total_buckets = buckets.len(),
            matched = insights.len(),
            "覆盖洞察查询完成"
        );
        Ok(insights)
    }

    /// 生成覆盖报告 (洞察列表 + 报告封装)
    ///
    /// 报告携带生成时间、数据集日期区间与过滤条件回显。
    pub fn coverage_report(&self, filter: &InsightFilter) -> InsightResult<CoverageReport> {
        let insights = self.get_coverage_insights(filter)?;
        let schedule = self.store.load_schedule()?;

        let mut metadata = BTreeMap::new();
        if let Some(date) = filter.date {
            metadata.insert("filters.date".to_string(), date.to_string());
        }
        if let Some(role) = &filter.role {
            metadata.insert("filters.role".to_string(), role.clone());
        }
        if let Some(shift) = &filter.shift {
            metadata.insert("filters.shift".to_string(), shift.clone());
        }
        metadata.insert("total_insights".to_string(), insights.len().to_string());

        Ok(CoverageReport {
            generated_at: Utc::now().naive_utc(),
            date_range: schedule.date_range,
            insights,
            metadata,
        })
    }

    // ==========================================
    // 过滤条件校验
    // ==========================================

    /// 班次过滤值必须是已知班次枚举
    fn validate_shift_filter(&self, filter: &InsightFilter) -> InsightResult<Option<Shift>> {
        match &filter.shift {
            None => Ok(None),
            Some(raw) => match Shift::from_str(raw) {
                Some(shift) => Ok(Some(shift)),
                None => Err(InsightError::InvalidFilter {
                    field: "shift".to_string(),
                    value: raw.clone(),
                }),
            },
        }
    }

    /// 岗位过滤值必须出现在数据集的岗位集合中
    fn validate_role_filter(
        &self,
        filter: &InsightFilter,
        schedule: &ScheduleSnapshot,
        updates: &UpdateSnapshot,
    ) -> InsightResult<()> {
        let raw = match &filter.role {
            None => return Ok(()),
            Some(raw) => raw,
        };

        let known = known_roles(schedule, updates);
        if known.iter().any(|role| role.eq_ignore_ascii_case(raw)) {
            Ok(())
        } else {
            Err(InsightError::InvalidFilter {
                field: "role".to_string(),
                value: raw.clone(),
            })
        }
    }
}

// ==========================================
// 内部辅助函数
// ==========================================

/// 数据集观察到的岗位全集 (基线 + 更新事件载荷)
fn known_roles<'a>(schedule: &'a ScheduleSnapshot, updates: &'a UpdateSnapshot) -> Vec<&'a str> {
    let mut roles: Vec<&str> = schedule
        .staff_schedule
        .iter()
        .map(|entry| entry.role.as_str())
        .collect();
    for event in &updates.staff_updates {
        match &event.kind {
            UpdateKind::RoleChange { to_role } => roles.push(to_role.as_str()),
            UpdateKind::NewHire { role, .. } => roles.push(role.as_str()),
            UpdateKind::Transfer {
                to_role: Some(role),
                ..
            } => roles.push(role.as_str()),
            _ => {}
        }
    }
    roles
}

/// 两个数据集中出现过的最大日期
fn latest_date(schedule: &ScheduleSnapshot, updates: &UpdateSnapshot) -> Option<NaiveDate> {
    let schedule_max = schedule.staff_schedule.iter().map(|e| e.date).max();
    let updates_max = updates.staff_updates.iter().map(|e| e.date).max();
    schedule_max.max(updates_max)
}

fn matches_filter(key: &BucketKey, filter: &InsightFilter, shift_filter: Option<Shift>) -> bool {
    if let Some(date) = filter.date {
        if key.date != date {
            return false;
        }
    }
    if let Some(shift) = shift_filter {
        if key.shift != shift {
            return false;
        }
    }
    if let Some(role) = &filter.role {
        if !key.role.eq_ignore_ascii_case(role) {
            return false;
        }
    }
    true
}

/// 按风险等级合成处置建议
fn recommendation(key: &BucketKey, bucket: &CoverageBucket) -> String {
    let shortfall = (-bucket.delta).max(1);
    match bucket.risk_level {
        RiskLevel::Stable => "覆盖达标,无需处理。".to_string(),
        RiskLevel::Monitor => format!(
            "岗位 {} ({} 班) 存在轻度缺口,建议关注并准备人员调配。",
            key.role, key.shift
        ),
        RiskLevel::Critical => format!(
            "岗位 {} ({} 班) 缺口 {} 人,建议立即补充或借调人员。",
            key.role, key.shift, shortfall
        ),
    }
}
