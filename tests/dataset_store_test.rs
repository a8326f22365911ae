// ==========================================
// DatasetStore 仓储集成测试
// ==========================================
// 测试目标: 验证记忆化加载、并发首访与 schema 校验失败
// ==========================================


use std::sync::Arc;
use std::thread;
use tempfile::TempDir;
use test_helpers::{
    create_test_store, entry, event, schedule_snapshot, update_snapshot, write_raw_dataset,
};
use workforce_coverage::{DatasetStore, Shift, StoreError, UpdateKind};

#[test]
fn test_load_returns_same_snapshot() {
    let schedule = schedule_snapshot(vec![entry(10, "E001", "nurse", Shift::Morning)]);
    let updates = update_snapshot(vec![event(10, "E001", UpdateKind::Absence)]);
    let (_dir, store) = create_test_store(&schedule, &updates);

    let first = store.load_schedule().unwrap();
    let second = store.load_schedule().unwrap();

    // 记忆化: 两次调用返回同一份进程内快照
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.staff_schedule.len(), 1);

    let first = store.load_updates().unwrap();
    let second = store.load_updates().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_cache_survives_source_file_removal() {
    let schedule = schedule_snapshot(vec![entry(10, "E001", "nurse", Shift::Morning)]);
    let updates = update_snapshot(vec![]);
    let (dir, store) = create_test_store(&schedule, &updates);

    let warm = store.load_schedule().unwrap();

    // 预热后删除数据源: 缓存无失效信号,继续返回旧快照
    drop(dir);
    let cached = store.load_schedule().unwrap();
    assert!(Arc::ptr_eq(&warm, &cached));
}

#[test]
fn test_missing_file_is_data_unavailable() {
    let store = DatasetStore::new("/nonexistent/daily_staff.json", "/nonexistent/daily_updates.json");

    let result = store.load_schedule();
    match result {
        Err(StoreError::DataUnavailable { path, reason }) => {
            assert!(path.contains("daily_staff.json"));
            assert!(reason.contains("读取失败"));
        }
        _ => panic!("Expected DataUnavailable"),
    }
}

#[test]
fn test_malformed_json_is_data_unavailable() {
    let dir = TempDir::new().unwrap();
    let schedule_path = write_raw_dataset(&dir, "daily_staff.json", "{ not json");
    let updates_path = write_raw_dataset(&dir, "daily_updates.json", "{}");
    let store = DatasetStore::new(schedule_path, updates_path);

    match store.load_schedule() {
        Err(StoreError::DataUnavailable { reason, .. }) => {
            assert!(reason.contains("schema 校验失败"));
        }
        _ => panic!("Expected DataUnavailable"),
    }
}

#[test]
fn test_unknown_update_kind_rejected_at_load() {
    let dir = TempDir::new().unwrap();
    let schedule = schedule_snapshot(vec![]);
    let schedule_path = write_raw_dataset(
        &dir,
        "daily_staff.json",
        &serde_json::to_string(&schedule).unwrap(),
    );
    let updates_path = write_raw_dataset(
        &dir,
        "daily_updates.json",
        r#"{
            "date_range": { "start_date": "2025-01-01", "end_date": "2025-01-31" },
            "staff_updates": [
                { "date": "2025-01-10", "employee_id": "E001", "kind": "promotion" }
            ]
        }"#,
    );
    let store = DatasetStore::new(schedule_path, updates_path);

    assert!(matches!(
        store.load_updates(),
        Err(StoreError::DataUnavailable { .. })
    ));
}

#[test]
fn test_transfer_without_payload_rejected_at_load() {
    let dir = TempDir::new().unwrap();
    let schedule = schedule_snapshot(vec![]);
    let schedule_path = write_raw_dataset(
        &dir,
        "daily_staff.json",
        &serde_json::to_string(&schedule).unwrap(),
    );
    let updates_path = write_raw_dataset(
        &dir,
        "daily_updates.json",
        r#"{
            "date_range": { "start_date": "2025-01-01", "end_date": "2025-01-31" },
            "staff_updates": [
                { "date": "2025-01-10", "employee_id": "E001", "kind": "transfer" }
            ]
        }"#,
    );
    let store = DatasetStore::new(schedule_path, updates_path);

    match store.load_updates() {
        Err(StoreError::DataUnavailable { reason, .. }) => {
            assert!(reason.contains("调动"));
        }
        _ => panic!("Expected DataUnavailable"),
    }
}

#[test]
fn test_concurrent_first_access_single_load() {
    let schedule = schedule_snapshot(
        (1..=20)
            .map(|i| entry(10, &format!("E{:03}", i), "nurse", Shift::Morning))
            .collect(),
    );
    let updates = update_snapshot(vec![]);
    let (_dir, store) = create_test_store(&schedule, &updates);
    let store = Arc::new(store);

    // 并发首访: 全部调用方必须观察到同一份完成的快照
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.load_schedule().unwrap())
        })
        .collect();

    let snapshots: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let first = &snapshots[0];
    for snapshot in &snapshots {
        assert!(Arc::ptr_eq(first, snapshot));
    }
}
