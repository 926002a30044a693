//! Database integration tests
//!
//! Tests history persistence using a real in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::common::TestDatabase;
    use crate::common::database::test_db_config;
    use calculator_rs::config::{DatabaseConfig, StorageConfig};
    use calculator_rs::core::OperationKind;
    use calculator_rs::storage::database::{Database, DatabaseBackendType};
    use calculator_rs::storage::{
        HistoryQuery, HistoryStore, MemoryHistoryStore, NewHistoryRecord, SortField, SortOrder,
        StorageLayer,
    };
    use chrono::{FixedOffset, TimeZone};

    fn record(operation: OperationKind, numbers: &[f64], result: f64, second: u32) -> NewHistoryRecord {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let date = offset
            .with_ymd_and_hms(2025, 3, 1, 12, 0, second)
            .unwrap();
        NewHistoryRecord {
            operation,
            numbers: numbers.to_vec(),
            result,
            date,
            date_formatted: Some(date.format("%d/%m/%Y %H:%M:%S").to_string()),
        }
    }

    // ==================== Connection ====================

    /// Connect, migrate and answer a health check
    #[tokio::test]
    async fn test_database_health_check() {
        let db = Database::new(&test_db_config()).await;
        assert!(db.is_ok(), "Failed to create database: {:?}", db.err());

        let db = db.unwrap();
        let migrate_result = db.migrate().await;
        assert!(
            migrate_result.is_ok(),
            "Migration failed: {:?}",
            migrate_result.err()
        );

        assert!(db.health_check().await.is_ok());
        assert_eq!(db.backend_type(), DatabaseBackendType::SQLite);
        assert_eq!(db.backend(), "sqlite");
    }

    /// Migrations are idempotent
    #[tokio::test]
    async fn test_migration_twice() {
        let db = TestDatabase::new().await;
        assert!(db.db().migrate().await.is_ok());
    }

    /// Querying before migrating fails as a database error, not as unavailability
    #[tokio::test]
    async fn test_missing_table_is_not_unavailable() {
        let db = Database::new(&test_db_config()).await.unwrap();
        let err = db.find(&HistoryQuery::default()).await.unwrap_err();
        assert!(!err.is_unavailable());
    }

    // ==================== History Records ====================

    /// Inserted records come back intact
    #[tokio::test]
    async fn test_insert_and_read_back() {
        let db = TestDatabase::new().await;
        let new = record(OperationKind::Divide, &[100.0, 2.0, 5.0], 10.0, 7);

        let id = db.db().insert_history(new.clone()).await.unwrap();
        assert!(id > 0);

        let records = db.db().find(&HistoryQuery::default()).await.unwrap();
        assert_eq!(records.len(), 1);
        let stored = &records[0];
        assert_eq!(stored.id, id);
        assert_eq!(stored.operation, "division");
        assert_eq!(stored.numbers, vec![100.0, 2.0, 5.0]);
        assert_eq!(stored.result, 10.0);
        assert_eq!(stored.date, new.date);
        assert_eq!(stored.date_formatted.as_deref(), Some("01/03/2025 12:00:07"));
    }

    /// Filter selects by stored label
    #[tokio::test]
    async fn test_filter_by_operation() {
        let db = TestDatabase::new().await;
        db.db()
            .insert(record(OperationKind::Sum, &[1.0, 2.0], 3.0, 1))
            .await
            .unwrap();
        db.db()
            .insert(record(OperationKind::Multiply, &[2.0, 4.0], 8.0, 2))
            .await
            .unwrap();
        db.db()
            .insert(record(OperationKind::Sum, &[4.0, 4.0], 8.0, 3))
            .await
            .unwrap();

        let query = HistoryQuery {
            operation: Some(OperationKind::Sum),
            ..HistoryQuery::default()
        };
        let sums = db.db().find(&query).await.unwrap();
        assert_eq!(sums.len(), 2);
        assert!(sums.iter().all(|r| r.operation == "sum"));
    }

    /// Sort by date both ways
    #[tokio::test]
    async fn test_sort_by_date() {
        let db = TestDatabase::new().await;
        for (second, result) in [(5, 1.0), (1, 2.0), (9, 3.0)] {
            db.db()
                .insert(record(OperationKind::Sum, &[result, 0.0], result, second))
                .await
                .unwrap();
        }

        let desc = db.db().find(&HistoryQuery::default()).await.unwrap();
        let results: Vec<f64> = desc.iter().map(|r| r.result).collect();
        assert_eq!(results, vec![3.0, 1.0, 2.0]);

        let asc = db
            .db()
            .find(&HistoryQuery {
                sort_order: SortOrder::Asc,
                ..HistoryQuery::default()
            })
            .await
            .unwrap();
        let results: Vec<f64> = asc.iter().map(|r| r.result).collect();
        assert_eq!(results, vec![2.0, 1.0, 3.0]);
    }

    /// Date order follows the instant even when the configured offset changed
    #[tokio::test]
    async fn test_sort_by_date_across_offsets() {
        let db = TestDatabase::new().await;
        let memory = MemoryHistoryStore::new();

        let utc = FixedOffset::east_opt(0).unwrap();
        let central = FixedOffset::west_opt(6 * 3600).unwrap();
        let earlier = utc.with_ymd_and_hms(2025, 3, 1, 11, 0, 0).unwrap();
        let later = central.with_ymd_and_hms(2025, 3, 1, 6, 0, 0).unwrap();

        for (date, result) in [(earlier, 1.0), (later, 2.0)] {
            let new = NewHistoryRecord {
                operation: OperationKind::Sum,
                numbers: vec![result, 0.0],
                result,
                date,
                date_formatted: None,
            };
            db.db().insert(new.clone()).await.unwrap();
            memory.insert(new).await.unwrap();
        }

        for sort_order in [SortOrder::Desc, SortOrder::Asc] {
            let query = HistoryQuery {
                sort_order,
                ..HistoryQuery::default()
            };
            let stored: Vec<f64> = db
                .db()
                .find(&query)
                .await
                .unwrap()
                .iter()
                .map(|r| r.result)
                .collect();
            let in_memory: Vec<f64> = memory
                .find(&query)
                .await
                .unwrap()
                .iter()
                .map(|r| r.result)
                .collect();

            let expected = match sort_order {
                SortOrder::Desc => vec![2.0, 1.0],
                SortOrder::Asc => vec![1.0, 2.0],
            };
            assert_eq!(stored, expected);
            assert_eq!(in_memory, expected);
        }

        let records = db.db().find(&HistoryQuery::default()).await.unwrap();
        assert_eq!(records[0].date, later);
        assert_eq!(records[1].date, earlier);
    }

    /// Equal sort values keep insertion order
    #[tokio::test]
    async fn test_ties_keep_insertion_order() {
        let db = TestDatabase::new().await;
        db.db()
            .insert(record(OperationKind::Sum, &[4.0, 4.0], 8.0, 1))
            .await
            .unwrap();
        db.db()
            .insert(record(OperationKind::Multiply, &[2.0, 4.0], 8.0, 2))
            .await
            .unwrap();
        db.db()
            .insert(record(OperationKind::Sum, &[1.0, 1.0], 2.0, 3))
            .await
            .unwrap();

        let query = HistoryQuery {
            operation: None,
            sort_by: SortField::Result,
            sort_order: SortOrder::Desc,
        };
        let records = db.db().find(&query).await.unwrap();
        let operations: Vec<&str> = records.iter().map(|r| r.operation.as_str()).collect();
        assert_eq!(operations, ["sum", "multiplication", "sum"]);
    }

    /// Clearing removes everything and reports the count
    #[tokio::test]
    async fn test_clear_history() {
        let db = TestDatabase::new().await;
        for second in 0..3 {
            db.db()
                .insert(record(OperationKind::Sum, &[1.0, 1.0], 2.0, second))
                .await
                .unwrap();
        }

        assert_eq!(db.db().clear().await.unwrap(), 3);
        assert!(db.db().find(&HistoryQuery::default()).await.unwrap().is_empty());
    }

    // ==================== Storage Layer ====================

    /// A SQLite URL selects the database store
    #[tokio::test]
    async fn test_storage_layer_uses_database() {
        let config = StorageConfig {
            database: test_db_config(),
            ..StorageConfig::default()
        };

        let storage = StorageLayer::new(&config).await.unwrap();
        let status = storage.health_check().await;
        assert_eq!(status.backend, "sqlite");
        assert!(status.healthy);
    }

    /// An unreachable database falls back to the null store
    #[tokio::test]
    async fn test_storage_layer_falls_back_to_null_store() {
        // A regular file where the database directory should be
        let blocker = tempfile::NamedTempFile::new().unwrap();
        let config = StorageConfig {
            database: DatabaseConfig {
                url: format!("sqlite://{}/history.db?mode=rwc", blocker.path().display()),
                max_connections: 1,
                connection_timeout: 1,
                enabled: true,
            },
            ..StorageConfig::default()
        };

        let storage = StorageLayer::new(&config).await.unwrap();
        let status = storage.health_check().await;
        assert_eq!(status.backend, "null");
        assert!(!status.healthy);
    }
}
