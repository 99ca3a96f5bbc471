#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rusqlite::Connection;
    use test_context::{test_context, TestContext};
    use timetrack::db::record::{Record, Value};
    use timetrack::db::schema;
    use timetrack::db::store::RecordStore;
    use timetrack::libs::error::TrackerError;

    /// In-memory connection with both tables created.
    struct StoreTestContext {
        conn: Connection,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let conn = Connection::open_in_memory().unwrap();
            {
                let store = RecordStore::new(&conn);
                store.create_table(schema::work_items(), true).unwrap();
                store.create_table(schema::time_entries(), true).unwrap();
            }
            StoreTestContext { conn }
        }
    }

    fn entry(id: &str, time: u64, workitem: &str, desc: &str, day: u32) -> Record {
        let timestamp = NaiveDate::from_ymd_opt(2023, 9, day).unwrap().and_hms_opt(10, 0, 0).unwrap();
        Record::new()
            .with("id", id)
            .with("time", time)
            .with("workitem", workitem)
            .with("desc", desc)
            .with("timestamp", timestamp)
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_create_table_is_idempotent_with_guard(ctx: &mut StoreTestContext) {
        let store = RecordStore::new(&ctx.conn);
        store.create_table(schema::work_items(), true).unwrap();

        let err = store.create_table(schema::work_items(), false).unwrap_err();
        assert!(matches!(err, TrackerError::Storage(_)));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_insert_and_select(ctx: &mut StoreTestContext) {
        let store = RecordStore::new(&ctx.conn);
        let records = vec![entry("e1", 600, "AAA-BBB", "x", 28), entry("e2", 3000, "AAA-BBB", "y", 28)];

        let inserted = store.insert_records(schema::time_entries(), &records, None).unwrap();
        assert_eq!(inserted, 2);

        let all = store.select_all(schema::time_entries(), None).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].columns().collect::<Vec<_>>(), vec!["id", "time", "workitem", "desc", "timestamp"]);

        let found = store.select_by_id(schema::time_entries(), "e2").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].integer("time"), Some(3000));
        assert_eq!(found[0].text("desc"), Some("y"));
        assert_eq!(
            found[0].get("timestamp"),
            Some(&Value::DateTime(NaiveDate::from_ymd_opt(2023, 9, 28).unwrap().and_hms_opt(10, 0, 0).unwrap()))
        );

        assert!(store.select_by_id(schema::time_entries(), "missing").unwrap().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_select_projection_and_where(ctx: &mut StoreTestContext) {
        let store = RecordStore::new(&ctx.conn);
        let records = vec![
            entry("e1", 60, "AAA-BBB", "a", 27),
            entry("e2", 120, "DDD-BBB", "b", 28),
            entry("e3", 180, "AAA-BBB", "c", 29),
        ];
        store.insert_records(schema::time_entries(), &records, None).unwrap();

        let rows = store
            .select_where(
                schema::time_entries(),
                "WHERE workitem = ? ORDER BY time DESC",
                &[Value::from("AAA-BBB")],
                Some(&["id", "time"][..]),
            )
            .unwrap();
        let ids: Vec<&str> = rows.iter().filter_map(|r| r.text("id")).collect();
        assert_eq!(ids, vec!["e3", "e1"]);
        assert_eq!(rows[0].len(), 2);

        let rows = store
            .select_where(
                schema::time_entries(),
                "WHERE DATE(timestamp) BETWEEN DATE(?) AND DATE(?)",
                &[Value::from("2023-09-28"), Value::from("2023-09-29")],
                None,
            )
            .unwrap();
        assert_eq!(rows.len(), 2);

        let err = store.select_all(schema::time_entries(), Some(&["colour"][..])).unwrap_err();
        assert!(matches!(err, TrackerError::UnknownColumn { .. }));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_insert_with_column_subset_uses_defaults(ctx: &mut StoreTestContext) {
        let store = RecordStore::new(&ctx.conn);
        let record = Record::new().with("id", "AAA-BBB").with("label", "Some client");
        store
            .insert_records(schema::work_items(), &[record], Some(&["id", "label"][..]))
            .unwrap();

        let found = store.select_by_id(schema::work_items(), "AAA-BBB").unwrap();
        assert!(found[0].datetime("timestamp").is_some());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_insert_rejects_unknown_keys(ctx: &mut StoreTestContext) {
        let store = RecordStore::new(&ctx.conn);
        let record = Record::new().with("id", "AAA-BBB").with("label", "x").with("colour", "red");

        let err = store
            .insert_records(schema::work_items(), &[record], Some(&["id", "label"][..]))
            .unwrap_err();
        assert!(matches!(err, TrackerError::UnknownColumn { ref column, .. } if column == "colour"));
        assert!(store.select_all(schema::work_items(), None).unwrap().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_insert_requires_every_column(ctx: &mut StoreTestContext) {
        let store = RecordStore::new(&ctx.conn);
        let record = Record::new().with("id", "AAA-BBB");

        let err = store
            .insert_records(schema::work_items(), &[record], Some(&["id", "label"][..]))
            .unwrap_err();
        assert!(matches!(err, TrackerError::MissingValue { ref column, .. } if column == "label"));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_failed_batch_is_rolled_back(ctx: &mut StoreTestContext) {
        let store = RecordStore::new(&ctx.conn);
        let records = vec![
            entry("e1", 60, "AAA-BBB", "a", 28),
            entry("e2", 60, "AAA-BBB", "b", 28),
            entry("e1", 60, "AAA-BBB", "duplicate", 28),
        ];

        let err = store.insert_records(schema::time_entries(), &records, None).unwrap_err();
        assert!(matches!(err, TrackerError::Storage(_)));
        assert!(store.select_all(schema::time_entries(), None).unwrap().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_partial_update(ctx: &mut StoreTestContext) {
        let store = RecordStore::new(&ctx.conn);
        store
            .insert_records(schema::time_entries(), &[entry("e1", 600, "AAA-BBB", "old", 28)], None)
            .unwrap();

        let changes = Record::new().with("desc", "new").with("time", Value::Null);
        let affected = store.update_by_id(schema::time_entries(), "e1", &changes).unwrap();
        assert_eq!(affected, 1);

        let row = &store.select_by_id(schema::time_entries(), "e1").unwrap()[0];
        assert_eq!(row.text("desc"), Some("new"));
        assert_eq!(row.integer("time"), Some(600));
        assert_eq!(row.text("workitem"), Some("AAA-BBB"));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_update_edge_cases(ctx: &mut StoreTestContext) {
        let store = RecordStore::new(&ctx.conn);
        store
            .insert_records(schema::time_entries(), &[entry("e1", 600, "AAA-BBB", "old", 28)], None)
            .unwrap();

        let all_null = Record::new().with("desc", Value::Null);
        assert_eq!(store.update_by_id(schema::time_entries(), "e1", &all_null).unwrap(), 0);

        let changes = Record::new().with("desc", "new");
        assert_eq!(store.update_by_id(schema::time_entries(), "missing", &changes).unwrap(), 0);

        let unknown = Record::new().with("colour", "red");
        assert!(matches!(
            store.update_by_id(schema::time_entries(), "e1", &unknown),
            Err(TrackerError::UnknownColumn { .. })
        ));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_delete_by_id(ctx: &mut StoreTestContext) {
        let store = RecordStore::new(&ctx.conn);
        store
            .insert_records(schema::time_entries(), &[entry("e1", 600, "AAA-BBB", "x", 28)], None)
            .unwrap();

        assert_eq!(store.delete_by_id(schema::time_entries(), "missing").unwrap(), 0);
        assert_eq!(store.delete_by_id(schema::time_entries(), "e1").unwrap(), 1);
        assert!(store.select_by_id(schema::time_entries(), "e1").unwrap().is_empty());
    }
}
