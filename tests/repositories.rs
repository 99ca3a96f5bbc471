#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use timetrack::db::db::Db;
    use timetrack::db::entries::{TimeEntries, TimeEntry};
    use timetrack::db::record::Record;
    use timetrack::db::schema;
    use timetrack::db::seed;
    use timetrack::db::workitems::{WorkItem, WorkItems};
    use timetrack::libs::clock::MAX_SECONDS;
    use timetrack::libs::error::TrackerError;

    /// Fresh database file in its own temporary directory.
    struct DbTestContext {
        _temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for DbTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(&temp_dir.path().join("data").join("timetrack.db")).unwrap();
            DbTestContext { _temp_dir: temp_dir, db }
        }
    }

    fn at(month: u32, day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, month, day).unwrap().and_hms_opt(hour, 0, 0).unwrap()
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_work_item_crud(ctx: &mut DbTestContext) {
        let items = WorkItems::new(&ctx.db);

        let inserted = items
            .insert(&[WorkItem::new("DDD-BBB", "Training"), WorkItem::new("AAA-BBB", "Some client")])
            .unwrap();
        assert_eq!(inserted, 2);
        assert_eq!(items.ids().unwrap(), vec!["AAA-BBB", "DDD-BBB"]);

        let item = items.require("AAA-BBB").unwrap();
        assert_eq!(item.label, "Some client");
        assert!(item.timestamp.is_some());

        assert_eq!(items.update_label("AAA-BBB", Some("Big client")).unwrap(), 1);
        assert_eq!(items.get("AAA-BBB").unwrap().unwrap().label, "Big client");
        assert_eq!(items.update_label("AAA-BBB", None).unwrap(), 0);

        assert_eq!(items.delete("AAA-BBB").unwrap(), 1);
        assert!(!items.exists("AAA-BBB").unwrap());
        assert_eq!(items.delete("AAA-BBB").unwrap(), 0);
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_work_item_errors(ctx: &mut DbTestContext) {
        let items = WorkItems::new(&ctx.db);
        items.insert(&[WorkItem::new("AAA-BBB", "Some client")]).unwrap();

        let err = items.insert(&[WorkItem::new("AAA-BBB", "Again")]).unwrap_err();
        assert!(matches!(err, TrackerError::Storage(_)));

        let err = items.require("NOPE").unwrap_err();
        assert!(matches!(err, TrackerError::NotFound { ref table, ref id } if table == "workitems" && id == "NOPE"));
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_entry_insert_gets_default_timestamp(ctx: &mut DbTestContext) {
        let entries = TimeEntries::new(&ctx.db);
        let entry = TimeEntry::new("AAA-BBB", 600, "something longer");
        entries.insert(&entry).unwrap();

        let stored = entries.require(&entry.id).unwrap();
        assert_eq!(stored.time, 600);
        assert_eq!(stored.workitem, "AAA-BBB");
        assert_eq!(stored.desc, "something longer");
        assert!(stored.timestamp.is_some());
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_entry_day_and_range(ctx: &mut DbTestContext) {
        let entries = TimeEntries::new(&ctx.db);
        entries
            .insert_many(&[
                TimeEntry::new("AAA-BBB", 60, "late").at(at(9, 28, 17)),
                TimeEntry::new("AAA-BBB", 60, "early").at(at(9, 28, 8)),
                TimeEntry::new("DDD-BBB", 60, "june").at(at(6, 30, 10)),
                TimeEntry::new("DDD-BBB", 60, "october").at(at(10, 1, 10)),
            ])
            .unwrap();

        let day = entries.fetch_day(NaiveDate::from_ymd_opt(2023, 9, 28).unwrap()).unwrap();
        let descs: Vec<&str> = day.iter().map(|e| e.desc.as_str()).collect();
        assert_eq!(descs, vec!["early", "late"]);

        let range = entries
            .fetch_range(NaiveDate::from_ymd_opt(2023, 6, 30).unwrap(), NaiveDate::from_ymd_opt(2023, 9, 28).unwrap())
            .unwrap();
        assert_eq!(range.len(), 3);
        assert!(range.iter().all(|e| e.desc != "october"));

        let err = entries
            .fetch_range(NaiveDate::from_ymd_opt(2023, 9, 28).unwrap(), NaiveDate::from_ymd_opt(2023, 6, 30).unwrap())
            .unwrap_err();
        assert!(matches!(err, TrackerError::InvalidDate(_)));

        assert_eq!(entries.count_for_workitem("DDD-BBB").unwrap(), 2);
        assert_eq!(entries.count_for_workitem("ZZZ-ZZZ").unwrap(), 0);
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_entry_update_and_delete(ctx: &mut DbTestContext) {
        let entries = TimeEntries::new(&ctx.db);
        let entry = TimeEntry::new("AAA-BBB", 600, "old").at(at(9, 28, 9));
        entries.insert(&entry).unwrap();

        assert_eq!(entries.update(&entry.id, Some("new"), None).unwrap(), 1);
        let stored = entries.require(&entry.id).unwrap();
        assert_eq!(stored.desc, "new");
        assert_eq!(stored.time, 600);
        assert_eq!(stored.timestamp, Some(at(9, 28, 9)));

        assert_eq!(entries.update(&entry.id, None, Some(1200)).unwrap(), 1);
        assert_eq!(entries.require(&entry.id).unwrap().time, 1200);
        assert_eq!(entries.update(&entry.id, None, None).unwrap(), 0);

        assert_eq!(entries.delete(&entry.id).unwrap(), 1);
        assert!(entries.get(&entry.id).unwrap().is_none());
        assert_eq!(entries.delete(&entry.id).unwrap(), 0);
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_negative_stored_time_is_rejected(ctx: &mut DbTestContext) {
        let record = Record::new()
            .with("id", "e1")
            .with("time", -5i64)
            .with("workitem", "AAA-BBB")
            .with("desc", "broken")
            .with("timestamp", at(9, 28, 9));
        ctx.db.store().insert_records(schema::time_entries(), &[record], None).unwrap();

        let entries = TimeEntries::new(&ctx.db);
        let err = entries.require("e1").unwrap_err();
        assert!(matches!(
            err,
            TrackerError::InvalidValue { ref column, ref value, .. } if column == "time" && value == "-5"
        ));
        assert!(entries.fetch_day(NaiveDate::from_ymd_opt(2023, 9, 28).unwrap()).is_err());
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_largest_duration_is_stored_exactly(ctx: &mut DbTestContext) {
        let entries = TimeEntries::new(&ctx.db);
        let entry = TimeEntry::new("AAA-BBB", MAX_SECONDS, "long").at(at(9, 28, 9));
        entries.insert(&entry).unwrap();

        assert_eq!(entries.require(&entry.id).unwrap().time, MAX_SECONDS);
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_seed_once(ctx: &mut DbTestContext) {
        assert_eq!(seed::seed(&ctx.db).unwrap(), Some((5, 4)));
        assert_eq!(seed::seed(&ctx.db).unwrap(), None);

        assert_eq!(WorkItems::new(&ctx.db).list().unwrap().len(), 5);
        let june = TimeEntries::new(&ctx.db)
            .fetch_day(NaiveDate::from_ymd_opt(2023, 6, 30).unwrap())
            .unwrap();
        let mut workitems: Vec<&str> = june.iter().map(|e| e.workitem.as_str()).collect();
        workitems.sort();
        assert_eq!(workitems, vec!["AAA-ZZZ", "DDD-BBB"]);
    }

    #[test]
    fn test_reopen_keeps_data() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("timetrack.db");
        {
            let db = Db::open(&path).unwrap();
            WorkItems::new(&db).insert(&[WorkItem::new("AAA-BBB", "Some client")]).unwrap();
        }
        let db = Db::open(&path).unwrap();
        assert!(WorkItems::new(&db).exists("AAA-BBB").unwrap());
    }
}
