#[cfg(test)]
mod tests {
    use actilog::db::segments::SegmentsDb;
    use actilog::libs::segment::{Segment, SegmentKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Test context to ensure a clean environment for each database test.
    /// It sets up a temporary directory to act as the user's home/appdata directory.
    struct DbTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for DbTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            DbTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_insert_and_fetch_roundtrip(_ctx: &mut DbTestContext) {
        let date = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let mut db = SegmentsDb::new().unwrap();

        let start = date.and_hms_opt(9, 0, 0).unwrap();
        let end = date.and_hms_opt(9, 30, 0).unwrap();
        let segment = Segment::working("Editor", start, end);
        db.insert(date, &segment).unwrap();

        let fetched = db.fetch_date(date).unwrap();
        assert_eq!(fetched, vec![segment]);
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_end_of_day_milliseconds_survive_roundtrip(_ctx: &mut DbTestContext) {
        let date = NaiveDate::from_ymd_opt(2025, 4, 2).unwrap();
        let mut db = SegmentsDb::new().unwrap();

        let start = date.and_hms_opt(23, 55, 0).unwrap();
        let end_of_day = date.and_hms_milli_opt(23, 59, 59, 999).unwrap();
        db.insert(date, &Segment::working("Editor", start, end_of_day)).unwrap();

        let fetched = db.fetch_date(date).unwrap();
        assert_eq!(fetched[0].end, end_of_day);
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_fetch_is_ordered_and_filtered_by_date(_ctx: &mut DbTestContext) {
        let date = NaiveDate::from_ymd_opt(2025, 4, 3).unwrap();
        let other_date = NaiveDate::from_ymd_opt(2025, 4, 4).unwrap();
        let mut db = SegmentsDb::new().unwrap();

        let later = Segment::idle(date.and_hms_opt(10, 0, 0).unwrap(), date.and_hms_opt(10, 5, 0).unwrap());
        let earlier = Segment::working("Editor", date.and_hms_opt(9, 0, 0).unwrap(), date.and_hms_opt(10, 0, 0).unwrap());
        let elsewhere = Segment::working(
            "Browser",
            other_date.and_hms_opt(9, 0, 0).unwrap(),
            other_date.and_hms_opt(9, 10, 0).unwrap(),
        );

        db.insert(date, &later).unwrap();
        db.insert(date, &earlier).unwrap();
        db.insert(other_date, &elsewhere).unwrap();

        let fetched = db.fetch_date(date).unwrap();
        assert_eq!(fetched.len(), 2);
        assert_eq!(fetched[0], earlier);
        assert_eq!(fetched[1], later);
        assert_eq!(fetched[1].kind, SegmentKind::Idle);
    }
}
