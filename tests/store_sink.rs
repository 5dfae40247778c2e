#[cfg(test)]
mod tests {
    use actilog::libs::monitor::{SegmentSink, StoreSink};
    use actilog::libs::segment::Segment;
    use actilog::libs::sheet::sheet_path;
    use chrono::NaiveDate;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SinkTestContext {
        activity_dir: PathBuf,
        _temp_dir: TempDir,
    }

    impl TestContext for SinkTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            SinkTestContext {
                activity_dir: temp_dir.path().join("activity"),
                _temp_dir: temp_dir,
            }
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
    }

    fn segment() -> Segment {
        Segment::working(
            "Editor",
            date().and_hms_opt(9, 0, 0).unwrap(),
            date().and_hms_opt(9, 30, 0).unwrap(),
        )
    }

    #[test_context(SinkTestContext)]
    #[test]
    fn test_append_creates_day_store(ctx: &mut SinkTestContext) {
        let mut sink = StoreSink::new(ctx.activity_dir.clone(), "tester".to_string()).unwrap();

        sink.append(&segment()).unwrap();

        assert!(sheet_path(&ctx.activity_dir, "tester", date()).exists());
    }

    #[test_context(SinkTestContext)]
    #[test]
    fn test_prepare_day_creates_header_only_store_once(ctx: &mut SinkTestContext) {
        let mut sink = StoreSink::new(ctx.activity_dir.clone(), "tester".to_string()).unwrap();

        sink.prepare_day(date()).unwrap();
        let path = sheet_path(&ctx.activity_dir, "tester", date());
        assert!(path.exists());

        // A second preparation must leave an existing store untouched.
        std::fs::write(&path, b"marker").unwrap();
        sink.prepare_day(date()).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"marker");
    }

    #[test_context(SinkTestContext)]
    #[test]
    fn test_restart_rematerializes_store_from_rows(ctx: &mut SinkTestContext) {
        let path = sheet_path(&ctx.activity_dir, "tester", date());

        {
            let mut sink = StoreSink::new(ctx.activity_dir.clone(), "tester".to_string()).unwrap();
            sink.append(&segment()).unwrap();
        }
        std::fs::remove_file(&path).unwrap();

        // A fresh process preparing the same day restores the recorded rows
        // from the database.
        let mut sink = StoreSink::new(ctx.activity_dir.clone(), "tester".to_string()).unwrap();
        sink.prepare_day(date()).unwrap();

        assert!(path.exists());
        assert!(path.metadata().unwrap().len() > 0);
    }
}
