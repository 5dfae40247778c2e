#[cfg(test)]
mod tests {
    use actilog::libs::backup::BackupScheduler;
    use actilog::libs::sheet::{backup_path, sheet_path};
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn started_at() -> NaiveDateTime {
        date().and_hms_opt(9, 0, 0).unwrap()
    }

    fn scheduler(temp_dir: &TempDir, interval_minutes: u64) -> (BackupScheduler, PathBuf, PathBuf) {
        let activity_dir = temp_dir.path().join("activity");
        let backup_dir = temp_dir.path().join("backup");
        let scheduler = BackupScheduler::new(
            activity_dir.clone(),
            backup_dir.clone(),
            "tester".to_string(),
            interval_minutes,
            started_at(),
        );
        (scheduler, activity_dir, backup_dir)
    }

    fn seed_store(activity_dir: &PathBuf) -> PathBuf {
        fs::create_dir_all(activity_dir).unwrap();
        let source = sheet_path(activity_dir, "tester", date());
        fs::write(&source, b"store contents").unwrap();
        source
    }

    #[test]
    fn test_no_backup_before_interval() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (mut scheduler, activity_dir, backup_dir) = scheduler(&temp_dir, 30);
        seed_store(&activity_dir);

        scheduler.maybe_backup(started_at() + Duration::minutes(29), date());

        assert!(!backup_path(&backup_dir, "tester", date()).exists());
        assert_eq!(scheduler.last_backup(), started_at());
    }

    #[test]
    fn test_backup_fires_after_interval() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (mut scheduler, activity_dir, backup_dir) = scheduler(&temp_dir, 30);
        seed_store(&activity_dir);

        let now = started_at() + Duration::minutes(30);
        scheduler.maybe_backup(now, date());

        let destination = backup_path(&backup_dir, "tester", date());
        assert!(destination.exists());
        assert_eq!(fs::read(destination).unwrap(), b"store contents");
        assert_eq!(scheduler.last_backup(), now);
    }

    #[test]
    fn test_at_most_one_backup_per_interval() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (mut scheduler, activity_dir, backup_dir) = scheduler(&temp_dir, 30);
        seed_store(&activity_dir);

        let first = started_at() + Duration::minutes(30);
        scheduler.maybe_backup(first, date());
        let destination = backup_path(&backup_dir, "tester", date());
        fs::remove_file(&destination).unwrap();

        // One minute later the timer has not elapsed again.
        scheduler.maybe_backup(first + Duration::minutes(1), date());

        assert!(!destination.exists());
        assert_eq!(scheduler.last_backup(), first);
    }

    #[test]
    fn test_timer_advances_even_when_copy_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        // No store file seeded, so the copy fails.
        let (mut scheduler, _activity_dir, backup_dir) = scheduler(&temp_dir, 30);

        let now = started_at() + Duration::minutes(31);
        scheduler.maybe_backup(now, date());

        assert!(!backup_path(&backup_dir, "tester", date()).exists());
        // The interval bound holds immediately after the failed attempt.
        assert_eq!(scheduler.last_backup(), now);
        assert!(now.signed_duration_since(scheduler.last_backup()) < Duration::minutes(30));
    }

    #[test]
    fn test_backup_overwrites_previous_copy() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (mut scheduler, activity_dir, backup_dir) = scheduler(&temp_dir, 30);
        let source = seed_store(&activity_dir);

        scheduler.maybe_backup(started_at() + Duration::minutes(30), date());
        fs::write(&source, b"grown store contents").unwrap();
        scheduler.maybe_backup(started_at() + Duration::minutes(60), date());

        let destination = backup_path(&backup_dir, "tester", date());
        assert_eq!(fs::read(destination).unwrap(), b"grown store contents");
    }
}
