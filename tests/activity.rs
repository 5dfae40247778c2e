#[cfg(test)]
mod tests {
    use actilog::libs::activity::ActivityTracker;
    use chrono::{Duration, NaiveDate, NaiveDateTime};

    fn ts(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_starts_with_construction_time() {
        let tracker = ActivityTracker::new(ts(9, 0, 0));
        assert_eq!(tracker.last_activity(), ts(9, 0, 0));
    }

    #[test]
    fn test_record_updates_last_activity() {
        let tracker = ActivityTracker::new(ts(9, 0, 0));
        tracker.record_activity_at(ts(9, 5, 0));
        assert_eq!(tracker.last_activity(), ts(9, 5, 0));

        assert_eq!(tracker.time_since_last_activity(ts(9, 6, 30)), Duration::seconds(90));
    }

    #[test]
    fn test_clones_share_state() {
        // The input listener writes through a clone; the engine reads the original.
        let tracker = ActivityTracker::new(ts(9, 0, 0));
        let writer = tracker.clone();

        writer.record_activity_at(ts(10, 0, 0));

        assert_eq!(tracker.last_activity(), ts(10, 0, 0));
    }

    #[test]
    fn test_concurrent_writers() {
        let tracker = ActivityTracker::new(ts(9, 0, 0));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let writer = tracker.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        writer.record_activity_at(ts(10, 0, i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // The read is one of the written stamps, never a torn value.
        let last = tracker.last_activity();
        assert_eq!(last.date(), ts(10, 0, 0).date());
        assert!((0..4).any(|i| last == ts(10, 0, i)));
    }
}
