#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use timetrack::libs::error::TrackerError;
    use timetrack::libs::timer::Timer;

    struct TimerTestContext {
        temp_dir: TempDir,
    }

    impl TimerTestContext {
        fn timer(&self) -> Timer {
            Timer::at(&self.temp_dir.path().join("timer.json"))
        }
    }

    impl TestContext for TimerTestContext {
        fn setup() -> Self {
            TimerTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn morning() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 9, 28).unwrap().and_hms_opt(9, 0, 0).unwrap()
    }

    #[test_context(TimerTestContext)]
    #[test]
    fn test_start_and_stop(ctx: &mut TimerTestContext) {
        let timer = ctx.timer();
        assert!(timer.current().unwrap().is_none());

        let started = timer.start("AAA-BBB", "  code review ", morning()).unwrap();
        assert_eq!(started.desc, "code review");

        // A second handle on the same file sees the running timer.
        assert_eq!(ctx.timer().current().unwrap(), Some(started.clone()));

        let (stopped, elapsed) = timer.stop(morning() + Duration::seconds(5_400)).unwrap();
        assert_eq!(stopped, started);
        assert_eq!(elapsed, 5_400);
        assert!(timer.current().unwrap().is_none());
    }

    #[test_context(TimerTestContext)]
    #[test]
    fn test_only_one_timer(ctx: &mut TimerTestContext) {
        let timer = ctx.timer();
        timer.start("AAA-BBB", "first", morning()).unwrap();

        let err = timer.start("DDD-BBB", "second", morning()).unwrap_err();
        assert!(matches!(err, TrackerError::Timer(_)));
        assert_eq!(timer.current().unwrap().unwrap().workitem, "AAA-BBB");
    }

    #[test_context(TimerTestContext)]
    #[test]
    fn test_start_requires_description(ctx: &mut TimerTestContext) {
        let timer = ctx.timer();
        let err = timer.start("AAA-BBB", "   ", morning()).unwrap_err();
        assert!(matches!(err, TrackerError::Timer(_)));
        assert!(timer.current().unwrap().is_none());
    }

    #[test_context(TimerTestContext)]
    #[test]
    fn test_stop_without_timer(ctx: &mut TimerTestContext) {
        let err = ctx.timer().stop(morning()).unwrap_err();
        assert!(matches!(err, TrackerError::Timer(_)));
    }

    #[test_context(TimerTestContext)]
    #[test]
    fn test_cancel(ctx: &mut TimerTestContext) {
        let timer = ctx.timer();
        assert!(timer.cancel().unwrap().is_none());

        timer.start("AAA-BBB", "oops", morning()).unwrap();
        let cancelled = timer.cancel().unwrap().unwrap();
        assert_eq!(cancelled.workitem, "AAA-BBB");
        assert!(timer.current().unwrap().is_none());
    }

    #[test_context(TimerTestContext)]
    #[test]
    fn test_elapsed_never_negative(ctx: &mut TimerTestContext) {
        let running = ctx.timer().start("AAA-BBB", "time travel", morning()).unwrap();
        assert_eq!(running.elapsed(morning() - Duration::seconds(30)), 0);
        assert_eq!(running.elapsed(morning() + Duration::milliseconds(1_999)), 1);
    }
}
