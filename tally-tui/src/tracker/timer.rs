use super::interval::TimeInterval;
use time::{Duration, OffsetDateTime};

/// Elapsed-time bookkeeping for a single task.
///
/// A timer is either idle or running. Completed runs are kept in `segments`
/// in the order they were recorded; the open run, if any, is `running`.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskTimer {
    task_id: String,
    segments: Vec<TimeInterval>,
    running: Option<OffsetDateTime>,
}

impl TaskTimer {
    pub fn new(task_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            segments: Vec::new(),
            running: None,
        }
    }

    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    /// Open a run at `now`. Does nothing if a run is already open.
    pub fn start(&mut self, now: OffsetDateTime) {
        if self.running.is_none() {
            self.running = Some(now);
        }
    }

    /// Close the open run at `now` and record it. Does nothing when idle.
    pub fn pause(&mut self, now: OffsetDateTime) {
        if let Some(started) = self.running.take() {
            self.segments.push(TimeInterval::new(started, now));
        }
    }

    pub fn stop(&mut self, now: OffsetDateTime) {
        self.pause(now);
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn running_since(&self) -> Option<OffsetDateTime> {
        self.running
    }

    #[cfg(test)]
    pub fn segments(&self) -> &[TimeInterval] {
        &self.segments
    }

    /// Number of runs, counting the open one.
    pub fn session_count(&self) -> usize {
        self.segments.len() + usize::from(self.running.is_some())
    }

    /// Time spent in the open run, if there is one.
    pub fn current_run(&self, now: OffsetDateTime) -> Option<Duration> {
        self.running.map(|started| now - started)
    }

    /// Sum of all recorded runs plus the live time of the open run.
    pub fn total_duration(&self, now: OffsetDateTime) -> Duration {
        let recorded = self
            .segments
            .iter()
            .fold(Duration::ZERO, |acc, segment| acc + segment.duration());
        recorded + self.current_run(now).unwrap_or(Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    const T0: OffsetDateTime = datetime!(2025-03-10 09:00 UTC);

    #[test]
    fn new_timer_is_idle_and_empty() {
        let timer = TaskTimer::new("Reading");
        assert!(!timer.is_running());
        assert_eq!(timer.total_duration(T0), Duration::ZERO);
        assert_eq!(timer.session_count(), 0);
    }

    #[test]
    fn pause_records_a_segment() {
        let mut timer = TaskTimer::new("Reading");
        timer.start(T0);
        timer.pause(T0 + Duration::minutes(25));

        assert!(!timer.is_running());
        assert_eq!(timer.segments().len(), 1);
        assert_eq!(timer.segments()[0].start(), T0);
        assert_eq!(timer.total_duration(T0 + Duration::hours(5)), Duration::minutes(25));
    }

    #[test]
    fn total_includes_live_time() {
        let mut timer = TaskTimer::new("Reading");
        timer.start(T0);
        timer.pause(T0 + Duration::seconds(10));
        timer.start(T0 + Duration::seconds(60));

        let now = T0 + Duration::seconds(90);
        assert_eq!(timer.total_duration(now), Duration::seconds(40));
        assert_eq!(timer.current_run(now), Some(Duration::seconds(30)));
        assert_eq!(timer.session_count(), 2);
    }

    #[test]
    fn redundant_calls_do_not_change_totals() {
        let mut timer = TaskTimer::new("Reading");
        timer.pause(T0);
        timer.start(T0);
        timer.start(T0 + Duration::seconds(5));
        timer.pause(T0 + Duration::seconds(8));
        timer.pause(T0 + Duration::seconds(20));
        timer.stop(T0 + Duration::seconds(30));

        assert_eq!(timer.segments().len(), 1);
        assert_eq!(timer.total_duration(T0 + Duration::seconds(60)), Duration::seconds(8));
    }

    #[test]
    fn clock_rewind_yields_negative_segment() {
        let mut timer = TaskTimer::new("Reading");
        timer.start(T0);
        timer.pause(T0 - Duration::seconds(3));

        assert_eq!(timer.total_duration(T0), Duration::seconds(-3));
    }
}
