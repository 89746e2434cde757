use super::color::TaskColor;
use super::timer::TaskTimer;
use crate::clock::Clock;
use std::collections::BTreeMap;
use time::{Duration, OffsetDateTime};

/// A registered task: its timer plus how it is displayed.
#[derive(Debug, Clone)]
pub struct TaskEntry {
    pub timer: TaskTimer,
    pub label: String,
    pub color: TaskColor,
}

impl TaskEntry {
    fn new(id: &str) -> Self {
        Self {
            timer: TaskTimer::new(id),
            label: id.to_string(),
            color: TaskColor::default(),
        }
    }
}

/// All tracked tasks and the one that is currently running, if any.
///
/// Every mutation that closes one run and opens another reads the clock
/// once, so a switch leaves neither a gap nor an overlap between tasks.
pub struct TaskRegistry {
    clock: Box<dyn Clock>,
    tasks: BTreeMap<String, TaskEntry>,
    active: Option<String>,
}

impl TaskRegistry {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self {
            clock,
            tasks: BTreeMap::new(),
            active: None,
        }
    }

    pub fn now(&self) -> OffsetDateTime {
        self.clock.now()
    }

    /// Register an empty timer for `id`. Fails on blank or duplicate ids.
    pub fn add_task(&mut self, id: &str) -> bool {
        let id = id.trim();
        if id.is_empty() || self.tasks.contains_key(id) {
            return false;
        }
        self.tasks.insert(id.to_string(), TaskEntry::new(id));
        tracing::debug!(task = id, "added task");
        true
    }

    pub fn remove_task(&mut self, id: &str) -> bool {
        let Some(mut entry) = self.tasks.remove(id) else {
            return false;
        };
        if self.active.as_deref() == Some(id) {
            entry.timer.pause(self.clock.now());
            self.active = None;
        }
        tracing::debug!(
            task = entry.timer.task_id(),
            tracked_secs = entry.timer.total_duration(self.clock.now()).whole_seconds(),
            "removed task"
        );
        self.debug_check();
        true
    }

    /// Make `id` the running task, pausing whichever task ran before it.
    pub fn start_task(&mut self, id: &str) -> bool {
        if !self.tasks.contains_key(id) {
            return false;
        }
        let now = self.clock.now();
        if let Some(previous) = self.active.take() {
            if previous != id {
                if let Some(entry) = self.tasks.get_mut(&previous) {
                    entry.timer.pause(now);
                }
                tracing::debug!(from = %previous, to = id, "switching task");
            }
        }
        if let Some(entry) = self.tasks.get_mut(id) {
            entry.timer.start(now);
        }
        self.active = Some(id.to_string());
        tracing::debug!(task = id, "started task");
        self.debug_check();
        true
    }

    pub fn pause_task(&mut self, id: &str) -> bool {
        self.close_task(id, TaskTimer::pause, "paused")
    }

    /// Close the run of `id` for good, e.g. when the app exits.
    pub fn stop_task(&mut self, id: &str) -> bool {
        self.close_task(id, TaskTimer::stop, "stopped")
    }

    fn close_task(
        &mut self,
        id: &str,
        close: fn(&mut TaskTimer, OffsetDateTime),
        action: &str,
    ) -> bool {
        let now = self.clock.now();
        let Some(entry) = self.tasks.get_mut(id) else {
            return false;
        };
        close(&mut entry.timer, now);
        if self.active.as_deref() == Some(id) {
            self.active = None;
        }
        tracing::debug!(task = id, "{action} task");
        self.debug_check();
        true
    }

    /// Pause the running task and return its id.
    pub fn pause_active(&mut self) -> Option<String> {
        let id = self.active.clone()?;
        self.pause_task(&id);
        Some(id)
    }

    pub fn get_task(&self, id: &str) -> Option<&TaskTimer> {
        self.tasks.get(id).map(|entry| &entry.timer)
    }

    pub fn entry(&self, id: &str) -> Option<&TaskEntry> {
        self.tasks.get(id)
    }

    pub fn set_label(&mut self, id: &str, label: &str) -> bool {
        let label = label.trim();
        match self.tasks.get_mut(id) {
            Some(entry) if !label.is_empty() => {
                tracing::debug!(task = id, label, "relabelled task");
                entry.label = label.to_string();
                true
            }
            _ => false,
        }
    }

    pub fn set_color(&mut self, id: &str, color: TaskColor) -> bool {
        let Some(entry) = self.tasks.get_mut(id) else {
            return false;
        };
        entry.color = color;
        tracing::debug!(task = id, %color, "recolored task");
        true
    }

    pub fn active_task(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Task ids in their stable display order.
    pub fn task_ids(&self) -> impl Iterator<Item = &str> {
        self.tasks.keys().map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &TaskEntry)> {
        self.tasks.iter().map(|(id, entry)| (id.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Time tracked across every task, including the live run.
    pub fn total_tracked(&self, now: OffsetDateTime) -> Duration {
        self.tasks
            .values()
            .fold(Duration::ZERO, |acc, entry| acc + entry.timer.total_duration(now))
    }

    fn running_ids(&self) -> Vec<&str> {
        self.tasks
            .iter()
            .filter(|(_, entry)| entry.timer.is_running())
            .map(|(id, _)| id.as_str())
            .collect()
    }

    fn debug_check(&self) {
        debug_assert!(
            self.running_ids() == self.active.as_deref().into_iter().collect::<Vec<_>>(),
            "active task {:?} does not match running timers {:?}",
            self.active,
            self.running_ids()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::tracker::color::StandardColor;
    use time::macros::datetime;

    fn registry() -> (TaskRegistry, ManualClock) {
        let clock = ManualClock::new(datetime!(2025-03-10 09:00 UTC));
        (TaskRegistry::new(Box::new(clock.clone())), clock)
    }

    fn total(registry: &TaskRegistry, id: &str) -> Duration {
        registry
            .get_task(id)
            .expect("task should exist")
            .total_duration(registry.now())
    }

    #[test]
    fn add_task_rejects_duplicates_and_blanks() {
        let (mut registry, _) = registry();
        assert!(registry.add_task("Reading"));
        assert!(!registry.add_task("Reading"));
        assert!(!registry.add_task("   "));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn reading_then_writing_scenario() {
        let (mut registry, clock) = registry();
        registry.add_task("Reading");
        registry.add_task("Writing");

        registry.start_task("Reading");
        clock.advance(Duration::seconds(5));
        registry.start_task("Writing");
        clock.advance(Duration::seconds(3));
        registry.stop_task("Writing");

        assert_eq!(total(&registry, "Reading"), Duration::seconds(5));
        assert_eq!(total(&registry, "Writing"), Duration::seconds(3));
        assert_eq!(registry.active_task(), None);
    }

    #[test]
    fn switch_shares_one_timestamp() {
        let (mut registry, clock) = registry();
        registry.add_task("A");
        registry.add_task("B");
        registry.start_task("A");
        clock.advance(Duration::minutes(2));
        let switch_at = registry.now();
        registry.start_task("B");

        let a = registry.get_task("A").expect("A exists");
        let b = registry.get_task("B").expect("B exists");
        assert_eq!(a.segments()[0].end(), switch_at);
        assert_eq!(b.running_since(), Some(switch_at));
        assert!(!a.is_running());
        assert_eq!(registry.active_task(), Some("B"));
    }

    #[test]
    fn restarting_active_task_keeps_open_run() {
        let (mut registry, clock) = registry();
        registry.add_task("A");
        registry.start_task("A");
        clock.advance(Duration::seconds(10));
        registry.start_task("A");
        clock.advance(Duration::seconds(10));

        let a = registry.get_task("A").expect("A exists");
        assert!(a.segments().is_empty());
        assert_eq!(total(&registry, "A"), Duration::seconds(20));
        assert_eq!(registry.active_task(), Some("A"));
    }

    #[test]
    fn start_unknown_task_is_a_no_op() {
        let (mut registry, _) = registry();
        registry.add_task("A");
        registry.start_task("A");
        assert!(!registry.start_task("Ghost"));
        assert_eq!(registry.active_task(), Some("A"));
    }

    #[test]
    fn removing_active_task_clears_active() {
        let (mut registry, clock) = registry();
        registry.add_task("A");
        registry.start_task("A");
        clock.advance(Duration::seconds(4));

        assert!(registry.remove_task("A"));
        assert_eq!(registry.active_task(), None);
        assert!(registry.get_task("A").is_none());
    }

    #[test]
    fn removing_absent_task_leaves_registry_unchanged() {
        let (mut registry, _) = registry();
        registry.add_task("A");
        registry.add_task("B");
        registry.start_task("B");

        assert!(!registry.remove_task("C"));
        assert_eq!(registry.task_ids().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(registry.active_task(), Some("B"));
    }

    #[test]
    fn pausing_inactive_task_keeps_active() {
        let (mut registry, _) = registry();
        registry.add_task("A");
        registry.add_task("B");
        registry.start_task("A");

        assert!(registry.pause_task("B"));
        assert_eq!(registry.active_task(), Some("A"));
        assert_eq!(registry.pause_active().as_deref(), Some("A"));
        assert_eq!(registry.pause_active(), None);
    }

    #[test]
    fn at_most_one_task_runs_through_any_sequence() {
        let (mut registry, clock) = registry();
        for id in ["A", "B", "C"] {
            registry.add_task(id);
        }
        let steps: [(&str, &str); 10] = [
            ("start", "A"),
            ("start", "B"),
            ("pause", "A"),
            ("start", "C"),
            ("remove", "C"),
            ("start", "A"),
            ("pause", "A"),
            ("start", "B"),
            ("start", "B"),
            ("remove", "A"),
        ];
        for (op, id) in steps {
            clock.advance(Duration::seconds(1));
            match op {
                "start" => registry.start_task(id),
                "pause" => registry.pause_task(id),
                _ => registry.remove_task(id),
            };
            let running: Vec<_> = registry.running_ids();
            assert!(running.len() <= 1, "{running:?} after {op} {id}");
            assert_eq!(running.first().copied(), registry.active_task());
        }
    }

    #[test]
    fn total_tracked_has_no_gap_at_switch() {
        let (mut registry, clock) = registry();
        registry.add_task("A");
        registry.add_task("B");
        registry.start_task("A");
        clock.advance(Duration::seconds(7));
        registry.start_task("B");
        clock.advance(Duration::seconds(11));

        assert_eq!(registry.total_tracked(registry.now()), Duration::seconds(18));
    }

    #[test]
    fn label_and_color_are_display_attributes() {
        let (mut registry, _) = registry();
        registry.add_task("read");

        assert!(registry.set_label("read", "Reading club"));
        assert!(!registry.set_label("read", "  "));
        assert!(registry.set_color("read", TaskColor::Standard(StandardColor::Green)));
        assert!(!registry.set_color("nope", TaskColor::default()));

        let entry = registry.entry("read").expect("entry exists");
        assert_eq!(entry.label, "Reading club");
        assert_eq!(entry.color, TaskColor::Standard(StandardColor::Green));
        assert!(registry.get_task("read").is_some());
    }
}
