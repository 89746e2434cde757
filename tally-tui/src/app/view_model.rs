use crate::command::{CommandInterpreter, Phase, Verb};
use crate::tracker::{TaskColor, TaskRegistry};
use time::{Duration, OffsetDateTime};

/// One row of the task list.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskView {
    pub id: String,
    pub label: String,
    pub color: TaskColor,
    pub total_seconds: i64,
    pub current_run_seconds: Option<i64>,
    pub sessions: usize,
    pub is_active: bool,
}

/// Read-only snapshot handed to the renderer after every key and tick.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub tasks: Vec<TaskView>,
    pub active_since: Option<OffsetDateTime>,
    pub total_seconds: i64,
    pub phase: Phase,
    pub input_buffer: String,
    pub cursor: usize,
    pub candidates: Vec<String>,
    pub selected_index: usize,
    pub active_command: Option<Verb>,
    pub active_target: Option<String>,
    pub status: Option<String>,
}

impl ViewModel {
    pub fn capture(
        registry: &TaskRegistry,
        interpreter: &CommandInterpreter,
        status: Option<&str>,
    ) -> Self {
        let now = registry.now();
        let active = registry.active_task();
        let tasks = registry
            .entries()
            .map(|(id, entry)| TaskView {
                id: id.to_string(),
                label: entry.label.clone(),
                color: entry.color,
                total_seconds: display_seconds(entry.timer.total_duration(now)),
                current_run_seconds: entry.timer.current_run(now).map(display_seconds),
                sessions: entry.timer.session_count(),
                is_active: active == Some(id),
            })
            .collect();

        Self {
            tasks,
            active_since: active
                .and_then(|id| registry.entry(id))
                .and_then(|entry| entry.timer.running_since()),
            total_seconds: display_seconds(registry.total_tracked(now)),
            phase: interpreter.phase(),
            input_buffer: interpreter.buffer().to_string(),
            cursor: interpreter.input().cursor(),
            candidates: interpreter.candidates().to_vec(),
            selected_index: interpreter.selected_index(),
            active_command: interpreter.active_command(),
            active_target: interpreter.active_target().map(str::to_string),
            status: status.map(str::to_string),
        }
    }

    pub fn active_task(&self) -> Option<&TaskView> {
        self.tasks.iter().find(|task| task.is_active)
    }
}

/// Whole seconds for display. Clock rewinds can make durations negative; those show as zero.
fn display_seconds(duration: Duration) -> i64 {
    duration.whole_seconds().max(0)
}
