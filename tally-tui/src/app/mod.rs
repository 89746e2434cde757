use crate::clock::Clock;
use crate::command::{CommandInterpreter, Invocation, KeyInput, Step, Verb};
use crate::config::TallyConfig;
use crate::tracker::TaskRegistry;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

mod view_model;
pub use view_model::{TaskView, ViewModel};

/// Everything the control loop owns: the tracker, the palette and the status line.
pub struct App {
    pub running: bool,
    pub registry: TaskRegistry,
    pub interpreter: CommandInterpreter,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(cfg: &TallyConfig, clock: Box<dyn Clock>) -> Self {
        let mut registry = TaskRegistry::new(clock);
        for id in &cfg.tasks {
            if !registry.add_task(id) {
                tracing::warn!(task = %id, "skipping blank or duplicate task from config");
            }
        }
        if registry.is_empty() {
            tracing::info!("no tasks configured; use insert to add one");
        }
        if let Some(id) = &cfg.autostart {
            if !registry.start_task(id) {
                tracing::warn!(task = %id, "autostart task is not registered");
            }
        }

        Self {
            running: true,
            registry,
            interpreter: CommandInterpreter::new(cfg.history_limit),
            status_message: None,
        }
    }

    /// Close the running interval and leave the event loop.
    pub fn quit(&mut self) {
        if let Some(id) = self.registry.active_task().map(str::to_string) {
            self.registry.stop_task(&id);
            tracing::info!(task = %id, "stopped active task on quit");
        }
        self.running = false;
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ViewModel {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.quit();
            }
            _ => {
                if let Some(input) = KeyInput::from_event(&key) {
                    let step = self.interpreter.handle_key(input, &mut self.registry);
                    self.apply_step(step);
                }
            }
        }
        self.view_model()
    }

    pub fn view_model(&self) -> ViewModel {
        ViewModel::capture(
            &self.registry,
            &self.interpreter,
            self.status_message.as_deref(),
        )
    }

    /// One line per task with its tracked time, for printing after the terminal is restored.
    pub fn summary(&self) -> Vec<String> {
        self.view_model()
            .tasks
            .iter()
            .map(|task| format!("{:<24} {}", task.label, format_hms(task.total_seconds)))
            .collect()
    }

    fn apply_step(&mut self, step: Step) {
        match step {
            Step::Pending => {}
            Step::Aborted => self.status_message = None,
            Step::Rejected(line) if line.is_empty() => {}
            Step::Rejected(line) => self.set_status(format!("Unknown command: {}", line)),
            Step::Dispatched {
                invocation,
                applied: true,
            } => self.set_status(describe(&invocation)),
            Step::Dispatched {
                invocation,
                applied: false,
            } => self.set_status(format!("Nothing to do: {}", invocation)),
        }
    }
}

fn describe(invocation: &Invocation) -> String {
    let target = invocation.target.as_deref().unwrap_or_default();
    let argument = invocation.argument.as_deref().unwrap_or_default();
    match invocation.verb {
        Verb::Insert => format!("Added {}", target),
        Verb::Erase => format!("Erased {}", target),
        Verb::Switch => format!("Tracking {}", target),
        Verb::Pause => "Paused".to_string(),
        Verb::Rename => format!("{} is now shown as {}", target, argument),
        Verb::Color => format!("{} is now {}", target, argument),
    }
}

pub fn format_hms(total_seconds: i64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
