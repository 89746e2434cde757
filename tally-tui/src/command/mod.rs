use crate::tracker::{TaskColor, TaskRegistry};

mod dispatch;
mod fuzzy;
mod input;
mod verb;

pub use dispatch::Invocation;
pub use input::KeyInput;
pub use verb::Verb;

use dispatch::non_empty;
use fuzzy::CandidateFilter;
use input::LineBuffer;

/// Which part of a command the palette is currently collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Command,
    TaskName,
    Argument,
}

/// Result of feeding one key to the interpreter.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Key consumed; the command is still being assembled.
    Pending,
    /// A command was run. `applied` is false when it resolved to nothing.
    Dispatched {
        invocation: Invocation,
        applied: bool,
    },
    /// Enter on text that names no command.
    Rejected(String),
    Aborted,
}

/// Staged command palette: verb, then task name, then an optional argument.
///
/// Each keystroke re-filters the candidates for the current phase. Verbs are
/// resolved once when the Command phase is committed.
pub struct CommandInterpreter {
    phase: Phase,
    input: LineBuffer,
    active_command: Option<Verb>,
    active_target: Option<String>,
    candidates: Vec<String>,
    selected_index: usize,
    history: Vec<String>,
    history_limit: usize,
    // Position in `history` while browsing with Up/Down; `draft` holds what was typed before.
    history_cursor: Option<usize>,
    draft: String,
    filter: CandidateFilter,
}

impl CommandInterpreter {
    pub fn new(history_limit: usize) -> Self {
        Self {
            phase: Phase::Idle,
            input: LineBuffer::default(),
            active_command: None,
            active_target: None,
            candidates: Vec::new(),
            selected_index: 0,
            history: Vec::new(),
            history_limit,
            history_cursor: None,
            draft: String::new(),
            filter: CandidateFilter::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn input(&self) -> &LineBuffer {
        &self.input
    }

    pub fn buffer(&self) -> &str {
        self.input.text()
    }

    pub fn active_command(&self) -> Option<Verb> {
        self.active_command
    }

    pub fn active_target(&self) -> Option<&str> {
        self.active_target.as_deref()
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_candidate(&self) -> Option<&str> {
        self.candidates.get(self.selected_index).map(String::as_str)
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn handle_key(&mut self, key: KeyInput, registry: &mut TaskRegistry) -> Step {
        if self.phase == Phase::Idle {
            self.enter_phase(Phase::Command, registry);
        }

        match key {
            KeyInput::Char(c) => {
                self.input.insert(c);
                self.edited(registry);
            }
            KeyInput::Backspace => {
                self.input.backspace();
                self.edited(registry);
            }
            KeyInput::Left => self.input.left(),
            KeyInput::Right => self.input.right(),
            KeyInput::Home => self.input.home(),
            KeyInput::End => self.input.end(),
            KeyInput::Tab => self.accept_selected(registry),
            KeyInput::Up => self.move_up(registry),
            KeyInput::Down => self.move_down(registry),
            KeyInput::Escape => {
                self.reset(registry);
                return Step::Aborted;
            }
            KeyInput::Enter => return self.commit(registry),
        }
        Step::Pending
    }

    /// Recompute candidates after the task set changed outside the palette.
    pub fn refresh(&mut self, registry: &TaskRegistry) {
        let source: Vec<&str> = match self.phase {
            Phase::Idle => Vec::new(),
            Phase::Command => Verb::names().collect(),
            Phase::TaskName => registry.task_ids().collect(),
            Phase::Argument if self.active_command == Some(Verb::Color) => {
                TaskColor::names().collect()
            }
            Phase::Argument => Vec::new(),
        };
        self.candidates = self.filter.filter(source, self.input.text());
        self.selected_index = self
            .selected_index
            .min(self.candidates.len().saturating_sub(1));
    }

    fn edited(&mut self, registry: &TaskRegistry) {
        self.history_cursor = None;
        self.refresh(registry);
    }

    fn accept_selected(&mut self, registry: &TaskRegistry) {
        let Some(candidate) = self.selected_candidate().map(str::to_string) else {
            return;
        };
        self.input.replace(&candidate);
        self.edited(registry);
        self.selected_index = self
            .candidates
            .iter()
            .position(|c| *c == candidate)
            .unwrap_or(0);
    }

    fn move_up(&mut self, registry: &TaskRegistry) {
        if !self.candidates.is_empty() && self.selected_index > 0 {
            self.selected_index -= 1;
            return;
        }
        if self.phase != Phase::Command || self.history.is_empty() {
            return;
        }
        let idx = match self.history_cursor {
            None => {
                self.draft = self.input.text().to_string();
                self.history.len() - 1
            }
            Some(i) => i.saturating_sub(1),
        };
        self.recall(Some(idx), registry);
    }

    fn move_down(&mut self, registry: &TaskRegistry) {
        if self.selected_index + 1 < self.candidates.len() {
            self.selected_index += 1;
            return;
        }
        let Some(i) = self.history_cursor else {
            return;
        };
        let next = (i + 1 < self.history.len()).then_some(i + 1);
        self.recall(next, registry);
    }

    /// Load a history entry into the buffer, or the saved draft for `None`.
    fn recall(&mut self, idx: Option<usize>, registry: &TaskRegistry) {
        let text = match idx {
            Some(i) => self.history[i].clone(),
            None => std::mem::take(&mut self.draft),
        };
        self.input.replace(&text);
        self.history_cursor = idx;
        self.selected_index = 0;
        self.refresh(registry);
    }

    fn commit(&mut self, registry: &mut TaskRegistry) -> Step {
        let typed = self.input.text().trim().to_string();
        // Every candidate matches an empty buffer, so none of them counts as chosen.
        if typed.is_empty() {
            return self.reject(typed, registry);
        }
        match (self.phase, self.active_command) {
            (Phase::Command, _) => self.commit_command(typed, registry),
            (Phase::TaskName, Some(verb)) => {
                let target = if verb.targets_new_task() || registry.get_task(&typed).is_some() {
                    typed
                } else {
                    self.selected_candidate().map(str::to_string).unwrap_or(typed)
                };
                if verb.takes_argument() {
                    self.active_target = Some(target);
                    self.enter_phase(Phase::Argument, registry);
                    Step::Pending
                } else {
                    self.dispatch(
                        Invocation {
                            verb,
                            target: non_empty(&target),
                            argument: None,
                        },
                        registry,
                    )
                }
            }
            (Phase::Argument, Some(verb)) => {
                let argument = if verb == Verb::Color && typed.parse::<TaskColor>().is_err() {
                    self.selected_candidate().map(str::to_string).unwrap_or(typed)
                } else {
                    typed
                };
                let target = self.active_target.take();
                self.dispatch(
                    Invocation {
                        verb,
                        target: target.as_deref().and_then(non_empty),
                        argument: non_empty(&argument),
                    },
                    registry,
                )
            }
            _ => {
                self.reset(registry);
                Step::Pending
            }
        }
    }

    fn commit_command(&mut self, line: String, registry: &mut TaskRegistry) -> Step {
        if line.contains(char::is_whitespace) {
            return match Invocation::parse(&line, registry.task_ids()) {
                Some(invocation) => self.dispatch(invocation, registry),
                None => self.reject(line, registry),
            };
        }

        let verb = line
            .parse::<Verb>()
            .ok()
            .or_else(|| self.selected_candidate().and_then(|c| c.parse().ok()));
        let Some(verb) = verb else {
            return self.reject(line, registry);
        };

        self.active_command = Some(verb);
        if verb.takes_target() {
            self.enter_phase(Phase::TaskName, registry);
            Step::Pending
        } else {
            self.dispatch(
                Invocation {
                    verb,
                    target: None,
                    argument: None,
                },
                registry,
            )
        }
    }

    fn dispatch(&mut self, invocation: Invocation, registry: &mut TaskRegistry) -> Step {
        let applied = invocation.apply(registry);
        let line = invocation.to_string();
        tracing::info!(command = %line, applied, "dispatched command");

        self.history.push(line);
        if self.history.len() > self.history_limit {
            let excess = self.history.len() - self.history_limit;
            self.history.drain(..excess);
        }
        self.reset(registry);
        Step::Dispatched {
            invocation,
            applied,
        }
    }

    fn reject(&mut self, line: String, registry: &TaskRegistry) -> Step {
        if !line.is_empty() {
            tracing::warn!(input = %line, "no command matches input");
        }
        self.reset(registry);
        Step::Rejected(line)
    }

    fn reset(&mut self, registry: &TaskRegistry) {
        self.active_command = None;
        self.active_target = None;
        self.draft.clear();
        self.enter_phase(Phase::Command, registry);
    }

    fn enter_phase(&mut self, phase: Phase, registry: &TaskRegistry) {
        self.phase = phase;
        self.input.clear();
        self.selected_index = 0;
        self.history_cursor = None;
        self.refresh(registry);
    }
}
