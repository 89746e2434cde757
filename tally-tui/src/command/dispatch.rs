use super::verb::Verb;
use crate::tracker::{TaskColor, TaskRegistry};
use std::fmt;

/// A fully entered command, ready to run against the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub verb: Verb,
    pub target: Option<String>,
    pub argument: Option<String>,
}

impl Invocation {
    /// Parse a whole command line such as `rename Deep Work Focus`.
    ///
    /// Task names may contain spaces, so for verbs that take an argument the
    /// longest known task id at the start of the remainder is the target.
    pub fn parse<'a>(line: &str, task_ids: impl IntoIterator<Item = &'a str>) -> Option<Self> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        let verb: Verb = verb.parse().ok()?;

        let (target, argument) = if !verb.takes_target() {
            (None, None)
        } else if verb.takes_argument() {
            let known = task_ids
                .into_iter()
                .filter(|id| {
                    rest.strip_prefix(*id)
                        .is_some_and(|tail| tail.is_empty() || tail.starts_with(char::is_whitespace))
                })
                .max_by_key(|id| id.len());
            match known {
                Some(id) => (Some(id.to_string()), non_empty(&rest[id.len()..])),
                None => match rest.split_once(char::is_whitespace) {
                    Some((target, argument)) => (non_empty(target), non_empty(argument)),
                    None => (non_empty(rest), None),
                },
            }
        } else {
            (non_empty(rest), None)
        };

        Some(Self {
            verb,
            target,
            argument,
        })
    }

    /// Run the command. Returns false when it did not resolve to anything.
    pub fn apply(&self, registry: &mut TaskRegistry) -> bool {
        handler(self.verb)(registry, self)
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.verb)?;
        for part in [&self.target, &self.argument].into_iter().flatten() {
            write!(f, " {}", part)?;
        }
        Ok(())
    }
}

pub(super) fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

type Handler = fn(&mut TaskRegistry, &Invocation) -> bool;

fn handler(verb: Verb) -> Handler {
    match verb {
        Verb::Insert => insert,
        Verb::Erase => erase,
        Verb::Switch => switch,
        Verb::Pause => pause,
        Verb::Rename => rename,
        Verb::Color => color,
    }
}

fn insert(registry: &mut TaskRegistry, cmd: &Invocation) -> bool {
    cmd.target
        .as_deref()
        .is_some_and(|id| registry.add_task(id))
}

fn erase(registry: &mut TaskRegistry, cmd: &Invocation) -> bool {
    cmd.target
        .as_deref()
        .is_some_and(|id| registry.remove_task(id))
}

fn switch(registry: &mut TaskRegistry, cmd: &Invocation) -> bool {
    cmd.target
        .as_deref()
        .is_some_and(|id| registry.start_task(id))
}

fn pause(registry: &mut TaskRegistry, _: &Invocation) -> bool {
    registry.pause_active().is_some()
}

fn rename(registry: &mut TaskRegistry, cmd: &Invocation) -> bool {
    match (cmd.target.as_deref(), cmd.argument.as_deref()) {
        (Some(id), Some(label)) => registry.set_label(id, label),
        _ => false,
    }
}

fn color(registry: &mut TaskRegistry, cmd: &Invocation) -> bool {
    let (Some(id), Some(raw)) = (cmd.target.as_deref(), cmd.argument.as_deref()) else {
        return false;
    };
    match raw.parse::<TaskColor>() {
        Ok(color) => registry.set_color(id, color),
        Err(err) => {
            tracing::warn!(task = id, %err, "ignoring color command");
            false
        }
    }
}
