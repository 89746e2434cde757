use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The palette's command verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Insert,
    Color,
    Erase,
    Rename,
    Switch,
    Pause,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown command: {0}")]
pub struct UnknownVerb(pub String);

impl Verb {
    /// Palette order.
    pub const ALL: [Verb; 6] = [
        Verb::Insert,
        Verb::Color,
        Verb::Erase,
        Verb::Rename,
        Verb::Switch,
        Verb::Pause,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Insert => "insert",
            Verb::Color => "color",
            Verb::Erase => "erase",
            Verb::Rename => "rename",
            Verb::Switch => "switch",
            Verb::Pause => "pause",
        }
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(Verb::as_str)
    }

    /// `pause` acts on whatever is running and takes no task name.
    pub fn takes_target(self) -> bool {
        !matches!(self, Verb::Pause)
    }

    pub fn takes_argument(self) -> bool {
        matches!(self, Verb::Rename | Verb::Color)
    }

    /// `insert` names a task that does not exist yet.
    pub fn targets_new_task(self) -> bool {
        matches!(self, Verb::Insert)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = UnknownVerb;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|verb| verb.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVerb(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exact_names() {
        assert_eq!("switch".parse::<Verb>(), Ok(Verb::Switch));
        assert_eq!("ERASE".parse::<Verb>(), Ok(Verb::Erase));
        assert_eq!(
            "swit".parse::<Verb>(),
            Err(UnknownVerb("swit".to_string()))
        );
    }

    #[test]
    fn stage_requirements() {
        assert!(!Verb::Pause.takes_target());
        assert!(Verb::Rename.takes_argument());
        assert!(Verb::Color.takes_argument());
        assert!(!Verb::Switch.takes_argument());
        assert!(Verb::Insert.targets_new_task());
    }
}
