use time::{Duration, OffsetDateTime};

/// One completed period of work on a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInterval {
    start: OffsetDateTime,
    end: OffsetDateTime,
}

impl TimeInterval {
    pub fn new(start: OffsetDateTime, end: OffsetDateTime) -> Self {
        Self { start, end }
    }

    #[cfg(test)]
    pub fn start(&self) -> OffsetDateTime {
        self.start
    }

    #[cfg(test)]
    pub fn end(&self) -> OffsetDateTime {
        self.end
    }

    /// Length of the interval. Negative if the wall clock was set back while it ran.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}
