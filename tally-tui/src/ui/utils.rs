use crate::tracker::{StandardColor, TaskColor};
use ratatui::style::Color;
use time::UtcOffset;

pub fn to_local_time(dt: time::OffsetDateTime) -> time::OffsetDateTime {
    if let Ok(local_offset) = UtcOffset::current_local_offset() {
        dt.to_offset(local_offset)
    } else {
        dt
    }
}

pub fn task_color(color: TaskColor) -> Color {
    match color {
        TaskColor::Standard(StandardColor::White) => Color::White,
        TaskColor::Standard(StandardColor::Red) => Color::Red,
        TaskColor::Standard(StandardColor::Green) => Color::Green,
        TaskColor::Standard(StandardColor::Yellow) => Color::Yellow,
        TaskColor::Standard(StandardColor::Blue) => Color::Blue,
        TaskColor::Standard(StandardColor::Magenta) => Color::Magenta,
        TaskColor::Standard(StandardColor::Cyan) => Color::Cyan,
        TaskColor::Standard(StandardColor::Gray) => Color::Gray,
        TaskColor::Rgb(r, g, b) => Color::Rgb(r, g, b),
    }
}
