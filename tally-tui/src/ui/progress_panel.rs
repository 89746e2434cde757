use super::utils::{task_color, to_local_time};
use super::*;
use crate::app::format_hms;

pub fn render_progress(frame: &mut Frame, area: Rect, view: &ViewModel) {
    let label = Style::default().fg(Color::DarkGray);
    let mut lines = Vec::new();

    match view.active_task() {
        Some(task) => {
            lines.push(Line::from(vec![
                Span::styled("Tracking     ", label),
                Span::styled(
                    task.label.clone(),
                    Style::default()
                        .fg(task_color(task.color))
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Current run  ", label),
                Span::styled(
                    format!("{} ⏵", format_hms(task.current_run_seconds.unwrap_or(0))),
                    Style::default().fg(Color::Green),
                ),
            ]));
            if let Some(since) = view.active_since {
                let local = to_local_time(since);
                lines.push(Line::from(vec![
                    Span::styled("Started at   ", label),
                    Span::raw(format!(
                        "{:02}:{:02}:{:02}",
                        local.hour(),
                        local.minute(),
                        local.second()
                    )),
                ]));
            }
            lines.push(Line::from(vec![
                Span::styled("Task total   ", label),
                Span::raw(format_hms(task.total_seconds)),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Sessions     ", label),
                Span::raw(task.sessions.to_string()),
            ]));
        }
        None => {
            lines.push(Line::from(Span::styled("Not running", label)));
            lines.push(Line::from(vec![
                Span::raw("Type "),
                Span::styled("switch", Style::default().fg(Color::Yellow)),
                Span::raw(" to start a task."),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("All tasks    ", label),
        Span::styled(
            format_hms(view.total_seconds),
            Style::default().fg(Color::Magenta),
        ),
    ]));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .block(panel("Current Progress", view.active_task().is_some()));
    frame.render_widget(paragraph, area);
}
