use super::*;
use crate::command::{Phase, Verb};

const MAX_VISIBLE_CANDIDATES: usize = 5;

pub fn render_command(frame: &mut Frame, area: Rect, view: &ViewModel) {
    let block = panel("Command", true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Prompt + input
            Constraint::Min(0),    // Candidates
            Constraint::Length(1), // Status
            Constraint::Length(1), // Controls
        ])
        .split(inner);

    render_input(frame, chunks[0], view);
    render_candidates(frame, chunks[1], view);
    render_status(frame, chunks[2], view);
    render_controls(frame, chunks[3]);
}

/// What the palette is asking for, e.g. `rename Reading › label`.
fn prompt(view: &ViewModel) -> String {
    let verb = view.active_command.map(Verb::as_str).unwrap_or_default();
    let target = view.active_target.as_deref().unwrap_or_default();
    match (view.phase, view.active_command) {
        (Phase::Idle, _) | (Phase::Command, _) => "›".to_string(),
        (Phase::TaskName, Some(Verb::Insert)) => format!("{} › new task", verb),
        (Phase::TaskName, _) => format!("{} › task", verb),
        (Phase::Argument, Some(Verb::Color)) => format!("{} {} › color", verb, target),
        (Phase::Argument, _) => format!("{} {} › label", verb, target),
    }
}

fn render_input(frame: &mut Frame, area: Rect, view: &ViewModel) {
    let cursor = view.cursor.min(view.input_buffer.len());
    let (before, after) = view.input_buffer.split_at(cursor);
    let line = if view.phase == Phase::Idle {
        Line::from(vec![
            Span::styled("› ", Style::default().fg(Color::Yellow)),
            Span::styled("Type a command...", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![
            Span::styled(format!("{} ", prompt(view)), Style::default().fg(Color::Yellow)),
            Span::styled(format!("{}█{}", before, after), Style::default().fg(Color::White)),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_candidates(frame: &mut Frame, area: Rect, view: &ViewModel) {
    let visible = (area.height as usize).min(MAX_VISIBLE_CANDIDATES);
    // Scroll so the selected candidate stays on screen.
    let skip = (view.selected_index + 1).saturating_sub(visible);

    let items: Vec<ListItem> = view
        .candidates
        .iter()
        .enumerate()
        .skip(skip)
        .take(visible)
        .map(|(i, candidate)| {
            let style = if i == view.selected_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("  {}", candidate)).style(style)
        })
        .collect();

    frame.render_widget(List::new(items), area);
}

fn render_status(frame: &mut Frame, area: Rect, view: &ViewModel) {
    let text = view.status.clone().unwrap_or_default();
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::Cyan)),
        area,
    );
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(": Complete  "),
        Span::styled("↑↓", Style::default().fg(Color::Yellow)),
        Span::raw(": Select/History  "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(": Confirm  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(": Cancel  "),
        Span::styled("Ctrl+C", Style::default().fg(Color::Yellow)),
        Span::raw(": Quit"),
    ];
    frame.render_widget(
        Paragraph::new(Line::from(controls)).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
