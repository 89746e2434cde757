use super::utils::task_color;
use super::*;
use crate::app::{format_hms, TaskView};

pub fn render_tasks(frame: &mut Frame, area: Rect, view: &ViewModel) {
    let title = format!("Tasks ({})", view.tasks.len());
    let block = panel(&title, false);

    if view.tasks.is_empty() {
        let hint = Paragraph::new(Line::from(vec![
            Span::raw("No tasks yet. Type "),
            Span::styled("insert", Style::default().fg(Color::Yellow)),
            Span::raw(" to add one."),
        ]))
        .style(Style::default().fg(Color::DarkGray))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = view.tasks.iter().map(task_row).collect();
    frame.render_widget(List::new(items).block(block), area);
}

fn task_row(task: &TaskView) -> ListItem<'_> {
    let mut label_style = Style::default().fg(task_color(task.color));
    if task.is_active {
        label_style = label_style.add_modifier(Modifier::BOLD);
    }
    let marker = if task.is_active { "⏵ " } else { "  " };

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(Color::Green)),
        Span::styled(format!("{:<20}", task.label), label_style),
        Span::styled(
            format_hms(task.total_seconds),
            Style::default().fg(Color::Magenta),
        ),
    ];
    // Renamed tasks keep matching by id, so show it.
    if task.label != task.id {
        spans.push(Span::styled(
            format!("  ({})", task.id),
            Style::default().fg(Color::DarkGray),
        ));
    }
    ListItem::new(Line::from(spans))
}
