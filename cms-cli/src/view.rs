//! Rendering of the open menu

use crate::theme;
use cms_core::{NavigationStack, Widget};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

const LABEL_WIDTH: usize = 18;

pub fn render(frame: &mut Frame, nav: &NavigationStack<'_>, status: Option<&str>) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Length(2), // Breadcrumbs
        Constraint::Min(0),    // Entries
        Constraint::Length(1), // Status
        Constraint::Length(2), // Footer
    ])
    .split(frame.area());

    let header = Paragraph::new(nav.current_title().unwrap_or("CMS"))
        .style(theme::title())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(theme::border()),
        );
    frame.render_widget(header, chunks[0]);

    let crumbs = Paragraph::new(nav.breadcrumbs().join(" › "))
        .style(theme::subtitle())
        .alignment(Alignment::Center);
    frame.render_widget(crumbs, chunks[1]);

    let items: Vec<ListItem> = nav
        .current_entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            if matches!(entry.widget, Widget::Label) && entry.action.is_none() {
                return ListItem::new(Line::from(Span::styled(entry.label.as_str(), theme::label())));
            }
            let value_style = if entry.is_editable() {
                theme::value()
            } else {
                theme::live_value()
            };
            let mut spans = vec![Span::raw(format!("{:<LABEL_WIDTH$}", entry.label))];
            if let Some(value) = nav.display_value(index) {
                spans.push(Span::styled(value, value_style));
            } else if matches!(entry.widget, Widget::Submenu) {
                spans.push(Span::styled(">", theme::subtitle()));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::NONE))
        .highlight_style(theme::selected())
        .highlight_symbol("▶ ");
    let mut state = ListState::default().with_selected(nav.highlighted());
    frame.render_stateful_widget(list, chunks[2], &mut state);

    if let Some(status) = status {
        let line = Paragraph::new(status)
            .style(theme::error())
            .alignment(Alignment::Center);
        frame.render_widget(line, chunks[3]);
    }

    let footer = Paragraph::new("↑↓ Navigate  ←→ Adjust  Enter Select  Esc Back  q Exit  Ctrl+Q Discard")
        .style(theme::footer())
        .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[4]);
}
