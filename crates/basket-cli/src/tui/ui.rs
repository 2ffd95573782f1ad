//! UI rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use basket_core::models::format_quantity;

use super::app::{AddField, App, InputMode};

/// Main UI rendering function
pub fn draw(frame: &mut Frame, app: &App) {
    // List above, one-line status/input area below
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    draw_list_pane(frame, app, chunks[0]);

    match app.input_mode {
        InputMode::Normal => draw_status_bar(frame, app, chunks[1]),
        InputMode::Add => draw_add_form(frame, app, chunks[1]),
        InputMode::ConfirmRemove => draw_confirm_prompt(frame, app, chunks[1]),
    }

    // Draw help overlay if visible
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draw the item list
fn draw_list_pane(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .store
        .items()
        .iter()
        .map(|item| {
            let mark = if item.purchased { "[x]" } else { "[ ]" };
            let line_style = if item.purchased {
                Style::default().add_modifier(Modifier::DIM)
            } else {
                Style::default()
            };

            let content = Line::from(vec![
                Span::styled(format!("{} ", mark), line_style),
                Span::styled(&item.name, line_style),
                Span::styled(
                    format!("  {} {}", format_quantity(item.quantity), item.unit),
                    line_style,
                ),
            ]);

            let detail_line = Line::from(vec![Span::styled(
                format!(
                    "    {} · added {}",
                    &item.id.to_string()[..8],
                    item.created_at.format("%Y-%m-%d %H:%M")
                ),
                Style::default().add_modifier(Modifier::DIM),
            )]);

            ListItem::new(vec![content, detail_line])
        })
        .collect();

    let title = format!(" Basket ({}) ", app.store.item_count());
    let block = Block::default().title(title).borders(Borders::ALL);

    if items.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "List is empty. Press a to add an item.",
                Style::default().add_modifier(Modifier::DIM),
            )]),
        ])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .add_modifier(Modifier::BOLD)
            .add_modifier(Modifier::REVERSED),
    );

    let mut state = ListState::default();
    state.select(Some(app.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Draw the status bar at the bottom
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(msg) = &app.error_message {
        let line = Line::from(vec![Span::styled(
            format!("✗ {}", msg),
            Style::default().fg(Color::Red),
        )]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let content = if let Some(msg) = &app.status_message {
        msg.clone()
    } else {
        let hints = "a:add  Space:toggle  d:del  ?:help  q:quit";
        let remaining = app.store.unpurchased_count();
        if remaining > 0 {
            format!("{} to buy  ·  {}", remaining, hints)
        } else {
            hints.to_string()
        }
    };

    let paragraph = Paragraph::new(content).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

/// Draw the add form input line
fn draw_add_form(frame: &mut Frame, app: &App, area: Rect) {
    // If a validation error is pending, show it in place of the form
    if let Some(msg) = &app.error_message {
        let line = Line::from(vec![Span::styled(
            format!("✗ {}", msg),
            Style::default().fg(Color::Red),
        )]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let field_style = |field: AddField| {
        if app.add_field == field {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    };

    let line = Line::from(vec![
        Span::styled("add> ", Style::default().fg(Color::Yellow)),
        Span::styled("Name:", field_style(AddField::Name)),
        Span::raw(format!("{} ", app.name_input)),
        Span::styled("Qty:", field_style(AddField::Quantity)),
        Span::raw(format!("{} ", app.quantity_input)),
        Span::styled("Unit:", field_style(AddField::Unit)),
        Span::raw(app.unit_input.as_str()),
    ]);

    frame.render_widget(Paragraph::new(line), area);

    // Cursor at the end of the focused field
    let cursor_x = area.x + cursor_offset(app) as u16;
    frame.set_cursor_position((cursor_x, area.y));
}

/// Column of the cursor within the add form line
///
/// Counted in characters, not bytes, so multibyte input ("Körte")
/// keeps the cursor on the focused field.
fn cursor_offset(app: &App) -> usize {
    let prefix = "add> ".len();
    let name_seg = "Name:".len() + app.name_input.chars().count();
    let qty_seg = "Qty:".len() + app.quantity_input.chars().count();
    let unit_seg = "Unit:".len() + app.unit_input.chars().count();

    match app.add_field {
        AddField::Name => prefix + name_seg,
        AddField::Quantity => prefix + name_seg + 1 + qty_seg,
        AddField::Unit => prefix + name_seg + 1 + qty_seg + 1 + unit_seg,
    }
}

/// Draw the remove confirmation prompt
fn draw_confirm_prompt(frame: &mut Frame, app: &App, area: Rect) {
    let name = app
        .pending_remove
        .and_then(|id| app.store.get_item(id))
        .map(|item| item.name.as_str())
        .unwrap_or("item");

    let line = Line::from(vec![Span::styled(
        format!("Remove '{}'? (y/n)", name),
        Style::default().fg(Color::Yellow),
    )]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw help overlay
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Calculate centered popup area
    let popup_width = 44.min(area.width.saturating_sub(4));
    let popup_height = 16.min(area.height.saturating_sub(4));
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the popup area
    frame.render_widget(ratatui::widgets::Clear, popup_area);

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from("Navigation:"),
        Line::from("  j/k, ↑/↓    Move up/down"),
        Line::from("  gg          Jump to first item"),
        Line::from("  G           Jump to last item"),
        Line::from(""),
        Line::from("Commands:"),
        Line::from("  a           Add item"),
        Line::from("  Space/Enter Toggle purchased"),
        Line::from("  d           Remove item"),
        Line::from("  q           Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().add_modifier(Modifier::BOLD));

    let paragraph = Paragraph::new(help_text).block(block);
    frame.render_widget(paragraph, popup_area);
}
