use crate::tui::app::{App, Overlay};
use crate::tui::colors;
use crate::tui::search::highlight_range;
use crate::tui::table::SortColumn;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap};
use unicode_width::UnicodeWidthStr;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(5),    // Table
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_search_bar(frame, app, chunks[0]);
    draw_table(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);

    match app.overlay {
        Overlay::None => {}
        Overlay::Detail => draw_detail_overlay(frame, app, area),
        Overlay::Help => draw_help_overlay(frame, area),
    }

    // Show cursor in the search bar when focused and no overlay is open
    if app.overlay == Overlay::None && app.search.focused {
        // Border (1) + space + search icon " \u{1F50D} " (approx 4 display cols)
        let typed_width = app.search.query[..app.search.cursor_pos].width() as u16;
        let cursor_x = chunks[0].x + 1 + 4 + typed_width;
        let cursor_y = chunks[0].y + 1;
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.search.focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" search your favorite cocktail ");

    let search_text = format!(" \u{1F50D} {}", app.search.query);
    let paragraph = Paragraph::new(search_text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn draw_table(frame: &mut Frame, app: &mut App, area: Rect) {
    // Visible rows: area height minus borders and header
    let table_inner_height = area.height.saturating_sub(3) as usize;
    app.table.visible_rows = table_inner_height;

    let total = app.display_indices.len();

    if total == 0 {
        let message = if app.is_fetching() {
            format!("Searching '{}'\u{2026}", app.fetching_term)
        } else if app.results.term.is_empty() {
            "Type to search the cocktail database".to_string()
        } else {
            format!("No drinks found for '{}'", app.results.term)
        };
        let block = Block::default().borders(Borders::ALL);
        let paragraph = Paragraph::new(message)
            .block(block)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let header_columns: [(&str, SortColumn); 5] = [
        ("Name", SortColumn::Name),
        ("Category", SortColumn::Category),
        ("Glass", SortColumn::Glass),
        ("Type", SortColumn::Type),
        ("Modified", SortColumn::Modified),
    ];

    let header = Row::new(header_columns.iter().map(|(name, col)| {
        let text = if app.table.sort_column == *col {
            format!("{}{}", name, app.table.sort_order.indicator())
        } else {
            name.to_string()
        };
        Cell::from(text).style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0, 95, 135))
                .add_modifier(Modifier::BOLD),
        )
    }))
    .height(1);

    // Build visible rows only
    let start = app.table.scroll_offset;
    let end = (start + table_inner_height).min(total);

    let term = app.results.term.clone();
    let rows: Vec<Row> = (start..end)
        .map(|row_idx| {
            let drink = match app.drink_at(row_idx) {
                Some(d) => d,
                None => return Row::new(vec![Cell::from("")]),
            };
            let is_selected = app.table.selected == Some(row_idx);

            let name_cell = Cell::from(name_line(drink, &term));
            let category_cell = Cell::from(drink.category.clone())
                .style(Style::default().fg(colors::color_for_category(&drink.category)));
            let glass_cell = Cell::from(drink.glass.clone());
            let type_cell = Cell::from(drink.alcoholic.as_str())
                .style(Style::default().fg(colors::color_for_class(drink.alcoholic)));
            let modified_cell = Cell::from(drink.modified_label())
                .style(Style::default().fg(Color::DarkGray));

            let row = Row::new(vec![
                name_cell,
                category_cell,
                glass_cell,
                type_cell,
                modified_cell,
            ]);

            if is_selected {
                row.style(
                    Style::default()
                        .bg(Color::Rgb(40, 60, 80))
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                row
            }
        })
        .collect();

    let widths = [
        Constraint::Percentage(32),
        Constraint::Percentage(20),
        Constraint::Percentage(22),
        Constraint::Percentage(14),
        Constraint::Percentage(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL))
        .column_spacing(1);

    frame.render_widget(table, area);
}

/// Name cell with icon and the fetched term highlighted inside the name
fn name_line(drink: &crate::Drink, term: &str) -> Line<'static> {
    let icon = colors::icon_for_drink(drink.alcoholic, &drink.category);
    let mut spans = vec![Span::raw(format!("{} ", icon))];

    match highlight_range(&drink.name, term) {
        Some((s, e)) => {
            spans.push(Span::raw(drink.name[..s].to_string()));
            spans.push(Span::styled(
                drink.name[s..e].to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(drink.name[e..].to_string()));
        }
        None => spans.push(Span::raw(drink.name.clone())),
    }

    Line::from(spans)
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left = if app.is_fetching() {
        format!(" Searching '{}'\u{2026}", app.fetching_term)
    } else {
        format!(" {}", app.status_message)
    };

    let hints = "? Help  Tab Search  Enter Details  F5 Refresh ";
    let left_width = left.width();
    let padding = (area.width as usize)
        .saturating_sub(left_width)
        .saturating_sub(hints.width());

    let line = Line::from(vec![
        Span::styled(left, Style::default().fg(Color::White)),
        Span::raw(" ".repeat(padding)),
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(Color::Rgb(40, 40, 50))),
        area,
    );
}

fn draw_detail_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let Some(drink) = app.selected_drink() else {
        return;
    };

    let popup = centered_rect(area, 64, 80);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} ", drink.name));

    let mut lines: Vec<Line> = Vec::new();
    lines.push(meta_line("Category", &drink.category));
    lines.push(meta_line("Glass", &drink.glass));
    lines.push(meta_line("Type", drink.alcoholic.as_str()));
    if !drink.tags.is_empty() {
        lines.push(meta_line("Tags", &drink.tags.join(", ")));
    }
    if let Some(iba) = &drink.iba {
        lines.push(meta_line("IBA", iba));
    }
    if let Some(modified) = drink.date_modified {
        lines.push(meta_line(
            "Modified",
            &modified.format("%Y-%m-%d %H:%M").to_string(),
        ));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "Ingredients",
        Style::default().add_modifier(Modifier::BOLD),
    ));
    for line in &drink.ingredients {
        lines.push(Line::raw(format!("  \u{2022} {}", line.display())));
    }

    if !drink.instructions.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "Instructions",
            Style::default().add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::raw(drink.instructions.clone()));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "c copy recipe   Esc close",
        Style::default().fg(Color::DarkGray),
    ));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, popup);
}

fn draw_help_overlay(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(area, 50, 60);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Help ");

    let lines = vec![
        Line::raw("Type            search as you pause"),
        Line::raw("Tab / Down      move focus to the results"),
        Line::raw("Tab or /        back to the search field"),
        Line::raw("Up/Down j/k     select a drink"),
        Line::raw("Enter           drink details"),
        Line::raw("c               copy recipe to clipboard"),
        Line::raw("F1-F4, F6       sort columns"),
        Line::raw("F5              search again now"),
        Line::raw("Esc             clear / unfocus / quit"),
        Line::raw("Ctrl+C          quit"),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup);
}

fn meta_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<10}", label),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(value.to_string()),
    ])
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
