// ABOUTME: Step panel renderers, one per StepContent layout
// Options grids, facility cards, the receiving timeline and the final summary

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::theme::{
    CARD_BG, CORNFLOWER_BLUE, GOLD, MUTED_GRAY, SELECTION_GREEN, SOFT_WHITE, SUBDUED_BORDER,
};
use crate::models::{
    CostCard, Facility, OptionGroup, Practice, ProcessStage, StepContent, StorageOption,
};

/// Draw the panel for a step's content
pub fn render_content(frame: &mut Frame, area: Rect, content: &StepContent) {
    match content {
        StepContent::OptionsGrid { groups } => render_options_grid(frame, area, groups, "•"),
        StepContent::Facilities { locations, storage } => {
            render_facilities(frame, area, locations, storage);
        }
        StepContent::Receiving {
            process,
            costs,
            practices,
        } => render_receiving(frame, area, process, costs, practices),
        StepContent::FinalSetup {
            headline,
            summary,
            columns,
        } => render_final_setup(frame, area, headline, summary, columns),
    }
}

fn card(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(SUBDUED_BORDER))
        .style(Style::default().bg(CARD_BG))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
        ))
}

/// Split `area` into `count` equal columns
pub(super) fn columns(area: Rect, count: usize) -> Vec<Rect> {
    let count = u32::try_from(count.max(1)).unwrap_or(u32::MAX);
    let constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Ratio(1, count)).collect();
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

fn render_options_grid(frame: &mut Frame, area: Rect, groups: &[OptionGroup], bullet: &str) {
    if groups.is_empty() {
        return;
    }

    for (group, column) in groups.iter().zip(columns(area, groups.len())) {
        let block = card(&group.title);
        let inner = block.inner(column);
        frame.render_widget(block, column);

        let mut lines = Vec::new();
        if let Some(summary) = &group.summary {
            lines.push(Line::from(Span::styled(
                summary.as_str(),
                Style::default().fg(MUTED_GRAY),
            )));
            lines.push(Line::from(""));
        }
        for item in &group.items {
            lines.push(Line::from(vec![
                Span::styled(format!(" {bullet} "), Style::default().fg(CORNFLOWER_BLUE)),
                Span::styled(item.as_str(), Style::default().fg(SOFT_WHITE)),
            ]));
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}

fn render_facilities(
    frame: &mut Frame,
    area: Rect,
    locations: &[Facility],
    storage: &[StorageOption],
) {
    let storage_height = if storage.is_empty() { 0 } else { 5 };
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(storage_height)])
        .split(area);

    // Facility cards, two per row
    let rows: Vec<&[Facility]> = locations.chunks(2).collect();
    if !rows.is_empty() {
        let row_count = u32::try_from(rows.len()).unwrap_or(u32::MAX);
        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                (0..row_count)
                    .map(|_| Constraint::Ratio(1, row_count))
                    .collect::<Vec<_>>(),
            )
            .split(layout[0]);

        for (row, row_area) in rows.iter().zip(row_areas.iter()) {
            for (facility, cell) in row.iter().zip(columns(*row_area, 2)) {
                render_facility_card(frame, cell, facility);
            }
        }
    }

    if !storage.is_empty() {
        for (option, column) in storage.iter().zip(columns(layout[1], storage.len())) {
            let block = card(&option.kind);
            let inner = block.inner(column);
            frame.render_widget(block, column);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    option.details.as_str(),
                    Style::default().fg(MUTED_GRAY),
                ))
                .wrap(Wrap { trim: true }),
                inner,
            );
        }
    }
}

fn render_facility_card(frame: &mut Frame, area: Rect, facility: &Facility) {
    let block = card(&facility.name);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from(vec![
        Span::styled("Region: ", Style::default().fg(MUTED_GRAY)),
        Span::styled(facility.region.as_str(), Style::default().fg(SOFT_WHITE)),
    ])];
    for specialty in &facility.specialties {
        lines.push(Line::from(vec![
            Span::styled(" ✓ ", Style::default().fg(CORNFLOWER_BLUE)),
            Span::styled(specialty.as_str(), Style::default().fg(CORNFLOWER_BLUE)),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_receiving(
    frame: &mut Frame,
    area: Rect,
    process: &[ProcessStage],
    costs: &[CostCard],
    practices: &[Practice],
) {
    let cost_height = if costs.is_empty() { 0 } else { 5 };
    let practice_height = if practices.is_empty() {
        0
    } else {
        u16::try_from(practices.len()).unwrap_or(u16::MAX).saturating_add(2)
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(cost_height),
            Constraint::Length(practice_height),
        ])
        .split(area);

    render_timeline(frame, layout[0], process);

    for (cost, column) in costs.iter().zip(columns(layout[1], costs.len())) {
        let block = card(&cost.label);
        let inner = block.inner(column);
        frame.render_widget(block, column);
        let lines = vec![
            Line::from(Span::styled(
                cost.amount.as_str(),
                Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(cost.basis.as_str(), Style::default().fg(MUTED_GRAY))),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
    }

    if !practices.is_empty() {
        let block = card("Best Practices");
        let inner = block.inner(layout[2]);
        frame.render_widget(block, layout[2]);
        let lines: Vec<Line> = practices
            .iter()
            .map(|practice| {
                Line::from(vec![
                    Span::styled(" ✓ ", Style::default().fg(SELECTION_GREEN)),
                    Span::styled(
                        practice.title.as_str(),
                        Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(": ", Style::default().fg(MUTED_GRAY)),
                    Span::styled(practice.details.as_str(), Style::default().fg(MUTED_GRAY)),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Numbered stages joined by a vertical rule
fn render_timeline(frame: &mut Frame, area: Rect, process: &[ProcessStage]) {
    let block = card("WRO Process Steps");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for (idx, stage) in process.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", idx + 1),
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                stage.step.as_str(),
                Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
            ),
        ]));
        let rule = if idx + 1 < process.len() { " │ " } else { "   " };
        lines.push(Line::from(vec![
            Span::styled(rule, Style::default().fg(SUBDUED_BORDER)),
            Span::styled(stage.details.as_str(), Style::default().fg(MUTED_GRAY)),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_final_setup(
    frame: &mut Frame,
    area: Rect,
    headline: &str,
    summary: &str,
    follow_ups: &[OptionGroup],
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("✓ {headline}"),
            Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(summary, Style::default().fg(MUTED_GRAY))),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(intro, layout[0]);

    render_options_grid(frame, layout[1], follow_ups, "→");
}
