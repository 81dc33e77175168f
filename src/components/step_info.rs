// ABOUTME: Step info overlay showing details about the current onboarding step

use ratatui::{
    prelude::*,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use super::help::centered_rect;
use super::onboarding::theme::{
    CORNFLOWER_BLUE, GOLD, MUTED_GRAY, PANEL_BG, SELECTION_GREEN, SOFT_WHITE,
};
use super::onboarding::WizardController;

pub struct StepInfoComponent;

impl StepInfoComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, wizard: &WizardController) {
        let popup_area = centered_rect(60, 50, area);
        frame.render_widget(Clear, popup_area);

        let step = wizard.current_step();
        let index = wizard.current_index();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(" Step Details - Press i or Esc to close ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let (status, status_color) = if wizard.is_completed(index) {
            ("Completed", SELECTION_GREEN)
        } else {
            ("Not completed yet", MUTED_GRAY)
        };

        let lines = vec![
            Line::from(Span::styled(
                step.title.as_str(),
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("Step {} of {}  ·  {}", index + 1, wizard.step_count(), step.id),
                Style::default().fg(MUTED_GRAY),
            )),
            Line::from(""),
            Line::from(Span::styled(
                step.description.as_str(),
                Style::default().fg(SOFT_WHITE),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Status: ", Style::default().fg(MUTED_GRAY)),
                Span::styled(status, Style::default().fg(status_color)),
            ]),
            Line::from(vec![
                Span::styled("Overall progress: ", Style::default().fg(MUTED_GRAY)),
                Span::styled(
                    format!("{:.0}%", wizard.progress_percent()),
                    Style::default().fg(CORNFLOWER_BLUE),
                ),
            ]),
        ];

        let info = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(info, popup_area);
    }
}

impl Default for StepInfoComponent {
    fn default() -> Self {
        Self::new()
    }
}
