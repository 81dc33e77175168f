// ABOUTME: Main onboarding wizard component
// Renders progress, step indicators, the current step panel and navigation

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

use super::panels;
use super::state::WizardController;
use super::theme::{
    CORNFLOWER_BLUE, DARK_BG, GOLD, MUTED_GRAY, PANEL_BG, SELECTION_GREEN, SOFT_WHITE,
    SUBDUED_BORDER,
};

/// Narrowest indicator cell that still gets a title next to its icon
const MIN_TITLED_CELL: usize = 6;

/// Shorten a title to `max` characters, ending in an ellipsis when cut
fn fit_title(title: &str, max: usize) -> String {
    if title.chars().count() <= max {
        return title.to_string();
    }
    let kept: String = title.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

/// Label for the forward navigation button
pub fn next_label(wizard: &WizardController) -> &'static str {
    if !wizard.is_last_step() {
        "Next →"
    } else if wizard.is_finished() {
        "Completed ✓"
    } else {
        "Complete ✓"
    }
}

/// The main onboarding wizard component
pub struct OnboardingComponent {
    show_key_hints: bool,
}

impl OnboardingComponent {
    pub fn new() -> Self {
        Self {
            show_key_hints: true,
        }
    }

    pub fn with_key_hints(mut self, show: bool) -> Self {
        self.show_key_hints = show;
        self
    }

    /// Main render function
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        wizard: &WizardController,
        status: Option<&str>,
    ) {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let hint_height = u16::from(self.show_key_hints);
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),           // Header with progress bar
                Constraint::Length(1),           // Step indicators
                Constraint::Min(8),              // Step panel
                Constraint::Length(3),           // Navigation
                Constraint::Length(hint_height), // Key hints
            ])
            .split(area);

        self.render_header(frame, layout[0], wizard);
        self.render_indicators(frame, layout[1], wizard);
        self.render_step_content(frame, layout[2], wizard);
        self.render_navigation(frame, layout[3], wizard, status);
        if self.show_key_hints {
            self.render_key_hints(frame, layout[4]);
        }
    }

    /// Render the title and progress bar
    fn render_header(&self, frame: &mut Frame, area: Rect, wizard: &WizardController) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(1), // Subtitle
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Gauge
            ])
            .split(inner);

        let title = Paragraph::new(Line::from(Span::styled(
            "Quetico 3PL Onboarding",
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, header_layout[0]);

        let subtitle = Paragraph::new(Span::styled(
            "Complete these steps to set up your account",
            Style::default().fg(MUTED_GRAY),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(subtitle, header_layout[1]);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(CORNFLOWER_BLUE).bg(SUBDUED_BORDER))
            .ratio(wizard.progress_ratio())
            .label(Span::styled(
                format!("{:.0}% complete", wizard.progress_percent()),
                Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
            ));
        frame.render_widget(gauge, header_layout[3]);
    }

    /// Render one marker per step: completed, current or pending
    fn render_indicators(&self, frame: &mut Frame, area: Rect, wizard: &WizardController) {
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let current = wizard.current_index();
        let cells = panels::columns(area, wizard.step_count());

        for (idx, (step, cell)) in wizard.catalog().iter().zip(cells).enumerate() {
            let (icon, icon_style) = if wizard.is_completed(idx) {
                ("✓", Style::default().fg(SELECTION_GREEN))
            } else if idx == current {
                ("◉", Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(MUTED_GRAY))
            };
            let title_style = if idx == current {
                Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED_GRAY)
            };

            let mut spans = vec![Span::styled(icon, icon_style)];
            let width = usize::from(cell.width);
            if width >= MIN_TITLED_CELL {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(fit_title(&step.title, width - 2), title_style));
            }

            frame.render_widget(
                Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
                cell,
            );
        }
    }

    /// Render the current step's title, description and panel
    fn render_step_content(&self, frame: &mut Frame, area: Rect, wizard: &WizardController) {
        let step = wizard.current_step();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(format!(" {} ", step.title))
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let content_layout = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(1)
            .constraints([
                Constraint::Length(2), // Description
                Constraint::Min(0),    // Panel
            ])
            .split(inner);

        let description = Paragraph::new(Span::styled(
            step.description.as_str(),
            Style::default().fg(SOFT_WHITE),
        ))
        .wrap(Wrap { trim: true });
        frame.render_widget(description, content_layout[0]);

        panels::render_content(frame, content_layout[1], &step.content);
    }

    /// Render Previous / position / Next-or-Complete
    fn render_navigation(
        &self,
        frame: &mut Frame,
        area: Rect,
        wizard: &WizardController,
        status: Option<&str>,
    ) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(PANEL_BG));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let nav_layout = Layout::default()
            .direction(Direction::Horizontal)
            .horizontal_margin(2)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(50),
                Constraint::Percentage(25),
            ])
            .split(inner);

        let previous_style = if wizard.can_go_back() {
            Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(SUBDUED_BORDER)
        };
        let previous = Paragraph::new(Span::styled("← Previous", previous_style));
        frame.render_widget(previous, nav_layout[0]);

        let middle = status.map_or_else(
            || {
                Line::from(Span::styled(
                    format!("Step {} of {}", wizard.current_index() + 1, wizard.step_count()),
                    Style::default().fg(MUTED_GRAY),
                ))
            },
            |message| {
                Line::from(Span::styled(
                    message.to_string(),
                    Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD),
                ))
            },
        );
        frame.render_widget(
            Paragraph::new(middle).alignment(Alignment::Center),
            nav_layout[1],
        );

        let next_style = if wizard.is_last_step() {
            Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD)
        };
        let next = Paragraph::new(Span::styled(next_label(wizard), next_style))
            .alignment(Alignment::Right);
        frame.render_widget(next, nav_layout[2]);
    }

    fn render_key_hints(&self, frame: &mut Frame, area: Rect) {
        let key = Style::default().fg(GOLD);
        let text = Style::default().fg(MUTED_GRAY);
        let hints = Paragraph::new(Line::from(vec![
            Span::styled("←/h", key),
            Span::styled(" previous  ", text),
            Span::styled("→/l/Enter", key),
            Span::styled(" next  ", text),
            Span::styled("1-9", key),
            Span::styled(" jump  ", text),
            Span::styled("i", key),
            Span::styled(" info  ", text),
            Span::styled("?", key),
            Span::styled(" help  ", text),
            Span::styled("q", key),
            Span::styled(" quit", text),
        ]))
        .alignment(Alignment::Center)
        .style(Style::default().bg(DARK_BG));
        frame.render_widget(hints, area);
    }
}

impl Default for OnboardingComponent {
    fn default() -> Self {
        Self::new()
    }
}
