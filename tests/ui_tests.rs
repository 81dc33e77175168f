// ABOUTME: UI testing framework for the onboarding wizard using headless rendering

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use quetico_onboarding::app::{App, AppState, EventHandler};
use quetico_onboarding::components::LayoutComponent;
use quetico_onboarding::models::{StepCatalog, StepContent, StepDescriptor};

pub struct UITestFramework {
    app: App,
    terminal: Terminal<TestBackend>,
    layout: LayoutComponent,
}

impl UITestFramework {
    pub fn new() -> Self {
        Self::with_size(120, 40)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).unwrap();

        Self {
            app: App::new(),
            terminal,
            layout: LayoutComponent::new(),
        }
    }

    pub fn with_catalog(catalog: StepCatalog) -> Self {
        let mut ui = Self::new();
        ui.app.state = AppState::new(catalog);
        ui
    }

    /// Simulate a key press and process the resulting event
    pub fn press_key(&mut self, key_code: KeyCode) {
        let key_event = KeyEvent::new(key_code, KeyModifiers::NONE);

        if let Some(event) = EventHandler::handle_key_event(key_event, &self.app.state) {
            EventHandler::process_event(event, &mut self.app.state);
        }
    }

    /// Render the current state and return the buffer for inspection
    pub fn render(&mut self) -> String {
        let layout = &self.layout;
        let state = &self.app.state;
        self.terminal
            .draw(|frame| {
                layout.render(frame, state);
            })
            .unwrap();

        let buffer = self.terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect::<String>()
    }

    pub fn state(&self) -> &AppState {
        &self.app.state
    }
}

impl Default for UITestFramework {
    fn default() -> Self {
        Self::new()
    }
}

fn three_step_catalog() -> StepCatalog {
    let steps = ["Alpha", "Bravo", "Charlie"]
        .iter()
        .map(|name| {
            StepDescriptor::new(
                name.to_lowercase(),
                *name,
                format!("{name} description"),
                StepContent::OptionsGrid { groups: vec![] },
            )
        })
        .collect();
    StepCatalog::new(steps).unwrap()
}

#[test]
fn test_first_frame_shows_first_step() {
    let mut ui = UITestFramework::new();
    let screen = ui.render();

    assert!(screen.contains("Quetico 3PL Onboarding"));
    assert!(screen.contains("Store Integration"));
    assert!(screen.contains("Automated Integration"));
    assert!(screen.contains("Shopify"));
    assert!(screen.contains("0% complete"));
    assert!(screen.contains("Step 1 of 6"));
    assert!(screen.contains("Next →"));
}

#[test]
fn test_next_moves_to_product_setup() {
    let mut ui = UITestFramework::new();
    ui.press_key(KeyCode::Right);
    let screen = ui.render();

    assert!(screen.contains("Import Products"));
    assert!(screen.contains("Step 2 of 6"));
    assert!(screen.contains("17% complete"));
}

#[test]
fn test_facilities_panel() {
    let mut ui = UITestFramework::new();
    ui.press_key(KeyCode::Char('4'));
    let screen = ui.render();

    assert!(screen.contains("Thunder Bay Hub"));
    assert!(screen.contains("Region: Northwestern Ontario"));
    assert!(screen.contains("Shelving"));
    // Jumping does not complete anything
    assert!(screen.contains("0% complete"));
}

#[test]
fn test_receiving_panel() {
    let mut ui = UITestFramework::new();
    ui.press_key(KeyCode::Char('5'));
    let screen = ui.render();

    assert!(screen.contains("WRO Process Steps"));
    assert!(screen.contains("Create WRO"));
    assert!(screen.contains("Missing WRO Fee"));
    assert!(screen.contains("$35"));
    assert!(screen.contains("Affix WRO Labels"));
}

#[test]
fn test_final_step_complete_button() {
    let mut ui = UITestFramework::new();
    ui.press_key(KeyCode::End);
    let screen = ui.render();

    assert!(screen.contains("Setup Complete!"));
    assert!(screen.contains("Schedule onboarding call"));
    assert!(screen.contains("Complete ✓"));
    assert!(!screen.contains("Next →"));

    ui.press_key(KeyCode::Enter);
    let screen = ui.render();
    assert!(screen.contains("Completed ✓"));
    assert!(screen.contains("Onboarding complete! Press q to exit"));
    assert!(ui.state().wizard.is_finished());
}

#[test]
fn test_walk_through_entire_guide() {
    let mut ui = UITestFramework::new();
    for _ in 0..6 {
        ui.press_key(KeyCode::Enter);
    }
    let screen = ui.render();

    assert!(screen.contains("100% complete"));
    assert_eq!(ui.state().wizard.completed_steps().len(), 6);
    assert_eq!(ui.state().wizard.current_index(), 5);
}

#[test]
fn test_help_overlay() {
    let mut ui = UITestFramework::new();
    ui.press_key(KeyCode::Char('?'));
    let screen = ui.render();
    assert!(screen.contains("Help - Press ? or Esc to close"));

    ui.press_key(KeyCode::Esc);
    let screen = ui.render();
    assert!(!screen.contains("Help - Press ? or Esc to close"));
    assert!(!ui.state().should_quit);
}

#[test]
fn test_step_info_overlay() {
    let mut ui = UITestFramework::new();
    ui.press_key(KeyCode::Right);
    ui.press_key(KeyCode::Left);
    ui.press_key(KeyCode::Char('i'));
    let screen = ui.render();

    assert!(screen.contains("Step Details"));
    assert!(screen.contains("store-integration"));
    assert!(screen.contains("Status: Completed"));
}

#[test]
fn test_injected_catalog_scenario() {
    let mut ui = UITestFramework::with_catalog(three_step_catalog());
    let screen = ui.render();
    assert!(screen.contains("Alpha description"));
    assert!(screen.contains("Step 1 of 3"));

    ui.press_key(KeyCode::Right);
    ui.press_key(KeyCode::Right);
    ui.press_key(KeyCode::Right);
    assert_eq!(ui.state().wizard.current_index(), 2);
    assert_eq!(
        ui.state()
            .wizard
            .completed_steps()
            .iter()
            .copied()
            .collect::<Vec<_>>(),
        vec![0, 1, 2]
    );

    ui.press_key(KeyCode::Left);
    let screen = ui.render();
    assert!(screen.contains("Bravo description"));
    assert!(screen.contains("100% complete"));
}

/// The rendered row holding the current-step marker
fn current_marker_row(screen: &str, width: usize) -> String {
    let cells: Vec<char> = screen.chars().collect();
    cells
        .chunks(width)
        .map(|row| row.iter().collect::<String>())
        .find(|row| row.contains('◉'))
        .expect("current-step marker should be on screen")
}

#[test]
fn test_standard_terminal_shows_every_indicator() {
    let mut ui = UITestFramework::with_size(80, 24);
    let screen = ui.render();

    let indicator_row = current_marker_row(&screen, 80);
    assert!(indicator_row.contains("◉ Store Int"));
    assert_eq!(indicator_row.matches('○').count(), 5);
    assert!(screen.contains("0% complete"));
    assert!(screen.contains("← Previous"));
    assert!(screen.contains("Next →"));
}

#[test]
fn test_standard_terminal_last_step_marker() {
    let mut ui = UITestFramework::with_size(80, 24);
    ui.press_key(KeyCode::End);
    let screen = ui.render();

    let indicator_row = current_marker_row(&screen, 80);
    assert!(indicator_row.contains("◉ Final Setup"));
    assert_eq!(indicator_row.matches('○').count(), 5);

    assert!(screen.contains("← Previous"));
    assert!(screen.contains("Complete ✓"));
}

#[test]
fn test_standard_terminal_marks_completed_steps() {
    let mut ui = UITestFramework::with_size(80, 24);
    for _ in 0..4 {
        ui.press_key(KeyCode::Enter);
    }
    let screen = ui.render();

    let indicator_row = current_marker_row(&screen, 80);
    assert_eq!(indicator_row.matches('✓').count(), 4);
    assert_eq!(indicator_row.matches('○').count(), 1);
    assert!(screen.contains("67% complete"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut ui = UITestFramework::with_size(20, 5);
    ui.render();
    ui.press_key(KeyCode::Char('5'));
    ui.render();
    ui.press_key(KeyCode::Char('i'));
    ui.render();
}
