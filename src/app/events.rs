// ABOUTME: Event handling system mapping keyboard input to wizard actions

use crate::app::state::{AppState, Overlay};
use crate::components::onboarding::Advance;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    NextStep,
    PreviousStep,
    /// Zero-based target step
    GoToStep(usize),
    FirstStep,
    LastStep,
    ToggleHelp,
    ToggleStepInfo,
    CloseOverlay,
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        // Key presses only
        if key_event.kind != KeyEventKind::Press {
            return None;
        }

        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            return Some(AppEvent::Quit);
        }

        // While an overlay is open only its toggle and Esc are live
        if let Some(overlay) = state.overlay {
            return match (overlay, key_event.code) {
                (_, KeyCode::Esc) => Some(AppEvent::CloseOverlay),
                (Overlay::Help, KeyCode::Char('?')) => Some(AppEvent::ToggleHelp),
                (Overlay::StepInfo, KeyCode::Char('i')) => Some(AppEvent::ToggleStepInfo),
                _ => None,
            };
        }

        match key_event.code {
            KeyCode::Right | KeyCode::Enter | KeyCode::Char('l' | 'n') => Some(AppEvent::NextStep),
            KeyCode::Left | KeyCode::Backspace | KeyCode::Char('h' | 'p') => {
                Some(AppEvent::PreviousStep)
            }
            KeyCode::Home => Some(AppEvent::FirstStep),
            KeyCode::End => Some(AppEvent::LastStep),
            KeyCode::Char(c @ '1'..='9') => c
                .to_digit(10)
                .and_then(|d| usize::try_from(d).ok())
                .map(|d| AppEvent::GoToStep(d - 1)),
            KeyCode::Char('i') => Some(AppEvent::ToggleStepInfo),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        debug!(?event, "processing event");

        // Any navigation clears the previous status message
        if !matches!(
            event,
            AppEvent::ToggleHelp | AppEvent::ToggleStepInfo | AppEvent::CloseOverlay
        ) {
            state.status_message = None;
        }

        match event {
            AppEvent::Quit => {
                info!("quit requested");
                state.should_quit = true;
            }
            AppEvent::NextStep => match state.wizard.advance() {
                Advance::Moved { .. } => {}
                Advance::Completed => {
                    info!(
                        completed = state.wizard.completed_steps().len(),
                        total = state.wizard.step_count(),
                        "onboarding completed"
                    );
                    state.status_message =
                        Some("Onboarding complete! Press q to exit".to_string());
                }
            },
            AppEvent::PreviousStep => {
                state.wizard.retreat();
            }
            AppEvent::GoToStep(index) => state.wizard.go_to_step(index),
            AppEvent::FirstStep => state.wizard.go_to_step(0),
            AppEvent::LastStep => {
                let last = state.wizard.step_count() - 1;
                state.wizard.go_to_step(last);
            }
            AppEvent::ToggleHelp => state.toggle_overlay(Overlay::Help),
            AppEvent::ToggleStepInfo => state.toggle_overlay(Overlay::StepInfo),
            AppEvent::CloseOverlay => state.overlay = None,
        }
    }
}
