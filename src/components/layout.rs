// ABOUTME: Main layout component drawing the wizard full screen with overlays on top

use ratatui::prelude::*;

use super::{HelpComponent, OnboardingComponent, StepInfoComponent};
use crate::app::{AppState, Overlay};
use crate::config::UiPreferences;

pub struct LayoutComponent {
    onboarding: OnboardingComponent,
    help: HelpComponent,
    step_info: StepInfoComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            onboarding: OnboardingComponent::new(),
            help: HelpComponent::new(),
            step_info: StepInfoComponent::new(),
        }
    }

    pub fn with_preferences(preferences: &UiPreferences) -> Self {
        Self {
            onboarding: OnboardingComponent::new().with_key_hints(preferences.show_key_hints),
            ..Self::new()
        }
    }

    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.size();

        self.onboarding.render(
            frame,
            area,
            &state.wizard,
            state.status_message.as_deref(),
        );

        match state.overlay {
            Some(Overlay::Help) => self.help.render(frame, area),
            Some(Overlay::StepInfo) => self.step_info.render(frame, area, &state.wizard),
            None => {}
        }
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
