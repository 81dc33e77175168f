// ABOUTME: Onboarding wizard module for new 3PL customers
// Controller state, the wizard component and its per-step panels

pub mod component;
pub mod panels;
pub mod state;
pub mod theme;

pub use component::{next_label, OnboardingComponent};
pub use state::{Advance, WizardController, WizardState};
