// ABOUTME: UI components for the TUI: onboarding wizard, layout and overlays

pub mod help;
pub mod layout;
pub mod onboarding;
pub mod step_info;

pub use help::HelpComponent;
pub use layout::LayoutComponent;
pub use onboarding::OnboardingComponent;
pub use step_info::StepInfoComponent;
