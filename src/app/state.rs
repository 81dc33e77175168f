// ABOUTME: Application state wrapping the onboarding wizard controller and overlays

use anyhow::{Context, Result};

use crate::components::onboarding::WizardController;
use crate::config::AppConfig;
use crate::models::StepCatalog;

/// Modal drawn on top of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Help,
    StepInfo,
}

#[derive(Debug)]
pub struct AppState {
    pub wizard: WizardController,
    pub overlay: Option<Overlay>,
    pub should_quit: bool,
    /// Transient message shown in the navigation bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(catalog: StepCatalog) -> Self {
        Self {
            wizard: WizardController::new(catalog),
            overlay: None,
            should_quit: false,
            status_message: None,
        }
    }

    pub fn help_visible(&self) -> bool {
        self.overlay == Some(Overlay::Help)
    }

    pub fn info_visible(&self) -> bool {
        self.overlay == Some(Overlay::StepInfo)
    }

    /// Show `overlay`, or close it if it is already showing
    pub fn toggle_overlay(&mut self, overlay: Overlay) {
        self.overlay = if self.overlay == Some(overlay) {
            None
        } else {
            Some(overlay)
        };
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(StepCatalog::builtin())
    }
}

/// Top-level application: state plus the configuration it was built from
pub struct App {
    pub state: AppState,
    pub config: AppConfig,
}

impl App {
    /// Mount with the built-in catalog and default configuration
    pub fn new() -> Self {
        Self {
            state: AppState::default(),
            config: AppConfig::default(),
        }
    }

    /// Build from configuration, loading a custom catalog when one is configured
    pub fn from_config(config: AppConfig) -> Result<Self> {
        let catalog = match &config.catalog.path {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading custom step catalog");
                StepCatalog::load(path)
                    .with_context(|| format!("Invalid step catalog {}", path.display()))?
            }
            None => StepCatalog::builtin(),
        };

        Ok(Self {
            state: AppState::new(catalog),
            config,
        })
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_new_app_mounts_on_first_step() {
        let app = App::new();
        assert_eq!(app.state.wizard.current_index(), 0);
        assert!(app.state.overlay.is_none());
        assert!(!app.state.should_quit);
    }

    #[test]
    fn test_toggle_overlay() {
        let mut state = AppState::default();
        state.toggle_overlay(Overlay::Help);
        assert!(state.help_visible());

        state.toggle_overlay(Overlay::StepInfo);
        assert!(state.info_visible());
        assert!(!state.help_visible());

        state.toggle_overlay(Overlay::StepInfo);
        assert!(state.overlay.is_none());
    }

    #[test]
    fn test_from_config_loads_custom_catalog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("steps.toml");
        fs::write(
            &path,
            r#"
            [[steps]]
            id = "only"
            title = "Only Step"
            description = "Just one"
            [steps.content]
            kind = "final_setup"
            headline = "Done"
            summary = "Nothing else to do"
            "#,
        )
        .unwrap();

        let mut config = AppConfig::default();
        config.catalog.path = Some(path);

        let app = App::from_config(config).unwrap();
        assert_eq!(app.state.wizard.step_count(), 1);
        assert_eq!(app.state.wizard.current_step().id, "only");
    }

    #[test]
    fn test_from_config_rejects_empty_catalog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("steps.toml");
        fs::write(&path, "").unwrap();

        let mut config = AppConfig::default();
        config.catalog.path = Some(path);

        assert!(App::from_config(config).is_err());
    }
}
