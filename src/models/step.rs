// ABOUTME: Step descriptor data model for the onboarding guide
// Each step carries display text and a tagged panel layout the renderer dispatches on

use serde::{Deserialize, Serialize};

/// One stage of the onboarding sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDescriptor {
    /// Stable identifier (e.g., "store-integration")
    pub id: String,
    pub title: String,
    pub description: String,
    /// Panel data for this step, opaque to the wizard controller
    pub content: StepContent,
}

impl StepDescriptor {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        content: StepContent,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            content,
        }
    }
}

/// Panel layouts a step can use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepContent {
    /// Side-by-side columns of titled item lists
    OptionsGrid { groups: Vec<OptionGroup> },
    /// Facility cards followed by storage solution cards
    Facilities {
        locations: Vec<Facility>,
        #[serde(default)]
        storage: Vec<StorageOption>,
    },
    /// Numbered receiving timeline, cost cards and a best-practice checklist
    Receiving {
        process: Vec<ProcessStage>,
        #[serde(default)]
        costs: Vec<CostCard>,
        #[serde(default)]
        practices: Vec<Practice>,
    },
    /// Closing message with follow-up lists
    FinalSetup {
        headline: String,
        summary: String,
        #[serde(default)]
        columns: Vec<OptionGroup>,
    },
}

impl StepContent {
    /// Short name of the panel layout, matching the serialized tag
    pub fn kind(&self) -> &'static str {
        match self {
            Self::OptionsGrid { .. } => "options_grid",
            Self::Facilities { .. } => "facilities",
            Self::Receiving { .. } => "receiving",
            Self::FinalSetup { .. } => "final_setup",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionGroup {
    pub title: String,
    /// Optional explanatory line shown under the title
    #[serde(default)]
    pub summary: Option<String>,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    pub name: String,
    pub region: String,
    #[serde(default)]
    pub specialties: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageOption {
    #[serde(rename = "type")]
    pub kind: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStage {
    pub step: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostCard {
    pub label: String,
    /// Display amount, e.g. "$25"
    pub amount: String,
    /// What the amount is charged per
    pub basis: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Practice {
    pub title: String,
    pub details: String,
}

/// Build an [`OptionGroup`] from string slices
pub(crate) fn group(title: &str, summary: Option<&str>, items: &[&str]) -> OptionGroup {
    OptionGroup {
        title: title.to_string(),
        summary: summary.map(str::to_string),
        items: items.iter().map(|s| (*s).to_string()).collect(),
    }
}
