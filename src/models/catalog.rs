// ABOUTME: Ordered, validated step catalog for the onboarding guide
// Ships a built-in 3PL catalog and can load a replacement from a TOML file

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::step::{
    group, CostCard, Facility, Practice, ProcessStage, StepContent, StepDescriptor, StorageOption,
};

/// Reasons a catalog is rejected at construction
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("step catalog is empty")]
    Empty,

    #[error("step at position {index} has a blank id")]
    BlankId { index: usize },

    #[error("duplicate step id '{id}'")]
    DuplicateId { id: String },

    #[error("failed to read catalog from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Immutable, non-empty, ordered list of steps with unique ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepCatalog {
    steps: Vec<StepDescriptor>,
}

/// On-disk shape of a catalog file
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    steps: Vec<StepDescriptor>,
}

impl StepCatalog {
    /// Validate and wrap an ordered list of steps
    pub fn new(steps: Vec<StepDescriptor>) -> Result<Self, CatalogError> {
        if steps.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for (index, step) in steps.iter().enumerate() {
            if step.id.trim().is_empty() {
                return Err(CatalogError::BlankId { index });
            }
            if !seen.insert(step.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: step.id.clone(),
                });
            }
        }

        Ok(Self { steps })
    }

    /// Parse a catalog from TOML (`[[steps]]` tables)
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.steps)
    }

    /// Load a catalog file from disk
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the catalog has no steps. `new` rejects empty lists, so a
    /// constructed catalog always returns `false` here.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[StepDescriptor] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StepDescriptor> {
        self.steps.iter()
    }

    /// Position of the step with the given id
    pub fn position(&self, id: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.id == id)
    }

    /// The built-in Quetico 3PL onboarding sequence
    pub fn builtin() -> Self {
        Self {
            steps: builtin_steps(),
        }
    }
}

impl Default for StepCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a StepCatalog {
    type Item = &'a StepDescriptor;
    type IntoIter = std::slice::Iter<'a, StepDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

fn builtin_steps() -> Vec<StepDescriptor> {
    vec![
        StepDescriptor::new(
            "store-integration",
            "Store Integration",
            "Connect your online store so orders flow to us automatically",
            StepContent::OptionsGrid {
                groups: vec![
                    group(
                        "Automated Integration",
                        Some("Orders sync from your storefront every few minutes"),
                        &["Shopify", "WooCommerce", "BigCommerce", "Amazon", "Etsy"],
                    ),
                    group(
                        "Manual Setup",
                        Some("No supported platform? Send orders another way"),
                        &[
                            "CSV order upload",
                            "REST API access",
                            "Manual order entry",
                            "Scheduled SFTP drop",
                        ],
                    ),
                ],
            },
        ),
        StepDescriptor::new(
            "product-setup",
            "Product Setup",
            "Tell us what we will be storing and shipping for you",
            StepContent::OptionsGrid {
                groups: vec![
                    group(
                        "Import Products",
                        Some("Bring your catalog in with whichever method suits you"),
                        &["Sync from store", "CSV upload", "Manual entry", "API import"],
                    ),
                    group(
                        "Product Details",
                        Some("Every SKU needs complete details before it can be received"),
                        &["SKU and barcode", "Dimensions", "Weight", "Customs value"],
                    ),
                ],
            },
        ),
        StepDescriptor::new(
            "shipping-preferences",
            "Shipping Preferences",
            "Choose how your orders are packed and shipped",
            StepContent::OptionsGrid {
                groups: vec![
                    group(
                        "Shipping Options",
                        None,
                        &["Standard Ground", "Expedited", "Two-Day", "Overnight"],
                    ),
                    group(
                        "Packaging Types",
                        None,
                        &["Poly mailer", "Corrugated box", "Custom branded box", "Gift wrap"],
                    ),
                ],
            },
        ),
        StepDescriptor::new(
            "facilities",
            "Select Facilities",
            "Pick the fulfillment centers that will hold your inventory",
            StepContent::Facilities {
                locations: vec![
                    Facility {
                        name: "Thunder Bay Hub".to_string(),
                        region: "Northwestern Ontario".to_string(),
                        specialties: vec![
                            "Oversized items".to_string(),
                            "Pallet storage".to_string(),
                        ],
                    },
                    Facility {
                        name: "Mississauga Fulfillment Center".to_string(),
                        region: "Greater Toronto Area".to_string(),
                        specialties: vec![
                            "High-volume e-commerce".to_string(),
                            "Same-day dispatch".to_string(),
                        ],
                    },
                    Facility {
                        name: "Winnipeg Cross-Dock".to_string(),
                        region: "Prairies".to_string(),
                        specialties: vec![
                            "B2B replenishment".to_string(),
                            "Cross-docking".to_string(),
                        ],
                    },
                    Facility {
                        name: "Buffalo Gateway".to_string(),
                        region: "US Northeast".to_string(),
                        specialties: vec![
                            "US domestic shipping".to_string(),
                            "Cross-border returns".to_string(),
                        ],
                    },
                ],
                storage: vec![
                    StorageOption {
                        kind: "Shelving".to_string(),
                        details: "Small and medium items picked by the unit".to_string(),
                    },
                    StorageOption {
                        kind: "Pallet".to_string(),
                        details: "Bulk inventory and case-pack products".to_string(),
                    },
                    StorageOption {
                        kind: "Bin".to_string(),
                        details: "Tiny, high-value or fast-moving SKUs".to_string(),
                    },
                ],
            },
        ),
        StepDescriptor::new(
            "inventory-receipt",
            "Inventory Receipt",
            "Send inventory to us with a Warehouse Receiving Order (WRO)",
            StepContent::Receiving {
                process: vec![
                    stage("Create WRO", "List the SKUs and quantities you are sending"),
                    stage("Label Shipment", "Print WRO labels for every box and pallet"),
                    stage("Ship Inventory", "Send the shipment and add tracking to the WRO"),
                    stage("Receiving", "We count, inspect and log every unit on arrival"),
                    stage("Available to Sell", "Stock goes live and starts syncing to your store"),
                ],
                costs: vec![
                    CostCard {
                        label: "Standard Rate".to_string(),
                        amount: "$25".to_string(),
                        basis: "For first 2 hours of receiving".to_string(),
                    },
                    CostCard {
                        label: "Additional Time".to_string(),
                        amount: "$35".to_string(),
                        basis: "Per additional hour".to_string(),
                    },
                    CostCard {
                        label: "Missing WRO Fee".to_string(),
                        amount: "$25".to_string(),
                        basis: "Per day until resolved".to_string(),
                    },
                ],
                practices: vec![
                    practice(
                        "Affix WRO Labels",
                        "Ensure all boxes and pallets have WRO labels properly attached",
                    ),
                    practice(
                        "Schedule Delivery",
                        "Book dock time for pallet deliveries in advance",
                    ),
                    practice(
                        "Track Shipments",
                        "Add tracking numbers to WRO summary for visibility",
                    ),
                ],
            },
        ),
        StepDescriptor::new(
            "final-setup",
            "Final Setup",
            "Wrap up and get ready for your first orders",
            StepContent::FinalSetup {
                headline: "Setup Complete!".to_string(),
                summary: "Congratulations! You've completed the initial setup process. \
                          Here's what happens next:"
                    .to_string(),
                columns: vec![
                    group(
                        "Next Steps",
                        None,
                        &[
                            "Review order processing workflows",
                            "Set up tracking notifications",
                            "Configure return policies",
                        ],
                    ),
                    group(
                        "Support Resources",
                        None,
                        &[
                            "Access help documentation",
                            "Contact your account manager",
                            "Schedule onboarding call",
                        ],
                    ),
                ],
            },
        ),
    ]
}

fn stage(step: &str, details: &str) -> ProcessStage {
    ProcessStage {
        step: step.to_string(),
        details: details.to_string(),
    }
}

fn practice(title: &str, details: &str) -> Practice {
    Practice {
        title: title.to_string(),
        details: details.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn simple_step(id: &str) -> StepDescriptor {
        StepDescriptor::new(
            id,
            id.to_uppercase(),
            "test step",
            StepContent::OptionsGrid { groups: vec![] },
        )
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let builtin = StepCatalog::builtin();
        let revalidated = StepCatalog::new(builtin.steps().to_vec()).unwrap();
        assert_eq!(revalidated.len(), 6);
        assert!(!revalidated.is_empty());
        assert_eq!(builtin.steps()[0].id, "store-integration");
        assert_eq!(builtin.steps()[5].id, "final-setup");
    }

    #[test]
    fn test_builtin_panel_kinds() {
        let kinds: Vec<&str> = StepCatalog::builtin()
            .iter()
            .map(|s| s.content.kind())
            .collect();
        assert_eq!(
            kinds,
            vec![
                "options_grid",
                "options_grid",
                "options_grid",
                "facilities",
                "receiving",
                "final_setup"
            ]
        );
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(StepCatalog::new(vec![]), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = StepCatalog::new(vec![simple_step("a"), simple_step("b"), simple_step("a")]);
        match result {
            Err(CatalogError::DuplicateId { id }) => assert_eq!(id, "a"),
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_id_rejected() {
        let result = StepCatalog::new(vec![simple_step("a"), simple_step("  ")]);
        assert!(matches!(result, Err(CatalogError::BlankId { index: 1 })));
    }

    #[test]
    fn test_position_lookup() {
        let catalog = StepCatalog::builtin();
        assert_eq!(catalog.position("facilities"), Some(3));
        assert_eq!(catalog.position("nope"), None);
    }

    #[test]
    fn test_from_toml_str() {
        let toml = r#"
            [[steps]]
            id = "connect"
            title = "Connect"
            description = "Connect your store"

            [steps.content]
            kind = "options_grid"

            [[steps.content.groups]]
            title = "Platforms"
            items = ["Shopify", "Etsy"]

            [[steps]]
            id = "done"
            title = "Done"
            description = "All finished"

            [steps.content]
            kind = "final_setup"
            headline = "Ready"
            summary = "You're ready to ship"
        "#;

        let catalog = StepCatalog::from_toml_str(toml).unwrap();
        assert_eq!(catalog.len(), 2);
        match &catalog.steps()[0].content {
            StepContent::OptionsGrid { groups } => {
                assert_eq!(groups[0].items, vec!["Shopify", "Etsy"]);
                assert_eq!(groups[0].summary, None);
            }
            other => panic!("unexpected content {other:?}"),
        }
        assert_eq!(catalog.steps()[1].content.kind(), "final_setup");
    }

    #[test]
    fn test_from_toml_without_steps_is_empty_error() {
        let result = StepCatalog::from_toml_str("");
        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    #[test]
    fn test_from_toml_unknown_kind_is_parse_error() {
        let toml = r#"
            [[steps]]
            id = "x"
            title = "X"
            description = "x"
            [steps.content]
            kind = "carousel"
        "#;
        assert!(matches!(
            StepCatalog::from_toml_str(toml),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");
        match StepCatalog::load(&path) {
            Err(CatalogError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
