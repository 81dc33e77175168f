// ABOUTME: Core data models for the onboarding guide: step descriptors and the step catalog

pub mod catalog;
pub mod step;

pub use catalog::{CatalogError, StepCatalog};
pub use step::{
    CostCard, Facility, OptionGroup, Practice, ProcessStage, StepContent, StepDescriptor,
    StorageOption,
};
