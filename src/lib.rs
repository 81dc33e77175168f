// ABOUTME: Library crate for the Quetico 3PL onboarding guide exposing the wizard for testing and embedding

#![allow(missing_docs)]

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod models;
