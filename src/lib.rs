//! Estimate engine for the German federal separation allowance (Trennungsgeld)
//!
//! This crate calculates meal and overnight allowances and reimbursable travel
//! costs under the Bundesreisekostengesetz (BRKG), combines them into a single
//! result with a namespaced breakdown, and renders that breakdown as a text
//! report. It ships a CLI with an interactive quickstart and an HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
