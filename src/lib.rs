//! depreport - Maven dependency-update report library
//!
//! This library turns the console output of
//! `mvn versions:display-dependency-updates` into a per-module staleness
//! report:
//! - Line filtering and wrapped-row reassembly
//! - Module/dependency extraction
//! - Major/minor/patch severity classification
//! - HTML, JSON and text rendering

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod filter;
pub mod input;
pub mod orchestrator;
pub mod output;
pub mod parser;
