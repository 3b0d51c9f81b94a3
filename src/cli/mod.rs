//! CLI infrastructure for the Dandelion simulator
//!
//! This module provides the command-line interface for simulating batches
//! of games, searching for a perfect game and comparing strategies.

pub mod commands;
pub mod output;
