// Trust Scout: rule-based heuristic risk scoring for fake social media accounts
//
// This is the library root. The scoring engine is pure; everything around it
// (input loading, history, rendering, config) is plumbing for the CLI.

pub mod config;
pub mod history;
pub mod input;
pub mod models;
pub mod output;
pub mod scoring;
