// file: src/output/mod.rs
// description: result rendering module exports
// reference: internal module structure

pub mod json;
pub mod terminal;

pub use json::to_json;
pub use terminal::{render_answer, render_corpus, render_search};

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
