// Interview practice: question generation and answer evaluation.
// Both routes send a plain conversation (no JSON mode) through the chat gateway.

pub mod evaluation;
pub mod handlers;
pub mod questions;
