//! Plain-text rendering of rules and evaluation results

mod decision_render;
mod rule_render;

pub use decision_render::render_decision;
pub use rule_render::{render_evaluation, render_rule};
