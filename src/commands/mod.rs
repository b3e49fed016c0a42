//! Command implementations

pub mod play;
pub mod reveal;
pub mod rules;

pub use play::run_play;
pub use reveal::print_answers;
pub use rules::print_rules;
