pub mod core;

// Independent helpers for agent sessions and docs
pub mod helpers;

// Terminal prompts and previews
pub mod cli;

pub mod logging;
