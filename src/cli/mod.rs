pub mod args;
pub mod processor;
pub mod runner;

pub use args::{get_args, get_log_level_from_verbose, normalize_legacy_flags, Args};
pub use runner::{run, Runner};
