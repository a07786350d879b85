//! Command handlers for the `cfgx` CLI.

mod extract;

pub use extract::{parse_extract_args, run_extract, ExtractArgs, OutputShape};
