//! Command-line workflows, independent of argument parsing

pub mod orchestration;

pub use orchestration::{
    run_adjust, run_copy, run_create_ts, AdjustArgs, AdjustOutcome, CopyArgs, CreateTsArgs,
    ManifestArgs, Session,
};
