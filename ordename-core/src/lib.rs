#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod apply;
pub mod error;
pub mod listing;
pub mod names;
pub mod operations;
pub mod output;
pub mod pairing;

pub use apply::{apply_pairs, ApplyOptions};
pub use error::{Error, Result};
pub use listing::{list_matching, normalize_extension};
pub use names::suit_rank_names;
pub use operations::run_operation;
pub use output::{DirOutcome, OutputFormat, OutputFormatter, RunResult, VersionResult};
pub use pairing::{pair_by_order, RenamePair};
