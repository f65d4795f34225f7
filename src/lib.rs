pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command, Settings};
pub use config::FileConfig;

pub use adapters::SheetStore;
pub use core::{duplicate_keys, latest_entries, LotteryEngine};
pub use domain::model::{ApplicantKey, DrawResult, Entry, Group, Quotas, Submission};
pub use domain::ports::EntryStore;
pub use utils::error::{LotteryError, Result};
