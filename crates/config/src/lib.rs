//! Configuration management for the tasklane application.
//!
//! This crate handles discovering, loading and validating configuration.
//!
//! # Overview
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`source`]: Task source selection, delays and load timeout
//! - [`board`]: Board behaviour, including the drop policy
//! - [`persistence`]: Config file discovery and reading
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. An explicit path (the `--config` flag)
//! 2. Local config (`./tasklane.json5` or `./tasklane.json`)
//! 3. User config (`~/.config/tasklane/config.json5` or `~/.config/tasklane/config.json`)
//! 4. Built-in defaults
//!
//! # File Format
//!
//! ```json5
//! {
//!   // "mock" (default) or "file"
//!   source: { kind: "file", path: "tasks.json", delay_ms: 0, timeout_secs: 10 },
//!   // "write_through" (default) or "mirror_only"
//!   board: { drop_policy: "write_through" },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use tasklane_config::Config;
//!
//! # fn example() -> tasklane_config::Result<()> {
//! let config = Config::load()?;
//! println!("Loads time out after {:?}", config.source.timeout());
//! # Ok(())
//! # }
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod persistence;
pub mod source;

// Re-export primary types at crate root for convenience
pub use board::{BoardConfig, DropPolicy};
pub use config::Config;
pub use error::{ConfigError, Result};
pub use source::{SourceConfig, SourceKind};
