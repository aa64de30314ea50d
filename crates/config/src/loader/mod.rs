//! Configuration loader for `.env` files, environment variables and overrides.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - Environment variables take precedence over defaults.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;


pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
