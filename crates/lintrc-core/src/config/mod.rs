//! Configuration model for lintrc
//!
//! This module provides:
//! - [`ConfigFragment`]: one partial configuration record, as written on disk
//! - [`RuleEntry`] / [`Severity`]: a rule's severity and options
//! - [`ResolvedConfig`]: the flattened, read-only result of resolution
//! - [`ConfigLoader`]: JSON/JSONC/YAML/TOML loading and upward discovery
//!
//! ## Configuration Files
//!
//! Within one directory the first existing file of `.lintrc.json`,
//! `.lintrc.jsonc`, `.lintrc.yaml`, `.lintrc.yml` and `.lintrc.toml` is used.
//! Discovery walks up the directory tree and stops at a file with
//! `"root": true`.
//!
//! ## Example Configuration
//!
//! ```jsonc
//! {
//!   "root": true,
//!   "env": { "es6": true, "node": true },
//!   "extends": ["lintrc:recommended", "./shared/base.json"],
//!   "parserOptions": { "ecmaVersion": 2018, "sourceType": "script" },
//!   "plugins": ["prettier"],
//!   "rules": {
//!     "no-console": "off",
//!     "quotes": ["error", "single"]
//!   }
//! }
//! ```

pub mod fragment;
pub mod loader;
pub(crate) mod merge;
pub mod resolved;
pub mod rule_entry;

pub use fragment::ConfigFragment;
pub use loader::{CONFIG_FILE_NAMES, ConfigFile, ConfigFormat, ConfigLoader, is_path_reference};
pub use resolved::ResolvedConfig;
pub use rule_entry::{RuleEntry, Severity};
