//! # fluent-guard
//!
//! Fluent guard clauses for argument validation.
//!
//! A guard wraps one named argument. Checks chain through `and()` / `or()`,
//! failures are deferred, and a terminal `otherwise_*` call turns the outcome
//! into a `Result` (or a panic, if you ask for one).
//!
//! ## Quick Example
//!
//! ```rust
//! use fluent_guard::{GuardError, Validate};
//!
//! fn connect(host: &str, port: u16) -> Result<(), GuardError> {
//!     Validate::that("host", host)
//!         .is_not_null_or_whitespace()
//!         .otherwise_throw_exception()?;
//!
//!     Validate::that("port", port)
//!         .is_between(1024, 49151)
//!         .or()
//!         .is_equal_to(80)
//!         .otherwise_throw_exception()?;
//!
//!     Ok(())
//! }
//!
//! assert!(connect("localhost", 8080).is_ok());
//! assert!(connect("localhost", 80).is_ok());
//!
//! let err = connect(" ", 8080).unwrap_err();
//! assert_eq!(err.to_string(), "argument `host` must not be empty or whitespace");
//! ```
//!
//! ## Capabilities
//!
//! Which checks exist depends on the argument's type; see [`strategy`].
//! Ordering checks on a `String` simply do not compile.
//!
//! ## Pooling
//!
//! Hot call sites can reuse validators through [`Guards`], which keeps one
//! [`ValidatorPool`] per argument type. See [`factory`] and [`pool`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod factory;
pub mod pool;
pub mod strategy;
pub mod testing;
pub mod validator;

// Re-exports
pub use config::{ConfigError, GuardConfig};
pub use error::{ErrorKind, GuardError};
pub use factory::{Guards, Validate};
pub use pool::{Lease, ValidatorPool};
pub use validator::{Linkage, Mode, Validator};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::GuardConfig;
    pub use crate::error::{ErrorKind, GuardError};
    pub use crate::factory::{Guards, Validate};
    pub use crate::strategy::{Introspect, Orderable, Reference, SignTestable, TextOperable, Truthy};
    pub use crate::validator::{Linkage, Mode, Validator};
}
