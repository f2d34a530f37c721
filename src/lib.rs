//! # plugrule - Plugin Configuration Rules
//!
//! Declarative validation rules for plugin configuration fields. A plugin
//! declares which keys it reads, whether each is required, and what defaults
//! and ranges apply. The host's configuration validator consumes the rules.
//!
//! ## Features
//!
//! - **Float Rules**: Key, required flag, and optional default/minimum/maximum
//! - **Two Construction Styles**: Option steps or a fluent builder
//! - **Serde Support**: Rules serialize to a compact descriptor for the host
//!
//! ## Quick Start
//!
//! ```rust
//! use plugrule::{FloatRule, set_default_float, set_max_float, set_min_float};
//!
//! let threshold = FloatRule::new(
//!     "threshold",
//!     true,
//!     [set_default_float(1.5), set_min_float(0.0), set_max_float(10.0)],
//! )?;
//!
//! // Same rule, builder style
//! let same = FloatRule::builder("threshold", true)
//!     .default(1.5)
//!     .min(0.0)
//!     .max(10.0)
//!     .build()?;
//!
//! assert_eq!(threshold, same);
//! # Ok::<(), plugrule::Error>(())
//! ```
//!
//! ## Empty Keys
//!
//! A rule must name its key. Construction with an empty key fails with
//! [`Error::EmptyKey`]:
//!
//! ```rust
//! use plugrule::{Error, FloatRule};
//!
//! let result = FloatRule::new("", false, []);
//! assert_eq!(result, Err(Error::EmptyKey));
//! ```

mod error;
pub mod rule;

pub use error::{Error, Result};

pub use rule::{
    FloatRule, FloatRuleBuilder, FloatRuleOpt, set_default_float, set_max_float, set_min_float,
};
