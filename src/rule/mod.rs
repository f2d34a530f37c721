//! Configuration rule types
//!
//! A rule describes the constraints a plugin places on one configuration key.
//! Rules are built once and handed to whatever validates supplied values:
//! - `FloatRule` - Constraints for a floating-point key
//! - `FloatRuleOpt` - A single optional constraint applied while building
//! - `FloatRuleBuilder` - Fluent form of `FloatRule::new`

mod float;

pub use float::{
    FloatRule, FloatRuleBuilder, FloatRuleOpt, set_default_float, set_max_float, set_min_float,
};
