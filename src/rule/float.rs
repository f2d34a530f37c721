//! Floating-point configuration rules
//!
//! # Overview
//!
//! A `FloatRule` names a configuration key, says whether a value for it must be
//! supplied, and optionally carries a default, a minimum and a maximum.
//!
//! ```rust
//! use plugrule::{FloatRule, set_default_float, set_max_float, set_min_float};
//!
//! let rule = FloatRule::new(
//!     "threshold",
//!     true,
//!     [set_default_float(1.5), set_min_float(0.0), set_max_float(10.0)],
//! )?;
//!
//! assert_eq!(rule.key(), "threshold");
//! assert_eq!(rule.default(), Some(1.5));
//! assert!(rule.has_min() && rule.has_max());
//! # Ok::<(), plugrule::Error>(())
//! ```
//!
//! # Unchecked Constraints
//!
//! Only the key is validated. A minimum above the maximum, or a default outside
//! the range, is stored as given; checking supplied values against the rule is
//! up to the validator that consumes it.

use crate::error::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Non-finite Constraint Encoding
// =============================================================================

/// Encode optional constraints so NaN and infinities survive a round trip
///
/// Finite values are written as numbers; non-finite ones as the tokens
/// `"NaN"`, `"inf"` and `"-inf"`, since JSON has no literal for them.
mod constraint_value {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const NAN: &str = "NaN";
    pub const INFINITY: &str = "inf";
    pub const NEG_INFINITY: &str = "-inf";

    pub fn serialize<S: Serializer>(
        value: &Option<f64>,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        match *value {
            Some(v) if v.is_nan() => serializer.serialize_str(NAN),
            Some(v) if v == f64::INFINITY => serializer.serialize_str(INFINITY),
            Some(v) if v == f64::NEG_INFINITY => serializer.serialize_str(NEG_INFINITY),
            Some(v) => serializer.serialize_f64(v),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Option<f64>, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Number(f64),
            Token(String),
        }

        match Option::<Wire>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Wire::Number(v)) => Ok(Some(v)),
            Some(Wire::Token(token)) => match token.as_str() {
                NAN => Ok(Some(f64::NAN)),
                INFINITY => Ok(Some(f64::INFINITY)),
                NEG_INFINITY => Ok(Some(f64::NEG_INFINITY)),
                other => Err(D::Error::custom(format!(
                    "invalid float constraint '{other}', expected a number, \"NaN\", \"inf\" or \"-inf\""
                ))),
            },
        }
    }
}

// =============================================================================
// Configuration Steps
// =============================================================================

/// One optional constraint applied while building a `FloatRule`
///
/// Created with [`set_default_float`], [`set_min_float`] or [`set_max_float`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FloatRuleOpt {
    /// Value used when none is supplied
    Default(f64),
    /// Lowest accepted value
    Min(f64),
    /// Highest accepted value
    Max(f64),
}

impl FloatRuleOpt {
    /// The value this step writes into the rule
    #[must_use]
    pub fn value(&self) -> f64 {
        match *self {
            FloatRuleOpt::Default(v) | FloatRuleOpt::Min(v) | FloatRuleOpt::Max(v) => v,
        }
    }

    fn apply(self, rule: &mut FloatRule) {
        match self {
            FloatRuleOpt::Default(v) => rule.default = Some(v),
            FloatRuleOpt::Min(v) => rule.minimum = Some(v),
            FloatRuleOpt::Max(v) => rule.maximum = Some(v),
        }
    }
}

impl fmt::Display for FloatRuleOpt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloatRuleOpt::Default(v) => write!(f, "default={v}"),
            FloatRuleOpt::Min(v) => write!(f, "min={v}"),
            FloatRuleOpt::Max(v) => write!(f, "max={v}"),
        }
    }
}

/// Set the default value of a `FloatRule`
///
/// # Example
/// ```rust
/// use plugrule::{FloatRule, set_default_float};
///
/// let rule = FloatRule::new("ratio", false, [set_default_float(0.5)])?;
/// assert_eq!(rule.default(), Some(0.5));
/// # Ok::<(), plugrule::Error>(())
/// ```
#[must_use]
pub fn set_default_float(value: f64) -> FloatRuleOpt {
    FloatRuleOpt::Default(value)
}

/// Set the minimum value of a `FloatRule`
#[must_use]
pub fn set_min_float(min: f64) -> FloatRuleOpt {
    FloatRuleOpt::Min(min)
}

/// Set the maximum value of a `FloatRule`
#[must_use]
pub fn set_max_float(max: f64) -> FloatRuleOpt {
    FloatRuleOpt::Max(max)
}

// =============================================================================
// Float Rule
// =============================================================================

/// Constraints for a floating-point configuration key
///
/// Immutable once built. Unset constraints are `None`, so a default of `0.0`
/// is distinguishable from no default at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFloatRule")]
pub struct FloatRule {
    key: String,
    required: bool,
    #[serde(skip_serializing_if = "Option::is_none", with = "constraint_value")]
    default: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", with = "constraint_value")]
    minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", with = "constraint_value")]
    maximum: Option<f64>,
}

impl FloatRule {
    /// Create a rule for `key`, applying `options` in order
    ///
    /// Applying the same kind of step twice keeps the last value.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyKey` if `key` is empty.
    pub fn new<I>(key: impl Into<String>, required: bool, options: I) -> Result<Self>
    where
        I: IntoIterator<Item = FloatRuleOpt>,
    {
        let key = key.into();
        if key.is_empty() {
            return Err(Error::EmptyKey);
        }

        let mut rule = Self {
            key,
            required,
            default: None,
            minimum: None,
            maximum: None,
        };
        for opt in options {
            opt.apply(&mut rule);
        }

        debug!(
            "Built float rule '{}' (required: {}, default: {:?}, min: {:?}, max: {:?})",
            rule.key, rule.required, rule.default, rule.minimum, rule.maximum
        );
        Ok(rule)
    }

    /// Start a fluent builder for a rule on `key`
    ///
    /// # Example
    /// ```rust
    /// use plugrule::FloatRule;
    ///
    /// let rule = FloatRule::builder("threshold", true)
    ///     .default(1.5)
    ///     .min(0.0)
    ///     .max(10.0)
    ///     .build()?;
    ///
    /// assert_eq!(rule.maximum(), Some(10.0));
    /// # Ok::<(), plugrule::Error>(())
    /// ```
    #[must_use]
    pub fn builder(key: impl Into<String>, required: bool) -> FloatRuleBuilder {
        FloatRuleBuilder::new(key, required)
    }

    /// Configuration key this rule applies to
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether a missing value for this key is an error
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Default value, if one was set
    pub fn default(&self) -> Option<f64> {
        self.default
    }

    /// Whether a default value was set
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Lowest accepted value, if one was set
    pub fn minimum(&self) -> Option<f64> {
        self.minimum
    }

    /// Whether a minimum was set
    pub fn has_min(&self) -> bool {
        self.minimum.is_some()
    }

    /// Highest accepted value, if one was set
    pub fn maximum(&self) -> Option<f64> {
        self.maximum
    }

    /// Whether a maximum was set
    pub fn has_max(&self) -> bool {
        self.maximum.is_some()
    }
}

/// Wire shape of a `FloatRule`, decoded before the key check runs
///
/// `key` and `required` must both be present; constraints may be omitted.
#[derive(Deserialize)]
struct RawFloatRule {
    key: String,
    required: bool,
    #[serde(default, with = "constraint_value")]
    default: Option<f64>,
    #[serde(default, with = "constraint_value")]
    minimum: Option<f64>,
    #[serde(default, with = "constraint_value")]
    maximum: Option<f64>,
}

impl TryFrom<RawFloatRule> for FloatRule {
    type Error = Error;

    fn try_from(raw: RawFloatRule) -> Result<Self> {
        let options = [
            raw.default.map(FloatRuleOpt::Default),
            raw.minimum.map(FloatRuleOpt::Min),
            raw.maximum.map(FloatRuleOpt::Max),
        ];
        FloatRule::new(raw.key, raw.required, options.into_iter().flatten())
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for creating a `FloatRule` with a fluent API
///
/// Steps are recorded in call order and applied by [`FloatRule::new`] on
/// `build()`, so ordering and last-write-wins behave the same in both forms.
#[derive(Debug, Clone)]
pub struct FloatRuleBuilder {
    key: String,
    required: bool,
    options: Vec<FloatRuleOpt>,
}

impl FloatRuleBuilder {
    /// Create a new builder with the required key and flag
    #[must_use]
    pub fn new(key: impl Into<String>, required: bool) -> Self {
        Self {
            key: key.into(),
            required,
            options: Vec::new(),
        }
    }

    /// Set the default value
    #[must_use]
    pub fn default(self, value: f64) -> Self {
        self.option(set_default_float(value))
    }

    /// Set the minimum value
    #[must_use]
    pub fn min(self, val: f64) -> Self {
        self.option(set_min_float(val))
    }

    /// Set the maximum value
    #[must_use]
    pub fn max(self, val: f64) -> Self {
        self.option(set_max_float(val))
    }

    /// Append an already constructed step
    #[must_use]
    pub fn option(mut self, opt: FloatRuleOpt) -> Self {
        self.options.push(opt);
        self
    }

    /// Build the `FloatRule`
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyKey` if the key is empty.
    pub fn build(self) -> Result<FloatRule> {
        FloatRule::new(self.key, self.required, self.options)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_without_options() {
        let rule = FloatRule::new("rate", false, []).unwrap();

        assert_eq!(rule.key(), "rate");
        assert!(!rule.is_required());
        assert!(!rule.has_default());
        assert!(!rule.has_min());
        assert!(!rule.has_max());
        assert_eq!(rule.default(), None);
    }

    #[test]
    fn test_empty_key_rejected() {
        assert_eq!(FloatRule::new("", false, []), Err(Error::EmptyKey));
        assert_eq!(
            FloatRule::new("", true, [set_default_float(1.0), set_max_float(2.0)]),
            Err(Error::EmptyKey)
        );
    }

    #[test]
    fn test_each_option_sets_only_its_field() {
        let rule = FloatRule::new("a", true, [set_default_float(2.5)]).unwrap();
        assert_eq!(rule.default(), Some(2.5));
        assert!(!rule.has_min() && !rule.has_max());

        let rule = FloatRule::new("a", true, [set_min_float(-1.0)]).unwrap();
        assert_eq!(rule.minimum(), Some(-1.0));
        assert!(!rule.has_default() && !rule.has_max());

        let rule = FloatRule::new("a", true, [set_max_float(99.9)]).unwrap();
        assert_eq!(rule.maximum(), Some(99.9));
        assert!(!rule.has_default() && !rule.has_min());
    }

    #[test]
    fn test_zero_default_is_present() {
        let rule = FloatRule::new("offset", false, [set_default_float(0.0)]).unwrap();
        assert!(rule.has_default());
        assert_eq!(rule.default(), Some(0.0));
    }

    #[test]
    fn test_last_write_wins() {
        let rule = FloatRule::new(
            "a",
            false,
            [set_min_float(1.0), set_min_float(3.0), set_default_float(7.0), set_default_float(5.0)],
        )
        .unwrap();

        assert_eq!(rule.minimum(), Some(3.0));
        assert_eq!(rule.default(), Some(5.0));
    }

    #[test]
    fn test_option_display() {
        assert_eq!(set_default_float(1.5).to_string(), "default=1.5");
        assert_eq!(set_min_float(0.0).to_string(), "min=0");
        assert_eq!(set_max_float(10.0).to_string(), "max=10");
        assert_eq!(set_max_float(10.0).value(), 10.0);
    }

    #[test]
    fn test_builder_records_order() {
        let rule = FloatRule::builder("a", true)
            .max(4.0)
            .option(set_max_float(8.0))
            .build()
            .unwrap();

        assert_eq!(rule.maximum(), Some(8.0));
        assert!(FloatRule::builder("", true).min(1.0).build().is_err());
    }
}
