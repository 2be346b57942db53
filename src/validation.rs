//! Request Validation
//!
//! Every request type declares its mandatory fields through [`Validate`].
//! Operations run validation before building a URL, so a request that fails
//! here never reaches the network.

use std::fmt;
use thiserror::Error;

/// Message attached to a required field that carries its zero value
pub const BLANK: &str = "cannot be blank";

/// Values that can be checked for "was this field set"
pub trait Required {
    /// True for the zero value of the type
    fn is_blank(&self) -> bool;
}

impl Required for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Required for str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! impl_required_for_int {
    ($($t:ty),*) => {
        $(
            impl Required for $t {
                fn is_blank(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_required_for_int!(i32, i64, u16, u32, u64, usize);

impl Required for f64 {
    fn is_blank(&self) -> bool {
        *self == 0.0
    }
}

impl<T> Required for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Required> Required for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().map_or(true, Required::is_blank)
    }
}

impl<T: Required + ?Sized> Required for &T {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

/// A single failed rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Field path, e.g. `PropertyID` or `Hostnames.Items`
    pub field: String,
    pub message: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every rule a request broke, in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", render(.violations))]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

fn render(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Field paths that failed, in declaration order
    pub fn fields(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.field.as_str()).collect()
    }

    /// True when `field` is among the failing paths
    pub fn contains(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

/// Collects rule failures for one request
#[derive(Debug, Default)]
pub struct Validator {
    violations: Vec<FieldViolation>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail `field` when `value` is its zero value
    pub fn required<T: Required + ?Sized>(self, field: &str, value: &T) -> Self {
        let blank = value.is_blank();
        self.check(field, !blank, BLANK)
    }

    /// Fail `field` with `message` unless `ok` holds
    pub fn check(mut self, field: &str, ok: bool, message: &str) -> Self {
        if !ok {
            self.violations.push(FieldViolation {
                field: field.to_string(),
                message: message.to_string(),
            });
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                violations: self.violations,
            })
        }
    }
}

/// Implemented by every request type an operation accepts
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Validate `request` on behalf of `operation`
pub(crate) fn ensure_valid<R: Validate + ?Sized>(
    operation: &'static str,
    request: &R,
) -> crate::error::Result<()> {
    request
        .validate()
        .map_err(|source| crate::error::Error::Validation { operation, source })
}
