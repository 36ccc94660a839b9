//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

use core::fmt::{Debug, Display};

/// Contract for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// construct a new one with the new values.
///
/// ## Two renderings
///
/// Every value object renders itself two ways:
///
/// - **Display** (`to_string()`): a short, human-readable form for end users.
/// - **Debug** (`inspect()`): an unambiguous diagnostic form that names the type
///   and pairs each field name with its literal value (text fields quoted).
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Money {
///     amount: f64,
///     currency: String,
/// }
///
/// impl core::fmt::Display for Money {
///     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
///         write!(f, "{} {}", self.amount, self.currency)
///     }
/// }
///
/// impl ValueObject for Money {}
///
/// let m = Money { amount: 1.5, currency: "USD".to_string() };
/// assert_eq!(m.to_string(), "1.5 USD");
/// assert_eq!(m.inspect(), r#"Money { amount: 1.5, currency: "USD" }"#);
/// ```
pub trait ValueObject: Clone + PartialEq + Debug + Display {
    /// Diagnostic rendering, suitable for logs.
    fn inspect(&self) -> String {
        format!("{self:?}")
    }
}
