//! Filter conditions for specification queries
//!
//! Filter conditions describe a WHERE clause without committing to a backend:
//! the in-memory store evaluates them directly against entity field values,
//! the Postgres store renders them into bound SQL.
//!
//! # Example
//!
//! ```rust
//! use entity_repository::filter::FilterCondition;
//!
//! let filters = vec![
//!     FilterCondition::eq("status", "active"),
//!     FilterCondition::gte("age", 18),
//! ];
//! ```

use std::cmp::Ordering;
use std::fmt;

/// Comparison operators for filter conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    /// Equal to (=)
    Equal,
    /// Not equal to (!=)
    NotEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal to (>=)
    GreaterThanOrEqual,
    /// Less than (<)
    LessThan,
    /// Less than or equal to (<=)
    LessThanOrEqual,
    /// Pattern matching (LIKE)
    Like,
    /// Value is in a list (IN)
    In,
    /// Value is null (IS NULL)
    IsNull,
    /// Value is not null (IS NOT NULL)
    IsNotNull,
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equal => write!(f, "="),
            Self::NotEqual => write!(f, "!="),
            Self::GreaterThan => write!(f, ">"),
            Self::GreaterThanOrEqual => write!(f, ">="),
            Self::LessThan => write!(f, "<"),
            Self::LessThanOrEqual => write!(f, "<="),
            Self::Like => write!(f, "LIKE"),
            Self::In => write!(f, "IN"),
            Self::IsNull => write!(f, "IS NULL"),
            Self::IsNotNull => write!(f, "IS NOT NULL"),
        }
    }
}

/// A value that can appear in filter conditions and entity fields
///
/// # Example
///
/// ```rust
/// use entity_repository::filter::FilterValue;
///
/// let string_val: FilterValue = "active".into();
/// let int_val: FilterValue = 42_i64.into();
/// let bool_val: FilterValue = true.into();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// String value
    String(String),
    /// 64-bit integer value
    Integer(i64),
    /// 64-bit floating point value
    Float(f64),
    /// Boolean value
    Boolean(bool),
    /// List of string values (for IN)
    StringList(Vec<String>),
    /// List of integer values (for IN)
    IntegerList(Vec<i64>),
    /// Null value
    Null,
}

impl FilterValue {
    /// Compare two scalar values of compatible types
    ///
    /// Integers and floats compare numerically across variants. Lists, nulls,
    /// and mismatched types do not order.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::String(a), Self::String(b)) => Some(a.cmp(b)),
            (Self::Integer(a), Self::Integer(b)) => Some(a.cmp(b)),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            (Self::Integer(a), Self::Float(b)) => (*a as f64).partial_cmp(b),
            (Self::Float(a), Self::Integer(b)) => a.partial_cmp(&(*b as f64)),
            (Self::Boolean(a), Self::Boolean(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Whether this value is [`FilterValue::Null`]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for FilterValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for FilterValue {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<f64> for FilterValue {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<bool> for FilterValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(list: Vec<String>) -> Self {
        Self::StringList(list)
    }
}

impl From<Vec<i64>> for FilterValue {
    fn from(list: Vec<i64>) -> Self {
        Self::IntegerList(list)
    }
}

/// A single filter condition for querying entities
///
/// # Example
///
/// ```rust
/// use entity_repository::filter::FilterCondition;
///
/// let status = FilterCondition::eq("status", "active");
/// let age = FilterCondition::gte("age", 18);
/// let name = FilterCondition::like("name", "%smith%");
/// let live = FilterCondition::is_null("deleted_at");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCondition {
    /// The field name to filter on
    pub field: String,
    /// The comparison operator
    pub operator: FilterOperator,
    /// The value to compare against
    pub value: FilterValue,
}

impl FilterCondition {
    /// Create a new filter condition
    pub fn new(field: impl Into<String>, operator: FilterOperator, value: FilterValue) -> Self {
        Self {
            field: field.into(),
            operator,
            value,
        }
    }

    /// Create an equality filter (field = value)
    pub fn eq(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(field, FilterOperator::Equal, value.into())
    }

    /// Create a not-equal filter (field != value)
    pub fn ne(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(field, FilterOperator::NotEqual, value.into())
    }

    /// Create a greater-than filter (field > value)
    pub fn gt(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(field, FilterOperator::GreaterThan, value.into())
    }

    /// Create a greater-than-or-equal filter (field >= value)
    pub fn gte(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(field, FilterOperator::GreaterThanOrEqual, value.into())
    }

    /// Create a less-than filter (field < value)
    pub fn lt(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(field, FilterOperator::LessThan, value.into())
    }

    /// Create a less-than-or-equal filter (field <= value)
    pub fn lte(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(field, FilterOperator::LessThanOrEqual, value.into())
    }

    /// Create a LIKE pattern filter (`%` wildcards at either end)
    pub fn like(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::new(
            field,
            FilterOperator::Like,
            FilterValue::String(pattern.into()),
        )
    }

    /// Create an IN list filter for strings
    pub fn in_strings(field: impl Into<String>, values: Vec<String>) -> Self {
        Self::new(field, FilterOperator::In, FilterValue::StringList(values))
    }

    /// Create an IN list filter for integers
    pub fn in_integers(field: impl Into<String>, values: Vec<i64>) -> Self {
        Self::new(field, FilterOperator::In, FilterValue::IntegerList(values))
    }

    /// Create an IS NULL filter
    pub fn is_null(field: impl Into<String>) -> Self {
        Self::new(field, FilterOperator::IsNull, FilterValue::Null)
    }

    /// Create an IS NOT NULL filter
    pub fn is_not_null(field: impl Into<String>) -> Self {
        Self::new(field, FilterOperator::IsNotNull, FilterValue::Null)
    }

    /// Evaluate this condition against a candidate field value
    ///
    /// A missing field evaluates as null. This is the evaluation path used by
    /// the in-memory store; SQL backends render the condition instead.
    pub fn matches(&self, candidate: Option<&FilterValue>) -> bool {
        let null = FilterValue::Null;
        let candidate = candidate.unwrap_or(&null);
        match self.operator {
            FilterOperator::Equal => candidate == &self.value,
            FilterOperator::NotEqual => candidate != &self.value,
            FilterOperator::GreaterThan => {
                matches!(candidate.compare(&self.value), Some(Ordering::Greater))
            }
            FilterOperator::GreaterThanOrEqual => matches!(
                candidate.compare(&self.value),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            FilterOperator::LessThan => {
                matches!(candidate.compare(&self.value), Some(Ordering::Less))
            }
            FilterOperator::LessThanOrEqual => matches!(
                candidate.compare(&self.value),
                Some(Ordering::Less | Ordering::Equal)
            ),
            FilterOperator::Like => match (candidate, &self.value) {
                (FilterValue::String(s), FilterValue::String(pattern)) => like_match(s, pattern),
                _ => false,
            },
            FilterOperator::In => match (&self.value, candidate) {
                (FilterValue::StringList(list), FilterValue::String(s)) => list.contains(s),
                (FilterValue::IntegerList(list), FilterValue::Integer(n)) => list.contains(n),
                _ => false,
            },
            FilterOperator::IsNull => candidate.is_null(),
            FilterOperator::IsNotNull => !candidate.is_null(),
        }
    }
}

/// Evaluate a SQL LIKE pattern with `%` wildcards at the pattern edges
fn like_match(value: &str, pattern: &str) -> bool {
    let starts = pattern.starts_with('%');
    let ends = pattern.ends_with('%');
    let core = pattern.trim_matches('%');
    match (starts, ends) {
        (true, true) => value.contains(core),
        (true, false) => value.ends_with(core),
        (false, true) => value.starts_with(core),
        (false, false) => value == core,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_operator_display() {
        assert_eq!(format!("{}", FilterOperator::Equal), "=");
        assert_eq!(format!("{}", FilterOperator::NotEqual), "!=");
        assert_eq!(format!("{}", FilterOperator::GreaterThan), ">");
        assert_eq!(format!("{}", FilterOperator::GreaterThanOrEqual), ">=");
        assert_eq!(format!("{}", FilterOperator::LessThan), "<");
        assert_eq!(format!("{}", FilterOperator::LessThanOrEqual), "<=");
        assert_eq!(format!("{}", FilterOperator::Like), "LIKE");
        assert_eq!(format!("{}", FilterOperator::In), "IN");
        assert_eq!(format!("{}", FilterOperator::IsNull), "IS NULL");
        assert_eq!(format!("{}", FilterOperator::IsNotNull), "IS NOT NULL");
    }

    #[test]
    fn test_filter_value_conversions() {
        assert_eq!(
            FilterValue::from("test"),
            FilterValue::String("test".to_string())
        );
        assert_eq!(FilterValue::from(42_i64), FilterValue::Integer(42));
        assert_eq!(FilterValue::from(42_i32), FilterValue::Integer(42));
        assert_eq!(FilterValue::from(2.5_f64), FilterValue::Float(2.5));
        assert_eq!(FilterValue::from(true), FilterValue::Boolean(true));
        assert_eq!(
            FilterValue::from(vec![1_i64, 2, 3]),
            FilterValue::IntegerList(vec![1, 2, 3])
        );
    }

    #[test]
    fn test_compare_same_variant() {
        assert_eq!(
            FilterValue::Integer(1).compare(&FilterValue::Integer(2)),
            Some(Ordering::Less)
        );
        assert_eq!(
            FilterValue::String("b".into()).compare(&FilterValue::String("a".into())),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn test_compare_numeric_cross_variant() {
        assert_eq!(
            FilterValue::Integer(2).compare(&FilterValue::Float(2.0)),
            Some(Ordering::Equal)
        );
        assert_eq!(
            FilterValue::Float(1.5).compare(&FilterValue::Integer(2)),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn test_compare_incompatible() {
        assert_eq!(
            FilterValue::String("1".into()).compare(&FilterValue::Integer(1)),
            None
        );
        assert_eq!(FilterValue::Null.compare(&FilterValue::Null), None);
    }

    #[test]
    fn test_condition_constructors() {
        let filter = FilterCondition::eq("status", "active");
        assert_eq!(filter.field, "status");
        assert_eq!(filter.operator, FilterOperator::Equal);
        assert_eq!(filter.value, FilterValue::String("active".to_string()));

        assert_eq!(
            FilterCondition::ne("status", "deleted").operator,
            FilterOperator::NotEqual
        );
        assert_eq!(
            FilterCondition::gt("price", 100_i64).operator,
            FilterOperator::GreaterThan
        );
        assert_eq!(
            FilterCondition::gte("age", 18_i64).operator,
            FilterOperator::GreaterThanOrEqual
        );
        assert_eq!(
            FilterCondition::lt("quantity", 10_i64).operator,
            FilterOperator::LessThan
        );
        assert_eq!(
            FilterCondition::lte("rating", 5_i64).operator,
            FilterOperator::LessThanOrEqual
        );
        assert_eq!(
            FilterCondition::is_null("deleted_at").value,
            FilterValue::Null
        );
    }

    #[test]
    fn test_matches_equality() {
        let filter = FilterCondition::eq("status", "active");
        assert!(filter.matches(Some(&FilterValue::String("active".into()))));
        assert!(!filter.matches(Some(&FilterValue::String("archived".into()))));
        assert!(!filter.matches(None));
    }

    #[test]
    fn test_matches_comparisons() {
        let filter = FilterCondition::gte("age", 18);
        assert!(filter.matches(Some(&FilterValue::Integer(18))));
        assert!(filter.matches(Some(&FilterValue::Integer(30))));
        assert!(!filter.matches(Some(&FilterValue::Integer(17))));
        assert!(!filter.matches(Some(&FilterValue::String("18".into()))));
    }

    #[test]
    fn test_matches_like() {
        let contains = FilterCondition::like("name", "%smith%");
        assert!(contains.matches(Some(&FilterValue::String("jane smithers".into()))));
        assert!(!contains.matches(Some(&FilterValue::String("jones".into()))));

        let suffix = FilterCondition::like("email", "%@example.com");
        assert!(suffix.matches(Some(&FilterValue::String("a@example.com".into()))));
        assert!(!suffix.matches(Some(&FilterValue::String("a@example.org".into()))));

        let prefix = FilterCondition::like("sku", "ord-%");
        assert!(prefix.matches(Some(&FilterValue::String("ord-991".into()))));
    }

    #[test]
    fn test_matches_in() {
        let filter =
            FilterCondition::in_strings("status", vec!["active".into(), "pending".into()]);
        assert!(filter.matches(Some(&FilterValue::String("pending".into()))));
        assert!(!filter.matches(Some(&FilterValue::String("deleted".into()))));

        let ids = FilterCondition::in_integers("category_id", vec![1, 2, 3]);
        assert!(ids.matches(Some(&FilterValue::Integer(2))));
        assert!(!ids.matches(Some(&FilterValue::Integer(9))));
    }

    #[test]
    fn test_matches_null_checks() {
        let is_null = FilterCondition::is_null("deleted_at");
        assert!(is_null.matches(Some(&FilterValue::Null)));
        assert!(is_null.matches(None));
        assert!(!is_null.matches(Some(&FilterValue::Integer(1))));

        let not_null = FilterCondition::is_not_null("deleted_at");
        assert!(not_null.matches(Some(&FilterValue::Integer(1))));
        assert!(!not_null.matches(None));
    }

    #[test]
    fn test_matches_not_equal_treats_missing_as_null() {
        let filter = FilterCondition::ne("status", "active");
        assert!(filter.matches(None));
        assert!(filter.matches(Some(&FilterValue::String("archived".into()))));
        assert!(!filter.matches(Some(&FilterValue::String("active".into()))));
    }
}
