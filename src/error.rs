//! Repository error types
//!
//! This module provides structured error types for repository operations,
//! allowing fine-grained error handling and meaningful error messages.
//!
//! # Example
//!
//! ```rust
//! use entity_repository::error::{RepositoryError, RepositoryErrorKind};
//!
//! let error = RepositoryError::connection_failed("connection refused");
//! assert!(matches!(error.kind, RepositoryErrorKind::ConnectionFailed));
//! assert!(error.is_retriable());
//! ```

use std::fmt;

/// Result type for repository operations
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Operation being performed when the repository error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryOperation {
    /// Registering an entity with the store for a later save
    Attach,
    /// Finding a single entity by its key
    FindByKey,
    /// Executing a specification query
    Query,
    /// Executing a paged specification query
    PagedQuery,
    /// Counting entities matching a plan
    Count,
    /// Flushing attached entities to the backend
    SaveChanges,
    /// Establishing a backend connection
    Connect,
}

impl fmt::Display for RepositoryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attach => write!(f, "attach"),
            Self::FindByKey => write!(f, "find_by_key"),
            Self::Query => write!(f, "query"),
            Self::PagedQuery => write!(f, "paged_query"),
            Self::Count => write!(f, "count"),
            Self::SaveChanges => write!(f, "save_changes"),
            Self::Connect => write!(f, "connect"),
        }
    }
}

/// Category of repository error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryErrorKind {
    /// Entity was not found where the backend required one
    NotFound,
    /// Database constraint violation (unique, foreign key, check)
    ConstraintViolation,
    /// Failed to connect to the backend
    ConnectionFailed,
    /// Operation timed out
    Timeout,
    /// Query composition or execution failed
    QueryFailed,
    /// Mapping a fetched row to the output type failed
    MappingFailed,
    /// An include path named a relation the entity does not declare
    UnknownRelation,
    /// Configuration could not be loaded or validated
    Configuration,
    /// Other unclassified error
    Other,
}

impl fmt::Display for RepositoryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::ConstraintViolation => write!(f, "constraint_violation"),
            Self::ConnectionFailed => write!(f, "connection_failed"),
            Self::Timeout => write!(f, "timeout"),
            Self::QueryFailed => write!(f, "query_failed"),
            Self::MappingFailed => write!(f, "mapping_failed"),
            Self::UnknownRelation => write!(f, "unknown_relation"),
            Self::Configuration => write!(f, "configuration"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Structured repository error with operation context
///
/// Provides detailed information about what operation failed, why it failed,
/// and which entity was involved. "Not found" on a key lookup is represented
/// as `Ok(None)` by the repository, never as this error; the [`NotFound`]
/// kind only classifies backend errors that insist on one.
///
/// [`NotFound`]: RepositoryErrorKind::NotFound
///
/// # Example
///
/// ```rust
/// use entity_repository::error::{RepositoryError, RepositoryOperation, RepositoryErrorKind};
///
/// let error = RepositoryError::query_failed(RepositoryOperation::PagedQuery, "syntax error")
///     .with_entity("Post", "42");
/// assert_eq!(error.kind, RepositoryErrorKind::QueryFailed);
/// assert!(format!("{error}").contains("[Post: 42]"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryError {
    /// The operation being performed when the error occurred
    pub operation: RepositoryOperation,
    /// The category of error
    pub kind: RepositoryErrorKind,
    /// Human-readable error message
    pub message: String,
    /// The type of entity involved (e.g., "Post", "Order")
    pub entity_type: Option<String>,
    /// The key of the entity involved
    pub entity_key: Option<String>,
}

impl RepositoryError {
    /// Create a new repository error
    pub fn new(
        operation: RepositoryOperation,
        kind: RepositoryErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
            entity_type: None,
            entity_key: None,
        }
    }

    /// Create a connection failed error
    pub fn connection_failed(message: impl Into<String>) -> Self {
        Self::new(
            RepositoryOperation::Connect,
            RepositoryErrorKind::ConnectionFailed,
            message,
        )
    }

    /// Create a timeout error
    pub fn timeout(operation: RepositoryOperation, message: impl Into<String>) -> Self {
        Self::new(operation, RepositoryErrorKind::Timeout, message)
    }

    /// Create a query failed error
    pub fn query_failed(operation: RepositoryOperation, message: impl Into<String>) -> Self {
        Self::new(operation, RepositoryErrorKind::QueryFailed, message)
    }

    /// Create a mapping failed error
    pub fn mapping_failed(operation: RepositoryOperation, message: impl Into<String>) -> Self {
        Self::new(operation, RepositoryErrorKind::MappingFailed, message)
    }

    /// Create an unknown relation error for an unresolvable include path
    pub fn unknown_relation(path: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(
            RepositoryOperation::PagedQuery,
            RepositoryErrorKind::UnknownRelation,
            format!("no declared relation matches include path '{path}'"),
        )
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(
            RepositoryOperation::Connect,
            RepositoryErrorKind::Configuration,
            message,
        )
    }

    /// Add entity context to an existing error
    #[must_use]
    pub fn with_entity(
        mut self,
        entity_type: impl Into<String>,
        entity_key: impl Into<String>,
    ) -> Self {
        self.entity_type = Some(entity_type.into());
        self.entity_key = Some(entity_key.into());
        self
    }

    /// Set the operation that caused the error
    #[must_use]
    pub fn with_operation(mut self, operation: RepositoryOperation) -> Self {
        self.operation = operation;
        self
    }

    /// Check if this error is retriable (transient errors that may succeed on retry)
    pub fn is_retriable(&self) -> bool {
        matches!(
            self.kind,
            RepositoryErrorKind::ConnectionFailed | RepositoryErrorKind::Timeout
        )
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Repository {} error during {}: {}",
            self.kind, self.operation, self.message
        )?;
        if let (Some(ref entity_type), Some(ref entity_key)) = (&self.entity_type, &self.entity_key)
        {
            write!(f, " [{}: {}]", entity_type, entity_key)?;
        }
        Ok(())
    }
}

impl std::error::Error for RepositoryError {}

#[cfg(feature = "postgres")]
impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        let kind = match &err {
            sqlx::Error::RowNotFound => RepositoryErrorKind::NotFound,
            sqlx::Error::PoolTimedOut => RepositoryErrorKind::Timeout,
            sqlx::Error::Io(_) | sqlx::Error::Tls(_) | sqlx::Error::PoolClosed => {
                RepositoryErrorKind::ConnectionFailed
            }
            sqlx::Error::Configuration(_) => RepositoryErrorKind::Configuration,
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                RepositoryErrorKind::MappingFailed
            }
            sqlx::Error::Database(db) => match db.kind() {
                sqlx::error::ErrorKind::UniqueViolation
                | sqlx::error::ErrorKind::ForeignKeyViolation
                | sqlx::error::ErrorKind::NotNullViolation
                | sqlx::error::ErrorKind::CheckViolation => {
                    RepositoryErrorKind::ConstraintViolation
                }
                _ => RepositoryErrorKind::QueryFailed,
            },
            _ => RepositoryErrorKind::QueryFailed,
        };
        Self::new(RepositoryOperation::Query, kind, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_operation_display() {
        assert_eq!(format!("{}", RepositoryOperation::Attach), "attach");
        assert_eq!(format!("{}", RepositoryOperation::FindByKey), "find_by_key");
        assert_eq!(format!("{}", RepositoryOperation::Query), "query");
        assert_eq!(format!("{}", RepositoryOperation::PagedQuery), "paged_query");
        assert_eq!(format!("{}", RepositoryOperation::Count), "count");
        assert_eq!(
            format!("{}", RepositoryOperation::SaveChanges),
            "save_changes"
        );
        assert_eq!(format!("{}", RepositoryOperation::Connect), "connect");
    }

    #[test]
    fn test_repository_error_kind_display() {
        assert_eq!(format!("{}", RepositoryErrorKind::NotFound), "not_found");
        assert_eq!(
            format!("{}", RepositoryErrorKind::ConstraintViolation),
            "constraint_violation"
        );
        assert_eq!(
            format!("{}", RepositoryErrorKind::ConnectionFailed),
            "connection_failed"
        );
        assert_eq!(format!("{}", RepositoryErrorKind::Timeout), "timeout");
        assert_eq!(
            format!("{}", RepositoryErrorKind::QueryFailed),
            "query_failed"
        );
        assert_eq!(
            format!("{}", RepositoryErrorKind::MappingFailed),
            "mapping_failed"
        );
        assert_eq!(
            format!("{}", RepositoryErrorKind::UnknownRelation),
            "unknown_relation"
        );
        assert_eq!(
            format!("{}", RepositoryErrorKind::Configuration),
            "configuration"
        );
        assert_eq!(format!("{}", RepositoryErrorKind::Other), "other");
    }

    #[test]
    fn test_repository_error_new() {
        let error = RepositoryError::new(
            RepositoryOperation::PagedQuery,
            RepositoryErrorKind::QueryFailed,
            "query failed",
        );
        assert_eq!(error.operation, RepositoryOperation::PagedQuery);
        assert_eq!(error.kind, RepositoryErrorKind::QueryFailed);
        assert_eq!(error.message, "query failed");
        assert!(error.entity_type.is_none());
        assert!(error.entity_key.is_none());
    }

    #[test]
    fn test_connection_failed_convenience() {
        let error = RepositoryError::connection_failed("connection refused");
        assert_eq!(error.operation, RepositoryOperation::Connect);
        assert_eq!(error.kind, RepositoryErrorKind::ConnectionFailed);
    }

    #[test]
    fn test_timeout_convenience() {
        let error = RepositoryError::timeout(RepositoryOperation::Count, "query timed out");
        assert_eq!(error.operation, RepositoryOperation::Count);
        assert_eq!(error.kind, RepositoryErrorKind::Timeout);
    }

    #[test]
    fn test_unknown_relation_convenience() {
        let error = RepositoryError::unknown_relation("author.profile");
        assert_eq!(error.kind, RepositoryErrorKind::UnknownRelation);
        assert!(error.message.contains("author.profile"));
    }

    #[test]
    fn test_configuration_convenience() {
        let error = RepositoryError::configuration("missing url");
        assert_eq!(error.kind, RepositoryErrorKind::Configuration);
        assert_eq!(error.operation, RepositoryOperation::Connect);
    }

    #[test]
    fn test_with_entity() {
        let error = RepositoryError::query_failed(RepositoryOperation::Query, "boom")
            .with_entity("Order", "ord_456");
        assert_eq!(error.entity_type, Some("Order".to_string()));
        assert_eq!(error.entity_key, Some("ord_456".to_string()));
    }

    #[test]
    fn test_with_operation() {
        let error = RepositoryError::connection_failed("connection refused")
            .with_operation(RepositoryOperation::SaveChanges);
        assert_eq!(error.operation, RepositoryOperation::SaveChanges);
    }

    #[test]
    fn test_is_retriable_transient_errors() {
        assert!(RepositoryError::connection_failed("refused").is_retriable());
        assert!(RepositoryError::timeout(RepositoryOperation::Query, "timeout").is_retriable());
    }

    #[test]
    fn test_is_retriable_permanent_errors() {
        assert!(!RepositoryError::unknown_relation("author").is_retriable());
        assert!(!RepositoryError::query_failed(RepositoryOperation::Query, "syntax")
            .is_retriable());
        assert!(
            !RepositoryError::mapping_failed(RepositoryOperation::FindByKey, "decode")
                .is_retriable()
        );
    }

    #[test]
    fn test_display_without_entity() {
        let error = RepositoryError::query_failed(RepositoryOperation::Count, "query failed");
        let display = format!("{}", error);
        assert!(display.contains("query_failed"));
        assert!(display.contains("count"));
        assert!(display.contains("query failed"));
        assert!(!display.contains("["));
    }

    #[test]
    fn test_display_with_entity() {
        let error = RepositoryError::query_failed(RepositoryOperation::FindByKey, "boom")
            .with_entity("Post", "42");
        let display = format!("{}", error);
        assert!(display.contains("find_by_key"));
        assert!(display.contains("[Post: 42]"));
    }

    #[test]
    fn test_error_is_error_trait() {
        let error: Box<dyn std::error::Error> =
            Box::new(RepositoryError::connection_failed("refused"));
        assert!(error.to_string().contains("connection_failed"));
    }
}
