/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// External user identity. Supplied by the identity provider; opaque
/// to this service beyond equality.
pub type UserId = uuid::Uuid;
