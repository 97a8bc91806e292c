/// Database primary keys for cars, bookings, and commitments (BIGSERIAL).
pub type DbId = i64;

/// User identifiers are the identity provider's subject claim, not a
/// database-generated id. The provider owns this value.
pub type UserId = String;

/// Calendar dates (pickup/return days carry no time component).
pub type Day = chrono::NaiveDate;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
