/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Event dates and deadlines are calendar dates without a time component.
pub type Date = chrono::NaiveDate;
