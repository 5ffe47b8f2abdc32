/// All entity ids are opaque UUID-v4 strings assigned at creation.
pub type DbId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh entity id.
pub fn new_id() -> DbId {
    uuid::Uuid::new_v4().to_string()
}
