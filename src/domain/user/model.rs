use mongodb::bson::oid::ObjectId;

/// A persisted user record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Store-generated identifier
    pub id: ObjectId,
    pub name: String,
    pub age: i64,
}

/// Parse an externally supplied hex identifier.
pub fn parse_user_id(raw: &str) -> Result<ObjectId, crate::domain::DomainError> {
    ObjectId::parse_str(raw).map_err(|e| crate::domain::DomainError::InvalidId(e.to_string()))
}
