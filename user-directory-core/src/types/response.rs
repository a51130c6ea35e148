//! Wire format of the directory endpoint

use serde::{Deserialize, Serialize};

use super::User;

/// Top-level response envelope: `{ "data": { "users": [...] } }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersEnvelope {
    pub data: UsersPayload,
}

/// Inner payload carrying the record collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersPayload {
    pub users: Vec<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_expected_shape() {
        let body = r#"{
            "data": {
                "users": [{
                    "id": "1",
                    "username": "jdoe",
                    "firstname": "John",
                    "lastname": "Doe",
                    "email": "jdoe@example.com",
                    "avatar": "https://robohash.org/jdoe.png",
                    "role": "Engineer",
                    "join_date": "01/01/2023",
                    "description": "A skilled engineer."
                }]
            }
        }"#;

        let envelope: UsersEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.users.len(), 1);
        assert_eq!(envelope.data.users[0].full_name(), "John Doe");
    }

    #[test]
    fn missing_users_key_is_an_error() {
        let body = r#"{ "data": {} }"#;
        assert!(serde_json::from_str::<UsersEnvelope>(body).is_err());
    }

    #[test]
    fn empty_collection_is_valid() {
        let body = r#"{ "data": { "users": [] } }"#;
        let envelope: UsersEnvelope = serde_json::from_str(body).unwrap();
        assert!(envelope.data.users.is_empty());
    }
}
