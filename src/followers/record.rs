use serde::{Deserialize, Serialize};

use crate::github::FetchError;

/// One account following the configured user, as returned by
/// `GET /users/{account}/followers`.
///
/// GitHub sends many more fields per user; only these three are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowerRecord {
    pub id: u64,
    pub login: String,
    pub avatar_url: String,
}

/// Decode a followers response body.
///
/// The body must be a JSON array of user objects. Order is preserved
/// exactly as received.
pub fn decode_followers(body: &[u8]) -> Result<Vec<FollowerRecord>, FetchError> {
    serde_json::from_slice(body).map_err(|source| FetchError::Decode { source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_single_record() {
        let body = br#"[{"id":1,"login":"Ada","avatar_url":"http://x/a.png"}]"#;
        let records = decode_followers(body).unwrap();

        assert_eq!(
            records,
            vec![FollowerRecord {
                id: 1,
                login: "Ada".to_string(),
                avatar_url: "http://x/a.png".to_string(),
            }]
        );
    }

    #[test]
    fn ignores_unknown_fields() {
        let body = br#"[{
            "login": "octocat",
            "id": 583231,
            "node_id": "MDQ6VXNlcjU4MzIzMQ==",
            "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
            "gravatar_id": "",
            "type": "User",
            "site_admin": false
        }]"#;
        let records = decode_followers(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].login, "octocat");
        assert_eq!(records[0].id, 583231);
    }

    #[test]
    fn keeps_server_order() {
        let body = br#"[
            {"id":9,"login":"zed","avatar_url":"z"},
            {"id":2,"login":"amy","avatar_url":"a"},
            {"id":5,"login":"max","avatar_url":"m"}
        ]"#;
        let logins: Vec<String> = decode_followers(body)
            .unwrap()
            .into_iter()
            .map(|r| r.login)
            .collect();
        assert_eq!(logins, vec!["zed", "amy", "max"]);
    }

    #[test]
    fn empty_array_is_empty_list() {
        assert!(decode_followers(b"[]").unwrap().is_empty());
    }

    #[test]
    fn truncated_array_is_decode_error() {
        let err = decode_followers(br#"[{"id":1,"login":"Ada""#).unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
    }

    #[test]
    fn wrong_shape_is_decode_error() {
        let err = decode_followers(br#"{"message":"Not Found"}"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));

        let err = decode_followers(br#"[{"id":"one","login":"Ada","avatar_url":"x"}]"#)
            .unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
    }
}
