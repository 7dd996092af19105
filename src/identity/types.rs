use serde::Deserialize;

/// One row of a user's group membership list, as returned by the identity
/// service. Only `id` feeds the generated import block; the remaining fields
/// are kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGroupMembership {
    pub id: String,
    pub compartment_id: String,
    pub group_id: String,
    pub user_id: String,
    pub lifecycle_state: String,
}

/// Error body returned by the identity service on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[allow(dead_code)] // NOTE: Used in tests
    pub code: String,
    pub message: String,
}

/// Regional identity endpoint, e.g. `https://identity.eu-frankfurt-1.oraclecloud.com`.
pub fn identity_endpoint(region: &str) -> String {
    format!("https://identity.{}.oraclecloud.com", region)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_deserialization_camel_case() {
        let json = r#"{
            "id": "ocid1.groupmembership.oc1..aaaa",
            "compartmentId": "ocid1.tenancy.oc1..bbbb",
            "groupId": "ocid1.group.oc1..cccc",
            "userId": "ocid1.user.oc1..dddd",
            "lifecycleState": "ACTIVE"
        }"#;

        let membership: UserGroupMembership = serde_json::from_str(json).unwrap();
        assert_eq!(membership.id, "ocid1.groupmembership.oc1..aaaa");
        assert_eq!(membership.compartment_id, "ocid1.tenancy.oc1..bbbb");
        assert_eq!(membership.group_id, "ocid1.group.oc1..cccc");
        assert_eq!(membership.user_id, "ocid1.user.oc1..dddd");
        assert_eq!(membership.lifecycle_state, "ACTIVE");
    }

    #[test]
    fn test_membership_deserialization_ignores_unknown_fields() {
        let json = r#"{
            "id": "ocid1.groupmembership.oc1..aaaa",
            "compartmentId": "ocid1.tenancy.oc1..bbbb",
            "groupId": "ocid1.group.oc1..cccc",
            "userId": "ocid1.user.oc1..dddd",
            "lifecycleState": "ACTIVE",
            "timeCreated": "2020-01-01T00:00:00.000Z",
            "inactiveStatus": null
        }"#;

        let membership: UserGroupMembership = serde_json::from_str(json).unwrap();
        assert_eq!(membership.id, "ocid1.groupmembership.oc1..aaaa");
    }

    #[test]
    fn test_api_error_body_deserialization() {
        let json = r#"{
            "code": "NotAuthorizedOrNotFound",
            "message": "Authorization failed or requested resource not found."
        }"#;

        let body: ApiErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.code, "NotAuthorizedOrNotFound");
        assert_eq!(
            body.message,
            "Authorization failed or requested resource not found."
        );
    }

    #[test]
    fn test_identity_endpoint_format() {
        assert_eq!(
            identity_endpoint("us-ashburn-1"),
            "https://identity.us-ashburn-1.oraclecloud.com"
        );
        assert_eq!(
            identity_endpoint("eu-frankfurt-1"),
            "https://identity.eu-frankfurt-1.oraclecloud.com"
        );
    }
}
