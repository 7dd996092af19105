use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use super::IdentityError;
use super::types::{ApiErrorBody, UserGroupMembership, identity_endpoint};
use crate::config::OciConfig;

const IDENTITY_API_VERSION: &str = "20160918";

#[derive(Clone)]
pub struct IdentityClient {
    client: reqwest::Client,
    base_url: String,
}

impl IdentityClient {
    /// Builds a client for the region named in the config, authenticating
    /// every request with the session token from the config.
    pub fn new(config: &OciConfig) -> Result<Self, IdentityError> {
        Self::with_base_url(
            config.security_token.clone(),
            identity_endpoint(&config.region),
        )
    }

    /// NOTE: Primarily used for testing with mock servers.
    pub fn with_base_url(token: String, base_url: String) -> Result<Self, IdentityError> {
        let mut headers = HeaderMap::new();
        let auth_value = format!("Bearer {}", token);
        let header_value = HeaderValue::from_str(&auth_value).map_err(|_| IdentityError::Auth {
            message: "invalid session token format".to_string(),
        })?;
        headers.insert(AUTHORIZATION, header_value);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(IdentityError::Network)?;

        Ok(Self { client, base_url })
    }

    /// Lists the group memberships of `user_id`, scoped to the tenancy passed
    /// as `compartment_id`. Returns the first page in service order; the
    /// `opc-next-page` continuation is not followed.
    pub async fn list_user_group_memberships(
        &self,
        compartment_id: &str,
        user_id: &str,
    ) -> Result<Vec<UserGroupMembership>, IdentityError> {
        let url = format!(
            "{}/{}/userGroupMemberships?compartmentId={}&userId={}",
            self.base_url,
            IDENTITY_API_VERSION,
            urlencoding::encode(compartment_id),
            urlencoding::encode(user_id),
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| "unknown error".to_string());

            return Err(match status.as_u16() {
                401 => IdentityError::Auth { message },
                404 => IdentityError::UserNotFound {
                    user: user_id.to_string(),
                },
                code => IdentityError::Api {
                    status: code,
                    message,
                },
            });
        }

        let memberships = response
            .json::<Vec<UserGroupMembership>>()
            .await
            .map_err(|e| IdentityError::Api {
                status: status.as_u16(),
                message: format!("failed to parse memberships: {}", e),
            })?;

        Ok(memberships)
    }
}

impl std::fmt::Debug for IdentityClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityClient")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}
