use reqwest::Method;

use crate::{
    auth::TokenStore,
    models::{ApiResponse, LoginReq, RegisterReq},
    ApiClient, ClientResult,
};

/// POST /api/v1/auth/login
///
/// Stores the issued token when the body reports success; the parsed body is
/// returned either way.
pub async fn login(
    api: &ApiClient,
    store: &dyn TokenStore,
    email: &str,
    password: &str,
) -> ClientResult<ApiResponse<String>> {
    let body = LoginReq {
        email: email.to_string(),
        password: password.to_string(),
    };

    let request = api.request(Method::POST, "/api/v1/auth/login").json(&body);
    let response = api.send::<String>(request).await?;

    persist_token(store, &response).await?;
    tracing::debug!(email, success = %response.success, "Login finished");

    Ok(response)
}

/// POST /api/v1/auth/register
pub async fn register(
    api: &ApiClient,
    store: &dyn TokenStore,
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> ClientResult<ApiResponse<String>> {
    let body = RegisterReq {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };

    let request = api.request(Method::POST, "/api/v1/auth/register").json(&body);
    let response = api.send::<String>(request).await?;

    persist_token(store, &response).await?;
    tracing::debug!(email, success = %response.success, "Registration finished");

    Ok(response)
}

async fn persist_token(store: &dyn TokenStore, response: &ApiResponse<String>) -> ClientResult<()> {
    match response.data.as_deref() {
        Some(token) if response.is_success() && !token.is_empty() => store.set(token).await,
        _ => Ok(()),
    }
}
