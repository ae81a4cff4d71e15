use reqwest::Method;

use crate::{
    auth::TokenStore,
    models::{ApiResponse, User},
    ApiClient, ClientResult,
};

/// GET /api/v1/user/worker
pub async fn fetch_workers(api: &ApiClient, store: &dyn TokenStore) -> ClientResult<ApiResponse<Vec<User>>> {
    let request = api.authorized(Method::GET, "/api/v1/user/worker", store).await?;
    api.send(request).await
}
