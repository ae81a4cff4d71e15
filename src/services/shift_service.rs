use reqwest::Method;
use serde_json::Value;

use crate::{
    auth::TokenStore,
    config::ListPaging,
    models::{
        ApiResponse, CreateShiftReq, CreateShiftRequestReq, GetShiftAssignmentListReq, GetShiftListReq,
        GetShiftRequestListReq, RejectShiftRequestReq, Shift, ShiftAssignmentListData, ShiftListData,
        ShiftRequestListData, UpdateShiftReq,
    },
    ApiClient, ClientResult,
};

type QueryParams = Vec<(&'static str, String)>;

/// GET /api/v1/shift?show_only_unassigned=&limit=&offset=
pub async fn fetch_shifts(
    api: &ApiClient,
    store: &dyn TokenStore,
    filter: &GetShiftListReq,
) -> ClientResult<ApiResponse<ShiftListData>> {
    let query = shift_list_query(filter, &api.config().shift_list_paging);

    let request = api
        .authorized(Method::GET, "/api/v1/shift", store)
        .await?
        .query(&query);
    api.send(request).await
}

/// GET /api/v1/shift/{id}
pub async fn get_shift(api: &ApiClient, store: &dyn TokenStore, id: i64) -> ClientResult<ApiResponse<Shift>> {
    let request = api
        .authorized(Method::GET, &format!("/api/v1/shift/{}", id), store)
        .await?;
    api.send(request).await
}

/// POST /api/v1/shift
pub async fn create_shift(
    api: &ApiClient,
    store: &dyn TokenStore,
    shift: &CreateShiftReq,
) -> ClientResult<ApiResponse<Value>> {
    let request = api
        .authorized(Method::POST, "/api/v1/shift", store)
        .await?
        .json(shift);
    api.send(request).await
}

/// PUT /api/v1/shift/{id}
pub async fn update_shift(
    api: &ApiClient,
    store: &dyn TokenStore,
    id: i64,
    shift: &UpdateShiftReq,
) -> ClientResult<ApiResponse<Value>> {
    let request = api
        .authorized(Method::PUT, &format!("/api/v1/shift/{}", id), store)
        .await?
        .json(shift);
    api.send(request).await
}

/// DELETE /api/v1/shift/{id}
///
/// Whether the row is soft- or hard-deleted is up to the server.
pub async fn delete_shift(api: &ApiClient, store: &dyn TokenStore, id: i64) -> ClientResult<ApiResponse<Value>> {
    let request = api
        .authorized(Method::DELETE, &format!("/api/v1/shift/{}", id), store)
        .await?;
    api.send(request).await
}

/// GET /api/v1/shift/request?status=&limit=&offset=
pub async fn fetch_shift_requests(
    api: &ApiClient,
    store: &dyn TokenStore,
    filter: &GetShiftRequestListReq,
) -> ClientResult<ApiResponse<ShiftRequestListData>> {
    let query = shift_request_list_query(filter, &api.config().shift_request_list_paging);

    let request = api
        .authorized(Method::GET, "/api/v1/shift/request", store)
        .await?
        .query(&query);
    api.send(request).await
}

/// POST /api/v1/shift/request
pub async fn create_shift_request(
    api: &ApiClient,
    store: &dyn TokenStore,
    input: &CreateShiftRequestReq,
) -> ClientResult<ApiResponse<Value>> {
    let request = api
        .authorized(Method::POST, "/api/v1/shift/request", store)
        .await?
        .json(input);
    api.send(request).await
}

/// PUT /api/v1/shift/request/{id}/approve
pub async fn approve_shift_request(
    api: &ApiClient,
    store: &dyn TokenStore,
    id: i64,
) -> ClientResult<ApiResponse<Value>> {
    let request = api
        .authorized(Method::PUT, &format!("/api/v1/shift/request/{}/approve", id), store)
        .await?;
    api.send(request).await
}

/// PUT /api/v1/shift/request/{id}/reject
pub async fn reject_shift_request(
    api: &ApiClient,
    store: &dyn TokenStore,
    id: i64,
    reason: &str,
) -> ClientResult<ApiResponse<Value>> {
    let body = RejectShiftRequestReq {
        reason: reason.to_string(),
    };

    let request = api
        .authorized(Method::PUT, &format!("/api/v1/shift/request/{}/reject", id), store)
        .await?
        .json(&body);
    api.send(request).await
}

/// GET /api/v1/shift/assignment?user_id=&limit=&offset=
pub async fn fetch_shift_assignments(
    api: &ApiClient,
    store: &dyn TokenStore,
    filter: &GetShiftAssignmentListReq,
) -> ClientResult<ApiResponse<ShiftAssignmentListData>> {
    let query = shift_assignment_list_query(filter, &api.config().shift_assignment_list_paging);

    let request = api
        .authorized(Method::GET, "/api/v1/shift/assignment", store)
        .await?
        .query(&query);
    api.send(request).await
}

fn shift_list_query(filter: &GetShiftListReq, paging: &ListPaging) -> QueryParams {
    let mut query = Vec::with_capacity(3);

    // Only ever sent as "true"; false means "no filter"
    if filter.show_only_unassigned {
        query.push(("show_only_unassigned", "true".to_string()));
    }
    query.push(("limit", paging.resolve_limit(Some(filter.limit)).to_string()));
    query.push(("offset", paging.resolve_offset(Some(filter.offset)).to_string()));

    query
}

fn shift_request_list_query(filter: &GetShiftRequestListReq, paging: &ListPaging) -> QueryParams {
    let mut query = Vec::with_capacity(3);

    if let Some(status) = filter.status.as_deref().filter(|s| !s.is_empty()) {
        query.push(("status", status.to_string()));
    }
    query.push(("limit", paging.resolve_limit(filter.limit).to_string()));
    query.push(("offset", paging.resolve_offset(filter.offset).to_string()));

    query
}

fn shift_assignment_list_query(filter: &GetShiftAssignmentListReq, paging: &ListPaging) -> QueryParams {
    let mut query = Vec::with_capacity(3);

    if let Some(user_id) = filter.user_id {
        query.push(("user_id", user_id.to_string()));
    }
    query.push(("limit", paging.resolve_limit(filter.limit).to_string()));
    query.push(("offset", paging.resolve_offset(filter.offset).to_string()));

    query
}
