use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::api::errors::ApiError;
use crate::domain::member::Member;
use crate::domain::page::{Page, PageRequest};
use crate::domain::repositories::{MemberRepository, MemberTeamRow};
use crate::domain::search::SearchCondition;
use crate::infrastructure::repositories::SqliteMemberRepository;

/// Page size used when the paged endpoint gets no explicit limit
const DEFAULT_PAGE_LIMIT: i64 = 20;

/// Response body for a single member lookup
#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub member_id: Option<i64>,
    pub username: Option<String>,
    pub age: i64,
    pub team_id: Option<i64>,
}

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            member_id: member.id(),
            username: member.username().map(str::to_string),
            age: member.age(),
            team_id: member.team_id(),
        }
    }
}

/// Query parameters for the paged search endpoint
#[derive(Debug, Deserialize)]
pub struct PagedSearchParams {
    pub username: Option<String>,
    pub team_name: Option<String>,
    pub age_goe: Option<i64>,
    pub age_loe: Option<i64>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl PagedSearchParams {
    fn condition(&self) -> SearchCondition {
        SearchCondition {
            username: self.username.clone(),
            team_name: self.team_name.clone(),
            age_goe: self.age_goe,
            age_loe: self.age_loe,
        }
    }
}

/// Search members joined with their team
///
/// GET /v1/members
pub async fn search_members(
    State(pool): State<SqlitePool>,
    Query(condition): Query<SearchCondition>,
) -> Result<Json<Vec<MemberTeamRow>>, ApiError> {
    let repository = SqliteMemberRepository::new(pool);
    let rows = repository.search(&condition).await?;

    Ok(Json(rows))
}

/// Search one page of members joined with their team
///
/// GET /v2/members
pub async fn search_members_paged(
    State(pool): State<SqlitePool>,
    Query(params): Query<PagedSearchParams>,
) -> Result<Json<Page<MemberTeamRow>>, ApiError> {
    let page = PageRequest::new(
        params.offset.unwrap_or(0),
        params.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
    )?;

    let repository = SqliteMemberRepository::new(pool);
    let result = repository.search_page(&params.condition(), page).await?;

    Ok(Json(result))
}

/// Get a member by id
///
/// GET /v1/members/:id
pub async fn get_member(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<MemberResponse>, ApiError> {
    let repository = SqliteMemberRepository::new(pool);
    let member = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Member not found: {}", id)))?;

    Ok(Json(MemberResponse::from(&member)))
}
