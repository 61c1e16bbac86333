use async_trait::async_trait;
use serde::Serialize;
use sqlx::FromRow;

use crate::domain::member::Member;
use crate::domain::page::{Page, PageRequest};
use crate::domain::search::SearchCondition;

/// Flattened member-with-team row produced by the search queries
///
/// Read-only projection over the left join of members to teams; never
/// persisted, only returned to callers. Members without a team carry null
/// team columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct MemberTeamRow {
    pub member_id: i64,
    pub username: Option<String>,
    pub age: i64,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
}

/// Aggregate figures over the members table
///
/// Sum, average, max and min are null on an empty table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct AgeStatistics {
    pub member_count: i64,
    pub age_sum: Option<i64>,
    pub age_average: Option<f64>,
    pub age_max: Option<i64>,
    pub age_min: Option<i64>,
}

/// Average member age per team, from the grouped join query
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct TeamAverageAge {
    pub team_name: String,
    pub average_age: f64,
}

/// Repository trait for Member entities
///
/// Lookups return `Option`/empty collections for absent rows; absence is
/// not an error. Database failures surface as `sqlx::Error` untouched.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Save a member (insert assigning the id, or update by primary key)
    async fn save(&self, member: &mut Member) -> Result<(), sqlx::Error>;

    /// Find a member by its id
    async fn find_by_id(&self, id: i64) -> Result<Option<Member>, sqlx::Error>;

    /// Find all members in primary-key order
    async fn find_all(&self) -> Result<Vec<Member>, sqlx::Error>;

    /// Find all members with the given username
    async fn find_by_username(&self, username: &str) -> Result<Vec<Member>, sqlx::Error>;

    /// Delete a member by id
    async fn delete(&self, id: i64) -> Result<(), sqlx::Error>;

    /// Search members joined with their team, filtered by the condition
    async fn search(&self, condition: &SearchCondition)
        -> Result<Vec<MemberTeamRow>, sqlx::Error>;

    /// Search one page of members joined with their team
    ///
    /// Runs the row-fetch query and, unless the first page already proves
    /// itself complete, a count query over the same filter.
    async fn search_page(
        &self,
        condition: &SearchCondition,
        page: PageRequest,
    ) -> Result<Page<MemberTeamRow>, sqlx::Error>;

    /// Bulk-rename every member younger than `age`; returns affected rows
    async fn rename_members_younger_than(
        &self,
        username: &str,
        age: i64,
    ) -> Result<u64, sqlx::Error>;

    /// Bulk-add `delta` to every member's age; returns affected rows
    ///
    /// Writes straight to the database: Member values already loaded are
    /// not refreshed and keep their stale age until re-fetched.
    async fn add_to_all_ages(&self, delta: i64) -> Result<u64, sqlx::Error>;

    /// Bulk-delete every member older than `age`; returns affected rows
    async fn delete_members_older_than(&self, age: i64) -> Result<u64, sqlx::Error>;

    /// Count/sum/avg/max/min over all member ages
    async fn age_statistics(&self) -> Result<AgeStatistics, sqlx::Error>;

    /// Average member age per team, ordered by team name
    async fn average_age_by_team(&self) -> Result<Vec<TeamAverageAge>, sqlx::Error>;

    /// Members whose age equals the maximum age
    async fn find_oldest(&self) -> Result<Vec<Member>, sqlx::Error>;

    /// Members whose age is at or above the average age
    async fn find_with_age_at_least_average(&self) -> Result<Vec<Member>, sqlx::Error>;

    /// Members of the given age, oldest first, then by username with
    /// nameless members last
    async fn find_by_age_ordered(&self, age: i64) -> Result<Vec<Member>, sqlx::Error>;
}
