// Repository implementations (data access layer)
// SQLite adapters for the domain repository contracts

pub mod sqlite_member_repository;
pub mod sqlite_team_repository;

pub use sqlite_member_repository::SqliteMemberRepository;
pub use sqlite_team_repository::SqliteTeamRepository;

use sqlx::FromRow;

use crate::domain::member::Member;

/// Raw members row, rehydrated into the entity by both repositories
#[derive(Debug, FromRow)]
pub(crate) struct MemberRow {
    pub member_id: i64,
    pub username: Option<String>,
    pub age: i64,
    pub team_id: Option<i64>,
}

impl From<MemberRow> for Member {
    fn from(row: MemberRow) -> Self {
        Member::from_persistence(row.member_id, row.username, row.age, row.team_id)
    }
}
