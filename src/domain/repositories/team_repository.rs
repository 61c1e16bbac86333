use async_trait::async_trait;

use crate::domain::member::Member;
use crate::domain::team::Team;

/// Repository trait for Team entities
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Save a team (insert assigning the id, or update by primary key)
    async fn save(&self, team: &mut Team) -> Result<(), sqlx::Error>;

    /// Find a team by its id, rebuilding its member index by lookup
    async fn find_by_id(&self, id: i64) -> Result<Option<Team>, sqlx::Error>;

    /// Find all teams in primary-key order
    ///
    /// Member indexes are not loaded here; use [`TeamRepository::find_by_id`]
    /// or [`TeamRepository::members_of`] for the membership view.
    async fn find_all(&self) -> Result<Vec<Team>, sqlx::Error>;

    /// Members currently assigned to the given team
    async fn members_of(&self, team_id: i64) -> Result<Vec<Member>, sqlx::Error>;

    /// Delete a team by id
    async fn delete(&self, id: i64) -> Result<(), sqlx::Error>;
}
