use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

use crate::domain::member::Member;
use crate::domain::repositories::team_repository::TeamRepository;
use crate::domain::team::Team;

use super::MemberRow;

#[derive(Debug, FromRow)]
struct TeamRow {
    team_id: i64,
    name: String,
}

/// SQLite implementation of TeamRepository
///
/// The teams table stores no membership column; a team's member index is
/// reconstructed from the members table on load.
pub struct SqliteTeamRepository {
    pool: SqlitePool,
}

impl SqliteTeamRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn member_ids_of(&self, team_id: i64) -> Result<Vec<i64>, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT member_id FROM members WHERE team_id = ? ORDER BY member_id",
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
    }
}

#[async_trait]
impl TeamRepository for SqliteTeamRepository {
    async fn save(&self, team: &mut Team) -> Result<(), sqlx::Error> {
        match team.id() {
            Some(id) => {
                sqlx::query(
                    "INSERT INTO teams (team_id, name) VALUES (?, ?) \
                     ON CONFLICT (team_id) DO UPDATE SET name = excluded.name",
                )
                .bind(id)
                .bind(team.name())
                .execute(&self.pool)
                .await?;
            }
            None => {
                let result = sqlx::query("INSERT INTO teams (name) VALUES (?)")
                    .bind(team.name())
                    .execute(&self.pool)
                    .await?;
                team.assign_id(result.last_insert_rowid());
            }
        }

        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Team>, sqlx::Error> {
        let row = sqlx::query_as::<_, TeamRow>("SELECT team_id, name FROM teams WHERE team_id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let member_ids = self.member_ids_of(row.team_id).await?;
                Ok(Some(Team::from_persistence(row.team_id, row.name, member_ids)))
            }
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<Team>, sqlx::Error> {
        let rows = sqlx::query_as::<_, TeamRow>("SELECT team_id, name FROM teams ORDER BY team_id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| Team::from_persistence(row.team_id, row.name, Vec::new()))
            .collect())
    }

    async fn members_of(&self, team_id: i64) -> Result<Vec<Member>, sqlx::Error> {
        let rows = sqlx::query_as::<_, MemberRow>(
            "SELECT member_id, username, age, team_id FROM members \
             WHERE team_id = ? ORDER BY member_id",
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Member::from).collect())
    }

    async fn delete(&self, id: i64) -> Result<(), sqlx::Error> {
        let result = sqlx::query("DELETE FROM teams WHERE team_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }

        Ok(())
    }
}
