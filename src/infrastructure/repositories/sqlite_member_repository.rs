use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::domain::member::Member;
use crate::domain::page::{Page, PageRequest};
use crate::domain::repositories::member_repository::{
    AgeStatistics, MemberRepository, MemberTeamRow, TeamAverageAge,
};
use crate::domain::search::SearchCondition;
use crate::query::columns::{members, teams};
use crate::query::{Conjunction, Predicate};

use super::MemberRow;

const MEMBER_TEAM_SELECT: &str = "SELECT members.member_id AS member_id, \
     members.username AS username, \
     members.age AS age, \
     teams.team_id AS team_id, \
     teams.name AS team_name \
     FROM members LEFT JOIN teams ON members.team_id = teams.team_id";

const MEMBER_TEAM_COUNT: &str = "SELECT COUNT(members.member_id) \
     FROM members LEFT JOIN teams ON members.team_id = teams.team_id";

/// SQLite implementation of MemberRepository
///
/// The search queries are assembled at runtime: the filter is dynamic, so
/// they cannot be static statements. Everything user-supplied goes through
/// bound parameters.
pub struct SqliteMemberRepository {
    pool: SqlitePool,
}

impl SqliteMemberRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Composes the conjunctive filter for a search condition
///
/// Present criteria become one comparison each; absent criteria are left
/// out entirely, so an empty condition composes to a neutral filter.
fn search_filter(condition: &SearchCondition) -> Conjunction {
    Conjunction::new()
        .and(text_criterion(&condition.username).map(|name| Predicate::eq(members::USERNAME, name)))
        .and(text_criterion(&condition.team_name).map(|name| Predicate::eq(teams::NAME, name)))
        .and(condition.age_goe.map(|age| Predicate::goe(members::AGE, age)))
        .and(condition.age_loe.map(|age| Predicate::loe(members::AGE, age)))
}

/// Blank strings impose no constraint, same as absent parameters
fn text_criterion(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.trim().is_empty())
}

#[async_trait]
impl MemberRepository for SqliteMemberRepository {
    async fn save(&self, member: &mut Member) -> Result<(), sqlx::Error> {
        match member.id() {
            Some(id) => {
                sqlx::query(
                    "INSERT INTO members (member_id, username, age, team_id) \
                     VALUES (?, ?, ?, ?) \
                     ON CONFLICT (member_id) DO UPDATE SET \
                         username = excluded.username, \
                         age = excluded.age, \
                         team_id = excluded.team_id",
                )
                .bind(id)
                .bind(member.username())
                .bind(member.age())
                .bind(member.team_id())
                .execute(&self.pool)
                .await?;
            }
            None => {
                let result =
                    sqlx::query("INSERT INTO members (username, age, team_id) VALUES (?, ?, ?)")
                        .bind(member.username())
                        .bind(member.age())
                        .bind(member.team_id())
                        .execute(&self.pool)
                        .await?;
                member.assign_id(result.last_insert_rowid());
            }
        }

        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Member>, sqlx::Error> {
        let row = sqlx::query_as::<_, MemberRow>(
            "SELECT member_id, username, age, team_id FROM members WHERE member_id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Member::from))
    }

    async fn find_all(&self) -> Result<Vec<Member>, sqlx::Error> {
        let rows = sqlx::query_as::<_, MemberRow>(
            "SELECT member_id, username, age, team_id FROM members ORDER BY member_id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Member::from).collect())
    }

    async fn find_by_username(&self, username: &str) -> Result<Vec<Member>, sqlx::Error> {
        let rows = sqlx::query_as::<_, MemberRow>(
            "SELECT member_id, username, age, team_id FROM members \
             WHERE username = ? ORDER BY member_id",
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Member::from).collect())
    }

    async fn delete(&self, id: i64) -> Result<(), sqlx::Error> {
        let result = sqlx::query("DELETE FROM members WHERE member_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }

        Ok(())
    }

    async fn search(
        &self,
        condition: &SearchCondition,
    ) -> Result<Vec<MemberTeamRow>, sqlx::Error> {
        let mut builder = QueryBuilder::<Sqlite>::new(MEMBER_TEAM_SELECT);
        search_filter(condition).apply(&mut builder);
        builder.push(" ORDER BY members.member_id");

        builder
            .build_query_as::<MemberTeamRow>()
            .fetch_all(&self.pool)
            .await
    }

    async fn search_page(
        &self,
        condition: &SearchCondition,
        page: PageRequest,
    ) -> Result<Page<MemberTeamRow>, sqlx::Error> {
        let filter = search_filter(condition);

        let mut builder = QueryBuilder::<Sqlite>::new(MEMBER_TEAM_SELECT);
        filter.apply(&mut builder);
        builder.push(" ORDER BY members.member_id LIMIT ");
        builder.push_bind(page.limit());
        builder.push(" OFFSET ");
        builder.push_bind(page.offset());

        let items = builder
            .build_query_as::<MemberTeamRow>()
            .fetch_all(&self.pool)
            .await?;

        // A short first page already proves the total; only otherwise is
        // the count query worth issuing.
        let total_count = if page.offset() == 0 && (items.len() as i64) < page.limit() {
            Some(items.len() as i64)
        } else {
            let mut count = QueryBuilder::<Sqlite>::new(MEMBER_TEAM_COUNT);
            filter.apply(&mut count);
            let total: i64 = count.build_query_scalar().fetch_one(&self.pool).await?;
            Some(total)
        };

        Ok(Page::new(items, page, total_count))
    }

    async fn rename_members_younger_than(
        &self,
        username: &str,
        age: i64,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE members SET username = ? WHERE age < ?")
            .bind(username)
            .bind(age)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn add_to_all_ages(&self, delta: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE members SET age = age + ?")
            .bind(delta)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete_members_older_than(&self, age: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM members WHERE age > ?")
            .bind(age)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn age_statistics(&self) -> Result<AgeStatistics, sqlx::Error> {
        sqlx::query_as::<_, AgeStatistics>(
            "SELECT COUNT(member_id) AS member_count, \
                    SUM(age) AS age_sum, \
                    AVG(age) AS age_average, \
                    MAX(age) AS age_max, \
                    MIN(age) AS age_min \
             FROM members",
        )
        .fetch_one(&self.pool)
        .await
    }

    async fn average_age_by_team(&self) -> Result<Vec<TeamAverageAge>, sqlx::Error> {
        sqlx::query_as::<_, TeamAverageAge>(
            "SELECT teams.name AS team_name, AVG(members.age) AS average_age \
             FROM members JOIN teams ON members.team_id = teams.team_id \
             GROUP BY teams.name ORDER BY teams.name",
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn find_oldest(&self) -> Result<Vec<Member>, sqlx::Error> {
        let rows = sqlx::query_as::<_, MemberRow>(
            "SELECT member_id, username, age, team_id FROM members \
             WHERE age = (SELECT MAX(age) FROM members) ORDER BY member_id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Member::from).collect())
    }

    async fn find_with_age_at_least_average(&self) -> Result<Vec<Member>, sqlx::Error> {
        let rows = sqlx::query_as::<_, MemberRow>(
            "SELECT member_id, username, age, team_id FROM members \
             WHERE age >= (SELECT AVG(age) FROM members) ORDER BY member_id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Member::from).collect())
    }

    async fn find_by_age_ordered(&self, age: i64) -> Result<Vec<Member>, sqlx::Error> {
        let rows = sqlx::query_as::<_, MemberRow>(
            "SELECT member_id, username, age, team_id FROM members \
             WHERE age = ? ORDER BY age DESC, username ASC NULLS LAST",
        )
        .bind(age)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Member::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(condition: &SearchCondition) -> String {
        let mut builder = QueryBuilder::<Sqlite>::new(MEMBER_TEAM_SELECT);
        search_filter(condition).apply(&mut builder);
        builder.sql().to_string()
    }

    #[test]
    fn empty_condition_composes_neutral_filter() {
        let condition = SearchCondition::default();

        assert!(search_filter(&condition).is_empty());
        assert_eq!(rendered(&condition), MEMBER_TEAM_SELECT);
    }

    #[test]
    fn blank_text_criteria_are_absent() {
        let condition = SearchCondition {
            username: Some("   ".to_string()),
            team_name: Some(String::new()),
            ..SearchCondition::default()
        };

        assert!(search_filter(&condition).is_empty());
    }

    #[test]
    fn present_criteria_compose_in_declaration_order() {
        let condition = SearchCondition {
            username: Some("member1".to_string()),
            team_name: Some("teamB".to_string()),
            age_goe: Some(20),
            age_loe: Some(40),
        };

        assert_eq!(
            rendered(&condition),
            format!(
                "{MEMBER_TEAM_SELECT} WHERE members.username = ? AND teams.name = ? \
                 AND members.age >= ? AND members.age <= ?"
            )
        );
    }

    #[test]
    fn single_criterion_composes_single_comparison() {
        let condition = SearchCondition {
            team_name: Some("teamB".to_string()),
            ..SearchCondition::default()
        };

        let filter = search_filter(&condition);
        assert_eq!(filter.len(), 1);
        assert_eq!(
            rendered(&condition),
            format!("{MEMBER_TEAM_SELECT} WHERE teams.name = ?")
        );
    }
}
