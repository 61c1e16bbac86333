use sqlx::SqlitePool;

/// Applies the relational schema
///
/// Idempotent; runs at startup and at the head of every integration test.
/// Two tables, a nullable foreign key from members to teams, no cascade
/// delete.
pub async fn apply(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS teams (
            team_id INTEGER PRIMARY KEY AUTOINCREMENT,
            name    TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS members (
            member_id INTEGER PRIMARY KEY AUTOINCREMENT,
            username  TEXT,
            age       INTEGER NOT NULL,
            team_id   INTEGER REFERENCES teams (team_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
