use sqlx::SqlitePool;

use crate::domain::member::Member;
use crate::domain::repositories::{MemberRepository, TeamRepository};
use crate::domain::team::Team;
use crate::infrastructure::repositories::{SqliteMemberRepository, SqliteTeamRepository};

/// Seeds the demo fixture: teamA/teamB plus a hundred members named
/// member0..member99 with age equal to their index, alternating teams
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let members = SqliteMemberRepository::new(pool.clone());
    let teams = SqliteTeamRepository::new(pool.clone());

    let mut team_a = Team::new("teamA").expect("team name is non-empty");
    let mut team_b = Team::new("teamB").expect("team name is non-empty");
    teams.save(&mut team_a).await?;
    teams.save(&mut team_b).await?;

    for index in 0..100i64 {
        let mut member = Member::new(format!("member{index}"), index);
        members.save(&mut member).await?;

        let team = if index % 2 == 0 { &mut team_a } else { &mut team_b };
        member.change_team(team).expect("entities are saved");
        members.save(&mut member).await?;
    }

    tracing::info!("Seeded demo data: 2 teams, 100 members");

    Ok(())
}
