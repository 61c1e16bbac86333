use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::team::Team;

/// Member entity
///
/// A member has a database-assigned identity, an optional username, an age
/// and an optional link to a team. The team link is stored as the team's
/// identifier; the live members-of-team view is reconstructed by the
/// repositories rather than held as an object reference.
///
/// # Invariants
/// - Team membership is changed only through [`Member::change_team`], which
///   updates the member's link and the team's index in a single step
///
/// # Example
/// ```
/// use roster_api::domain::member::Member;
/// use roster_api::domain::team::Team;
///
/// let mut member = Member::from_persistence(1, Some("ada".to_string()), 30, None);
/// let mut team = Team::from_persistence(7, "teamA".to_string(), Vec::new());
///
/// member.change_team(&mut team).expect("both sides are saved");
/// assert_eq!(member.team_id(), Some(7));
/// assert!(team.has_member(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    id: Option<i64>,
    username: Option<String>,
    age: i64,
    team_id: Option<i64>,
}

impl Member {
    /// Creates a new, not yet persisted Member with no team
    pub fn new(username: impl Into<String>, age: i64) -> Self {
        Self {
            id: None,
            username: Some(username.into()),
            age,
            team_id: None,
        }
    }

    /// Creates a new Member without a username
    pub fn anonymous(age: i64) -> Self {
        Self {
            id: None,
            username: None,
            age,
            team_id: None,
        }
    }

    /// Moves this member to `team`, keeping both sides consistent
    ///
    /// Sets the member's team link and registers the member in the team's
    /// index in one step, so no state is observable where only one side is
    /// updated. Both entities must have been saved: the id-based index
    /// cannot refer to an entity without an identity.
    ///
    /// Moving to a new team does not remove the member from the previous
    /// team's index; a member row carries a single `team_id`, so only the
    /// in-memory index retains the old entry.
    ///
    /// # Returns
    /// * `Err(DomainError::UnsavedMember)` - If this member has no id yet
    /// * `Err(DomainError::UnsavedTeam)` - If the team has no id yet
    pub fn change_team(&mut self, team: &mut Team) -> DomainResult<()> {
        let member_id = self.id.ok_or(DomainError::UnsavedMember)?;
        let team_id = team.id().ok_or(DomainError::UnsavedTeam)?;

        self.team_id = Some(team_id);
        team.register_member(member_id);

        Ok(())
    }

    /// Returns the member's id, if it has been saved
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Returns the member's username, if any
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Returns the member's age
    pub fn age(&self) -> i64 {
        self.age
    }

    /// Returns the id of the member's team, if any
    pub fn team_id(&self) -> Option<i64> {
        self.team_id
    }

    pub(crate) fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    /// Reconstructs a Member from persistence layer data
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    pub fn from_persistence(id: i64, username: Option<String>, age: i64, team_id: Option<i64>) -> Self {
        Self {
            id: Some(id),
            username,
            age,
            team_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved_member(id: i64, name: &str, age: i64) -> Member {
        Member::from_persistence(id, Some(name.to_string()), age, None)
    }

    fn saved_team(id: i64, name: &str) -> Team {
        Team::from_persistence(id, name.to_string(), Vec::new())
    }

    #[test]
    fn new_member_has_no_identity_and_no_team() {
        let member = Member::new("seunghee", 23);

        assert!(member.id().is_none());
        assert_eq!(member.username(), Some("seunghee"));
        assert_eq!(member.age(), 23);
        assert!(member.team_id().is_none());
    }

    #[test]
    fn anonymous_member_has_no_username() {
        let member = Member::anonymous(100);

        assert!(member.username().is_none());
        assert_eq!(member.age(), 100);
    }

    #[test]
    fn change_team_updates_both_sides() {
        let mut member = saved_member(1, "member1", 10);
        let mut team = saved_team(5, "teamA");

        member.change_team(&mut team).expect("both sides are saved");

        assert_eq!(member.team_id(), Some(5));
        assert!(team.has_member(1));
    }

    #[test]
    fn change_team_requires_saved_member() {
        let mut member = Member::new("member1", 10);
        let mut team = saved_team(5, "teamA");

        assert_eq!(
            member.change_team(&mut team),
            Err(DomainError::UnsavedMember)
        );
        assert!(team.member_ids().is_empty());
    }

    #[test]
    fn change_team_requires_saved_team() {
        let mut member = saved_member(1, "member1", 10);
        let mut team = Team::new("teamA").expect("valid team");

        assert_eq!(member.change_team(&mut team), Err(DomainError::UnsavedTeam));
        assert!(member.team_id().is_none());
    }

    #[test]
    fn change_team_does_not_remove_from_previous_team() {
        let mut member = saved_member(1, "member1", 10);
        let mut team_a = saved_team(5, "teamA");
        let mut team_b = saved_team(6, "teamB");

        member.change_team(&mut team_a).expect("join teamA");
        member.change_team(&mut team_b).expect("join teamB");

        // The member link moves, the old index entry stays.
        assert_eq!(member.team_id(), Some(6));
        assert!(team_a.has_member(1));
        assert!(team_b.has_member(1));
    }

    #[test]
    fn repeated_change_to_same_team_keeps_one_entry() {
        let mut member = saved_member(1, "member1", 10);
        let mut team = saved_team(5, "teamA");

        member.change_team(&mut team).expect("join teamA");
        member.change_team(&mut team).expect("join teamA again");

        assert_eq!(team.member_ids(), &[1]);
    }
}
