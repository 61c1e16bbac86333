use crate::domain::errors::{DomainError, DomainResult};

/// Team entity
///
/// A team has a database-assigned identity, a name and an in-memory index
/// of the ids of its members. The index is the ownership-safe rendering of
/// a bidirectional relationship: members point at the team through their
/// `team_id` column, and the team mirrors that link as plain identifiers
/// instead of back-references, so the object graph stays acyclic.
///
/// # Invariants
/// - Name cannot be empty
/// - The member index never holds duplicates
/// - The index is maintained through [`crate::domain::member::Member::change_team`],
///   never written to directly by callers
///
/// # Example
/// ```
/// use roster_api::domain::team::Team;
///
/// let team = Team::new("teamA").expect("valid team");
/// assert_eq!(team.name(), "teamA");
/// assert!(team.id().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: Option<i64>,
    name: String,
    member_ids: Vec<i64>,
}

impl Team {
    /// Creates a new, not yet persisted Team
    ///
    /// # Returns
    /// * `Ok(Team)` - New team without an id; the repository assigns one on save
    /// * `Err(DomainError::EmptyTeamName)` - If the name is empty
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::EmptyTeamName);
        }

        Ok(Self {
            id: None,
            name,
            member_ids: Vec::new(),
        })
    }

    /// Returns the team's id, if it has been saved
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Returns the team's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ids of the members currently registered with this team
    pub fn member_ids(&self) -> &[i64] {
        &self.member_ids
    }

    /// Returns true if the given member id is registered with this team
    pub fn has_member(&self, member_id: i64) -> bool {
        self.member_ids.contains(&member_id)
    }

    /// Records a member id in the index; already-registered ids are kept once
    pub(crate) fn register_member(&mut self, member_id: i64) {
        if !self.has_member(member_id) {
            self.member_ids.push(member_id);
        }
    }

    pub(crate) fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// The member index is rebuilt by the repository through an explicit
    /// lookup of the members table, not stored on the teams table itself.
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    pub fn from_persistence(id: i64, name: String, member_ids: Vec<i64>) -> Self {
        Self {
            id: Some(id),
            name,
            member_ids,
        }
    }
}
