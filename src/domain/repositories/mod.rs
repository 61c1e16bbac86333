// Repository contracts (ports)
// Implementations live in the infrastructure layer

pub mod member_repository;
pub mod team_repository;

pub use member_repository::{AgeStatistics, MemberRepository, MemberTeamRow, TeamAverageAge};
pub use team_repository::TeamRepository;
