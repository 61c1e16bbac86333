use serde::Deserialize;

/// Optional search criteria for the member search queries
///
/// Absent fields impose no constraint; a condition with every field unset
/// matches every member. Blank strings are treated the same as absent
/// fields, so an empty `username=` query parameter does not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchCondition {
    pub username: Option<String>,
    pub team_name: Option<String>,
    pub age_goe: Option<i64>,
    pub age_loe: Option<i64>,
}
