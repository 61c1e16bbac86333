/// A table column usable in composed filters
///
/// The per-table constants below are the full column metadata for the
/// schema, written once and treated as immutable. Filters built from them
/// always render table-qualified names, so joined queries stay unambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub table: &'static str,
    pub name: &'static str,
}

impl Column {
    /// Table-qualified name as it appears in SQL
    pub fn qualified(&self) -> String {
        format!("{}.{}", self.table, self.name)
    }
}

/// Columns of the `members` table
pub mod members {
    use super::Column;

    pub const TABLE: &str = "members";

    pub const ID: Column = Column {
        table: TABLE,
        name: "member_id",
    };
    pub const USERNAME: Column = Column {
        table: TABLE,
        name: "username",
    };
    pub const AGE: Column = Column {
        table: TABLE,
        name: "age",
    };
    pub const TEAM_ID: Column = Column {
        table: TABLE,
        name: "team_id",
    };
}

/// Columns of the `teams` table
pub mod teams {
    use super::Column;

    pub const TABLE: &str = "teams";

    pub const ID: Column = Column {
        table: TABLE,
        name: "team_id",
    };
    pub const NAME: Column = Column {
        table: TABLE,
        name: "name",
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_name_includes_table() {
        assert_eq!(members::USERNAME.qualified(), "members.username");
        assert_eq!(teams::NAME.qualified(), "teams.name");
    }
}
