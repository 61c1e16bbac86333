use sqlx::{QueryBuilder, Sqlite};

use crate::query::columns::Column;

/// Relational comparison operators available to composed filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Equal,
    GreaterOrEqual,
    LessOrEqual,
}

impl Comparison {
    fn operator(self) -> &'static str {
        match self {
            Comparison::Equal => "=",
            Comparison::GreaterOrEqual => ">=",
            Comparison::LessOrEqual => "<=",
        }
    }
}

/// A value compared against a column, always sent as a bound parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Text(String),
    Integer(i64),
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Text(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::Text(value)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Integer(value)
    }
}

/// A single column comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    column: Column,
    comparison: Comparison,
    operand: Operand,
}

impl Predicate {
    /// `column = value`
    pub fn eq(column: Column, operand: impl Into<Operand>) -> Self {
        Self {
            column,
            comparison: Comparison::Equal,
            operand: operand.into(),
        }
    }

    /// `column >= value`
    pub fn goe(column: Column, operand: impl Into<Operand>) -> Self {
        Self {
            column,
            comparison: Comparison::GreaterOrEqual,
            operand: operand.into(),
        }
    }

    /// `column <= value`
    pub fn loe(column: Column, operand: impl Into<Operand>) -> Self {
        Self {
            column,
            comparison: Comparison::LessOrEqual,
            operand: operand.into(),
        }
    }
}

/// Flat AND-only filter over zero or more predicates
///
/// Absent criteria are skipped rather than turned into always-true
/// placeholders: composing zero predicates renders no WHERE clause at all,
/// so the query matches every row. No OR, no negation, no grouping.
///
/// # Example
/// ```
/// use roster_api::query::columns::members;
/// use roster_api::query::{Conjunction, Predicate};
///
/// let filter = Conjunction::new()
///     .and(Some(Predicate::goe(members::AGE, 20)))
///     .and(None);
/// assert_eq!(filter.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conjunction {
    predicates: Vec<Predicate>,
}

impl Conjunction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a predicate to the conjunction; `None` is skipped, so absent
    /// criteria simply do not appear in the clause
    pub fn and(mut self, predicate: impl Into<Option<Predicate>>) -> Self {
        if let Some(predicate) = predicate.into() {
            self.predicates.push(predicate);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Appends ` WHERE p1 AND p2 ...` with bound operands onto `builder`;
    /// appends nothing when the conjunction is empty
    pub fn apply(&self, builder: &mut QueryBuilder<'_, Sqlite>) {
        for (index, predicate) in self.predicates.iter().enumerate() {
            builder.push(if index == 0 { " WHERE " } else { " AND " });
            builder.push(predicate.column.qualified());
            builder.push(format!(" {} ", predicate.comparison.operator()));
            match &predicate.operand {
                Operand::Text(value) => builder.push_bind(value.clone()),
                Operand::Integer(value) => builder.push_bind(*value),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::columns::{members, teams};

    const BASE: &str = "SELECT members.member_id FROM members";

    fn rendered(conjunction: &Conjunction) -> String {
        let mut builder = QueryBuilder::<Sqlite>::new(BASE);
        conjunction.apply(&mut builder);
        builder.sql().to_string()
    }

    #[test]
    fn empty_conjunction_renders_no_where_clause() {
        assert_eq!(rendered(&Conjunction::new()), BASE);
    }

    #[test]
    fn single_predicate_renders_where() {
        let filter = Conjunction::new().and(Predicate::eq(members::USERNAME, "member1"));

        assert_eq!(rendered(&filter), format!("{BASE} WHERE members.username = ?"));
    }

    #[test]
    fn predicates_join_with_and_in_insertion_order() {
        let filter = Conjunction::new()
            .and(Predicate::eq(teams::NAME, "teamB"))
            .and(Predicate::goe(members::AGE, 20))
            .and(Predicate::loe(members::AGE, 40));

        assert_eq!(
            rendered(&filter),
            format!("{BASE} WHERE teams.name = ? AND members.age >= ? AND members.age <= ?")
        );
    }

    #[test]
    fn absent_predicates_are_skipped() {
        let absent: Option<Predicate> = None;
        let filter = Conjunction::new()
            .and(absent)
            .and(Predicate::eq(members::USERNAME, "member1"))
            .and(None);

        assert_eq!(filter.len(), 1);
        assert_eq!(rendered(&filter), format!("{BASE} WHERE members.username = ?"));
    }

    #[test]
    fn all_absent_composes_to_neutral_filter() {
        let none_text: Option<Predicate> = None;
        let none_age: Option<Predicate> = None;
        let filter = Conjunction::new().and(none_text).and(none_age);

        assert!(filter.is_empty());
        assert_eq!(rendered(&filter), BASE);
    }

    #[test]
    fn operand_conversions() {
        assert_eq!(Operand::from("a"), Operand::Text("a".to_string()));
        assert_eq!(Operand::from("a".to_string()), Operand::Text("a".to_string()));
        assert_eq!(Operand::from(7), Operand::Integer(7));
    }
}
