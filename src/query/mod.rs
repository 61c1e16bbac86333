// Typed query composition
// Hand-written column metadata plus the conjunctive filter builder the
// repositories use to assemble dynamic WHERE clauses

pub mod columns;
pub mod predicate;

pub use columns::Column;
pub use predicate::{Comparison, Conjunction, Operand, Predicate};
