// Infrastructure layer module
// SQLite adapters for the domain repository contracts, schema setup and
// the demo data seed

pub mod repositories;
pub mod schema;
pub mod seed;
