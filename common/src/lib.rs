pub mod steamid;
pub mod tables;

pub use tables::{BatchSummary, MatchTables};
