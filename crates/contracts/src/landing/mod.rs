pub mod stats;

pub use stats::{StatEntry, UNION_STATS};
