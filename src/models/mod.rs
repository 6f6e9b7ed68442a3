pub mod query;
pub mod record;
pub mod stats;

pub use query::*;
pub use record::*;
pub use stats::*;
