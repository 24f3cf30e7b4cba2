pub mod schema;
pub mod stats_log;

pub use schema::StatsRecord;
pub use stats_log::{format_record, record_for, total_score};
