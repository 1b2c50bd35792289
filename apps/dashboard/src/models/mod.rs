pub mod record;

pub use record::MatchRecord;
