pub mod backfill;
pub mod recommendations;
