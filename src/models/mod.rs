pub mod bug;
pub mod dashboard;
pub mod docs;
pub mod draft;
pub mod filter;
pub mod stats;
