pub mod docs;
pub mod search;
pub mod seed;
pub mod stats;
pub mod store;
pub mod validation;
