//! Record model and the in-memory registry of finalized records.

mod record;
mod store;

pub use record::{Draft, Field, Record};
pub use store::RecordStore;
