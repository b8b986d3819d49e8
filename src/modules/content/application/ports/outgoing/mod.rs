mod backend_probe;
mod record_store;

pub use backend_probe::BackendProbe;
pub use record_store::{RecordStore, StoreError};
