pub mod backend;
pub mod share;
pub mod store;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use share::{decode_review, encode_review};
pub use store::{ReviewStore, StoreError};
