pub mod codec;
pub mod error;
pub mod file_store;
pub mod key_value_store;
pub mod load_result;
pub mod memory_store;
pub mod profile_records;
pub mod profile_repository;
pub mod record_value;

#[cfg(test)]
mod tests;

pub use codec::{RECORD_VERSION, decode, encode, try_decode};
pub use error::{Result, StoreError};
pub use file_store::FileStore;
pub use key_value_store::KeyValueStore;
pub use load_result::LoadResult;
pub use memory_store::MemoryStore;
pub use profile_records::ProfileRecords;
pub use profile_repository::ProfileRepository;
pub use record_value::RecordValue;
