mod memory_repositories;
mod pg_dubbing_repository;
mod pg_pool;
mod pg_upload_repository;

pub use memory_repositories::{MemoryDubbingRepository, MemoryUploadRepository};
pub use pg_dubbing_repository::PgDubbingRepository;
pub use pg_pool::create_pool;
pub use pg_upload_repository::PgUploadRepository;
