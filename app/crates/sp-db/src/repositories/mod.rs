pub mod local_entry_repository;
pub mod partition_repository;
