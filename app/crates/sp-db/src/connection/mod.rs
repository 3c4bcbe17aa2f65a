pub mod local_database;
