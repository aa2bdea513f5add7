pub mod db;
pub mod keep_alive;
pub mod rate_limit;
pub mod repository;
