pub mod analysis_repository;
pub mod user_repository;
