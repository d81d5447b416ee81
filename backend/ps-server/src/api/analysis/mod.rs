pub mod analysis;
pub mod analysis_response;
pub mod analyze_request;
pub mod currency;
pub mod history_entry_dto;
pub mod history_query;
pub mod history_response;
