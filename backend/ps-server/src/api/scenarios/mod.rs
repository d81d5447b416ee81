pub mod scenario_list_response;
pub mod scenarios;
