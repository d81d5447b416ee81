use crate::api::analysis::history_entry_dto::HistoryEntryDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub analyses: Vec<HistoryEntryDto>,
}
