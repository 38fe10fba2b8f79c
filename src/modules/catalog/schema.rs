use serde::Serialize;

use super::model::ReviewRecord;

#[derive(Debug, Serialize)]
pub struct ReviewListResponse {
    pub reviews: &'static [ReviewRecord],
}
