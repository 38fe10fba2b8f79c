use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReviewRecord {
    pub id: u32,
    pub user: &'static str,
    pub comment: &'static str,
    pub rating: u8,
}
