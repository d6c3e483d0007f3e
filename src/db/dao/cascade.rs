/// Row counts removed by a cascading delete, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeletedRows {
    pub projects: u64,
    pub todos: u64,
    pub time_entries: u64,
    pub settings: u64,
}
