#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    DatesRequired,

    // === TOGGL MESSAGES ===
    FetchingUser,
    FetchingProjects,
    FetchingTimeEntries {
        start: String,
        end: String,
    },
    TogglRequestFailed(String), // endpoint
    TogglDecodeFailed(String),  // endpoint
    TimeEntriesFetched(usize),
    ProjectsFetched(usize),

    // === MAPPING MESSAGES ===
    EntryWithoutTags(i64), // entry id
    RunningEntry(i64),     // entry id
    EntriesGrouped {
        entries: usize,
        rows: usize,
    },

    // === EXPORT MESSAGES ===
    WritingFile(String),      // path
    FileCreateFailed(String), // path
    HeaderWriteFailed,
    RecordWriteFailed,
    ReportWritten {
        path: String,
        rows: usize,
    },
}
