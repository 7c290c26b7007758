#[derive(Clone, Debug, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One match per line.
    #[default]
    Text,
    /// `offset:length<TAB>text`, one match per line.
    Offsets,
    /// A JSON array of `{offset, length, text}` objects (`serde` feature).
    Json,
}

#[derive(Clone, Debug)]
pub struct Options {
    /// Re-run the query from just past each match until it stops matching.
    /// When disabled, a step that finds nothing is an error.
    pub all_matches: bool,
    /// Enable the query log. Use `run_query_with_log` to retrieve it.
    pub logging: bool,
    /// Context window size used when building log context snippets.
    /// Controls how many bytes are captured on both sides of the position.
    pub log_context_window: usize,
    /// How `emit_matches` renders results.
    pub output: OutputFormat,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            all_matches: false,
            logging: false,
            log_context_window: 10,
            output: OutputFormat::Text,
        }
    }
}
