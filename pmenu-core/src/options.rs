/// Header label shown in front of the query.
pub const DEFAULT_PROMPT: &str = "[Search]: ";

/// Longest query the user can type, in characters.
pub const MAX_QUERY_LENGTH: usize = 60;

/// Tunables of a menu invocation. The default is the stock pmenu look.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOptions {
    pub prompt: String,
    pub max_query_length: usize,
    /// Query the menu opens with; cut to `max_query_length`.
    pub initial_query: String,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            max_query_length: MAX_QUERY_LENGTH,
            initial_query: String::new(),
        }
    }
}

impl MenuOptions {
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_max_query_length(mut self, max_query_length: usize) -> Self {
        self.max_query_length = max_query_length;
        self
    }

    pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
        self.initial_query = query.into();
        self
    }
}
