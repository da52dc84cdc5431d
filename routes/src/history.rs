//! History providers backing the navigation dispatcher

use tracing::warn;

/// where the dispatcher reads and records the current location
///
/// paths handed to a provider are already routed paths (`/lets-post`), never
/// full urls.
pub trait History {
    fn current_path(&self) -> String;

    fn push(&mut self, path: String);

    fn replace(&mut self, path: String);

    fn can_go_back(&self) -> bool;

    fn can_go_forward(&self) -> bool;

    fn go_back(&mut self);

    fn go_forward(&mut self);

    /// location string a link should point at for this path
    fn href(&self, path: &str) -> String {
        path.to_string()
    }
}

/// keeps the whole history in memory; starts on the landing path
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    current: String,
    past: Vec<String>,
    future: Vec<String>,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::starting_at("/")
    }
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(path: impl Into<String>) -> Self {
        Self {
            current: path.into(),
            past: Vec::new(),
            future: Vec::new(),
        }
    }
}

fn is_protocol_relative(path: &str) -> bool {
    if path.starts_with("//") {
        warn!(path, "refusing to navigate to a path starting with `//`");
        return true;
    }
    false
}

impl History for MemoryHistory {
    fn current_path(&self) -> String {
        self.current.clone()
    }

    fn push(&mut self, path: String) {
        if is_protocol_relative(&path) {
            return;
        }

        let previous = std::mem::replace(&mut self.current, path);
        self.past.push(previous);
        self.future.clear();
    }

    fn replace(&mut self, path: String) {
        if is_protocol_relative(&path) {
            return;
        }
        self.current = path;
    }

    fn can_go_back(&self) -> bool {
        !self.past.is_empty()
    }

    fn can_go_forward(&self) -> bool {
        !self.future.is_empty()
    }

    fn go_back(&mut self) {
        if let Some(previous) = self.past.pop() {
            let current = std::mem::replace(&mut self.current, previous);
            self.future.push(current);
        }
    }

    fn go_forward(&mut self) {
        if let Some(next) = self.future.pop() {
            let current = std::mem::replace(&mut self.current, next);
            self.past.push(current);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_starts_on_landing_path() {
        let history = MemoryHistory::new();

        assert_eq!(history.current_path(), "/");
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());
    }

    #[rstest]
    fn test_back_and_forward() {
        let mut history = MemoryHistory::new();
        history.push("/lets-post".to_string());
        history.push("/nested-requests".to_string());

        history.go_back();
        assert_eq!(history.current_path(), "/lets-post");

        history.go_back();
        assert_eq!(history.current_path(), "/");
        assert!(!history.can_go_back());

        history.go_forward();
        assert_eq!(history.current_path(), "/lets-post");
        assert!(history.can_go_forward());
    }

    #[rstest]
    fn test_push_clears_forward_stack() {
        let mut history = MemoryHistory::new();
        history.push("/lets-post".to_string());
        history.go_back();

        history.push("/nested-requests".to_string());

        assert!(!history.can_go_forward());
        assert_eq!(history.current_path(), "/nested-requests");
    }

    #[rstest]
    fn test_replace_keeps_past() {
        let mut history = MemoryHistory::new();
        history.push("/lets-post".to_string());

        history.replace("/nested-requests".to_string());
        history.go_back();

        assert_eq!(history.current_path(), "/");
    }

    #[rstest]
    fn test_rejects_protocol_relative_paths() {
        let mut history = MemoryHistory::new();

        history.push("//evil.example".to_string());
        history.replace("//evil.example".to_string());

        assert_eq!(history.current_path(), "/");
        assert!(!history.can_go_back());
    }
}
