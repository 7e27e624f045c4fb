use std::fmt;

/// A workspace directory entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Member {
    pub id: String,
    pub real_name: String,
    pub is_bot: bool,
}

impl Member {
    pub fn new(id: impl Into<String>, real_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            real_name: real_name.into(),
            is_bot: false,
        }
    }

    pub fn bot(mut self) -> Self {
        self.is_bot = true;
        self
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.real_name, self.id)
    }
}
