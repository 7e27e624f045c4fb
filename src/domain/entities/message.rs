/// A message observed in a channel or thread
///
/// `ts` is the platform timestamp string, which doubles as the message id
/// and, for a thread root, as the thread id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMessage {
    pub ts: String,
    pub user: Option<String>,
    pub text: String,
}

impl ChannelMessage {
    pub fn new(ts: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            ts: ts.into(),
            user: None,
            text: text.into(),
        }
    }

    pub fn from_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }
}
