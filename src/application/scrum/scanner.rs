//! Reply scanner - detects qualifying status updates in a thread

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::domain::entities::{ChannelMessage, StatusTable};

// The expected update shape: a "1." line, then a "2." line, then a "3."
// line. Anything may follow the numbers on each line; anything may
// surround the block.
static UPDATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"1\.(.*)\n2\.(.*)\n3\.").expect("update pattern is valid"));

/// Whether a reply text counts as a full status update
pub fn qualifies(text: &str) -> bool {
    UPDATE_RE.is_match(text)
}

/// Scan thread replies and mark tracked members who posted a qualifying
/// update as replied
///
/// Replies from authors outside the status table and non-qualifying
/// replies are ignored; there is no partial credit. Re-scanning the same
/// thread on a later round can only add replied marks, never remove them.
pub fn scan_replies(replies: &[ChannelMessage], statuses: &mut StatusTable) {
    for reply in replies {
        let Some(user) = reply.user.as_deref() else {
            continue;
        };
        if statuses.is_tracked(user) && qualifies(&reply.text) {
            statuses.mark_replied(user);
        }
    }
}
