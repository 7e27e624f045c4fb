//! Follow-up notifier - nudges members who have not replied yet

use tracing::info;

use crate::application::errors::BotError;
use crate::domain::entities::StatusTable;
use crate::domain::traits::ChatTransport;

const REMINDER_LINE: &str =
    "\n You still have not posted your daily scrum update, please do so now";
const SUCCESS_TEXT: &str = "SUCCESS: All users have posted their daily status update!";

/// Build the follow-up text and the count of members still pending
///
/// With pending members the text mentions each of them and appends the
/// reminder line; with none it is the success message.
pub fn compose(statuses: &StatusTable) -> (String, usize) {
    let pending: Vec<&str> = statuses.pending_ids().collect();
    if pending.is_empty() {
        return (SUCCESS_TEXT.to_string(), 0);
    }

    let mut text = String::new();
    for id in &pending {
        text.push_str(&format!(" <@{}>", id));
    }
    text.push_str(REMINDER_LINE);
    (text, pending.len())
}

/// Post the follow-up as a threaded reply under the prompt and return how
/// many members are still pending
pub async fn follow_up<T: ChatTransport + ?Sized>(
    transport: &T,
    channel: &str,
    thread_ts: &str,
    statuses: &StatusTable,
) -> Result<usize, BotError> {
    let (text, count) = compose(statuses);
    transport.post_thread_reply(channel, thread_ts, &text).await?;
    info!("Follow-up posted, {} member(s) still pending", count);
    Ok(count)
}
