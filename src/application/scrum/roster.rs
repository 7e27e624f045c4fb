//! Roster builder - who we expect an update from

use tracing::debug;

use crate::application::errors::BotError;
use crate::domain::entities::Roster;
use crate::domain::traits::ChatTransport;

/// Build the channel roster: users who are members of the channel and are
/// not bot accounts, keyed by id with their normalized real name as value
///
/// Both remote calls must succeed; a failure propagates instead of leaving
/// a half-built roster behind.
pub async fn build<T: ChatTransport + ?Sized>(
    transport: &T,
    channel: &str,
) -> Result<Roster, BotError> {
    let member_ids = transport.channel_members(channel).await?;
    let directory = transport.list_users().await?;

    let roster: Roster = directory
        .into_iter()
        .filter(|user| member_ids.iter().any(|id| id == &user.id) && !user.is_bot)
        .map(|user| (user.id, user.real_name))
        .collect();

    debug!(
        "Roster for {}: {} of {} members tracked",
        channel,
        roster.len(),
        member_ids.len()
    );
    Ok(roster)
}
