//! Delete a feed generator record.

use tracing::info;

use feedpub_core::{AtUri, FeedGenerator, Pds, Session};

use crate::error::CommandError;
use crate::output;
use crate::validate::DeleteRequest;

/// Delete the feed generator record at `request.rkey` in the caller's repo.
///
/// The record is looked up first; a failed lookup is reported as a missing
/// record and no delete is sent.
pub async fn delete<P: Pds>(pds: &P, request: DeleteRequest) -> Result<AtUri, CommandError> {
    let session = pds
        .login(request.credentials)
        .await
        .map_err(CommandError::Delete)?;

    let uri = AtUri::from_parts(
        session.did().clone(),
        FeedGenerator::collection(),
        request.rkey.clone(),
    );

    if let Err(source) = session.get_record(&uri).await {
        return Err(CommandError::DeleteTargetMissing {
            rkey: request.rkey,
            source,
        });
    }

    session
        .delete_record(&uri)
        .await
        .map_err(CommandError::Delete)?;
    info!(%uri, "Deleted feed generator record");

    Ok(uri)
}

pub(super) async fn run<P: Pds>(pds: &P, request: DeleteRequest) -> Result<(), CommandError> {
    let uri = delete(pds, request).await?;
    output::success(&format!(
        "Successfully deleted feed record: {}",
        uri.rkey()
    ));
    Ok(())
}
