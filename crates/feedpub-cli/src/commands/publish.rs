//! Create or update a feed generator record.

use tracing::{debug, info};

use feedpub_core::{AtUri, FeedGenerator, Pds, Rkey, Session};

use super::image;
use crate::error::CommandError;
use crate::output;
use crate::validate::PublishRequest;

/// Result of a successful publish.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishOutcome {
    Created { uri: AtUri },
    Updated { rkey: Rkey, uri: AtUri },
}

impl PublishOutcome {
    pub fn uri(&self) -> &AtUri {
        match self {
            PublishOutcome::Created { uri } | PublishOutcome::Updated { uri, .. } => uri,
        }
    }
}

/// Publish the feed generator record described by `request`.
///
/// With an rkey the record must already exist and is replaced; without one
/// a new record is created and the PDS assigns its key.
pub async fn publish<P: Pds>(
    pds: &P,
    request: PublishRequest,
) -> Result<PublishOutcome, CommandError> {
    let session = pds
        .login(request.credentials)
        .await
        .map_err(CommandError::Publish)?;

    let avatar = match &request.image {
        Some(path) => {
            let data = image::read(path).await?;
            let mime_type = image::mime_type_for(path);
            debug!(path = %path.display(), mime_type, size = data.len(), "Uploading avatar");
            let blob = session
                .upload_blob(data, mime_type)
                .await
                .map_err(CommandError::ImageUpload)?;
            Some(blob)
        }
        None => None,
    };

    let record = FeedGenerator {
        did: request.service_did,
        display_name: request.display_name,
        description: request.description,
        avatar,
        created_at: session.current_time(),
    };
    let value = record.to_record_value().map_err(CommandError::Publish)?;

    match request.rkey {
        Some(rkey) => {
            let target = AtUri::from_parts(
                session.did().clone(),
                FeedGenerator::collection(),
                rkey.clone(),
            );

            if let Err(source) = session.get_record(&target).await {
                return Err(CommandError::UpdateTargetMissing { rkey, source });
            }

            let uri = session
                .put_record(&target, &value)
                .await
                .map_err(CommandError::Publish)?;
            info!(%uri, "Updated feed generator record");
            Ok(PublishOutcome::Updated { rkey, uri })
        }
        None => {
            let uri = session
                .create_record(&FeedGenerator::collection(), &value)
                .await
                .map_err(CommandError::Publish)?;
            info!(%uri, "Created feed generator record");
            Ok(PublishOutcome::Created { uri })
        }
    }
}

pub(super) async fn run<P: Pds>(pds: &P, request: PublishRequest) -> Result<(), CommandError> {
    let outcome = publish(pds, request).await?;

    match &outcome {
        PublishOutcome::Created { .. } => output::success("Successfully created new feed!"),
        PublishOutcome::Updated { rkey, .. } => {
            output::success(&format!("Successfully updated feed record: {}", rkey))
        }
    }
    output::field("Feed URI", &outcome.uri().to_string());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fake::{ASSIGNED_RKEY, Call, FakePds, NOW, REPO};
    use feedpub_core::{Credentials, Did};
    use serde_json::json;
    use std::path::PathBuf;

    fn request(rkey: Option<&str>, image: Option<PathBuf>) -> PublishRequest {
        PublishRequest {
            credentials: Credentials::new("a.bsky.social", "x"),
            display_name: "F".to_string(),
            description: "D".to_string(),
            service_did: Did::web("feeds.x.com").unwrap(),
            rkey: rkey.map(|r| Rkey::new(r).unwrap()),
            image,
        }
    }

    #[tokio::test]
    async fn create_skips_existence_check() {
        let pds = FakePds::new();

        let outcome = publish(&pds, request(None, None)).await.unwrap();

        assert_eq!(
            outcome.uri().to_string(),
            format!("at://{REPO}/app.bsky.feed.generator/{ASSIGNED_RKEY}")
        );
        assert!(matches!(outcome, PublishOutcome::Created { .. }));
        assert_eq!(
            pds.calls(),
            vec![
                Call::Login("a.bsky.social".to_string()),
                Call::CreateRecord(json!({
                    "$type": "app.bsky.feed.generator",
                    "did": "did:web:feeds.x.com",
                    "displayName": "F",
                    "description": "D",
                    "createdAt": NOW,
                })),
            ]
        );
    }

    #[tokio::test]
    async fn update_replaces_existing_record() {
        let pds = FakePds::new().with_record("3m3fxwkhzu42c");

        let outcome = publish(&pds, request(Some("3m3fxwkhzu42c"), None))
            .await
            .unwrap();

        let PublishOutcome::Updated { rkey, uri } = outcome else {
            panic!("expected update");
        };
        assert_eq!(rkey.as_str(), "3m3fxwkhzu42c");
        assert_eq!(uri.rkey().as_str(), "3m3fxwkhzu42c");

        let calls = pds.calls();
        assert_eq!(calls[1], Call::GetRecord("3m3fxwkhzu42c".to_string()));
        assert!(matches!(&calls[2], Call::PutRecord(rkey, _) if rkey == "3m3fxwkhzu42c"));
        assert_eq!(calls.len(), 3);
    }

    #[tokio::test]
    async fn update_of_missing_record_writes_nothing() {
        let pds = FakePds::new();

        let err = publish(&pds, request(Some("abc123"), None))
            .await
            .unwrap_err();

        assert!(matches!(err, CommandError::UpdateTargetMissing { .. }));
        assert_eq!(
            err.to_string(),
            "Error: Feed record \"abc123\" not found. Cannot update non-existent record."
        );
        assert!(
            pds.calls()
                .iter()
                .all(|c| !matches!(c, Call::PutRecord(..) | Call::CreateRecord(_)))
        );
    }

    #[tokio::test]
    async fn login_failure_is_a_publish_error() {
        let pds = FakePds::new().rejecting_login();

        let err = publish(&pds, request(None, None)).await.unwrap_err();

        assert!(matches!(err, CommandError::Publish(_)));
        assert!(err.to_string().starts_with("Error publishing feed: "));
        assert_eq!(pds.calls().len(), 1);
    }

    #[tokio::test]
    async fn avatar_is_uploaded_and_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avatar.png");
        std::fs::write(&path, b"\x89PNG fake").unwrap();
        let pds = FakePds::new();

        publish(&pds, request(None, Some(path))).await.unwrap();

        let calls = pds.calls();
        assert_eq!(
            calls[1],
            Call::UploadBlob {
                mime_type: "image/png".to_string(),
                len: 9,
            }
        );
        let Call::CreateRecord(value) = &calls[2] else {
            panic!("expected create, got {:?}", calls[2]);
        };
        assert_eq!(
            value["avatar"],
            json!({
                "$type": "blob",
                "ref": { "$link": "bafkreiavatar" },
                "mimeType": "image/png",
                "size": 9,
            })
        );
    }

    #[tokio::test]
    async fn missing_avatar_stops_before_any_write() {
        let dir = tempfile::tempdir().unwrap();
        let pds = FakePds::new();

        let err = publish(&pds, request(None, Some(dir.path().join("gone.jpg"))))
            .await
            .unwrap_err();

        assert!(matches!(err, CommandError::ImageNotFound { .. }));
        assert_eq!(pds.calls(), vec![Call::Login("a.bsky.social".to_string())]);
    }

    #[tokio::test]
    async fn rejected_upload_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avatar.jpg");
        std::fs::write(&path, b"jpeg").unwrap();
        let pds = FakePds::new().rejecting_upload();

        let err = publish(&pds, request(None, Some(path))).await.unwrap_err();

        assert!(matches!(err, CommandError::ImageUpload(_)));
        assert!(err.to_string().starts_with("Error uploading image: "));
        assert!(!pds.calls().iter().any(|c| matches!(c, Call::CreateRecord(_))));
    }
}
