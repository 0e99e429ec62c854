//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

use feedpub_core::PdsUrl;

/// Publish or delete an app.bsky.feed.generator record.
#[derive(Parser, Debug)]
#[command(name = "publish-feed")]
#[command(author, version = env!("FEEDPUB_VERSION"), about, long_about = None)]
#[command(after_help = "\
Examples:
  # Create a new feed
  publish-feed -u you.bsky.social -p APP_PASSWORD -n \"My Feed\" -d \"Description\" -s feeds.example.com

  # Update existing feed
  publish-feed -u you.bsky.social -p APP_PASSWORD -n \"Updated\" -d \"New desc\" -s feeds.example.com -r RKEY

  # Delete a feed
  publish-feed -u you.bsky.social -p APP_PASSWORD --delete -r RKEY")]
pub struct Cli {
    /// Bluesky handle (e.g., you.bsky.social)
    #[arg(short, long)]
    pub user: String,

    /// App password for the handle
    #[arg(short, long)]
    pub password: String,

    /// Feed display name (required for publish)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Feed description (required for publish)
    #[arg(short, long)]
    pub description: Option<String>,

    /// Path to avatar image (optional)
    #[arg(short, long)]
    pub image: Option<PathBuf>,

    /// Feed server hostname (e.g., feeds.example.com)
    #[arg(short, long)]
    pub server: Option<String>,

    /// Record rkey from Feed URI (at://.../RKEY)
    #[arg(short, long)]
    pub rkey: Option<String>,

    /// Delete the record specified by --rkey
    #[arg(long)]
    pub delete: bool,

    /// PDS base URL
    #[arg(long, env = "ATPROTO_PDS", default_value = "https://bsky.social")]
    pub pds: PdsUrl,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_short_flags() {
        let cli = Cli::try_parse_from([
            "publish-feed",
            "-u",
            "you.bsky.social",
            "-p",
            "pw",
            "-n",
            "My Feed",
            "-d",
            "About",
            "-s",
            "feeds.example.com",
            "-r",
            "abc123",
            "-i",
            "avatar.png",
        ])
        .unwrap();

        assert_eq!(cli.user, "you.bsky.social");
        assert_eq!(cli.name.as_deref(), Some("My Feed"));
        assert_eq!(cli.description.as_deref(), Some("About"));
        assert_eq!(cli.server.as_deref(), Some("feeds.example.com"));
        assert_eq!(cli.rkey.as_deref(), Some("abc123"));
        assert_eq!(cli.image, Some(PathBuf::from("avatar.png")));
        assert!(!cli.delete);
    }

    #[test]
    fn delete_flag_and_custom_pds() {
        let cli = Cli::try_parse_from([
            "publish-feed",
            "--user",
            "you.bsky.social",
            "--password",
            "pw",
            "--delete",
            "--rkey",
            "abc123",
            "--pds",
            "https://pds.example.com",
        ])
        .unwrap();

        assert!(cli.delete);
        assert_eq!(cli.pds.host(), Some("pds.example.com"));
    }

    #[test]
    fn user_and_password_are_required() {
        assert!(Cli::try_parse_from(["publish-feed", "-p", "pw"]).is_err());
        assert!(Cli::try_parse_from(["publish-feed", "-u", "you.bsky.social"]).is_err());
    }

    #[test]
    fn rejects_insecure_pds() {
        let result = Cli::try_parse_from([
            "publish-feed",
            "-u",
            "you.bsky.social",
            "-p",
            "pw",
            "--pds",
            "http://pds.example.com",
        ]);
        assert!(result.is_err());
    }
}
