use clap::{ArgGroup, Parser};

/// Confirm an email address from a verification link
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("source").args(["link", "token"])))]
pub struct Cli {
    /// Verification link as received by email
    #[arg(short = 'l', long)]
    pub link: Option<String>,

    /// Raw verification token
    #[arg(short = 't', long)]
    pub token: Option<String>,

    /// Address to resend the link to if it has expired
    #[arg(short = 'e', long)]
    pub email: Option<String>,

    /// Print every flow snapshot as a JSON line
    #[arg(long)]
    pub json: bool,

    /// Override the delay before redirecting, in milliseconds
    #[arg(long)]
    pub redirect_delay_ms: Option<u64>,

    /// Override the remote service base URL (implies the HTTP provider)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Log filter directive, overriding the configured level
    #[arg(short = 'v', long)]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_link() {
        let cli = Cli::try_parse_from([
            "eduverify",
            "--link",
            "https://learn.example.org/verify-email?token=abc123",
        ])
        .unwrap();

        assert_eq!(
            cli.link.as_deref(),
            Some("https://learn.example.org/verify-email?token=abc123")
        );
        assert!(cli.token.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_link_and_token_conflict() {
        let result = Cli::try_parse_from(["eduverify", "--link", "/verify-email", "--token", "abc"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_source_is_accepted() {
        let cli = Cli::try_parse_from(["eduverify", "--json"]).unwrap();
        assert!(cli.link.is_none());
        assert!(cli.token.is_none());
        assert!(cli.json);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "eduverify",
            "-t",
            "old999",
            "-e",
            "student@example.org",
            "--redirect-delay-ms",
            "500",
            "--api-url",
            "http://127.0.0.1:9000/api",
        ])
        .unwrap();

        assert_eq!(cli.token.as_deref(), Some("old999"));
        assert_eq!(cli.email.as_deref(), Some("student@example.org"));
        assert_eq!(cli.redirect_delay_ms, Some(500));
        assert_eq!(cli.api_url.as_deref(), Some("http://127.0.0.1:9000/api"));
    }
}
