//! `eduverify`: confirm an email address from a verification link in the terminal

mod args;
mod logging;
mod navigator;
mod render;

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use ev_core::{
    FlowSnapshot, Navigator, TeardownHandle, VerificationApi, VerificationController,
    VerificationError, VerificationState,
};
use ev_infra::create_verification_api;
use ev_shared::AppConfig;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use args::Cli;
use navigator::ConsoleNavigator;
use render::SnapshotPrinter;

const EXIT_OK: u8 = 0;
const EXIT_FAILED: u8 = 1;
/// Exit status when the flow was interrupted with Ctrl-C
const EXIT_INTERRUPTED: u8 = 130;
/// Exit status when the link expired and no new one was sent
const EXIT_EXPIRED: u8 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = AppConfig::load().context("failed to load configuration")?;
    let config = apply_overrides(config, &cli);
    logging::init(&config.logging, cli.log_level.as_deref());

    info!(
        environment = %config.environment,
        provider = %config.remote.provider,
        redirect_delay_ms = config.verification.redirect_delay_ms,
        "Starting eduverify"
    );

    let api = create_verification_api(&config.remote)
        .context("failed to create verification client")?;
    let navigator = Arc::new(ConsoleNavigator::new(cli.json));
    let mut controller =
        VerificationController::new(api, Arc::clone(&navigator), config.verification.clone());

    let printer = spawn_printer(controller.subscribe(), cli.json);
    let handle = controller.teardown_handle();
    spawn_interrupt_listener(handle.clone());

    let state = match (&cli.link, &cli.token) {
        (Some(link), _) => controller.start_from_link(link).await,
        (None, token) => controller.start(token.as_deref()).await,
    };

    let resent = match state {
        VerificationState::Success => {
            if !controller.wait_for_redirect().await {
                debug!("Redirect did not fire");
            }
            false
        }
        VerificationState::Expired => {
            resend_until_sent(&mut controller, cli.email.as_deref(), &handle).await?
        }
        _ => false,
    };

    let interrupted = controller.is_torn_down();
    drop(controller);
    printer.await.context("snapshot printer failed")?;

    let code = exit_code(state, resent, navigator.has_navigated(), interrupted);
    if interrupted {
        // A pending stdin read would otherwise hold the runtime open
        std::process::exit(i32::from(code));
    }
    Ok(ExitCode::from(code))
}

fn apply_overrides(mut config: AppConfig, cli: &Cli) -> AppConfig {
    if let Some(delay) = cli.redirect_delay_ms {
        config.verification.redirect_delay_ms = delay;
    }
    if let Some(url) = &cli.api_url {
        config.remote.provider = String::from("http");
        config.remote.base_url = url.clone();
    }
    config
}

fn spawn_printer(mut updates: watch::Receiver<FlowSnapshot>, json: bool) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut printer = SnapshotPrinter::new(json);
        while updates.changed().await.is_ok() {
            let snapshot = updates.borrow_and_update().clone();
            if let Some(line) = printer.render(&snapshot) {
                println!("{}", line);
            }
        }
    })
}

fn spawn_interrupt_listener(handle: TeardownHandle) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, abandoning verification flow");
            handle.teardown();
        }
    });
}

/// Offer a new link until one is sent
///
/// With `email` the resend is attempted once. Otherwise addresses are read
/// from stdin until a resend succeeds, input ends, or the flow is torn down.
async fn resend_until_sent<A, N>(
    controller: &mut VerificationController<A, N>,
    email: Option<&str>,
    handle: &TeardownHandle,
) -> anyhow::Result<bool>
where
    A: VerificationApi + ?Sized,
    N: Navigator + ?Sized + 'static,
{
    if let Some(email) = email {
        return Ok(controller.resend(email).await.is_ok());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        // Let the printer report the current snapshot before prompting
        tokio::task::yield_now().await;
        eprint!("Email address for a new verification link: ");
        std::io::stderr().flush()?;

        let line = tokio::select! {
            _ = handle.torn_down() => return Ok(false),
            line = lines.next_line() => line.context("failed to read from stdin")?,
        };
        let Some(line) = line else {
            return Ok(false);
        };

        match controller.resend(&line).await {
            Ok(_) => return Ok(true),
            Err(VerificationError::TornDown) => return Ok(false),
            Err(e) => debug!(error = %e, "Resend not accepted"),
        }
    }
}

fn exit_code(state: VerificationState, resent: bool, navigated: bool, interrupted: bool) -> u8 {
    if interrupted {
        return EXIT_INTERRUPTED;
    }
    match state {
        VerificationState::Success if navigated => EXIT_OK,
        VerificationState::Expired if resent => EXIT_OK,
        VerificationState::Expired => EXIT_EXPIRED,
        _ => EXIT_FAILED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ev_shared::Environment;

    #[test]
    fn test_overrides_apply_to_config() {
        let cli = Cli::try_parse_from([
            "eduverify",
            "--redirect-delay-ms",
            "250",
            "--api-url",
            "http://127.0.0.1:9000/api",
        ])
        .unwrap();

        let config = apply_overrides(AppConfig::for_environment(Environment::Development), &cli);

        assert_eq!(config.verification.redirect_delay_ms, 250);
        assert_eq!(config.remote.provider, "http");
        assert_eq!(config.remote.base_url, "http://127.0.0.1:9000/api");
    }

    #[test]
    fn test_no_overrides_keep_config() {
        let cli = Cli::try_parse_from(["eduverify"]).unwrap();
        let original = AppConfig::for_environment(Environment::Development);

        let config = apply_overrides(original.clone(), &cli);

        assert_eq!(config.verification, original.verification);
        assert_eq!(config.remote, original.remote);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(VerificationState::Success, false, true, false), EXIT_OK);
        assert_eq!(exit_code(VerificationState::Success, false, false, false), EXIT_FAILED);
        assert_eq!(exit_code(VerificationState::Expired, true, false, false), EXIT_OK);
        assert_eq!(exit_code(VerificationState::Expired, false, false, false), EXIT_EXPIRED);
        assert_eq!(exit_code(VerificationState::Error, false, false, false), EXIT_FAILED);
        assert_eq!(exit_code(VerificationState::Success, false, true, true), EXIT_INTERRUPTED);
    }
}
