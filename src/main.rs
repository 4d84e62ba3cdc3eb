//! Command-line runner for the purchase suite.

use clap::Parser;
use comprar::session::Browser;
use comprar::{ComprarResult, DeviceProfile, JourneyPlan, SuiteConfig};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Run the purchase-to-logout journey against a live storefront.
#[derive(Debug, Parser)]
#[command(name = "comprar", version, about)]
struct Cli {
    /// Base URL of the target storefront
    #[arg(long, env = "COMPRAR_BASE_URL", default_value = comprar::DEFAULT_BASE_URL)]
    base_url: String,

    /// Run with a visible browser window
    #[arg(long, env = "COMPRAR_HEADED")]
    headed: bool,

    /// Disable the chromium sandbox (containers)
    #[arg(long, env = "COMPRAR_NO_SANDBOX")]
    no_sandbox: bool,

    /// Device emulation profile ("desktop-chrome" or "iphone-13")
    #[arg(long, env = "COMPRAR_DEVICE", default_value = "desktop-chrome")]
    device: String,

    /// Path to the chromium binary (auto-detected when omitted)
    #[arg(long, env = "COMPRAR_CHROMIUM_PATH")]
    chromium_path: Option<String>,

    /// Timeout for interactions and assertions, in milliseconds
    #[arg(long, default_value_t = 10_000)]
    action_timeout_ms: u64,

    /// Timeout for navigations, in milliseconds
    #[arg(long, default_value_t = 30_000)]
    navigation_timeout_ms: u64,

    /// Polling interval, in milliseconds
    #[arg(long, default_value_t = 100)]
    poll_interval_ms: u64,
}

impl Cli {
    fn into_config(self) -> ComprarResult<SuiteConfig> {
        let mut config = SuiteConfig::default()
            .with_base_url(self.base_url)
            .with_headless(!self.headed)
            .with_device(DeviceProfile::by_name(&self.device)?);
        if self.no_sandbox {
            config = config.with_no_sandbox();
        }
        config.chromium_path = self.chromium_path;
        config.action_timeout_ms = self.action_timeout_ms;
        config.navigation_timeout_ms = self.navigation_timeout_ms;
        config.poll_interval_ms = self.poll_interval_ms;
        Ok(config)
    }
}

async fn run(config: SuiteConfig) -> ComprarResult<()> {
    let browser = Browser::launch(config.clone()).await?;
    let page = browser.new_page().await?;

    let plan = JourneyPlan::random();
    info!(
        base_url = %config.base_url,
        device = config.device.name,
        email = %plan.email,
        quantity = plan.quantity,
        "starting purchase journey"
    );

    let outcome =
        comprar::purchase_journey(&page, &config.base_url, &plan, config.action_waits()).await;

    browser.close().await?;
    outcome
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("comprar=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = match cli.into_config() {
        Ok(config) => config,
        Err(err) => {
            error!("invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(config).await {
        Ok(()) => {
            info!("purchase journey passed");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("purchase journey failed: {err}");
            ExitCode::FAILURE
        }
    }
}
