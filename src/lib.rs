//! Comprar: an end-to-end purchase suite for the Automation Exercise
//! storefront.
//!
//! One run walks a single linear funnel: browse the catalog, open the third
//! product, add a random quantity to the cart, sign up with a freshly
//! generated identity when checkout demands authentication, pay with a
//! generated card, validate both confirmation pages and log out. Every form
//! field is round-trip asserted: written, read back, compared exactly.
//!
//! # Example
//!
//! ```no_run
//! use comprar::{purchase_journey, JourneyPlan, SuiteConfig};
//!
//! # async fn run() -> comprar::ComprarResult<()> {
//! let config = SuiteConfig::from_env()?;
//! let browser = comprar::session::Browser::launch(config.clone()).await?;
//! let page = browser.new_page().await?;
//!
//! let plan = JourneyPlan::random();
//! purchase_journey(&page, &config.base_url, &plan, config.action_waits()).await?;
//!
//! browser.close().await?;
//! # Ok(())
//! # }
//! ```
//!
//! The flows are written against the [`Page`] trait, so they run unchanged
//! against a scripted [`MockPage`] in tests and a real Chromium tab
//! ([`session::LivePage`], behind the `browser` feature) in anger.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod assert;
pub mod config;
pub mod data;
pub mod flows;
pub mod page;
pub mod result;
pub mod selectors;
#[cfg(feature = "browser")]
pub mod session;
pub mod wait;

pub use assert::{expect, expect_page, Expectation, PageExpectation};
pub use config::{DeviceProfile, SuiteConfig, DEFAULT_BASE_URL};
pub use data::{Identity, JourneyPlan, PaymentCard, Profile};
pub use flows::{account_created, logout, order_placed, payment, purchase_journey, signup};
pub use page::{MockPage, Page};
pub use result::{ComprarError, ComprarResult};
#[cfg(feature = "browser")]
pub use session::{Browser, LivePage};
pub use wait::{Poller, WaitOptions};
