//! Action helpers for the purchase funnel.
//!
//! Each helper is a pure async function over the page seam: a fixed
//! sequence of interactions and inline round-trip assertions, side effects
//! only. The scenario in [`purchase_journey`] sequences them.

mod confirmation;
mod journey;
mod logout;
mod payment;
mod signup;

pub use confirmation::{account_created, order_placed};
pub use journey::purchase_journey;
pub use logout::logout;
pub use payment::payment;
pub use signup::signup;

use crate::assert::expect;
use crate::page::Page;
use crate::result::ComprarResult;
use crate::wait::WaitOptions;
use tracing::debug;

/// Fill a field, then require it to read back exactly as written.
pub(crate) async fn fill_checked<P: Page + ?Sized>(
    page: &P,
    selector: &str,
    value: &str,
    waits: WaitOptions,
) -> ComprarResult<()> {
    debug!(selector, "fill");
    page.fill(selector, value).await?;
    expect(page, selector)
        .with_waits(waits)
        .to_have_value(value)
        .await
}

/// Select an option, then require the select to hold exactly that value.
pub(crate) async fn select_checked<P: Page + ?Sized>(
    page: &P,
    selector: &str,
    value: &str,
    waits: WaitOptions,
) -> ComprarResult<()> {
    debug!(selector, "select");
    page.select_option(selector, value).await?;
    expect(page, selector)
        .with_waits(waits)
        .to_have_value(value)
        .await
}

/// Wait for visibility, then click.
pub(crate) async fn click_visible<P: Page + ?Sized>(
    page: &P,
    selector: &str,
    waits: WaitOptions,
) -> ComprarResult<()> {
    debug!(selector, "click");
    expect(page, selector)
        .with_waits(waits)
        .to_be_visible()
        .await?;
    page.click(selector).await
}
