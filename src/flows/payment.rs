//! Payment.

use super::{click_visible, fill_checked};
use crate::assert::expect_page;
use crate::data::JourneyPlan;
use crate::page::Page;
use crate::result::ComprarResult;
use crate::selectors::payment as sel;
use crate::wait::WaitOptions;
use tracing::info;

/// Pay for the order from the checkout page.
///
/// Navigates to the payment page, fills the name on card with the same
/// identity used at signup, then the digits-only card number, CVC and the
/// non-expired expiry pair, round-trip asserting each field, and submits.
pub async fn payment<P: Page + ?Sized>(
    page: &P,
    plan: &JourneyPlan,
    waits: WaitOptions,
) -> ComprarResult<()> {
    info!("payment");

    click_visible(page, sel::PLACE_ORDER, waits).await?;
    expect_page(page)
        .with_waits(waits)
        .to_have_url_containing(sel::PAYMENT_ROUTE)
        .await?;

    fill_checked(page, sel::NAME_ON_CARD, &plan.identity.full_name(), waits).await?;
    fill_checked(page, sel::CARD_NUMBER, &plan.card.number, waits).await?;
    fill_checked(page, sel::CVC, &plan.card.cvc, waits).await?;
    fill_checked(page, sel::EXPIRY_MONTH, &plan.card.expiry_month, waits).await?;
    fill_checked(page, sel::EXPIRY_YEAR, &plan.card.expiry_year, waits).await?;

    click_visible(page, sel::PAY_BUTTON, waits).await
}
