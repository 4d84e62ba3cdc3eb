//! The purchase-to-logout scenario.

use super::{account_created, click_visible, fill_checked, logout, order_placed, payment, signup};
use crate::assert::{expect, expect_page};
use crate::data::JourneyPlan;
use crate::page::Page;
use crate::result::ComprarResult;
use crate::selectors::{auth, shop};
use crate::wait::WaitOptions;
use tracing::info;

/// Run one linear purchase-to-logout journey.
///
/// Browses to the third catalog item, adds a random quantity to the cart,
/// signs up when checkout demands authentication, pays, validates both
/// confirmation pages and logs out. Strictly sequential: the first
/// assertion that does not materialize within the wait budget aborts the
/// run.
pub async fn purchase_journey<P: Page + ?Sized>(
    page: &P,
    base_url: &str,
    plan: &JourneyPlan,
    waits: WaitOptions,
) -> ComprarResult<()> {
    let quantity = plan.quantity.to_string();

    info!(step = 1, "open the storefront");
    page.goto(&format!("{}/", base_url.trim_end_matches('/'))).await?;
    expect_page(page)
        .with_waits(waits)
        .to_have_title_matching("Automation Exercise")
        .await?;

    info!(step = 2, "browse the catalog");
    page.click(shop::PRODUCTS_LINK).await?;
    expect_page(page)
        .with_waits(waits)
        .to_have_url_containing(shop::PRODUCTS_ROUTE)
        .await?;

    info!(step = 3, "open the third product");
    click_visible(page, shop::THIRD_PRODUCT_LINK, waits).await?;
    expect_page(page)
        .with_waits(waits)
        .to_have_url_containing(shop::THIRD_PRODUCT_ROUTE)
        .await?;

    info!(step = 4, quantity = plan.quantity, "set the quantity");
    fill_checked(page, shop::QUANTITY_INPUT, &quantity, waits).await?;

    info!(step = 5, "add to cart and open the cart");
    click_visible(page, shop::ADD_TO_CART_BUTTON, waits).await?;
    click_visible(page, shop::CART_MODAL_VIEW_CART, waits).await?;
    expect_page(page)
        .with_waits(waits)
        .to_have_url_containing(shop::CART_ROUTE)
        .await?;
    expect(page, shop::CART_QUANTITY)
        .with_waits(waits)
        .to_be_visible()
        .await?;
    expect(page, shop::CART_QUANTITY)
        .with_waits(waits)
        .to_have_text(&quantity)
        .await?;

    info!(step = 6, "checkout without a session");
    click_visible(page, shop::PROCEED_TO_CHECKOUT, waits).await?;
    click_visible(page, shop::CHECKOUT_MODAL_LOGIN, waits).await?;
    expect_page(page)
        .with_waits(waits)
        .to_have_url_containing(auth::LOGIN_ROUTE)
        .await?;
    expect_page(page)
        .with_waits(waits)
        .to_have_title_matching("(?i)login")
        .await?;

    info!(step = 7, "sign up");
    signup(page, plan, waits).await?;

    info!(step = 8, "validate account created");
    account_created(page, waits).await?;

    info!(step = 9, "return to the cart and checkout again");
    click_visible(page, auth::CONTINUE_BUTTON, waits).await?;
    click_visible(page, shop::NAV_CART_LINK, waits).await?;
    expect_page(page)
        .with_waits(waits)
        .to_have_url_containing(shop::CART_ROUTE)
        .await?;
    click_visible(page, shop::PROCEED_TO_CHECKOUT, waits).await?;

    info!(step = 10, "leave an order comment");
    expect(page, shop::ORDER_COMMENT)
        .with_waits(waits)
        .to_be_visible()
        .await?;
    fill_checked(page, shop::ORDER_COMMENT, &plan.order_comment, waits).await?;

    info!(step = 11, "pay");
    payment(page, plan, waits).await?;

    info!(step = 12, "validate order placed and log out");
    order_placed(page, waits).await?;
    logout(page, waits).await
}
