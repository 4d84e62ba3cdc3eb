//! Confirmation-page validations. Pure assertion steps, no mutation.

use crate::assert::{expect, expect_page};
use crate::page::Page;
use crate::result::ComprarResult;
use crate::selectors::{auth, payment};
use crate::wait::WaitOptions;
use tracing::info;

const ACCOUNT_CREATED_TITLE: &str = "Account Created!";
const ACCOUNT_CREATED_P1: &str =
    "Congratulations! Your new account has been successfully created!";
const ACCOUNT_CREATED_P2: &str = "You can now take advantage of member privileges to enhance \
     your online shopping experience with us.";

const ORDER_PLACED_TITLE: &str = "Order Placed!";
const ORDER_CONFIRMED_TEXT: &str = "Congratulations! Your order has been confirmed!";

const STYLE_GREEN: &str = "green";
const STYLE_FONT_SIZE: &str = r"(?i)font-size:\s*20px";
const STYLE_GARAMOND: &str = "(?i)garamond";

/// Validate the account-created confirmation page: exact route suffix, the
/// green "Account Created!" heading, and the two congratulatory paragraphs
/// at their fixed positions.
pub async fn account_created<P: Page + ?Sized>(
    page: &P,
    waits: WaitOptions,
) -> ComprarResult<()> {
    info!("validate account created");

    expect_page(page)
        .with_waits(waits)
        .to_have_url_containing(auth::ACCOUNT_CREATED_ROUTE)
        .await?;

    expect(page, auth::ACCOUNT_CREATED_TITLE)
        .with_waits(waits)
        .to_be_visible()
        .await?;
    expect(page, auth::ACCOUNT_CREATED_TITLE)
        .with_waits(waits)
        .to_have_text(ACCOUNT_CREATED_TITLE)
        .await?;
    expect(page, auth::ACCOUNT_CREATED_TITLE)
        .with_waits(waits)
        .to_have_attribute_matching("style", STYLE_GREEN)
        .await?;

    expect(page, auth::ACCOUNT_CREATED_P1)
        .with_waits(waits)
        .to_have_text(ACCOUNT_CREATED_P1)
        .await?;
    expect(page, auth::ACCOUNT_CREATED_P2)
        .with_waits(waits)
        .to_have_text(ACCOUNT_CREATED_P2)
        .await
}

/// Validate the order confirmation page: the bold "Order Placed!" heading
/// text, the green heading style, and the confirmation paragraph with its
/// font-size and font-family tokens (case-insensitive substring matches).
pub async fn order_placed<P: Page + ?Sized>(page: &P, waits: WaitOptions) -> ComprarResult<()> {
    info!("validate order placed");

    expect(page, payment::ORDER_PLACED_TITLE)
        .with_waits(waits)
        .to_be_visible()
        .await?;
    expect(page, payment::ORDER_PLACED_TITLE)
        .with_waits(waits)
        .to_have_attribute_matching("style", STYLE_GREEN)
        .await?;
    expect(page, payment::ORDER_PLACED_TITLE_BOLD)
        .with_waits(waits)
        .to_have_text(ORDER_PLACED_TITLE)
        .await?;

    expect(page, payment::ORDER_CONFIRMED_TEXT)
        .with_waits(waits)
        .to_be_visible()
        .await?;
    expect(page, payment::ORDER_CONFIRMED_TEXT)
        .with_waits(waits)
        .to_have_text(ORDER_CONFIRMED_TEXT)
        .await?;
    expect(page, payment::ORDER_CONFIRMED_TEXT)
        .with_waits(waits)
        .to_have_attribute_matching("style", STYLE_FONT_SIZE)
        .await?;
    expect(page, payment::ORDER_CONFIRMED_TEXT)
        .with_waits(waits)
        .to_have_attribute_matching("style", STYLE_GARAMOND)
        .await
}
