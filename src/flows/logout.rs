//! Logout.

use super::click_visible;
use crate::assert::expect_page;
use crate::page::Page;
use crate::result::ComprarResult;
use crate::selectors::auth;
use crate::wait::WaitOptions;
use tracing::info;

/// Log the authenticated session out and require the route to land back on
/// the authentication page.
pub async fn logout<P: Page + ?Sized>(page: &P, waits: WaitOptions) -> ComprarResult<()> {
    info!("logout");
    click_visible(page, auth::LOGOUT_LINK, waits).await?;
    expect_page(page)
        .with_waits(waits)
        .to_have_url_ending_with(auth::LOGIN_ROUTE)
        .await
}
