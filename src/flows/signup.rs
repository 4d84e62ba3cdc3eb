//! Account signup.

use super::{click_visible, fill_checked, select_checked};
use crate::assert::{expect, expect_page};
use crate::data::JourneyPlan;
use crate::page::Page;
use crate::result::ComprarResult;
use crate::selectors::auth;
use crate::wait::WaitOptions;
use tracing::info;

/// The country the address block always selects; everything else is random.
const COUNTRY_UNITED_STATES: &str = "United States";

/// Create an account from the authentication page.
///
/// Fills the signup name/email pair, submits, cross-checks that the account
/// details page pre-fills the same name and email, then completes the whole
/// account form. Every field is asserted to read back exactly as written;
/// the email was lower-cased at derivation time, so the comparison is
/// already case-folded. Leaves the session on the account-created page.
///
/// Email uniqueness rests entirely on the plan's random suffix; a
/// provider-side "email already exists" error surfaces as an ordinary
/// assertion failure on the next page.
pub async fn signup<P: Page + ?Sized>(
    page: &P,
    plan: &JourneyPlan,
    waits: WaitOptions,
) -> ComprarResult<()> {
    info!(email = %plan.email, "signup");
    let full_name = plan.identity.full_name();

    page.click(auth::LOGIN_LINK).await?;
    expect_page(page)
        .with_waits(waits)
        .to_have_url_containing(auth::LOGIN_ROUTE)
        .await?;

    fill_checked(page, auth::SIGNUP_NAME, &full_name, waits).await?;
    fill_checked(page, auth::SIGNUP_EMAIL, &plan.email, waits).await?;
    click_visible(page, auth::SIGNUP_BUTTON, waits).await?;

    // Name and email must carry over from the previous step.
    expect(page, auth::ACCOUNT_NAME)
        .with_waits(waits)
        .to_have_value(&full_name)
        .await?;
    expect(page, auth::ACCOUNT_EMAIL)
        .with_waits(waits)
        .to_have_value(&plan.email)
        .await?;

    fill_checked(page, auth::PASSWORD, &plan.profile.password, waits).await?;

    select_checked(
        page,
        auth::BIRTH_DAY,
        &plan.profile.birth_day.to_string(),
        waits,
    )
    .await?;
    select_checked(
        page,
        auth::BIRTH_MONTH,
        &plan.profile.birth_month.to_string(),
        waits,
    )
    .await?;
    select_checked(
        page,
        auth::BIRTH_YEAR,
        &plan.profile.birth_year.to_string(),
        waits,
    )
    .await?;

    page.set_checked(auth::NEWSLETTER, true).await?;
    page.set_checked(auth::OPT_IN, true).await?;
    expect(page, auth::NEWSLETTER)
        .with_waits(waits)
        .to_be_checked()
        .await?;
    expect(page, auth::OPT_IN)
        .with_waits(waits)
        .to_be_checked()
        .await?;

    fill_checked(page, auth::FIRST_NAME, &plan.identity.first_name, waits).await?;
    fill_checked(page, auth::LAST_NAME, &plan.identity.last_name, waits).await?;
    fill_checked(page, auth::COMPANY, &plan.profile.company, waits).await?;
    fill_checked(page, auth::ADDRESS, &plan.profile.address, waits).await?;
    select_checked(page, auth::COUNTRY, COUNTRY_UNITED_STATES, waits).await?;
    fill_checked(page, auth::STATE, &plan.profile.state, waits).await?;
    fill_checked(page, auth::CITY, &plan.profile.city, waits).await?;
    fill_checked(page, auth::ZIPCODE, &plan.profile.zipcode, waits).await?;
    fill_checked(page, auth::MOBILE_NUMBER, &plan.profile.mobile_number, waits).await?;

    page.click(auth::CREATE_ACCOUNT).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::MockPage;
    use crate::result::ComprarError;

    fn fast() -> WaitOptions {
        WaitOptions::new().with_timeout(80).with_poll_interval(10)
    }

    fn plan() -> JourneyPlan {
        let mut plan = JourneyPlan::random();
        plan.identity.first_name = "Ana".to_string();
        plan.identity.last_name = "Diaz".to_string();
        plan.email = plan.identity.email_with_suffix(1234);
        plan
    }

    /// A login page whose signup submit lands on an account form pre-filled
    /// with the same name and email.
    fn seeded(plan: &JourneyPlan) -> MockPage {
        MockPage::new()
            .with_route(auth::LOGIN_LINK, "/login")
            .with_route(auth::SIGNUP_BUTTON, "/signup")
            .with_route(auth::CREATE_ACCOUNT, "/account_created")
            .with_value(auth::ACCOUNT_NAME, &plan.identity.full_name())
            .with_value(auth::ACCOUNT_EMAIL, &plan.email)
    }

    #[tokio::test]
    async fn test_signup_completes_and_lands_on_account_created() {
        let plan = plan();
        let page = seeded(&plan);
        page.goto("https://mock.test/login").await.unwrap();

        signup(&page, &plan, fast()).await.unwrap();

        assert_eq!(
            page.current_url().await.unwrap(),
            "https://mock.test/account_created"
        );
        assert_eq!(
            page.value(auth::SIGNUP_EMAIL).await.unwrap(),
            "ana.diaz1234@example.com"
        );
        assert_eq!(
            page.value(auth::COUNTRY).await.unwrap(),
            "United States"
        );
        assert!(page.is_checked(auth::NEWSLETTER).await.unwrap());
        assert!(page.is_checked(auth::OPT_IN).await.unwrap());
        assert_eq!(
            page.value(auth::FIRST_NAME).await.unwrap(),
            plan.identity.first_name
        );
        assert_eq!(
            page.value(auth::MOBILE_NUMBER).await.unwrap(),
            plan.profile.mobile_number
        );
    }

    #[tokio::test]
    async fn test_signup_echoes_birth_date_extremes_exactly() {
        // The date-of-birth selects at both corners of the form's range
        // must read back unpadded, exactly as selected.
        for (day, month, year, expected) in [
            (1u8, 1u8, 1900u16, ["1", "1", "1900"]),
            (31, 12, 2021, ["31", "12", "2021"]),
        ] {
            let mut plan = plan();
            plan.profile.birth_day = day;
            plan.profile.birth_month = month;
            plan.profile.birth_year = year;
            let page = seeded(&plan);
            page.goto("https://mock.test/login").await.unwrap();

            signup(&page, &plan, fast()).await.unwrap();

            assert_eq!(page.value(auth::BIRTH_DAY).await.unwrap(), expected[0]);
            assert_eq!(page.value(auth::BIRTH_MONTH).await.unwrap(), expected[1]);
            assert_eq!(page.value(auth::BIRTH_YEAR).await.unwrap(), expected[2]);
        }
    }

    #[tokio::test]
    async fn test_signup_fails_when_prefill_does_not_match() {
        let plan = plan();
        // Account page pre-fills somebody else's email.
        let page = MockPage::new()
            .with_route(auth::LOGIN_LINK, "/login")
            .with_route(auth::SIGNUP_BUTTON, "/signup")
            .with_value(auth::ACCOUNT_NAME, &plan.identity.full_name())
            .with_value(auth::ACCOUNT_EMAIL, "someone.else@example.com");
        page.goto("https://mock.test/login").await.unwrap();

        let err = signup(&page, &plan, fast()).await.unwrap_err();
        assert!(matches!(err, ComprarError::AssertionFailed { .. }));
        assert!(!page.was_called("click:[data-qa=\"create-account\"]"));
    }

    #[tokio::test]
    async fn test_signup_fails_when_checkbox_never_checks() {
        let plan = plan();
        let page = seeded(&plan).with_stubborn(auth::OPT_IN);
        page.goto("https://mock.test/login").await.unwrap();

        let err = signup(&page, &plan, fast()).await.unwrap_err();
        assert!(err.is_assertion());
    }
}
