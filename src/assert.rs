//! Auto-retrying UI assertions.
//!
//! `expect(page, selector)` polls the page until the expectation holds or
//! the wait budget runs out; a miss reports the last observed state. These
//! are the round-trip checks the whole suite is built from: read a value
//! back and require it to equal exactly what was written.

use crate::page::Page;
use crate::result::{ComprarError, ComprarResult};
use crate::wait::{Poller, WaitOptions};
use regex::Regex;

/// Start an expectation on the element matching `selector`.
pub fn expect<'a, P: Page + ?Sized>(page: &'a P, selector: &'a str) -> Expectation<'a, P> {
    Expectation {
        page,
        selector,
        waits: WaitOptions::default(),
    }
}

/// Start an expectation on page-level state (URL, title).
pub fn expect_page<P: Page + ?Sized>(page: &P) -> PageExpectation<'_, P> {
    PageExpectation {
        page,
        waits: WaitOptions::default(),
    }
}

/// Turn a poll timeout into an assertion failure carrying the mismatch.
fn on_timeout(err: ComprarError, message: String) -> ComprarError {
    match err {
        ComprarError::Timeout { .. } => ComprarError::AssertionFailed { message },
        other => other,
    }
}

/// An element expectation with auto-retry.
#[derive(Debug)]
pub struct Expectation<'a, P: Page + ?Sized> {
    page: &'a P,
    selector: &'a str,
    waits: WaitOptions,
}

#[allow(clippy::wrong_self_convention)]
impl<'a, P: Page + ?Sized> Expectation<'a, P> {
    /// Override the wait budget for this assertion
    #[must_use]
    pub const fn with_waits(mut self, waits: WaitOptions) -> Self {
        self.waits = waits;
        self
    }

    /// Assert the element is visible
    pub async fn to_be_visible(self) -> ComprarResult<()> {
        let poller = Poller::new(self.waits);
        loop {
            if self.page.is_visible(self.selector).await? {
                return Ok(());
            }
            if let Err(err) = poller.tick(&format!("visible: {}", self.selector)).await {
                return Err(on_timeout(
                    err,
                    format!("{} did not become visible", self.selector),
                ));
            }
        }
    }

    /// Assert the field's value reads back exactly as `expected`
    pub async fn to_have_value(self, expected: &str) -> ComprarResult<()> {
        let poller = Poller::new(self.waits);
        loop {
            let actual = self.page.value(self.selector).await?;
            if actual == expected {
                return Ok(());
            }
            if let Err(err) = poller.tick(&format!("value of {}", self.selector)).await {
                return Err(on_timeout(
                    err,
                    format!(
                        "{}: expected value {expected:?}, last saw {actual:?}",
                        self.selector
                    ),
                ));
            }
        }
    }

    /// Assert the element's trimmed text equals `expected`
    pub async fn to_have_text(self, expected: &str) -> ComprarResult<()> {
        let poller = Poller::new(self.waits);
        loop {
            let actual = self.page.text(self.selector).await?;
            if actual == expected {
                return Ok(());
            }
            if let Err(err) = poller.tick(&format!("text of {}", self.selector)).await {
                return Err(on_timeout(
                    err,
                    format!(
                        "{}: expected text {expected:?}, last saw {actual:?}",
                        self.selector
                    ),
                ));
            }
        }
    }

    /// Assert the checkbox is checked
    pub async fn to_be_checked(self) -> ComprarResult<()> {
        let poller = Poller::new(self.waits);
        loop {
            if self.page.is_checked(self.selector).await? {
                return Ok(());
            }
            if let Err(err) = poller.tick(&format!("checked: {}", self.selector)).await {
                return Err(on_timeout(
                    err,
                    format!("{} did not become checked", self.selector),
                ));
            }
        }
    }

    /// Assert the attribute `name` is present and matches `pattern`
    pub async fn to_have_attribute_matching(
        self,
        name: &str,
        pattern: &str,
    ) -> ComprarResult<()> {
        let regex = Regex::new(pattern).map_err(|e| ComprarError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        let poller = Poller::new(self.waits);
        loop {
            let actual = self.page.attribute(self.selector, name).await?;
            if actual.as_deref().is_some_and(|v| regex.is_match(v)) {
                return Ok(());
            }
            if let Err(err) = poller
                .tick(&format!("attribute {name} of {}", self.selector))
                .await
            {
                return Err(on_timeout(
                    err,
                    format!(
                        "{}: attribute {name} expected to match {pattern:?}, last saw {actual:?}",
                        self.selector
                    ),
                ));
            }
        }
    }
}

/// A page-level expectation with auto-retry.
#[derive(Debug)]
pub struct PageExpectation<'a, P: Page + ?Sized> {
    page: &'a P,
    waits: WaitOptions,
}

#[allow(clippy::wrong_self_convention)]
impl<'a, P: Page + ?Sized> PageExpectation<'a, P> {
    /// Override the wait budget for this assertion
    #[must_use]
    pub const fn with_waits(mut self, waits: WaitOptions) -> Self {
        self.waits = waits;
        self
    }

    /// Assert the current URL contains `fragment`
    pub async fn to_have_url_containing(self, fragment: &str) -> ComprarResult<()> {
        let poller = Poller::new(self.waits);
        loop {
            let actual = self.page.current_url().await?;
            if actual.contains(fragment) {
                return Ok(());
            }
            if let Err(err) = poller.tick(&format!("url containing {fragment:?}")).await {
                return Err(on_timeout(
                    err,
                    format!("expected url containing {fragment:?}, last saw {actual:?}"),
                ));
            }
        }
    }

    /// Assert the current URL ends with `suffix`
    pub async fn to_have_url_ending_with(self, suffix: &str) -> ComprarResult<()> {
        let poller = Poller::new(self.waits);
        loop {
            let actual = self.page.current_url().await?;
            if actual.ends_with(suffix) {
                return Ok(());
            }
            if let Err(err) = poller.tick(&format!("url ending with {suffix:?}")).await {
                return Err(on_timeout(
                    err,
                    format!("expected url ending with {suffix:?}, last saw {actual:?}"),
                ));
            }
        }
    }

    /// Assert the document title matches `pattern` (regex)
    pub async fn to_have_title_matching(self, pattern: &str) -> ComprarResult<()> {
        let regex = Regex::new(pattern).map_err(|e| ComprarError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        let poller = Poller::new(self.waits);
        loop {
            let actual = self.page.title().await?;
            if regex.is_match(&actual) {
                return Ok(());
            }
            if let Err(err) = poller.tick(&format!("title matching {pattern:?}")).await {
                return Err(on_timeout(
                    err,
                    format!("expected title matching {pattern:?}, last saw {actual:?}"),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::MockPage;

    fn fast() -> WaitOptions {
        WaitOptions::new().with_timeout(80).with_poll_interval(10)
    }

    #[tokio::test]
    async fn test_value_round_trip_passes() {
        let page = MockPage::new();
        page.fill("#quantity", "7").await.unwrap();
        expect(&page, "#quantity")
            .with_waits(fast())
            .to_have_value("7")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_value_mismatch_reports_last_seen() {
        let page = MockPage::new().with_stubborn("#quantity");
        page.fill("#quantity", "7").await.unwrap();
        let err = expect(&page, "#quantity")
            .with_waits(fast())
            .to_have_value("7")
            .await
            .unwrap_err();
        match err {
            ComprarError::AssertionFailed { message } => {
                assert!(message.contains("#quantity"));
                assert!(message.contains("\"7\""));
            }
            other => panic!("expected assertion failure, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_attribute_matching() {
        let page = MockPage::new().with_attribute(
            "h2[data-qa=\"account-created\"]",
            "style",
            "color: green;",
        );
        expect(&page, "h2[data-qa=\"account-created\"]")
            .with_waits(fast())
            .to_have_attribute_matching("style", "green")
            .await
            .unwrap();

        let err = expect(&page, "h2[data-qa=\"account-created\"]")
            .with_waits(fast())
            .to_have_attribute_matching("style", "red")
            .await
            .unwrap_err();
        assert!(err.is_assertion());
    }

    #[tokio::test]
    async fn test_bad_pattern_is_not_an_assertion_failure() {
        let page = MockPage::new();
        let err = expect(&page, "h2")
            .with_waits(fast())
            .to_have_attribute_matching("style", "(unclosed")
            .await
            .unwrap_err();
        assert!(matches!(err, ComprarError::InvalidPattern { .. }));
    }

    #[tokio::test]
    async fn test_url_and_title_expectations() {
        let page = MockPage::new().with_title("/login", "Automation Exercise - Signup / Login");
        page.goto("https://mock.test/login").await.unwrap();

        expect_page(&page)
            .with_waits(fast())
            .to_have_url_containing("/login")
            .await
            .unwrap();
        expect_page(&page)
            .with_waits(fast())
            .to_have_url_ending_with("/login")
            .await
            .unwrap();
        expect_page(&page)
            .with_waits(fast())
            .to_have_title_matching("(?i)login")
            .await
            .unwrap();

        let err = expect_page(&page)
            .with_waits(fast())
            .to_have_url_ending_with("/products")
            .await
            .unwrap_err();
        assert!(err.is_assertion());
    }

    #[tokio::test]
    async fn test_checked_expectation() {
        let page = MockPage::new();
        page.set_checked("#newsletter", true).await.unwrap();
        expect(&page, "#newsletter")
            .with_waits(fast())
            .to_be_checked()
            .await
            .unwrap();

        let err = expect(&page, "#optin")
            .with_waits(fast())
            .to_be_checked()
            .await
            .unwrap_err();
        assert!(err.is_assertion());
    }
}
