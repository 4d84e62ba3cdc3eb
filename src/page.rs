//! The page seam.
//!
//! [`Page`] is the narrow surface the funnel needs from a browser tab. The
//! live implementation drives Chromium over CDP (see [`crate::session`]); the
//! [`MockPage`] here is a scripted storefront for driving the flows in unit
//! tests without a browser.

use crate::result::ComprarResult;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;

/// One browser tab's navigable state, as seen by the funnel.
#[async_trait]
pub trait Page: Send + Sync {
    /// Navigate to an absolute URL
    async fn goto(&self, url: &str) -> ComprarResult<()>;

    /// Current document URL
    async fn current_url(&self) -> ComprarResult<String>;

    /// Current document title
    async fn title(&self) -> ComprarResult<String>;

    /// Click the element matching `selector`
    async fn click(&self, selector: &str) -> ComprarResult<()>;

    /// Set the value of an input or textarea
    async fn fill(&self, selector: &str, value: &str) -> ComprarResult<()>;

    /// Select an option of a `<select>` by value
    async fn select_option(&self, selector: &str, value: &str) -> ComprarResult<()>;

    /// Check or uncheck a checkbox
    async fn set_checked(&self, selector: &str, checked: bool) -> ComprarResult<()>;

    /// Read back a form field's current value
    async fn value(&self, selector: &str) -> ComprarResult<String>;

    /// Read an element's trimmed text content
    async fn text(&self, selector: &str) -> ComprarResult<String>;

    /// Read an element attribute, if present
    async fn attribute(&self, selector: &str, name: &str) -> ComprarResult<Option<String>>;

    /// Whether the element exists and has a non-empty box
    async fn is_visible(&self, selector: &str) -> ComprarResult<bool>;

    /// Whether a checkbox is currently checked
    async fn is_checked(&self, selector: &str) -> ComprarResult<bool>;
}

/// A scripted storefront for unit tests.
///
/// Filled values echo back on read, clicks consume a per-selector queue of
/// navigation targets, and texts/attributes/titles are served from seeded
/// maps. Selectors marked stubborn swallow writes, which is how round-trip
/// assertion failures are exercised.
#[derive(Debug, Default)]
pub struct MockPage {
    url: Mutex<String>,
    values: Mutex<HashMap<String, String>>,
    checked: Mutex<HashSet<String>>,
    routes: Mutex<HashMap<String, VecDeque<String>>>,
    texts: HashMap<String, String>,
    attributes: HashMap<(String, String), String>,
    titles: Vec<(String, String)>,
    hidden: HashSet<String>,
    stubborn: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl MockPage {
    /// Create an empty mock page at `about:blank`
    #[must_use]
    pub fn new() -> Self {
        Self {
            url: Mutex::new("about:blank".to_string()),
            ..Self::default()
        }
    }

    /// Queue a navigation: the next click on `selector` lands on `path`
    /// (resolved against the current origin). Repeated calls queue further
    /// destinations for subsequent clicks.
    #[must_use]
    pub fn with_route(self, selector: &str, path: &str) -> Self {
        self.routes
            .lock()
            .expect("routes lock")
            .entry(selector.to_string())
            .or_default()
            .push_back(path.to_string());
        self
    }

    /// Seed an element's text content
    #[must_use]
    pub fn with_text(mut self, selector: &str, text: &str) -> Self {
        self.texts.insert(selector.to_string(), text.to_string());
        self
    }

    /// Seed an element attribute
    #[must_use]
    pub fn with_attribute(mut self, selector: &str, name: &str, value: &str) -> Self {
        self.attributes
            .insert((selector.to_string(), name.to_string()), value.to_string());
        self
    }

    /// Seed a form field's value (e.g. server-side pre-filled inputs)
    #[must_use]
    pub fn with_value(self, selector: &str, value: &str) -> Self {
        self.values
            .lock()
            .expect("values lock")
            .insert(selector.to_string(), value.to_string());
        self
    }

    /// Seed the document title for URLs ending in `url_suffix`. The longest
    /// matching suffix wins.
    #[must_use]
    pub fn with_title(mut self, url_suffix: &str, title: &str) -> Self {
        self.titles
            .push((url_suffix.to_string(), title.to_string()));
        self
    }

    /// Mark an element as not visible
    #[must_use]
    pub fn with_hidden(mut self, selector: &str) -> Self {
        self.hidden.insert(selector.to_string());
        self
    }

    /// Mark a field as stubborn: writes are recorded but never stick
    #[must_use]
    pub fn with_stubborn(mut self, selector: &str) -> Self {
        self.stubborn.insert(selector.to_string());
        self
    }

    /// Recorded interaction history
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    /// Whether any recorded interaction starts with `prefix`
    #[must_use]
    pub fn was_called(&self, prefix: &str) -> bool {
        self.calls
            .lock()
            .expect("calls lock")
            .iter()
            .any(|call| call.starts_with(prefix))
    }

    fn record(&self, call: String) {
        self.calls.lock().expect("calls lock").push(call);
    }

    fn set_url(&self, target: &str) {
        let mut url = self.url.lock().expect("url lock");
        let resolved = if target.starts_with("http://") || target.starts_with("https://") {
            target.to_string()
        } else {
            format!("{}{}", origin_of(url.as_str()), target)
        };
        *url = resolved;
    }
}

/// Scheme and host of an absolute URL, without a trailing slash.
fn origin_of(url: &str) -> String {
    let Some(scheme_end) = url.find("://") else {
        return String::new();
    };
    let rest = &url[scheme_end + 3..];
    match rest.find('/') {
        Some(slash) => url[..scheme_end + 3 + slash].to_string(),
        None => url.to_string(),
    }
}

#[async_trait]
impl Page for MockPage {
    async fn goto(&self, url: &str) -> ComprarResult<()> {
        self.record(format!("goto:{url}"));
        *self.url.lock().expect("url lock") = url.to_string();
        Ok(())
    }

    async fn current_url(&self) -> ComprarResult<String> {
        Ok(self.url.lock().expect("url lock").clone())
    }

    async fn title(&self) -> ComprarResult<String> {
        let url = self.url.lock().expect("url lock").clone();
        let best = self
            .titles
            .iter()
            .filter(|(suffix, _)| url.ends_with(suffix.as_str()))
            .max_by_key(|(suffix, _)| suffix.len());
        Ok(best.map(|(_, title)| title.clone()).unwrap_or_default())
    }

    async fn click(&self, selector: &str) -> ComprarResult<()> {
        self.record(format!("click:{selector}"));
        let next = self
            .routes
            .lock()
            .expect("routes lock")
            .get_mut(selector)
            .and_then(VecDeque::pop_front);
        if let Some(path) = next {
            self.set_url(&path);
        }
        Ok(())
    }

    async fn fill(&self, selector: &str, value: &str) -> ComprarResult<()> {
        self.record(format!("fill:{selector}={value}"));
        if !self.stubborn.contains(selector) {
            self.values
                .lock()
                .expect("values lock")
                .insert(selector.to_string(), value.to_string());
        }
        Ok(())
    }

    async fn select_option(&self, selector: &str, value: &str) -> ComprarResult<()> {
        self.record(format!("select:{selector}={value}"));
        if !self.stubborn.contains(selector) {
            self.values
                .lock()
                .expect("values lock")
                .insert(selector.to_string(), value.to_string());
        }
        Ok(())
    }

    async fn set_checked(&self, selector: &str, checked: bool) -> ComprarResult<()> {
        self.record(format!("set_checked:{selector}={checked}"));
        if !self.stubborn.contains(selector) {
            let mut set = self.checked.lock().expect("checked lock");
            if checked {
                set.insert(selector.to_string());
            } else {
                set.remove(selector);
            }
        }
        Ok(())
    }

    async fn value(&self, selector: &str) -> ComprarResult<String> {
        Ok(self
            .values
            .lock()
            .expect("values lock")
            .get(selector)
            .cloned()
            .unwrap_or_default())
    }

    async fn text(&self, selector: &str) -> ComprarResult<String> {
        Ok(self.texts.get(selector).cloned().unwrap_or_default())
    }

    async fn attribute(&self, selector: &str, name: &str) -> ComprarResult<Option<String>> {
        Ok(self
            .attributes
            .get(&(selector.to_string(), name.to_string()))
            .cloned())
    }

    async fn is_visible(&self, selector: &str) -> ComprarResult<bool> {
        Ok(!self.hidden.contains(selector))
    }

    async fn is_checked(&self, selector: &str) -> ComprarResult<bool> {
        Ok(self.checked.lock().expect("checked lock").contains(selector))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fill_echoes_on_read() {
        let page = MockPage::new();
        page.fill("#quantity", "7").await.unwrap();
        assert_eq!(page.value("#quantity").await.unwrap(), "7");
        assert!(page.was_called("fill:#quantity"));
    }

    #[tokio::test]
    async fn test_stubborn_field_swallows_writes() {
        let page = MockPage::new().with_stubborn("#quantity");
        page.fill("#quantity", "7").await.unwrap();
        assert_eq!(page.value("#quantity").await.unwrap(), "");
        assert!(page.was_called("fill:#quantity"));
    }

    #[tokio::test]
    async fn test_click_consumes_route_queue() {
        let page = MockPage::new()
            .with_route("a.checkout", "/view_cart")
            .with_route("a.checkout", "/checkout");
        page.goto("https://mock.test/").await.unwrap();

        page.click("a.checkout").await.unwrap();
        assert_eq!(
            page.current_url().await.unwrap(),
            "https://mock.test/view_cart"
        );

        page.click("a.checkout").await.unwrap();
        assert_eq!(
            page.current_url().await.unwrap(),
            "https://mock.test/checkout"
        );

        // Queue exhausted: further clicks stay put.
        page.click("a.checkout").await.unwrap();
        assert_eq!(
            page.current_url().await.unwrap(),
            "https://mock.test/checkout"
        );
    }

    #[tokio::test]
    async fn test_title_longest_suffix_wins() {
        let page = MockPage::new()
            .with_title("/", "Automation Exercise")
            .with_title("/login", "Automation Exercise - Signup / Login");
        page.goto("https://mock.test/").await.unwrap();
        assert_eq!(page.title().await.unwrap(), "Automation Exercise");

        page.goto("https://mock.test/login").await.unwrap();
        assert_eq!(
            page.title().await.unwrap(),
            "Automation Exercise - Signup / Login"
        );
    }

    #[tokio::test]
    async fn test_checkbox_state() {
        let page = MockPage::new();
        assert!(!page.is_checked("#optin").await.unwrap());
        page.set_checked("#optin", true).await.unwrap();
        assert!(page.is_checked("#optin").await.unwrap());
        page.set_checked("#optin", false).await.unwrap();
        assert!(!page.is_checked("#optin").await.unwrap());
    }

    #[tokio::test]
    async fn test_hidden_elements() {
        let page = MockPage::new().with_hidden("#spinner");
        assert!(!page.is_visible("#spinner").await.unwrap());
        assert!(page.is_visible("#content").await.unwrap());
    }

    #[test]
    fn test_origin_of() {
        assert_eq!(
            origin_of("https://mock.test/view_cart"),
            "https://mock.test"
        );
        assert_eq!(origin_of("https://mock.test"), "https://mock.test");
        assert_eq!(origin_of("about:blank"), "");
    }
}
