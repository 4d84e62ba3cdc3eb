//! Real Chromium control over the Chrome DevTools Protocol.
//!
//! The CDP engine (chromiumoxide) is an external collaborator: it owns the
//! transport, DOM querying and event dispatch. What lives here is the
//! explicit polling strategy layered on top of it: the engine has no
//! implicit waiting, so every interaction first waits for its element and
//! every state write is re-read until it sticks.

use crate::config::SuiteConfig;
use crate::page::Page;
use crate::result::{ComprarError, ComprarResult};
use crate::wait::{Poller, WaitOptions};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser as CdpBrowser, BrowserConfig as CdpConfig};
use chromiumoxide::page::Page as CdpPage;
use futures::StreamExt;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// A launched Chromium instance.
#[derive(Debug)]
pub struct Browser {
    config: SuiteConfig,
    inner: Arc<Mutex<CdpBrowser>>,
    #[allow(dead_code)]
    handle: tokio::task::JoinHandle<()>,
}

impl Browser {
    /// Launch Chromium according to the suite configuration.
    pub async fn launch(config: SuiteConfig) -> ComprarResult<Self> {
        let mut builder = CdpConfig::builder()
            .window_size(
                config.device.viewport_width,
                config.device.viewport_height,
            )
            .arg(format!("--user-agent={}", config.device.user_agent));

        if !config.headless {
            builder = builder.with_head();
        }
        if !config.sandbox {
            builder = builder.no_sandbox();
        }
        if let Some(ref path) = config.chromium_path {
            builder = builder.chrome_executable(path);
        }

        let cdp_config = builder
            .build()
            .map_err(|message| ComprarError::BrowserLaunch { message })?;

        let (browser, mut handler) =
            CdpBrowser::launch(cdp_config)
                .await
                .map_err(|e| ComprarError::BrowserLaunch {
                    message: e.to_string(),
                })?;

        // Drive the CDP event loop until the connection drops.
        let handle = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        Ok(Self {
            config,
            inner: Arc::new(Mutex::new(browser)),
            handle,
        })
    }

    /// Open a fresh tab.
    pub async fn new_page(&self) -> ComprarResult<LivePage> {
        let browser = self.inner.lock().await;
        let cdp_page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| ComprarError::Page {
                message: e.to_string(),
            })?;

        Ok(LivePage {
            inner: Arc::new(Mutex::new(cdp_page)),
            action_waits: self.config.action_waits(),
            navigation_waits: self.config.navigation_waits(),
        })
    }

    /// Close the browser.
    pub async fn close(self) -> ComprarResult<()> {
        let mut browser = self.inner.lock().await;
        browser
            .close()
            .await
            .map_err(|e| ComprarError::BrowserLaunch {
                message: e.to_string(),
            })?;
        Ok(())
    }
}

/// One Chromium tab implementing the page seam.
#[derive(Debug)]
pub struct LivePage {
    inner: Arc<Mutex<CdpPage>>,
    action_waits: WaitOptions,
    navigation_waits: WaitOptions,
}

/// Embed a Rust string as a JavaScript string literal.
fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

impl LivePage {
    async fn eval<T: DeserializeOwned>(&self, expr: &str) -> ComprarResult<T> {
        let page = self.inner.lock().await;
        let result = page.evaluate(expr).await.map_err(|e| ComprarError::Eval {
            message: e.to_string(),
        })?;
        result.into_value().map_err(|e| ComprarError::Eval {
            message: e.to_string(),
        })
    }

    fn visibility_probe(selector: &str) -> String {
        format!(
            "(() => {{ const el = document.querySelector({sel}); \
             if (!el) return false; \
             const r = el.getBoundingClientRect(); \
             return r.width > 0 && r.height > 0; }})()",
            sel = js_string(selector)
        )
    }

    /// Poll until the element exists with a non-empty box.
    async fn wait_for_visible(&self, selector: &str) -> ComprarResult<()> {
        let probe = Self::visibility_probe(selector);
        let poller = Poller::new(self.action_waits);
        loop {
            if self.eval::<bool>(&probe).await? {
                return Ok(());
            }
            poller.tick(&format!("visible: {selector}")).await?;
        }
    }

    /// Poll a state-writing probe until it reports the write stuck.
    async fn write_until(&self, probe: &str, waited_for: &str) -> ComprarResult<()> {
        let poller = Poller::new(self.action_waits);
        loop {
            if self.eval::<bool>(probe).await? {
                return Ok(());
            }
            poller.tick(waited_for).await?;
        }
    }
}

#[async_trait]
impl Page for LivePage {
    async fn goto(&self, url: &str) -> ComprarResult<()> {
        debug!(url, "goto");
        {
            let page = self.inner.lock().await;
            page.goto(url).await.map_err(|e| ComprarError::Navigation {
                url: url.to_string(),
                message: e.to_string(),
            })?;
        }
        // chromiumoxide returns once navigation commits; wait for the
        // document itself to be usable.
        let poller = Poller::new(self.navigation_waits);
        loop {
            let ready: String = self
                .eval("document.readyState")
                .await
                .unwrap_or_default();
            if ready == "interactive" || ready == "complete" {
                return Ok(());
            }
            poller.tick(&format!("load of {url}")).await?;
        }
    }

    async fn current_url(&self) -> ComprarResult<String> {
        let page = self.inner.lock().await;
        let url = page.url().await.map_err(|e| ComprarError::Page {
            message: e.to_string(),
        })?;
        Ok(url.unwrap_or_else(|| "about:blank".to_string()))
    }

    async fn title(&self) -> ComprarResult<String> {
        self.eval("document.title").await
    }

    async fn click(&self, selector: &str) -> ComprarResult<()> {
        debug!(selector, "click");
        self.wait_for_visible(selector).await?;
        let poller = Poller::new(self.action_waits);
        loop {
            let attempt = {
                let page = self.inner.lock().await;
                match page.find_element(selector).await {
                    Ok(element) => element.click().await.map(|_| ()),
                    Err(e) => Err(e),
                }
            };
            match attempt {
                Ok(()) => return Ok(()),
                Err(_) => poller.tick(&format!("clickable: {selector}")).await?,
            }
        }
    }

    async fn fill(&self, selector: &str, value: &str) -> ComprarResult<()> {
        debug!(selector, "fill");
        self.wait_for_visible(selector).await?;
        let probe = format!(
            "(() => {{ const el = document.querySelector({sel}); \
             if (!el) return false; \
             el.focus(); el.value = {val}; \
             el.dispatchEvent(new Event('input', {{bubbles: true}})); \
             el.dispatchEvent(new Event('change', {{bubbles: true}})); \
             return el.value === {val}; }})()",
            sel = js_string(selector),
            val = js_string(value)
        );
        self.write_until(&probe, &format!("fill {selector}")).await
    }

    async fn select_option(&self, selector: &str, value: &str) -> ComprarResult<()> {
        debug!(selector, "select");
        self.wait_for_visible(selector).await?;
        let probe = format!(
            "(() => {{ const el = document.querySelector({sel}); \
             if (!el) return false; \
             el.value = {val}; \
             el.dispatchEvent(new Event('change', {{bubbles: true}})); \
             return el.value === {val}; }})()",
            sel = js_string(selector),
            val = js_string(value)
        );
        self.write_until(&probe, &format!("select {selector}")).await
    }

    async fn set_checked(&self, selector: &str, checked: bool) -> ComprarResult<()> {
        debug!(selector, checked, "set_checked");
        self.wait_for_visible(selector).await?;
        let probe = format!(
            "(() => {{ const el = document.querySelector({sel}); \
             if (!el) return false; \
             el.checked = {checked}; \
             el.dispatchEvent(new Event('change', {{bubbles: true}})); \
             return el.checked === {checked}; }})()",
            sel = js_string(selector)
        );
        self.write_until(&probe, &format!("set_checked {selector}"))
            .await
    }

    async fn value(&self, selector: &str) -> ComprarResult<String> {
        let expr = format!(
            "(() => {{ const el = document.querySelector({sel}); \
             return el ? String(el.value) : null; }})()",
            sel = js_string(selector)
        );
        let value: Option<String> = self.eval(&expr).await?;
        Ok(value.unwrap_or_default())
    }

    async fn text(&self, selector: &str) -> ComprarResult<String> {
        let expr = format!(
            "(() => {{ const el = document.querySelector({sel}); \
             return el ? (el.textContent || '').trim() : null; }})()",
            sel = js_string(selector)
        );
        let text: Option<String> = self.eval(&expr).await?;
        Ok(text.unwrap_or_default())
    }

    async fn attribute(&self, selector: &str, name: &str) -> ComprarResult<Option<String>> {
        let expr = format!(
            "(() => {{ const el = document.querySelector({sel}); \
             return el ? el.getAttribute({name}) : null; }})()",
            sel = js_string(selector),
            name = js_string(name)
        );
        self.eval(&expr).await
    }

    async fn is_visible(&self, selector: &str) -> ComprarResult<bool> {
        self.eval(&Self::visibility_probe(selector)).await
    }

    async fn is_checked(&self, selector: &str) -> ComprarResult<bool> {
        let expr = format!(
            "(() => {{ const el = document.querySelector({sel}); \
             return !!(el && el.checked); }})()",
            sel = js_string(selector)
        );
        self.eval(&expr).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_escapes_quotes_and_backslashes() {
        assert_eq!(js_string("plain"), "\"plain\"");
        assert_eq!(js_string("a\"b"), "\"a\\\"b\"");
        assert_eq!(js_string("a\\b"), "\"a\\\\b\"");
    }

    #[test]
    fn test_visibility_probe_embeds_selector_literal() {
        let probe = LivePage::visibility_probe("input[data-qa=\"signup-email\"]");
        assert!(probe.contains("querySelector(\"input[data-qa=\\\"signup-email\\\"]\")"));
        assert!(probe.contains("getBoundingClientRect"));
    }
}
