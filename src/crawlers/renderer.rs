use crate::error::RenderError;
use crate::parsers;
use async_trait::async_trait;
use fantoccini::error::{CmdError, NewSessionError};
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::json;
use std::time::Duration;

/// How long to wait for a page's body element after navigation.
const BODY_WAIT: Duration = Duration::from_secs(10);

/// A page rendered by the browser session.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Document title (empty if the page has none)
    pub title: String,

    /// Full rendered DOM markup
    pub html: String,

    /// Concatenated text of the page's inline style elements
    pub style_text: String,
}

/// Drives a browser session to load one URL and return its rendered DOM.
#[async_trait]
pub trait PageRenderer {
    async fn render(&mut self, url: &str) -> Result<RenderedPage, RenderError>;
}

/// Renderer backed by a fantoccini WebDriver session.
///
/// One session is acquired at traversal start and reused for every page;
/// [`WebDriverRenderer::close`] must run on every exit path.
pub struct WebDriverRenderer {
    client: Client,
}

impl WebDriverRenderer {
    /// Connect to a WebDriver server, requesting a headless window with the
    /// given user agent.
    pub async fn connect(
        webdriver_url: &str,
        user_agent: &str,
    ) -> Result<Self, NewSessionError> {
        let mut caps = serde_json::map::Map::new();
        caps.insert(
            "goog:chromeOptions".to_string(),
            json!({
                "args": [
                    "--headless",
                    "--no-sandbox",
                    "--disable-dev-shm-usage",
                    format!("--user-agent={}", user_agent),
                ]
            }),
        );

        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(webdriver_url)
            .await?;

        ::log::debug!("connected to WebDriver at {}", webdriver_url);

        Ok(Self { client })
    }

    /// Tear down the browser session.
    pub async fn close(self) {
        if let Err(e) = self.client.close().await {
            ::log::warn!("failed to close WebDriver session: {}", e);
        }
    }
}

#[async_trait]
impl PageRenderer for WebDriverRenderer {
    async fn render(&mut self, url: &str) -> Result<RenderedPage, RenderError> {
        self.client
            .goto(url)
            .await
            .map_err(|source| RenderError::Navigation {
                url: url.to_string(),
                source,
            })?;

        // Bounded wait for the body element; a hung load surfaces here.
        let waited = self
            .client
            .wait()
            .at_most(BODY_WAIT)
            .for_element(Locator::Css("body"))
            .await;
        if let Err(e) = waited {
            return Err(match e {
                CmdError::WaitTimeout => RenderError::Timeout {
                    url: url.to_string(),
                },
                source => RenderError::Navigation {
                    url: url.to_string(),
                    source,
                },
            });
        }

        let html = self
            .client
            .source()
            .await
            .map_err(|source| RenderError::Navigation {
                url: url.to_string(),
                source,
            })?;

        let title = parsers::html::page_title(&html);
        let style_text = parsers::html::collect_styles(&html);

        Ok(RenderedPage {
            title,
            html,
            style_text,
        })
    }
}
