//! Headless-Chromium PDF exporter.

use crate::export::{ExportError, PdfExporter};
use async_trait::async_trait;
use bytes::Bytes;
use chromiumoxide::cdp::browser_protocol::page::PrintToPdfParams;
use chromiumoxide::{Browser, BrowserConfig};
use futures::StreamExt;
use tracing::{debug, info};

/// PDF exporter printing through a headless Chromium instance.
///
/// One browser is launched at startup and reused across requests; each export
/// works on its own page, so concurrent exports do not interfere.
pub struct ChromiumPdfExporter {
    browser: Browser,
}

impl ChromiumPdfExporter {
    /// Launch the browser and start draining its event stream.
    pub async fn launch() -> Result<Self, ExportError> {
        let config = BrowserConfig::builder()
            .new_headless_mode()
            .args(vec!["--disable-gpu", "--no-sandbox", "--disable-dev-shm-usage"])
            .build()
            .map_err(ExportError)?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|err| ExportError(err.to_string()))?;

        // The handler stream must be polled for the browser to make progress.
        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        info!("headless browser ready for PDF export");
        Ok(Self { browser })
    }
}

#[async_trait]
impl PdfExporter for ChromiumPdfExporter {
    async fn export(&self, html: &str) -> Result<Bytes, ExportError> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|err| ExportError(err.to_string()))?;

        let result = async {
            page.set_content(html)
                .await
                .map_err(|err| ExportError(err.to_string()))?;

            let params = PrintToPdfParams {
                print_background: Some(true),
                ..Default::default()
            };
            page.pdf(params)
                .await
                .map_err(|err| ExportError(err.to_string()))
        }
        .await;

        // Close the page either way so failed exports do not leak tabs.
        let _ = page.close().await;

        let pdf = result?;
        debug!(bytes = pdf.len(), "printed PDF");
        Ok(Bytes::from(pdf))
    }
}
