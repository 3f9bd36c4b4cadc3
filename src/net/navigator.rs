//! Full-page navigation for auth redirects.

use session::Navigator;

/// Sends the browser to another URL by assigning `window.location.href`.
///
/// A no-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if window.location().set_href(url).is_err() {
                    log::error!("failed to navigate to {url}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = url;
        }
    }
}

/// Origin of the current page, e.g. `https://chat.example.com`.
///
/// Empty outside the browser, which leaves return-to URLs relative.
pub fn page_origin() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}
