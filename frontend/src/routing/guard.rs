//! Session-based navigation guard.
//!
//! Signed-out users may only visit public pages; signed-in users have no
//! business on the login page. The session is the presence of a cookie.

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::config::ClientConfig;

/// Temporary redirect, matching what the pages expect from the server side
pub const REDIRECT_STATUS: u16 = 307;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    cookies: HashMap<String, String>,
}

impl CookieJar {
    /// Parse a `document.cookie` style string: `a=1; b=2`
    pub fn parse(header: &str) -> Self {
        let cookies = header
            .split(';')
            .filter_map(|pair| {
                let (name, value) = pair.split_once('=')?;
                let name = name.trim();
                (!name.is_empty()).then(|| (name.to_string(), value.trim().to_string()))
            })
            .collect();
        Self { cookies }
    }

    pub fn from_document() -> Self {
        let cookie = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.dyn_into::<HtmlDocument>().ok())
            .and_then(|document| document.cookie().ok())
            .unwrap_or_default();
        Self::parse(&cookie)
    }

    /// Value of a cookie; an empty value counts as absent
    pub fn get(&self, name: &str) -> Option<&str> {
        self.cookies
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect { status: u16, to: String },
}

impl Navigation {
    fn redirect(to: &str) -> Self {
        Navigation::Redirect {
            status: REDIRECT_STATUS,
            to: to.to_string(),
        }
    }

    /// Send the browser to the redirect target, if any
    pub fn apply(&self) {
        if let Navigation::Redirect { to, .. } = self {
            log::info!(target: "guard", "redirecting to {}", to);
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().replace(to) {
                    log::error!(target: "guard", "redirect to {} failed: {:?}", to, e);
                }
            }
        }
    }
}

/// Guard for every page under the root layout
pub fn guard_layout(jar: &CookieJar, path: &str, config: &ClientConfig) -> Navigation {
    let authenticated = jar.get(&config.session_cookie).is_some();
    if !authenticated && !config.is_public_path(path) {
        return Navigation::redirect(&config.login_path);
    }
    Navigation::Proceed
}

/// Guard for the login page itself
pub fn guard_login(jar: &CookieJar, config: &ClientConfig) -> Navigation {
    if jar.get(&config.session_cookie).is_some() {
        return Navigation::redirect(&config.home_path);
    }
    Navigation::Proceed
}

/// Guard to run for `path`, picking the login rule on the login page
pub fn guard_route(jar: &CookieJar, path: &str, config: &ClientConfig) -> Navigation {
    if path == config.login_path {
        guard_login(jar, config)
    } else {
        guard_layout(jar, path, config)
    }
}

/// User id to restore on startup: the shell-provided id, and only while a
/// session cookie exists. The cookie value is a signed session, not an id.
pub fn session_user_id<'a>(jar: &CookieJar, config: &'a ClientConfig) -> Option<&'a str> {
    jar.get(&config.session_cookie)?;
    config
        .current_user_id
        .as_deref()
        .filter(|id| !id.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in() -> CookieJar {
        CookieJar::parse("theme=dark; id=7f0c2a")
    }

    #[test]
    fn test_session_cookie_value_is_never_the_user_id() {
        let config = ClientConfig::default();
        assert_eq!(session_user_id(&signed_in(), &config), None);

        let config = ClientConfig {
            current_user_id: Some("0b9c6c7e-3f51-4a43-9a3c-2b8fb1b0d6a1".to_string()),
            ..ClientConfig::default()
        };
        assert_eq!(
            session_user_id(&signed_in(), &config),
            Some("0b9c6c7e-3f51-4a43-9a3c-2b8fb1b0d6a1")
        );
    }

    #[test]
    fn test_no_session_means_no_user_id() {
        let config = ClientConfig {
            current_user_id: Some("0b9c6c7e-3f51-4a43-9a3c-2b8fb1b0d6a1".to_string()),
            ..ClientConfig::default()
        };
        assert_eq!(session_user_id(&CookieJar::parse("theme=dark"), &config), None);

        let blank = ClientConfig {
            current_user_id: Some("  ".to_string()),
            ..ClientConfig::default()
        };
        assert_eq!(session_user_id(&signed_in(), &blank), None);
    }

    #[test]
    fn test_parse_cookie_string() {
        let jar = CookieJar::parse(" a=1;b = two ; broken; =x; empty=");
        assert_eq!(jar.get("a"), Some("1"));
        assert_eq!(jar.get("b"), Some("two"));
        assert_eq!(jar.get("broken"), None);
        assert_eq!(jar.get("empty"), None);
    }

    #[test]
    fn test_signed_out_user_redirected_to_login() {
        let config = ClientConfig::default();
        let jar = CookieJar::parse("theme=dark");

        assert_eq!(
            guard_layout(&jar, "/domains", &config),
            Navigation::Redirect { status: 307, to: "/login".to_string() }
        );
        assert_eq!(guard_layout(&jar, "/verify", &config), Navigation::Proceed);
        assert_eq!(guard_layout(&jar, "/login", &config), Navigation::Proceed);
    }

    #[test]
    fn test_signed_in_user_proceeds() {
        let config = ClientConfig::default();
        assert_eq!(guard_layout(&signed_in(), "/domains", &config), Navigation::Proceed);
    }

    #[test]
    fn test_login_page_sends_signed_in_user_home() {
        let config = ClientConfig::default();

        assert_eq!(
            guard_route(&signed_in(), "/login", &config),
            Navigation::Redirect { status: 307, to: "/".to_string() }
        );
        assert_eq!(guard_route(&CookieJar::default(), "/login", &config), Navigation::Proceed);
    }

    #[test]
    fn test_custom_session_cookie() {
        let config = ClientConfig {
            session_cookie: "session".to_string(),
            ..ClientConfig::default()
        };

        assert_eq!(
            guard_layout(&signed_in(), "/friends", &config),
            Navigation::Redirect { status: 307, to: "/login".to_string() }
        );
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_reads_document_cookies() {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.dyn_into::<HtmlDocument>().ok())
            .unwrap();
        document.set_cookie("id=browser-session; path=/").unwrap();

        let jar = CookieJar::from_document();
        assert_eq!(jar.get("id"), Some("browser-session"));
        assert_eq!(guard_layout(&jar, "/domains", &ClientConfig::default()), Navigation::Proceed);
    }
}
