//! `GET /`: the demo page.

use axum::response::Html;
use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use tracing::debug;
use uuid::Uuid;

use super::WS_PATH;

pub(crate) const SESSION_COOKIE: &str = "session";

const TEMPLATE: &str = include_str!("../../templates/index.html");

/// Render the index template. The only substitution is the socket path.
#[must_use]
pub fn render_index() -> String {
    TEMPLATE.replace("{{ ws_path }}", WS_PATH)
}

/// Serve the page and make sure the browser holds a signed session id.
pub async fn index(jar: SignedCookieJar) -> (SignedCookieJar, Html<String>) {
    let jar = if jar.get(SESSION_COOKIE).is_some() {
        jar
    } else {
        let session_id = Uuid::new_v4().to_string();
        debug!(%session_id, "http: issuing session cookie");
        let cookie = Cookie::build((SESSION_COOKIE, session_id))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax);
        jar.add(cookie)
    };
    (jar, Html(render_index()))
}
