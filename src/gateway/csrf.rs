//! Anti-forgery token lookup in the client's cookie store

use reqwest::cookie::{CookieStore, Jar};
use reqwest::Url;

/// Header the server checks on every POST
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Find `name` in a `Cookie:` header value and percent-decode it
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key != name {
            return None;
        }
        urlencoding::decode(value)
            .map(|decoded| decoded.into_owned())
            .ok()
            .or_else(|| Some(value.to_string()))
    })
}

/// Current token for `url`, if the store holds one
pub fn token_for(jar: &Jar, url: &Url, cookie_name: &str) -> Option<String> {
    let header = jar.cookies(url)?;
    let header = header.to_str().ok()?;
    find_cookie(header, cookie_name).filter(|token| !token.is_empty())
}
