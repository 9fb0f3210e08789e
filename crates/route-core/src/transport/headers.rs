//! Request Headers
//!
//! Forgery-prevention token lookup from the page's cookie store.

use percent_encoding::percent_decode_str;

/// Source of the cookies the forgery-prevention token is read from
pub trait HeaderProvider {
    /// Raw cookie string in `document.cookie` format (`a=1; b=2`)
    fn cookies(&self) -> String;

    fn csrf_token(&self, cookie_name: &str) -> Option<String> {
        cookie_value(&self.cookies(), cookie_name)
    }
}

/// Fixed cookie string, e.g. a `Cookie` header captured elsewhere
impl HeaderProvider for String {
    fn cookies(&self) -> String {
        self.clone()
    }
}

impl HeaderProvider for &'static str {
    fn cookies(&self) -> String {
        (*self).to_string()
    }
}

/// Find `name` in a cookie string and percent-decode its value
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
        .map(|raw| percent_decode_str(raw).decode_utf8_lossy().into_owned())
}
