//! HTTP GET for the title lookup.
//!
//! Uses the curl crate (libcurl) with connect/total timeouts and redirect
//! following, capturing the body in memory. The body is capped: a page's
//! `<title>` sits in `<head>`, so once enough bytes arrived the transfer is
//! aborted and the prefix is parsed.

use super::TitleError;
use std::cell::Cell;
use std::time::Duration;

/// Upper bound on captured body bytes.
const MAX_BODY_BYTES: usize = 512 * 1024;

/// Performs a GET and returns the (possibly capped) response body.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async
/// code.
pub(super) fn fetch_body(
    url: &str,
    connect_timeout: Duration,
    timeout: Duration,
) -> Result<Vec<u8>, TitleError> {
    let mut body: Vec<u8> = Vec::new();
    let capped = Cell::new(false);

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(connect_timeout)?;
    easy.timeout(timeout)?;
    easy.useragent("linkbox/0.1")?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            if body.len() + data.len() > MAX_BODY_BYTES {
                capped.set(true);
                return Ok(0); // abort transfer, keep the prefix
            }
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        match transfer.perform() {
            Ok(()) => {}
            // Aborting from the write callback surfaces as a curl error;
            // the captured prefix is still usable.
            Err(_) if capped.get() => {}
            Err(e) => return Err(TitleError::Fetch(e)),
        }
    }

    if !capped.get() {
        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(TitleError::Http(code));
        }
    }

    Ok(body)
}
