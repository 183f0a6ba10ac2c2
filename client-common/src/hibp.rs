use std::io::{BufRead, Cursor};
use reqwest::{Method, StatusCode};
use sha1::{Digest, Sha1};
use eyre::{WrapErr, eyre};
use tracing::{debug, warn};

pub const RANGE_URL: &str = "https://api.pwnedpasswords.com/range/";

/// Uppercase SHA-1 of the password split into the 5-char prefix sent to the
/// API and the suffix looked up locally.
pub fn split_hash(password: &str) -> (String, String) {
    let hash = data_encoding::HEXUPPER.encode(Sha1::digest(password.as_bytes()).as_slice());
    let (prefix, suffix) = hash.split_at(5);
    (prefix.to_owned(), suffix.to_owned())
}

/// Finds `suffix` in a range response (`SUFFIX:COUNT` per line) and returns
/// its count, 0 when absent.
pub fn count_in_range(body: &str, suffix: &str) -> eyre::Result<u64> {
    for line in Cursor::new(body).lines() {
        let line = line.wrap_err("failed to parse HIBP response")?;
        let mut split_line = line.trim().split(':');
        let line_hash = split_line.next().ok_or_else(|| eyre!("failed to parse HIBP response"))?;
        if line_hash.eq_ignore_ascii_case(suffix) {
            let count = split_line.next().ok_or_else(|| eyre!("failed to parse HIBP response"))?;
            return count.trim().parse::<u64>().wrap_err("failed to parse HIBP response");
        }
    }
    Ok(0)
}

/// Number of times the password appears in known breaches. Only the hash
/// prefix leaves the machine.
pub async fn check_password(password: &str) -> eyre::Result<u64>
{
    let (prefix, suffix) = split_hash(password);
    let url = format!("{}{}", RANGE_URL, prefix);

    let resp = reqwest::Client::new()
        .request(Method::GET, &url)
        .header("Add-Padding", "true")
        .send().await?;

    match resp.status() {
        StatusCode::OK => {
            let count = count_in_range(&resp.text().await?, &suffix)?;
            if count > 0 {
                warn!("The password has been pwned {} times!", count);
            } else {
                debug!("The password has not been pwned.");
            }
            Ok(count)
        },
        status => {
            Err(eyre!("HIBP responded with status code {}", status))
        }
    }
}
