// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only), with an optional cookie header

use std::{io::{Read, Write}, net::TcpStream, time::Duration};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported url: {0}")]
    BadUrl(String),
    #[error("HTTP error: {0}")]
    Status(String),
    #[error("malformed HTTP response")]
    Malformed,
}

/// GET `url` (plain `http://` only) and return the response body.
/// `cookie`, when present and non-empty, goes out as a `cookie` header.
pub fn http_get(url: &str, cookie: Option<&str>) -> Result<String, NetError> {
    let (host, path) = split_url(url)?;

    let mut s = TcpStream::connect((host, 80))?;
    s.set_read_timeout(Some(Duration::from_secs(15)))?;
    s.set_write_timeout(Some(Duration::from_secs(15)))?;

    let mut req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: dmm_scrape/0.2\r\nConnection: close\r\n",
        path, host
    );
    if let Some(c) = cookie.filter(|c| !c.is_empty()) {
        req.push_str(&format!("cookie: {c}\r\n"));
    }
    req.push_str("\r\n");
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    let resp = String::from_utf8_lossy(&buf);

    let status = resp.split("\r\n").next().unwrap_or("");
    if !status.contains("200") {
        return Err(NetError::Status(format!("{status} {url}")));
    }
    let body_idx = resp.find("\r\n\r\n").ok_or(NetError::Malformed)? + 4;
    Ok(resp[body_idx..].to_string())
}

// `http://host/path` → (host, path); port 80 only
fn split_url(url: &str) -> Result<(&str, &str), NetError> {
    let rest = url
        .strip_prefix("http://")
        .ok_or_else(|| NetError::BadUrl(s!(url)))?;
    match rest.find('/') {
        Some(i) => Ok((&rest[..i], &rest[i..])),
        None => Ok((rest, "/")),
    }
}

#[cfg(test)]
mod tests {
    use super::split_url;

    #[test]
    fn splits_host_and_path() {
        let (host, path) = split_url("http://www.dmm.com/netgame").unwrap();
        assert_eq!(host, "www.dmm.com");
        assert_eq!(path, "/netgame");
    }

    #[test]
    fn bare_host_gets_root_path() {
        let (host, path) = split_url("http://www.dmm.com").unwrap();
        assert_eq!(host, "www.dmm.com");
        assert_eq!(path, "/");
    }

    #[test]
    fn https_is_rejected() {
        assert!(split_url("https://www.dmm.com/").is_err());
    }
}
