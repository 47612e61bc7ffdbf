// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only)
//
// The FFME result pages sit behind TLS, which this stack does not speak.
// Same constraint, same answer as the original tool: route the request
// through a relay endpoint that fetches the page server-side and returns
// the raw HTML body. Plain http:// targets are fetched directly.

use std::{io::{Read, Write}, net::TcpStream, time::Duration};

use crate::config::consts::{RELAY_PATH, USER_AGENT};

/// Fetch the document for `url`. With a relay (`host[:port]`), the request
/// goes `GET {RELAY_PATH}?url=<encoded>` against the relay; without one,
/// only `http://` URLs are reachable.
pub fn fetch_page(url: &str, relay: Option<&str>) -> Result<String, Box<dyn std::error::Error>> {
    match relay {
        Some(r) => {
            let (host, port) = split_host_port(r)?;
            let path = join!(RELAY_PATH, "?url=", &percent_encode(url));
            http_get(&host, port, &path)
        }
        None => {
            let (host, port, path) = split_url(url)?;
            http_get(&host, port, &path)
        }
    }
}

pub fn http_get(host: &str, port: u16, path: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mut s = TcpStream::connect((host, port))?;
    s.set_read_timeout(Some(Duration::from_secs(15)))?;
    s.set_write_timeout(Some(Duration::from_secs(15)))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: {}\r\nConnection: close\r\n\r\n",
        path, host, USER_AGENT
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    let resp = String::from_utf8_lossy(&buf);

    let status = resp.split("\r\n").next().unwrap_or("");
    if !status.contains("200") {
        return Err(format!("HTTP error: {} {}{}", status, host, path).into());
    }
    let body_idx = resp.find("\r\n\r\n").ok_or("Malformed HTTP response")? + 4;
    Ok(resp[body_idx..].to_string())
}

/// `http://host[:port]/path` → (host, port, path). Refuses https: the relay
/// exists precisely for those targets.
fn split_url(url: &str) -> Result<(String, u16, String), Box<dyn std::error::Error>> {
    if let Some(rest) = url.strip_prefix("https://") {
        let host = rest.split('/').next().unwrap_or(rest);
        return Err(format!(
            "{host} is https-only; pass a relay (--relay) or a saved page (--file)"
        ).into());
    }
    let rest = url.strip_prefix("http://").ok_or("Expected an http:// or https:// URL")?;
    let (authority, path) = match rest.find('/') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, "/"),
    };
    let (host, port) = split_host_port(authority)?;
    Ok((host, port, path.to_string()))
}

fn split_host_port(authority: &str) -> Result<(String, u16), Box<dyn std::error::Error>> {
    match authority.split_once(':') {
        Some((h, p)) => Ok((s!(h), p.parse()?)),
        None => Ok((s!(authority), 80)),
    }
}

/// Just enough escaping for a URL handed over as a query parameter.
fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9'
            | b'-' | b'_' | b'.' | b'~' => out.push(b as char),
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}
