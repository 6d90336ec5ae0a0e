use std::collections::HashMap;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::net::TcpStream;

use log::{debug, info, trace};
use thiserror::Error;

use crate::response::Response;
use crate::url::Url;

const HTTP_PORT: u16 = 80;

/// Response headers that signal a body framing we do not decode.
const UNSUPPORTED_ENCODINGS: [&str; 2] = ["transfer-encoding", "content-encoding"];

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not connect to {host}: {source}")]
    Connect { host: String, source: io::Error },

    #[error("i/o error while talking to the server")]
    Io(#[from] io::Error),

    #[error("malformed response: {0}")]
    Protocol(String),

    #[error("server sent a {0} header; encoded bodies are not supported")]
    UnsupportedResponse(&'static str),

    #[error("response is not valid utf-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Downloads the page at `url` over one plain-text HTTP/1.0 exchange.
///
/// Opens a single TCP connection to the host on port 80, sends a GET for the
/// path and reads the response until the server closes the connection, as
/// HTTP/1.0 servers do after a full reply. The connection is closed on every
/// exit path. There is no timeout: a stalled server stalls the fetch.
pub fn fetch(url: &Url) -> Result<Response, FetchError> {
    info!("connecting to {}:{}", url.host(), HTTP_PORT);
    let stream =
        TcpStream::connect((url.host(), HTTP_PORT)).map_err(|source| FetchError::Connect {
            host: url.host().to_string(),
            source,
        })?;
    exchange(stream, url.host(), url.path())
}

/// Runs the request/response exchange over an already connected stream.
fn exchange<S: Read + Write>(mut stream: S, host: &str, path: &str) -> Result<Response, FetchError> {
    // The blank line after the headers is what tells the server the request
    // is complete; without it the server waits forever.
    let request = format!("GET {path} HTTP/1.0\r\nHost: {host}\r\n\r\n");
    debug!("request:\n{request}");

    stream.write_all(request.as_bytes())?;
    read_response(BufReader::new(stream))
}

fn read_response<R: BufRead>(mut reader: R) -> Result<Response, FetchError> {
    let status_line = read_crlf_line(&mut reader)?;
    let (version, rest) = status_line
        .split_once(' ')
        .ok_or_else(|| FetchError::Protocol(format!("bad status line {status_line:?}")))?;
    let (status, reason) = rest
        .split_once(' ')
        .ok_or_else(|| FetchError::Protocol(format!("bad status line {status_line:?}")))?;
    let status: u32 = status
        .parse()
        .map_err(|_| FetchError::Protocol(format!("non-numeric status code {status:?}")))?;
    debug!("{version} {status} {reason}");

    let mut headers = HashMap::new();
    loop {
        let line = read_crlf_line(&mut reader)?;
        if line.is_empty() {
            break;
        }
        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| FetchError::Protocol(format!("header line without colon: {line:?}")))?;
        trace!("header {key}: {value}");
        // Header names are case-insensitive and surrounding whitespace in
        // values is insignificant; a repeated header keeps the last value.
        headers.insert(key.to_lowercase(), value.trim().to_string());
    }

    for name in UNSUPPORTED_ENCODINGS {
        if headers.contains_key(name) {
            return Err(FetchError::UnsupportedResponse(name));
        }
    }

    // HTTP/1.0: the body is everything up to the server closing the stream.
    let mut body = Vec::new();
    reader.read_to_end(&mut body)?;
    let body = String::from_utf8(body)?;

    Ok(Response::new(
        version.to_string(),
        status,
        reason.to_string(),
        headers,
        body,
    ))
}

/// Reads one CRLF-terminated line, returning it without the terminator.
///
/// HTTP lines end in `\r\n`; a line cut short by EOF or ending in a bare
/// `\n` means the framing is broken.
fn read_crlf_line<R: BufRead>(reader: &mut R) -> Result<String, FetchError> {
    let mut buf = Vec::new();
    reader.read_until(b'\n', &mut buf)?;
    if !buf.ends_with(b"\r\n") {
        return Err(FetchError::Protocol(format!(
            "line not terminated by CRLF: {:?}",
            String::from_utf8_lossy(&buf)
        )));
    }
    buf.truncate(buf.len() - 2);
    Ok(String::from_utf8(buf)?)
}
