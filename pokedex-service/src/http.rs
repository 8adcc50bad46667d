use std::fmt::{
    self,
    Display,
};

use anyhow::Error;
use pokedex::error::{
    WrapOptionError,
    general_error,
};

/// HTTP request method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Other(String),
}

impl From<&str> for Method {
    fn from(value: &str) -> Self {
        match value {
            "GET" => Self::Get,
            "HEAD" => Self::Head,
            _ => Self::Other(value.to_owned()),
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Head => write!(f, "HEAD"),
            Self::Other(method) => write!(f, "{method}"),
        }
    }
}

/// Decoded query string of a request.
///
/// Pairs are kept in request order. A key without `=` has an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Parses a raw query string, without the leading `?`.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        let pairs = raw
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
                Ok((
                    percent_decode(key, true)?,
                    percent_decode(value, true)?,
                ))
            })
            .collect::<Result<Vec<_>, Error>>()?;
        Ok(Self { pairs })
    }

    /// The first value for the given key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value.as_str())
    }

    /// Checks if the key is present, with or without a value.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// A parsed HTTP request head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    /// Percent-decoded path.
    pub path: String,
    /// Query string, if the request target contained a `?`.
    pub query: Option<Query>,
}

impl Request {
    /// Creates a GET request for the given target.
    pub fn get(target: &str) -> Result<Self, Error> {
        Self::new(Method::Get, target)
    }

    /// Creates a request for the given method and request target.
    pub fn new(method: Method, target: &str) -> Result<Self, Error> {
        if !target.starts_with('/') {
            return Err(general_error(format!("invalid request target {target}")));
        }
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, Some(Query::parse(query)?)),
            None => (target, None),
        };
        Ok(Self {
            method,
            path: percent_decode(path, false)?,
            query,
        })
    }

    /// Parses a request line, such as `GET /list?types HTTP/1.1`.
    pub fn parse_request_line(line: &str) -> Result<Self, Error> {
        let mut parts = line.split_whitespace();
        let method = parts.next().wrap_expectation("missing request method")?;
        let target = parts.next().wrap_expectation("missing request target")?;
        let version = parts.next().wrap_expectation("missing protocol version")?;
        if !version.starts_with("HTTP/") {
            return Err(general_error(format!("unsupported protocol {version}")));
        }
        if parts.next().is_some() {
            return Err(general_error("unexpected data after protocol version"));
        }
        Self::new(Method::from(method), target)
    }
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Decodes `%XX` escapes. In query strings, `+` is also decoded as a space.
fn percent_decode(value: &str, plus_as_space: bool) -> Result<String, Error> {
    let bytes = value.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let byte = bytes
                    .get(i + 1)
                    .and_then(|&hi| hex_value(hi))
                    .zip(bytes.get(i + 2).and_then(|&lo| hex_value(lo)))
                    .map(|(hi, lo)| hi << 4 | lo)
                    .wrap_expectation(format!("invalid percent escape in {value}"))?;
                decoded.push(byte);
                i += 3;
            }
            b'+' if plus_as_space => {
                decoded.push(b' ');
                i += 1;
            }
            byte => {
                decoded.push(byte);
                i += 1;
            }
        }
    }
    String::from_utf8(decoded).map_err(Error::new)
}

/// HTTP response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok,
    BadRequest,
    NotFound,
    MethodNotAllowed,
    RequestHeaderFieldsTooLarge,
    InternalServerError,
}

impl StatusCode {
    pub fn code(&self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::RequestHeaderFieldsTooLarge => 431,
            Self::InternalServerError => 500,
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::BadRequest => "Bad Request",
            Self::NotFound => "Not Found",
            Self::MethodNotAllowed => "Method Not Allowed",
            Self::RequestHeaderFieldsTooLarge => "Request Header Fields Too Large",
            Self::InternalServerError => "Internal Server Error",
        }
    }
}

impl Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}

/// A plain-text HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub body: String,
}

impl Response {
    /// A successful response with the given body.
    pub fn ok<B>(body: B) -> Self
    where
        B: Into<String>,
    {
        Self {
            status: StatusCode::Ok,
            body: body.into(),
        }
    }

    /// An error response. The message is terminated with a newline.
    pub fn error<M>(status: StatusCode, message: M) -> Self
    where
        M: Display,
    {
        Self {
            status,
            body: format!("{message}\n"),
        }
    }

    /// Serializes the response for the wire.
    ///
    /// The body is left out when `include_body` is false, but `Content-Length` still describes it.
    pub fn to_bytes(&self, agent: &str, include_body: bool) -> Vec<u8> {
        let mut bytes = format!(
            "HTTP/1.1 {}\r\nServer: {agent}\r\nContent-Type: text/plain; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            self.status,
            self.body.len(),
        )
        .into_bytes();
        if include_body {
            bytes.extend_from_slice(self.body.as_bytes());
        }
        bytes
    }
}
