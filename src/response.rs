use std::collections::HashMap;

/// A fully read HTTP response.
///
/// Header keys are lower-cased and values trimmed at parse time; a repeated
/// header keeps the last value seen.
#[derive(Debug)]
pub struct Response {
    version: String,
    status: u32,
    reason: String,
    headers: HashMap<String, String>,
    body: String,
}

impl Response {
    pub(crate) fn new(
        version: String,
        status: u32,
        reason: String,
        headers: HashMap<String, String>,
        body: String,
    ) -> Self {
        Self {
            version,
            status,
            reason,
            headers,
            body,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn status(&self) -> u32 {
        self.status
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Looks up a header by its lower-cased name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}
