use crate::types::{HttpError, Payload};

/// The `(error, data, status)` triple every wrapped call resolves to.
///
/// On success `error` is `None` and `data` holds the normalized payload. On
/// failure `error` holds the normalized error and `data` holds the data
/// embedded in the error's response, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct SafeAwaitResult {
    pub error: Option<HttpError>,
    pub data: Option<Payload>,
    pub status: u16,
}

impl SafeAwaitResult {
    pub(crate) fn success(data: Payload, status: u16) -> Self {
        Self {
            error: None,
            data: Some(data),
            status,
        }
    }

    pub(crate) fn failure(error: HttpError, data: Option<Payload>, status: u16) -> Self {
        Self {
            error: Some(error),
            data,
            status,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }

    pub fn into_parts(self) -> (Option<HttpError>, Option<Payload>, u16) {
        (self.error, self.data, self.status)
    }

    /// Convert into a `Result`, dropping the failure-side data.
    pub fn into_result(self) -> std::result::Result<(Option<Payload>, u16), HttpError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok((self.data, self.status)),
        }
    }
}

impl From<SafeAwaitResult> for (Option<HttpError>, Option<Payload>, u16) {
    fn from(r: SafeAwaitResult) -> Self {
        r.into_parts()
    }
}
