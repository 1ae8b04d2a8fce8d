use crate::headers::RequestHeaders;
use crate::target::RequestTarget;
use http::Method;

/// A request head whose target and headers are both canonical.
#[derive(Debug, Clone)]
pub struct NormalizedRequest {
    method: Method,
    target: RequestTarget,
    headers: RequestHeaders,
}

impl NormalizedRequest {
    pub fn new(method: Method, target: RequestTarget, headers: RequestHeaders) -> Self {
        Self {
            method,
            target,
            headers,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn target(&self) -> &RequestTarget {
        &self.target
    }

    pub fn headers(&self) -> &RequestHeaders {
        &self.headers
    }

    pub fn into_inner(self) -> (Method, RequestTarget, RequestHeaders) {
        (self.method, self.target, self.headers)
    }
}
