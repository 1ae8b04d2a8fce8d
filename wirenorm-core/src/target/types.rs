use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestTargetForm {
    /// `/path?query`
    Origin,
    /// `scheme://authority/path?query#fragment` (client only)
    Absolute,
    /// `*`, as in `OPTIONS * HTTP/1.1`
    Asterisk,
}

/// Server-side parsing knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TargetOptions {
    /// Keep `;` (and `;name=value` matrix variables) in the canonical path.
    pub allow_semicolon_in_path: bool,
    /// Skip the `..` check on the query string.
    pub allow_double_dots_in_query: bool,
}

/// A canonical request target.
///
/// Constructed only by the parser; never mutated afterwards. Two targets are
/// equal when their scheme, authority, path, query and fragment are equal.
#[derive(Debug, Clone, Serialize)]
pub struct RequestTarget {
    form: RequestTargetForm,
    scheme: Option<String>,
    authority: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    path: String,
    path_with_matrix_variables: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl RequestTarget {
    pub(crate) fn asterisk() -> Self {
        Self {
            form: RequestTargetForm::Asterisk,
            ..Self::origin("*".to_string(), "*".to_string(), None, None)
        }
    }

    pub(crate) fn origin(
        path: String,
        path_with_matrix_variables: String,
        query: Option<String>,
        fragment: Option<String>,
    ) -> Self {
        Self {
            form: RequestTargetForm::Origin,
            scheme: None,
            authority: None,
            host: None,
            port: None,
            path,
            path_with_matrix_variables,
            query,
            fragment,
        }
    }

    pub(crate) fn absolute(
        endpoint: SchemeAndAuthority,
        path: String,
        query: Option<String>,
        fragment: Option<String>,
    ) -> Self {
        Self {
            form: RequestTargetForm::Absolute,
            scheme: Some(endpoint.scheme),
            authority: Some(endpoint.authority),
            host: Some(endpoint.host),
            port: endpoint.port,
            path_with_matrix_variables: path.clone(),
            path,
            query,
            fragment,
        }
    }

    pub fn form(&self) -> RequestTargetForm {
        self.form
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    pub fn authority(&self) -> Option<&str> {
        self.authority.as_deref()
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// The explicit port, absent when the URI had none or it was the
    /// scheme's default.
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The canonical path before matrix variables were stripped.
    pub fn path_with_matrix_variables(&self) -> &str {
        &self.path_with_matrix_variables
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// `path[?query]`, the value carried by an HTTP/2 `:path` pseudo-header.
    pub fn path_and_query(&self) -> String {
        match &self.query {
            Some(q) => format!("{}?{}", self.path, q),
            None => self.path.clone(),
        }
    }
}

impl PartialEq for RequestTarget {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
            && self.query == other.query
            && self.fragment == other.fragment
            && self.authority == other.authority
            && self.scheme == other.scheme
    }
}

impl Eq for RequestTarget {}

impl Hash for RequestTarget {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.scheme.hash(state);
        self.authority.hash(state);
        self.path.hash(state);
        self.query.hash(state);
        self.fragment.hash(state);
    }
}

impl fmt::Display for RequestTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(scheme), Some(authority)) = (&self.scheme, &self.authority) {
            write!(f, "{scheme}://{authority}")?;
        }
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

/// The normalized scheme and authority of an absolute-form URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeAndAuthority {
    pub scheme: String,
    pub authority: String,
    pub host: String,
    pub port: Option<u16>,
}
