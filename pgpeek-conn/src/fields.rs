//! Field extractors for raw connection strings.

use tracing::trace;

/// Placeholder returned when the SSL mode or host is absent.
pub const NOT_SPECIFIED: &str = "not specified";

/// Placeholder returned when no port can be located.
pub const DEFAULT_PORT: &str = "5432 (default)";

const SSLMODE_KEY: &str = "sslmode=";

/// The three display fields of a connection string.
///
/// Every field borrows from the input or is one of the static placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionFields<'a> {
    /// Value of the `sslmode` option, verbatim.
    pub ssl_mode: &'a str,
    /// Host name, without port.
    pub host: &'a str,
    /// Port, as written.
    pub port: &'a str,
}

impl<'a> ConnectionFields<'a> {
    /// Extract all three fields from `conn`.
    pub fn extract(conn: &'a str) -> Self {
        let fields = Self {
            ssl_mode: ssl_mode(conn),
            host: host(conn),
            port: port(conn),
        };
        trace!(
            ssl_mode = fields.ssl_mode,
            host = fields.host,
            port = fields.port,
            "Connection string fields extracted"
        );
        fields
    }
}

/// Extract the `sslmode` option.
///
/// Returns everything after the first `sslmode=` up to the next `&`. The
/// value is not URL-decoded, and `sslmode=` with nothing after it yields an
/// empty string rather than [`NOT_SPECIFIED`].
pub fn ssl_mode(conn: &str) -> &str {
    match conn.split_once(SSLMODE_KEY) {
        Some((_, rest)) => before(rest, '&'),
        None => NOT_SPECIFIED,
    }
}

/// Extract the host.
///
/// Takes the text after the first `@`, cut at the first `/` and then at the
/// first `:`. When a credential contains an unescaped `@`, the first one
/// still wins.
pub fn host(conn: &str) -> &str {
    match conn.split_once('@') {
        Some((_, rest)) => before(before(rest, '/'), ':'),
        None => NOT_SPECIFIED,
    }
}

/// Extract the port.
///
/// Strings with fewer than two colons never carry a port in practice and
/// yield [`DEFAULT_PORT`]. Otherwise the port is read from the authority
/// (after `://`, cut at the first `/` and `?`), past the last `@` in it.
/// An `@` in the path or query therefore never shifts the host, and a URL
/// without a password still reports its port.
pub fn port(conn: &str) -> &str {
    if conn.matches(':').count() < 2 {
        return DEFAULT_PORT;
    }

    let rest = conn.split_once("://").map_or(conn, |(_, rest)| rest);
    let authority = before(before(rest, '/'), '?');
    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host_port)| host_port);

    // Bracketed IPv6 literal: the port follows the closing bracket
    let host_port = match host_port.strip_prefix('[') {
        Some(bracketed) => bracketed.split_once(']').map_or("", |(_, tail)| tail),
        None => host_port,
    };

    match host_port.split_once(':') {
        Some((_, port)) => port,
        None => DEFAULT_PORT,
    }
}

/// Everything before the first `delim`, or all of `s`.
fn before(s: &str, delim: char) -> &str {
    s.split_once(delim).map_or(s, |(head, _)| head)
}
