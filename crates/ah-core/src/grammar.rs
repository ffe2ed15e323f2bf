//! Hosts-file line grammar.
//!
//! A managed line looks like `[ws][127.0.0.1|0.0.0.0 ws]<hostname>[ws][# comment]`.
//! The same patterns are used when reading the existing hosts file and when
//! reading blocklists.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::hostset::Hostname;

/// Tag marking the boundary between user content and managed entries.
pub const SEPARATION_TAG: &str = "<-hosts-separation->";

/// Line written when the hosts file has no boundary yet.
pub const SENTINEL_LINE: &str =
    "# <-hosts-separation-> <-- DO NOT CHANGE THIS LINE. Any changes after this line will be lost!!\n";

/// Address every blocked hostname is pointed at.
pub const BLOCK_ADDRESS: &str = "0.0.0.0";

static HOSTNAME_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:(?:127\.0\.0\.1|0\.0\.0\.0)\s+)?([^#\s]+)\s*(?:#.*)?$")
        .expect("hostname line pattern is valid")
});

static SENTINEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^\S*#.*{}", regex::escape(SEPARATION_TAG)))
        .expect("sentinel pattern is valid")
});

const LOOPBACK_ALIASES: [&str; 2] = ["localhost", "localhost.localdomain"];

/// Extract the hostname from one raw line.
///
/// Returns `None` for blank lines, comments, loopback aliases and anything
/// that carries more than one token before its comment.
pub fn parse_hostname(line: &str) -> Option<Hostname> {
    let line = strip_terminator(line);
    let caps = HOSTNAME_LINE.captures(line)?;
    let candidate = caps.get(1)?.as_str();
    if LOOPBACK_ALIASES.contains(&candidate) {
        return None;
    }
    Some(Hostname::from_token(candidate))
}

/// True if the line is the boundary marker.
pub fn is_sentinel(line: &str) -> bool {
    SENTINEL.is_match(strip_terminator(line))
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
