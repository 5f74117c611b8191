//! Credential map construction
//!
//! Reads an htpasswd byte stream line by line and produces the complete
//! username-to-hash map, or fails on the first unrecognized line.

use std::collections::HashMap;
use std::io::BufRead;

use crate::error::HtpasswdError;
use crate::parser::grammar;

/// Parse an htpasswd stream into a map of usernames to bcrypt hashes.
///
/// Blank lines and `#` comments are skipped. A duplicate username keeps the
/// last occurrence. Any other line that is not a valid credential entry
/// fails the whole parse; a partially populated map is never returned.
/// Silently skipping unrecognized lines would let a corrupted credential
/// file pass unnoticed, so strictness is the contract here.
pub fn parse_credentials<R: BufRead>(reader: R) -> Result<HashMap<String, String>, HtpasswdError> {
    let mut users = HashMap::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || grammar::is_comment_line(line) {
            continue;
        }

        if grammar::is_credential_line(line) {
            if let Some((username, hash)) = line.split_once(':') {
                users.insert(username.to_string(), hash.to_string());
            }
        } else {
            return Err(HtpasswdError::InvalidLine(line.to_string()));
        }
    }

    Ok(users)
}
