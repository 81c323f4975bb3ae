//! Client-list parsing for per-client report sections.
//!
//! Names keep their exact spelling: the engine matches clients by exact
//! string equality, so parsing must not fold case or otherwise normalize.

use std::collections::HashSet;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ClientListError {
    #[error("empty token in client list")]
    EmptyToken,

    #[error("duplicate client: {0}")]
    DuplicateClient(String),
}

/// Parse a comma-separated client list, e.g. `"Tom Shelby, Grace Burgess"`.
/// Surrounding whitespace per token is trimmed; blank or duplicate entries
/// are rejected.
pub fn parse_clients(input: &str) -> Result<Vec<String>, ClientListError> {
    let mut clients = Vec::new();
    let mut seen = HashSet::new();

    for token in input.split(',') {
        let name = token.trim();
        if name.is_empty() {
            return Err(ClientListError::EmptyToken);
        }
        if !seen.insert(name.to_string()) {
            return Err(ClientListError::DuplicateClient(name.to_string()));
        }
        clients.push(name.to_string());
    }

    Ok(clients)
}
