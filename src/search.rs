//! Username prefix search
//!
//! Usernames are the local part of each account's email. They are loaded
//! into a [`PrefixIndex`], and every account whose username is among the
//! prefix matches is returned.

use crate::records::UserRecord;
use crate::trie::PrefixIndex;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Path parameters accepted by the search endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    pub prefix: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMatch {
    pub uid: String,
    pub email: String,
    pub username: String,
    pub role: String,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub prefix: String,
    pub matches: Vec<UserMatch>,
    pub count: usize,
}

/// Local part of an email address: everything before the first `@`
///
/// An address without `@` is returned whole.
pub fn username_from_email(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Finds the users whose username starts with `query.prefix`
///
/// `users` yields `(uid, record)` pairs. Users without an email are skipped.
/// Matches keep the input order, and two accounts that share a username are
/// both returned.
pub fn search_users<I, S, R>(users: I, query: &SearchQuery) -> SearchResult
where
    I: IntoIterator<Item = (S, R)>,
    S: AsRef<str>,
    R: Borrow<UserRecord>,
{
    let mut index = PrefixIndex::new();
    let mut candidates = Vec::new();

    for (uid, record) in users {
        let record = record.borrow();
        let Some(email) = record.email.as_deref().filter(|e| !e.is_empty()) else {
            continue;
        };
        let username = username_from_email(email);
        index.insert(username);
        candidates.push(UserMatch {
            uid: uid.as_ref().to_owned(),
            email: email.to_owned(),
            username: username.to_owned(),
            role: record.role.clone().unwrap_or_else(|| "unknown".to_string()),
            full_name: record.full_name.clone().unwrap_or_default(),
        });
    }

    let matched: FxHashSet<String> = index.search(&query.prefix).into_iter().collect();
    let matches: Vec<UserMatch> = candidates
        .into_iter()
        .filter(|user| matched.contains(&user.username))
        .collect();

    tracing::debug!(
        prefix = %query.prefix,
        indexed = index.len(),
        matched = matches.len(),
        "searched usernames"
    );

    SearchResult {
        prefix: query.prefix.clone(),
        count: matches.len(),
        matches,
    }
}
