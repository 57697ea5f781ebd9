//! Audit identity resolution.
//!
//! The identity string is only ever attached to writes as an audit
//! attribute; nothing here validates it or manages a session.

use crate::config::Config;
use std::env;

pub fn current_user(cfg: &Config) -> String {
    if let Some(user) = &cfg.user
        && !user.trim().is_empty()
    {
        return user.trim().to_string();
    }

    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string())
}
