//! Session identifier

use crate::storage::SessionStore;

const SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a fresh id: `session_<epoch-ms>_<9 base-36 chars>`
///
/// Without a random source the id degrades to `session_<epoch-ms>`.
pub fn generate_session_id(now_ms: f64) -> String {
    let millis = now_ms as u64;
    let mut bytes = [0u8; SUFFIX_LEN];
    match getrandom::getrandom(&mut bytes) {
        Ok(()) => {
            let suffix: String = bytes
                .iter()
                .map(|b| BASE36[usize::from(*b) % BASE36.len()] as char)
                .collect();
            format!("session_{}_{}", millis, suffix)
        }
        Err(e) => {
            log::warn!("[deck] no random source for session id: {}", e);
            format!("session_{}", millis)
        }
    }
}

/// Read the session id from the store, creating and saving it on first use
///
/// If the store fails, a time-based id is returned and not persisted.
pub fn resolve_session_id(store: &dyn SessionStore, key: &str, now_ms: f64) -> String {
    match store.get(key) {
        Ok(Some(id)) if !id.is_empty() => id,
        Ok(_) => {
            let id = generate_session_id(now_ms);
            if let Err(e) = store.set(key, &id) {
                log::warn!("[deck] session id not persisted: {}", e);
            }
            id
        }
        Err(e) => {
            log::warn!("[deck] session store unavailable, using time-based id: {}", e);
            format!("session_{}", now_ms as u64)
        }
    }
}
