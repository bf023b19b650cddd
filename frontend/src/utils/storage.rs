//! Session persistence keys and a thin wrapper over `localStorage`.
//!
//! On the host the browser storage is replaced by a thread-local map so
//! session logic stays exercisable from plain `cargo test`.

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

#[cfg(target_arch = "wasm32")]
mod backend {
    use web_sys::Storage;

    fn local_storage() -> Result<Storage, String> {
        web_sys::window()
            .ok_or_else(|| "No window object".to_string())?
            .local_storage()
            .map_err(|_| "No localStorage".to_string())?
            .ok_or_else(|| "No localStorage".to_string())
    }

    pub fn get_item(key: &str) -> Option<String> {
        local_storage().ok()?.get_item(key).ok().flatten()
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), String> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| format!("Failed to store {}", key))
    }

    pub fn remove_item(key: &str) {
        if let Ok(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get_item(key: &str) -> Option<String> {
        STORE.with(|store| store.borrow().get(key).cloned())
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), String> {
        STORE.with(|store| {
            store.borrow_mut().insert(key.to_string(), value.to_string());
        });
        Ok(())
    }

    pub fn remove_item(key: &str) {
        STORE.with(|store| {
            store.borrow_mut().remove(key);
        });
    }
}

pub fn get_item(key: &str) -> Option<String> {
    backend::get_item(key)
}

pub fn set_item(key: &str, value: &str) -> Result<(), String> {
    backend::set_item(key, value)
}

pub fn remove_item(key: &str) {
    backend::remove_item(key);
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_round_trip() {
        set_item("k", "v").unwrap();
        assert_eq!(get_item("k").as_deref(), Some("v"));
        remove_item("k");
        assert!(get_item("k").is_none());
    }

    #[test]
    fn remove_is_idempotent() {
        remove_item("absent");
        remove_item("absent");
        assert!(get_item("absent").is_none());
    }
}
