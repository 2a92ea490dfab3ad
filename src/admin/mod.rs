use crate::storage::{KeyValueStore, ADMIN_KEY};
use anyhow::Result;
use tracing::{info, warn};

/// Compiled-in admin password.
///
/// This is a cosmetic gate, not access control: the password ships in the
/// binary and the flag sits in the same storage the user can edit.
pub const ADMIN_PASSWORD: &str = "admin123";

const ADMIN_MARKER: &str = "true";

/// Persisted admin flag gating listing management
#[derive(Debug)]
pub struct AdminSession<S> {
    storage: S,
}

impl<S: KeyValueStore> AdminSession<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn is_admin(&self) -> Result<bool> {
        Ok(self.storage.get(ADMIN_KEY)?.as_deref() == Some(ADMIN_MARKER))
    }

    /// Set the flag if `password` matches. A wrong password leaves the flag as it was.
    pub fn login(&self, password: &str) -> Result<bool> {
        if password != ADMIN_PASSWORD {
            warn!("Admin login rejected");
            return Ok(false);
        }

        self.storage.set(ADMIN_KEY, ADMIN_MARKER)?;
        info!("Admin logged in");
        Ok(true)
    }

    pub fn logout(&self) -> Result<()> {
        self.storage.remove(ADMIN_KEY)?;
        info!("Admin logged out");
        Ok(())
    }
}
