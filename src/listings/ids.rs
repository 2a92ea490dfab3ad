use crate::models::Property;
use anyhow::{Context, Result};
use chrono::Utc;
use std::cell::Cell;
use std::fmt;

type Clock = Box<dyn Fn() -> i64>;

/// Issues listing ids as decimal millisecond timestamps.
///
/// A new id is always strictly greater than every numeric id already in the
/// collection and every id this generator handed out before, so creations
/// inside the same millisecond get consecutive ids instead of colliding.
pub struct IdGenerator {
    clock: Clock,
    last_issued: Cell<i64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::with_clock(|| Utc::now().timestamp_millis())
    }

    /// Generator driven by a custom millisecond clock
    pub fn with_clock(clock: impl Fn() -> i64 + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            last_issued: Cell::new(i64::MIN),
        }
    }

    /// Fails once the highest id in use is `i64::MAX` and no larger id exists.
    pub fn next_id(&self, existing: &[Property]) -> Result<String> {
        let highest_existing = existing
            .iter()
            .filter_map(|p| p.id.parse::<i64>().ok())
            .max()
            .unwrap_or(i64::MIN);

        let highest = highest_existing.max(self.last_issued.get());
        let floor = highest
            .checked_add(1)
            .with_context(|| format!("No listing id left above {}", highest))?;
        let id = (self.clock)().max(floor);
        self.last_issued.set(id);
        Ok(id.to_string())
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdGenerator")
            .field("last_issued", &self.last_issued.get())
            .finish()
    }
}
