use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use parking_lot::{Mutex, RwLock};
use uuid::Uuid;

/// One in-memory collection keyed by record id.
pub(crate) struct Table<T> {
    rows: RwLock<HashMap<Uuid, T>>,
}

impl<T: Clone> Table<T> {
    pub(crate) fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }

    pub(crate) fn get(&self, id: Uuid) -> Option<T> {
        self.rows.read().get(&id).cloned()
    }

    pub(crate) fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.read().values().find(|row| pred(row)).cloned()
    }

    pub(crate) fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows
            .read()
            .values()
            .filter(|row| pred(row))
            .cloned()
            .collect()
    }

    pub(crate) fn insert(&self, id: Uuid, row: T) -> T {
        self.rows.write().insert(id, row.clone());
        row
    }

    /// Applies `f` to the row in place and returns the result, or `None` if absent.
    pub(crate) fn modify(&self, id: Uuid, f: impl FnOnce(&mut T)) -> Option<T> {
        let mut rows = self.rows.write();
        let row = rows.get_mut(&id)?;
        f(row);
        Some(row.clone())
    }

    /// Like `modify`, but edits a copy and only stores it if `f` accepts the result.
    pub(crate) fn try_modify<E>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut T) -> Result<(), E>,
    ) -> Option<Result<T, E>> {
        let mut rows = self.rows.write();
        let row = rows.get_mut(&id)?;
        let mut draft = row.clone();
        Some(f(&mut draft).map(|()| {
            *row = draft.clone();
            draft
        }))
    }

    pub(crate) fn remove(&self, id: Uuid) -> bool {
        self.rows.write().remove(&id).is_some()
    }
}

/// Timestamp source for one store.
///
/// Every stamp is strictly later than the previous one, so recency ordering
/// is total and `updated_at` always moves forward even if the wall clock
/// has not.
pub(crate) struct Clock {
    last: Mutex<DateTime<Utc>>,
}

impl Clock {
    pub(crate) fn new() -> Self {
        Self {
            last: Mutex::new(DateTime::<Utc>::MIN_UTC),
        }
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        let mut last = self.last.lock();
        let now = Utc::now();
        *last = if now > *last {
            now
        } else {
            *last + Duration::microseconds(1)
        };
        *last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_modify_keeps_the_row_when_rejected() {
        let table: Table<u32> = Table::new();
        let id = Uuid::new_v4();
        table.insert(id, 1);

        let rejected = table.try_modify(id, |v| {
            *v = 99;
            Err("too big")
        });
        assert_eq!(rejected, Some(Err("too big")));
        assert_eq!(table.get(id), Some(1));

        let accepted = table.try_modify(id, |v| {
            *v += 1;
            Ok::<(), &str>(())
        });
        assert_eq!(accepted, Some(Ok(2)));
        assert_eq!(table.get(id), Some(2));
        assert!(table.try_modify(Uuid::new_v4(), |_| Ok::<(), &str>(())).is_none());
    }

    #[test]
    fn modify_returns_none_for_missing_rows() {
        let table: Table<u32> = Table::new();
        assert!(table.modify(Uuid::new_v4(), |v| *v += 1).is_none());
    }

    #[test]
    fn modify_updates_in_place() {
        let table = Table::new();
        let id = Uuid::new_v4();
        table.insert(id, 1u32);

        assert_eq!(table.modify(id, |v| *v += 1), Some(2));
        assert_eq!(table.get(id), Some(2));
    }

    #[test]
    fn remove_reports_whether_a_row_existed() {
        let table = Table::new();
        let id = Uuid::new_v4();
        table.insert(id, "row");

        assert!(table.remove(id));
        assert!(!table.remove(id));
    }

    #[test]
    fn clock_is_strictly_monotonic() {
        let clock = Clock::new();
        let mut previous = clock.now();
        for _ in 0..1_000 {
            let next = clock.now();
            assert!(next > previous);
            previous = next;
        }
    }

    #[test]
    fn clock_keeps_moving_when_wall_time_lags() {
        let clock = Clock::new();
        let future = Utc::now() + Duration::seconds(60);
        *clock.last.lock() = future;
        assert!(clock.now() > future);
    }
}
