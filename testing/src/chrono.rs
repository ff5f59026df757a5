//! A stand-in for `chrono::Utc` whose `now()` is set by the test.

use std::cell::Cell;

thread_local! {
    static TIMESTAMP: Cell<i64> = const { Cell::new(1234567890) };
}

/// Set the timestamp reported by `Utc::now()` for the current thread.
pub fn set_timestamp(timestamp: i64) {
    TIMESTAMP.with(|ts| ts.set(timestamp));
}

pub struct Utc;

impl Utc {
    pub fn now() -> ::chrono::DateTime<::chrono::Utc> {
        let timestamp = TIMESTAMP.with(Cell::get);
        ::chrono::DateTime::from_timestamp(timestamp, 0)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn controlled_now() {
        assert_eq!(Utc::now().timestamp(), 1234567890);
        set_timestamp(42);
        assert_eq!(Utc::now().timestamp(), 42);
    }
}
