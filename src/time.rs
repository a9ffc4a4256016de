use chrono::{DateTime, Utc};

pub fn now_utc() -> DateTime<Utc> {
    #[cfg(miri)]
    {
        DateTime::<Utc>::UNIX_EPOCH
    }
    #[cfg(not(miri))]
    {
        Utc::now()
    }
}
