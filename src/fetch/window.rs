use crate::{Error, Result};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

/// Inclusive `[start, end]` instant range used to filter messages by
/// calendar day. An absent `end` leaves the range open upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
}

impl Window {
    /// From local midnight of the current date, unbounded upward.
    pub fn today() -> Result<Self> {
        Ok(Self {
            start: local_midnight(Local::now().date_naive())?,
            end: None,
        })
    }

    /// The full given calendar day in the local timezone, from midnight to
    /// 23:59:59.999.
    pub fn for_date(date: NaiveDate) -> Result<Self> {
        let end_naive = date
            .and_hms_milli_opt(23, 59, 59, 999)
            .ok_or_else(|| Error::config(format!("Invalid date: {}", date)))?;
        let end = Local
            .from_local_datetime(&end_naive)
            .earliest()
            .ok_or_else(|| Error::config(format!("No local end of day for {}", date)))?
            .with_timezone(&Utc);

        Ok(Self {
            start: local_midnight(date)?,
            end: Some(end),
        })
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && self.end.is_none_or(|end| instant <= end)
    }
}

fn local_midnight(date: NaiveDate) -> Result<DateTime<Utc>> {
    let naive = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| Error::config(format!("Invalid date: {}", date)))?;

    // DST transitions can make a local midnight ambiguous or skipped;
    // `earliest` resolves both the same way the platform clients do.
    Ok(Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| Error::config(format!("No local midnight for {}", date)))?
        .with_timezone(&Utc))
}
