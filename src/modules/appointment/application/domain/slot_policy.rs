use chrono::{
    DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime, Offset, TimeZone, Timelike,
    Utc, Weekday,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlotError {
    #[error("Appointments can only be booked Monday to Friday, 9 AM to 4 PM, on the hour")]
    OutsideBusinessHours,

    #[error("Cannot book appointments in the past")]
    InPast,
}

/// Clinic opening hours. Hourly slots from `open_hour` up to (not including)
/// `close_hour`, Monday to Friday, read in the clinic's UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPolicy {
    offset: FixedOffset,
    open_hour: u32,
    close_hour: u32,
}

impl SlotPolicy {
    pub const OPEN_HOUR: u32 = 9;
    pub const CLOSE_HOUR: u32 = 16;

    pub fn new(offset: FixedOffset) -> Self {
        Self {
            offset,
            open_hour: Self::OPEN_HOUR,
            close_hour: Self::CLOSE_HOUR,
        }
    }

    /// Reads `CLINIC_UTC_OFFSET_MINUTES`; UTC when unset or out of range.
    pub fn from_env() -> Self {
        let offset = std::env::var("CLINIC_UTC_OFFSET_MINUTES")
            .ok()
            .and_then(|v| v.trim().parse::<i32>().ok())
            .and_then(|minutes| FixedOffset::east_opt(minutes * 60))
            .unwrap_or_else(utc_offset);

        Self::new(offset)
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn to_clinic_time(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(&self.offset)
    }

    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        self.to_clinic_time(now).date_naive()
    }

    fn is_open_day(day: NaiveDate) -> bool {
        !matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
    }

    pub fn is_valid_slot(&self, instant: DateTime<Utc>) -> bool {
        let local = self.to_clinic_time(instant);

        Self::is_open_day(local.date_naive())
            && (self.open_hour..self.close_hour).contains(&local.hour())
            && local.minute() == 0
            && local.second() == 0
            && local.nanosecond() == 0
    }

    pub fn validate_booking(
        &self,
        instant: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<(), SlotError> {
        if !self.is_valid_slot(instant) {
            return Err(SlotError::OutsideBusinessHours);
        }
        if instant < now {
            return Err(SlotError::InPast);
        }
        Ok(())
    }

    fn at(&self, day: NaiveDate, hour: u32) -> Option<DateTime<Utc>> {
        let time = NaiveTime::from_hms_opt(hour, 0, 0)?;
        self.offset
            .from_local_datetime(&day.and_time(time))
            .single()
            .map(|t| t.with_timezone(&Utc))
    }

    /// Every slot of `day`, regardless of bookings. Empty on weekends.
    pub fn slots_for(&self, day: NaiveDate) -> Vec<DateTime<Utc>> {
        if !Self::is_open_day(day) {
            return Vec::new();
        }

        (self.open_hour..self.close_hour)
            .filter_map(|hour| self.at(day, hour))
            .collect()
    }

    /// Slots of `day` that are neither taken nor already started.
    pub fn available_slots(
        &self,
        day: NaiveDate,
        taken: &[DateTime<Utc>],
        now: DateTime<Utc>,
    ) -> Vec<DateTime<Utc>> {
        self.slots_for(day)
            .into_iter()
            .filter(|slot| *slot >= now)
            .filter(|slot| !taken.contains(slot))
            .collect()
    }

    /// `[start, end)` of a clinic calendar day in UTC.
    pub fn day_bounds(&self, day: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = self
            .offset
            .from_local_datetime(&day.and_time(NaiveTime::MIN))
            .single()
            .map(|t| t.with_timezone(&Utc))
            .unwrap_or_else(|| day.and_time(NaiveTime::MIN).and_utc());

        (start, start + Duration::days(1))
    }
}

impl Default for SlotPolicy {
    fn default() -> Self {
        Self::new(utc_offset())
    }
}

fn utc_offset() -> FixedOffset {
    Utc.fix()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    // 2030-01-07 is a Monday
    const MONDAY: (i32, u32, u32) = (2030, 1, 7);

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(MONDAY.0, MONDAY.1, MONDAY.2).unwrap()
    }

    fn long_ago() -> DateTime<Utc> {
        utc(2020, 1, 1, 0, 0)
    }

    #[test]
    fn weekday_has_seven_hourly_slots() {
        let slots = SlotPolicy::default().slots_for(monday());

        assert_eq!(slots.len(), 7);
        assert_eq!(slots.first(), Some(&utc(2030, 1, 7, 9, 0)));
        assert_eq!(slots.last(), Some(&utc(2030, 1, 7, 15, 0)));
    }

    #[test]
    fn weekend_has_no_slots() {
        let saturday = NaiveDate::from_ymd_opt(2030, 1, 5).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2030, 1, 6).unwrap();

        assert!(SlotPolicy::default().slots_for(saturday).is_empty());
        assert!(SlotPolicy::default().slots_for(sunday).is_empty());
    }

    #[test]
    fn available_slots_drop_taken_and_past() {
        let policy = SlotPolicy::default();
        let taken = vec![utc(2030, 1, 7, 10, 0), utc(2030, 1, 7, 14, 0)];
        let now = utc(2030, 1, 7, 11, 30);

        let slots = policy.available_slots(monday(), &taken, now);

        assert_eq!(
            slots,
            vec![
                utc(2030, 1, 7, 12, 0),
                utc(2030, 1, 7, 13, 0),
                utc(2030, 1, 7, 15, 0)
            ]
        );
    }

    #[test]
    fn booking_rules() {
        let policy = SlotPolicy::default();
        let now = long_ago();

        assert_eq!(policy.validate_booking(utc(2030, 1, 7, 9, 0), now), Ok(()));
        assert_eq!(policy.validate_booking(utc(2030, 1, 7, 15, 0), now), Ok(()));

        let rejected = [
            utc(2030, 1, 7, 8, 0),   // before opening
            utc(2030, 1, 7, 16, 0),  // closing hour
            utc(2030, 1, 7, 10, 30), // not on the hour
            utc(2030, 1, 5, 10, 0),  // Saturday
            utc(2030, 1, 6, 10, 0),  // Sunday
        ];
        for instant in rejected {
            assert_eq!(
                policy.validate_booking(instant, now),
                Err(SlotError::OutsideBusinessHours),
                "{}",
                instant
            );
        }
    }

    #[test]
    fn past_slot_rejected() {
        let policy = SlotPolicy::default();

        let result = policy.validate_booking(utc(2030, 1, 7, 9, 0), utc(2030, 1, 7, 9, 5));

        assert_eq!(result, Err(SlotError::InPast));
    }

    #[test]
    fn hours_are_read_in_clinic_offset() {
        // UTC+7: 09:00 local is 02:00 UTC
        let policy = SlotPolicy::new(FixedOffset::east_opt(7 * 3600).unwrap());

        assert!(policy.is_valid_slot(utc(2030, 1, 7, 2, 0)));
        assert!(!policy.is_valid_slot(utc(2030, 1, 7, 9, 0)));
        assert_eq!(policy.slots_for(monday())[0], utc(2030, 1, 7, 2, 0));
    }

    #[test]
    fn day_bounds_span_one_clinic_day() {
        let policy = SlotPolicy::new(FixedOffset::east_opt(-5 * 3600).unwrap());

        let (start, end) = policy.day_bounds(monday());

        assert_eq!(start, utc(2030, 1, 7, 5, 0));
        assert_eq!(end, utc(2030, 1, 8, 5, 0));
    }

    #[test]
    fn today_uses_clinic_date() {
        let policy = SlotPolicy::new(FixedOffset::east_opt(7 * 3600).unwrap());

        // 20:00 UTC on Monday is already Tuesday at UTC+7
        let today = policy.today(utc(2030, 1, 7, 20, 0));

        assert_eq!(today, NaiveDate::from_ymd_opt(2030, 1, 8).unwrap());
    }
}
