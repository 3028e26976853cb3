use crate::models::{AppData, StatsResponse};
use chrono::{Duration, Local, NaiveDate};

const STATS_WINDOW_DAYS: i64 = 30;
const GOOD_DAY_RATING: u8 = 7;

pub fn build_stats(data: &AppData) -> StatsResponse {
    build_stats_at(Local::now().date_naive(), data)
}

pub fn build_stats_at(today: NaiveDate, data: &AppData) -> StatsResponse {
    let start = today - Duration::days(STATS_WINDOW_DAYS);

    let mut sum = 0u64;
    let mut count = 0u64;
    let mut good_days = 0u64;
    for record in data.moods.range(date_key(start)..=date_key(today)).map(|(_, record)| record) {
        sum += u64::from(record.rating);
        count += 1;
        if record.rating >= GOOD_DAY_RATING {
            good_days += 1;
        }
    }

    let average_rating = if count == 0 {
        None
    } else {
        Some(round2(sum as f64 / count as f64))
    };

    StatsResponse {
        average_rating,
        good_days_count: good_days,
        period: format!("Last {STATS_WINDOW_DAYS} days"),
    }
}

pub(crate) fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MoodRecord;

    fn record(rating: u8) -> MoodRecord {
        MoodRecord { rating, note: None }
    }

    #[test]
    fn stats_empty_data_has_no_average() {
        let data = AppData::default();
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();

        let stats = build_stats_at(today, &data);
        assert_eq!(stats.average_rating, None);
        assert_eq!(stats.good_days_count, 0);
        assert_eq!(stats.period, "Last 30 days");
    }

    #[test]
    fn stats_average_is_rounded_to_two_decimals() {
        let mut data = AppData::default();
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        data.moods.insert(date_key(today), record(5));
        data.moods.insert(date_key(today - Duration::days(1)), record(6));
        data.moods.insert(date_key(today - Duration::days(2)), record(8));

        let stats = build_stats_at(today, &data);
        assert_eq!(stats.average_rating, Some(6.33));
    }

    #[test]
    fn stats_good_day_boundary_is_seven() {
        let mut data = AppData::default();
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        data.moods.insert(date_key(today), record(7));
        data.moods.insert(date_key(today - Duration::days(1)), record(6));
        data.moods.insert(date_key(today - Duration::days(2)), record(10));

        let stats = build_stats_at(today, &data);
        assert_eq!(stats.good_days_count, 2);
    }

    #[test]
    fn stats_window_excludes_entries_older_than_30_days() {
        let mut data = AppData::default();
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        data.moods.insert(date_key(today - Duration::days(30)), record(10));
        data.moods.insert(date_key(today - Duration::days(31)), record(2));

        let stats = build_stats_at(today, &data);
        assert_eq!(stats.average_rating, Some(10.0));
        assert_eq!(stats.good_days_count, 1);
    }
}
