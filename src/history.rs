use crate::models::{AppData, HistoryItem, MoodRecord};
use crate::stats::date_key;
use chrono::{Duration, Local, NaiveDate};

pub fn build_history(days: u32, data: &AppData) -> Vec<HistoryItem> {
    build_history_at(Local::now().date_naive(), days, data)
}

/// Entries from the last `days` calendar days, most recent first, with their
/// display fields filled in.
pub fn build_history_at(today: NaiveDate, days: u32, data: &AppData) -> Vec<HistoryItem> {
    if days == 0 {
        return Vec::new();
    }

    let start = today
        .checked_sub_signed(Duration::days(i64::from(days) - 1))
        .unwrap_or(NaiveDate::MIN);

    data.moods
        .range(date_key(start)..=date_key(today))
        .rev()
        .filter_map(|(key, record)| {
            let date = key.parse::<NaiveDate>().ok()?;
            Some(history_item(today, date, record))
        })
        .collect()
}

fn history_item(today: NaiveDate, date: NaiveDate, record: &MoodRecord) -> HistoryItem {
    HistoryItem {
        date: date.to_string(),
        label: date_label(today, date),
        emoji: mood_emoji(record.rating).to_string(),
        rating: record.rating,
        note: record.note.clone(),
    }
}

/// "Today", "Yesterday", or a short weekday/month/day label. Compares
/// calendar dates only.
pub fn date_label(today: NaiveDate, date: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if date == today - Duration::days(1) {
        "Yesterday".to_string()
    } else {
        date.format("%a, %b %-d").to_string()
    }
}

/// Six emoji tiers keyed by rating; anything outside 1-10 reads as neutral.
pub fn mood_emoji(rating: u8) -> &'static str {
    match rating {
        1 => "😢",
        2 | 3 => "😞",
        4..=6 => "😐",
        7 | 8 => "🙂",
        9 => "😄",
        10 => "🤩",
        _ => "😐",
    }
}
