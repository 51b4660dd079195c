use chrono::{DateTime, Days, Local, NaiveDateTime};

/// Dates at most this many days old are shown relative to now.
pub const RELATIVE_WINDOW_DAYS: i64 = 30;

/// Formats `date` for bookmark lists: `今日`, `昨日`, `N日前`, `N週間前` inside the
/// relative window, `yyyy/MM/dd` beyond it.
///
/// Dates in the future are shown as `今日`.
pub fn format_relative_date(date: NaiveDateTime, now: NaiveDateTime) -> String {
    let days = (now - date).num_days();
    if days > RELATIVE_WINDOW_DAYS {
        return date.format("%Y/%m/%d").to_string();
    }

    let today = now.date();
    if date.date() >= today {
        return "今日".to_string();
    }
    if today.checked_sub_days(Days::new(1)) == Some(date.date()) {
        return "昨日".to_string();
    }
    if days < 7 {
        return format!("{days}日前");
    }
    format!("{}週間前", days / 7)
}

pub fn format_relative_date_now(date: DateTime<Local>) -> String {
    format_relative_date(date.naive_local(), Local::now().naive_local())
}
