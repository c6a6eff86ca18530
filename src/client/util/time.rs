use chrono::{NaiveDateTime, Utc};

/// Relative Spanish description of `datetime`, e.g. "hace 5 minutos".
pub fn format_relative_time(datetime: &NaiveDateTime) -> String {
    format_relative_to(datetime, &Utc::now().naive_utc())
}

fn format_relative_to(datetime: &NaiveDateTime, now: &NaiveDateTime) -> String {
    let duration = now.signed_duration_since(*datetime);

    let seconds = duration.num_seconds().max(0);
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 60 {
        "hace un momento".to_string()
    } else if minutes < 60 {
        format!("hace {} minuto{}", minutes, plural(minutes))
    } else if hours < 24 {
        format!("hace {} hora{}", hours, plural(hours))
    } else if days < 30 {
        format!("hace {} día{}", days, plural(days))
    } else if days < 365 {
        let months = days / 30;
        format!("hace {} mes{}", months, if months == 1 { "" } else { "es" })
    } else {
        let years = days / 365;
        format!("hace {} año{}", years, plural(years))
    }
}

fn plural(count: i64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Timestamp as shown in tables, e.g. "17/10/2026 14:05".
pub fn format_timestamp(datetime: &NaiveDateTime) -> String {
    datetime.format("%d/%m/%Y %H:%M").to_string()
}
