//! Lenient timestamp decoding for API payloads.
//!
//! The backend may stamp rows either with an RFC 3339 instant (`2026-10-17T08:00:00.000Z`)
//! or with a local-free naive form (`2026-10-17T08:00:00`). Instants with an offset are
//! normalized to UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{de::Error, Deserialize, Deserializer};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    DateTime::parse_from_rfc3339(value)
        .map(|instant| instant.naive_utc())
        .ok()
        .or_else(|| {
            NAIVE_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        })
}

/// Plain dates, or the date part of a full timestamp.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .or_else(|| parse_datetime(value).map(|datetime| datetime.date()))
}

pub fn deserialize_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;

    parse_datetime(&value)
        .ok_or_else(|| D::Error::custom(format!("invalid timestamp `{}`", value)))
}

pub fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;

    parse_date(&value).ok_or_else(|| D::Error::custom(format!("invalid date `{}`", value)))
}

#[cfg(test)]
mod tests {

    mod parse_datetime {
        use chrono::NaiveDate;

        use crate::model::datetime::parse_datetime;

        #[test]
        /// Expected: RFC 3339 instants normalized to UTC, naive forms taken as-is
        fn accepts_offset_and_naive_forms() {
            let expected = NaiveDate::from_ymd_opt(2026, 10, 17)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap();

            assert_eq!(parse_datetime("2026-10-17T08:00:00.000Z"), Some(expected));
            assert_eq!(parse_datetime("2026-10-17T05:00:00-03:00"), Some(expected));
            assert_eq!(parse_datetime("2026-10-17T08:00:00"), Some(expected));
            assert_eq!(
                parse_datetime("2026-10-17 08:00:00.250").map(|dt| dt.date()),
                Some(expected.date())
            );
            assert_eq!(parse_datetime("ayer"), None);
        }
    }

    mod parse_date {
        use chrono::NaiveDate;

        use crate::model::datetime::parse_date;

        #[test]
        /// Expected: plain dates and the date part of full timestamps
        fn accepts_dates_and_timestamps() {
            let expected = NaiveDate::from_ymd_opt(2026, 10, 17);

            assert_eq!(parse_date("2026-10-17"), expected);
            assert_eq!(parse_date("2026-10-17T00:00:00.000Z"), expected);
            assert_eq!(parse_date("17/10/2026"), None);
        }
    }

    mod deserialize {
        use crate::model::{
            audit::AuditEntryDto, event::EventDto, maintenance::MaintenanceDto,
            notification::NotificationDto,
        };

        #[test]
        /// Expected: DTOs decode timestamps with a UTC suffix
        fn decodes_utc_suffixed_payloads() {
            let notification: NotificationDto = serde_json::from_str(
                r#"{"id":1,"title":"Mantenimiento pendiente","createdAt":"2026-10-17T08:00:00.000Z","read":false}"#,
            )
            .unwrap();
            let maintenance: MaintenanceDto = serde_json::from_str(
                r#"{"id":1,"freezerId":3,"type":"Preventivo","date":"2026-10-17T00:00:00.000Z"}"#,
            )
            .unwrap();
            let event: EventDto = serde_json::from_str(
                r#"{"id":1,"type":"Alta","occurredAt":"2026-10-17T08:00:00.000Z"}"#,
            )
            .unwrap();
            let audit: AuditEntryDto = serde_json::from_str(
                r#"{"id":1,"username":"admin","action":"Login","createdAt":"2026-10-17T08:00:00Z"}"#,
            )
            .unwrap();

            assert_eq!(notification.created_at.to_string(), "2026-10-17 08:00:00");
            assert_eq!(maintenance.date.to_string(), "2026-10-17");
            assert_eq!(event.occurred_at, notification.created_at);
            assert_eq!(audit.created_at, notification.created_at);
        }

        #[test]
        /// Expected: garbage timestamps still rejected
        fn rejects_unparseable_timestamp() {
            let result = serde_json::from_str::<NotificationDto>(
                r#"{"id":1,"title":"x","createdAt":"pronto","read":false}"#,
            );

            assert!(result.is_err());
        }
    }
}
