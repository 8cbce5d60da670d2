//! CSV export of a holdings snapshot.

use chrono::{DateTime, Utc};

use super::holding::Holding;
use super::user::Username;

/// Column headings of the export file.
pub const EXPORT_HEADER: [&str; 5] = ["ID", "Asset Name", "Type", "Value", "Date Added"];

/// Timestamp layout used for the `Date Added` column.
const ADDED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Failures while writing the export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write CSV row: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush CSV output: {0}")]
    Flush(String),
}

/// Render `snapshot` as CSV, one row per holding in snapshot order.
///
/// # Examples
/// ```
/// use finsight::domain::export::render_csv;
///
/// let bytes = render_csv(&[]).expect("empty export");
/// assert_eq!(bytes, b"ID,Asset Name,Type,Value,Date Added\n");
/// ```
pub fn render_csv(snapshot: &[Holding]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(EXPORT_HEADER)?;
    for holding in snapshot {
        writer.write_record([
            holding.id().to_string(),
            holding.asset_name().to_owned(),
            holding.asset_class().label().to_owned(),
            holding.value().to_string(),
            holding.added_at().format(ADDED_AT_FORMAT).to_string(),
        ])?;
    }
    writer
        .into_inner()
        .map_err(|err| ExportError::Flush(err.error().to_string()))
}

/// Download filename, `portfolio_{username}_{YYYYMMDD}.csv`.
#[must_use]
pub fn export_filename(username: &Username, now: DateTime<Utc>) -> String {
    format!("portfolio_{username}_{}.csv", now.format("%Y%m%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AssetClass, HoldingId};
    use chrono::{NaiveDate, TimeZone};
    use rstest::rstest;

    fn holding(id: i64, name: &str, class: AssetClass, value: f64) -> Holding {
        let added_at = NaiveDate::from_ymd_opt(2026, 3, 14)
            .and_then(|date| date.and_hms_opt(9, 26, 53))
            .expect("valid timestamp");
        Holding::from_parts(
            HoldingId::new(id),
            Username::new("ada").expect("username"),
            name.to_owned(),
            class,
            value,
            added_at,
        )
    }

    #[rstest]
    fn rows_follow_snapshot_order() {
        let snapshot = vec![
            holding(2, "Apple", AssetClass::Stock, 1500.5),
            holding(9, "Index Fund", AssetClass::MutualFund, 20000.0),
        ];
        let text = String::from_utf8(render_csv(&snapshot).expect("render")).expect("utf8");
        assert_eq!(
            text,
            "ID,Asset Name,Type,Value,Date Added\n\
             2,Apple,Stock,1500.5,2026-03-14 09:26:53\n\
             9,Index Fund,Mutual Fund,20000,2026-03-14 09:26:53\n"
        );
    }

    #[rstest]
    fn names_with_commas_are_quoted() {
        let snapshot = vec![holding(1, "Flat, Pune", AssetClass::RealEstate, 10.0)];
        let text = String::from_utf8(render_csv(&snapshot).expect("render")).expect("utf8");
        assert!(text.contains("\"Flat, Pune\""), "{text}");
    }

    #[rstest]
    fn filename_uses_the_utc_date() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 23, 59, 0).single().expect("valid time");
        let name = Username::new("ada").expect("username");
        assert_eq!(export_filename(&name, now), "portfolio_ada_20261018.csv");
    }
}
