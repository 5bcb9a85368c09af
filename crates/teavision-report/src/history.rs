//! Prediction history CSV reports

use std::io::Write;

use chrono::NaiveDate;
use teavision_history::HistoryRecord;

use crate::error::ReportResult;

/// Whose history a report covers.
///
/// `AllAccounts` reports add a leading "User Email" column so rows stay
/// attributable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReportScope {
    Account { email: String },
    AllAccounts,
}

impl ReportScope {
    fn includes_email_column(&self) -> bool {
        matches!(self, ReportScope::AllAccounts)
    }
}

/// Write history records as a CSV report.
///
/// Base columns come first; one `Prob_<label>` column is added per class
/// label, in order of first appearance across the records. Records missing
/// a label leave that cell blank. Percentages are rendered with two
/// decimals.
pub fn write_history_report<W: Write>(
    writer: W,
    scope: &ReportScope,
    records: &[HistoryRecord],
) -> ReportResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut probability_columns: Vec<String> = Vec::new();
    for record in records {
        for label in record.probabilities.labels() {
            if !probability_columns.iter().any(|c| c == label) {
                probability_columns.push(label.to_string());
            }
        }
    }

    let mut header: Vec<String> = Vec::new();
    if scope.includes_email_column() {
        header.push("User Email".to_string());
    }
    header.extend(
        ["Date", "Prediction", "Confidence", "Model", "Image Type"]
            .iter()
            .map(|s| s.to_string()),
    );
    for label in &probability_columns {
        header.push(format!("Prob_{label}"));
    }
    csv_writer.write_record(&header)?;

    for record in records {
        let mut row: Vec<String> = Vec::new();
        if scope.includes_email_column() {
            row.push(record.account_email.clone());
        }
        row.push(record.created_at.clone());
        row.push(record.prediction.clone());
        row.push(format!("{:.2}%", record.confidence * 100.0));
        row.push(record.model_name.clone());
        row.push(record.image_type.clone());
        for label in &probability_columns {
            if record.probabilities.contains(label) {
                row.push(format!("{:.2}%", record.probabilities.get(label) * 100.0));
            } else {
                row.push(String::new());
            }
        }
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Download filename for a history report, stamped `YYYYMMDD`.
pub fn history_report_filename(scope: &ReportScope, date: NaiveDate) -> String {
    let stamp = date.format("%Y%m%d");
    match scope {
        ReportScope::Account { email } => format!("prediction_history_{email}_{stamp}.csv"),
        ReportScope::AllAccounts => format!("all_users_prediction_history_{stamp}.csv"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teavision_domain::{Account, ImageKind, ModelKind, PredictionOutcome, ProbabilityMap};

    fn record(email: &str, prediction: &str, probabilities: ProbabilityMap) -> HistoryRecord {
        let account = Account::new(1, email, false);
        let outcome = PredictionOutcome::new(
            prediction,
            0.93,
            probabilities,
            ModelKind::Resnet18TeaRegion,
            ImageKind::Raw,
        );
        let mut record = HistoryRecord::new(&account, &outcome);
        record.created_at = "2025-08-22T10:00:00+00:00".to_string();
        record
    }

    fn report(scope: &ReportScope, records: &[HistoryRecord]) -> String {
        let mut out = Vec::new();
        write_history_report(&mut out, scope, records).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_account_report_columns() {
        let probabilities: ProbabilityMap = [
            ("Uva Region".to_string(), 0.93),
            ("Kandy Region".to_string(), 0.07),
        ]
        .into_iter()
        .collect();
        let records = vec![record("user@example.com", "Uva Region", probabilities)];

        let scope = ReportScope::Account {
            email: "user@example.com".to_string(),
        };
        let csv = report(&scope, &records);
        let mut lines = csv.lines();

        assert_eq!(
            lines.next(),
            Some(
                "Date,Prediction,Confidence,Model,Image Type,Prob_Kandy Region,Prob_Uva Region"
            )
        );
        assert_eq!(
            lines.next(),
            Some(
                "2025-08-22T10:00:00+00:00,Uva Region,93.00%,resnet18_tea_region,raw,7.00%,93.00%"
            )
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_all_accounts_report_adds_email_column() {
        let probabilities: ProbabilityMap =
            [("Uva Region".to_string(), 1.0)].into_iter().collect();
        let records = vec![record("admin@example.com", "Uva Region", probabilities)];

        let csv = report(&ReportScope::AllAccounts, &records);
        let header = csv.lines().next().unwrap();
        assert!(header.starts_with("User Email,Date,"));
        assert!(csv.lines().nth(1).unwrap().starts_with("admin@example.com,"));
    }

    #[test]
    fn test_probability_columns_by_first_appearance() {
        let first: ProbabilityMap = [("B".to_string(), 0.6), ("A".to_string(), 0.4)]
            .into_iter()
            .collect();
        let second: ProbabilityMap = [("C".to_string(), 1.0)].into_iter().collect();
        let records = vec![
            record("u@example.com", "B", first),
            record("u@example.com", "C", second),
        ];

        let scope = ReportScope::Account {
            email: "u@example.com".to_string(),
        };
        let csv = report(&scope, &records);
        let header = csv.lines().next().unwrap();

        // within a record labels are sorted; later records append new ones
        assert!(header.ends_with("Prob_A,Prob_B,Prob_C"));

        // the second record has no A or B, so those cells stay blank
        let second_row = csv.lines().nth(2).unwrap();
        assert!(second_row.ends_with(",,,100.00%"));
    }

    #[test]
    fn test_empty_history_writes_header_only() {
        let scope = ReportScope::Account {
            email: "user@example.com".to_string(),
        };
        let csv = report(&scope, &[]);
        assert_eq!(csv, "Date,Prediction,Confidence,Model,Image Type\n");
    }

    #[test]
    fn test_filenames() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 22).unwrap();
        let scope = ReportScope::Account {
            email: "user@example.com".to_string(),
        };
        assert_eq!(
            history_report_filename(&scope, date),
            "prediction_history_user@example.com_20250822.csv"
        );
        assert_eq!(
            history_report_filename(&ReportScope::AllAccounts, date),
            "all_users_prediction_history_20250822.csv"
        );
    }
}
