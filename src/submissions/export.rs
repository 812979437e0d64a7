// CSV rendering for submission exports

use crate::submissions::models::Submission;

/// CSV header row for the export
pub const CSV_HEADER: &str = "Name,Email,Company Code,Core Values,Date Submitted";

/// Render submissions as a literal CSV document
///
/// Every field is double-quote-wrapped (embedded quotes doubled), core
/// values are joined with ", ", and dates use the en-US short date-time
/// form the original export produced.
pub fn submissions_to_csv(submissions: &[Submission]) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');

    for submission in submissions {
        let row = [
            submission.name.clone(),
            submission.email.clone(),
            submission.company_code.clone().unwrap_or_default(),
            submission.core_values.join(", "),
            submission
                .date_submitted
                .format("%-m/%-d/%Y, %-I:%M:%S %p")
                .to_string(),
        ];

        let quoted: Vec<String> = row.iter().map(|field| quote_field(field)).collect();
        csv.push_str(&quoted.join(","));
        csv.push('\n');
    }

    csv
}

/// Wrap a field in double quotes, doubling any embedded quotes
fn quote_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn submission(name: &str, code: Option<&str>, core_values: &[&str]) -> Submission {
        Submission {
            id: 1,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            company_code: code.map(str::to_string),
            core_values: core_values.iter().map(|v| v.to_string()).collect(),
            date_submitted: Utc.with_ymd_and_hms(2024, 6, 1, 10, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_csv_has_header_and_quoted_rows() {
        let submissions = vec![
            submission("Jane Doe", Some("ACME"), &["Integrity", "Courage"]),
            submission("Bob", None, &["Honesty"]),
        ];

        let csv = submissions_to_csv(&submissions);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Name,Email,Company Code,Core Values,Date Submitted");
        assert!(lines[1].starts_with("\"Jane Doe\",\"jane.doe@example.com\",\"ACME\",\"Integrity, Courage\""));
        assert!(lines[2].starts_with("\"Bob\",\"bob@example.com\",\"\",\"Honesty\""));
    }

    #[test]
    fn test_core_values_joined_with_comma_space() {
        let csv = submissions_to_csv(&[submission("A", None, &["One", "Two", "Three"])]);
        assert!(csv.contains("\"One, Two, Three\""));
    }

    #[test]
    fn test_date_uses_short_locale_format() {
        let csv = submissions_to_csv(&[submission("A", None, &["One"])]);
        assert!(csv.contains("\"6/1/2024, 10:30:00 AM\""));
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let csv = submissions_to_csv(&[submission("Jane \"JD\" Doe", None, &["One"])]);
        assert!(csv.contains("\"Jane \"\"JD\"\" Doe\""));
    }

    #[test]
    fn test_empty_input_yields_header_only() {
        let csv = submissions_to_csv(&[]);
        assert_eq!(csv, "Name,Email,Company Code,Core Values,Date Submitted\n");
    }
}
