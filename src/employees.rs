use crate::model::{Employee, FieldValue};
use crate::photos::PhotoLookup;

/// Headers the employee sheet is expected to carry. Anything else still
/// lands on the record as a plain text field, but gets flagged once so a
/// renamed column does not go unnoticed.
const KNOWN_HEADERS: &[&str] = &[
    "name",
    "employee_id",
    "email",
    "dob",
    "date_joined",
    "gender",
    "birthplace",
    "country",
    "photo",
    "projects",
    "club",
    "role",
    "office",
];

/// How one header's cells are transformed. Resolved once per fetch from the
/// header row, so the per-row loop is a straight table walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HeaderRule {
    /// Resolve the cell through the photo lookup.
    Photo,
    /// Comma-separated multi-value cell.
    List,
    /// Raw date plus derived `monthofbirth`/`yearofbirth`.
    DateOfBirth,
    /// Raw date plus derived `joiningyear`.
    DateJoined,
    /// Verbatim cell.
    Text,
}

impl HeaderRule {
    fn for_header(header: &str) -> Self {
        if !KNOWN_HEADERS.contains(&header) {
            tracing::warn!(header, "unexpected employee sheet header");
        }
        match header {
            "photo" => HeaderRule::Photo,
            "projects" | "club" => HeaderRule::List,
            "dob" => HeaderRule::DateOfBirth,
            "date_joined" => HeaderRule::DateJoined,
            _ => HeaderRule::Text,
        }
    }
}

/// First and third component of an `MM/DD/YYYY` cell. Anything that does
/// not split into exactly three parts degrades to empty strings.
fn split_date(raw: &str) -> (String, String) {
    let parts: Vec<&str> = raw.split('/').collect();
    match parts.as_slice() {
        [month, _, year] => (month.to_string(), year.to_string()),
        _ => (String::new(), String::new()),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|piece| piece.trim().to_string()).collect()
}

/// One record per data row, in row order. A missing cell reads as an empty
/// string, so every record carries every header-declared field.
pub fn map_rows(
    header: &[String],
    rows: &[Vec<String>],
    lookup: &PhotoLookup,
) -> Vec<Employee> {
    let rules: Vec<HeaderRule> = header
        .iter()
        .map(|name| HeaderRule::for_header(name))
        .collect();

    rows.iter()
        .map(|row| {
            let mut employee = Employee::default();
            for (column, (name, rule)) in header.iter().zip(&rules).enumerate() {
                let cell = row.get(column).map(String::as_str).unwrap_or("");
                match rule {
                    HeaderRule::Photo => {
                        employee.set(name.clone(), FieldValue::text(lookup.resolve(cell)));
                    }
                    HeaderRule::List => {
                        employee.set(name.clone(), FieldValue::List(split_list(cell)));
                    }
                    HeaderRule::DateOfBirth => {
                        let (month, year) = split_date(cell);
                        employee.set(name.clone(), FieldValue::text(cell));
                        employee.set("monthofbirth", FieldValue::Text(month));
                        employee.set("yearofbirth", FieldValue::Text(year));
                    }
                    HeaderRule::DateJoined => {
                        let (_, year) = split_date(cell);
                        employee.set(name.clone(), FieldValue::text(cell));
                        employee.set("joiningyear", FieldValue::Text(year));
                    }
                    HeaderRule::Text => {
                        employee.set(name.clone(), FieldValue::text(cell));
                    }
                }
            }
            employee
        })
        .collect()
}
