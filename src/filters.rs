//! Pure selection helpers over already-fetched data. No I/O; unknown keys
//! fail explicitly instead of returning nothing.

use crate::error::FilterError;
use crate::master::SubList;
use crate::model::{CategoryEntry, Employee, FieldValue, MasterData, SubCategoryEntry};

/// One of the eleven master-data lists, borrowed from a `MasterData`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MasterList<'a> {
    Categories(&'a [CategoryEntry]),
    Entries(&'a [SubCategoryEntry]),
}

/// The list stored under `name`, or `UnknownCategory` when `name` is not
/// one of the eleven known keys.
pub fn filter_category<'a>(
    name: &str,
    master_data: &'a MasterData,
) -> Result<MasterList<'a>, FilterError> {
    if name == "category" {
        return Ok(MasterList::Categories(&master_data.category));
    }
    SubList::from_name(name)
        .map(|list| MasterList::Entries(master_data.sub_list(list)))
        .ok_or_else(|| FilterError::UnknownCategory(name.to_string()))
}

/// Records whose `field` matches `value`: containment for list fields,
/// case-sensitive equality for scalar fields. A record without the field at
/// all means the caller asked for a field this dataset does not carry.
pub fn filter_employee<'a>(
    field: &str,
    value: &str,
    employees: &'a [Employee],
) -> Result<Vec<&'a Employee>, FilterError> {
    let mut matches = Vec::new();
    for employee in employees {
        let matched = match employee.get(field) {
            Some(FieldValue::List(items)) => items.iter().any(|item| item == value),
            Some(FieldValue::Text(text)) => text == value,
            None => return Err(FilterError::UnknownField(field.to_string())),
        };
        if matched {
            matches.push(employee);
        }
    }
    Ok(matches)
}
