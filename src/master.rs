use crate::model::{CategoryEntry, MasterData, SubCategoryEntry};
use crate::photos::PhotoLookup;

/// The grid starts with two label rows that carry no data.
const HEADER_ROWS: usize = 2;

const CATEGORY_KEY_COL: usize = 0;
const CATEGORY_TITLE_COL: usize = 1;
const CATEGORY_PHOTO_COL: usize = 2;

/// The ten grouped lists other than `category`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubList {
    Country,
    Role,
    Birthplace,
    YearOfBirth,
    MonthOfBirth,
    Project,
    Club,
    Gender,
    JoiningYear,
    Office,
}

impl SubList {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "country" => Some(SubList::Country),
            "role" => Some(SubList::Role),
            "birthplace" => Some(SubList::Birthplace),
            "yearofbirth" => Some(SubList::YearOfBirth),
            "monthofbirth" => Some(SubList::MonthOfBirth),
            "project" => Some(SubList::Project),
            "club" => Some(SubList::Club),
            "gender" => Some(SubList::Gender),
            "joiningyear" => Some(SubList::JoiningYear),
            "office" => Some(SubList::Office),
            _ => None,
        }
    }
}

/// Where a grouped list lives in the grid: its label column and the photo
/// column next to it. The sheet lays groups out at 3-column strides with a
/// spacer column between them; this table is the single place that layout
/// is written down.
struct GroupLayout {
    list: SubList,
    label_col: usize,
    photo_col: usize,
}

const GROUP_LAYOUT: [GroupLayout; 10] = [
    GroupLayout { list: SubList::Country, label_col: 4, photo_col: 5 },
    GroupLayout { list: SubList::Role, label_col: 7, photo_col: 8 },
    GroupLayout { list: SubList::Birthplace, label_col: 10, photo_col: 11 },
    GroupLayout { list: SubList::YearOfBirth, label_col: 13, photo_col: 14 },
    GroupLayout { list: SubList::MonthOfBirth, label_col: 16, photo_col: 17 },
    GroupLayout { list: SubList::Project, label_col: 19, photo_col: 20 },
    GroupLayout { list: SubList::Club, label_col: 22, photo_col: 23 },
    GroupLayout { list: SubList::Gender, label_col: 25, photo_col: 26 },
    GroupLayout { list: SubList::JoiningYear, label_col: 28, photo_col: 29 },
    GroupLayout { list: SubList::Office, label_col: 31, photo_col: 32 },
];

impl MasterData {
    pub fn sub_list(&self, list: SubList) -> &[SubCategoryEntry] {
        match list {
            SubList::Country => &self.country,
            SubList::Role => &self.role,
            SubList::Birthplace => &self.birthplace,
            SubList::YearOfBirth => &self.yearofbirth,
            SubList::MonthOfBirth => &self.monthofbirth,
            SubList::Project => &self.project,
            SubList::Club => &self.club,
            SubList::Gender => &self.gender,
            SubList::JoiningYear => &self.joiningyear,
            SubList::Office => &self.office,
        }
    }

    fn sub_list_mut(&mut self, list: SubList) -> &mut Vec<SubCategoryEntry> {
        match list {
            SubList::Country => &mut self.country,
            SubList::Role => &mut self.role,
            SubList::Birthplace => &mut self.birthplace,
            SubList::YearOfBirth => &mut self.yearofbirth,
            SubList::MonthOfBirth => &mut self.monthofbirth,
            SubList::Project => &mut self.project,
            SubList::Club => &mut self.club,
            SubList::Gender => &mut self.gender,
            SubList::JoiningYear => &mut self.joiningyear,
            SubList::Office => &mut self.office,
        }
    }
}

fn cell(row: &[String], column: usize) -> &str {
    row.get(column).map(String::as_str).unwrap_or("")
}

/// Groups the raw grid into the eleven lists. A group contributes an entry
/// only when its label column is non-empty for that row; the other groups
/// in the same row are evaluated independently. One row or fewer leaves
/// every list empty.
pub fn build_master_data(rows: &[Vec<String>], lookup: &PhotoLookup) -> MasterData {
    let mut data = MasterData::default();
    for row in rows.iter().skip(HEADER_ROWS) {
        let key = cell(row, CATEGORY_KEY_COL);
        if !key.is_empty() {
            data.category.push(CategoryEntry {
                key: key.to_string(),
                title: cell(row, CATEGORY_TITLE_COL).to_string(),
                photo: lookup.resolve(cell(row, CATEGORY_PHOTO_COL)),
            });
        }
        for group in &GROUP_LAYOUT {
            let title = cell(row, group.label_col);
            if title.is_empty() {
                continue;
            }
            data.sub_list_mut(group.list).push(SubCategoryEntry {
                title: title.to_string(),
                photo: lookup.resolve(cell(row, group.photo_col)),
            });
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::google::FolderEntry;

    fn lookup() -> PhotoLookup {
        PhotoLookup::from_entries("h", vec![
            FolderEntry {
                name: Some("flag.png".to_string()),
                id: Some("id-flag".to_string()),
            },
            FolderEntry {
                name: Some("cat.png".to_string()),
                id: Some("id-cat".to_string()),
            },
        ])
    }

    fn grid_row(cells: &[(usize, &str)]) -> Vec<String> {
        let width = cells.iter().map(|(i, _)| i + 1).max().unwrap_or(0);
        let mut row = vec![String::new(); width];
        for (index, value) in cells {
            row[*index] = value.to_string();
        }
        row
    }

    #[test]
    fn fewer_than_two_rows_yield_all_lists_empty() {
        let data = build_master_data(&[], &lookup());
        assert_eq!(data, MasterData::default());

        let one_row = vec![grid_row(&[(0, "emp"), (4, "Norway")])];
        let data = build_master_data(&one_row, &lookup());
        assert_eq!(data, MasterData::default());
    }

    #[test]
    fn label_rows_are_skipped() {
        let rows = vec![
            grid_row(&[(0, "Category"), (4, "Country")]),
            grid_row(&[(0, "key/title"), (4, "name")]),
            grid_row(&[(0, "emp"), (1, "Employees"), (2, "cat.png"), (4, "Norway"), (5, "flag.png")]),
        ];
        let data = build_master_data(&rows, &lookup());
        assert_eq!(data.category.len(), 1);
        assert_eq!(data.country.len(), 1);
    }

    #[test]
    fn category_entries_carry_key_title_and_resolved_photo() {
        let rows = vec![
            Vec::new(),
            Vec::new(),
            grid_row(&[(0, "emp"), (1, "Employees"), (2, "cat.png")]),
        ];
        let data = build_master_data(&rows, &lookup());
        assert_eq!(data.category, vec![CategoryEntry {
            key: "emp".to_string(),
            title: "Employees".to_string(),
            photo: "h/id-cat".to_string(),
        }]);
    }

    #[test]
    fn empty_label_skips_only_that_group() {
        let rows = vec![
            Vec::new(),
            Vec::new(),
            grid_row(&[(4, "Norway"), (5, "flag.png")]),
        ];
        let data = build_master_data(&rows, &lookup());
        assert!(data.category.is_empty());
        assert_eq!(data.country, vec![SubCategoryEntry {
            title: "Norway".to_string(),
            photo: "h/id-flag".to_string(),
        }]);
        assert!(data.role.is_empty());
    }

    #[test]
    fn every_group_reads_its_own_columns() {
        let rows = vec![
            Vec::new(),
            Vec::new(),
            grid_row(&[
                (7, "Engineer"),
                (10, "Bergen"),
                (13, "1990"),
                (16, "5"),
                (19, "Atlas"),
                (22, "Soccer"),
                (25, "F"),
                (28, "2018"),
                (31, "Oslo"),
            ]),
        ];
        let data = build_master_data(&rows, &lookup());
        assert_eq!(data.role[0].title, "Engineer");
        assert_eq!(data.birthplace[0].title, "Bergen");
        assert_eq!(data.yearofbirth[0].title, "1990");
        assert_eq!(data.monthofbirth[0].title, "5");
        assert_eq!(data.project[0].title, "Atlas");
        assert_eq!(data.club[0].title, "Soccer");
        assert_eq!(data.gender[0].title, "F");
        assert_eq!(data.joiningyear[0].title, "2018");
        assert_eq!(data.office[0].title, "Oslo");
        assert!(data.country.is_empty());
    }

    #[test]
    fn unresolved_photo_columns_become_empty_urls() {
        let rows = vec![
            Vec::new(),
            Vec::new(),
            grid_row(&[(4, "Norway"), (5, "unknown.png")]),
        ];
        let data = build_master_data(&rows, &lookup());
        assert_eq!(data.country[0].photo, "");
    }
}
