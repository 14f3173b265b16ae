use strum::{Display, EnumIter, EnumString};

use crate::sheets::domain::{cell_position::CellPosition, column::Column, row::Row};

/// The survey row that holds the per-service values.
pub const SERVICE_ROW: Row = Row(6);

/// The services tracked by the survey sheet, one column each.
///
/// Variant order mirrors the sheet layout: Centos in column A through ESXi
/// in column S. The `strum` spellings are the labels accepted in update
/// payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum ServiceColumn {
    Centos,
    Redhat,
    #[strum(serialize = "Oracle Linux")]
    OracleLinux,
    #[strum(serialize = "OS_Other")]
    OsOther,
    Tomcat,
    Weblogic,
    Nginx,
    Apache,
    Jetty,
    #[strum(serialize = "WebServer_Other")]
    WebServerOther,
    Oracle,
    Mysql,
    #[strum(serialize = "MSSQL")]
    Mssql,
    #[strum(serialize = "MongoDB")]
    MongoDb,
    Java,
    Vsftp,
    Memcache,
    Redis,
    #[strum(serialize = "ESXi")]
    Esxi,
}

impl ServiceColumn {
    pub fn column(self) -> Column {
        Column::new(self as u32 + 1)
    }

    pub fn cell(self) -> CellPosition {
        CellPosition {
            col: self.column(),
            row: SERVICE_ROW,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;
    use crate::sheets::domain::a1_notation::ToA1Notation;

    const EXPECTED_CELLS: [(&str, &str); 19] = [
        ("Centos", "A6"),
        ("Redhat", "B6"),
        ("Oracle Linux", "C6"),
        ("OS_Other", "D6"),
        ("Tomcat", "E6"),
        ("Weblogic", "F6"),
        ("Nginx", "G6"),
        ("Apache", "H6"),
        ("Jetty", "I6"),
        ("WebServer_Other", "J6"),
        ("Oracle", "K6"),
        ("Mysql", "L6"),
        ("MSSQL", "M6"),
        ("MongoDB", "N6"),
        ("Java", "O6"),
        ("Vsftp", "P6"),
        ("Memcache", "Q6"),
        ("Redis", "R6"),
        ("ESXi", "S6"),
    ];

    #[test]
    fn test_every_label_maps_to_its_documented_cell() {
        assert_eq!(EXPECTED_CELLS.len(), ServiceColumn::iter().count());
        for (label, expected) in EXPECTED_CELLS {
            let column = ServiceColumn::from_str(label).unwrap();
            assert_eq!(
                column.cell().to_a1_notation(None).as_ref(),
                expected,
                "label '{label}'"
            );
        }
    }

    #[test]
    fn test_every_service_sits_on_the_survey_row() {
        for column in ServiceColumn::iter() {
            assert_eq!(column.cell().row, SERVICE_ROW);
        }
    }

    #[test]
    fn test_labels_render_back_to_their_spellings() {
        for (label, _) in EXPECTED_CELLS {
            let column = ServiceColumn::from_str(label).unwrap();
            assert_eq!(column.to_string(), label);
        }
    }

    #[test]
    fn test_unknown_labels_are_rejected() {
        assert!(ServiceColumn::from_str("UnknownLabel").is_err());
        assert!(ServiceColumn::from_str("centos").is_err());
        assert!(ServiceColumn::from_str("").is_err());
    }
}
