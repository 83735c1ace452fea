use crate::models::{DataSource, SourceKind, SourceStatus};

use super::s;

pub fn sample_data_sources() -> Vec<DataSource> {
    [
        ("1", "Restaurant Menu 2024.pdf", SourceKind::Pdf, SourceStatus::Ready, "2024-06-20", Some("2.3 MB")),
        ("2", "FAQ Documentation.docx", SourceKind::Docx, SourceStatus::Ready, "2024-06-19", Some("856 KB")),
        ("3", "Product Catalog", SourceKind::Url, SourceStatus::Processing, "2024-06-21", None),
        ("4", "Allergen Information.csv", SourceKind::Csv, SourceStatus::Error, "2024-06-18", Some("145 KB")),
    ]
    .into_iter()
    .map(|(id, name, kind, status, date_added, size)| DataSource {
        id: s(id),
        name: s(name),
        kind,
        status,
        date_added: s(date_added),
        size: size.map(s),
    })
    .collect()
}
