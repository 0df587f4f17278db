use std::io::{Read, Write};

use chrono::NaiveDate;

use crate::events::RatingChangeEvent;

/// CSV column order, fixed by the record's serde field order.
pub const CSV_HEADER: [&str; 9] = [
    "Date",
    "Company",
    "Agency",
    "Old_Rating",
    "New_Rating",
    "Change_Type",
    "Outlook",
    "Sector",
    "Rating_Change_Notches",
];

/// Serialize a filtered collection to CSV, one row per event, header row
/// included even when the collection is empty.
pub fn write_csv<W: Write>(events: &[RatingChangeEvent], writer: W) -> csv::Result<()> {
    let mut w = csv::Writer::from_writer(writer);
    if events.is_empty() {
        // serialize() emits the header lazily, so an empty export needs it
        // written by hand.
        w.write_record(CSV_HEADER)?;
    }
    for event in events {
        w.serialize(event)?;
    }
    w.flush()?;
    Ok(())
}

pub fn csv_string(events: &[RatingChangeEvent]) -> csv::Result<String> {
    let mut buf = Vec::new();
    write_csv(events, &mut buf)?;
    Ok(String::from_utf8(buf).expect("CSV output is valid UTF-8"))
}

pub fn read_csv<R: Read>(reader: R) -> csv::Result<Vec<RatingChangeEvent>> {
    csv::Reader::from_reader(reader).deserialize().collect()
}

/// Download file name embedding the current date, e.g.
/// `rating_changes_20260807.csv`.
pub fn export_file_name(today: NaiveDate) -> String {
    format!("rating_changes_{}.csv", today.format("%Y%m%d"))
}
