//! CSV sheet layout shared by `parse --format csv` and `export`.

use std::io::Write;

use khach_core::listing::RecordSet;
use khach_core::models::record::{Record, Schema};

const POSITION_HEADER: &str = "STT";
const BASE_HEADERS: [&str; 4] = ["Tên", "Số ĐT", "Tài Chính", "Yêu Cầu"];
const EXTENDED_HEADERS: [&str; 2] = ["Tên Đường", "Ghi Chú"];

/// Column headers for a schema.
pub fn headers(schema: Schema, include_position: bool) -> Vec<&'static str> {
    let mut headers = Vec::new();
    if include_position {
        headers.push(POSITION_HEADER);
    }
    headers.extend(BASE_HEADERS);
    if schema == Schema::Extended {
        headers.extend(EXTENDED_HEADERS);
    }
    headers
}

/// Write records as CSV, one row per record in the given order.
pub fn write_sheet<W: Write>(
    writer: W,
    records: &[Record],
    schema: Schema,
    include_position: bool,
) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(headers(schema, include_position))?;

    for numbered in RecordSet::numbered(records) {
        let record = numbered.record;
        let mut row = Vec::with_capacity(7);
        if include_position {
            row.push(numbered.position.to_string());
        }
        row.push(record.name.clone());
        row.push(record.phone.clone());
        row.push(record.financial_capacity.clone());
        row.push(record.request.clone());
        if schema == Schema::Extended {
            row.push(record.street().to_string());
            row.push(record.note().to_string());
        }
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Render the sheet into a string.
pub fn sheet_string(records: &[Record], schema: Schema, include_position: bool) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    write_sheet(&mut buf, records, schema, include_position)?;
    Ok(String::from_utf8(buf)?)
}
