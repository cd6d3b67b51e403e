//! Export round-trip tests

use nba_stats::export::{output_path, write_csv, TableKind, UTF8_BOM};
use nba_stats::{Cell, Season, Table};

fn team_info_table() -> Table {
    let mut t = Table::new(
        ["TEAM_ID", "CITY", "ARENA", "YEARFOUNDED"]
            .map(String::from)
            .to_vec(),
    );
    t.push_row(vec![
        Cell::Number(1610612743.0),
        Cell::Text("Denver".to_string()),
        // Multi-byte value: must survive the BOM-prefixed round trip.
        Cell::Text("Ball Arena — Jokić's house".to_string()),
        Cell::Number(1976.0),
    ]);
    t.push_row(vec![
        Cell::Number(1610612738.0),
        Cell::Text("Boston".to_string()),
        Cell::Text("TD Garden".to_string()),
        Cell::Number(1946.0),
    ]);
    t
}

#[test]
fn test_export_starts_with_bom() {
    let dir = tempfile::tempdir().unwrap();
    let season = Season::new("2024-25").unwrap();
    let path = output_path(dir.path(), TableKind::TeamInfo, &season);

    write_csv(&team_info_table(), &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..3], &UTF8_BOM);
}

#[test]
fn test_export_reload_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let season = Season::new("2024-25").unwrap();
    let path = output_path(dir.path(), TableKind::TeamInfo, &season);

    let table = team_info_table();
    write_csv(&table, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let mut reader = csv::Reader::from_reader(&bytes[UTF8_BOM.len()..]);

    let headers: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(headers, table.columns());

    let records: Vec<csv::StringRecord> =
        reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), table.row_count());

    for (record, row) in records.iter().zip(table.rows()) {
        for (field, cell) in record.iter().zip(row) {
            assert_eq!(field, cell.to_string());
        }
    }

    // IDs come back as integer strings, not float renderings.
    assert_eq!(&records[0][0], "1610612743");
    assert_eq!(&records[0][2], "Ball Arena — Jokić's house");
}

#[test]
fn test_export_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let season = Season::new("2024-25").unwrap();
    let path = output_path(dir.path(), TableKind::GameLogs, &season);

    std::fs::write(&path, "stale contents from a previous season").unwrap();

    let mut table = Table::new(["GAME_ID", "WL"].map(String::from).to_vec());
    table.push_row(vec![
        Cell::Text("0022400001".to_string()),
        Cell::Text("W".to_string()),
    ]);
    write_csv(&table, &path).unwrap();

    let contents = std::fs::read(&path).unwrap();
    let text = String::from_utf8_lossy(&contents);
    assert!(!text.contains("stale contents"));
    assert!(text.contains("0022400001"));
}

#[test]
fn test_export_renders_nulls_as_empty_fields() {
    let dir = tempfile::tempdir().unwrap();
    let season = Season::new("2023-24").unwrap();
    let path = output_path(dir.path(), TableKind::TeamStats, &season);

    let mut table = Table::new(["TEAM_ID", "PTS"].map(String::from).to_vec());
    table.push_row(vec![Cell::Number(1.0), Cell::Null]);
    write_csv(&table, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let mut reader = csv::Reader::from_reader(&bytes[UTF8_BOM.len()..]);
    let record = reader.records().next().unwrap().unwrap();
    assert_eq!(&record[1], "");
}
