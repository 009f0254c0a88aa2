use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use safeall::error::SourceError;
use safeall::io::incidents::read_incidents;
use safeall::region::Region;
use safeall::source::{load, locate};

const HEADER: &str = "DCLR_YMD,DCLR_TM,DSPT_YMD,DSPT_TM";

fn write_file(path: &Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}

#[test]
fn locate_lists_region_csvs_sorted() {
    let dir = tempfile::tempdir().unwrap();
    let region = Region::resolve("강원").unwrap();
    let folder = dir.path().join(region.folder.as_deref().unwrap());
    write_file(&folder.join("b_2023.csv"), HEADER.as_bytes());
    write_file(&folder.join("a_2022.CSV"), HEADER.as_bytes());
    write_file(&folder.join("c_2024.csv.gz"), b"");
    write_file(&folder.join("notes.txt"), b"ignore me");

    let files = locate(dir.path(), &region);
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["a_2022.CSV", "b_2023.csv", "c_2024.csv.gz"]);
}

#[test]
fn locate_is_empty_without_folder() {
    let dir = tempfile::tempdir().unwrap();
    assert!(locate(dir.path(), &Region::resolve("제주").unwrap()).is_empty());
    assert!(locate(dir.path(), &Region::resolve("서울").unwrap()).is_empty());
}

#[test]
fn headers_match_case_insensitively_and_times_are_padded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lower.csv");
    write_file(
        &path,
        "\u{feff}sttn_nm, dclr_ymd ,dclr_tm,dspt_ymd,dspt_tm\n산악,20230501,93000,20230501,94500\n"
            .as_bytes(),
    );

    let rows = read_incidents(&path).unwrap();
    assert_eq!(rows.len(), 1);
    let record = rows[0].normalize().unwrap();
    assert_eq!(record.reported_at.format("%H:%M:%S").to_string(), "09:30:00");
    assert!((record.response_minutes - 15.0).abs() < 1e-9);
}

#[test]
fn missing_columns_are_named() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.csv");
    write_file(&path, b"DCLR_YMD,DCLR_TM\n20230501,093000\n");

    match read_incidents(&path) {
        Err(SourceError::MissingColumns { missing, .. }) => {
            assert_eq!(missing, vec!["DSPT_YMD", "DSPT_TM"]);
        }
        other => panic!("expected MissingColumns, got {other:?}"),
    }
}

#[test]
fn gzip_exports_are_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.csv.gz");
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    writeln!(enc, "{HEADER}").unwrap();
    writeln!(enc, "20230501,080000,20230501,084500").unwrap();
    writeln!(enc, "20230502,120000,20230502,121000").unwrap();
    write_file(&path, &enc.finish().unwrap());

    let rows = read_incidents(&path).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].dispatch_time, "121000");
}

#[test]
fn non_utf8_fields_do_not_abort_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.csv");
    let mut bytes = b"NOTE,DCLR_YMD,DCLR_TM,DSPT_YMD,DSPT_TM\n".to_vec();
    // "산악" in EUC-KR
    bytes.extend_from_slice(&[0xBB, 0xEA, 0xBE, 0xC7]);
    bytes.extend_from_slice(b",20230501,080000,20230501,083000\n");
    write_file(&path, &bytes);

    let rows = read_incidents(&path).unwrap();
    assert_eq!(rows.len(), 1);
    let record = rows[0].normalize().unwrap();
    assert!((record.response_minutes - 30.0).abs() < 1e-9);
}

#[test]
fn load_concatenates_and_skips_unreadable_files() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("a.csv");
    let second = dir.path().join("b.csv");
    let empty = dir.path().join("c.csv");
    let missing = dir.path().join("gone.csv");
    write_file(&first, format!("{HEADER}\n20230501,080000,20230501,081000\n").as_bytes());
    write_file(
        &second,
        format!("{HEADER}\n20230601,080000,20230601,082000\n20230602,080000,20230602,083000\n")
            .as_bytes(),
    );
    write_file(&empty, b"");

    let paths: Vec<PathBuf> = vec![first.clone(), missing, second.clone(), empty];
    let loaded = load(&paths).unwrap();

    assert_eq!(loaded.table.len(), 3);
    assert_eq!(loaded.files, vec![first, second]);
    assert_eq!(loaded.warnings.len(), 2);
    assert!(loaded.warnings.iter().any(|w| w.contains("gone.csv")));
    assert!(loaded.warnings.iter().any(|w| w.contains("no rows")));
    assert_eq!(loaded.table.rows()[0].dispatch_time, "081000");
}

#[test]
fn load_skips_wrong_layout_next_to_good_files() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("a.csv");
    let codebook = dir.path().join("b_codebook.csv");
    write_file(&good, format!("{HEADER}\n20230501,080000,20230501,081000\n").as_bytes());
    write_file(&codebook, b"COLUMN,MEANING\nDCLR_YMD,report date\n");

    let loaded = load(&[good.clone(), codebook]).unwrap();
    assert_eq!(loaded.table.len(), 1);
    assert_eq!(loaded.files, vec![good]);
    assert_eq!(loaded.warnings.len(), 1);
    assert!(loaded.warnings[0].contains("b_codebook.csv"));
}

#[test]
fn load_reports_wrong_layout_when_nothing_else_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wrong.csv");
    write_file(&path, b"A,B,C\n1,2,3\n");

    let err = load(&[path]).unwrap_err();
    assert!(matches!(err, SourceError::MissingColumns { .. }));
}

#[test]
fn uppercase_gzip_extension_is_decompressed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("EXPORT.CSV.GZ");
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    writeln!(enc, "{HEADER}").unwrap();
    writeln!(enc, "20230501,080000,20230501,082000").unwrap();
    write_file(&path, &enc.finish().unwrap());

    let rows = read_incidents(&path).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].dispatch_time, "082000");
}

#[test]
fn load_with_nothing_yields_empty_table() {
    let loaded = load(&[]).unwrap();
    assert!(loaded.table.is_empty());
    assert!(loaded.files.is_empty());
    assert!(loaded.warnings.is_empty());
}
