use pretty_assertions::assert_eq;
use psrec_plot::normalize::normalize;
use psrec_plot::output::{read_document, write_document, write_svg};
use psrec_plot::parser::recording::parse_recording_from;
use psrec_plot::parser::schema::{RecordingDocument, RssUnit, TimeUnit};
use std::io::Cursor;

#[test]
fn svg_writer_roundtrip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("chart.svg");

    write_svg("<svg></svg>", &path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "<svg></svg>");
}

#[test]
fn svg_writer_rejects_directory_path() {
    let temp_dir = tempfile::tempdir().unwrap();

    assert!(write_svg("<svg></svg>", temp_dir.path()).is_err());
}

#[test]
fn json_export_roundtrips_normalized_recording() {
    let input = "#@ systhreads: 16\n0.0,10.0,1048576,2\n400.0,90.0,2097152,3\n";
    let recording = normalize(parse_recording_from(Cursor::new(input)).unwrap());
    let document = RecordingDocument::new(recording);

    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("export.json");

    write_document(&document, &path).unwrap();
    let loaded = read_document(&path).unwrap();

    assert_eq!(loaded.recording.time_unit, TimeUnit::Minutes);
    assert_eq!(loaded.recording.rss_unit, RssUnit::Megabytes);
    assert_eq!(loaded.recording.system_thread_count, Some(16));
    assert_eq!(loaded.recording.samples.len(), 2);
    // times were rescaled to minutes before export
    assert_eq!(loaded.recording.samples[1].time, 400.0 / 60.0);
}
