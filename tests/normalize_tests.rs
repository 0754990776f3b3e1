use psrec_plot::normalize::normalize;
use psrec_plot::parser::recording::parse_recording_from;
use psrec_plot::parser::schema::{CpuType, Recording, RssUnit, TimeUnit};
use std::io::Cursor;

fn pipeline(input: &str) -> Recording {
    normalize(parse_recording_from(Cursor::new(input)).unwrap())
}

#[test]
fn long_recording_switches_to_hours() {
    let input = "0.0,10.0,1048576\n10000.0,20.0,1048576\n20000.0,30.0,1048576\n";
    let recording = pipeline(input);

    assert_eq!(recording.time_unit, TimeUnit::Hours);
    assert_eq!(recording.samples[0].time, 0.0);
    assert_eq!(recording.samples[1].time, 10000.0 / 3600.0);
    assert_eq!(recording.samples[2].time, 20000.0 / 3600.0);
}

#[test]
fn medium_recording_switches_to_minutes() {
    let input = "0.0,10.0,1048576\n600.0,20.0,1048576\n";
    let recording = pipeline(input);

    assert_eq!(recording.time_unit, TimeUnit::Minutes);
    assert_eq!(recording.samples[1].time, 10.0);
}

#[test]
fn short_recording_stays_in_seconds() {
    let recording = pipeline("0.0,10.0,1048576\n120.0,20.0,1048576\n");

    assert_eq!(recording.time_unit, TimeUnit::Seconds);
    assert_eq!(recording.samples[1].time, 120.0);
}

#[test]
fn large_rss_switches_to_gb() {
    // 6 GB in bytes pushes the whole recording to GB
    let six_gb_bytes = 6.0 * 1024.0 * 1024.0 * 1024.0;
    let input = format!("0.0,10.0,1048576\n10.0,20.0,{}\n", six_gb_bytes);
    let recording = pipeline(&input);

    assert_eq!(recording.rss_unit, RssUnit::Gigabytes);
    assert_eq!(recording.samples[0].rss, 1.0 / 1024.0);
    assert_eq!(recording.samples[1].rss, 6.0);
}

#[test]
fn metadata_overrides_cpu_inference() {
    let recording = pipeline("#@ cputype: absolute\n0.0,50.0,1048576\n");
    assert_eq!(recording.cpu_type, CpuType::Absolute);

    let recording = pipeline("#@ cputype: normalised\n0.0,700.0,1048576\n");
    assert_eq!(recording.cpu_type, CpuType::Normalised);
}

#[test]
fn cpu_type_inferred_without_metadata() {
    let recording = pipeline("0.0,150.0,1048576\n");
    assert_eq!(recording.cpu_type, CpuType::Absolute);

    let recording = pipeline("0.0,87.0,1048576\n");
    assert_eq!(recording.cpu_type, CpuType::Normalised);
}

#[test]
fn empty_input_yields_default_units() {
    let recording = pipeline("# only a comment\n");

    assert!(recording.samples.is_empty());
    assert_eq!(recording.time_unit, TimeUnit::Seconds);
    assert_eq!(recording.rss_unit, RssUnit::Megabytes);
    assert!(!recording.has_thread_counts);
    assert_eq!(recording.duration(), 0.0);
}

#[test]
fn unrecognised_cputype_value_falls_back_to_inference() {
    let recording = pipeline("#@ cputype: sideways\n0.0,150.0,1048576\n");
    assert_eq!(recording.cpu_type, CpuType::Absolute);
}

#[test]
fn thread_counts_are_all_or_nothing() {
    let recording = pipeline("0.0,10.0,1048576,4\n1.0,10.0,1048576,5\n");
    assert!(recording.has_thread_counts);

    let recording = pipeline("0.0,10.0,1048576,4\n1.0,10.0,1048576\n");
    assert!(!recording.has_thread_counts);
}
