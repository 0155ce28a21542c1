use core::time::Duration;
use std::borrow::Cow;
use std::path::Path;

use crate::input::IStr;

use super::{
    error_context, percentile, Mode, Opts, Output, OutputEq, OutputKind, Report, Unchecked,
};

fn render<T>(kind: OutputKind, f: T) -> String
where
    T: FnOnce(&mut Output<&mut Vec<u8>>) -> std::io::Result<()>,
{
    let mut buf = Vec::new();
    f(&mut Output::new(&mut buf, kind)).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_parse_opts() {
    let opts = Opts::parse_from([
        "--bench",
        "--verbose",
        "--count",
        "3",
        "--input",
        "inputs/other.txt",
        "--json",
    ])
    .unwrap();

    assert!(matches!(opts.mode, Mode::Bench));
    assert_eq!(opts.level, Some(log::LevelFilter::Debug));
    assert_eq!(opts.count, Some(3));
    assert_eq!(opts.input(), Some(Path::new("inputs/other.txt")));
    assert!(opts.json);
}

#[test]
fn test_parse_defaults() {
    let opts = Opts::parse_from(Vec::<String>::new()).unwrap();
    assert!(matches!(opts.mode, Mode::Default));
    assert_eq!(opts.level, None);
    assert_eq!(opts.input(), None);
    assert!(!opts.json);
}

#[test]
fn test_parse_trace_wins() {
    let opts = Opts::parse_from(["--trace", "--verbose"]).unwrap();
    assert_eq!(opts.level, Some(log::LevelFilter::Trace));

    let opts = Opts::parse_from(["--verbose", "--trace"]).unwrap();
    assert_eq!(opts.level, Some(log::LevelFilter::Trace));
}

#[test]
fn test_parse_stops_at_separator() {
    let opts = Opts::parse_from(["--warmup", "0", "--", "--bogus"]).unwrap();
    assert_eq!(opts.warmup, Some(0));
}

#[test]
fn test_parse_errors() {
    assert!(Opts::parse_from(["--bogus"]).is_err());
    assert!(Opts::parse_from(["--bench", "--bench"]).is_err());
    assert!(Opts::parse_from(["--count"]).is_err());
    assert!(Opts::parse_from(["--time-limit", "soon"]).is_err());
}

#[test]
fn test_report() {
    let samples = (1..=100).map(Duration::from_millis).collect::<Vec<_>>();
    let report = Report::from_sorted(&samples);

    assert_eq!(report.count, 100);
    assert_eq!(report.min, Duration::from_millis(1));
    assert_eq!(report.max, Duration::from_millis(100));
    assert_eq!(report.p50, Duration::from_millis(50));
    assert_eq!(report.p95, Duration::from_millis(95));
    assert_eq!(report.p99, Duration::from_millis(99));
    assert_eq!(report.avg, Duration::from_micros(50500));

    let mut total = Report::default();
    total += &report;
    total += &report;
    assert_eq!(total.count, 200);
    assert_eq!(total.max, Duration::from_millis(200));
}

#[test]
fn test_report_empty() {
    assert_eq!(Report::from_sorted(&[]), Report::default());
    assert_eq!(percentile(&[], 5000), Duration::default());
}

#[test]
fn test_output_eq() {
    assert!((1usize, 2u64).output_eq(&(1usize, 2u64)));
    assert!(!(1usize, 2u64).output_eq(&(1usize, 3u64)));
    assert!(String::from("abc").output_eq(&"abc"));
    assert!(Some(1u32).output_eq(&Some(1u32)));
    assert!(!Some(1u32).output_eq(&None::<u32>));
    assert!((1u32, 2u32).output_eq(&Unchecked));
}

#[test]
fn test_output_answer() {
    let normal = render(OutputKind::Normal, |o| o.answer(&(13usize, 43usize)));
    assert_eq!(normal, "part1: 13\npart2: 43\n");

    let json = render(OutputKind::Json, |o| o.answer(&(13usize, 43usize)));
    assert_eq!(json, "{\"type\":\"answer\",\"data\":[\"13\",\"43\"]}\n");
}

#[test]
fn test_output_message() {
    let normal = render(OutputKind::Normal, |o| o.info("warming up"));
    assert_eq!(normal, "info: warming up\n");

    let json = render(OutputKind::Json, |o| o.error("failed"));
    assert_eq!(
        json,
        "{\"type\":\"message\",\"data\":{\"kind\":\"error\",\"output\":\"failed\"}}\n"
    );
}

#[test]
fn test_output_report() {
    let json = render(OutputKind::Json, |o| o.report(&Report::default()));
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["type"], "report");
    assert_eq!(value["data"]["count"], 0);
}

#[test]
fn test_error_context() {
    let mut input = IStr::new(b"1\n2 x\n");
    let data = input;

    let error = (|| -> anyhow::Result<()> {
        input.line::<u32>()?;
        input.line::<(u32, u32)>()?;
        Ok(())
    })()
    .unwrap_err();

    let error = error_context(Cow::Borrowed("inputs/d01.txt"), data, error);
    assert_eq!(error.to_string(), "inputs/d01.txt:2:2");
    assert!(format!("{error:#}").contains("not an integer"));
}
