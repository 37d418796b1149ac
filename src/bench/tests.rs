//! Unit tests for the buffer-clear benchmark.

use std::time::Duration;

use super::clear::{run, set_buf, timer_resolution, BenchConfig, ClearMethod, MEGABYTE, V1, V2, V5, V6};

fn small(config: BenchConfig) -> BenchConfig {
    BenchConfig { size: 4096, ..config }
}

#[test]
fn test_set_buf_zeroes() {
    let mut buffer = vec![0xAAu8; 1000];
    set_buf(&mut buffer);

    assert!(buffer.iter().all(|byte| *byte == 0));
}

#[test]
fn test_memset_zeroes() {
    let mut buffer = vec![0x55u8; 1000];
    ClearMethod::Memset.clear(&mut buffer);

    assert!(buffer.iter().all(|byte| *byte == 0));
}

#[test]
fn test_variant_settings() {
    assert_eq!(V1.size, MEGABYTE);
    assert_eq!(V1.iterations, 1);
    assert!(!V1.warm_up);
    assert_eq!(V2.order, [ClearMethod::Memset, ClearMethod::SetBuf]);
    assert_eq!(V5.iterations, 5);
    assert!(V5.warm_up);
    assert_eq!(V6.size, 256 * MEGABYTE);
    assert!(V6.report_resolution);
    assert_eq!((V6.width, V6.decimals), (2, 2));
}

#[test]
fn test_allocate() {
    let buffer = small(V5).allocate();

    assert_eq!(buffer.len(), 4096);
    assert!(buffer.iter().all(|byte| *byte == 0));
}

#[test]
fn test_single_run_output() {
    let mut buffer = small(V1).allocate();
    let mut out = Vec::new();
    let measurements = run(&small(V1), &mut buffer, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("setBuf:  "));
    assert!(lines[0].ends_with(" seconds"));
    assert!(lines[1].starts_with("memset:  "));
    assert_eq!(measurements.len(), 2);
    assert_eq!(measurements[0].durations.len(), 1);
}

#[test]
fn test_order_follows_config() {
    let mut buffer = small(V2).allocate();
    let mut out = Vec::new();
    let measurements = run(&small(V2), &mut buffer, &mut out).unwrap();

    assert_eq!(measurements[0].method, ClearMethod::Memset);
    assert_eq!(measurements[1].method, ClearMethod::SetBuf);
    assert!(String::from_utf8(out).unwrap().starts_with("memset: "));
}

#[test]
fn test_repeated_runs_count() {
    let mut buffer = small(V5).allocate();
    let mut out = Vec::new();
    let measurements = run(&small(V5), &mut buffer, &mut out).unwrap();

    for measurement in &measurements {
        assert_eq!(measurement.durations.len(), 5);
        assert!(measurement.seconds().iter().all(|seconds| *seconds >= 0.0));
    }

    let text = String::from_utf8(out).unwrap();
    for line in text.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        assert_eq!(fields.len(), 1 + 5 + 1);
        assert!(fields[1..6].iter().all(|field| field.parse::<f64>().is_ok()));
    }
}

#[test]
fn test_short_precision_and_resolution() {
    let mut buffer = small(V6).allocate();
    let mut out = Vec::new();
    run(&small(V6), &mut buffer, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains(" 0.00"));
    assert!(lines[2].starts_with("Timer resolution is 0."));
    assert_eq!(lines[2].len(), "Timer resolution is ".len() + 17);
}

#[test]
fn test_empty_buffer_rejected() {
    let mut out = Vec::new();
    let error = run(&V1, &mut [], &mut out).err().unwrap();

    assert_eq!(error.get_error_name(), "EmptyBuffer");
    assert!(out.is_empty());
}

#[test]
fn test_timer_resolution_positive() {
    let resolution = timer_resolution();

    assert!(resolution > Duration::ZERO);
    assert!(resolution < Duration::from_secs(1));
}
