// End-to-end report runs against a temporary working directory
use netsim_metrics::{MetricsTable, ReportConfig, ReportError, ReportGenerator};
use std::fs;
use std::path::Path;

const SAMPLE: &str = "time,throughput,delay,loss\n\
                      0,100,20,0.1\n\
                      1,95,22,0.2\n\
                      2,90,25,0.5\n";

fn config_for(dir: &Path) -> ReportConfig {
    ReportConfig::new()
        .with_input(dir.join("results.csv"))
        .with_output_dir(dir)
}

fn read_outputs(dir: &Path) -> Vec<Vec<u8>> {
    ["throughput.png", "delay.png", "loss.png"]
        .iter()
        .map(|name| fs::read(dir.join(name)).unwrap())
        .collect()
}

#[test]
fn generates_three_charts() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("results.csv"), SAMPLE).unwrap();

    let report = ReportGenerator::new(config_for(dir.path())).run().unwrap();

    assert_eq!(report.outputs.len(), 3);
    assert_eq!(report.stats.rows, 3);
    for (path, name) in report
        .outputs
        .iter()
        .zip(["throughput.png", "delay.png", "loss.png"])
    {
        assert_eq!(path, &dir.path().join(name));
        assert!(fs::metadata(path).unwrap().len() > 0);
    }
    assert_eq!(
        report.completion_message(),
        "Saved 3 charts: throughput.png / delay.png / loss.png"
    );
}

#[test]
fn example_rows_produce_expected_series() {
    let table = MetricsTable::from_reader(SAMPLE.as_bytes()).unwrap();

    assert_eq!(
        table.series("time", "throughput").unwrap(),
        vec![(0.0, 100.0), (1.0, 95.0), (2.0, 90.0)]
    );
    assert_eq!(
        table.series("time", "delay").unwrap(),
        vec![(0.0, 20.0), (1.0, 22.0), (2.0, 25.0)]
    );
    assert_eq!(
        table.series("time", "loss").unwrap(),
        vec![(0.0, 0.1), (1.0, 0.2), (2.0, 0.5)]
    );
}

#[test]
fn missing_loss_column_keeps_earlier_charts() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("results.csv"),
        "time,throughput,delay\n0,100,20\n1,95,22\n",
    )
    .unwrap();

    let result = ReportGenerator::new(config_for(dir.path())).run();

    match result {
        Err(ReportError::MissingColumn(column)) => assert_eq!(column, "loss"),
        other => panic!("expected MissingColumn, got {:?}", other),
    }
    assert!(dir.path().join("throughput.png").exists());
    assert!(dir.path().join("delay.png").exists());
    assert!(!dir.path().join("loss.png").exists());
}

#[test]
fn missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();

    let result = ReportGenerator::new(config_for(dir.path())).run();

    assert!(result.is_err());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn reruns_are_repeatable_and_independent() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("results.csv"), SAMPLE).unwrap();
    let generator = ReportGenerator::new(config_for(dir.path()));

    generator.run().unwrap();
    let first = read_outputs(dir.path());

    // Corrupt one chart; the rerun must restore it without touching the others
    fs::write(dir.path().join("delay.png"), b"garbage").unwrap();
    generator.run().unwrap();
    let second = read_outputs(dir.path());

    assert_eq!(first, second);
}

#[test]
fn existing_outputs_are_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("results.csv"), SAMPLE).unwrap();
    fs::write(dir.path().join("loss.png"), b"stale").unwrap();

    ReportGenerator::new(config_for(dir.path())).run().unwrap();

    let bytes = fs::read(dir.path().join("loss.png")).unwrap();
    assert!(bytes.starts_with(b"\x89PNG"));
}

#[test]
fn gaps_and_out_of_range_values_still_render() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("results.csv"),
        "time,throughput,delay,loss\n0,100,20,-0.5\n1,,22,150\n2,90,,0.5\n",
    )
    .unwrap();

    let report = ReportGenerator::new(config_for(dir.path())).run().unwrap();
    assert_eq!(report.outputs.len(), 3);
}

#[test]
fn header_only_table_renders_empty_charts() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("results.csv"), "time,throughput,delay,loss\n").unwrap();

    let report = ReportGenerator::new(config_for(dir.path())).run().unwrap();
    assert_eq!(report.stats.rows, 0);
    assert!(dir.path().join("loss.png").exists());
}

#[test]
fn unwritable_output_dir_is_a_render_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("results.csv"), SAMPLE).unwrap();
    let config = config_for(dir.path()).with_output_dir(dir.path().join("missing/subdir"));

    let result = ReportGenerator::new(config).run();

    assert!(matches!(result, Err(ReportError::Render { ref chart, .. }) if chart == "Throughput"));
}

#[test]
fn extreme_values_of_opposite_sign_render() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("results.csv"),
        "time,throughput,delay,loss\n0,-1e308,20,0.1\n1,1e308,22,0.2\n",
    )
    .unwrap();

    let report = ReportGenerator::new(config_for(dir.path())).run().unwrap();

    assert_eq!(report.outputs.len(), 3);
    assert!(fs::metadata(dir.path().join("throughput.png")).unwrap().len() > 0);
}

#[test]
fn short_rows_and_na_markers_render() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("results.csv"),
        "time,throughput,delay,loss\n0,100,20,0.1\n1,95\n2,90,NA,0.5\n",
    )
    .unwrap();

    let report = ReportGenerator::new(config_for(dir.path())).run().unwrap();

    assert_eq!(report.stats.rows, 3);
    assert!(dir.path().join("loss.png").exists());
}
