use crate::common::{ok_endpoint, thor_cmd, url, OK_PATH};
use serial_test::parallel;
use std::time::Duration;

#[tokio::test(flavor = "multi_thread")]
#[parallel]
async fn should_dump_report_to_output_dir() {
    let server = ok_endpoint(Duration::from_millis(10), 4).await;
    let target = url(&server, OK_PATH);
    let output_dir = tempfile::tempdir().unwrap();

    thor_cmd()
        .args([
            "-h",
            "2",
            "-t",
            "2",
            "--output-dir",
            output_dir.path().to_str().unwrap(),
            "--identifier",
            "ci",
            "--remark",
            "warm",
            target.as_str(),
        ])
        .assert()
        .success();

    let report_path = output_dir
        .path()
        .join("hammer_2_2_127.0.0.1_warm_ci")
        .join("report.json");
    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(report_path).unwrap()).unwrap();

    assert_eq!(report["identifier"], "ci");
    assert_eq!(report["params"]["hammers"], 2);
    assert_eq!(report["params"]["throws"], 2);
    assert_eq!(report["params"]["remark"], "warm");
    assert_eq!(report["hammer_metrics"].as_array().unwrap().len(), 2);
    assert_eq!(report["hammer_metrics"][1]["hammer_id"], 1);
    assert!(report["total_average_elapsed_secs"].as_f64().unwrap() >= 0.01);
}
