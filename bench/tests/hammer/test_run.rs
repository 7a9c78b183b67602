use crate::common::{elapsed_times, ok_endpoint, thor_cmd, url, BODY, OK_PATH};
use serial_test::{parallel, serial};
use std::time::{Duration, Instant};

#[tokio::test(flavor = "multi_thread")]
#[parallel]
async fn should_report_every_throw_and_averages() {
    let server = ok_endpoint(Duration::from_millis(100), 6).await;

    let target = url(&server, OK_PATH);

    let output = thor_cmd()
        .args(["-h", "2", "-t", "3", target.as_str()])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 9, "unexpected output:\n{stdout}");

    for hammer in 0..2 {
        let prefix = format!("Hammer {hammer}, ");
        let hammer_lines: Vec<&str> = lines
            .iter()
            .copied()
            .filter(|line| line.starts_with(&prefix))
            .collect();
        assert_eq!(hammer_lines.len(), 4);
        for (throw, line) in hammer_lines.iter().take(3).enumerate() {
            let throw_prefix = format!("Hammer {hammer}, Throw:    {throw}, Elapsed Time: ");
            assert!(line.starts_with(&throw_prefix), "unexpected line: {line}");
        }
        let average_prefix = format!("Hammer {hammer}, AVERAGE    , Elapsed Time: ");
        assert!(hammer_lines[3].starts_with(&average_prefix));

        let throws = elapsed_times(&stdout, &format!("Hammer {hammer}, Throw:"));
        assert!(throws.iter().all(|elapsed| (0.09..0.6).contains(elapsed)));
        let average = elapsed_times(&stdout, &format!("Hammer {hammer}, AVERAGE"));
        assert!((0.09..0.6).contains(&average[0]));
    }

    let total: f64 = lines[8]
        .strip_prefix("TOTAL AVERAGE ELAPSED TIME: ")
        .expect("total average must be the last line")
        .parse()
        .unwrap();
    assert!((0.09..0.6).contains(&total));
}

#[tokio::test(flavor = "multi_thread")]
#[parallel]
async fn should_print_body_before_each_throw_line_in_verbose_mode() {
    let server = ok_endpoint(Duration::ZERO, 2).await;

    let target = url(&server, OK_PATH);

    let output = thor_cmd()
        .args(["-v", "-t", "2", target.as_str()])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 6, "unexpected output:\n{stdout}");
    assert_eq!(lines[0], BODY);
    assert!(lines[1].starts_with("Hammer 0, Throw:    0, "));
    assert_eq!(lines[2], BODY);
    assert!(lines[3].starts_with("Hammer 0, Throw:    1, "));
    assert!(lines[4].starts_with("Hammer 0, AVERAGE    , "));
    assert!(lines[5].starts_with("TOTAL AVERAGE ELAPSED TIME: "));
}

#[tokio::test(flavor = "multi_thread")]
#[parallel]
async fn should_not_print_body_without_verbose_flag() {
    let server = ok_endpoint(Duration::ZERO, 1).await;

    let output = thor_cmd().arg(url(&server, OK_PATH)).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains(BODY));
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn should_hammer_in_parallel() {
    let server = ok_endpoint(Duration::from_secs(1), 4).await;

    let target = url(&server, OK_PATH);

    let started = Instant::now();
    let output = thor_cmd()
        .args(["-h", "4", "-t", "1", target.as_str()])
        .output()
        .unwrap();
    let elapsed = started.elapsed();

    assert!(output.status.success());
    assert!(
        elapsed < Duration::from_millis(2500),
        "four hammers took {elapsed:?}"
    );
}
