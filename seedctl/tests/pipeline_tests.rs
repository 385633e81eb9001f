//! End-to-end tests: CSV input through mapping and submission against a
//! local mock endpoint, plus the splitter's on-disk output.

use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use seedctl::pipeline::{self, FieldSpec, SeedJob};
use seedctl::seeds;
use seedctl::split;

/// Records every payload and rejects the ones whose `empId` is listed.
#[derive(Clone, Default)]
struct MockApi {
    received: Arc<Mutex<Vec<Value>>>,
    reject_ids: Arc<Vec<String>>,
}

async fn register(State(api): State<MockApi>, Json(body): Json<Value>) -> (StatusCode, String) {
    api.received.lock().unwrap().push(body.clone());
    let id = body["empId"].as_str().unwrap_or_default();
    if api.reject_ids.iter().any(|r| r == id) {
        (StatusCode::CONFLICT, format!("user {} already exists", id))
    } else {
        (StatusCode::CREATED, String::new())
    }
}

async fn spawn_mock(api: MockApi) -> String {
    let app = Router::new()
        .route("/api/register", post(register))
        .with_state(api);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/api/register", addr)
}

fn minimal_job() -> SeedJob {
    SeedJob {
        name: "accounts",
        key_field: "empId",
        specs: vec![FieldSpec::column("empId"), FieldSpec::column("name")],
    }
}

#[tokio::test]
async fn test_batch_continues_past_a_rejected_record() {
    let api = MockApi {
        received: Arc::new(Mutex::new(Vec::new())),
        reject_ids: Arc::new(vec!["EMP003".to_string()]),
    };
    let endpoint = spawn_mock(api.clone()).await;
    let client = reqwest::Client::new();

    let records: Vec<Value> = (1..=5)
        .map(|i| json!({"empId": format!("EMP00{}", i), "name": format!("User {}", i)}))
        .collect();

    let report = pipeline::run(&client, &minimal_job(), &records, &endpoint).await;

    // Every record was attempted, in input order
    let received = api.received.lock().unwrap();
    assert_eq!(received.len(), 5);
    let ids: Vec<_> = received.iter().map(|r| r["empId"].clone()).collect();
    assert_eq!(
        ids,
        vec![
            json!("EMP001"),
            json!("EMP002"),
            json!("EMP003"),
            json!("EMP004"),
            json!("EMP005")
        ]
    );

    assert_eq!(report.total(), 5);
    assert_eq!(report.succeeded(), 4);
    assert_eq!(report.failed(), 1);

    let failure = report.failures().next().unwrap();
    assert_eq!(failure.key, "EMP003");
    assert_eq!(failure.status, Some(409));
    assert!(failure.error.as_deref().unwrap().contains("already exists"));
}

#[tokio::test]
async fn test_mapping_failure_keeps_its_batch_position() {
    let api = MockApi::default();
    let endpoint = spawn_mock(api.clone()).await;
    let client = reqwest::Client::new();

    // Second record has no name, so it fails mapping, not submission
    let records = vec![
        json!({"empId": "EMP001", "name": "A"}),
        json!({"empId": "EMP002"}),
        json!({"empId": "EMP003", "name": "C"}),
    ];

    let report = pipeline::run(&client, &minimal_job(), &records, &endpoint).await;

    let keys: Vec<_> = report.results.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["EMP001", "EMP002", "EMP003"]);
    assert!(report.results[0].success);
    assert!(!report.results[1].success);
    assert_eq!(report.results[1].status, None);
    assert!(report.results[1]
        .error
        .as_deref()
        .unwrap()
        .contains("missing required field"));
    assert!(report.results[2].success);

    // Only the two mappable records reached the endpoint
    assert_eq!(api.received.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_teachers_csv_end_to_end() {
    let api = MockApi::default();
    let endpoint = spawn_mock(api.clone()).await;
    let client = reqwest::Client::new();

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("teachers.csv");
    fs::write(
        &input,
        "empId,name,password,panNo,phno,designation,dept,dateofJoining,profileImg\n\
         EMP101,Asha Rao,secret1,ABCDE1234F,0099112233,Professor,CSE,23/07/2018,\n",
    )
    .unwrap();

    let records = pipeline::read_csv(&input).unwrap();
    let report = pipeline::run(&client, &seeds::teachers(), &records, &endpoint).await;
    assert!(report.is_clean());

    let received = api.received.lock().unwrap();
    assert_eq!(received.len(), 1);
    let payload = &received[0];
    assert_eq!(payload["empId"], json!("EMP101"));
    assert_eq!(payload["campus"], json!("EC"));
    assert_eq!(payload["qualification"], json!("to_be_filled"));
    // Phone keeps its leading zero through the whole pipeline
    assert_eq!(payload["phno"], json!("0099112233"));
    assert_eq!(payload["dateofJoining"], json!("2018-07-23"));
    assert_eq!(payload["totalExpBfrJoin"], json!("5"));
    assert_eq!(payload["profileImg"], json!(seeds::DEFAULT_PROFILE_IMAGE));
}

#[tokio::test]
async fn test_unreachable_endpoint_reports_every_record_failed() {
    let client = reqwest::Client::new();
    let records = vec![json!({"empId": "EMP001", "name": "A"})];

    // Nothing listens on this port
    let report = pipeline::run(
        &client,
        &minimal_job(),
        &records,
        "http://127.0.0.1:9/api/register",
    )
    .await;

    assert_eq!(report.total(), 1);
    assert_eq!(report.failed(), 1);
    let failure = report.failures().next().unwrap();
    assert_eq!(failure.key, "EMP001");
    assert_eq!(failure.status, None);
}

fn write_numbered_csv(path: &Path, rows: usize) {
    let mut content = String::from("id,value\n");
    for i in 1..=rows {
        content.push_str(&format!("{},row-{}\n", i, i));
    }
    fs::write(path, content).unwrap();
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_split_even_rows() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.csv");
    write_numbered_csv(&input, 70);

    let out_dir = dir.path().join("output_csv_files");
    let written = split::split_to_csv(&input, None, 7, &out_dir).unwrap();

    assert_eq!(written.len(), 7);
    for (i, path) in written.iter().enumerate() {
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            format!("output_file_{}.csv", i + 1)
        );
        let lines = read_lines(path);
        assert_eq!(lines[0], "id,value");
        assert_eq!(lines.len(), 11);
    }

    // Row order is preserved across the chunk boundary
    let first = read_lines(&written[0]);
    assert_eq!(first[1], "1,row-1");
    assert_eq!(first[10], "10,row-10");
    let second = read_lines(&written[1]);
    assert_eq!(second[1], "11,row-11");
}

#[test]
fn test_split_remainder_lands_in_last_chunk() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.csv");
    write_numbered_csv(&input, 73);

    let out_dir = dir.path().join("out");
    let written = split::split_to_csv(&input, None, 7, &out_dir).unwrap();

    for path in &written[..6] {
        assert_eq!(read_lines(path).len(), 11);
    }
    let last = read_lines(&written[6]);
    assert_eq!(last.len(), 14);
    assert_eq!(last[13], "73,row-73");
}

#[test]
fn test_split_rerun_is_identical() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.csv");
    write_numbered_csv(&input, 25);

    let out_dir = dir.path().join("out");
    let first: Vec<_> = split::split_to_csv(&input, None, 4, &out_dir)
        .unwrap()
        .iter()
        .map(|p| fs::read(p).unwrap())
        .collect();
    let second: Vec<_> = split::split_to_csv(&input, None, 4, &out_dir)
        .unwrap()
        .iter()
        .map(|p| fs::read(p).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_export_sheets_one_csv_per_sheet() {
    use rust_xlsxwriter::Workbook;

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.xlsx");
    let mut workbook = Workbook::new();

    let s1 = workbook.add_worksheet().set_name("2024 Awards").unwrap();
    s1.write_string(0, 0, "name").unwrap();
    s1.write_string(1, 0, "Asha").unwrap();

    let s2 = workbook.add_worksheet().set_name("2025 Awards").unwrap();
    s2.write_string(0, 0, "name").unwrap();
    s2.write_string(1, 0, "Ravi").unwrap();

    workbook.save(&input).unwrap();

    let out_dir = dir.path().join("csv");
    let written = split::export_sheets(&input, Some(&out_dir)).unwrap();

    assert_eq!(written.len(), 2);
    assert_eq!(
        written[0].file_name().unwrap().to_str().unwrap(),
        "report_2024_Awards.csv"
    );
    assert_eq!(
        written[1].file_name().unwrap().to_str().unwrap(),
        "report_2025_Awards.csv"
    );
    assert_eq!(read_lines(&written[1]), vec!["name", "Ravi"]);
}
