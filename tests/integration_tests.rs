use chrono::NaiveDate;
use serde_json::Value;
use serial_test::serial;
use sumo_scrape::{
    cli::Args,
    commands::handle_scrape_command,
    config::Config,
    data_fetcher::models::Side,
    testing_utils::{BoutRow, LeaderboardPageBuilder, ResultsPageBuilder},
};
use tempfile::tempdir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn clear_schedule_env() {
    // SAFETY: tests touching the environment run under #[serial]
    unsafe {
        std::env::remove_var("BANZUKE");
        std::env::remove_var("DAY");
    }
}

fn config_for(server: &MockServer) -> Config {
    Config {
        base_url: server.uri(),
        http_timeout_seconds: 5,
        ..Config::default()
    }
}

async fn mount_leaderboard(server: &MockServer) {
    let page = LeaderboardPageBuilder::new()
        .entry("Y1e", "Hoshoryu", "10-2")
        .entry("O1e", "Takakeisho", "10-2")
        .entry("O1w", "Onosato", "11-1")
        .build();

    Mock::given(method("GET"))
        .and(path("/Banzuke.aspx"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .mount(server)
        .await;
}

/// Both pipelines run against the mock site and write their files
#[tokio::test]
#[serial]
async fn test_full_run_writes_both_files() {
    clear_schedule_env();
    let server = MockServer::start().await;

    let results = ResultsPageBuilder::new()
        .row(BoutRow::decided("Onosato", "Hoshoryu", "yorikiri", Side::East))
        .raw_row("<tr><td colspan=\"5\">&nbsp;</td></tr>")
        .row(BoutRow::decided("Kotozakura", "Kirishima", "hatakikomi", Side::West))
        .row(BoutRow::pending("Abi", "Ura").without_links())
        .marker_image_page();

    Mock::given(method("GET"))
        .and(path("/Results.aspx"))
        .and(query_param("b", "202509"))
        .and(query_param("d", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_string(results))
        .expect(1)
        .mount(&server)
        .await;
    mount_leaderboard(&server).await;

    let temp_dir = tempdir().unwrap();
    let args = Args {
        banzuke: Some("202509".to_string()),
        day: Some("5".to_string()),
        output_dir: Some(temp_dir.path().to_string_lossy().to_string()),
        ..Args::default()
    };
    let today = NaiveDate::from_ymd_opt(2025, 9, 18).unwrap();

    let written = handle_scrape_command(&args, &config_for(&server), today)
        .await
        .unwrap();
    assert_eq!(written.len(), 2);

    let bouts: Value =
        serde_json::from_str(&std::fs::read_to_string(temp_dir.path().join("bouts.json")).unwrap())
            .unwrap();
    let bouts = bouts.as_array().unwrap();
    assert_eq!(bouts.len(), 3);
    assert_eq!(bouts[0]["day"], 5);
    assert_eq!(bouts[0]["bout"], 1);
    assert_eq!(bouts[2]["bout"], 3);
    assert_eq!(bouts[0]["east"]["name"], "Onosato");
    assert_eq!(bouts[0]["east"]["id"], "10001");
    assert_eq!(bouts[0]["winner"], "east");
    assert_eq!(bouts[1]["winner"], "west");
    assert_eq!(bouts[1]["kimarite"], "hatakikomi");
    assert_eq!(bouts[2]["east"]["id"], Value::Null);
    assert_eq!(bouts[2]["kimarite"], Value::Null);
    assert_eq!(bouts[2]["winner"], Value::Null);

    let leaderboard =
        std::fs::read_to_string(temp_dir.path().join("leaderboard.json")).unwrap();
    let compact: Value = serde_json::from_str(&leaderboard).unwrap();
    assert_eq!(
        compact,
        serde_json::json!({"11": ["Onosato 11-1"], "10": ["Hoshoryu 10-2", "Takakeisho 10-2"]})
    );
    assert!(leaderboard.find("\"11\"").unwrap() < leaderboard.find("\"10\"").unwrap());
}

/// Without explicit values the schedule comes from the date
#[tokio::test]
#[serial]
async fn test_computed_schedule_is_requested() {
    clear_schedule_env();
    let server = MockServer::start().await;

    // Day 1 of the September 2025 basho is Sunday the 14th
    Mock::given(method("GET"))
        .and(path("/Results.aspx"))
        .and(query_param("b", "202509"))
        .and(query_param("d", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(
                ResultsPageBuilder::new()
                    .row(BoutRow::decided("Wakatakakage", "Daieisho", "oshidashi", Side::East))
                    .styled_page(),
            ),
        )
        .expect(1)
        .mount(&server)
        .await;

    let temp_dir = tempdir().unwrap();
    let args = Args {
        skip_leaderboard: true,
        output_dir: Some(temp_dir.path().to_string_lossy().to_string()),
        ..Args::default()
    };
    let today = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap();

    handle_scrape_command(&args, &config_for(&server), today)
        .await
        .unwrap();

    assert!(temp_dir.path().join("bouts.json").exists());
    assert!(!temp_dir.path().join("leaderboard.json").exists());
}

/// Environment values fill in for missing arguments
#[tokio::test]
#[serial]
async fn test_schedule_from_environment() {
    clear_schedule_env();
    // SAFETY: serialized test
    unsafe {
        std::env::set_var("BANZUKE", "202511");
        std::env::set_var("DAY", "40");
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Results.aspx"))
        .and(query_param("b", "202511"))
        .and(query_param("d", "15"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(ResultsPageBuilder::new().styled_page()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let temp_dir = tempdir().unwrap();
    let args = Args {
        skip_leaderboard: true,
        output_dir: Some(temp_dir.path().to_string_lossy().to_string()),
        ..Args::default()
    };
    let today = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();

    let result = handle_scrape_command(&args, &config_for(&server), today).await;
    clear_schedule_env();
    result.unwrap();

    let bouts = std::fs::read_to_string(temp_dir.path().join("bouts.json")).unwrap();
    assert_eq!(bouts.trim(), "[]");
}

/// --text-export reads the plain-text results instead of the HTML page
#[tokio::test]
#[serial]
async fn test_text_export_run() {
    clear_schedule_env();
    let server = MockServer::start().await;

    let export = "\
Makuuchi
Onosato*     yorikiri     Hoshoryu
Kotozakura   hatakikomi   Kirishima*
Juryo
Tomokaze*    yorikiri     Shimanoumi
";
    Mock::given(method("GET"))
        .and(path("/Results_text.aspx"))
        .and(query_param("b", "202509"))
        .and(query_param("d", "6"))
        .respond_with(ResponseTemplate::new(200).set_body_string(export))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/Results.aspx"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let temp_dir = tempdir().unwrap();
    let args = Args {
        banzuke: Some("202509".to_string()),
        day: Some("6".to_string()),
        text_export: true,
        skip_leaderboard: true,
        output_dir: Some(temp_dir.path().to_string_lossy().to_string()),
        ..Args::default()
    };
    let today = NaiveDate::from_ymd_opt(2025, 9, 19).unwrap();

    handle_scrape_command(&args, &config_for(&server), today)
        .await
        .unwrap();

    let bouts: Value =
        serde_json::from_str(&std::fs::read_to_string(temp_dir.path().join("bouts.json")).unwrap())
            .unwrap();
    assert_eq!(
        bouts,
        serde_json::json!([
            {"day": 6, "bout": 1,
             "east": {"name": "Onosato", "id": null}, "west": {"name": "Hoshoryu", "id": null},
             "kimarite": "yorikiri", "winner": "east"},
            {"day": 6, "bout": 2,
             "east": {"name": "Kotozakura", "id": null}, "west": {"name": "Kirishima", "id": null},
             "kimarite": "hatakikomi", "winner": "west"}
        ])
    );
}

/// Only the leaderboard pipeline runs with --leaderboard-only
#[tokio::test]
#[serial]
async fn test_leaderboard_only_run() {
    clear_schedule_env();
    let server = MockServer::start().await;
    mount_leaderboard(&server).await;

    let temp_dir = tempdir().unwrap();
    let args = Args {
        leaderboard_only: true,
        output_dir: Some(temp_dir.path().to_string_lossy().to_string()),
        ..Args::default()
    };
    let today = NaiveDate::from_ymd_opt(2025, 9, 20).unwrap();

    let written = handle_scrape_command(&args, &config_for(&server), today)
        .await
        .unwrap();
    assert_eq!(written, vec![temp_dir.path().join("leaderboard.json")]);
    assert!(!temp_dir.path().join("bouts.json").exists());
}
