//! Integration tests for fetching catalogs and timetables
//!
//! These tests use wiremock to stand in for the timetable endpoint and run
//! the real HTTP transport against it end-to-end.

use chrono::Weekday;
use fbnd::config::{Config, HttpConfig};
use fbnd::{
    fetch_catalogs, fetch_timetable, CycleSelection, Degree, FbndError, HttpTransport, Lesson,
    ProgramId, SemesterCycle, TransportError,
};
use std::time::Duration;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a configuration pointing at the mock server
fn create_test_config(endpoint: &str) -> Config {
    Config {
        http: HttpConfig {
            endpoint: endpoint.to_string(),
            timeout_secs: 5,
            connect_timeout_secs: 2,
            user_agent: "fbnd-test/1.0".to_string(),
        },
        ..Default::default()
    }
}

fn hours(h: u64) -> Duration {
    Duration::from_secs(h * 3600)
}

/// Semester radio buttons plus the program list, as rendered on every page
fn selection(summer_checked: bool, options: &str) -> String {
    format!(
        r#"<form>
            <input type="radio" name="Lage" id="inlineWintersemester" {}>
            <label for="inlineWintersemester">Wintersemester 2023/24</label>
            <input type="radio" name="Lage" id="inlineSommersemester" {}>
            <label for="inlineSommersemester">Sommersemester 2024</label>
            <select id="select_S" name="SR">{}</select>
        </form>"#,
        if summer_checked { "" } else { "checked" },
        if summer_checked { "checked" } else { "" },
        options
    )
}

fn summer_catalog() -> String {
    format!(
        "<html><body>{}</body></html>",
        selection(
            true,
            r#"<optgroup label="Bachelor">
                <option value="bi2">Bachelor Informatik (2 Semester)</option>
                <option value="bc4">Bachelor Chemie (4 Semester)</option>
            </optgroup>
            <optgroup label="Master">
                <option value="mi2">Master Informatik (2 Semester)</option>
            </optgroup>"#
        )
    )
}

fn winter_catalog() -> String {
    format!(
        "<html><body>{}</body></html>",
        selection(
            false,
            r#"<optgroup label="Bachelor">
                <option value="bi3">Bachelor Informatik (3 Semester)</option>
            </optgroup>
            <optgroup label="Master"></optgroup>"#
        )
    )
}

/// Timetable of the summer program BI2, served as winter
fn timetable_page() -> String {
    format!(
        r#"<html><body>{}
        <table class="table">
          <thead>
            <tr><th>Tag</th><th>08-09</th><th>09-10</th><th>10-11</th><th>11-12</th><th>12-13</th></tr>
          </thead>
          <tbody>
            <tr>
              <td class="text-center">Mo</td>
              <td title="Analysis II/Prof. Dr. Mustermann" colspan="2">ANA2 V Must R101</td>
              <td></td>
              <td title="Programmierung II/Prof. Dr. Beispiel" colspan="2">PRG2 P Bsp Labor</td>
            </tr>
            <tr>
              <td class="text-center">Mo</td>
              <td></td>
              <td title="Englisch/Fr. Smith">ENG F Smi R7</td>
            </tr>
            <tr style="display: none"><td class="text-center">Di</td></tr>
            <tr>
              <td class="text-center">Mi</td>
              <td title="Tutorium Analysis/Hr. Student">TANA T Stu R2</td>
            </tr>
            <tr>
              <td class="text-center">Di</td>
              <td title="Datenbanken/Dr. Tabelle" colspan="3">DB SU Tab R3</td>
            </tr>
          </tbody>
        </table></body></html>"#,
        selection(
            false,
            r#"<optgroup label="Bachelor">
                <option value="bi3">Bachelor Informatik (3 Semester)</option>
            </optgroup>"#
        )
    )
}

async fn mount_catalogs(mock_server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/sp.php"))
        .and(body_string_contains("Lage=SS"))
        .respond_with(ResponseTemplate::new(200).set_body_string(summer_catalog()))
        .mount(mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/sp.php"))
        .and(body_string_contains("Lage=WS"))
        .respond_with(ResponseTemplate::new(200).set_body_string(winter_catalog()))
        .mount(mock_server)
        .await;
}

fn transport(mock_server: &MockServer) -> HttpTransport {
    let config = create_test_config(&format!("{}/sp.php", mock_server.uri()));
    HttpTransport::new(&config.http).expect("Failed to build transport")
}

#[tokio::test]
async fn test_list_both_cycles() {
    let mock_server = MockServer::start().await;
    mount_catalogs(&mock_server).await;

    let programs = fetch_catalogs(&transport(&mock_server), CycleSelection::Both)
        .await
        .expect("Listing failed");

    assert_eq!(programs.len(), 4);
    let summer: Vec<_> = programs
        .iter()
        .filter(|p| p.semester.cycle == SemesterCycle::Summer)
        .collect();
    assert_eq!(summer.len(), 3);
    assert!(summer.iter().all(|p| p.semester.year == 2024));
    assert_eq!(summer[2].degree, Degree::Master);

    let winter = programs
        .iter()
        .find(|p| p.semester.cycle == SemesterCycle::Winter)
        .expect("No winter program");
    assert_eq!(winter.id, ProgramId::new("BI3"));
    assert_eq!(winter.semester.year, 2023);
    assert_eq!(winter.semester.term, 3);

    assert_eq!(mock_server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_single_cycle_sends_one_request() {
    let mock_server = MockServer::start().await;
    mount_catalogs(&mock_server).await;

    let programs = fetch_catalogs(&transport(&mock_server), CycleSelection::Winter)
        .await
        .expect("Listing failed");

    assert_eq!(programs.len(), 1);
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body = String::from_utf8(requests[0].body.clone()).unwrap();
    assert!(body.contains("Lage=WS"));
    assert!(body.contains("fkt=SR"));
    assert!(body.contains("clear=false"));
}

#[tokio::test]
async fn test_list_fails_when_summer_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_string_contains("Lage=SS"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(body_string_contains("Lage=WS"))
        .respond_with(ResponseTemplate::new(200).set_body_string(winter_catalog()))
        .mount(&mock_server)
        .await;

    let result = fetch_catalogs(&transport(&mock_server), CycleSelection::Both).await;

    match result {
        Err(FbndError::Transport(TransportError::Status { status, .. })) => assert_eq!(status, 503),
        other => panic!("Expected status error, got {:?}", other),
    }
    // Both requests ran; the winter result was discarded
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_timetable_schedule() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_string_contains("mode=SR"))
        .and(body_string_contains("SR=BI2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(timetable_page()))
        .mount(&mock_server)
        .await;

    let timetable = fetch_timetable(&transport(&mock_server), &ProgramId::new("bi2"))
        .await
        .expect("Timetable fetch failed");

    let schedule = timetable.schedule();
    let weekdays: Vec<Weekday> = schedule.days().iter().map(|d| d.weekday).collect();
    assert_eq!(weekdays, vec![Weekday::Mon, Weekday::Tue, Weekday::Wed]);
    assert_eq!(schedule.len(), 5);

    let monday = schedule.day(Weekday::Mon).unwrap();
    let names: Vec<&str> = monday.courses.iter().map(|c| c.name_short.as_str()).collect();
    assert_eq!(names, vec!["ANA2", "ENG", "PRG2"]);

    let analysis = &monday.courses[0];
    assert_eq!(analysis.name_long, "Analysis II");
    assert_eq!(analysis.professor_long, "Prof. Dr. Mustermann");
    assert_eq!((analysis.start, analysis.end), (hours(8), hours(10)));

    let english = &monday.courses[1];
    assert_eq!(english.lesson, Lesson::LanguageLecture);
    assert_eq!((english.start, english.end), (hours(9), hours(10)));

    // Shifted right by the span of ANA2
    let programming = &monday.courses[2];
    assert_eq!(programming.lesson, Lesson::Internship);
    assert_eq!((programming.start, programming.end), (hours(11), hours(13)));

    let tuesday = schedule.day(Weekday::Tue).unwrap();
    assert_eq!(tuesday.courses[0].lesson, Lesson::SeminarLecture);
    assert_eq!(
        (tuesday.courses[0].start, tuesday.courses[0].end),
        (hours(8), hours(11))
    );

    let wednesday = schedule.day(Weekday::Wed).unwrap();
    assert_eq!(wednesday.courses[0].lesson, Lesson::Tutorial);
}

#[tokio::test]
async fn test_timetable_resolves_via_other_cycle() {
    let mock_server = MockServer::start().await;
    mount_catalogs(&mock_server).await;

    Mock::given(method("POST"))
        .and(body_string_contains("mode=SR"))
        .respond_with(ResponseTemplate::new(200).set_body_string(timetable_page()))
        .mount(&mock_server)
        .await;

    let transport = transport(&mock_server);
    let mut timetable = fetch_timetable(&transport, &ProgramId::new("bi2"))
        .await
        .expect("Timetable fetch failed");

    assert_eq!(timetable.fetched_cycle(), SemesterCycle::Winter);
    assert!(!timetable.is_resolved());

    let program = timetable.resolve(&transport).await.expect("Resolution failed").clone();
    assert_eq!(program.id, ProgramId::new("BI2"));
    assert_eq!(program.semester.cycle, SemesterCycle::Summer);
    assert_eq!(program.semester.term, 2);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert!(String::from_utf8_lossy(&requests[1].body).contains("Lage=SS"));

    // Resolving again uses the attached program
    let again = timetable.resolve(&transport).await.expect("Resolution failed").clone();
    assert_eq!(again, program);
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 2);

    let json = serde_json::to_value(&timetable).unwrap();
    assert_eq!(json["degree_program"]["semester"]["cycle"], "Summer");
    assert_eq!(json["days"][0]["weekday"], "Mon");
    assert_eq!(json["days"][0]["courses"][0]["start"], "08:00");
}

#[tokio::test]
async fn test_unknown_program_is_fatal() {
    let mock_server = MockServer::start().await;
    mount_catalogs(&mock_server).await;

    Mock::given(method("POST"))
        .and(body_string_contains("mode=SR"))
        .respond_with(ResponseTemplate::new(200).set_body_string(timetable_page()))
        .mount(&mock_server)
        .await;

    let transport = transport(&mock_server);
    let mut timetable = fetch_timetable(&transport, &ProgramId::new("xx1"))
        .await
        .expect("Timetable fetch failed");

    let error = timetable.resolve(&transport).await.unwrap_err();
    assert!(error.is_fatal());
    assert!(!timetable.is_resolved());
}

#[tokio::test]
async fn test_malformed_timetable_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<table><thead><tr><th>Tag</th><th>acht bis zehn</th></tr></thead></table>"#,
        ))
        .mount(&mock_server)
        .await;

    let result = fetch_timetable(&transport(&mock_server), &ProgramId::new("bi2")).await;
    assert!(matches!(result, Err(FbndError::Parse(_))));
}
