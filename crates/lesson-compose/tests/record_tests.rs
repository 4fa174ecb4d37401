use futures::StreamExt;
use lesson_compose::*;
use std::path::Path;

const API_RESPONSE: &str = r#"{
  "group_name": "Ф 11",
  "response": {
    "state": 1,
    "error": null,
    "result": {
      "days": {
        "20241007": {
          "name": "Monday",
          "title": "Понедельник",
          "alert": null,
          "items": [
            {
              "name": "Физика",
              "num": "1",
              "room": "101",
              "teacher": "Петров Иван Сидорович",
              "sort": 10,
              "teacher_id": 42,
              "grp_short": "",
              "grp": ""
            },
            {
              "name": "Английский язык",
              "num": "2",
              "room": null,
              "teacher": "Смит Анна",
              "grp_short": "2 гр"
            },
            {
              "name": "Английский язык",
              "num": "2",
              "room": "204",
              "teacher": "Джонс Мария",
              "grp_short": "1 гр"
            }
          ]
        }
      }
    }
  }
}"#;

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_parse_api_response() {
    let record = ScheduleResponse::from_json(API_RESPONSE.as_bytes()).unwrap();
    assert_eq!(record.group_name, "Ф 11");

    let day = &record.days["20241007"];
    assert_eq!(day.title, "Понедельник");
    assert_eq!(day.items.len(), 3);
    assert_eq!(day.items[0].subject, "Физика");
    assert_eq!(day.items[0].number, "1");
    assert_eq!(day.items[0].subgroup_id(), 0);
    assert_eq!(day.items[1].room, "");
    assert_eq!(day.items[1].subgroup_id(), 2);
}

#[test]
fn test_slot_groups_ordered_by_subgroup() {
    let record = ScheduleResponse::from_json(API_RESPONSE.as_bytes()).unwrap();
    let slots = SlotGroup::group_day(&record.days["20241007"]);

    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].number, "1");
    assert_eq!(slots[0].len(), 1);
    assert_eq!(slots[1].number, "2");
    let teachers: Vec<_> = slots[1].entries.iter().map(|e| e.teacher.as_str()).collect();
    assert_eq!(teachers, vec!["Джонс Мария", "Смит Анна"]);
}

#[test]
fn test_api_error_is_a_record_error() {
    let json = r#"{ "group_name": "ФБ 21", "response": { "state": 0, "error": "token expired" } }"#;
    match ScheduleResponse::from_json(json.as_bytes()) {
        Err(ComposeError::Record(msg)) => {
            assert!(msg.contains("ФБ 21"));
            assert!(msg.contains("token expired"));
        }
        other => panic!("Expected Record error, got {:?}", other),
    }

    let json = r#"{ "group_name": "ФБ 21", "response": { "state": 1 } }"#;
    assert!(matches!(
        ScheduleResponse::from_json(json.as_bytes()),
        Err(ComposeError::Record(_))
    ));
}

#[tokio::test]
async fn test_load_record_formats() {
    let dir = tempfile::tempdir().unwrap();

    let envelope = write(dir.path(), "envelope.json", API_RESPONSE);
    let record = load_record(&envelope).await.unwrap();
    assert_eq!(record.group_name, "Ф 11");

    let bare = write(
        dir.path(),
        "bare.json",
        r#"{ "group_name": "ФК 21", "days": { "20241008": { "title": "Вторник", "items": [] } } }"#,
    );
    let record = load_record(&bare).await.unwrap();
    assert_eq!(record.group_name, "ФК 21");
    assert_eq!(record.days["20241008"].title, "Вторник");

    let broken = write(dir.path(), "broken.json", "{ truncated");
    assert!(matches!(
        load_record(&broken).await,
        Err(ComposeError::Record(_))
    ));

    assert!(matches!(
        load_record(dir.path().join("absent.json")).await,
        Err(ComposeError::Record(_))
    ));
}

#[tokio::test]
async fn test_record_stream_keeps_order_and_errors() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.json", r#"{ "group_name": "A" }"#);
    let b = dir.path().join("missing.json");
    let c = write(dir.path(), "c.json", r#"{ "group_name": "C" }"#);

    let results: Vec<_> = record_stream(vec![a, b, c]).collect().await;

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().group_name, "A");
    let err = results[1].as_ref().unwrap_err();
    assert!(matches!(err, ComposeError::RecordLoad { .. }));
    assert_eq!(err.group(), Some("missing"));
    assert_eq!(results[2].as_ref().unwrap().group_name, "C");
}
