use assert_matches::assert_matches;
use bestchoice_api::data::keyword::{KeywordCreateRequest, KeywordResponse, KeywordUpdateRequest};
use bestchoice_api::data::preference::rules::{check_new_preference, PreferenceConflict};
use bestchoice_api::data::preference::{PreferenceCreateRequest, PreferenceResponse};
use bestchoice_api::data::skill::{SkillCreateRequest, SkillResponse};
use bestchoice_api::data::student::{StudentCreateRequest, StudentResponse, StudentUpdateRequest};
use bestchoice_api::data::teacher::{TeacherCreateRequest, TeacherResponse};
use bestchoice_api::data::user::{UserResponse, UserUpdateRequest};
use bestchoice_api::request::{decode_json, RequestError};
use bestchoice_api::resp::Problem;
use bestchoice_api::role::{PreferenceStatus, Role, WorkType};
use bestchoice_api::validation::{Validate, Violation};
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

fn violations_of(err: RequestError) -> Vec<Violation> {
    match err {
        RequestError::Invalid(v) => v.into_inner(),
        other => panic!("expected validation failure, got {}", other),
    }
}

#[test]
fn blank_or_absent_label_is_required() {
    for body in [r#"{}"#, r#"{"label": null}"#, r#"{"label": ""}"#, r#"{"label": "  "}"#] {
        let err = decode_json::<KeywordCreateRequest>(body).unwrap_err();
        assert_eq!(violations_of(err), vec![Violation::required("label")], "{}", body);
    }
}

#[test]
fn long_label_is_rejected_on_create_and_update() {
    let label = "é".repeat(101);
    let expected = Violation::LengthExceeded {
        field: "label".to_string(),
        max: 100,
    };

    let body = json!({ "label": label }).to_string();
    let err = decode_json::<KeywordCreateRequest>(&body).unwrap_err();
    assert_eq!(violations_of(err), vec![expected.clone()]);

    let err = decode_json::<KeywordUpdateRequest>(&body).unwrap_err();
    assert_eq!(violations_of(err), vec![expected]);

    let exact = json!({ "label": "é".repeat(100) }).to_string();
    assert!(decode_json::<KeywordCreateRequest>(&exact).is_ok());
}

#[test]
fn emoji_count_twice_toward_label_length() {
    let body = json!({ "label": "🦀".repeat(60) }).to_string();
    let err = decode_json::<KeywordCreateRequest>(&body).unwrap_err();
    assert_eq!(
        violations_of(err),
        vec![Violation::LengthExceeded {
            field: "label".to_string(),
            max: 100
        }]
    );

    let body = json!({ "label": "🦀".repeat(50) }).to_string();
    assert!(decode_json::<KeywordCreateRequest>(&body).is_ok());
}

#[test]
fn skill_level_bounds() {
    for (level, ok) in [(0, false), (1, true), (3, true), (5, true), (6, false)] {
        let body = json!({ "name": "Rust", "level": level }).to_string();
        let result = decode_json::<SkillCreateRequest>(&body);
        if ok {
            assert!(result.is_ok(), "level {}", level);
        } else {
            let violations = violations_of(result.unwrap_err());
            assert_matches!(
                violations.as_slice(),
                [Violation::RangeViolation { field, min: 1, max: 5 }] if field == "level"
            );
        }
    }
}

#[test]
fn preference_rank_bounds() {
    for (rank, ok) in [(0, false), (1, true), (10, true), (11, false)] {
        let request = PreferenceCreateRequest::new(1, 2, rank);
        assert_eq!(request.validate().is_ok(), ok, "rank {}", rank);
    }
}

#[test]
fn preference_ids_are_required() {
    let err = decode_json::<PreferenceCreateRequest>(
        r#"{"studentId": null, "projectId": null, "rank": 1}"#,
    )
    .unwrap_err();

    assert_eq!(
        violations_of(err),
        vec![
            Violation::required("studentId"),
            Violation::required("projectId")
        ]
    );
}

#[test]
fn keyword_response_round_trip() {
    let keyword = KeywordResponse {
        id: 42,
        label: "Machine learning".to_string(),
        description: None,
        domain: Some("IA".to_string()),
        active: false,
    };

    let wire = serde_json::to_string(&keyword).unwrap();
    let value: Value = serde_json::from_str(&wire).unwrap();
    assert_eq!(value["description"], Value::Null);

    let back: KeywordResponse = serde_json::from_str(&wire).unwrap();
    assert_eq!(back, keyword);
}

#[test]
fn work_type_round_trip() {
    for work_type in WorkType::ALL {
        let wire = serde_json::to_value(work_type).unwrap();
        assert_eq!(wire, Value::from(work_type.as_str()));

        let back: WorkType = serde_json::from_value(wire).unwrap();
        assert_eq!(back, *work_type);
        assert_eq!(work_type.as_str().parse::<WorkType>(), Ok(*work_type));
    }
    assert_eq!(WorkType::Veille.description(), "Veille technologique");
    assert_eq!(WorkType::Mixte.description(), "Travail mixte");
}

#[test]
fn java_skill_becomes_active_response() {
    let request: SkillCreateRequest = decode_json(
        r#"{"name": "Java", "description": null, "category": "Programmation", "level": 3}"#,
    )
    .unwrap();

    let skill = SkillResponse::created(7, request).unwrap();
    assert_eq!(skill.id, 7);
    assert_eq!(skill.name, "Java");
    assert_eq!(skill.category.as_deref(), Some("Programmation"));
    assert_eq!(skill.level, Some(3));
    assert!(skill.active);
}

#[test]
fn keyword_update_keeps_omitted_fields() {
    let mut keyword = KeywordResponse::created(1, KeywordCreateRequest::new("Web")).unwrap();
    keyword.domain = Some("Informatique".to_string());

    let update: KeywordUpdateRequest =
        decode_json(r#"{"label": "Web", "description": "Sites et API"}"#).unwrap();
    keyword.apply_update(update).unwrap();

    assert_eq!(keyword.label, "Web");
    assert_eq!(keyword.domain.as_deref(), Some("Informatique"));
    assert_eq!(keyword.description.as_deref(), Some("Sites et API"));
    assert!(keyword.active);
}

#[test]
fn new_preferences_are_pending() {
    let at = Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap();
    let preference =
        PreferenceResponse::created(3, PreferenceCreateRequest::new(1, 2, 1), at).unwrap();

    let wire = serde_json::to_value(&preference).unwrap();
    assert_eq!(wire["status"], "PENDING");
    assert_eq!(wire["createdAt"], "2025-01-15T09:30:00Z");
    assert_eq!(preference.status, PreferenceStatus::Pending);
}

#[test]
fn unknown_status_name_is_reported_as_enum_violation() {
    assert!(serde_json::from_str::<PreferenceStatus>(r#""DONE""#).is_err());

    let body = r#"{"title": "T", "description": "D", "workType": "STAGE", "minStudents": 1}"#;
    let err = decode_json::<bestchoice_api::data::project::ProjectCreateRequest>(body).unwrap_err();
    let problem = Problem::from(err).to_json();

    assert_eq!(problem["status"], 400);
    assert_eq!(problem["violations"][0]["field"], "workType");
    assert_eq!(problem["violations"][0]["rule"], "enum");
}

#[test]
fn conflicts_become_bad_requests() {
    let existing = vec![PreferenceResponse::created(
        1,
        PreferenceCreateRequest::new(1, 2, 1),
        Utc::now(),
    )
    .unwrap()];

    let conflict =
        check_new_preference(&existing, &PreferenceCreateRequest::new(1, 3, 1), 10).unwrap_err();
    assert_eq!(conflict, PreferenceConflict::DuplicateRank { rank: 1 });

    let problem = Problem::from(conflict).to_json();
    assert_eq!(problem["status"], 400);
    assert_eq!(problem["code"], "DUPLICATE_RANK");
}

#[test]
fn skill_level_problem_is_in_french() {
    let err = decode_json::<SkillCreateRequest>(r#"{"name": "Rust", "level": 0}"#).unwrap_err();
    let problem = Problem::from(err).to_json();

    assert_eq!(problem["violations"][0]["rule"], "range");
    assert_eq!(
        problem["violations"][0]["message"],
        "Le niveau doit être au minimum 1"
    );
}

fn account(id: i64, roles: &[Role]) -> UserResponse {
    serde_json::from_value(json!({
        "id": id,
        "studentNumber": null,
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@univ-amu.fr",
        "active": true,
        "roles": roles,
        "createdAt": "2024-09-02T08:00:00Z"
    }))
    .unwrap()
}

#[test]
fn user_update_reports_every_identity_rule() {
    let err = decode_json::<UserUpdateRequest>(
        r#"{"firstName": "A", "lastName": null, "email": "ada", "studentNumber": "123456789012345678901"}"#,
    )
    .unwrap_err();

    let rules: Vec<_> = violations_of(err)
        .iter()
        .map(|v| (v.field().to_string(), v.rule()))
        .collect();
    assert_eq!(
        rules,
        vec![
            ("firstName".to_string(), "length"),
            ("lastName".to_string(), "required"),
            ("email".to_string(), "format"),
            ("studentNumber".to_string(), "max-length"),
        ]
    );
}

#[test]
fn user_response_wire_shape() {
    let user = account(8, &[Role::Admin, Role::Etudiant]);
    let wire = serde_json::to_value(&user).unwrap();

    assert_eq!(wire["roles"], json!(["ETUDIANT", "ADMIN"]));
    assert_eq!(wire["createdAt"], "2024-09-02T08:00:00Z");
    assert_eq!(wire["studentNumber"], Value::Null);
    assert_eq!(wire["active"], true);
}

#[test]
fn student_profile_from_json() {
    let request: StudentCreateRequest = decode_json(
        r#"{"studyYear": 2, "preferredWorkType": "RECHERCHE", "skill": ["Python"], "interestKeyword": []}"#,
    )
    .unwrap();
    let student = StudentResponse::profile(&account(4, &[Role::Etudiant]), request).unwrap();

    let wire = serde_json::to_value(&student).unwrap();
    assert_eq!(wire["userId"], 4);
    assert_eq!(wire["preferredWorkType"], "RECHERCHE");
    assert_eq!(wire["skill"], json!(["Python"]));
    assert_eq!(wire["interestKeyword"], json!([]));
}

#[test]
fn student_year_and_work_type_are_checked() {
    let err = decode_json::<StudentUpdateRequest>(r#"{"studyYear": 9, "preferredWorkType": "STAGE"}"#)
        .unwrap_err();
    assert_matches!(
        violations_of(err).as_slice(),
        [
            Violation::RangeViolation { min: 1, max: 8, .. },
            Violation::InvalidEnumValue { value, .. },
        ] if value == "STAGE"
    );
}

#[test]
fn teacher_profile_lists_projects() {
    let teacher = TeacherResponse::profile(
        &account(9, &[Role::Enseignant]),
        decode_json::<TeacherCreateRequest>(r#"{"department": "Informatique"}"#).unwrap(),
    )
    .unwrap();

    let wire = serde_json::to_value(&teacher).unwrap();
    assert_eq!(wire["project"], json!([]));
    assert_eq!(wire["department"], "Informatique");

    let long = json!({ "websiteUrl": "w".repeat(256) }).to_string();
    let err = decode_json::<TeacherCreateRequest>(&long).unwrap_err();
    assert_eq!(
        Problem::from(err).to_json()["violations"][0]["message"],
        "L'URL du site web ne doit pas dépasser 255 caractères"
    );
}
