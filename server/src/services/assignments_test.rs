use super::*;

fn assignment(name: &str, description: Option<&str>) -> NewAssignment {
    NewAssignment { name: name.to_owned(), description: description.map(str::to_owned), class_id: Uuid::nil() }
}

#[test]
fn normalize_trims_name() {
    let normalized = normalize_assignment(&assignment("  Essay 1 ", None)).unwrap();
    assert_eq!(normalized.name, "Essay 1");
}

#[test]
fn normalize_rejects_blank_name() {
    assert!(matches!(normalize_assignment(&assignment(" \t ", None)), Err(AssignmentError::EmptyName)));
}

#[test]
fn blank_description_becomes_none() {
    let normalized = normalize_assignment(&assignment("Essay", Some("   "))).unwrap();
    assert_eq!(normalized.description, None);
    let kept = normalize_assignment(&assignment("Essay", Some(" 500 words "))).unwrap();
    assert_eq!(kept.description.as_deref(), Some("500 words"));
}

#[test]
fn only_staff_may_author() {
    assert!(gate::permits(Role::Teacher, &AUTHOR_ROLES));
    assert!(gate::permits(Role::Admin, &AUTHOR_ROLES));
    assert!(!gate::permits(Role::Student, &AUTHOR_ROLES));
}

#[test]
fn new_assignment_description_is_optional() {
    let parsed: NewAssignment =
        serde_json::from_str(r#"{"name":"Quiz","class_id":"00000000-0000-0000-0000-000000000000"}"#).unwrap();
    assert!(parsed.description.is_none());
}

#[cfg(feature = "live-db-tests")]
mod live {
    use super::*;
    use crate::services::classes::{self, ClassInput};
    use crate::services::users::{self, NewUser};
    use crate::state::test_helpers::integration_pool;

    async fn session_user(pool: &PgPool, username: &str, role: Role) -> SessionUser {
        let user = users::create_user(
            pool,
            &NewUser { username: username.into(), password: "secret1".into(), role },
        )
        .await
        .unwrap();
        SessionUser { id: user.id, username: user.username, role: user.role }
    }

    #[tokio::test]
    #[ignore = "requires TEST_DATABASE_URL/live Postgres"]
    async fn teacher_creates_assignment_student_cannot() {
        let pool = integration_pool().await;
        let teacher = session_user(&pool, "t1@classtrack.edu", Role::Teacher).await;
        let student = session_user(&pool, "s1@classtrack.edu", Role::Student).await;
        let class = classes::create_class(
            &pool,
            &ClassInput { name: "History".into(), code: "his1".into(), teacher_id: Some(teacher.id) },
        )
        .await
        .unwrap();

        let input = NewAssignment { name: "Timeline".into(), description: None, class_id: class.id };
        let created = create_assignment(&pool, &teacher, &input).await.unwrap();
        assert_eq!(created.creator_id, teacher.id);

        assert!(matches!(create_assignment(&pool, &student, &input).await, Err(AssignmentError::Forbidden)));

        let missing = NewAssignment { class_id: Uuid::new_v4(), ..input };
        assert!(matches!(
            create_assignment(&pool, &teacher, &missing).await,
            Err(AssignmentError::ClassNotFound(_))
        ));
    }
}
