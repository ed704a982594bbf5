use super::*;

#[test]
fn input_problems_are_bad_requests() {
    for err in [
        ClassError::EmptyName,
        ClassError::ShortCode,
        ClassError::DuplicateName,
        ClassError::DuplicateCode,
        ClassError::NotATeacher(Uuid::nil()),
    ] {
        assert_eq!(class_error_to_response(&err).0, StatusCode::BAD_REQUEST, "{err}");
    }
}

#[test]
fn missing_rows_are_not_found() {
    assert_eq!(class_error_to_response(&ClassError::NotFound(Uuid::nil())).0, StatusCode::NOT_FOUND);
    let (status, Json(body)) = class_error_to_response(&ClassError::TeacherNotFound(Uuid::nil()));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.detail.starts_with("Teacher with ID"));
}

#[test]
fn database_errors_are_internal() {
    assert_eq!(
        class_error_to_response(&ClassError::Db(sqlx::Error::PoolClosed)).0,
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
