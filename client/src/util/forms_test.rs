use super::*;

fn registration_form() -> Registration {
    Registration {
        username: " ada ".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "s3cret".to_owned(),
        confirm_password: "s3cret".to_owned(),
        first_name: "Ada ".to_owned(),
        last_name: String::new(),
    }
}

#[test]
fn credentials_trim_username_but_not_password() {
    let creds = credentials("  ada ", " pw ").unwrap();
    assert_eq!(creds, Credentials { username: "ada".to_owned(), password: " pw ".to_owned() });
}

#[test]
fn credentials_require_both_fields() {
    assert_eq!(credentials("  ", "pw"), Err(FormError::Required("Username")));
    assert_eq!(credentials("ada", ""), Err(FormError::Required("Password")));
}

#[test]
fn registration_accepts_matching_passwords() {
    let checked = registration(&registration_form()).unwrap();
    assert_eq!(checked.username, "ada");
    assert_eq!(checked.first_name, "Ada");
}

#[test]
fn registration_rejects_mismatched_passwords() {
    let form = Registration { confirm_password: "other".to_owned(), ..registration_form() };
    let err = registration(&form).unwrap_err();
    assert_eq!(err, FormError::PasswordMismatch);
    assert_eq!(err.to_string(), "Passwords do not match");
}

#[test]
fn registration_requires_email() {
    let form = Registration { email: " ".to_owned(), ..registration_form() };
    assert_eq!(registration(&form).unwrap_err().to_string(), "Email is required");
}

#[test]
fn new_task_requires_every_field() {
    assert_eq!(new_task("", "d", "2024-02-01", 1), Err(FormError::Required("Title")));
    assert_eq!(new_task("t", " ", "2024-02-01", 1), Err(FormError::Required("Description")));
    assert_eq!(new_task("t", "d", "", 1), Err(FormError::Required("Due date")));
}

#[test]
fn new_task_carries_assignee() {
    let task = new_task(" Ship ", "release notes", "2024-02-01", 42).unwrap();
    assert_eq!(task.title, "Ship");
    assert_eq!(task.assignee_id, 42);
}

#[test]
fn create_failure_message_falls_back_without_detail() {
    assert_eq!(create_failure_message(&ApiError::Unavailable), "Failed to create task");
    assert_eq!(
        create_failure_message(&ApiError::Status(400)),
        "Failed to create task: request failed with status 400"
    );
}
