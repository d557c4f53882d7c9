mod common;

use common::ResolvTest;

// ============================================================================
// Login
// ============================================================================

#[test]
fn test_login_screen_without_flags() {
    let resolv = ResolvTest::new();

    let output = resolv.run_success(&["login"]);
    assert!(output.contains("Welcome Back"));
    assert!(output.contains("resolv login --email"));
    assert!(resolv.read_session().is_none());
}

#[test]
fn test_login_with_test_credential_sets_session() {
    let resolv = ResolvTest::new();

    let output = resolv.run_success(&[
        "login",
        "--email",
        "test@user.com",
        "--password",
        "password123",
    ]);
    assert!(output.contains("Login successful!"));
    assert!(output.contains("2,350"));

    let session = resolv.read_session().expect("session file should exist");
    assert!(session.contains("ticketapp_session"));
    assert!(session.contains("valid_token_"));
}

#[test]
fn test_login_json_reports_redirect() {
    let resolv = ResolvTest::new();

    let json = resolv.run_json(&[
        "login",
        "--email",
        "test@user.com",
        "--password",
        "password123",
        "--json",
    ]);
    assert_eq!(json["authenticated"], true);
    assert_eq!(json["redirect"], "/dashboard");
}

#[test]
fn test_login_with_wrong_credential_sets_nothing() {
    let resolv = ResolvTest::new();

    let (stdout, stderr) = resolv.run_failure(&[
        "login",
        "--email",
        "someone@example.com",
        "--password",
        "password123",
    ]);
    assert!(stdout.contains("Invalid email or password."));
    assert!(stderr.contains("Invalid email or password."));
    assert!(resolv.read_session().is_none());
}

#[test]
fn test_login_format_errors() {
    let resolv = ResolvTest::new();

    let (stdout, _) = resolv.run_failure(&["login", "--email", "nope", "--password", "short"]);
    assert!(stdout.contains("Please enter a valid email address."));
    assert!(stdout.contains("Password must be at least 8 characters."));
}

#[test]
fn test_password_is_never_echoed() {
    let resolv = ResolvTest::new();

    let (stdout, stderr) = resolv.run_failure(&[
        "login",
        "--email",
        "test@user.com",
        "--password",
        "hunter2hunter2",
    ]);
    assert!(!stdout.contains("hunter2hunter2"));
    assert!(!stderr.contains("hunter2hunter2"));
}

// ============================================================================
// Logout
// ============================================================================

#[test]
fn test_logout_clears_session() {
    let resolv = ResolvTest::new();
    resolv.login();

    let output = resolv.run_success(&["logout"]);
    assert!(output.contains("Logged out."));
    assert!(output.contains("Welcome Back"));

    let session = resolv.read_session().unwrap_or_default();
    assert!(!session.contains("ticketapp_session"));

    resolv.run_failure(&["dashboard"]);
}

#[test]
fn test_logout_without_session_succeeds() {
    let resolv = ResolvTest::new();

    let json = resolv.run_json(&["logout", "--json"]);
    assert_eq!(json["redirect"], "/auth/login");
}

// ============================================================================
// Signup
// ============================================================================

#[test]
fn test_signup_shows_test_credentials() {
    let resolv = ResolvTest::new();

    let output = resolv.run_success(&[
        "signup",
        "--name",
        "Ada Lovelace",
        "--email",
        "ada@example.com",
        "--password",
        "password123",
        "--confirm-password",
        "password123",
    ]);
    assert!(output.contains("Signup Successful!"));
    assert!(output.contains("test@user.com"));
    // No account or session is created
    assert!(resolv.read_session().is_none());
}

#[test]
fn test_signup_reports_every_field() {
    let resolv = ResolvTest::new();

    let (stdout, _) = resolv.run_failure(&[
        "signup",
        "--email",
        "bad",
        "--password",
        "short",
        "--confirm-password",
        "other",
    ]);
    assert!(stdout.contains("Full Name is required"));
    assert!(stdout.contains("Please enter a valid email address"));
    assert!(stdout.contains("Password must be at least 8 characters long."));
    assert!(stdout.contains("Passwords do not match."));
}
