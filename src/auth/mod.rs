mod credentials;
mod session;

pub use credentials::{
    AuthErrors, AuthField, LoginForm, MIN_PASSWORD_LEN, SignupForm, TEST_EMAIL, TEST_PASSWORD,
};
pub use session::{FileStorage, MemoryStorage, SESSION_KEY, Session, SessionStorage};

use crate::error::Result;
use crate::routes::Route;

/// Result of submitting the login form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success { redirect: Route },
    Rejected(AuthErrors),
}

/// Validate the form and start a session if it matches the test credential
pub fn login<S: SessionStorage>(session: &mut Session<S>, form: &LoginForm) -> Result<LoginOutcome> {
    let errors = form.validate();
    if !errors.is_empty() {
        return Ok(LoginOutcome::Rejected(errors));
    }
    session.start()?;
    tracing::info!("Logged in as {}", form.email);
    Ok(LoginOutcome::Success {
        redirect: Route::Dashboard,
    })
}

/// Result of submitting the signup form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    /// No account is created; the user is sent to login with the test credential
    Accepted { redirect: Route },
    Rejected(AuthErrors),
}

pub fn signup(form: &SignupForm) -> SignupOutcome {
    let errors = form.validate();
    if errors.is_empty() {
        SignupOutcome::Accepted {
            redirect: Route::Login,
        }
    } else {
        SignupOutcome::Rejected(errors)
    }
}

/// End the session and land on the login screen
pub fn logout<S: SessionStorage>(session: &mut Session<S>) -> Result<Route> {
    session.end()?;
    Ok(Route::Login)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_sets_session_flag() {
        let mut session = Session::load(MemoryStorage::new()).unwrap();
        let outcome = login(&mut session, &LoginForm::new(TEST_EMAIL, TEST_PASSWORD)).unwrap();
        assert_eq!(
            outcome,
            LoginOutcome::Success {
                redirect: Route::Dashboard
            }
        );
        assert!(session.storage().get_item(SESSION_KEY).unwrap().is_some());
    }

    #[test]
    fn test_rejected_login_sets_nothing() {
        let mut session = Session::load(MemoryStorage::new()).unwrap();
        let outcome = login(&mut session, &LoginForm::new(TEST_EMAIL, "password124")).unwrap();
        match outcome {
            LoginOutcome::Rejected(errors) => {
                assert_eq!(
                    errors.get(&AuthField::Email),
                    Some(&"Invalid email or password.")
                );
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(!session.is_authenticated());
        assert_eq!(session.storage().get_item(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn test_signup_redirects_to_login() {
        let form = SignupForm::new("Ada", "ada@example.com", "password123", "password123");
        assert_eq!(
            signup(&form),
            SignupOutcome::Accepted {
                redirect: Route::Login
            }
        );
    }

    #[test]
    fn test_logout_lands_on_login() {
        let mut session = Session::load(MemoryStorage::new()).unwrap();
        session.start().unwrap();
        assert_eq!(logout(&mut session).unwrap(), Route::Login);
        assert!(!session.is_authenticated());
    }
}
