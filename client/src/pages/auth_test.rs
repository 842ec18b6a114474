use super::*;

fn filled_form() -> RegisterInput {
    RegisterInput {
        name: " Asha Mondal ".to_owned(),
        email: " asha@example.org ".to_owned(),
        password: "tide-pool".to_owned(),
        confirm_password: "tide-pool".to_owned(),
        role: "panchayat".to_owned(),
        organization: String::new(),
    }
}

// =============================================================
// AuthMode
// =============================================================

#[test]
fn auth_mode_defaults_to_login() {
    assert_eq!(AuthMode::default(), AuthMode::Login);
}

#[test]
fn auth_mode_toggles_both_ways() {
    assert_eq!(AuthMode::Login.toggled(), AuthMode::Register);
    assert_eq!(AuthMode::Register.toggled(), AuthMode::Login);
}

// =============================================================
// Login input
// =============================================================

#[test]
fn validate_login_input_trims_email_only() {
    assert_eq!(
        validate_login_input("  admin@nccr.gov.in ", " pw "),
        Ok(("admin@nccr.gov.in".to_owned(), " pw ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err(CREDENTIALS_REQUIRED));
    assert_eq!(validate_login_input("a@b.org", ""), Err(CREDENTIALS_REQUIRED));
}

#[test]
fn login_failure_message_mentions_credentials() {
    assert!(LOGIN_FAILED.contains("credentials"));
}

// =============================================================
// Register input
// =============================================================

#[test]
fn validate_register_input_accepts_complete_form() {
    let registration = validate_register_input(&filled_form()).unwrap();
    assert_eq!(registration.name, "Asha Mondal");
    assert_eq!(registration.email, "asha@example.org");
    assert_eq!(registration.password, "tide-pool");
    assert_eq!(registration.role, Role::Panchayat);
    assert_eq!(registration.organization, None);
}

#[test]
fn validate_register_input_keeps_trimmed_organization() {
    let form = RegisterInput { organization: "  Sundarban Trust ".to_owned(), ..filled_form() };
    let registration = validate_register_input(&form).unwrap();
    assert_eq!(registration.organization.as_deref(), Some("Sundarban Trust"));
}

#[test]
fn validate_register_input_requires_name_email_password() {
    for form in [
        RegisterInput { name: "  ".to_owned(), ..filled_form() },
        RegisterInput { email: String::new(), ..filled_form() },
        RegisterInput { password: String::new(), confirm_password: String::new(), ..filled_form() },
    ] {
        assert_eq!(validate_register_input(&form), Err(FIELDS_REQUIRED));
    }
}

#[test]
fn validate_register_input_rejects_password_mismatch() {
    let form = RegisterInput { confirm_password: "tide-poo1".to_owned(), ..filled_form() };
    assert_eq!(validate_register_input(&form), Err(PASSWORD_MISMATCH));
}

#[test]
fn validate_register_input_checks_mismatch_before_role() {
    let form = RegisterInput { confirm_password: "x".to_owned(), role: String::new(), ..filled_form() };
    assert_eq!(validate_register_input(&form), Err(PASSWORD_MISMATCH));
}

#[test]
fn validate_register_input_requires_role() {
    let form = RegisterInput { role: String::new(), ..filled_form() };
    assert_eq!(validate_register_input(&form), Err(ROLE_REQUIRED));
}

#[test]
fn validate_register_input_rejects_unknown_role() {
    let form = RegisterInput { role: "superuser".to_owned(), ..filled_form() };
    assert_eq!(validate_register_input(&form), Err(ROLE_REQUIRED));
}

#[test]
fn every_role_is_selectable() {
    for role in Role::ALL {
        let form = RegisterInput { role: role.as_str().to_owned(), ..filled_form() };
        assert_eq!(validate_register_input(&form).unwrap().role, role);
    }
}
