//! Registration input: raw sign-up submission -> [`RegistrationRequest`].
//!
//! Validation runs two independent rule sets in sequence:
//!
//! - **account rules**: username, email, password + confirmation;
//! - **profile rules**: role, phone number, address, pincode, state.
//!
//! Both write into the same [`FieldErrors`] accumulator, so a single pass
//! reports every invalid field. Username uniqueness is not checked here; the
//! user store reports it when the account is created.

use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

use supplydesk_core::{FieldError, FieldErrors, FieldSpec, FormData, Widget};

use crate::password::Password;
use crate::role::AccountRole;

pub const USERNAME: FieldSpec = FieldSpec::text("username", "Username").max_length(150);
pub const EMAIL: FieldSpec = FieldSpec::text("email", "Email address")
    .max_length(254)
    .widget(Widget::Email);
pub const PASSWORD: FieldSpec = FieldSpec::text("password", "Password")
    .unstripped()
    .widget(Widget::Password);
pub const PASSWORD_CONFIRMATION: FieldSpec =
    FieldSpec::text("password_confirmation", "Password confirmation")
        .unstripped()
        .widget(Widget::Password)
        .help_text("Enter the same password as before, for verification.");

pub const ROLE: FieldSpec = FieldSpec::text("role", "Role")
    .unstripped()
    .widget(Widget::Select);
pub const PHONE_NUMBER: FieldSpec = FieldSpec::text("phone_number", "Phone number").max_length(15);
pub const ADDRESS: FieldSpec =
    FieldSpec::text("address", "Address").widget(Widget::TextArea { rows: None });
pub const PINCODE: FieldSpec = FieldSpec::text("pincode", "Pincode").max_length(10);
pub const STATE: FieldSpec = FieldSpec::text("state", "State").max_length(50);

/// Validated credentials part of a registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountDetails {
    username: String,
    email: String,
    password: Password,
}

/// Validated profile part of a registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub role: AccountRole,
    pub phone_number: String,
    pub address: String,
    pub pincode: String,
    pub state: String,
}

/// A validated bundle of new-account fields, ready for the user store.
///
/// Read-only once built; consume it with [`RegistrationRequest::into_new_account`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    account: AccountDetails,
    profile: Profile,
}

impl RegistrationRequest {
    pub fn username(&self) -> &str {
        &self.account.username
    }

    pub fn email(&self) -> &str {
        &self.account.email
    }

    pub fn password(&self) -> &Password {
        &self.account.password
    }

    pub fn role(&self) -> AccountRole {
        self.profile.role
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Map onto the user store's creation input.
    pub fn into_new_account(self) -> crate::store::NewAccount {
        crate::store::NewAccount {
            username: self.account.username,
            email: self.account.email,
            password: self.account.password,
            profile: self.profile,
        }
    }
}

/// Registration form: field table plus the validation entry point.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationInput;

impl RegistrationInput {
    /// Fields in rendering order.
    pub const FIELDS: [FieldSpec; 9] = [
        USERNAME,
        EMAIL,
        ROLE,
        PHONE_NUMBER,
        ADDRESS,
        PINCODE,
        STATE,
        PASSWORD,
        PASSWORD_CONFIRMATION,
    ];

    /// Validate a raw submission.
    pub fn validate(data: &FormData) -> Result<RegistrationRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        let account = validate_account(data, &mut errors);
        let profile = validate_profile(data, &mut errors);

        errors.finish(|| {
            Some(RegistrationRequest {
                account: account?,
                profile: profile?,
            })
        })
    }
}

/// Base account rules.
pub fn validate_account(data: &FormData, errors: &mut FieldErrors) -> Option<AccountDetails> {
    // NFKC so compatibility look-alikes (e.g. full-width letters) collapse onto
    // the name the store compares against.
    let username = USERNAME.clean(data, errors).and_then(|u| {
        let u: String = u.nfkc().collect();
        let max = USERNAME.max_length.unwrap_or(usize::MAX);
        let len = u.chars().count();
        if len > max {
            errors.add(USERNAME.name, FieldError::length_exceeded(max, len));
            None
        } else if u.chars().all(is_username_char) {
            Some(u)
        } else {
            errors.add(
                USERNAME.name,
                FieldError::invalid_format(
                    "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.",
                ),
            );
            None
        }
    });

    let email = EMAIL.clean(data, errors).and_then(|e| {
        if is_valid_email(&e) {
            Some(e)
        } else {
            errors.add(
                EMAIL.name,
                FieldError::invalid_format("Enter a valid email address."),
            );
            None
        }
    });

    let password = PASSWORD.clean(data, errors);
    let confirmation = PASSWORD_CONFIRMATION.clean(data, errors);

    // Mismatch is only meaningful once both values are present.
    if let (Some(p), Some(c)) = (&password, &confirmation) {
        if p != c {
            errors.add(
                PASSWORD_CONFIRMATION.name,
                FieldError::mismatch("The two password fields didn't match."),
            );
            return None;
        }
    }
    confirmation?;

    Some(AccountDetails {
        username: username?,
        email: email?,
        password: Password::new(password?),
    })
}

/// Extended profile rules.
pub fn validate_profile(data: &FormData, errors: &mut FieldErrors) -> Option<Profile> {
    let role = ROLE
        .clean(data, errors)
        .and_then(|raw| match raw.parse::<AccountRole>() {
            Ok(role) => Some(role),
            Err(e) => {
                errors.add(ROLE.name, e);
                None
            }
        });
    let phone_number = PHONE_NUMBER.clean(data, errors);
    let address = ADDRESS.clean(data, errors);
    let pincode = PINCODE.clean(data, errors);
    let state = STATE.clean(data, errors);

    Some(Profile {
        role: role?,
        phone_number: phone_number?,
        address: address?,
        pincode: pincode?,
        state: state?,
    })
}

fn is_username_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_')
}

/// Shape check only: `local@domain.tld`, no whitespace, no empty dot-atoms in
/// the local part, sane domain labels, top-level domain of two or more characters.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    if local.contains('@') || local.split('.').any(str::is_empty) {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    let tld_ok = labels.last().is_some_and(|tld| tld.chars().count() >= 2);
    labels.len() >= 2
        && tld_ok
        && labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_alphanumeric() || c == '-')
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use supplydesk_core::ErrorKind;

    fn valid() -> FormData {
        FormData::new()
            .with("username", "ravi.k")
            .with("email", "ravi@example.in")
            .with("role", "supplier")
            .with("phone_number", "+919876543210")
            .with("address", "12 MG Road\nIndiranagar")
            .with("pincode", "560038")
            .with("state", "Karnataka")
            .with("password", "s3cret-pass")
            .with("password_confirmation", "s3cret-pass")
    }

    #[test]
    fn valid_payload_yields_request_with_values_unchanged() {
        let req = RegistrationInput::validate(&valid()).unwrap();
        assert_eq!(req.username(), "ravi.k");
        assert_eq!(req.email(), "ravi@example.in");
        assert_eq!(req.role(), AccountRole::Supplier);
        assert_eq!(req.password().expose(), "s3cret-pass");

        let profile = req.profile();
        assert_eq!(profile.phone_number, "+919876543210");
        assert_eq!(profile.address, "12 MG Road\nIndiranagar");
        assert_eq!(profile.pincode, "560038");
        assert_eq!(profile.state, "Karnataka");
    }

    #[test]
    fn every_required_field_reports_missing_when_absent() {
        for spec in RegistrationInput::FIELDS {
            let mut data = valid();
            data.remove(spec.name);
            let errors = RegistrationInput::validate(&data).unwrap_err();
            assert!(
                errors.has(spec.name, ErrorKind::MissingField),
                "expected missing error on {}: {errors}",
                spec.name
            );
            assert_eq!(errors.len(), 1, "only {} should fail: {errors}", spec.name);
        }
    }

    #[test]
    fn empty_and_blank_values_count_as_missing() {
        let data = valid().with("state", "").with("address", " \n\t ");
        let errors = RegistrationInput::validate(&data).unwrap_err();
        assert!(errors.has("state", ErrorKind::MissingField));
        assert!(errors.has("address", ErrorKind::MissingField));
    }

    #[test]
    fn role_accepts_exactly_supplier_and_vendor() {
        for (raw, role) in [("supplier", AccountRole::Supplier), ("vendor", AccountRole::Vendor)] {
            let req = RegistrationInput::validate(&valid().with("role", raw)).unwrap();
            assert_eq!(req.role(), role);
        }

        for raw in ["admin", "Vendor", "customer", "supplier "] {
            let errors = RegistrationInput::validate(&valid().with("role", raw)).unwrap_err();
            assert!(errors.has("role", ErrorKind::InvalidChoice), "{raw:?}");
        }
    }

    #[test]
    fn phone_number_boundary_is_fifteen_characters() {
        let ok = valid().with("phone_number", "1".repeat(15));
        assert!(RegistrationInput::validate(&ok).is_ok());

        let too_long = valid().with("phone_number", "1".repeat(16));
        let errors = RegistrationInput::validate(&too_long).unwrap_err();
        assert!(errors.has("phone_number", ErrorKind::LengthExceeded));
        assert_eq!(
            errors.get("phone_number")[0].message,
            "Ensure this value has at most 15 characters (it has 16)."
        );
    }

    #[test]
    fn pincode_and_state_limits() {
        assert!(RegistrationInput::validate(&valid().with("pincode", "9".repeat(10))).is_ok());
        assert!(RegistrationInput::validate(&valid().with("state", "s".repeat(50))).is_ok());

        let data = valid()
            .with("pincode", "9".repeat(11))
            .with("state", "s".repeat(51));
        let errors = RegistrationInput::validate(&data).unwrap_err();
        assert!(errors.has("pincode", ErrorKind::LengthExceeded));
        assert!(errors.has("state", ErrorKind::LengthExceeded));
    }

    #[test]
    fn password_mismatch_is_reported_on_confirmation() {
        let data = valid()
            .with("password", "abc123")
            .with("password_confirmation", "abc124");
        let errors = RegistrationInput::validate(&data).unwrap_err();
        assert!(errors.has("password_confirmation", ErrorKind::Mismatch));
        assert!(errors.get("password").is_empty());
        assert_eq!(
            errors.get("password_confirmation")[0].message,
            "The two password fields didn't match."
        );
    }

    #[test]
    fn passwords_are_not_stripped() {
        let data = valid()
            .with("password", "pass ")
            .with("password_confirmation", "pass");
        let errors = RegistrationInput::validate(&data).unwrap_err();
        assert!(errors.has("password_confirmation", ErrorKind::Mismatch));

        let data = valid()
            .with("password", " pass ")
            .with("password_confirmation", " pass ");
        let req = RegistrationInput::validate(&data).unwrap();
        assert_eq!(req.password().expose(), " pass ");
    }

    #[test]
    fn text_fields_are_stripped() {
        let data = valid().with("username", "  ravi.k ").with("state", " Goa ");
        let req = RegistrationInput::validate(&data).unwrap();
        assert_eq!(req.username(), "ravi.k");
        assert_eq!(req.profile().state, "Goa");
    }

    #[test]
    fn errors_from_both_rule_sets_accumulate() {
        let data = valid()
            .with("email", "not-an-email")
            .with("role", "admin")
            .with("pincode", "12345678901")
            .with("password_confirmation", "different");
        let errors = RegistrationInput::validate(&data).unwrap_err();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec!["email", "password_confirmation", "pincode", "role"]
        );
    }

    #[test]
    fn username_rejects_disallowed_characters() {
        for bad in ["ravi k", "ravi#k", "ravi/k"] {
            let errors = RegistrationInput::validate(&valid().with("username", bad)).unwrap_err();
            assert!(errors.has("username", ErrorKind::InvalidFormat), "{bad:?}");
        }
        for good in ["ravi_k", "ravi+k@shop", "zoë"] {
            assert!(RegistrationInput::validate(&valid().with("username", good)).is_ok(), "{good:?}");
        }
    }

    #[test]
    fn email_shape() {
        for bad in [
            "plain",
            "@example.com",
            "a@b",
            "a@@b.com",
            "a b@c.com",
            "a@-x.com",
            "a@x..com",
            "a@b.c",
            "a..b@x.com",
            ".a@x.com",
            "a.@x.com",
        ] {
            let errors = RegistrationInput::validate(&valid().with("email", bad)).unwrap_err();
            assert!(errors.has("email", ErrorKind::InvalidFormat), "{bad:?}");
        }
        for good in ["a@b.co", "first.last+tag@mail.example.org"] {
            assert!(RegistrationInput::validate(&valid().with("email", good)).is_ok(), "{good:?}");
        }
    }

    #[test]
    fn username_length_boundary_is_150() {
        let ok = valid().with("username", "u".repeat(150));
        assert_eq!(RegistrationInput::validate(&ok).unwrap().username().len(), 150);

        let too_long = valid().with("username", "u".repeat(151));
        let errors = RegistrationInput::validate(&too_long).unwrap_err();
        assert!(errors.has("username", ErrorKind::LengthExceeded));
        assert_eq!(
            errors.get("username")[0].message,
            "Ensure this value has at most 150 characters (it has 151)."
        );
    }

    #[test]
    fn email_length_boundary_is_254() {
        let domain = "@example.com";
        let ok = format!("{}{domain}", "e".repeat(254 - domain.len()));
        assert_eq!(ok.len(), 254);
        assert!(RegistrationInput::validate(&valid().with("email", ok)).is_ok());

        let too_long = format!("{}{domain}", "e".repeat(255 - domain.len()));
        let errors = RegistrationInput::validate(&valid().with("email", too_long)).unwrap_err();
        assert!(errors.has("email", ErrorKind::LengthExceeded));
    }

    #[test]
    fn username_is_nfkc_normalized() {
        let req = RegistrationInput::validate(&valid().with("username", "ｒａｖｉ")).unwrap();
        assert_eq!(req.username(), "ravi");

        // U+FB01 LATIN SMALL LIGATURE FI expands to two characters.
        let data = valid().with("username", format!("{}\u{FB01}", "u".repeat(149)));
        let errors = RegistrationInput::validate(&data).unwrap_err();
        assert!(errors.has("username", ErrorKind::LengthExceeded));
    }

    #[test]
    fn into_new_account_carries_every_field() {
        let account = RegistrationInput::validate(&valid()).unwrap().into_new_account();
        assert_eq!(account.username, "ravi.k");
        assert_eq!(account.email, "ravi@example.in");
        assert_eq!(account.password.expose(), "s3cret-pass");
        assert_eq!(account.profile.role, AccountRole::Supplier);
        assert_eq!(account.profile.pincode, "560038");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn phone_number_accepted_iff_within_limit(phone in "[0-9+ -]{1,30}") {
                let trimmed = phone.trim();
                prop_assume!(!trimmed.is_empty());

                let result = RegistrationInput::validate(&valid().with("phone_number", phone.clone()));
                if trimmed.chars().count() <= 15 {
                    let req = result.unwrap();
                    prop_assert_eq!(req.profile().phone_number.as_str(), trimmed);
                } else {
                    let errors = result.unwrap_err();
                    prop_assert!(errors.has("phone_number", ErrorKind::LengthExceeded));
                }
            }

            #[test]
            fn role_rejects_anything_but_choice_keys(raw in "[a-zA-Z]{1,12}") {
                prop_assume!(raw != "supplier" && raw != "vendor");
                let errors = RegistrationInput::validate(&valid().with("role", raw)).unwrap_err();
                prop_assert!(errors.has("role", ErrorKind::InvalidChoice));
            }

            #[test]
            fn matching_passwords_always_pass(pw in "[ -~]{1,40}") {
                let data = valid().with("password", pw.clone()).with("password_confirmation", pw.clone());
                let req = RegistrationInput::validate(&data).unwrap();
                prop_assert_eq!(req.password().expose(), pw.as_str());
            }
        }
    }
}
