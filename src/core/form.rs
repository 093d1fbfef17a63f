//! Client-side contact form validation and the simulated send
//!
//! Nothing is transmitted: a valid submission moves to `Sending`, and the
//! host flips it to `Sent` after the configured delay.

use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
}

impl FieldKind {
    /// Map an input's `type` attribute.
    pub fn from_input_type(input_type: Option<&str>) -> Self {
        match input_type {
            Some(t) if t.eq_ignore_ascii_case("email") => Self::Email,
            _ => Self::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required => write!(f, "This field is required."),
            FieldError::InvalidEmail => write!(f, "Please enter a valid email."),
        }
    }
}

// `[^\s@]` as a browser evaluates it; regex-lite's `\s` is ASCII-only.
const NOT_SPACE_OR_AT: &str =
    r"[^\s@\x{a0}\x{1680}\x{2000}-\x{200a}\x{2028}\x{2029}\x{202f}\x{205f}\x{3000}\x{feff}]";

static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(&format!("^{c}+@{c}+\\.{c}+$", c = NOT_SPACE_OR_AT)).ok()
});

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot inside the domain.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.as_ref().is_some_and(|re| re.is_match(value))
}

pub fn validate_field(kind: FieldKind, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Required);
    }
    if kind == FieldKind::Email && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Sending,
    Sent,
}

/// Per-field validation result, in submission order
pub type FieldReport = Vec<Result<(), FieldError>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed; the form stays editable
    Rejected(FieldReport),
    /// All fields passed; the simulated send has started
    Sending(FieldReport),
    /// A send is already in flight or done
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    phase: FormPhase,
}

impl ContactForm {
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn submit<'a, I>(&mut self, fields: I) -> SubmitOutcome
    where
        I: IntoIterator<Item = (FieldKind, &'a str)>,
    {
        if self.phase != FormPhase::Editing {
            return SubmitOutcome::Ignored;
        }

        let report: FieldReport = fields
            .into_iter()
            .map(|(kind, value)| validate_field(kind, value))
            .collect();

        let failures = report.iter().filter(|r| r.is_err()).count();
        if failures > 0 {
            debug!(failures, "Contact form rejected");
            return SubmitOutcome::Rejected(report);
        }

        self.phase = FormPhase::Sending;
        debug!(fields = report.len(), "Contact form accepted, simulating send");
        SubmitOutcome::Sending(report)
    }

    /// Finish the simulated send; returns false if no send was pending.
    pub fn complete_send(&mut self) -> bool {
        if self.phase != FormPhase::Sending {
            return false;
        }
        self.phase = FormPhase::Sent;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("dr.rao@clinic.example.in"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email(" a@b.com"));
        // a later dot is enough
        assert!(is_valid_email("a@.b.com"));
    }

    #[test]
    fn test_email_pattern_edge_inputs() {
        assert!(is_valid_email("a@b..c"));
        assert!(is_valid_email("a@b.c."));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("a@b.c\n"));
        assert!(!is_valid_email("a@b\t.c"));
        // Non-ASCII whitespace counts as whitespace too
        assert!(!is_valid_email("a@b\u{a0}.c"));
        assert!(!is_valid_email("a@b\u{feff}.c"));
        assert!(!is_valid_email("a\u{3000}b@c.d"));
        assert!(is_valid_email("médecin@clinique.fr"));
    }

    #[test]
    fn test_field_errors() {
        assert_eq!(validate_field(FieldKind::Text, "   "), Err(FieldError::Required));
        assert_eq!(validate_field(FieldKind::Email, ""), Err(FieldError::Required));
        assert_eq!(validate_field(FieldKind::Email, "not-an-email"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_field(FieldKind::Text, "Asha"), Ok(()));
        assert_eq!(FieldError::Required.to_string(), "This field is required.");
        assert_eq!(FieldError::InvalidEmail.to_string(), "Please enter a valid email.");
    }

    #[test]
    fn test_invalid_email_blocks_success() {
        let mut form = ContactForm::default();
        let outcome = form.submit([
            (FieldKind::Text, "Asha"),
            (FieldKind::Email, "not-an-email"),
            (FieldKind::Text, "Need a quote"),
        ]);
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(vec![Ok(()), Err(FieldError::InvalidEmail), Ok(())])
        );
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(!form.complete_send());
    }

    #[test]
    fn test_valid_submission_sends_once() {
        let mut form = ContactForm::default();
        let outcome = form.submit([(FieldKind::Text, "Asha"), (FieldKind::Email, "asha@clinic.in")]);
        assert!(matches!(outcome, SubmitOutcome::Sending(_)));
        assert_eq!(form.phase(), FormPhase::Sending);

        // Double submit while sending is ignored
        assert_eq!(form.submit([(FieldKind::Text, "x")]), SubmitOutcome::Ignored);

        assert!(form.complete_send());
        assert_eq!(form.phase(), FormPhase::Sent);
        assert!(!form.complete_send());
    }

    #[test]
    fn test_field_kind_from_type() {
        assert_eq!(FieldKind::from_input_type(Some("email")), FieldKind::Email);
        assert_eq!(FieldKind::from_input_type(Some("EMAIL")), FieldKind::Email);
        assert_eq!(FieldKind::from_input_type(Some("tel")), FieldKind::Text);
        assert_eq!(FieldKind::from_input_type(None), FieldKind::Text);
    }
}
