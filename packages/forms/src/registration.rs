//! # Registration form: Libyan citizen contact form
//!
//! Holds the four controlled fields of the registration card, validates them on
//! submit and walks an accepted submission through its two timed phases:
//!
//! 1. [`SUBMIT_LATENCY`] of simulated network latency while `loading` is set.
//! 2. [`SUCCESS_DISPLAY`] of the success panel (`submitted`), after which the
//!    panel clears itself.
//!
//! Nothing is sent anywhere: the accepted [`RegistrationRecord`] is handed back
//! to the caller and then dropped.
//!
//! The timeline itself lives in [`run_submission`], which takes the sleep
//! function as a parameter so the UI can use the platform timer and tests can
//! use tokio's paused clock.

use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Simulated latency between pressing submit and the success panel.
pub const SUBMIT_LATENCY: Duration = Duration::from_millis(1000);

/// How long the success panel stays up before the form comes back.
pub const SUCCESS_DISPLAY: Duration = Duration::from_millis(3000);

/// Country calling code shown in front of the phone input.
pub const PHONE_PREFIX: &str = "+218";

/// Number of digits a local phone number must have.
pub const PHONE_DIGITS: usize = 10;

/// Libyan cities offered in the "state" select.
pub const LIBYAN_CITIES: &[&str] = &[
    "طرابلس", "بنغازي", "مصراتة", "البيضاء", "الزاوية", "زليتن", "اجدابيا", "سبها", "الخمس", "توكرة",
    "سرت", "غريان", "درنة", "صبراتة", "المرج", "زوارة", "الكفرة", "يفرن", "مرزق", "طبرق", "غدامس",
    "القبة", "تاجوراء", "بني وليد", "الأبيار", "نالوت", "الأصابعة", "الجميل", "براك", "هون", "جادو",
    "الزنتان", "سلوق", "مسلاتة", "ترهونة", "غات", "العزيزية", "وادي الشاطئ", "مزدة", "البريقة", "زلطن",
    "رقدالين", "الجفرة", "سوكنة", "الأبرق", "راس لانوف", "الماية", "الجغبوب", "العجيلات", "جالو", "البطنان",
    "تازربو", "الشويرف", "وادان", "مرادة", "الحرابة", "أوباري", "الشقيقة", "سيدي السائح", "مسة", "القريات",
    "تاورغاء", "الرجبان", "الرياينة", "الزاوية الغربية", "الزهراء", "السدادة", "الشرقية", "الغريفة", "القلعة",
    "القيقب", "الماجر", "المايا", "المحجوب", "المرقب", "المنية", "النوفلية", "الوسيطة", "اوجلة", "بئر الأشهب",
    "بئر الغنم", "بدر", "بنينا", "تمنهنت", "جنزور", "سوسة", "شحات", "صرمان", "عين زارة", "قصر بن غشير",
    "قمينس", "مرسى البريقة", "مسعود", "مطار بنينا", "وادي زمزم",
];

/// Libyan municipalities offered in the "municipality" select.
pub const LIBYAN_MUNICIPALITIES: &[&str] = &[
    "طرابلس المركز", "عين زارة", "سوق الجمعة", "تاجوراء", "جنزور", "حي الأندلس", "قصر بن غشير",
    "أبو سليم", "السواني", "العزيزية", "الزاوية", "صرمان", "صبراتة", "زوارة", "الجميل", "رقدالين",
    "زلطن", "العجيلات", "مصراتة", "زليتن", "الخمس", "ترهونة", "مسلاتة", "قصر الأخيار", "الغربان",
    "بني وليد", "سرت", "الجفرة", "هون", "ودان", "سوكنة", "زلة", "الواحات", "اجدابيا", "البريقة",
    "الكفرة", "تازربو", "ربيانة", "بنغازي", "المرج", "البيضاء", "شحات", "القبة", "درنة", "طبرق",
    "امساعد", "البطنان", "توكرة", "الأبيار", "سلوق", "قمينس", "سبها", "الشاطئ", "أوباري", "غات",
    "مرزق", "الجبل الأخضر", "الجبل الغربي", "نالوت", "غدامس", "يفرن", "جادو", "الزنتان", "الرجبان",
];

/// Cities in code-point order. Sorts a fresh copy; the constant is untouched.
pub fn sorted_cities() -> Vec<&'static str> {
    sorted(LIBYAN_CITIES)
}

/// Municipalities in code-point order. Sorts a fresh copy; the constant is untouched.
pub fn sorted_municipalities() -> Vec<&'static str> {
    sorted(LIBYAN_MUNICIPALITIES)
}

fn sorted(list: &[&'static str]) -> Vec<&'static str> {
    let mut out = list.to_vec();
    out.sort_unstable();
    out
}

/// The four inputs of the registration card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    PhoneNumber,
    State,
    Municipality,
}

impl Field {
    /// HTML `id`/`name` of the input.
    pub fn name(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::PhoneNumber => "phoneNumber",
            Field::State => "state",
            Field::Municipality => "municipality",
        }
    }
}

/// What the user entered. Lives only for one submit cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub full_name: String,
    pub phone_number: String,
    pub state: String,
    pub municipality: String,
}

impl RegistrationRecord {
    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::FullName => &mut self.full_name,
            Field::PhoneNumber => &mut self.phone_number,
            Field::State => &mut self.state,
            Field::Municipality => &mut self.municipality,
        }
    }
}

/// Field-scoped validation failure. The message is what the user sees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("الرجاء إدخال الاسم الكامل")]
    MissingFullName,
    #[error("الرجاء إدخال رقم الهاتف")]
    MissingPhoneNumber,
    #[error("الرجاء إدخال رقم هاتف صحيح (10 أرقام)")]
    InvalidPhoneNumber,
    #[error("الرجاء اختيار المدينة")]
    MissingState,
    #[error("الرجاء اختيار البلدية")]
    MissingMunicipality,
}

/// Current error per field. A field with no entry is shown as valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }
}

/// Check a record against the form's rules. Every failing field is reported.
pub fn validate_record(record: &RegistrationRecord) -> FieldErrors {
    let mut errors = BTreeMap::new();

    if record.full_name.trim().is_empty() {
        errors.insert(Field::FullName, ValidationError::MissingFullName);
    }

    let phone = record.phone_number.trim();
    if phone.is_empty() {
        errors.insert(Field::PhoneNumber, ValidationError::MissingPhoneNumber);
    } else if !is_local_phone_number(phone) {
        errors.insert(Field::PhoneNumber, ValidationError::InvalidPhoneNumber);
    }

    if record.state.is_empty() {
        errors.insert(Field::State, ValidationError::MissingState);
    }
    if record.municipality.is_empty() {
        errors.insert(Field::Municipality, ValidationError::MissingMunicipality);
    }

    FieldErrors(errors)
}

/// Exactly [`PHONE_DIGITS`] ASCII digits.
fn is_local_phone_number(s: &str) -> bool {
    s.len() == PHONE_DIGITS && s.bytes().all(|b| b.is_ascii_digit())
}

/// Timed transitions that follow an accepted submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitStep {
    /// Simulated latency elapsed: show the success panel and clear the fields.
    Settle,
    /// Success panel timed out.
    Dismiss,
}

/// State behind the registration card.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationForm {
    pub record: RegistrationRecord,
    pub errors: FieldErrors,
    pub loading: bool,
    pub submitted: bool,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update one field and drop any error shown for it.
    pub fn set_field(&mut self, field: Field, value: String) {
        *self.record.slot(field) = value;
        self.errors.clear(field);
    }

    pub fn error(&self, field: Field) -> Option<ValidationError> {
        self.errors.get(field)
    }

    /// Replace the error set with the result of validating the current fields.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_record(&self.record);
        self.errors.is_empty()
    }

    /// Start a submission. Returns the accepted record, or `None` if a
    /// submission is already running or validation failed.
    pub fn submit(&mut self) -> Option<RegistrationRecord> {
        if self.loading || !self.validate() {
            return None;
        }
        self.loading = true;
        Some(self.record.clone())
    }

    pub fn apply(&mut self, step: SubmitStep) {
        match step {
            SubmitStep::Settle => {
                self.loading = false;
                self.submitted = true;
                self.record = RegistrationRecord::default();
            }
            SubmitStep::Dismiss => self.submitted = false,
        }
    }

    /// "Back to form" on the success panel.
    pub fn dismiss(&mut self) {
        self.submitted = false;
    }
}

/// Drive an accepted submission through its timed phases.
///
/// `apply` receives [`SubmitStep::Settle`] after [`SUBMIT_LATENCY`] and
/// [`SubmitStep::Dismiss`] after a further [`SUCCESS_DISPLAY`]. Dropping the
/// returned future before it completes skips the remaining steps.
pub async fn run_submission<S, F>(mut apply: impl FnMut(SubmitStep), sleep: S)
where
    S: Fn(Duration) -> F,
    F: Future<Output = ()>,
{
    sleep(SUBMIT_LATENCY).await;
    apply(SubmitStep::Settle);
    sleep(SUCCESS_DISPLAY).await;
    apply(SubmitStep::Dismiss);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn filled() -> RegistrationForm {
        let mut form = RegistrationForm::new();
        form.set_field(Field::FullName, "محمد علي".to_string());
        form.set_field(Field::PhoneNumber, "0912345678".to_string());
        form.set_field(Field::State, "طرابلس".to_string());
        form.set_field(Field::Municipality, "سوق الجمعة".to_string());
        form
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let mut form = RegistrationForm::new();
        assert!(!form.validate());
        assert_eq!(form.errors.len(), 4);
        assert_eq!(form.error(Field::FullName), Some(ValidationError::MissingFullName));
        assert_eq!(form.error(Field::PhoneNumber), Some(ValidationError::MissingPhoneNumber));
        assert_eq!(form.error(Field::State), Some(ValidationError::MissingState));
        assert_eq!(form.error(Field::Municipality), Some(ValidationError::MissingMunicipality));
    }

    #[test]
    fn test_whitespace_name_is_missing() {
        let mut form = filled();
        form.set_field(Field::FullName, "   ".to_string());
        assert!(!form.validate());
        assert_eq!(form.error(Field::FullName), Some(ValidationError::MissingFullName));
    }

    #[test]
    fn test_bad_phone_numbers_only_flag_phone() {
        for phone in ["091234567", "09123456789", "09123x5678", "+218912345", "٠٩١٢٣٤٥٦٧٨", "0912 45678"] {
            let mut form = filled();
            form.set_field(Field::PhoneNumber, phone.to_string());
            let before = form.record.clone();

            assert!(!form.validate(), "{phone} should be rejected");
            assert_eq!(form.errors.len(), 1);
            assert_eq!(form.error(Field::PhoneNumber), Some(ValidationError::InvalidPhoneNumber));
            assert_eq!(form.record, before);
            assert!(!form.loading);
        }
    }

    #[test]
    fn test_phone_is_trimmed_before_check() {
        let mut form = filled();
        form.set_field(Field::PhoneNumber, "  0912345678 ".to_string());
        assert!(form.validate());

        form.set_field(Field::PhoneNumber, "    ".to_string());
        assert!(!form.validate());
        assert_eq!(form.error(Field::PhoneNumber), Some(ValidationError::MissingPhoneNumber));
    }

    #[test]
    fn test_set_field_clears_only_that_error() {
        let mut form = RegistrationForm::new();
        form.validate();
        form.set_field(Field::State, "سبها".to_string());

        assert_eq!(form.error(Field::State), None);
        assert_eq!(form.errors.len(), 3);
    }

    #[test]
    fn test_invalid_submit_does_not_start_loading() {
        let mut form = RegistrationForm::new();
        assert!(form.submit().is_none());
        assert!(!form.loading);
    }

    #[test]
    fn test_submit_ignored_while_loading() {
        let mut form = filled();
        assert!(form.submit().is_some());
        assert!(form.submit().is_none());
        assert!(form.loading);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::InvalidPhoneNumber.to_string(),
            "الرجاء إدخال رقم هاتف صحيح (10 أرقام)"
        );
        assert_eq!(ValidationError::MissingMunicipality.to_string(), "الرجاء اختيار البلدية");
    }

    #[test]
    fn test_sorted_lists_are_pure() {
        let first = sorted_cities();
        let second = sorted_cities();
        assert_eq!(first, second);
        assert_eq!(first.len(), LIBYAN_CITIES.len());
        assert!(first.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(LIBYAN_CITIES[0], "طرابلس");

        let municipalities = sorted_municipalities();
        assert_eq!(municipalities.len(), LIBYAN_MUNICIPALITIES.len());
        assert!(municipalities.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_dismiss_returns_to_form() {
        let mut form = filled();
        form.submit();
        form.apply(SubmitStep::Settle);
        assert!(form.submitted);
        form.dismiss();
        assert!(!form.submitted);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submission_timeline() {
        let form = Arc::new(Mutex::new(filled()));
        let steps = Arc::new(Mutex::new(Vec::new()));

        assert!(form.lock().unwrap().submit().is_some());
        assert!(form.lock().unwrap().loading);

        let driver = {
            let form = form.clone();
            let steps = steps.clone();
            tokio::spawn(run_submission(
                move |step| {
                    steps.lock().unwrap().push(step);
                    form.lock().unwrap().apply(step);
                },
                tokio::time::sleep,
            ))
        };

        tokio::time::sleep(Duration::from_millis(999)).await;
        {
            let form = form.lock().unwrap();
            assert!(form.loading);
            assert!(!form.submitted);
            assert_eq!(form.record.full_name, "محمد علي");
        }

        tokio::time::sleep(Duration::from_millis(2)).await;
        {
            let form = form.lock().unwrap();
            assert!(!form.loading);
            assert!(form.submitted);
            assert_eq!(form.record, RegistrationRecord::default());
        }

        tokio::time::sleep(Duration::from_millis(2997)).await;
        assert!(form.lock().unwrap().submitted);

        tokio::time::sleep(Duration::from_millis(3)).await;
        assert!(!form.lock().unwrap().submitted);

        driver.await.unwrap();
        assert_eq!(*steps.lock().unwrap(), vec![SubmitStep::Settle, SubmitStep::Dismiss]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_submission_skips_remaining_steps() {
        let form = Arc::new(Mutex::new(filled()));
        form.lock().unwrap().submit();

        let driver = {
            let form = form.clone();
            tokio::spawn(run_submission(
                move |step| form.lock().unwrap().apply(step),
                tokio::time::sleep,
            ))
        };

        tokio::time::sleep(Duration::from_millis(500)).await;
        driver.abort();
        tokio::time::sleep(Duration::from_secs(5)).await;

        let form = form.lock().unwrap();
        assert!(form.loading);
        assert!(!form.submitted);
    }
}
