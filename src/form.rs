use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;
use crate::models::{NewSubmission, SubmissionRequest};

/// How long the "submitted" confirmation stays up before the form clears.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_secs(3);

/// Shown for every transmission failure, whatever the cause.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("{field} {reason}")]
    Invalid { field: &'static str, reason: &'static str },
    #[error("{}", GENERIC_FAILURE_MESSAGE)]
    Transmission,
}

/// Anywhere a validated submission can be written to.
pub trait SubmissionSink {
    type Error: Display;

    fn send(&self, submission: &NewSubmission) -> impl Future<Output = Result<i64, Self::Error>> + Send;
}

/// Check the three raw fields and parse the price.
pub fn validate(request: &SubmissionRequest) -> Result<NewSubmission, FormError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(FormError::Invalid { field: "name", reason: "is required" });
    }

    let company = request.company.trim();
    if company.is_empty() {
        return Err(FormError::Invalid { field: "company", reason: "is required" });
    }

    let price: f64 = request
        .price
        .trim()
        .parse()
        .map_err(|_| FormError::Invalid { field: "price", reason: "must be a number" })?;

    if !price.is_finite() || price < 0.0 {
        return Err(FormError::Invalid { field: "price", reason: "must be a non-negative number" });
    }

    Ok(NewSubmission {
        name: name.to_string(),
        company: company.to_string(),
        price,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormStatus {
    Editing,
    Submitted { at: Instant },
    Failed { message: String },
}

/// Contact form state: the typed fields plus where the last submit left it.
#[derive(Debug)]
pub struct ContactForm {
    pub fields: SubmissionRequest,
    status: FormStatus,
    reset_delay: Duration,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(DEFAULT_RESET_DELAY)
    }
}

impl ContactForm {
    pub fn new(reset_delay: Duration) -> Self {
        Self {
            fields: SubmissionRequest::default(),
            status: FormStatus::Editing,
            reset_delay,
        }
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_empty(&self) -> bool {
        self.fields.name.is_empty() && self.fields.company.is_empty() && self.fields.price.is_empty()
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            FormStatus::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Validate and send the current fields.
    ///
    /// Fields are left untouched on failure so the user can correct or retry.
    /// A retry sends again; nothing deduplicates repeated sends.
    pub async fn submit<S: SubmissionSink>(&mut self, sink: &S) -> Result<i64, FormError> {
        let submission = match validate(&self.fields) {
            Ok(submission) => submission,
            Err(e) => {
                self.status = FormStatus::Failed { message: e.to_string() };
                return Err(e);
            }
        };

        match sink.send(&submission).await {
            Ok(id) => {
                tracing::info!("Contact form submitted as #{}", id);
                self.status = FormStatus::Submitted { at: Instant::now() };
                Ok(id)
            }
            Err(e) => {
                tracing::error!("Failed to send contact form: {}", e);
                self.status = FormStatus::Failed { message: GENERIC_FAILURE_MESSAGE.to_string() };
                Err(FormError::Transmission)
            }
        }
    }

    /// Clear the form once the confirmation has been up for the reset delay.
    pub fn refresh(&mut self, now: Instant) {
        if let FormStatus::Submitted { at } = self.status {
            if now.saturating_duration_since(at) >= self.reset_delay {
                self.fields = SubmissionRequest::default();
                self.status = FormStatus::Editing;
            }
        }
    }

    /// Wait out whatever is left of the confirmation, then clear.
    pub async fn settle(&mut self) {
        if let FormStatus::Submitted { at } = self.status {
            tokio::time::sleep_until(at + self.reset_delay).await;
            self.refresh(Instant::now());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct RecordingSink {
        sent: AtomicUsize,
    }

    impl SubmissionSink for RecordingSink {
        type Error = String;

        async fn send(&self, _submission: &NewSubmission) -> Result<i64, Self::Error> {
            Ok(self.sent.fetch_add(1, Ordering::SeqCst) as i64 + 1)
        }
    }

    struct BrokenSink;

    impl SubmissionSink for BrokenSink {
        type Error = String;

        async fn send(&self, _submission: &NewSubmission) -> Result<i64, Self::Error> {
            Err("connection reset by peer".to_string())
        }
    }

    fn filled(reset_delay: Duration) -> ContactForm {
        let mut form = ContactForm::new(reset_delay);
        form.fields = SubmissionRequest {
            name: "Grace".to_string(),
            company: "Compilers Inc".to_string(),
            price: " 1999.50 ".to_string(),
        };
        form
    }

    #[test]
    fn validate_parses_price_and_trims() {
        let submission = validate(&filled(DEFAULT_RESET_DELAY).fields).unwrap();
        assert_eq!(submission.name, "Grace");
        assert_eq!(submission.company, "Compilers Inc");
        assert_eq!(submission.price, 1999.5);
    }

    #[test]
    fn validate_rejects_bad_fields() {
        let mut request = filled(DEFAULT_RESET_DELAY).fields;
        request.name = "   ".to_string();
        assert_eq!(
            validate(&request),
            Err(FormError::Invalid { field: "name", reason: "is required" })
        );

        let mut request = filled(DEFAULT_RESET_DELAY).fields;
        request.company.clear();
        assert!(matches!(validate(&request), Err(FormError::Invalid { field: "company", .. })));

        for price in ["", "abc", "12,5", "-1", "inf", "NaN"] {
            let mut request = filled(DEFAULT_RESET_DELAY).fields;
            request.price = price.to_string();
            assert!(
                matches!(validate(&request), Err(FormError::Invalid { field: "price", .. })),
                "price {price:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn successful_submit_clears_after_reset_delay() {
        let sink = RecordingSink { sent: AtomicUsize::new(0) };
        let mut form = filled(Duration::from_secs(3));

        form.submit(&sink).await.unwrap();
        let at = match form.status() {
            FormStatus::Submitted { at } => *at,
            other => panic!("unexpected status {other:?}"),
        };
        assert!(!form.is_empty());

        form.refresh(at + Duration::from_secs(2));
        assert!(matches!(form.status(), FormStatus::Submitted { .. }));
        assert!(!form.is_empty());

        form.refresh(at + Duration::from_secs(3) + Duration::from_millis(1));
        assert_eq!(form.status(), &FormStatus::Editing);
        assert!(form.is_empty());
    }

    #[tokio::test]
    async fn settle_waits_for_the_reset() {
        let sink = RecordingSink { sent: AtomicUsize::new(0) };
        let mut form = filled(Duration::from_millis(20));

        form.submit(&sink).await.unwrap();
        form.settle().await;

        assert_eq!(form.status(), &FormStatus::Editing);
        assert!(form.is_empty());
    }

    #[tokio::test]
    async fn failed_send_keeps_fields_and_shows_generic_message() {
        let mut form = filled(DEFAULT_RESET_DELAY);
        let before = form.fields.clone();

        let err = form.submit(&BrokenSink).await.unwrap_err();
        assert_eq!(err, FormError::Transmission);
        assert_eq!(form.error_message(), Some(GENERIC_FAILURE_MESSAGE));
        assert_eq!(form.fields.name, before.name);
        assert_eq!(form.fields.company, before.company);
        assert_eq!(form.fields.price, before.price);

        form.refresh(Instant::now() + Duration::from_secs(60));
        assert_eq!(form.fields.name, before.name);
    }

    #[tokio::test]
    async fn invalid_fields_are_not_sent() {
        let sink = RecordingSink { sent: AtomicUsize::new(0) };
        let mut form = filled(DEFAULT_RESET_DELAY);
        form.fields.price = "lots".to_string();

        let err = form.submit(&sink).await.unwrap_err();
        assert!(matches!(err, FormError::Invalid { field: "price", .. }));
        assert_eq!(form.error_message(), Some("price must be a number"));
        assert_eq!(form.fields.price, "lots");
        assert_eq!(sink.sent.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn resubmitting_sends_again() {
        let sink = RecordingSink { sent: AtomicUsize::new(0) };
        let mut form = filled(DEFAULT_RESET_DELAY);

        assert_eq!(form.submit(&sink).await.unwrap(), 1);
        assert_eq!(form.submit(&sink).await.unwrap(), 2);
    }
}
