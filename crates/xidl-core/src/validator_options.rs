/// What the validator does after finding its first error.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ErrorPolicy {
    /// Keep checking and report every error in the document.
    #[default]
    AccumulateAll,

    /// Return as soon as one error is found.
    StopAtFirst,
}

/// Settings for [`DocumentValidator`](crate::DocumentValidator).
///
/// ```
/// use xidl_core::ErrorPolicy;
/// use xidl_core::ValidatorOptions;
///
/// let options = ValidatorOptions::new().error_policy(ErrorPolicy::StopAtFirst);
/// assert_eq!(options.get_error_policy(), ErrorPolicy::StopAtFirst);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValidatorOptions {
    error_policy: ErrorPolicy,
}

impl ValidatorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }

    pub fn get_error_policy(&self) -> ErrorPolicy {
        self.error_policy
    }
}
