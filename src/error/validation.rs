use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid boolean '{value}'. Expected true/false, yes/no, on/off, or 1/0.")]
    InvalidBoolean { value: String },
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration must be > 0.")]
    DurationZero,
    #[error("Invalid TLS version '{value}'. Use 1.0, 1.1, 1.2, or 1.3.")]
    InvalidTlsVersion { value: String },
    #[error("Test case alias must not be empty.")]
    EmptyTestCaseAlias,
    #[error(
        "{} of {total} test case(s) could not be reported: {}.",
        .aliases.len(),
        .aliases.join(", ")
    )]
    AliasFailures { total: usize, aliases: Vec<String> },
    #[error("JSON output reports a single test case. Pass --test_case_alias.")]
    JsonNeedsTestCaseAlias,
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
