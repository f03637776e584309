//! Process environment as a variable source

use provision_application::VariableSource;
use provision_domain::ValueSource;

/// Reads `std::env`. Unset and non-UTF-8 variables both count as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl VariableSource for ProcessEnvironment {
    fn source(&self) -> ValueSource {
        ValueSource::Environment
    }

    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_existing_variable() {
        // PATH is set in every test environment
        assert!(ProcessEnvironment.lookup("PATH").is_some());
        assert_eq!(ProcessEnvironment.source(), ValueSource::Environment);
    }

    #[test]
    fn test_missing_variable() {
        assert_eq!(
            ProcessEnvironment.lookup("HA_PROVISION_TEST_SURELY_UNSET_VARIABLE"),
            None
        );
    }
}
