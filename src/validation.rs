// Validation utilities module
// Custom validation functions for domain-specific rules

use validator::ValidationError;

/// Validates that every entry in a core-values list is non-empty
///
/// The list itself being non-empty is checked separately with a length
/// rule; this catches blank strings slipping in among real values.
pub fn validate_core_values(values: &[String]) -> Result<(), ValidationError> {
    if values.iter().any(|v| v.trim().is_empty()) {
        Err(ValidationError::new("empty_core_value"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_values_pass() {
        let values = vec!["Integrity".to_string(), "Courage".to_string()];
        assert!(validate_core_values(&values).is_ok());
    }

    #[test]
    fn test_blank_entry_fails() {
        let values = vec!["Integrity".to_string(), "   ".to_string()];
        assert!(validate_core_values(&values).is_err());
    }

    #[test]
    fn test_empty_list_passes_here() {
        // Emptiness of the list is a separate length rule
        assert!(validate_core_values(&[]).is_ok());
    }
}
