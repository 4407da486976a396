//! Normalized provider records and the lookup result contract.
//!
//! `LookupResult` serialises as `{"success": [...]}` or `{"error": "..."}`;
//! every host integration returns exactly this shape.

use serde::{Deserialize, Serialize};

/// Value emitted for `accepting_new_patients`.
///
/// Not provided by the upstream registry; every record carries this default.
pub const ACCEPTING_NEW_PATIENTS_DEFAULT: bool = true;

/// Display name used when the registry supplies neither a first nor last name.
pub const NAME_UNAVAILABLE: &str = "Dr. (Name unavailable)";

/// Phone value used when the registry supplies no telephone number.
pub const PHONE_NOT_AVAILABLE: &str = "Not available";

/// Practice address of a provider. Every part may be blank.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProviderAddress {
    /// Street lines joined with `", "`, blank lines dropped.
    #[serde(rename = "street_address")]
    pub street: String,
    /// City name.
    pub city: String,
    /// State abbreviation.
    pub state: String,
    /// Postal code.
    pub zip: String,
}

/// One provider returned by a lookup.
///
/// ## Invariants
/// - `full_name` is never empty.
/// - `specialty` is never empty when the lookup specialty was not empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderRecord {
    /// Display name, prefixed with `Dr.`.
    pub full_name: String,
    /// Credential text, possibly empty.
    pub credentials: String,
    /// Taxonomy description of the provider.
    pub specialty: String,
    /// Registry-assigned provider number (NPI).
    #[serde(rename = "npi_number")]
    pub identifier: Option<u64>,
    /// Primary practice address.
    pub address: ProviderAddress,
    /// Telephone number or [`PHONE_NOT_AVAILABLE`].
    pub phone: String,
    /// Always [`ACCEPTING_NEW_PATIENTS_DEFAULT`].
    pub accepting_new_patients: bool,
}

/// Outcome of one provider lookup.
///
/// # Examples
/// ```
/// use medai_backend::domain::LookupResult;
///
/// let result = LookupResult::no_doctors_found("Cardiology");
/// let json = serde_json::to_value(&result).expect("serialisable");
/// assert_eq!(
///     json["error"],
///     "No doctors found for specialty 'Cardiology' in the requested location"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupResult {
    /// Non-empty list of matching providers, in registry order.
    Success(Vec<ProviderRecord>),
    /// Description of why no providers are returned.
    Error(String),
}

impl LookupResult {
    /// Build the error returned when a lookup yields no providers.
    pub fn no_doctors_found(specialty: &str) -> Self {
        Self::Error(format!(
            "No doctors found for specialty '{specialty}' in the requested location"
        ))
    }

    /// Wrap `providers`, falling back to [`Self::no_doctors_found`] when empty.
    pub fn from_providers(specialty: &str, providers: Vec<ProviderRecord>) -> Self {
        if providers.is_empty() {
            Self::no_doctors_found(specialty)
        } else {
            Self::Success(providers)
        }
    }

    /// Return the providers for a successful lookup.
    pub fn providers(&self) -> Option<&[ProviderRecord]> {
        match self {
            Self::Success(providers) => Some(providers.as_slice()),
            Self::Error(_) => None,
        }
    }

    /// Return the error message for a failed lookup.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Error(message) => Some(message.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Wire-format coverage for the lookup contract.

    use super::*;
    use serde_json::json;

    fn jane_doe() -> ProviderRecord {
        ProviderRecord {
            full_name: "Dr. Jane Doe".to_owned(),
            credentials: "MD".to_owned(),
            specialty: "Dermatology".to_owned(),
            identifier: Some(1_234_567_890),
            address: ProviderAddress {
                street: "10 5th Ave".to_owned(),
                city: "New York".to_owned(),
                state: "NY".to_owned(),
                zip: "10001".to_owned(),
            },
            phone: "212-555-0100".to_owned(),
            accepting_new_patients: ACCEPTING_NEW_PATIENTS_DEFAULT,
        }
    }

    #[test]
    fn success_serialises_under_success_key() {
        let value = serde_json::to_value(LookupResult::Success(vec![jane_doe()]))
            .expect("serialisable");

        assert_eq!(
            value,
            json!({
                "success": [{
                    "full_name": "Dr. Jane Doe",
                    "credentials": "MD",
                    "specialty": "Dermatology",
                    "npi_number": 1_234_567_890_u64,
                    "address": {
                        "street_address": "10 5th Ave",
                        "city": "New York",
                        "state": "NY",
                        "zip": "10001"
                    },
                    "phone": "212-555-0100",
                    "accepting_new_patients": true
                }]
            })
        );
    }

    #[test]
    fn error_serialises_under_error_key_only() {
        let value = serde_json::to_value(LookupResult::Error("boom".to_owned()))
            .expect("serialisable");

        assert_eq!(value, json!({ "error": "boom" }));
    }

    #[test]
    fn empty_provider_list_becomes_no_doctors_error() {
        let result = LookupResult::from_providers("Oncology", Vec::new());

        assert_eq!(
            result.error_message(),
            Some("No doctors found for specialty 'Oncology' in the requested location")
        );
        assert!(result.providers().is_none());
    }

    #[test]
    fn non_empty_provider_list_is_success() {
        let result = LookupResult::from_providers("Dermatology", vec![jane_doe()]);

        assert_eq!(result.providers().map(<[ProviderRecord]>::len), Some(1));
        assert!(result.error_message().is_none());
    }
}
