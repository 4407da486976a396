//! Normalization of raw registry entries into [`ProviderRecord`]s.
//!
//! Fallback chain per field:
//! - name: non-blank first/last parts, else [`NAME_UNAVAILABLE`]
//! - specialty: first taxonomy description, else the requested specialty
//! - street: trimmed address lines joined with `", "`, blanks dropped
//! - phone: telephone number, else [`PHONE_NOT_AVAILABLE`]

use crate::domain::ports::{RegistryAddress, RegistryEntry};
use crate::domain::{
    ACCEPTING_NEW_PATIENTS_DEFAULT, NAME_UNAVAILABLE, PHONE_NOT_AVAILABLE, ProviderAddress,
    ProviderRecord,
};

/// Map one registry entry into a provider record.
///
/// Never fails: every missing field resolves to its documented fallback.
///
/// # Examples
/// ```
/// use medai_backend::domain::normalize_entry;
/// use medai_backend::domain::ports::RegistryEntry;
///
/// let record = normalize_entry(RegistryEntry::default(), "Cardiology");
/// assert_eq!(record.full_name, "Dr. (Name unavailable)");
/// assert_eq!(record.specialty, "Cardiology");
/// assert_eq!(record.phone, "Not available");
/// ```
pub fn normalize_entry(entry: RegistryEntry, requested_specialty: &str) -> ProviderRecord {
    let full_name = display_name(entry.first_name.as_deref(), entry.last_name.as_deref());
    let specialty = non_blank(entry.taxonomy_description)
        .unwrap_or_else(|| requested_specialty.to_owned());
    let address = entry.primary_address.unwrap_or_default();
    let phone = non_blank(address.telephone_number.clone())
        .unwrap_or_else(|| PHONE_NOT_AVAILABLE.to_owned());

    ProviderRecord {
        full_name,
        credentials: entry.credential.unwrap_or_default(),
        specialty,
        identifier: entry.number,
        address: practice_address(address),
        phone,
        accepting_new_patients: ACCEPTING_NEW_PATIENTS_DEFAULT,
    }
}

fn display_name(first: Option<&str>, last: Option<&str>) -> String {
    let parts: Vec<&str> = [first, last]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        NAME_UNAVAILABLE.to_owned()
    } else {
        format!("Dr. {}", parts.join(" "))
    }
}

fn practice_address(address: RegistryAddress) -> ProviderAddress {
    ProviderAddress {
        street: join_street(address.address_1.as_deref(), address.address_2.as_deref()),
        city: address.city.unwrap_or_default(),
        state: address.state.unwrap_or_default(),
        zip: address.postal_code.unwrap_or_default(),
    }
}

fn join_street(line_1: Option<&str>, line_2: Option<&str>) -> String {
    [line_1, line_2]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
