//! DTOs for decoding NPPES registry JSON responses.
//!
//! The top-level envelope is decoded in one pass; each entry of `results` is
//! then decoded on its own so one malformed entry only drops that entry.
//! `addresses` and `taxonomies` are read leniently: the first object element
//! is used and each of its text fields is decoded on its own, so a wrong-typed
//! postal code does not discard the street or phone. `basic` and `number` are
//! strict.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::domain::ports::{
    ProviderRegistryError, RegistryAddress, RegistryEntry, RegistrySearchResponse,
};

#[derive(Debug, Deserialize)]
pub(super) struct SearchResponseDto {
    #[serde(default)]
    pub(super) results: Option<Vec<Value>>,
    #[serde(default, rename = "Errors")]
    pub(super) errors: Option<Vec<RegistryErrorDto>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RegistryErrorDto {
    #[serde(default)]
    pub(super) description: Option<String>,
    #[serde(default)]
    pub(super) field: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResultDto {
    #[serde(default)]
    number: Option<NpiNumberDto>,
    #[serde(default)]
    basic: Option<BasicDto>,
    #[serde(default)]
    addresses: Option<Value>,
    #[serde(default)]
    taxonomies: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NpiNumberDto {
    Numeric(u64),
    Text(String),
}

#[derive(Debug, Default, Deserialize)]
struct BasicDto {
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    credential: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AddressDto {
    #[serde(default)]
    address_1: Option<Value>,
    #[serde(default)]
    address_2: Option<Value>,
    #[serde(default)]
    city: Option<Value>,
    #[serde(default)]
    state: Option<Value>,
    #[serde(default)]
    postal_code: Option<Value>,
    #[serde(default)]
    telephone_number: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct TaxonomyDto {
    #[serde(default)]
    desc: Option<Value>,
}

impl SearchResponseDto {
    pub(super) fn into_search_response(
        self,
    ) -> Result<RegistrySearchResponse, ProviderRegistryError> {
        let results = self.results.unwrap_or_default();
        let errors = self.errors.unwrap_or_default();
        if results.is_empty() && !errors.is_empty() {
            return Err(ProviderRegistryError::invalid_request(describe_errors(
                &errors,
            )));
        }

        Ok(results.into_iter().enumerate().fold(
            RegistrySearchResponse::default(),
            |mut response, (index, raw)| {
                match decode_entry(raw) {
                    Ok(entry) => response.entries.push(entry),
                    Err(reason) => {
                        warn!(entry_index = index, %reason, "skipping malformed registry entry");
                        response.skipped_entries += 1;
                    }
                }
                response
            },
        ))
    }
}

fn describe_errors(errors: &[RegistryErrorDto]) -> String {
    let described: Vec<String> = errors
        .iter()
        .filter_map(|error| {
            let description = error.description.as_deref()?.trim();
            if description.is_empty() {
                return None;
            }
            Some(match error.field.as_deref() {
                Some(field) if !field.trim().is_empty() => format!("{field}: {description}"),
                _ => description.to_owned(),
            })
        })
        .collect();
    if described.is_empty() {
        "registry reported an unspecified error".to_owned()
    } else {
        described.join("; ")
    }
}

fn decode_entry(raw: Value) -> Result<RegistryEntry, String> {
    let dto: ResultDto = serde_json::from_value(raw).map_err(|error| error.to_string())?;
    dto.into_domain_entry()
}

impl ResultDto {
    fn into_domain_entry(self) -> Result<RegistryEntry, String> {
        let number = self.number.map(NpiNumberDto::into_number).transpose()?;
        let basic = self.basic.unwrap_or_default();
        let primary_address =
            first_element::<AddressDto>(self.addresses).map(AddressDto::into_domain_address);
        let taxonomy_description =
            first_element::<TaxonomyDto>(self.taxonomies)
                .and_then(|taxonomy| text_field("desc", taxonomy.desc));

        Ok(RegistryEntry {
            number,
            first_name: basic.first_name,
            last_name: basic.last_name,
            credential: basic.credential,
            primary_address,
            taxonomy_description,
        })
    }
}

impl NpiNumberDto {
    fn into_number(self) -> Result<u64, String> {
        match self {
            Self::Numeric(number) => Ok(number),
            Self::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| format!("provider number '{text}' is not numeric")),
        }
    }
}

impl AddressDto {
    fn into_domain_address(self) -> RegistryAddress {
        RegistryAddress {
            address_1: text_field("address_1", self.address_1),
            address_2: text_field("address_2", self.address_2),
            city: text_field("city", self.city),
            state: text_field("state", self.state),
            postal_code: text_field("postal_code", self.postal_code),
            telephone_number: text_field("telephone_number", self.telephone_number),
        }
    }
}

/// Read a registry text field. Numbers are kept in their textual form; any
/// other shape is dropped with a warning.
fn text_field(field: &'static str, value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Null => None,
        other => {
            warn!(field, value = %other, "dropping unreadable registry field");
            None
        }
    }
}

/// First element of a JSON array decoded as `T`; any other shape is treated
/// as absent.
fn first_element<T: DeserializeOwned>(value: Option<Value>) -> Option<T> {
    match value? {
        Value::Array(items) => items
            .into_iter()
            .next()
            .and_then(|item| serde_json::from_value(item).ok()),
        _ => None,
    }
}
