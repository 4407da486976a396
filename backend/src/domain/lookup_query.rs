//! Validated lookup inputs.

use thiserror::Error;

/// Validation errors raised while building a [`LookupQuery`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupQueryError {
    /// The specialty was empty once trimmed of whitespace.
    #[error("specialty must not be empty")]
    EmptySpecialty,
}

/// Optional city/state pair narrowing a registry search.
///
/// ## Invariants
/// - At least one of `city` or `state` is present.
/// - Present values are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationFilter {
    city: Option<String>,
    state: Option<String>,
}

impl LocationFilter {
    /// Build a filter, returning `None` when neither value carries text.
    ///
    /// # Examples
    /// ```
    /// use medai_backend::domain::LocationFilter;
    ///
    /// assert!(LocationFilter::new(None, Some("  ")).is_none());
    /// let filter = LocationFilter::new(Some("Boston"), None).expect("city set");
    /// assert_eq!(filter.city(), Some("Boston"));
    /// assert_eq!(filter.state(), None);
    /// ```
    pub fn new(city: Option<&str>, state: Option<&str>) -> Option<Self> {
        let city = non_blank(city);
        let state = non_blank(state);
        if city.is_none() && state.is_none() {
            return None;
        }
        Some(Self { city, state })
    }

    /// City equality filter.
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// State equality filter.
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }
}

/// Specialty plus optional location for one provider lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupQuery {
    specialty: String,
    location: Option<LocationFilter>,
}

impl LookupQuery {
    /// Validate raw lookup inputs.
    ///
    /// # Errors
    ///
    /// Returns [`LookupQueryError::EmptySpecialty`] when `specialty` is blank.
    ///
    /// # Examples
    /// ```
    /// use medai_backend::domain::{LookupQuery, LookupQueryError};
    ///
    /// let query = LookupQuery::new(" Cardiology ", None, None).expect("valid");
    /// assert_eq!(query.specialty(), "Cardiology");
    /// assert!(query.location().is_none());
    /// assert_eq!(
    ///     LookupQuery::new("", Some("Boston"), None),
    ///     Err(LookupQueryError::EmptySpecialty)
    /// );
    /// ```
    pub fn new(
        specialty: &str,
        city: Option<&str>,
        state: Option<&str>,
    ) -> Result<Self, LookupQueryError> {
        let specialty = specialty.trim();
        if specialty.is_empty() {
            return Err(LookupQueryError::EmptySpecialty);
        }
        Ok(Self {
            specialty: specialty.to_owned(),
            location: LocationFilter::new(city, state),
        })
    }

    /// Taxonomy description searched for.
    pub fn specialty(&self) -> &str {
        self.specialty.as_str()
    }

    /// Location filter, absent when the search is nationwide.
    pub fn location(&self) -> Option<&LocationFilter> {
        self.location.as_ref()
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}
