//! Behaviour tests for doctor lookups against a stand-in NPPES registry.
//!
//! Each scenario runs the real HTTP adapter and lookup service against a
//! `wiremock` server scripted with registry payloads.

use std::sync::Arc;
use std::time::Duration;

use medai_backend::domain::{
    LookupResult, NAME_UNAVAILABLE, PHONE_NOT_AVAILABLE, ProviderAddress, ProviderLookupService,
    ProviderRecord,
};
use medai_backend::outbound::nppes::NppesHttpRegistry;
use reqwest::Url;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::{Value, json};
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const REGISTRY_PATH: &str = "/api/";
const DEFAULT_CLIENT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
struct RuntimeHandle(Arc<Runtime>);

#[derive(Clone)]
struct RegistryHandle(Arc<MockServer>);

#[derive(Default, ScenarioState)]
struct DoctorLookupWorld {
    registry: Slot<RegistryHandle>,
    runtime: Slot<RuntimeHandle>,
    client_timeout: Slot<Duration>,
    last_result: Slot<LookupResult>,
}

impl DoctorLookupWorld {
    fn start_registry(&self, template: ResponseTemplate) {
        let runtime = Runtime::new().expect("create runtime");
        let server = runtime.block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path(REGISTRY_PATH))
                .respond_with(template)
                .mount(&server)
                .await;
            server
        });
        self.registry.set(RegistryHandle(Arc::new(server)));
        self.runtime.set(RuntimeHandle(Arc::new(runtime)));
    }

    fn respond_with_results(&self, results: Value) {
        self.start_registry(
            ResponseTemplate::new(200).set_body_json(json!({
                "result_count": results.as_array().map_or(0, Vec::len),
                "results": results
            })),
        );
    }

    fn lookup(&self, specialty: &str, city: Option<&str>, state: Option<&str>) {
        let runtime = self.runtime.get().expect("runtime should be set");
        let registry = self.registry.get().expect("registry should be set");
        let timeout = self.client_timeout.get().unwrap_or(DEFAULT_CLIENT_TIMEOUT);
        let endpoint = Url::parse(&format!("{}{REGISTRY_PATH}", registry.0.uri()))
            .expect("registry endpoint should parse");
        let adapter = NppesHttpRegistry::new(endpoint, timeout).expect("build registry client");
        let service = ProviderLookupService::new(Arc::new(adapter));

        let result = runtime
            .0
            .block_on(service.find_providers(specialty, city, state));
        self.last_result.set(result);
    }

    fn received_query_pairs(&self) -> Vec<(String, String)> {
        let runtime = self.runtime.get().expect("runtime should be set");
        let registry = self.registry.get().expect("registry should be set");
        let requests = runtime
            .0
            .block_on(registry.0.received_requests())
            .expect("request recording should be enabled");
        let request = requests.last().expect("registry should have been called");
        request
            .url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect()
    }

    fn providers(&self) -> Vec<ProviderRecord> {
        match self.last_result.get().expect("lookup should have run") {
            LookupResult::Success(providers) => providers,
            LookupResult::Error(message) => panic!("expected providers, got error: {message}"),
        }
    }
}

fn jane_doe() -> Value {
    json!({
        "number": 1_003_000_126_u64,
        "basic": { "first_name": "Jane", "last_name": "Doe", "credential": "MD" },
        "addresses": [{
            "address_purpose": "LOCATION",
            "address_1": "10 5th Ave",
            "address_2": "",
            "city": "New York",
            "state": "NY",
            "postal_code": "10001",
            "telephone_number": "212-555-0100"
        }],
        "taxonomies": [{ "desc": "Dermatology", "primary": true }]
    })
}

#[fixture]
fn world() -> DoctorLookupWorld {
    DoctorLookupWorld::default()
}

#[given("a registry listing Jane Doe as a dermatologist in New York")]
fn a_registry_listing_jane_doe(world: &DoctorLookupWorld) {
    world.respond_with_results(json!([jane_doe()]));
}

#[given("a registry returning no results")]
fn a_registry_returning_no_results(world: &DoctorLookupWorld) {
    world.respond_with_results(json!([]));
}

#[given("a registry failing with status {status}")]
fn a_registry_failing_with_status(world: &DoctorLookupWorld, status: u16) {
    world.start_registry(ResponseTemplate::new(status).set_body_string("upstream unavailable"));
}

#[given("a registry that answers slower than the client timeout")]
fn a_slow_registry(world: &DoctorLookupWorld) {
    world.client_timeout.set(Duration::from_millis(200));
    world.start_registry(
        ResponseTemplate::new(200)
            .set_body_json(json!({ "result_count": 1, "results": [jane_doe()] }))
            .set_delay(Duration::from_secs(2)),
    );
}

#[given("a registry returning three entries with missing details")]
fn a_registry_returning_entries_with_missing_details(world: &DoctorLookupWorld) {
    world.respond_with_results(json!([
        jane_doe(),
        { "number": 1_003_000_127_u64, "taxonomies": [] },
        {
            "number": 1_003_000_128_u64,
            "basic": { "first_name": "Sam", "last_name": "Lee", "credential": "DO" },
            "addresses": "unavailable",
            "taxonomies": [{ "desc": "Cardiovascular Disease" }]
        }
    ]));
}

#[given("a registry returning a batch with one malformed entry")]
fn a_registry_returning_a_malformed_entry(world: &DoctorLookupWorld) {
    world.respond_with_results(json!([
        jane_doe(),
        { "basic": "not an object" },
        { "basic": { "first_name": "Sam", "last_name": "Lee" } }
    ]));
}

#[when("doctors are looked up for Dermatology in New York, NY")]
fn doctors_are_looked_up_in_new_york(world: &DoctorLookupWorld) {
    world.lookup("Dermatology", Some("New York"), Some("NY"));
}

#[when("doctors are looked up for {specialty} without a location")]
fn doctors_are_looked_up_without_location(world: &DoctorLookupWorld, specialty: String) {
    world.lookup(&specialty, None, None);
}

#[then("the lookup returns exactly one provider")]
fn the_lookup_returns_exactly_one_provider(world: &DoctorLookupWorld) {
    assert_eq!(world.providers().len(), 1);
}

#[then("the lookup returns {count} providers")]
fn the_lookup_returns_providers(world: &DoctorLookupWorld, count: usize) {
    assert_eq!(world.providers().len(), count);
}

#[then("the first provider is Dr. Jane Doe, MD at 10 5th Ave")]
fn the_first_provider_is_jane_doe(world: &DoctorLookupWorld) {
    let providers = world.providers();
    let provider = providers.first().expect("one provider");
    assert_eq!(provider.full_name, "Dr. Jane Doe");
    assert_eq!(provider.credentials, "MD");
    assert_eq!(provider.specialty, "Dermatology");
    assert_eq!(
        provider.address,
        ProviderAddress {
            street: "10 5th Ave".to_owned(),
            city: "New York".to_owned(),
            state: "NY".to_owned(),
            zip: "10001".to_owned(),
        }
    );
    assert_eq!(provider.phone, "212-555-0100");
    assert!(provider.accepting_new_patients);
}

#[then("the registry received the city and state filters")]
fn the_registry_received_location_filters(world: &DoctorLookupWorld) {
    let pairs = world.received_query_pairs();
    for expected in [
        ("version", "2.1"),
        ("enumeration_type", "NPI-1"),
        ("taxonomy_description", "Dermatology"),
        ("city", "New York"),
        ("state", "NY"),
        ("limit", "10"),
    ] {
        assert!(
            pairs
                .iter()
                .any(|(key, value)| key == expected.0 && value == expected.1),
            "missing query pair {expected:?} in {pairs:?}"
        );
    }
}

#[then("the registry received no location filters")]
fn the_registry_received_no_location_filters(world: &DoctorLookupWorld) {
    let pairs = world.received_query_pairs();
    assert!(
        pairs.iter().all(|(key, _)| key != "city" && key != "state"),
        "unexpected location filter in {pairs:?}"
    );
}

#[then("the lookup reports no doctors found for {specialty}")]
fn the_lookup_reports_no_doctors_found(world: &DoctorLookupWorld, specialty: String) {
    assert_eq!(
        world.last_result.get().expect("lookup should have run"),
        LookupResult::no_doctors_found(&specialty)
    );
}

#[then("provider 2 uses the name and phone fallbacks")]
fn provider_two_uses_fallbacks(world: &DoctorLookupWorld) {
    let providers = world.providers();
    let provider = providers.get(1).expect("second provider");
    assert_eq!(provider.full_name, NAME_UNAVAILABLE);
    assert_eq!(provider.specialty, "Cardiology");
    assert_eq!(provider.phone, PHONE_NOT_AVAILABLE);
}

#[then("provider 3 has a blank address")]
fn provider_three_has_a_blank_address(world: &DoctorLookupWorld) {
    let providers = world.providers();
    let provider = providers.get(2).expect("third provider");
    assert_eq!(provider.full_name, "Dr. Sam Lee");
    assert_eq!(provider.address, ProviderAddress::default());
    assert_eq!(provider.phone, PHONE_NOT_AVAILABLE);
}

#[scenario(
    path = "tests/features/doctor_lookup.feature",
    name = "A matching dermatologist is returned in the output contract"
)]
fn a_matching_dermatologist_is_returned(world: DoctorLookupWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/doctor_lookup.feature",
    name = "A specialty-only lookup sends no location filters"
)]
fn a_specialty_only_lookup_sends_no_location_filters(world: DoctorLookupWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/doctor_lookup.feature",
    name = "An empty registry page reports no doctors found"
)]
fn an_empty_registry_page_reports_no_doctors_found(world: DoctorLookupWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/doctor_lookup.feature",
    name = "A failing registry reports no doctors found"
)]
fn a_failing_registry_reports_no_doctors_found(world: DoctorLookupWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/doctor_lookup.feature",
    name = "A slow registry reports no doctors found"
)]
fn a_slow_registry_reports_no_doctors_found(world: DoctorLookupWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/doctor_lookup.feature",
    name = "Entries with missing details are kept with fallbacks"
)]
fn entries_with_missing_details_are_kept(world: DoctorLookupWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/doctor_lookup.feature",
    name = "A malformed entry is skipped without failing the batch"
)]
fn a_malformed_entry_is_skipped(world: DoctorLookupWorld) {
    drop(world);
}
