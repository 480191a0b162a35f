///! Tests for the canonical query-parameter contract and the parse
///! boundary that turns URL-style key/value pairs back into filters.
///!
///! Run with: `cargo test --test query_params_test`
use jobboard_client::models::filters::{
    FilterChange, FilterParseError, JobFilterPatch, JobFilters, JobType, OrderBy, OrderDirection,
};
use jobboard_client::store::JobFilterStore;

fn pairs_of(store: &JobFilterStore) -> Vec<(String, String)> {
    store
        .query_params()
        .pairs()
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn fully_filtered_state_emits_every_non_default_field() {
    let mut store = JobFilterStore::new();
    store.set_filters(JobFilterPatch {
        location: Some("New York".to_string()),
        job_type: Some(Some(JobType::FullTime)),
        search_term: Some("developer".to_string()),
        limit: Some(10),
        order_by: Some(OrderBy::Title),
        order_direction: Some(OrderDirection::Asc),
        ..JobFilterPatch::default()
    });
    store.set_page(2);

    assert_eq!(
        pairs_of(&store),
        vec![
            ("location".to_string(), "New York".to_string()),
            ("jobType".to_string(), "Full-Time".to_string()),
            ("search".to_string(), "developer".to_string()),
            ("page".to_string(), "2".to_string()),
            ("limit".to_string(), "10".to_string()),
            ("orderBy".to_string(), "title".to_string()),
            ("orderDirection".to_string(), "asc".to_string()),
        ]
    );
}

#[test]
fn cleared_state_emits_only_what_changed_since() {
    let mut store = JobFilterStore::new();
    store.set_filters(JobFilterPatch {
        location: Some("New York".to_string()),
        limit: Some(10),
        ..JobFilterPatch::default()
    });

    store.clear_filters();
    store.apply(FilterChange::Location("San Francisco".to_string()));

    assert_eq!(
        pairs_of(&store),
        vec![("location".to_string(), "San Francisco".to_string())]
    );
}

#[test]
fn identical_states_serialize_identically_regardless_of_path() {
    let mut a = JobFilterStore::new();
    a.set_filters(JobFilterPatch {
        search_term: Some("rust".to_string()),
        job_type: Some(Some(JobType::Contract)),
        ..JobFilterPatch::default()
    });

    let mut b = JobFilterStore::new();
    b.apply(FilterChange::JobType(Some(JobType::Contract)));
    b.apply(FilterChange::Location("gone".to_string()));
    b.apply(FilterChange::Location(String::new()));
    b.apply(FilterChange::SearchTerm("rust".to_string()));

    assert_eq!(
        a.query_params().as_query_string(),
        b.query_params().as_query_string()
    );
    assert_eq!(
        a.query_params().as_query_string(),
        "jobType=Contract&search=rust"
    );
}

#[test]
fn query_params_round_trip_through_the_parse_boundary() {
    let filters = JobFilters {
        location: "Remote".to_string(),
        job_type: Some(JobType::PartTime),
        search_term: "backend".to_string(),
        page: 3,
        limit: 50,
        order_by: OrderBy::Company,
        order_direction: OrderDirection::Asc,
    };

    let params = filters.query_params();
    let pairs: Vec<(&str, &str)> = params
        .pairs()
        .iter()
        .map(|(k, v)| (*k, v.as_str()))
        .collect();
    let parsed = JobFilters::from_query_pairs(pairs).unwrap();

    assert_eq!(parsed, filters);
}

#[test]
fn parse_boundary_defaults_missing_fields() {
    let parsed = JobFilters::from_query_pairs(vec![("location", "Oslo")]).unwrap();
    assert_eq!(parsed.location, "Oslo");
    assert_eq!(parsed.page, 1);
    assert_eq!(parsed.limit, 20);
    assert_eq!(parsed.order_by, OrderBy::CreatedAt);
}

#[test]
fn parse_boundary_ignores_unknown_keys() {
    let parsed = JobFilters::from_query_pairs(vec![("utm_source", "mail"), ("page", "2")]).unwrap();
    assert_eq!(parsed.page, 2);
}

#[test]
fn parse_boundary_rejects_bad_values() {
    assert_eq!(
        JobFilters::from_query_pairs(vec![("jobType", "Freelance")]),
        Err(FilterParseError::UnknownJobType("Freelance".to_string()))
    );
    assert_eq!(
        JobFilters::from_query_pairs(vec![("orderBy", "salary")]),
        Err(FilterParseError::UnknownOrderBy("salary".to_string()))
    );
    assert_eq!(
        JobFilters::from_query_pairs(vec![("orderDirection", "up")]),
        Err(FilterParseError::UnknownOrderDirection("up".to_string()))
    );
    assert_eq!(
        JobFilters::from_query_pairs(vec![("page", "0")]),
        Err(FilterParseError::InvalidPage("0".to_string()))
    );
    assert_eq!(
        JobFilters::from_query_pairs(vec![("page", "two")]),
        Err(FilterParseError::InvalidPage("two".to_string()))
    );
    assert_eq!(
        JobFilters::from_query_pairs(vec![("limit", "-5")]),
        Err(FilterParseError::InvalidLimit("-5".to_string()))
    );
}

#[test]
fn enum_labels_match_their_wire_forms() {
    assert_eq!(JobType::FullTime.to_string(), "Full-Time");
    assert_eq!("Part-Time".parse::<JobType>().unwrap(), JobType::PartTime);
    assert_eq!(OrderBy::UpdatedAt.to_string(), "updatedAt");
    assert_eq!("desc".parse::<OrderDirection>().unwrap(), OrderDirection::Desc);
}
