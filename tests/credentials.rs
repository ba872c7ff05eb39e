use redcsv::{Credentials, ScrapeError, CLIENT_ID_VAR, CLIENT_SECRET_VAR, USER_AGENT_VAR};
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |k| map.get(k).cloned()
}

fn missing_of(err: ScrapeError) -> Vec<&'static str> {
    match err {
        ScrapeError::Configuration { missing } => missing,
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn all_three_present() {
    let creds = Credentials::from_lookup(lookup_from(&[
        (CLIENT_ID_VAR, "id"),
        (CLIENT_SECRET_VAR, "secret"),
        (USER_AGENT_VAR, "test:redcsv:v1 (by u/tester)"),
    ]))
    .unwrap();
    assert_eq!(creds.client_id, "id");
    assert_eq!(creds.client_secret, "secret");
    assert_eq!(creds.user_agent, "test:redcsv:v1 (by u/tester)");
}

/// Every subset of missing variables is reported in full, in declaration order.
#[test]
fn every_missing_variable_is_named() {
    let all = [CLIENT_ID_VAR, CLIENT_SECRET_VAR, USER_AGENT_VAR];
    for mask in 1u8..8 {
        let present: Vec<(&str, &str)> = all
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1u8 << *i) == 0)
            .map(|(_, k)| (*k, "value"))
            .collect();
        let expected: Vec<&str> = all
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1u8 << *i) != 0)
            .map(|(_, k)| *k)
            .collect();

        let err = Credentials::from_lookup(lookup_from(&present)).unwrap_err();
        let msg = err.to_string();
        for name in &expected {
            assert!(msg.contains(name), "message {msg:?} should name {name}");
        }
        assert_eq!(missing_of(err), expected, "mask {mask:03b}");
    }
}

#[test]
fn empty_values_count_as_missing() {
    let err = Credentials::from_lookup(lookup_from(&[
        (CLIENT_ID_VAR, ""),
        (CLIENT_SECRET_VAR, "secret"),
        (USER_AGENT_VAR, ""),
    ]))
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Missing Reddit credentials. Set environment variables: REDDIT_CLIENT_ID, REDDIT_USER_AGENT"
    );
}

#[test]
fn debug_output_hides_secret() {
    let creds = Credentials::from_lookup(lookup_from(&[
        (CLIENT_ID_VAR, "id"),
        (CLIENT_SECRET_VAR, "hunter2"),
        (USER_AGENT_VAR, "ua"),
    ]))
    .unwrap();
    let dbg = format!("{creds:?}");
    assert!(!dbg.contains("hunter2"));
    assert!(dbg.contains("<redacted>"));
}

/// The only test in this binary that touches process environment.
#[test]
fn from_env_reads_process_environment() {
    std::env::set_var(CLIENT_ID_VAR, "env-id");
    std::env::set_var(CLIENT_SECRET_VAR, "env-secret");
    std::env::remove_var(USER_AGENT_VAR);

    let err = Credentials::from_env().unwrap_err();
    assert_eq!(missing_of(err), vec![USER_AGENT_VAR]);

    std::env::set_var(USER_AGENT_VAR, "env-ua");
    let creds = Credentials::from_env().unwrap();
    assert_eq!(creds.client_id, "env-id");
    assert_eq!(creds.user_agent, "env-ua");
}
