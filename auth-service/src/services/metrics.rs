//! Account counters exported on /metrics alongside the HTTP metrics.

use metrics::counter;

pub fn record_signup(client: &str, outcome: &'static str) {
    counter!(
        "auth_signups_total",
        "client" => client.to_string(),
        "outcome" => outcome
    )
    .increment(1);
}

pub fn record_signin(client: &str, outcome: &'static str) {
    counter!(
        "auth_signins_total",
        "client" => client.to_string(),
        "outcome" => outcome
    )
    .increment(1);
}
