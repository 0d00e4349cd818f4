use metrics::counter;

pub fn record_prescription(operation: &'static str, outcome: &'static str) {
    counter!(
        "prescriptions_total",
        "operation" => operation,
        "outcome" => outcome
    )
    .increment(1);
}
