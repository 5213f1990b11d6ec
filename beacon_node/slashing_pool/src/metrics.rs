pub use metrics::*;
use std::sync::LazyLock;

pub static PROPOSER_SLASHINGS_IN_POOL: LazyLock<Result<IntGauge>> = LazyLock::new(|| {
    try_create_int_gauge(
        "slashing_pool_proposer_slashings",
        "Number of proposer slashings pending block inclusion",
    )
});
pub static ATTESTER_SLASHINGS_IN_POOL: LazyLock<Result<IntGauge>> = LazyLock::new(|| {
    try_create_int_gauge(
        "slashing_pool_attester_slashings",
        "Number of attester slashings pending block inclusion",
    )
});
pub static PROPOSER_SLASHINGS_INSERTED: LazyLock<Result<IntCounter>> = LazyLock::new(|| {
    try_create_int_counter(
        "slashing_pool_proposer_slashings_inserted_total",
        "Count of proposer slashings accepted into the pool",
    )
});
pub static PROPOSER_SLASHINGS_REJECTED: LazyLock<Result<IntCounter>> = LazyLock::new(|| {
    try_create_int_counter(
        "slashing_pool_proposer_slashings_rejected_total",
        "Count of proposer slashings rejected at insertion",
    )
});
pub static ATTESTER_SLASHINGS_INSERTED: LazyLock<Result<IntCounter>> = LazyLock::new(|| {
    try_create_int_counter(
        "slashing_pool_attester_slashings_inserted_total",
        "Count of attester slashings accepted into the pool",
    )
});
pub static ATTESTER_SLASHINGS_REJECTED: LazyLock<Result<IntCounter>> = LazyLock::new(|| {
    try_create_int_counter(
        "slashing_pool_attester_slashings_rejected_total",
        "Count of attester slashings rejected at insertion",
    )
});
pub static PENDING_RETRIEVAL_TIME: LazyLock<Result<Histogram>> = LazyLock::new(|| {
    try_create_histogram(
        "slashing_pool_pending_retrieval_time",
        "Time to filter pending slashings for block inclusion",
    )
});
