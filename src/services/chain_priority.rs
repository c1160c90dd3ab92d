/// Rank assigned to any chain missing from the table.
pub const UNKNOWN_CHAIN_PRIORITY: i32 = -99;

/// Display rank of a chain; higher sorts first.
pub fn chain_priority(chain: &str) -> i32 {
    match chain {
        "Osmosis" => 100,
        "Ethereum" => 50,
        "Arbitrum" => 30,
        "Zilliqa" => 20,
        "Neo" => 20,
        _ => UNKNOWN_CHAIN_PRIORITY,
    }
}
