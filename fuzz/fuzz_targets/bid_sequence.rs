#![no_main]

use libfuzzer_sys::fuzz_target;
use std::collections::{BTreeMap, BTreeSet};
use unique_bid::BidService;

fuzz_target!(|data: &[u8]| {
    let service = BidService::new();
    let mut bidders: BTreeMap<i64, BTreeSet<u8>> = BTreeMap::new();

    // Each 3-byte chunk is one bid: user byte, then a small amount
    for chunk in data.chunks_exact(3).take(10_000) {
        let user = chunk[0] % 16;
        let amount = i64::from(u16::from_le_bytes([chunk[1], chunk[2]]) % 512);

        let result = service.submit_bid(format!("user-{user}"), amount);

        if amount == 0 {
            assert!(result.is_err());
            continue;
        }

        bidders.entry(amount).or_default().insert(user);
        let expected = bidders
            .iter()
            .find(|(_, users)| users.len() == 1)
            .map(|(&amount, _)| amount as u64);

        assert_eq!(result.ok().flatten(), expected);
    }

    assert!(service.check_consistency().is_ok());
});
