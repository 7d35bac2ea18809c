#![no_main]

use libfuzzer_sys::fuzz_target;
use unique_bid::{BidError, BidService};
use unique_bid_server::api::BidRequest;

// Fuzz the bid request body parsing and validation
fuzz_target!(|data: &[u8]| {
    let Ok(request) = serde_json::from_slice::<BidRequest>(data) else {
        return;
    };

    let service = BidService::new();
    let valid = !request.user_id.trim().is_empty() && request.amount > 0;

    // Any parsed body is either recorded or rejected, never a panic
    match service.submit_bid(request.user_id, request.amount) {
        Ok(lowest) => {
            assert!(valid);
            assert_eq!(lowest, Some(request.amount as u64));
        }
        Err(BidError::InvalidArgument(_)) => {
            assert!(!valid);
            assert_eq!(service.stats().total_bids, 0);
        }
        Err(err) => panic!("unexpected error: {err}"),
    }
});
