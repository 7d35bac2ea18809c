//! HTTP API endpoints for the bid service

mod bids;
mod error;
mod models;

pub use bids::{get_all_bids, get_lowest_unique_bid, place_bid, INTERNAL_KEY_HEADER};
pub use error::ApiError;
pub use models::{
    AmountBiddersResponse, BidRequest, BidResponse, BidsSnapshotResponse, StatsResponse,
};
