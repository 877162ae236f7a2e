use napi::Result as NapiResult;
use napi_derive::napi;

use consorcio_core::bid::{self, BidInput};
use consorcio_core::schedule;
use consorcio_core::ContractInput;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Contract JSON in, schedule envelope JSON out.
#[napi]
pub fn calculate_schedule(input_json: String) -> NapiResult<String> {
    let input: ContractInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = schedule::calculate_schedule(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Bid JSON (`contract`, `bid_amount`, `strategy`) in, simulation envelope JSON out.
#[napi]
pub fn simulate_bid(input_json: String) -> NapiResult<String> {
    let input: BidInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = bid::simulate_bid(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
