//! Outbound lead delivery.
//!
//! The contact form is the only network-facing feature of the site. The
//! configured webhook (typically an Apps Script endpoint feeding a
//! spreadsheet) is fed one JSON object per submission in `no-cors` mode,
//! which makes delivery one-way: the response is opaque and never read.

use common::model::lead::{DeliveryResult, LeadSubmission};
use gloo_net::http::Request;
use web_sys::RequestMode;

/// Posts `lead` to `webhook_url`. `Delivered` means the request was
/// dispatched without a transport error, nothing stronger.
pub async fn submit_lead(webhook_url: &str, lead: &LeadSubmission) -> DeliveryResult {
    let request = match Request::post(webhook_url)
        .mode(RequestMode::NoCors)
        .json(lead)
    {
        Ok(request) => request,
        Err(err) => return DeliveryResult::Failed(err.to_string()),
    };

    match request.send().await {
        Ok(_) => DeliveryResult::Delivered,
        Err(err) => DeliveryResult::Failed(err.to_string()),
    }
}
