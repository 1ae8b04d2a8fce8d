#![allow(dead_code)]

use integration_tests::harness::CapturedEvent;
use wirenorm_core::conf::{NormalizationConfig, load_config_str};
use wirenorm_core::normalization::{NormalizationOutcome, NormalizedRequest};

pub fn config(hcl: &str) -> NormalizationConfig {
    load_config_str(hcl).expect("invalid test config")
}

pub fn expect_normalized(outcome: NormalizationOutcome<NormalizedRequest>) -> NormalizedRequest {
    match outcome {
        NormalizationOutcome::Accept(request) | NormalizationOutcome::Rewrite { value: request, .. } => {
            request
        }
        NormalizationOutcome::Reject { reason } => panic!("unexpected reject: {reason}"),
    }
}

pub fn events_with_message<'a>(events: &'a [CapturedEvent], message: &str) -> Vec<&'a CapturedEvent> {
    events.iter().filter(|e| e.message() == message).collect()
}
