#![no_main]

// Harness: policy_document
// Focus: loading arbitrary bytes as a policy either fails with an error or
// yields a policy that passes validation.

use compliance_access::AccessPolicy;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(policy) = AccessPolicy::from_json_slice(data) {
        assert!(policy.validate().is_ok());
    }
});
