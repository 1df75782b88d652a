//! Fuzz target for the content audit engine.
//!
//! Goal: auditing **never panics** on any input. Malformed content must come
//! back as a single parse issue, and status must agree with the issue list.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_audit
//! ```

#![no_main]

use blockaudit_types::{AuditStatus, RuleId};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Limit input size to avoid OOM and keep fuzzing fast
    if data.len() > 64 * 1024 {
        return;
    }

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let result = blockaudit_domain::audit(text, RuleId::ALL.iter().map(|r| r.as_str()));

    assert_eq!(
        result.status == AuditStatus::Fail,
        !result.issues.is_empty(),
        "status must be Fail exactly when issues exist"
    );
});
