// src/domain/request_code.rs

use crate::domain::request::{Gender, RequesterKind};

fn prefix(kind: RequesterKind) -> &'static str {
    match kind {
        RequesterKind::StudentMale => "SMB",
        RequesterKind::StudentFemale => "SFM",
        RequesterKind::Staff => "STF",
    }
}

/// Human-readable code shown to the requester, e.g. `SMB-M-483920`.
///
/// Display only: the suffix is the last six digits of the Unix time in
/// milliseconds, so two codes can collide. Lookups always use the backend id.
pub fn build_request_code(kind: RequesterKind, gender: Gender, now_millis: i64) -> String {
    let suffix = now_millis.rem_euclid(1_000_000);
    format!("{}-{}-{:06}", prefix(kind), gender.letter(), suffix)
}
