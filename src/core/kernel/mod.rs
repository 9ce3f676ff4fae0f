/// Transport and signing kernel.
///
/// This module contains the exchange-agnostic plumbing every endpoint call
/// funnels through, and nothing endpoint-specific:
///
/// - `query`: ordered parameter bag, the two canonicalization forms
///   (insertion-order bag vs. sorted list) and URL assembly
/// - `signer`: signature base-string construction and the HMAC digest,
///   plus the `Signer` seam that turns a canonical string into headers
/// - `rest`: the `RestClient` HTTP boundary and its reqwest implementation
/// - `envelope`: the `{code, message, data}` wrapper and its unwrapping
///   into payloads or typed failures
///
/// The two canonicalization forms deliberately do not agree on ordering;
/// call sites pick one by name (`sign_from_bag` vs. `sign_from_sorted_list`)
/// rather than through overload resolution.
pub mod envelope;
pub mod query;
pub mod rest;
pub mod signer;

pub use envelope::{unwrap_action, unwrap_envelope, ApiEnvelope};
pub use query::{build_url, build_url_sorted, sorted_query_string, QueryParams};
pub use rest::{ReqwestRest, RestClient, RestClientBuilder, RestClientConfig};
pub use signer::{
    sign_canonical, sign_from_bag, sign_from_sorted_list, CoinexSigner, Signer, USER_AGENT,
};
