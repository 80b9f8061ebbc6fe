//! Credential placement on outgoing requests

use devtype_domain::AuthMode;
use reqwest::RequestBuilder;
use secrecy::ExposeSecret;

/// Attach the provider's credential to a request
pub fn authorize(request: RequestBuilder, auth: &AuthMode) -> RequestBuilder {
    match auth {
        AuthMode::None => request,
        AuthMode::Bearer { token } => request.bearer_auth(token.expose_secret()),
        AuthMode::QueryKey { param, key } => {
            request.query(&[(param.as_str(), key.expose_secret())])
        }
    }
}
