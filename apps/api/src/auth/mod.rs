// Credential management: password hashing, access tokens, auth endpoints.
// Nothing in here touches the generative backend.

pub mod handlers;
pub mod password;
pub mod token;
