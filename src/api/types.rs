//! Shared helpers for the API layer.

/// Generate a random bearer token (URL-safe base64, 32 bytes of entropy).
///
/// Tokens are opaque to this service: they are handed to the client at
/// signup/login and carried by the frontend; predictions identify the user
/// by the already-authenticated `userId` reference instead.
pub fn generate_token() -> String {
    use base64::Engine;
    let bytes: [u8; 32] = rand::random();
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}
