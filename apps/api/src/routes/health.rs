/// GET /
/// Plain-text liveness string.
pub async fn home_handler() -> &'static str {
    "Backend is running! 🚀"
}
