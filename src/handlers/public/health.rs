/// GET /api/health - static liveness string, never touches the database
pub async fn health_get() -> &'static str {
    "Backend is running!"
}
