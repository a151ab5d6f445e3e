/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// Loaded tables. Every request recomputes its report from these.
    pub dashboard: ecommerce_dashboard::AsyncDashboard,
}
