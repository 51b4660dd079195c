pub mod analyze;
pub mod preview;

pub async fn health() -> &'static str {
    "ok"
}
