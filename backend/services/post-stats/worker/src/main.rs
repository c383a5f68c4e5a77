// backend/services/post-stats/worker/src/main.rs

use post_stats::infrastructure::bootstrap::run_post_stats_worker;
use shared_kernel::errors::AppResult;

#[tokio::main]
async fn main() -> AppResult<()> {
    run_post_stats_worker().await
}
