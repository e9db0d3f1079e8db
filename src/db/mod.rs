pub mod allocations;
pub mod courses;
pub mod disciplines;
pub mod links;
pub mod professors;
pub mod report;
pub mod rooms;
pub mod sections;
pub mod software;
pub mod update;
pub mod users;

pub use allocations::*;
pub use courses::*;
pub use disciplines::*;
pub use links::*;
pub use professors::*;
pub use report::*;
pub use rooms::*;
pub use sections::*;
pub use software::*;
pub use users::*;

use sqlx::{Pool, Sqlite};
use tracing::{info, instrument};

use crate::error::AppError;
use update::Column;

/// Deletes the row keyed by `id` and returns how many rows went away.
#[instrument(skip(pool), fields(table = C::TABLE))]
pub async fn delete_row<C: Column>(pool: &Pool<Sqlite>, id: i64) -> Result<u64, AppError> {
    info!("Deleting row");
    let sql = format!("DELETE FROM {} WHERE {} = ?", C::TABLE, C::KEY);
    let result = sqlx::query(&sql).bind(id).execute(pool).await?;

    Ok(result.rows_affected())
}
