//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{lesson::LessonFactory, unit::create_unit};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a unit with `count` published lessons ordered 1..=count.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of lessons to attach to the unit
///
/// # Returns
/// - `Ok((unit, lessons))` - The unit and its lessons in order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_unit_with_lessons(
    db: &DatabaseConnection,
    count: i32,
) -> Result<(entity::unit::Model, Vec<entity::lesson::Model>), DbErr> {
    let unit = create_unit(db).await?;

    let mut lessons = Vec::with_capacity(count.max(0) as usize);
    for order in 1..=count {
        let lesson = LessonFactory::new(db)
            .unit_id(unit.id)
            .order_index(order)
            .build()
            .await?;
        lessons.push(lesson);
    }

    Ok((unit, lessons))
}
