use super::*;

/// Tests that units come back in display order.
///
/// Expected: Ok with units sorted by `order_index`
#[tokio::test]
async fn orders_by_order_index() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let third = factory::unit::UnitFactory::new(db).order_index(3).build().await?;
    let first = factory::unit::UnitFactory::new(db).order_index(1).build().await?;
    let second = factory::unit::UnitFactory::new(db).order_index(2).build().await?;

    let units = UnitRepository::new(db).get_all().await?;
    let ids: Vec<i32> = units.iter().map(|u| u.id).collect();

    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}
