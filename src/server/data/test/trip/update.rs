use super::*;

/// Tests a partial trip edit.
///
/// Expected: Ok(Some) with new cargo and destination, origin unchanged
#[tokio::test]
async fn updates_provided_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trip_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_vehicle, _driver, trip) = factory::helpers::create_trip_with_dependencies(db).await?;

    let repo = TripRepository::new(db);
    let updated = repo
        .update(
            trip.id,
            UpdateTripParams {
                cargo_weight_kg: Some(750.0),
                destination: Some("Harbour".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.cargo_weight_kg, 750.0);
    assert_eq!(updated.destination.as_deref(), Some("Harbour"));
    assert_eq!(updated.origin, trip.origin);
    assert_eq!(updated.status, TripStatus::Draft);

    Ok(())
}

/// Tests editing a trip that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trip_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TripRepository::new(db);
    let result = repo.update(12, UpdateTripParams::default()).await?;

    assert!(result.is_none());

    Ok(())
}
