use pizza_catalog::catalog::{Catalog, CatalogError, EntityKind};
use pizza_catalog::lifecycle::CatalogSystem;
use pizza_catalog::model::{
    Pizza, PizzaCreate, PizzaId, Price, Restaurant, RestaurantCreate, RestaurantId,
    RestaurantPizzaCreate, MAX_PRICE, MIN_PRICE,
};
use pizza_catalog::serialization::RestaurantSummary;

async fn restaurant(catalog: &Catalog, name: &str) -> Restaurant {
    catalog
        .create_restaurant(RestaurantCreate {
            name: name.into(),
            address: format!("{name} street"),
        })
        .await
        .expect("Failed to create restaurant")
}

async fn pizza(catalog: &Catalog, name: &str) -> Pizza {
    catalog
        .create_pizza(PizzaCreate {
            name: name.into(),
            ingredients: "Dough, Tomato Sauce, Cheese".into(),
        })
        .await
        .expect("Failed to create pizza")
}

fn offer(restaurant_id: RestaurantId, pizza_id: PizzaId, price: i64) -> RestaurantPizzaCreate {
    RestaurantPizzaCreate {
        price: Price::new(price).expect("price in range"),
        restaurant_id,
        pizza_id,
    }
}

/// Full end-to-end test with both real actors.
#[tokio::test]
async fn test_every_price_in_range_is_accepted() {
    let system = CatalogSystem::new(32);
    let catalog = &system.catalog;

    let karens = restaurant(catalog, "Karen's Pizza Shack").await;
    let emma = pizza(catalog, "Emma").await;

    for price in MIN_PRICE..=MAX_PRICE {
        let added = catalog
            .create_restaurant_pizza(offer(karens.id, emma.id, price))
            .await
            .expect("Failed to create association");
        assert_eq!(i64::from(added.restaurant_pizza.price.get()), price);
    }

    let all = catalog.list_all_restaurant_pizzas().await.unwrap();
    assert_eq!(all.len(), (MAX_PRICE - MIN_PRICE + 1) as usize);

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_round_trip_nests_current_entities() {
    let system = CatalogSystem::new(32);
    let catalog = &system.catalog;

    let kikis = restaurant(catalog, "Kiki's Pizza").await;
    let geri = pizza(catalog, "Geri").await;

    let added = catalog
        .create_restaurant_pizza(offer(kikis.id, geri.id, 10))
        .await
        .unwrap();

    assert_eq!(added.pizza, catalog.get_pizza(geri.id).await.unwrap());
    assert_eq!(
        RestaurantSummary::from(&added.restaurant),
        RestaurantSummary::from(&catalog.get_restaurant(kikis.id).await.unwrap())
    );
    assert_eq!(
        catalog
            .get_restaurant_pizza(added.restaurant_pizza.id)
            .await
            .unwrap(),
        added.restaurant_pizza
    );

    let detail = catalog.restaurant_detail(kikis.id).await.unwrap();
    assert_eq!(detail.restaurant_pizzas.len(), 1);
    assert_eq!(detail.restaurant_pizzas[0].pizza, geri);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_missing_references_create_nothing() {
    let system = CatalogSystem::new(32);
    let catalog = &system.catalog;

    let karens = restaurant(catalog, "Karen's Pizza Shack").await;
    let emma = pizza(catalog, "Emma").await;

    let result = catalog
        .create_restaurant_pizza(offer(karens.id, PizzaId(999), 10))
        .await;
    assert!(matches!(
        result,
        Err(CatalogError::ReferenceNotFound {
            entity: EntityKind::Pizza,
            ..
        })
    ));

    let result = catalog
        .create_restaurant_pizza(offer(RestaurantId(999), emma.id, 10))
        .await;
    assert!(matches!(
        result,
        Err(CatalogError::ReferenceNotFound {
            entity: EntityKind::Restaurant,
            ..
        })
    ));

    // Both missing: the restaurant is reported
    let result = catalog
        .create_restaurant_pizza(offer(RestaurantId(999), PizzaId(999), 10))
        .await
        .unwrap_err();
    assert_eq!(result.to_string(), "Restaurant not found");

    assert!(catalog.list_all_restaurant_pizzas().await.unwrap().is_empty());

    // The failed attempts did not consume association ids
    let added = catalog
        .create_restaurant_pizza(offer(karens.id, emma.id, 10))
        .await
        .unwrap();
    assert_eq!(added.restaurant_pizza.id.0, 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cascade_delete_removes_exactly_its_associations() {
    let system = CatalogSystem::new(32);
    let catalog = &system.catalog;

    let karens = restaurant(catalog, "Karen's Pizza Shack").await;
    let sanjays = restaurant(catalog, "Sanjay's Pizza").await;
    let emma = pizza(catalog, "Emma").await;
    let geri = pizza(catalog, "Geri").await;

    let doomed = [
        catalog.create_restaurant_pizza(offer(karens.id, emma.id, 1)).await.unwrap(),
        catalog.create_restaurant_pizza(offer(karens.id, geri.id, 4)).await.unwrap(),
    ];
    let kept = catalog
        .create_restaurant_pizza(offer(sanjays.id, geri.id, 5))
        .await
        .unwrap();

    catalog.delete_restaurant(karens.id).await.unwrap();

    assert!(matches!(
        catalog.get_restaurant(karens.id).await,
        Err(CatalogError::NotFound {
            entity: EntityKind::Restaurant,
            ..
        })
    ));
    for added in &doomed {
        assert!(matches!(
            catalog.get_restaurant_pizza(added.restaurant_pizza.id).await,
            Err(CatalogError::NotFound {
                entity: EntityKind::RestaurantPizza,
                ..
            })
        ));
    }
    assert_eq!(
        catalog.list_all_restaurant_pizzas().await.unwrap(),
        vec![kept.restaurant_pizza]
    );
    assert!(catalog
        .list_restaurant_pizzas_by_restaurant(karens.id)
        .await
        .unwrap()
        .is_empty());

    // Pizzas are untouched
    assert_eq!(catalog.list_pizzas().await.unwrap().len(), 2);

    // Deleting again reports not found
    assert!(matches!(
        catalog.delete_restaurant(karens.id).await,
        Err(CatalogError::NotFound { .. })
    ));

    system.shutdown().await.unwrap();
}

/// Concurrent association requests all land, each with a distinct id.
#[tokio::test]
async fn test_concurrent_associations() {
    let system = CatalogSystem::new(4);

    let karens = restaurant(&system.catalog, "Karen's Pizza Shack").await;
    let sanjays = restaurant(&system.catalog, "Sanjay's Pizza").await;
    let emma = pizza(&system.catalog, "Emma").await;

    let mut handles = vec![];
    for i in 0..20 {
        let catalog = system.catalog.clone();
        let restaurant_id = if i % 2 == 0 { karens.id } else { sanjays.id };
        handles.push(tokio::spawn(async move {
            catalog
                .create_restaurant_pizza(offer(restaurant_id, emma.id, 1 + i % 30))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().expect("association failed");
    }

    let all = system.catalog.list_all_restaurant_pizzas().await.unwrap();
    let mut ids: Vec<u32> = all.iter().map(|rp| rp.id.0).collect();
    ids.dedup();
    assert_eq!(ids, (1..=20).collect::<Vec<_>>());

    let karens_offers = system
        .catalog
        .list_restaurant_pizzas_by_restaurant(karens.id)
        .await
        .unwrap();
    assert_eq!(karens_offers.len(), 10);

    system.shutdown().await.unwrap();
}
