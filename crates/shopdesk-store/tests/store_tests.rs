// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use shopdesk_app::{
    CustomerFormInput, CustomerId, ListRecord, ListState, OrderFormInput, OrderId, OrderStatus,
    ProductFormInput, ProductId, ProductStatus, SettingKey, SettingValue,
};
use shopdesk_store::Store;
use time::{Date, Month};

fn demo_store() -> Result<Store> {
    let mut store = Store::new();
    store.seed_demo_data()?;
    Ok(store)
}

#[test]
fn demo_seed_has_unique_ids_and_expected_counts() -> Result<()> {
    let store = demo_store()?;
    assert_eq!(store.list_orders().len(), 5);
    assert_eq!(store.list_products().len(), 4);
    assert_eq!(store.list_customers().len(), 4);
    assert!(store.get_order(&OrderId::new("ORD003")).is_some());
    assert!(store.get_product(&ProductId::new("PROD002")).is_some());
    assert!(store.get_customer(&CustomerId::new("CUST004")).is_some());
    Ok(())
}

#[test]
fn seeding_duplicate_ids_is_rejected() {
    let records = shopdesk_testkit::orders(3, 5);
    let mut duplicated = records.clone();
    duplicated.push(records[0].clone());
    let result = Store::with_records(duplicated, Vec::new(), Vec::new());
    assert!(result.is_err());
}

#[test]
fn product_price_edit_round_trips() -> Result<()> {
    let mut store = demo_store()?;
    let id = ProductId::new("PROD002");
    let before = store.get_product(&id).expect("PROD002 seeded");
    assert_eq!(before.price_cents, 79_50);

    let mut draft = before.draft();
    draft.price_cents = 69_99;
    assert!(store.update_product(&id, &draft)?);

    let after = store.get_product(&id).expect("PROD002 still present");
    assert_eq!(after.price_cents, 69_99);
    assert_eq!(after.id, before.id);
    assert_eq!(after.name, before.name);
    assert_eq!(after.category, before.category);
    assert_eq!(after.stock, before.stock);
    assert_eq!(after.status, before.status);
    assert_eq!(store.list_products().len(), 4);
    Ok(())
}

#[test]
fn commit_through_the_list_machine_reaches_the_store() -> Result<()> {
    let mut store = demo_store()?;
    let products = store.list_products();
    let target = products
        .iter()
        .find(|product| product.id.as_str() == "PROD002")
        .expect("PROD002 seeded");

    let mut list = ListState::new(10);
    list.open_edit(Some(target));
    let mut draft = list.draft().cloned().expect("edit overlay has a draft");
    draft.price_cents = 69_99;
    list.set_draft(draft);

    let request = list.commit_edit().expect("edit overlay commits");
    let id = request.id.expect("existing record keeps its id");
    assert!(store.update_product(&id, &request.draft)?);
    assert!(list.is_browsing());

    // A fresh read with an empty query shows the mutated record under the
    // same identifier.
    let records = store.list_products();
    let view = list.page_view(&records);
    let reread = view
        .visible
        .iter()
        .find(|product| product.id == id)
        .expect("record still on the page");
    assert_eq!(reread.price_cents, 69_99);
    Ok(())
}

#[test]
fn new_record_commit_appends_exactly_one_with_a_fresh_id() -> Result<()> {
    let mut store = demo_store()?;
    let before = store.list_products().len();

    let input = ProductFormInput {
        name: "Bamboo Desk Organizer".to_owned(),
        description: String::new(),
        category: "Home Goods".to_owned(),
        price_cents: 32_00,
        stock: 40,
        status: ProductStatus::Draft,
        image_url: String::new(),
    };
    let id = store.create_product(&input)?;

    assert_eq!(id.as_str(), "PROD005");
    assert_eq!(store.list_products().len(), before + 1);
    let created = store.get_product(&id).expect("created product present");
    assert_eq!(created.name, "Bamboo Desk Organizer");
    Ok(())
}

#[test]
fn id_allocation_skips_past_seeded_ids() -> Result<()> {
    let orders = shopdesk_testkit::orders(25, 7);
    let mut store = Store::with_records(orders, Vec::new(), Vec::new())?;

    let mut input = OrderFormInput::blank();
    input.customer_name = "Noah Williams".to_owned();
    input.customer_email = "noah@example.com".to_owned();
    input.placed_on = Date::from_calendar_date(2026, Month::June, 16)?;
    let id = store.create_order(&input)?;
    assert_eq!(id.as_str(), "ORD026");
    Ok(())
}

#[test]
fn unmatched_identifier_update_is_a_no_op() -> Result<()> {
    let mut store = demo_store()?;
    let before = store.list_products();

    let ghost = ProductId::new("PROD999");
    let input = ProductFormInput {
        name: "Ghost Product".to_owned(),
        description: String::new(),
        category: "Apparel".to_owned(),
        price_cents: 10_00,
        stock: 1,
        status: ProductStatus::Draft,
        image_url: String::new(),
    };
    assert!(!store.update_product(&ghost, &input)?);
    assert_eq!(store.list_products(), before);
    Ok(())
}

#[test]
fn invalid_form_input_never_reaches_the_store() -> Result<()> {
    let mut store = demo_store()?;
    let before = store.list_products().len();

    let input = ProductFormInput::blank();
    assert!(store.create_product(&input).is_err());
    assert_eq!(store.list_products().len(), before);
    Ok(())
}

#[test]
fn order_status_update_preserves_identity() -> Result<()> {
    let mut store = demo_store()?;
    let id = OrderId::new("ORD004");
    let before = store.get_order(&id).expect("ORD004 seeded");
    assert_eq!(before.status, OrderStatus::Pending);

    let mut draft = before.draft();
    draft.status = OrderStatus::Processing;
    assert!(store.update_order(&id, &draft)?);

    let after = store.get_order(&id).expect("ORD004 still present");
    assert_eq!(after.status, OrderStatus::Processing);
    assert_eq!(after.total_cents, before.total_cents);
    assert_eq!(store.list_orders().len(), 5);
    Ok(())
}

#[test]
fn customer_update_preserves_join_date_and_order_stats() -> Result<()> {
    let mut store = demo_store()?;
    let id = CustomerId::new("CUST001");
    let before = store.get_customer(&id).expect("CUST001 seeded");

    let mut draft = before.draft();
    draft.phone = "555-9999".to_owned();
    assert!(store.update_customer(&id, &draft)?);

    let after = store.get_customer(&id).expect("CUST001 still present");
    assert_eq!(after.phone, "555-9999");
    assert_eq!(after.joined_on, before.joined_on);
    assert_eq!(after.total_orders, before.total_orders);
    assert_eq!(after.total_spent_cents, before.total_spent_cents);
    Ok(())
}

#[test]
fn new_customer_starts_with_zeroed_order_stats() -> Result<()> {
    let mut store = demo_store()?;
    let mut input = CustomerFormInput::blank();
    input.name = "Robin Price".to_owned();
    input.email = "robin.price@example.com".to_owned();

    let id = store.create_customer(&input)?;
    assert_eq!(id.as_str(), "CUST005");
    let created = store.get_customer(&id).expect("created customer present");
    assert_eq!(created.total_orders, 0);
    assert_eq!(created.total_spent_cents, 0);
    assert_eq!(created.last_order_on, None);
    Ok(())
}

#[test]
fn dashboard_revenue_excludes_cancelled_orders() -> Result<()> {
    let store = demo_store()?;
    let totals = store.dashboard_totals();
    // ORD005 (cancelled, $50.75) is excluded from the sum.
    assert_eq!(totals.revenue_cents, 150_00 + 200_50 + 75_20 + 300_00);
    assert_eq!(totals.orders, 5);
    assert_eq!(totals.customers, 4);
    assert_eq!(totals.published_products, 3);
    Ok(())
}

#[test]
fn monthly_revenue_buckets_anchor_at_the_latest_order() -> Result<()> {
    let store = demo_store()?;
    let buckets = store.monthly_revenue(6);
    assert_eq!(buckets.len(), 6);
    assert_eq!(buckets[5].label, "Oct");
    assert_eq!(buckets[5].revenue_cents, 150_00 + 200_50 + 75_20 + 300_00);
    assert!(buckets[..5].iter().all(|bucket| bucket.revenue_cents == 0));
    assert_eq!(buckets[0].label, "May");
    Ok(())
}

#[test]
fn monthly_revenue_is_empty_without_orders() {
    let store = Store::new();
    assert!(store.monthly_revenue(6).is_empty());
}

#[test]
fn recent_orders_are_newest_first() -> Result<()> {
    let store = demo_store()?;
    let recent = store.recent_orders(3);
    let ids: Vec<&str> = recent.iter().map(|order| order.id.as_str()).collect();
    assert_eq!(ids, vec!["ORD001", "ORD002", "ORD003"]);
    Ok(())
}

#[test]
fn settings_reject_values_of_the_wrong_kind() -> Result<()> {
    let mut store = demo_store()?;
    let error = store
        .update_setting(
            SettingKey::DarkMode,
            &SettingValue::Text("midnight".to_owned()),
        )
        .expect_err("text value for a bool key should fail");
    assert!(error.to_string().contains("boolean"));

    store.update_setting(SettingKey::DarkMode, &SettingValue::Bool(true))?;
    assert_eq!(
        store.get_setting(SettingKey::DarkMode),
        Some(&SettingValue::Bool(true))
    );
    Ok(())
}

#[test]
fn store_name_setting_feeds_the_header() -> Result<()> {
    let mut store = demo_store()?;
    assert_eq!(store.store_name(), "Acme Store");

    store.update_setting(
        SettingKey::StoreName,
        &SettingValue::Text("Northwind".to_owned()),
    )?;
    assert_eq!(store.store_name(), "Northwind");

    store.update_setting(SettingKey::StoreName, &SettingValue::Text(String::new()))?;
    assert_eq!(store.store_name(), "Shopdesk");
    Ok(())
}

#[test]
fn mutations_append_to_the_activity_feed() -> Result<()> {
    let mut store = demo_store()?;
    let before = store.recent_activity(50).len();

    let mut input = CustomerFormInput::blank();
    input.name = "Robin Price".to_owned();
    input.email = "robin.price@example.com".to_owned();
    store.create_customer(&input)?;

    let activity = store.recent_activity(50);
    assert_eq!(activity.len(), before + 1);
    assert!(activity[0].description.contains("CUST005"));
    Ok(())
}

#[test]
fn data_dump_serializes_every_collection() -> Result<()> {
    let store = demo_store()?;
    let dump = store.data_dump()?;
    assert!(dump.contains("ORD001"));
    assert!(dump.contains("PROD004"));
    assert!(dump.contains("CUST003"));
    assert!(dump.contains("Acme Store"));
    Ok(())
}
