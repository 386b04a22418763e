// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use shopdesk_app::{FormPayload, SettingKey, SettingValue, TabKind};
use shopdesk_store::Store;
use shopdesk_tui::{AppRuntime, CommitOutcome, DashboardSnapshot, TabSnapshot};

const TREND_MONTHS: usize = 6;
const RECENT_ORDER_LIMIT: usize = 3;
const ACTIVITY_LIMIT: usize = 8;

pub struct StoreRuntime {
    store: Store,
}

impl StoreRuntime {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

impl AppRuntime for StoreRuntime {
    fn load_dashboard(&mut self) -> Result<DashboardSnapshot> {
        Ok(DashboardSnapshot {
            totals: self.store.dashboard_totals(),
            monthly: self.store.monthly_revenue(TREND_MONTHS),
            recent_orders: self.store.recent_orders(RECENT_ORDER_LIMIT),
            activity: self.store.recent_activity(ACTIVITY_LIMIT),
        })
    }

    fn load_tab_snapshot(&mut self, tab: TabKind) -> Result<Option<TabSnapshot>> {
        let snapshot = match tab {
            TabKind::Dashboard => None,
            TabKind::Orders => Some(TabSnapshot::Orders(self.store.list_orders())),
            TabKind::Products => Some(TabSnapshot::Products(self.store.list_products())),
            TabKind::Customers => Some(TabSnapshot::Customers(self.store.list_customers())),
            TabKind::Settings => Some(TabSnapshot::Settings(self.store.list_settings())),
        };
        Ok(snapshot)
    }

    fn submit_form(&mut self, payload: &FormPayload) -> Result<CommitOutcome> {
        payload.validate()?;

        let outcome = match payload {
            FormPayload::Order { id: Some(id), input } => {
                if self.store.update_order(id, input)? {
                    CommitOutcome::Updated(id.as_str().to_owned())
                } else {
                    CommitOutcome::NoMatch(id.as_str().to_owned())
                }
            }
            FormPayload::Order { id: None, input } => {
                CommitOutcome::Created(self.store.create_order(input)?.into_string())
            }
            FormPayload::Product { id: Some(id), input } => {
                if self.store.update_product(id, input)? {
                    CommitOutcome::Updated(id.as_str().to_owned())
                } else {
                    CommitOutcome::NoMatch(id.as_str().to_owned())
                }
            }
            FormPayload::Product { id: None, input } => {
                CommitOutcome::Created(self.store.create_product(input)?.into_string())
            }
            FormPayload::Customer { id: Some(id), input } => {
                if self.store.update_customer(id, input)? {
                    CommitOutcome::Updated(id.as_str().to_owned())
                } else {
                    CommitOutcome::NoMatch(id.as_str().to_owned())
                }
            }
            FormPayload::Customer { id: None, input } => {
                CommitOutcome::Created(self.store.create_customer(input)?.into_string())
            }
        };
        Ok(outcome)
    }

    fn update_setting(&mut self, key: SettingKey, value: &SettingValue) -> Result<()> {
        self.store.update_setting(key, value)
    }

    fn store_label(&mut self) -> Result<String> {
        Ok(self.store.store_name())
    }
}

#[cfg(test)]
mod tests {
    use super::StoreRuntime;
    use anyhow::Result;
    use shopdesk_app::{
        FormPayload, ListRecord, ProductFormInput, ProductId, ProductStatus, SettingKey,
        SettingValue, TabKind,
    };
    use shopdesk_store::Store;
    use shopdesk_tui::{AppRuntime, CommitOutcome, TabSnapshot};

    fn demo_runtime() -> Result<StoreRuntime> {
        let mut store = Store::new();
        store.seed_demo_data()?;
        Ok(StoreRuntime::new(store))
    }

    #[test]
    fn tab_snapshots_cover_every_screen() -> Result<()> {
        let mut runtime = demo_runtime()?;
        assert!(runtime.load_tab_snapshot(TabKind::Dashboard)?.is_none());

        let orders = runtime
            .load_tab_snapshot(TabKind::Orders)?
            .expect("orders snapshot");
        assert_eq!(orders.tab_kind(), TabKind::Orders);
        assert_eq!(orders.row_count(), 5);

        let settings = runtime
            .load_tab_snapshot(TabKind::Settings)?
            .expect("settings snapshot");
        assert_eq!(settings.row_count(), 5);
        Ok(())
    }

    #[test]
    fn dashboard_snapshot_is_assembled_from_store_aggregates() -> Result<()> {
        let mut runtime = demo_runtime()?;
        let dashboard = runtime.load_dashboard()?;
        assert_eq!(dashboard.totals.orders, 5);
        assert_eq!(dashboard.monthly.len(), 6);
        assert_eq!(dashboard.recent_orders.len(), 3);
        assert!(!dashboard.activity.is_empty());
        Ok(())
    }

    #[test]
    fn submit_form_updates_an_existing_product() -> Result<()> {
        let mut runtime = demo_runtime()?;
        let TabSnapshot::Products(products) = runtime
            .load_tab_snapshot(TabKind::Products)?
            .expect("products snapshot")
        else {
            panic!("expected products snapshot");
        };
        let target = products
            .iter()
            .find(|product| product.id.as_str() == "PROD002")
            .expect("PROD002 seeded");

        let mut input = target.draft();
        input.price_cents = 69_99;
        let outcome = runtime.submit_form(&FormPayload::Product {
            id: Some(target.id.clone()),
            input,
        })?;
        assert_eq!(outcome, CommitOutcome::Updated("PROD002".to_owned()));
        Ok(())
    }

    #[test]
    fn submit_form_creates_when_no_identifier_is_given() -> Result<()> {
        let mut runtime = demo_runtime()?;
        let input = ProductFormInput {
            name: "Canvas Tote Bag".to_owned(),
            description: String::new(),
            category: "Accessories".to_owned(),
            price_cents: 18_00,
            stock: 75,
            status: ProductStatus::Published,
            image_url: String::new(),
        };
        let outcome = runtime.submit_form(&FormPayload::Product { id: None, input })?;
        assert_eq!(outcome, CommitOutcome::Created("PROD005".to_owned()));

        let snapshot = runtime
            .load_tab_snapshot(TabKind::Products)?
            .expect("products snapshot");
        assert_eq!(snapshot.row_count(), 5);
        Ok(())
    }

    #[test]
    fn submit_form_reports_unmatched_identifiers() -> Result<()> {
        let mut runtime = demo_runtime()?;
        let input = ProductFormInput {
            name: "Ghost Product".to_owned(),
            description: String::new(),
            category: "Apparel".to_owned(),
            price_cents: 10_00,
            stock: 1,
            status: ProductStatus::Draft,
            image_url: String::new(),
        };
        let outcome = runtime.submit_form(&FormPayload::Product {
            id: Some(ProductId::new("PROD999")),
            input,
        })?;
        assert_eq!(outcome, CommitOutcome::NoMatch("PROD999".to_owned()));

        let snapshot = runtime
            .load_tab_snapshot(TabKind::Products)?
            .expect("products snapshot");
        assert_eq!(snapshot.row_count(), 4);
        Ok(())
    }

    #[test]
    fn invalid_payloads_are_rejected_before_the_store() -> Result<()> {
        let mut runtime = demo_runtime()?;
        let result = runtime.submit_form(&FormPayload::Product {
            id: None,
            input: ProductFormInput::blank(),
        });
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn store_label_tracks_the_store_name_setting() -> Result<()> {
        let mut runtime = demo_runtime()?;
        assert_eq!(runtime.store_label()?, "Acme Store");

        runtime.update_setting(
            SettingKey::StoreName,
            &SettingValue::Text("Northwind".to_owned()),
        )?;
        assert_eq!(runtime.store_label()?, "Northwind");
        Ok(())
    }
}
