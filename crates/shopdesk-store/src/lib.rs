// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};
use serde::Serialize;
use shopdesk_app::{
    ActivityEntry, Customer, CustomerFormInput, CustomerId, DashboardTotals, ListRecord,
    MonthlyRevenue, Order, OrderFormInput, OrderId, Product, ProductFormInput, ProductId,
    ProductStatus, SettingKey, SettingValue, StoreSetting, format_cents,
};
use time::macros::datetime;
use time::{Date, Month, OffsetDateTime};

pub const APP_NAME: &str = "shopdesk";

const ACTIVITY_CAP: usize = 50;
const ORDER_ID_PREFIX: &str = "ORD";
const PRODUCT_ID_PREFIX: &str = "PROD";
const CUSTOMER_ID_PREFIX: &str = "CUST";

/// An ordered in-memory collection of records with unique identifiers.
/// Mutations are append-one and replace-one; everything else is a read.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore<R: ListRecord> {
    records: Vec<R>,
}

impl<R: ListRecord> RecordStore<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn seed(records: Vec<R>) -> Result<Self> {
        let mut store = Self::new();
        for record in records {
            store.insert(record)?;
        }
        Ok(store)
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &R::Id) -> Option<&R> {
        self.records.iter().find(|record| record.id() == *id)
    }

    pub fn insert(&mut self, record: R) -> Result<()> {
        if self.get(&record.id()).is_some() {
            bail!("duplicate record id {:?}", record.id());
        }
        self.records.push(record);
        Ok(())
    }

    /// Replace the entry whose identifier matches. Returns false (and leaves
    /// the store unchanged) when no entry matches.
    pub fn replace(&mut self, record: R) -> bool {
        let id = record.id();
        match self.records.iter_mut().find(|entry| entry.id() == id) {
            Some(entry) => {
                *entry = record;
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Serialize)]
struct DataDump<'a> {
    orders: &'a [Order],
    products: &'a [Product],
    customers: &'a [Customer],
    settings: &'a [StoreSetting],
}

/// The back-office data facade: one record store per kind, typed settings,
/// and the activity feed. Seeded once at startup; nothing survives exit.
#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    orders: RecordStore<Order>,
    products: RecordStore<Product>,
    customers: RecordStore<Customer>,
    settings: Vec<StoreSetting>,
    activity: Vec<ActivityEntry>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self {
            orders: RecordStore::new(),
            products: RecordStore::new(),
            customers: RecordStore::new(),
            settings: default_settings(),
            activity: Vec::new(),
        }
    }

    pub fn with_records(
        orders: Vec<Order>,
        products: Vec<Product>,
        customers: Vec<Customer>,
    ) -> Result<Self> {
        Ok(Self {
            orders: RecordStore::seed(orders)?,
            products: RecordStore::seed(products)?,
            customers: RecordStore::seed(customers)?,
            settings: default_settings(),
            activity: Vec::new(),
        })
    }

    // Orders

    pub fn list_orders(&self) -> Vec<Order> {
        self.orders.records().to_vec()
    }

    pub fn get_order(&self, id: &OrderId) -> Option<Order> {
        self.orders.get(id).cloned()
    }

    pub fn create_order(&mut self, input: &OrderFormInput) -> Result<OrderId> {
        input.validate()?;
        let id = self.next_order_id();
        self.orders.insert(Order {
            id: id.clone(),
            customer_name: input.customer_name.clone(),
            customer_email: input.customer_email.clone(),
            placed_on: input.placed_on,
            status: input.status,
            total_cents: input.total_cents,
            items: input.items.clone(),
            shipping_address: input.shipping_address.clone(),
        })?;
        self.record_activity(format!(
            "order {id} created for {} ({})",
            input.customer_name.trim(),
            format_cents(input.total_cents)
        ));
        Ok(id)
    }

    /// Returns false when no order has this identifier; the store is left
    /// unchanged in that case.
    pub fn update_order(&mut self, id: &OrderId, input: &OrderFormInput) -> Result<bool> {
        input.validate()?;
        let replaced = self.orders.replace(Order {
            id: id.clone(),
            customer_name: input.customer_name.clone(),
            customer_email: input.customer_email.clone(),
            placed_on: input.placed_on,
            status: input.status,
            total_cents: input.total_cents,
            items: input.items.clone(),
            shipping_address: input.shipping_address.clone(),
        });
        if replaced {
            self.record_activity(format!(
                "order {id} updated; status {}",
                input.status.label()
            ));
        }
        Ok(replaced)
    }

    // Products

    pub fn list_products(&self) -> Vec<Product> {
        self.products.records().to_vec()
    }

    pub fn get_product(&self, id: &ProductId) -> Option<Product> {
        self.products.get(id).cloned()
    }

    pub fn create_product(&mut self, input: &ProductFormInput) -> Result<ProductId> {
        input.validate()?;
        let id = self.next_product_id();
        self.products.insert(Product {
            id: id.clone(),
            name: input.name.clone(),
            description: input.description.clone(),
            category: input.category.clone(),
            price_cents: input.price_cents,
            stock: input.stock,
            status: input.status,
            image_url: input.image_url.clone(),
        })?;
        self.record_activity(format!("product {id} added: {}", input.name.trim()));
        Ok(id)
    }

    pub fn update_product(&mut self, id: &ProductId, input: &ProductFormInput) -> Result<bool> {
        input.validate()?;
        let replaced = self.products.replace(Product {
            id: id.clone(),
            name: input.name.clone(),
            description: input.description.clone(),
            category: input.category.clone(),
            price_cents: input.price_cents,
            stock: input.stock,
            status: input.status,
            image_url: input.image_url.clone(),
        });
        if replaced {
            self.record_activity(format!("product {id} updated: {}", input.name.trim()));
        }
        Ok(replaced)
    }

    // Customers

    pub fn list_customers(&self) -> Vec<Customer> {
        self.customers.records().to_vec()
    }

    pub fn get_customer(&self, id: &CustomerId) -> Option<Customer> {
        self.customers.get(id).cloned()
    }

    pub fn create_customer(&mut self, input: &CustomerFormInput) -> Result<CustomerId> {
        input.validate()?;
        let id = self.next_customer_id();
        self.customers.insert(Customer {
            id: id.clone(),
            name: input.name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            address: input.address.clone(),
            avatar_url: input.avatar_url.clone(),
            joined_on: OffsetDateTime::now_utc().date(),
            total_orders: 0,
            total_spent_cents: 0,
            last_order_on: None,
        })?;
        self.record_activity(format!("customer {id} added: {}", input.name.trim()));
        Ok(id)
    }

    /// Contact fields come from the form; the join date and the aggregate
    /// order stats are preserved from the existing record.
    pub fn update_customer(&mut self, id: &CustomerId, input: &CustomerFormInput) -> Result<bool> {
        input.validate()?;
        let Some(existing) = self.customers.get(id).cloned() else {
            return Ok(false);
        };
        let replaced = self.customers.replace(Customer {
            id: id.clone(),
            name: input.name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            address: input.address.clone(),
            avatar_url: input.avatar_url.clone(),
            joined_on: existing.joined_on,
            total_orders: existing.total_orders,
            total_spent_cents: existing.total_spent_cents,
            last_order_on: existing.last_order_on,
        });
        if replaced {
            self.record_activity(format!("customer {id} updated: {}", input.name.trim()));
        }
        Ok(replaced)
    }

    // Settings

    pub fn list_settings(&self) -> Vec<StoreSetting> {
        self.settings.clone()
    }

    pub fn get_setting(&self, key: SettingKey) -> Option<&SettingValue> {
        self.settings
            .iter()
            .find(|setting| setting.key == key)
            .map(|setting| &setting.value)
    }

    pub fn update_setting(&mut self, key: SettingKey, value: &SettingValue) -> Result<()> {
        if value.to_storage(key).is_none() {
            bail!(
                "setting {} expects a {} value",
                key.as_str(),
                match key.expected_value_kind() {
                    shopdesk_app::SettingValueKind::Bool => "boolean",
                    shopdesk_app::SettingValueKind::Text => "text",
                }
            );
        }
        match self
            .settings
            .iter_mut()
            .find(|setting| setting.key == key)
        {
            Some(setting) => setting.value = value.clone(),
            None => self.settings.push(StoreSetting {
                key,
                value: value.clone(),
            }),
        }
        self.record_activity(format!("setting {} updated", key.label()));
        Ok(())
    }

    pub fn store_name(&self) -> String {
        match self.get_setting(SettingKey::StoreName) {
            Some(SettingValue::Text(name)) if !name.trim().is_empty() => name.clone(),
            _ => "Shopdesk".to_owned(),
        }
    }

    // Dashboard

    pub fn dashboard_totals(&self) -> DashboardTotals {
        let revenue_cents = self
            .orders
            .records()
            .iter()
            .filter(|order| order.status.counts_toward_revenue())
            .map(|order| order.total_cents)
            .sum();
        DashboardTotals {
            revenue_cents,
            orders: self.orders.len(),
            customers: self.customers.len(),
            published_products: self
                .products
                .records()
                .iter()
                .filter(|product| product.status == ProductStatus::Published)
                .count(),
        }
    }

    /// Calendar-month revenue buckets, oldest first, anchored at the most
    /// recent order date so the trend is stable for a given dataset.
    pub fn monthly_revenue(&self, months: usize) -> Vec<MonthlyRevenue> {
        let Some(anchor) = self
            .orders
            .records()
            .iter()
            .map(|order| order.placed_on)
            .max()
        else {
            return Vec::new();
        };

        let mut buckets = Vec::with_capacity(months);
        for back in (0..months).rev() {
            let (year, month) = shift_month(anchor.year(), anchor.month(), -(back as i32));
            let revenue_cents = self
                .orders
                .records()
                .iter()
                .filter(|order| {
                    order.status.counts_toward_revenue()
                        && order.placed_on.year() == year
                        && order.placed_on.month() == month
                })
                .map(|order| order.total_cents)
                .sum();
            buckets.push(MonthlyRevenue {
                label: month_label(month),
                revenue_cents,
            });
        }
        buckets
    }

    pub fn recent_orders(&self, limit: usize) -> Vec<Order> {
        let mut orders = self.orders.records().to_vec();
        orders.sort_by(|a, b| {
            b.placed_on
                .cmp(&a.placed_on)
                .then_with(|| b.id.cmp(&a.id))
        });
        orders.truncate(limit);
        orders
    }

    pub fn recent_activity(&self, limit: usize) -> Vec<ActivityEntry> {
        self.activity.iter().rev().take(limit).cloned().collect()
    }

    // Export

    pub fn data_dump(&self) -> Result<String> {
        let dump = DataDump {
            orders: self.orders.records(),
            products: self.products.records(),
            customers: self.customers.records(),
            settings: &self.settings,
        };
        Ok(serde_json::to_string_pretty(&dump)?)
    }

    fn next_order_id(&self) -> OrderId {
        OrderId::new(next_sequential_id(
            ORDER_ID_PREFIX,
            self.orders.records().iter().map(|order| order.id.as_str()),
        ))
    }

    fn next_product_id(&self) -> ProductId {
        ProductId::new(next_sequential_id(
            PRODUCT_ID_PREFIX,
            self.products
                .records()
                .iter()
                .map(|product| product.id.as_str()),
        ))
    }

    fn next_customer_id(&self) -> CustomerId {
        CustomerId::new(next_sequential_id(
            CUSTOMER_ID_PREFIX,
            self.customers
                .records()
                .iter()
                .map(|customer| customer.id.as_str()),
        ))
    }

    fn record_activity(&mut self, description: String) {
        self.activity.push(ActivityEntry {
            description,
            at: OffsetDateTime::now_utc(),
        });
        if self.activity.len() > ACTIVITY_CAP {
            let overflow = self.activity.len() - ACTIVITY_CAP;
            self.activity.drain(..overflow);
        }
    }
}

/// Next `PREFIXnnn` id: one past the highest numeric suffix already present,
/// so fresh ids never collide with seeded or committed ones.
fn next_sequential_id<'a>(prefix: &str, existing: impl Iterator<Item = &'a str>) -> String {
    let highest = existing
        .filter_map(|id| id.strip_prefix(prefix))
        .filter_map(|suffix| suffix.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    format!("{prefix}{:03}", highest + 1)
}

fn shift_month(year: i32, month: Month, delta: i32) -> (i32, Month) {
    let base = i32::from(month as u8) - 1 + delta;
    let year = year + base.div_euclid(12);
    let month_number = (base.rem_euclid(12) + 1) as u8;
    let month = Month::try_from(month_number).expect("month value from modulo is valid");
    (year, month)
}

fn month_label(month: Month) -> String {
    let name = match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    };
    name.to_owned()
}

fn default_settings() -> Vec<StoreSetting> {
    vec![
        StoreSetting {
            key: SettingKey::ProfileName,
            value: SettingValue::Text("Admin User".to_owned()),
        },
        StoreSetting {
            key: SettingKey::ProfileEmail,
            value: SettingValue::Text("admin@example.com".to_owned()),
        },
        StoreSetting {
            key: SettingKey::EmailNotifications,
            value: SettingValue::Bool(true),
        },
        StoreSetting {
            key: SettingKey::DarkMode,
            value: SettingValue::Bool(false),
        },
        StoreSetting {
            key: SettingKey::StoreName,
            value: SettingValue::Text("Acme Store".to_owned()),
        },
    ]
}

fn demo_date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).expect("valid demo date")
}

impl Store {
    /// Seed the canonical demo dataset the screens start from.
    pub fn seed_demo_data(&mut self) -> Result<()> {
        use shopdesk_app::{OrderLine, OrderStatus};

        let orders = vec![
            Order {
                id: OrderId::new("ORD001"),
                customer_name: "Liam Johnson".to_owned(),
                customer_email: "liam@example.com".to_owned(),
                placed_on: demo_date(2023, Month::October, 26),
                status: OrderStatus::Delivered,
                total_cents: 150_00,
                items: vec![OrderLine {
                    name: "T-Shirt".to_owned(),
                    quantity: 2,
                }],
                shipping_address: "123 Main St, Anytown, USA".to_owned(),
            },
            Order {
                id: OrderId::new("ORD002"),
                customer_name: "Olivia Smith".to_owned(),
                customer_email: "olivia@example.com".to_owned(),
                placed_on: demo_date(2023, Month::October, 25),
                status: OrderStatus::Shipped,
                total_cents: 200_50,
                items: vec![OrderLine {
                    name: "Hoodie".to_owned(),
                    quantity: 1,
                }],
                shipping_address: "456 Oak Ave, Anytown, USA".to_owned(),
            },
            Order {
                id: OrderId::new("ORD003"),
                customer_name: "Noah Williams".to_owned(),
                customer_email: "noah@example.com".to_owned(),
                placed_on: demo_date(2023, Month::October, 24),
                status: OrderStatus::Processing,
                total_cents: 75_20,
                items: vec![OrderLine {
                    name: "Cap".to_owned(),
                    quantity: 3,
                }],
                shipping_address: "789 Pine Rd, Anytown, USA".to_owned(),
            },
            Order {
                id: OrderId::new("ORD004"),
                customer_name: "Emma Brown".to_owned(),
                customer_email: "emma@example.com".to_owned(),
                placed_on: demo_date(2023, Month::October, 23),
                status: OrderStatus::Pending,
                total_cents: 300_00,
                items: vec![OrderLine {
                    name: "Jacket".to_owned(),
                    quantity: 1,
                }],
                shipping_address: "101 Elm St, Anytown, USA".to_owned(),
            },
            Order {
                id: OrderId::new("ORD005"),
                customer_name: "Ava Jones".to_owned(),
                customer_email: "ava@example.com".to_owned(),
                placed_on: demo_date(2023, Month::October, 22),
                status: OrderStatus::Cancelled,
                total_cents: 50_75,
                items: vec![OrderLine {
                    name: "Socks".to_owned(),
                    quantity: 5,
                }],
                shipping_address: "202 Maple Dr, Anytown, USA".to_owned(),
            },
        ];

        let products = vec![
            Product {
                id: ProductId::new("PROD001"),
                name: "Organic Cotton T-Shirt".to_owned(),
                description: String::new(),
                category: "Apparel".to_owned(),
                price_cents: 25_99,
                stock: 150,
                status: ProductStatus::Published,
                image_url: "https://images.example.com/products/tshirt.jpg".to_owned(),
            },
            Product {
                id: ProductId::new("PROD002"),
                name: "Wireless Bluetooth Headphones".to_owned(),
                description: String::new(),
                category: "Electronics".to_owned(),
                price_cents: 79_50,
                stock: 80,
                status: ProductStatus::Published,
                image_url: "https://images.example.com/products/headphones.jpg".to_owned(),
            },
            Product {
                id: ProductId::new("PROD003"),
                name: "Reusable Coffee Mug".to_owned(),
                description: String::new(),
                category: "Home Goods".to_owned(),
                price_cents: 15_00,
                stock: 200,
                status: ProductStatus::Draft,
                image_url: "https://images.example.com/products/mug.jpg".to_owned(),
            },
            Product {
                id: ProductId::new("PROD004"),
                name: "Leather Laptop Sleeve".to_owned(),
                description: String::new(),
                category: "Accessories".to_owned(),
                price_cents: 45_00,
                stock: 50,
                status: ProductStatus::Published,
                image_url: "https://images.example.com/products/sleeve.jpg".to_owned(),
            },
        ];

        let customers = vec![
            Customer {
                id: CustomerId::new("CUST001"),
                name: "Alice Wonderland".to_owned(),
                email: "alice@example.com".to_owned(),
                phone: "555-0101".to_owned(),
                address: "123 Fantasy Lane, Dream City".to_owned(),
                avatar_url: "https://images.example.com/avatars/alice.jpg".to_owned(),
                joined_on: demo_date(2023, Month::January, 15),
                total_orders: 5,
                total_spent_cents: 450_75,
                last_order_on: Some(demo_date(2023, Month::October, 20)),
            },
            Customer {
                id: CustomerId::new("CUST002"),
                name: "Bob The Builder".to_owned(),
                email: "bob@example.com".to_owned(),
                phone: "555-0102".to_owned(),
                address: "456 Construction Rd, Tool Town".to_owned(),
                avatar_url: "https://images.example.com/avatars/bob.jpg".to_owned(),
                joined_on: demo_date(2022, Month::November, 20),
                total_orders: 12,
                total_spent_cents: 1_250_00,
                last_order_on: Some(demo_date(2023, Month::October, 15)),
            },
            Customer {
                id: CustomerId::new("CUST003"),
                name: "Charlie Chaplin".to_owned(),
                email: "charlie@example.com".to_owned(),
                phone: "555-0103".to_owned(),
                address: "789 Comedy Ave, Silent Film City".to_owned(),
                avatar_url: "https://images.example.com/avatars/charlie.jpg".to_owned(),
                joined_on: demo_date(2023, Month::May, 10),
                total_orders: 2,
                total_spent_cents: 80_20,
                last_order_on: Some(demo_date(2023, Month::September, 1)),
            },
            Customer {
                id: CustomerId::new("CUST004"),
                name: "Diana Prince".to_owned(),
                email: "diana@example.com".to_owned(),
                phone: "555-0104".to_owned(),
                address: "1 Justice Way, Themyscira".to_owned(),
                avatar_url: "https://images.example.com/avatars/diana.jpg".to_owned(),
                joined_on: demo_date(2021, Month::July, 1),
                total_orders: 25,
                total_spent_cents: 3_500_50,
                last_order_on: Some(demo_date(2023, Month::October, 25)),
            },
        ];

        for order in orders {
            self.orders.insert(order)?;
        }
        for product in products {
            self.products.insert(product)?;
        }
        for customer in customers {
            self.customers.insert(customer)?;
        }

        self.activity = vec![
            ActivityEntry {
                description: "Olivia Smith placed order ORD002 for $200.50".to_owned(),
                at: datetime!(2023-10-25 09:14 UTC),
            },
            ActivityEntry {
                description: "customer CUST002 profile updated".to_owned(),
                at: datetime!(2023-10-25 10:02 UTC),
            },
            ActivityEntry {
                description: "product PROD002 added: Wireless Bluetooth Headphones".to_owned(),
                at: datetime!(2023-10-25 11:40 UTC),
            },
            ActivityEntry {
                description: "Liam Johnson placed order ORD001 for $150.00".to_owned(),
                at: datetime!(2023-10-26 08:30 UTC),
            },
        ];
        Ok(())
    }
}
