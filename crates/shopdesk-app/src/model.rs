// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::ids::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Processing,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "processing" => Some(Self::Processing),
            "shipped" => Some(Self::Shipped),
            "delivered" => Some(Self::Delivered),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Cancelled orders are excluded from revenue aggregation.
    pub const fn counts_toward_revenue(self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    Published,
    Draft,
}

impl ProductStatus {
    pub const ALL: [Self; 2] = [Self::Published, Self::Draft];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Draft => "draft",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "published" => Some(Self::Published),
            "draft" => Some(Self::Draft),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Published => "Published",
            Self::Draft => "Draft",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub customer_email: String,
    pub placed_on: Date,
    pub status: OrderStatus,
    pub total_cents: i64,
    pub items: Vec<OrderLine>,
    pub shipping_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price_cents: i64,
    pub stock: i32,
    pub status: ProductStatus,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub avatar_url: String,
    pub joined_on: Date,
    pub total_orders: u32,
    pub total_spent_cents: i64,
    pub last_order_on: Option<Date>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingKey {
    ProfileName,
    ProfileEmail,
    EmailNotifications,
    DarkMode,
    StoreName,
}

impl SettingKey {
    pub const ALL: [Self; 5] = [
        Self::ProfileName,
        Self::ProfileEmail,
        Self::EmailNotifications,
        Self::DarkMode,
        Self::StoreName,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProfileName => "profile.name",
            Self::ProfileEmail => "profile.email",
            Self::EmailNotifications => "notifications.email",
            Self::DarkMode => "appearance.dark_mode",
            Self::StoreName => "store.name",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "profile.name" => Some(Self::ProfileName),
            "profile.email" => Some(Self::ProfileEmail),
            "notifications.email" => Some(Self::EmailNotifications),
            "appearance.dark_mode" => Some(Self::DarkMode),
            "store.name" => Some(Self::StoreName),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ProfileName => "profile name",
            Self::ProfileEmail => "profile email",
            Self::EmailNotifications => "email notifications",
            Self::DarkMode => "dark mode",
            Self::StoreName => "store name",
        }
    }

    pub const fn expected_value_kind(self) -> SettingValueKind {
        match self {
            Self::ProfileName | Self::ProfileEmail | Self::StoreName => SettingValueKind::Text,
            Self::EmailNotifications | Self::DarkMode => SettingValueKind::Bool,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingValueKind {
    Bool,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingValue {
    Bool(bool),
    Text(String),
}

impl SettingValue {
    pub fn parse_for_key(key: SettingKey, raw: &str) -> Option<Self> {
        match key.expected_value_kind() {
            SettingValueKind::Bool => match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "on" | "yes" => Some(Self::Bool(true)),
                "0" | "false" | "off" | "no" => Some(Self::Bool(false)),
                _ => None,
            },
            SettingValueKind::Text => Some(Self::Text(raw.to_owned())),
        }
    }

    pub fn to_storage(&self, key: SettingKey) -> Option<String> {
        match (key.expected_value_kind(), self) {
            (SettingValueKind::Bool, Self::Bool(value)) => {
                Some(if *value { "true" } else { "false" }.to_owned())
            }
            (SettingValueKind::Text, Self::Text(value)) => Some(value.clone()),
            _ => None,
        }
    }

    pub fn display(&self) -> String {
        match self {
            Self::Bool(true) => "on".to_owned(),
            Self::Bool(false) => "off".to_owned(),
            Self::Text(value) => value.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSetting {
    pub key: SettingKey,
    pub value: SettingValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabKind {
    Dashboard,
    Orders,
    Products,
    Customers,
    Settings,
}

impl TabKind {
    pub const ALL: [Self; 5] = [
        Self::Dashboard,
        Self::Orders,
        Self::Products,
        Self::Customers,
        Self::Settings,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Orders => "orders",
            Self::Products => "products",
            Self::Customers => "customers",
            Self::Settings => "settings",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormKind {
    Order,
    Product,
    Customer,
}

impl FormKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Order => "order",
            Self::Product => "product",
            Self::Customer => "customer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppMode {
    Nav,
    Search,
    Detail,
    Form(FormKind),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DashboardTotals {
    pub revenue_cents: i64,
    pub orders: usize,
    pub customers: usize,
    pub published_products: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub label: String,
    pub revenue_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub description: String,
    pub at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::{OrderStatus, ProductStatus, SettingKey, SettingValue};

    #[test]
    fn order_status_parse_round_trip() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::parse("refunded"), None);
    }

    #[test]
    fn product_status_parse_round_trip() {
        for status in ProductStatus::ALL {
            assert_eq!(ProductStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ProductStatus::parse("archived"), None);
    }

    #[test]
    fn cancelled_orders_do_not_count_toward_revenue() {
        assert!(!OrderStatus::Cancelled.counts_toward_revenue());
        assert!(OrderStatus::Delivered.counts_toward_revenue());
        assert!(OrderStatus::Pending.counts_toward_revenue());
    }

    #[test]
    fn bool_setting_parse_and_storage_round_trip() {
        let parsed = SettingValue::parse_for_key(SettingKey::DarkMode, "on")
            .expect("parse bool setting");
        assert_eq!(parsed, SettingValue::Bool(true));
        assert_eq!(
            parsed.to_storage(SettingKey::DarkMode),
            Some("true".to_owned())
        );
    }

    #[test]
    fn text_setting_parse_and_storage_round_trip() {
        let parsed = SettingValue::parse_for_key(SettingKey::StoreName, "Acme Store")
            .expect("parse text setting");
        assert_eq!(parsed, SettingValue::Text("Acme Store".to_owned()));
        assert_eq!(
            parsed.to_storage(SettingKey::StoreName),
            Some("Acme Store".to_owned())
        );
    }

    #[test]
    fn mismatched_setting_value_type_rejected() {
        let text = SettingValue::Text("yes".to_owned());
        assert!(text.to_storage(SettingKey::EmailNotifications).is_none());
        assert_eq!(
            SettingValue::parse_for_key(SettingKey::DarkMode, "sometimes"),
            None
        );
    }
}
