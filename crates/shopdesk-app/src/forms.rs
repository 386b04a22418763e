// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};
use time::Date;

use crate::{
    Customer, CustomerId, FormKind, ListRecord, Order, OrderId, OrderLine, OrderStatus, Product,
    ProductId, ProductStatus, field_matches,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFormInput {
    pub customer_name: String,
    pub customer_email: String,
    pub placed_on: Date,
    pub status: OrderStatus,
    pub total_cents: i64,
    pub items: Vec<OrderLine>,
    pub shipping_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFormInput {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price_cents: i64,
    pub stock: i32,
    pub status: ProductStatus,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerFormInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPayload {
    Order {
        id: Option<OrderId>,
        input: OrderFormInput,
    },
    Product {
        id: Option<ProductId>,
        input: ProductFormInput,
    },
    Customer {
        id: Option<CustomerId>,
        input: CustomerFormInput,
    },
}

impl FormPayload {
    pub fn kind(&self) -> FormKind {
        match self {
            Self::Order { .. } => FormKind::Order,
            Self::Product { .. } => FormKind::Product,
            Self::Customer { .. } => FormKind::Customer,
        }
    }

    /// A fresh add-new payload: blank fields, no target identifier.
    pub fn blank_for(kind: FormKind) -> Self {
        match kind {
            FormKind::Order => Self::Order {
                id: None,
                input: OrderFormInput::blank(),
            },
            FormKind::Product => Self::Product {
                id: None,
                input: ProductFormInput::blank(),
            },
            FormKind::Customer => Self::Customer {
                id: None,
                input: CustomerFormInput::blank(),
            },
        }
    }

    pub fn target_id(&self) -> Option<&str> {
        match self {
            Self::Order { id, .. } => id.as_ref().map(OrderId::as_str),
            Self::Product { id, .. } => id.as_ref().map(ProductId::as_str),
            Self::Customer { id, .. } => id.as_ref().map(CustomerId::as_str),
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Order { input, .. } => input.validate(),
            Self::Product { input, .. } => input.validate(),
            Self::Customer { input, .. } => input.validate(),
        }
    }
}

impl OrderFormInput {
    pub fn blank() -> Self {
        Self {
            customer_name: String::new(),
            customer_email: String::new(),
            placed_on: Date::from_calendar_date(1970, time::Month::January, 1)
                .expect("valid baseline date"),
            status: OrderStatus::Pending,
            total_cents: 0,
            items: Vec::new(),
            shipping_address: String::new(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.customer_name.trim().is_empty() {
            bail!("order customer name is required -- enter a name and retry");
        }
        if self.customer_email.trim().is_empty() {
            bail!("order customer email is required -- enter an email and retry");
        }
        if self.total_cents < 0 {
            bail!("order total cannot be negative");
        }
        for item in &self.items {
            if item.name.trim().is_empty() {
                bail!("order line items need a name -- remove the blank line and retry");
            }
            if item.quantity == 0 {
                bail!("order line quantities must be at least 1");
            }
        }
        Ok(())
    }
}

impl ProductFormInput {
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            category: String::new(),
            price_cents: 0,
            stock: 0,
            status: ProductStatus::Draft,
            image_url: String::new(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("product name is required -- enter a name and retry");
        }
        if self.category.trim().is_empty() {
            bail!("product category is required -- enter a category and retry");
        }
        if self.price_cents < 0 {
            bail!("product price cannot be negative");
        }
        if self.stock < 0 {
            bail!("product stock cannot be negative");
        }
        Ok(())
    }
}

impl CustomerFormInput {
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            avatar_url: String::new(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("customer name is required -- enter a name and retry");
        }
        if self.email.trim().is_empty() {
            bail!("customer email is required -- enter an email and retry");
        }
        Ok(())
    }
}

impl ListRecord for Order {
    type Id = OrderId;
    type Draft = OrderFormInput;

    fn id(&self) -> OrderId {
        self.id.clone()
    }

    fn matches(&self, needle: &str) -> bool {
        field_matches(self.id.as_str(), needle)
            || field_matches(&self.customer_name, needle)
            || field_matches(&self.customer_email, needle)
    }

    fn draft(&self) -> OrderFormInput {
        OrderFormInput {
            customer_name: self.customer_name.clone(),
            customer_email: self.customer_email.clone(),
            placed_on: self.placed_on,
            status: self.status,
            total_cents: self.total_cents,
            items: self.items.clone(),
            shipping_address: self.shipping_address.clone(),
        }
    }

    fn blank_draft() -> OrderFormInput {
        OrderFormInput::blank()
    }
}

impl ListRecord for Product {
    type Id = ProductId;
    type Draft = ProductFormInput;

    fn id(&self) -> ProductId {
        self.id.clone()
    }

    fn matches(&self, needle: &str) -> bool {
        field_matches(&self.name, needle) || field_matches(&self.category, needle)
    }

    fn draft(&self) -> ProductFormInput {
        ProductFormInput {
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            price_cents: self.price_cents,
            stock: self.stock,
            status: self.status,
            image_url: self.image_url.clone(),
        }
    }

    fn blank_draft() -> ProductFormInput {
        ProductFormInput::blank()
    }
}

impl ListRecord for Customer {
    type Id = CustomerId;
    type Draft = CustomerFormInput;

    fn id(&self) -> CustomerId {
        self.id.clone()
    }

    fn matches(&self, needle: &str) -> bool {
        field_matches(&self.name, needle) || field_matches(&self.email, needle)
    }

    fn draft(&self) -> CustomerFormInput {
        CustomerFormInput {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            avatar_url: self.avatar_url.clone(),
        }
    }

    fn blank_draft() -> CustomerFormInput {
        CustomerFormInput::blank()
    }
}

#[cfg(test)]
mod tests {
    use super::{CustomerFormInput, FormPayload, OrderFormInput, ProductFormInput};
    use crate::{FormKind, ListRecord, OrderLine, ProductStatus};
    use shopdesk_testkit::{customers, orders, products};

    #[test]
    fn blank_payloads_carry_no_identifier() {
        for kind in [FormKind::Order, FormKind::Product, FormKind::Customer] {
            let payload = FormPayload::blank_for(kind);
            assert_eq!(payload.kind(), kind);
            assert!(payload.target_id().is_none());
        }
    }

    #[test]
    fn order_validation_rejects_missing_customer() {
        let mut input = OrderFormInput::blank();
        input.customer_email = "liam@example.com".to_owned();
        assert!(input.validate().is_err());

        input.customer_name = "Liam Johnson".to_owned();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn order_validation_rejects_zero_quantity_lines() {
        let mut input = OrderFormInput::blank();
        input.customer_name = "Liam Johnson".to_owned();
        input.customer_email = "liam@example.com".to_owned();
        input.items = vec![OrderLine {
            name: "T-Shirt".to_owned(),
            quantity: 0,
        }];
        assert!(input.validate().is_err());
    }

    #[test]
    fn product_validation_rejects_negative_price_and_stock() {
        let mut input = ProductFormInput {
            name: "Reusable Coffee Mug".to_owned(),
            description: String::new(),
            category: "Home Goods".to_owned(),
            price_cents: -1,
            stock: 0,
            status: ProductStatus::Draft,
            image_url: String::new(),
        };
        assert!(input.validate().is_err());

        input.price_cents = 1500;
        input.stock = -3;
        assert!(input.validate().is_err());

        input.stock = 200;
        assert!(input.validate().is_ok());
    }

    #[test]
    fn customer_validation_requires_name_and_email() {
        let mut input = CustomerFormInput::blank();
        assert!(input.validate().is_err());
        input.name = "Alice Wonderland".to_owned();
        assert!(input.validate().is_err());
        input.email = "alice@example.com".to_owned();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn order_search_fields_are_id_name_and_email() {
        let records = orders(1, 3);
        let order = &records[0];
        assert!(order.matches("ord001"));
        assert!(order.matches(&order.customer_name.to_lowercase()));
        assert!(order.matches(&order.customer_email.to_lowercase()));
        assert!(!order.matches("no-such-needle"));
    }

    #[test]
    fn product_search_ignores_description() {
        let records = products(1, 3);
        let mut product = records[0].clone();
        product.description = "hidden text".to_owned();
        assert!(product.matches(&product.name.to_lowercase()));
        assert!(product.matches(&product.category.to_lowercase()));
        assert!(!product.matches("hidden text"));
    }

    #[test]
    fn customer_search_fields_are_name_and_email() {
        let records = customers(1, 3);
        let customer = &records[0];
        assert!(customer.matches(&customer.name.to_lowercase()));
        assert!(customer.matches(&customer.email.to_lowercase()));
        assert!(!customer.matches(&customer.phone));
    }

    #[test]
    fn draft_round_trip_preserves_every_editable_field() {
        let records = orders(1, 9);
        let order = &records[0];
        let draft = order.draft();
        assert_eq!(draft.customer_name, order.customer_name);
        assert_eq!(draft.status, order.status);
        assert_eq!(draft.total_cents, order.total_cents);
        assert_eq!(draft.items, order.items);
    }
}
