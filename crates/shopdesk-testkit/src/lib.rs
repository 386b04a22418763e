// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Deterministic sample-data generators for orders, products, and customers.
//! The same (count, seed) pair always produces the same records, so tests can
//! assert on exact ids and page contents.

use shopdesk_app::{
    Customer, CustomerId, Order, OrderId, OrderLine, OrderStatus, Product, ProductId,
    ProductStatus,
};
use time::{Date, Duration, Month};

const FIRST_NAMES: [&str; 16] = [
    "Avery", "Jordan", "Taylor", "Riley", "Morgan", "Casey", "Alex", "Quinn", "Parker", "Drew",
    "Kai", "Elliot", "Robin", "Cameron", "Hayden", "Rowan",
];
const LAST_NAMES: [&str; 18] = [
    "Walker", "Martin", "Hill", "Evans", "Lopez", "Gray", "Ward", "Young", "Diaz", "Reed",
    "Campbell", "Turner", "Flores", "Bennett", "Price", "Morris", "Foster", "Brooks",
];

const STREET_NAMES: [&str; 12] = [
    "Cedar", "Maple", "Oak", "Pine", "Willow", "Elm", "Birch", "Juniper", "Sunset", "Ridge",
    "Valley", "Meadow",
];
const CITIES: [&str; 10] = [
    "Austin",
    "Seattle",
    "Denver",
    "Madison",
    "Raleigh",
    "Portland",
    "Boise",
    "Phoenix",
    "Nashville",
    "Columbus",
];
const STATES: [&str; 10] = ["TX", "WA", "CO", "WI", "NC", "OR", "ID", "AZ", "TN", "OH"];

const PRODUCT_MATERIALS: [&str; 10] = [
    "Organic Cotton",
    "Wireless",
    "Reusable",
    "Leather",
    "Bamboo",
    "Stainless Steel",
    "Recycled",
    "Classic",
    "Canvas",
    "Merino Wool",
];
const PRODUCT_ITEMS: [&str; 14] = [
    "T-Shirt",
    "Hoodie",
    "Cap",
    "Jacket",
    "Socks",
    "Coffee Mug",
    "Water Bottle",
    "Laptop Sleeve",
    "Backpack",
    "Headphones",
    "Desk Lamp",
    "Notebook",
    "Phone Case",
    "Tote Bag",
];
const PRODUCT_CATEGORIES: [&str; 6] = [
    "Apparel",
    "Electronics",
    "Home Goods",
    "Accessories",
    "Outdoors",
    "Stationery",
];

const REFERENCE_YEAR: i32 = 2026;

fn reference_date() -> Date {
    Date::from_calendar_date(REFERENCE_YEAR, Month::June, 15).expect("valid reference date")
}

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }

    fn bool(&mut self) -> bool {
        self.next_u64() & 1 == 1
    }

    fn pick<'a, T>(&mut self, options: &'a [T]) -> &'a T {
        &options[self.int_n(options.len())]
    }

    fn cents_between(&mut self, low: i64, high: i64) -> i64 {
        let span = (high - low).max(1) as usize;
        low + self.int_n(span) as i64
    }
}

fn person_name(rng: &mut DeterministicRng) -> (String, String) {
    let first = *rng.pick(&FIRST_NAMES);
    let last = *rng.pick(&LAST_NAMES);
    let name = format!("{first} {last}");
    let email = format!(
        "{}.{}@example.com",
        first.to_lowercase(),
        last.to_lowercase()
    );
    (name, email)
}

fn street_address(rng: &mut DeterministicRng) -> String {
    format!(
        "{} {} St, {}, {}",
        100 + rng.int_n(900),
        rng.pick(&STREET_NAMES),
        rng.pick(&CITIES),
        rng.pick(&STATES),
    )
}

/// Orders `ORD001..ORDnnn`, dated within the ~6 months before the reference
/// date so monthly aggregation has data in every bucket.
pub fn orders(count: usize, seed: u64) -> Vec<Order> {
    let mut rng = DeterministicRng::new(seed);
    let reference = reference_date();

    (1..=count)
        .map(|index| {
            let (customer_name, customer_email) = person_name(&mut rng);
            let placed_on = reference - Duration::days(rng.int_n(180) as i64);
            let line_count = 1 + rng.int_n(3);
            let items = (0..line_count)
                .map(|_| OrderLine {
                    name: (*rng.pick(&PRODUCT_ITEMS)).to_owned(),
                    quantity: 1 + rng.int_n(5) as u32,
                })
                .collect();

            Order {
                id: OrderId::new(format!("ORD{index:03}")),
                customer_name,
                customer_email,
                placed_on,
                status: *rng.pick(&OrderStatus::ALL),
                total_cents: rng.cents_between(10_00, 400_00),
                items,
                shipping_address: street_address(&mut rng),
            }
        })
        .collect()
}

/// Products `PROD001..PRODnnn` over the material/item pools.
pub fn products(count: usize, seed: u64) -> Vec<Product> {
    let mut rng = DeterministicRng::new(seed);

    (1..=count)
        .map(|index| {
            let material = *rng.pick(&PRODUCT_MATERIALS);
            let item = *rng.pick(&PRODUCT_ITEMS);
            let name = format!("{material} {item}");

            Product {
                id: ProductId::new(format!("PROD{index:03}")),
                description: format!("{name} from the standard catalog."),
                name,
                category: (*rng.pick(&PRODUCT_CATEGORIES)).to_owned(),
                price_cents: rng.cents_between(5_00, 150_00),
                stock: rng.int_n(250) as i32,
                status: *rng.pick(&ProductStatus::ALL),
                image_url: format!("https://images.example.com/products/{index}.jpg"),
            }
        })
        .collect()
}

/// Customers `CUST001..CUSTnnn`. Some addresses are intentionally left empty
/// to exercise the absent-field-as-empty-string convention.
pub fn customers(count: usize, seed: u64) -> Vec<Customer> {
    let mut rng = DeterministicRng::new(seed);
    let reference = reference_date();

    (1..=count)
        .map(|index| {
            let (name, email) = person_name(&mut rng);
            let joined_on = reference - Duration::days(30 + rng.int_n(1200) as i64);
            let total_orders = 1 + rng.int_n(30) as u32;
            let last_order_on = if rng.bool() {
                Some(reference - Duration::days(rng.int_n(60) as i64))
            } else {
                None
            };
            let address = if rng.bool() {
                street_address(&mut rng)
            } else {
                String::new()
            };

            Customer {
                id: CustomerId::new(format!("CUST{index:03}")),
                name,
                email,
                phone: format!("555-{:04}", rng.int_n(10_000)),
                address,
                avatar_url: format!("https://images.example.com/avatars/{index}.jpg"),
                joined_on,
                total_orders,
                total_spent_cents: rng.cents_between(20_00, 5_000_00),
                last_order_on,
            }
        })
        .collect()
}
