// SPDX-License-Identifier: MPL-2.0
//! In-memory business data backing the pages.
//!
//! Nothing here is persisted; every launch starts from the same fixtures.

use std::fmt;

/// Access level of a back-office user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
    Guest,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::User, Role::Guest];

    /// Permissions granted when none are given explicitly.
    #[must_use]
    pub fn default_permissions(self) -> &'static str {
        match self {
            Role::Admin => "read,write,delete",
            Role::User => "read,write",
            Role::Guest => "read",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Admin => "Administrator",
            Role::User => "User",
            Role::Guest => "Guest",
        };
        f.write_str(label)
    }
}

/// A back-office user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub permissions: String,
}

/// Validated input for a user that has no id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub permissions: String,
}

/// Users shown on first launch.
#[must_use]
pub fn seed_users() -> Vec<User> {
    [
        (1, "Ana Torres", "ana@petmanager.test", Role::Admin),
        (2, "Luis Romero", "luis@petmanager.test", Role::User),
        (3, "Carla Méndez", "carla@petmanager.test", Role::User),
        (4, "Diego Salas", "diego@petmanager.test", Role::Guest),
        (5, "Elena Ruiz", "elena@petmanager.test", Role::User),
        (6, "Pablo Vega", "pablo@petmanager.test", Role::Guest),
        (7, "Sofía Lara", "sofia@petmanager.test", Role::Guest),
    ]
    .into_iter()
    .map(|(id, name, email, role)| User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role,
        permissions: role.default_permissions().to_string(),
    })
    .collect()
}

/// Mutable user list with stable ids.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<User>,
    next_id: u32,
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new(seed_users())
    }
}

impl UserDirectory {
    #[must_use]
    pub fn new(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|user| user.id).max().unwrap_or(0) + 1;
        Self { users, next_id }
    }

    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Appends a user with a fresh id and returns a copy of it.
    pub fn add(&mut self, draft: NewUser) -> User {
        let id = self.next_id;
        self.next_id += 1;
        let user = User {
            id,
            name: draft.name,
            email: draft.email,
            role: draft.role,
            permissions: draft.permissions,
        };
        self.users.push(user.clone());
        user
    }

    /// Removes a user, returning it with its former position.
    pub fn remove(&mut self, id: u32) -> Option<(usize, User)> {
        let index = self.users.iter().position(|user| user.id == id)?;
        Some((index, self.users.remove(index)))
    }

    /// Puts a removed user back at (or as close as possible to) its old position.
    pub fn restore(&mut self, index: usize, user: User) {
        let index = index.min(self.users.len());
        self.users.insert(index, user);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleStatus {
    Completed,
    Pending,
    Cancelled,
}

impl SaleStatus {
    pub const ALL: [SaleStatus; 3] = [
        SaleStatus::Completed,
        SaleStatus::Pending,
        SaleStatus::Cancelled,
    ];
}

impl fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SaleStatus::Completed => "Completed",
            SaleStatus::Pending => "Pending",
            SaleStatus::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}

/// A recorded sale. Amounts are stored in cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sale {
    pub id: u32,
    pub customer: String,
    pub date: String,
    pub amount_cents: u64,
    pub status: SaleStatus,
}

/// Validated input for a sale that has no id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSale {
    pub customer: String,
    pub date: String,
    pub amount_cents: u64,
    pub status: SaleStatus,
}

impl Sale {
    /// Amount formatted as dollars, e.g. `$120.50`.
    #[must_use]
    pub fn amount(&self) -> String {
        format_cents(self.amount_cents)
    }

    /// Case-insensitive match on the customer name, or a substring match on the id.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return true;
        }
        self.customer.to_lowercase().contains(&query.to_lowercase())
            || self.id.to_string().contains(query)
    }
}

#[must_use]
pub fn seed_sales() -> Vec<Sale> {
    [
        (1, "Juan Pérez", "2024-03-01", 12_050, SaleStatus::Completed),
        (2, "María García", "2024-03-02", 8_575, SaleStatus::Pending),
        (3, "Carlos López", "2024-03-03", 20_000, SaleStatus::Completed),
        (4, "Ana Martínez", "2024-03-04", 4_520, SaleStatus::Cancelled),
        (5, "Pedro Sánchez", "2024-03-05", 15_030, SaleStatus::Pending),
    ]
    .into_iter()
    .map(|(id, customer, date, amount_cents, status)| Sale {
        id,
        customer: customer.to_string(),
        date: date.to_string(),
        amount_cents,
        status,
    })
    .collect()
}

/// Mock backend call returning the recorded sales.
pub async fn fetch_sales() -> Vec<Sale> {
    seed_sales()
}

/// Sales list with stable ids.
#[derive(Debug, Clone, Default)]
pub struct SalesLedger {
    sales: Vec<Sale>,
    next_id: u32,
}

impl SalesLedger {
    #[must_use]
    pub fn new(sales: Vec<Sale>) -> Self {
        let next_id = sales.iter().map(|sale| sale.id).max().unwrap_or(0) + 1;
        Self { sales, next_id }
    }

    #[must_use]
    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Sale> {
        self.sales.iter().find(|sale| sale.id == id)
    }

    /// Records a sale with a fresh id and returns a copy of it.
    pub fn add(&mut self, draft: NewSale) -> Sale {
        let sale = Sale {
            id: self.next_id.max(1),
            customer: draft.customer,
            date: draft.date,
            amount_cents: draft.amount_cents,
            status: draft.status,
        };
        self.next_id = sale.id + 1;
        self.sales.push(sale.clone());
        sale
    }

    /// Sales whose customer or id matches `query`, in their original order.
    pub fn filter<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Sale> + 'a {
        self.sales.iter().filter(move |sale| sale.matches(query))
    }
}

#[must_use]
pub fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Parses `120`, `120.5`, `120.50` or `$120.50` into cents.
#[must_use]
pub fn parse_amount(input: &str) -> Option<u64> {
    let input = input.trim();
    let input = input.strip_prefix('$').unwrap_or(input);
    let (whole, fraction) = match input.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (input, ""),
    };
    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if fraction.len() > 2 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let whole: u64 = whole.parse().ok()?;
    let cents = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<u64>().ok()? * 10,
        _ => fraction.parse::<u64>().ok()?,
    };
    whole.checked_mul(100)?.checked_add(cents)
}

/// Headline figure shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const DASHBOARD_STATS: [Stat; 4] = [
    Stat {
        label: "Total users",
        value: "124",
    },
    Stat {
        label: "Monthly sales",
        value: "$12,543",
    },
    Stat {
        label: "Monthly purchases",
        value: "$8,234",
    },
    Stat {
        label: "Products",
        value: "532",
    },
];

pub const RECENT_ACTIVITY: [&str; 5] = [
    "New sale",
    "New user",
    "Purchase recorded",
    "Product updated",
    "Sale cancelled",
];
