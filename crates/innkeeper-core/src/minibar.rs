//! # Minibar
//!
//! A room's priced stock of drinks and snacks plus the running bill.
//!
//! ## Consumption Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Minibar Operations                                   │
//! │                                                                         │
//! │  Guest Action        Operation          State Change                    │
//! │  ────────────        ─────────          ────────────                    │
//! │                                                                         │
//! │  Opens a drink ────► drink("Cola") ───► quantity -= 1 (gone at 0)      │
//! │                                         bill += drink price            │
//! │                                                                         │
//! │  Eats a snack ─────► eat("Chips") ────► snack removed                  │
//! │                                         bill += snack price            │
//! │                                                                         │
//! │  New guests ───────► reset_bill() ────► bill = 0                       │
//! │                                                                         │
//! │  Room move ────────► take_bill() ─────► bill handed to other minibar   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Item names match case-insensitively. Each entry stores its lowercase key
//! next to the name as it was stocked, and the stocked name is what displays.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult, ItemKind};
use crate::money::Money;
use crate::validation::normalize_item_name;
use crate::DEFAULT_DRINK_PRICE;

/// A drink line: how many are left.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkStock {
    /// Lowercase lookup key.
    pub key: String,
    /// Name as stocked.
    pub name: String,
    pub quantity: u32,
}

/// A single-serving snack and its price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnackItem {
    /// Lowercase lookup key.
    pub key: String,
    /// Name as stocked.
    pub name: String,
    pub price: Money,
}

/// The minibar of one room.
///
/// ## Invariants
/// - At most one drink and one snack entry per lowercase key
/// - No drink entry has quantity 0 (it is removed instead)
/// - `bill` only grows, except through `reset_bill` and `take_bill`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Minibar {
    drinks: Vec<DrinkStock>,
    snacks: Vec<SnackItem>,
    bill: Money,
    drink_price: Money,
}

impl Minibar {
    /// Stocks a minibar at the default drink price.
    ///
    /// Entries whose names differ only by case collapse into one; the first
    /// spelling is kept and the last value wins. Drinks stocked at zero are
    /// left out. Snacks with a negative price are left out.
    pub fn new<D, S, N, M>(drinks: D, snacks: S) -> Self
    where
        D: IntoIterator<Item = (N, u32)>,
        S: IntoIterator<Item = (M, Money)>,
        N: Into<String>,
        M: Into<String>,
    {
        let mut minibar = Minibar::empty();
        for (name, quantity) in drinks {
            minibar.stock_drink(name.into(), quantity);
        }
        for (name, price) in snacks {
            minibar.stock_snack(name.into(), price);
        }
        minibar
    }

    /// A minibar with nothing in it.
    pub fn empty() -> Self {
        Minibar {
            drinks: Vec::new(),
            snacks: Vec::new(),
            bill: Money::zero(),
            drink_price: DEFAULT_DRINK_PRICE,
        }
    }

    /// Overrides the fixed per-drink charge.
    ///
    /// A negative price is ignored and the current one is kept.
    pub fn with_drink_price(mut self, price: Money) -> Self {
        if price.amount() < 0 {
            warn!(price = %price, "Drink price must not be negative, keeping {}", self.drink_price);
            return self;
        }
        self.drink_price = price;
        self
    }

    fn stock_drink(&mut self, name: String, quantity: u32) {
        let key = normalize_item_name(&name);
        match self.drinks.iter().position(|d| d.key == key) {
            Some(i) if quantity == 0 => {
                self.drinks.remove(i);
            }
            Some(i) => self.drinks[i].quantity = quantity,
            None if quantity == 0 => {}
            None => self.drinks.push(DrinkStock {
                key,
                name,
                quantity,
            }),
        }
    }

    fn stock_snack(&mut self, name: String, price: Money) {
        if price.amount() < 0 {
            warn!(snack = %name, price = %price, "Snack price must not be negative, not stocked");
            return;
        }
        let key = normalize_item_name(&name);
        if let Some(snack) = self.snacks.iter_mut().find(|s| s.key == key) {
            snack.price = price;
        } else {
            self.snacks.push(SnackItem { key, name, price });
        }
    }

    // =========================================================================
    // Consumption
    // =========================================================================

    /// Eats a snack: charges its price and removes it.
    ///
    /// ## Returns
    /// - `Ok(price)` charged to the bill
    /// - `Err(ItemNotFound)` if no such snack; nothing changes
    pub fn eat(&mut self, name: &str) -> CoreResult<Money> {
        let key = normalize_item_name(name);
        let Some(i) = self.snacks.iter().position(|s| s.key == key) else {
            let err = CoreError::ItemNotFound {
                kind: ItemKind::Snack,
                name: key,
            };
            warn!("{}", err);
            return Err(err);
        };

        let snack = self.snacks.remove(i);
        self.bill += snack.price;
        debug!(snack = %snack.name, price = %snack.price, bill = %self.bill, "Snack eaten");
        Ok(snack.price)
    }

    /// Opens a drink: charges the fixed drink price and takes one off stock.
    ///
    /// The charge never depends on the stored quantity. The last bottle
    /// removes the entry.
    pub fn drink(&mut self, name: &str) -> CoreResult<Money> {
        let key = normalize_item_name(name);
        let Some(i) = self
            .drinks
            .iter()
            .position(|d| d.key == key && d.quantity > 0)
        else {
            let err = CoreError::ItemNotFound {
                kind: ItemKind::Drink,
                name: key,
            };
            warn!("{}", err);
            return Err(err);
        };

        self.bill += self.drink_price;
        let drink = &mut self.drinks[i];
        drink.quantity = drink.quantity.saturating_sub(1);
        debug!(drink = %drink.name, left = drink.quantity, bill = %self.bill, "Drink opened");
        if drink.quantity == 0 {
            self.drinks.remove(i);
        }
        Ok(self.drink_price)
    }

    // =========================================================================
    // Bill
    // =========================================================================

    pub fn bill(&self) -> Money {
        self.bill
    }

    pub fn drink_price(&self) -> Money {
        self.drink_price
    }

    /// Clears the bill for a new stay.
    pub fn reset_bill(&mut self) {
        self.bill = Money::zero();
    }

    /// Hands the bill over, leaving this minibar at zero.
    pub fn take_bill(&mut self) -> Money {
        std::mem::take(&mut self.bill)
    }

    /// Adds a bill carried over from another room.
    pub fn absorb_bill(&mut self, amount: Money) {
        self.bill += amount;
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Remaining stock of a drink, case-insensitive.
    pub fn drink_stock(&self, name: &str) -> Option<u32> {
        let key = normalize_item_name(name);
        self.drinks.iter().find(|d| d.key == key).map(|d| d.quantity)
    }

    /// Price of a snack, case-insensitive.
    pub fn snack_price(&self, name: &str) -> Option<Money> {
        let key = normalize_item_name(name);
        self.snacks.iter().find(|s| s.key == key).map(|s| s.price)
    }

    pub fn drinks(&self) -> &[DrinkStock] {
        &self.drinks
    }

    pub fn snacks(&self) -> &[SnackItem] {
        &self.snacks
    }

    /// True when nothing is left to consume.
    pub fn is_empty(&self) -> bool {
        self.drinks.is_empty() && self.snacks.is_empty()
    }
}

impl Default for Minibar {
    fn default() -> Self {
        Self::empty()
    }
}

/// Three lines: drinks, snacks, bill. No trailing newline.
impl fmt::Display for Minibar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.drinks.is_empty() {
            writeln!(f, "No drinks left")?;
        } else {
            let drinks: Vec<String> = self
                .drinks
                .iter()
                .map(|d| format!("{} ({})", d.name, d.quantity))
                .collect();
            writeln!(f, "Drinks: {}", drinks.join(", "))?;
        }

        if self.snacks.is_empty() {
            writeln!(f, "No snacks left")?;
        } else {
            let snacks: Vec<String> = self
                .snacks
                .iter()
                .map(|s| format!("{} ({})", s.name, s.price))
                .collect();
            writeln!(f, "Snacks: {}", snacks.join(", "))?;
        }

        if self.bill.is_zero() {
            write!(f, "No bill yet")
        } else {
            write!(f, "Bill: {}", self.bill)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn stocked() -> Minibar {
        Minibar::new(
            [("Cola", 2), ("Water", 1)],
            [("Chips", Money::new(7)), ("Chocolate", Money::new(12))],
        )
    }

    #[test]
    fn test_eat_charges_and_removes() {
        let mut minibar = stocked();

        let charged = minibar.eat("chips").unwrap();

        assert_eq!(charged, Money::new(7));
        assert_eq!(minibar.bill(), Money::new(7));
        assert_eq!(minibar.snack_price("Chips"), None);
        assert_eq!(minibar.snacks().len(), 1);
    }

    #[test]
    fn test_eat_is_case_insensitive() {
        let mut minibar = stocked();
        assert!(minibar.eat("CHOCOLATE").is_ok());
        assert_eq!(minibar.bill(), Money::new(12));
    }

    #[test]
    fn test_eat_missing_snack() {
        let mut minibar = stocked();

        let err = minibar.eat("Pringles").unwrap_err();

        assert_eq!(err.to_string(), "The snack pringles was not found.");
        assert!(minibar.bill().is_zero());
        assert_eq!(minibar.snacks().len(), 2);
    }

    #[test]
    fn test_eat_twice_second_misses() {
        let mut minibar = stocked();
        minibar.eat("Chips").unwrap();
        assert!(minibar.eat("Chips").is_err());
        assert_eq!(minibar.bill(), Money::new(7));
    }

    #[test]
    fn test_drink_decrements_and_charges_fixed_price() {
        let mut minibar = stocked();

        minibar.drink("cola").unwrap();

        assert_eq!(minibar.drink_stock("Cola"), Some(1));
        assert_eq!(minibar.bill(), DEFAULT_DRINK_PRICE);
    }

    #[test]
    fn test_drink_removed_at_zero() {
        let mut minibar = stocked();

        minibar.drink("WATER").unwrap();

        assert_eq!(minibar.drink_stock("water"), None);
        assert!(minibar.drink("water").is_err());
        assert_eq!(minibar.bill(), DEFAULT_DRINK_PRICE);
    }

    #[test]
    fn test_drink_missing() {
        let mut minibar = stocked();
        let err = minibar.drink("Beer").unwrap_err();
        assert_eq!(err.to_string(), "The drink beer was not found.");
        assert!(minibar.bill().is_zero());
    }

    #[test]
    fn test_custom_drink_price() {
        let mut minibar = stocked().with_drink_price(Money::new(4));
        minibar.drink("Cola").unwrap();
        minibar.drink("Cola").unwrap();
        assert_eq!(minibar.bill(), Money::new(8));
    }

    #[test]
    fn test_negative_prices_rejected() {
        let mut minibar = Minibar::new(
            [("Cola", 1)],
            [("Voucher", Money::new(-50)), ("Chips", Money::new(7))],
        )
        .with_drink_price(Money::new(-3));

        assert_eq!(minibar.snack_price("voucher"), None);
        assert!(minibar.eat("Voucher").is_err());
        assert_eq!(minibar.drink_price(), DEFAULT_DRINK_PRICE);

        minibar.eat("chips").unwrap();
        minibar.drink("cola").unwrap();
        assert_eq!(minibar.bill(), Money::new(7) + DEFAULT_DRINK_PRICE);
    }

    #[test]
    fn test_free_snack_allowed() {
        let mut minibar = Minibar::new(Vec::<(&str, u32)>::new(), [("Mint", Money::zero())]);
        assert_eq!(minibar.eat("mint").unwrap(), Money::zero());
        assert!(minibar.bill().is_zero());
    }

    #[test]
    fn test_deserialized_empty_drink_line_is_out_of_stock() {
        let json = r#"{
            "drinks": [{ "key": "cola", "name": "Cola", "quantity": 0 }],
            "snacks": [],
            "bill": 0,
            "drink_price": 10
        }"#;
        let mut minibar: Minibar = serde_json::from_str(json).unwrap();

        let err = minibar.drink("cola").unwrap_err();

        assert_eq!(err.to_string(), "The drink cola was not found.");
        assert!(minibar.bill().is_zero());
    }

    #[test]
    fn test_case_variants_collapse_on_stocking() {
        let minibar = Minibar::new([("Cola", 2), ("COLA", 5)], Vec::<(&str, Money)>::new());
        assert_eq!(minibar.drinks().len(), 1);
        assert_eq!(minibar.drinks()[0].name, "Cola");
        assert_eq!(minibar.drink_stock("cola"), Some(5));
    }

    #[test]
    fn test_take_bill_leaves_zero() {
        let mut minibar = stocked();
        minibar.eat("Chips").unwrap();

        let bill = minibar.take_bill();

        assert_eq!(bill, Money::new(7));
        assert!(minibar.bill().is_zero());
    }

    #[test]
    fn test_display() {
        let mut minibar = stocked();
        assert_eq!(
            minibar.to_string(),
            "Drinks: Cola (2), Water (1)\nSnacks: Chips (7), Chocolate (12)\nNo bill yet"
        );

        minibar.drink("water").unwrap();
        minibar.eat("chips").unwrap();
        minibar.eat("chocolate").unwrap();
        let expected_bill = DEFAULT_DRINK_PRICE + Money::new(19);
        assert_eq!(
            minibar.to_string(),
            format!("Drinks: Cola (2)\nNo snacks left\nBill: {}", expected_bill)
        );
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(
            Minibar::empty().to_string(),
            "No drinks left\nNo snacks left\nNo bill yet"
        );
    }
}
