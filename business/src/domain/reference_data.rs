use std::collections::HashMap;

const HEALTHY_SWAPS: [(&str, &str); 35] = [
    ("white flour", "almond flour"),
    ("salt", "herbs & spices"),
    ("jam", "mashed berries"),
    ("white sugar syrup", "maple syrup"),
    ("crispy fries", "air-fried fries"),
    ("whole milk", "low-fat milk"),
    ("cream", "coconut milk"),
    ("regular yogurt", "greek yogurt"),
    ("cheese slices", "low-fat cheese"),
    ("sausage", "lean chicken sausage"),
    ("white bread pizza base", "cauliflower crust"),
    ("regular noodles", "zoodles (zucchini noodles)"),
    ("mashed potatoes", "mashed cauliflower"),
    ("refined cereal", "oats"),
    ("granola bars", "nuts & seeds mix"),
    ("energy drinks", "electrolyte water"),
    ("milkshake", "protein smoothie"),
    ("pastries", "whole-grain muffins"),
    ("white tortilla", "whole wheat tortilla"),
    ("white pita", "whole-grain pita"),
    ("regular crackers", "whole-grain crackers"),
    ("pizza", "grilled veggie flatbread"),
    ("white gnocchi", "sweet potato gnocchi"),
    ("sugary coffee", "black coffee"),
    ("latte", "oat milk latte"),
    ("bbq marinade", "dry rub spices"),
    ("ketchup", "salsa"),
    ("chocolate spread", "peanut butter"),
    ("white potato", "sweet potato"),
    ("heavy gravy", "tomato-based sauce"),
    ("white couscous", "quinoa"),
    ("regular wrap", "lettuce wrap"),
    ("fried snacks", "air-fried snacks"),
    ("regular ice pops", "frozen fruit pops"),
    ("soft drinks", "infused water"),
];

const USAGE_INTERVALS: [(&str, u32); 5] = [
    ("milk", 7),
    ("eggs", 14),
    ("bread", 5),
    ("apples", 10),
    ("soda", 3),
];

/// Unhealthy item name -> healthier alternative, both lowercase, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthySwapTable {
    entries: Vec<(String, String)>,
}

impl HealthySwapTable {
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.as_ref().to_lowercase(), v.as_ref().to_lowercase()))
                .collect(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(HEALTHY_SWAPS)
    }

    /// Case-insensitive lookup of the alternative for `name`.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        let key = name.to_lowercase();
        self.entries
            .iter()
            .find(|(unhealthy, _)| *unhealthy == key)
            .map(|(_, healthy)| healthy.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Item name (lowercase) -> expected days between purchases.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageIntervalTable {
    entries: HashMap<String, u32>,
}

impl UsageIntervalTable {
    /// Zero-day intervals are dropped.
    pub fn new<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, u32)>,
        K: AsRef<str>,
    {
        Self {
            entries: pairs
                .into_iter()
                .filter(|(_, days)| *days > 0)
                .map(|(k, days)| (k.as_ref().to_lowercase(), days))
                .collect(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(USAGE_INTERVALS)
    }

    pub fn expected_days(&self, name: &str) -> Option<u32> {
        self.entries.get(&name.to_lowercase()).copied()
    }
}

/// The immutable lookup tables consulted by the cart and the suggestion engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    pub swaps: HealthySwapTable,
    pub usage: UsageIntervalTable,
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self {
            swaps: HealthySwapTable::builtin(),
            usage: UsageIntervalTable::builtin(),
        }
    }
}

/// Upper-cases every letter that does not follow another letter and
/// lower-cases the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(c);
            previous_is_letter = false;
        }
    }
    out
}
