use std::collections::HashMap;

use bevy::log::debug;

use super::{
    catalog::{Catalog, MenuEntry},
    money::Money,
};

/// Every unit the customer asked for, in the order the units were added.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawOrder {
    lines: Vec<MenuEntry>,
}

impl RawOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: MenuEntry) {
        debug!("order: added '{}' ({})", entry.name, entry.price);
        self.lines.push(entry);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        debug!("order: cleared {} unit(s)", self.lines.len());
        self.lines.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &MenuEntry> {
        self.lines.iter()
    }

    pub fn count_of(&self, entry: &MenuEntry) -> usize {
        self.lines.iter().filter(|line| *line == entry).count()
    }

    pub fn total(&self) -> Money {
        self.lines.iter().map(|line| line.price).sum()
    }

    /// Drops the first `amount` units equal to `entry`. Returns how many were removed.
    pub fn remove_units(&mut self, entry: &MenuEntry, amount: usize) -> usize {
        let mut removed = 0;
        self.lines.retain(|line| {
            if removed < amount && line == entry {
                removed += 1;
                false
            } else {
                true
            }
        });
        debug!("order: removed {removed} unit(s) of '{}'", entry.name);
        removed
    }
}

impl FromIterator<MenuEntry> for RawOrder {
    fn from_iter<I: IntoIterator<Item = MenuEntry>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AggregatedLine {
    pub entry: MenuEntry,
    pub quantity: usize,
}

impl AggregatedLine {
    pub fn line_total(&self) -> Money {
        self.entry.price.times(self.quantity)
    }
}

/// Groups identical units and orders the groups by category priority, then by catalog
/// position. Unlisted categories or entries rank as [`super::catalog::UNRANKED`].
pub fn aggregate(order: &RawOrder, catalog: &Catalog) -> Vec<AggregatedLine> {
    let mut counts: HashMap<&MenuEntry, usize> = HashMap::new();
    for line in order.iter() {
        *counts.entry(line).or_default() += 1;
    }

    let mut lines: Vec<AggregatedLine> = counts
        .into_iter()
        .map(|(entry, quantity)| AggregatedLine {
            entry: entry.clone(),
            quantity,
        })
        .collect();

    lines.sort_by(|a, b| {
        let key_a = (
            catalog.category_rank(&a.entry.category),
            catalog.entry_rank(&a.entry),
        );
        let key_b = (
            catalog.category_rank(&b.entry.category),
            catalog.entry_rank(&b.entry),
        );
        key_a
            .cmp(&key_b)
            .then_with(|| a.entry.category.cmp(&b.entry.category))
            .then_with(|| a.entry.name.cmp(&b.entry.name))
            .then_with(|| a.entry.price.cmp(&b.entry.price))
    });
    lines
}

pub fn aggregated_total(lines: &[AggregatedLine]) -> Money {
    lines.iter().map(AggregatedLine::line_total).sum()
}

/// Number of distinct category bands in an already aggregated order.
pub fn category_group_count(lines: &[AggregatedLine]) -> usize {
    let mut groups = 0;
    let mut current: Option<&str> = None;
    for line in lines {
        if current != Some(line.entry.category.as_str()) {
            current = Some(line.entry.category.as_str());
            groups += 1;
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_named(catalog: &Catalog, name: &str) -> MenuEntry {
        catalog
            .entries()
            .iter()
            .find(|entry| entry.name == name)
            .cloned()
            .unwrap_or_else(|| panic!("catalog entry {name}"))
    }

    #[test]
    fn groups_repeated_units_and_orders_by_category() {
        let catalog = Catalog::default();
        let bruschetta = entry_named(&catalog, "Bruschetta al Pomodoro");
        let margherita = entry_named(&catalog, "Pizza Margherita");
        let order: RawOrder = [margherita.clone(), bruschetta.clone(), bruschetta.clone()]
            .into_iter()
            .collect();

        let lines = aggregate(&order, &catalog);

        assert_eq!(
            lines,
            vec![
                AggregatedLine {
                    entry: bruschetta,
                    quantity: 2,
                },
                AggregatedLine {
                    entry: margherita,
                    quantity: 1,
                },
            ]
        );
        assert_eq!(aggregated_total(&lines), Money::from_cents(2000));
        assert_eq!(order.total(), Money::from_cents(2000));
    }

    #[test]
    fn pizza_sorts_before_dessert() {
        let catalog = Catalog::default();
        let tiramisu = entry_named(&catalog, "Tiramisù");
        let margherita = entry_named(&catalog, "Pizza Margherita");
        let order: RawOrder = [tiramisu, margherita].into_iter().collect();

        let names: Vec<_> = aggregate(&order, &catalog)
            .into_iter()
            .map(|line| line.entry.name)
            .collect();
        assert_eq!(names, ["Pizza Margherita", "Tiramisù"]);
    }

    #[test]
    fn entries_within_a_category_follow_catalog_position() {
        let catalog = Catalog::default();
        let order: RawOrder = ["Cappuccino", "Acqua Naturale", "Caffè Espresso"]
            .into_iter()
            .map(|name| entry_named(&catalog, name))
            .collect();

        let names: Vec<_> = aggregate(&order, &catalog)
            .into_iter()
            .map(|line| line.entry.name)
            .collect();
        assert_eq!(names, ["Acqua Naturale", "Caffè Espresso", "Cappuccino"]);
    }

    #[test]
    fn quantities_and_totals_are_conserved() {
        let catalog = Catalog::default();
        let order: RawOrder = catalog
            .entries()
            .iter()
            .enumerate()
            .flat_map(|(index, entry)| std::iter::repeat(entry.clone()).take(index % 4))
            .collect();

        let lines = aggregate(&order, &catalog);

        let quantity: usize = lines.iter().map(|line| line.quantity).sum();
        assert_eq!(quantity, order.len());
        assert_eq!(aggregated_total(&lines), order.total());
    }

    #[test]
    fn aggregation_ignores_insertion_order_and_is_idempotent() {
        let catalog = Catalog::default();
        let picks = [
            "Tiramisù",
            "Pizza Diavola",
            "Acqua Frizzante",
            "Pizza Diavola",
            "Carpaccio di Manzo",
            "Tiramisù",
            "Pizza Diavola",
        ];
        let forward: RawOrder = picks.iter().map(|name| entry_named(&catalog, name)).collect();
        let first = aggregate(&forward, &catalog);
        assert_eq!(first, aggregate(&forward, &catalog));

        let order_from = |names: &[&str]| -> RawOrder {
            names.iter().map(|name| entry_named(&catalog, name)).collect()
        };
        for shift in 0..picks.len() {
            let mut rotated = picks;
            rotated.rotate_left(shift);
            assert_eq!(first, aggregate(&order_from(&rotated[..]), &catalog));
            rotated.reverse();
            assert_eq!(first, aggregate(&order_from(&rotated[..]), &catalog));
        }
        // 3 is coprime with 7, so stepping by it visits every pick once.
        let strided: Vec<&str> = (0..picks.len()).map(|i| picks[(i * 3) % picks.len()]).collect();
        assert_eq!(first, aggregate(&order_from(strided.as_slice()), &catalog));
        assert_eq!(forward.len(), picks.len());
    }

    #[test]
    fn unlisted_entries_sort_last() {
        let catalog = Catalog::default();
        let special = MenuEntry::new("Grappa", Money::from_cents(600), "Digestivi");
        let order: RawOrder = [special.clone(), entry_named(&catalog, "Cannolo Siciliano")]
            .into_iter()
            .collect();

        let lines = aggregate(&order, &catalog);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].entry, special);
    }

    #[test]
    fn remove_units_drops_only_the_requested_amount() {
        let catalog = Catalog::default();
        let espresso = entry_named(&catalog, "Caffè Espresso");
        let water = entry_named(&catalog, "Acqua Naturale");
        let mut order: RawOrder = [espresso.clone(), water.clone(), espresso.clone(), espresso.clone()]
            .into_iter()
            .collect();

        assert_eq!(order.remove_units(&espresso, 2), 2);
        assert_eq!(order.count_of(&espresso), 1);
        assert_eq!(order.count_of(&water), 1);

        assert_eq!(order.remove_units(&espresso, 5), 1);
        assert_eq!(order.len(), 1);
        assert!(aggregate(&order, &catalog)
            .iter()
            .all(|line| line.entry != espresso));
    }

    #[test]
    fn empty_order_aggregates_to_nothing() {
        let catalog = Catalog::default();
        let order = RawOrder::new();
        assert!(aggregate(&order, &catalog).is_empty());
        assert_eq!(order.total(), Money::ZERO);
        assert_eq!(category_group_count(&[]), 0);
    }
}
