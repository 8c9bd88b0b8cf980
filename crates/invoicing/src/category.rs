//! Category precedence and grouping of line items.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::order::LineItem;

/// The retailer's catalog categories, in display order.
pub const DEFAULT_CATEGORIES: [&str; 22] = [
    "ONE SOUND CRACKERS",
    "CHORSA & GAINT CRACKERS",
    "DELUXE CRACKERS",
    "WALA SPECIAL",
    "RETRO CRACKERS THALA DIWALI SPECIAL",
    "BIJILI CRACKERS",
    "ATOM BOMBS",
    "FLOWER POTS",
    "FLOWER POTS NEW ARRIVAL - 2024",
    "GROUND CHAKKAR",
    "Children Collections",
    "FOUNTAIN ITEMS",
    "PARTY CELEBRATION - 2024 SPECIAL",
    "CRACKLING FOUTAIN",
    "ROCKET",
    "TWINKLING STAR",
    "CANDEL COLLECTION",
    "FANCY SINGLE SHOTS",
    "FANCY CONTINIOUS SHOTS",
    "COLOUR MATCHES",
    "SPARKLERS",
    "GIFT BOX - NO DISCOUNT",
];

/// Rank given to categories missing from the precedence list.
pub const UNRANKED: usize = usize::MAX;

/// Ordered list of category names deciding the order of groups on an invoice.
///
/// Names are matched exactly (case-sensitive). A name listed twice keeps its
/// first position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct CategoryOrder {
    names: Vec<String>,
    rank: HashMap<String, usize>,
}

impl CategoryOrder {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut rank = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            rank.entry(name.clone()).or_insert(i);
        }
        Self { names, rank }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Position of `category` in the list, [`UNRANKED`] when absent.
    pub fn rank_of(&self, category: &str) -> usize {
        self.rank.get(category).copied().unwrap_or(UNRANKED)
    }

    /// Group items by category and order the groups by rank.
    ///
    /// Items keep their input order inside a group; unranked groups follow all
    /// ranked ones in first-seen order.
    pub fn group<'a>(&self, items: &'a [LineItem]) -> Vec<CategoryGroup<'a>> {
        let mut groups: Vec<CategoryGroup<'a>> = Vec::new();
        let mut slot: HashMap<&'a str, usize> = HashMap::new();

        for item in items {
            let category = item.category();
            match slot.get(category) {
                Some(&i) => groups[i].items.push(item),
                None => {
                    slot.insert(category, groups.len());
                    groups.push(CategoryGroup {
                        category,
                        items: vec![item],
                    });
                }
            }
        }

        // Stable: equal ranks (all unranked groups) stay in first-seen order.
        groups.sort_by_key(|g| self.rank_of(g.category));
        groups
    }
}

impl Default for CategoryOrder {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES)
    }
}

impl From<Vec<String>> for CategoryOrder {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl From<CategoryOrder> for Vec<String> {
    fn from(order: CategoryOrder) -> Self {
        order.names
    }
}

/// A contiguous run of items sharing a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub items: Vec<&'a LineItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use storefront_core::Amount;

    fn item(name: &str, category: &str) -> LineItem {
        LineItem::new(name, Some(category.to_string()), Amount::from_paise(100), 1).unwrap()
    }

    fn categories_of(groups: &[CategoryGroup<'_>]) -> Vec<String> {
        groups.iter().map(|g| g.category.to_string()).collect()
    }

    #[test]
    fn known_categories_follow_precedence_and_unknown_go_last() {
        let items = vec![
            item("Flower Pot Big", "FLOWER POTS"),
            item("Mystery", "UnknownCat"),
            item("Rocket Bomb", "ROCKET"),
        ];

        let groups = CategoryOrder::new(["ROCKET", "FLOWER POTS"]).group(&items);
        assert_eq!(categories_of(&groups), ["ROCKET", "FLOWER POTS", "UnknownCat"]);
    }

    #[test]
    fn default_list_orders_rocket_before_sparklers() {
        let items = vec![item("Sparkler 10cm", "SPARKLERS"), item("Rocket Bomb", "ROCKET")];
        let groups = CategoryOrder::default().group(&items);
        assert_eq!(categories_of(&groups), ["ROCKET", "SPARKLERS"]);
    }

    #[test]
    fn unknown_categories_keep_first_seen_order() {
        let items = vec![
            item("a", "Zeta"),
            item("b", "ROCKET"),
            item("c", "Alpha"),
            item("d", "Zeta"),
        ];

        let groups = CategoryOrder::new(["ROCKET"]).group(&items);
        assert_eq!(categories_of(&groups), ["ROCKET", "Zeta", "Alpha"]);
        let zeta: Vec<&str> = groups[1].items.iter().map(|i| i.product_name()).collect();
        assert_eq!(zeta, ["a", "d"]);
    }

    #[test]
    fn items_keep_input_order_within_a_group() {
        let items = vec![
            item("third", "SPARKLERS"),
            item("rocket", "ROCKET"),
            item("first", "SPARKLERS"),
            item("second", "SPARKLERS"),
        ];

        let groups = CategoryOrder::default().group(&items);
        let sparklers: Vec<&str> = groups[1].items.iter().map(|i| i.product_name()).collect();
        assert_eq!(sparklers, ["third", "first", "second"]);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let order = CategoryOrder::default();
        assert_eq!(order.rank_of("Children Collections"), 10);
        assert_eq!(order.rank_of("CHILDREN COLLECTIONS"), UNRANKED);
    }

    #[test]
    fn duplicate_names_keep_first_position() {
        let order = CategoryOrder::new(["A", "B", "A"]);
        assert_eq!(order.rank_of("A"), 0);
        assert_eq!(order.rank_of("B"), 1);
    }

    #[test]
    fn deserializes_from_plain_list() {
        let order: CategoryOrder = serde_json::from_str(r#"["ROCKET", "SPARKLERS"]"#).unwrap();
        assert_eq!(order.rank_of("SPARKLERS"), 1);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: grouping is a permutation of the input and group ranks never decrease.
        #[test]
        fn grouping_is_an_ordered_permutation(
            cats in prop::collection::vec(
                prop::sample::select(vec!["ROCKET", "SPARKLERS", "ATOM BOMBS", "Other", "Misc"]),
                0..40,
            )
        ) {
            let items: Vec<LineItem> = cats
                .iter()
                .enumerate()
                .map(|(i, c)| item(&i.to_string(), c))
                .collect();
            let order = CategoryOrder::default();
            let groups = order.group(&items);

            let count: usize = groups.iter().map(|g| g.items.len()).sum();
            prop_assert_eq!(count, items.len());

            let ranks: Vec<usize> = groups.iter().map(|g| order.rank_of(g.category)).collect();
            prop_assert!(ranks.windows(2).all(|w| w[0] <= w[1]));

            for g in &groups {
                let idx: Vec<usize> = g.items.iter().map(|i| i.product_name().parse().unwrap()).collect();
                prop_assert!(idx.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }
}
