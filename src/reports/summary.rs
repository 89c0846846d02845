//! Category summary of a set of records
//!
//! `summarize` is a pure two-key reduction: (category, subcategory) → sum.
//! Amounts are exact decimals, so every total is independent of input order.
//! Only the order of category blocks follows the input (first seen first);
//! subcategories inside a block are alphabetical.

use std::collections::BTreeMap;

use crate::models::{Category, Money, Record};

/// Total for one (category, subcategory) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubcategoryTotal {
    pub category: Category,
    pub subcategory: String,
    pub total: Money,
    /// Number of records in this group
    pub count: usize,
}

/// Total for one category, with its subcategory breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
    pub count: usize,
    /// Alphabetical by subcategory name
    pub subcategories: Vec<SubcategoryTotal>,
}

/// Aggregated view of a record set
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Summary {
    /// Category blocks in first-seen order
    pub categories: Vec<CategoryTotal>,
    pub total_income: Money,
    pub total_expense: Money,
    /// Income minus expense; negative when spending exceeds income
    pub net_savings: Money,
    pub record_count: usize,
}

impl Summary {
    /// Every (category, subcategory) total, block by block
    pub fn by_subcategory(&self) -> impl Iterator<Item = &SubcategoryTotal> {
        self.categories.iter().flat_map(|c| c.subcategories.iter())
    }

    /// Every category total, in block order
    pub fn by_category(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        self.categories.iter().map(|c| (c.category, c.total))
    }

    /// Total for one pair, if any record had it
    pub fn subcategory_total(&self, category: Category, subcategory: &str) -> Option<Money> {
        self.by_subcategory()
            .find(|s| s.category == category && s.subcategory == subcategory)
            .map(|s| s.total)
    }

    /// Total for a category; zero when it has no records
    pub fn category_total(&self, category: Category) -> Money {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.total)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}

/// Reduce records to per-subcategory, per-category and overall totals
pub fn summarize(records: &[Record]) -> Summary {
    let mut blocks: Vec<(Category, BTreeMap<&str, (Money, usize)>)> = Vec::new();
    let mut total_income = Money::zero();
    let mut total_expense = Money::zero();

    for record in records {
        let index = match blocks.iter().position(|(c, _)| *c == record.category) {
            Some(index) => index,
            None => {
                blocks.push((record.category, BTreeMap::new()));
                blocks.len() - 1
            }
        };

        let entry = blocks[index]
            .1
            .entry(record.subcategory.as_str())
            .or_insert((Money::zero(), 0));
        entry.0 += record.amount;
        entry.1 += 1;

        match record.category {
            Category::Income => total_income += record.amount,
            Category::Expense => total_expense += record.amount,
        }
    }

    let categories = blocks
        .into_iter()
        .map(|(category, subs)| {
            let subcategories: Vec<SubcategoryTotal> = subs
                .into_iter()
                .map(|(name, (total, count))| SubcategoryTotal {
                    category,
                    subcategory: name.to_string(),
                    total,
                    count,
                })
                .collect();

            CategoryTotal {
                category,
                total: subcategories.iter().map(|s| s.total).sum(),
                count: subcategories.iter().map(|s| s.count).sum(),
                subcategories,
            }
        })
        .collect();

    Summary {
        categories,
        total_income,
        total_expense,
        net_savings: total_income - total_expense,
        record_count: records.len(),
    }
}
