use crate::expense::Expense;
use std::fmt;

const DEFAULT_CATEGORIES: [&str; 8] = [
    "Food",
    "Travel",
    "EMI",
    "Bills",
    "Shopping",
    "Entertainment",
    "Health",
    "Other",
];

/// The categories a user may pick from when recording an expense.
///
/// This list only drives selection. Records are never checked against it, so a
/// record keeps its category even if that category is later dropped from the list.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryList(Vec<String>);

impl CategoryList {
    /// Builds a list from configuration, skipping blank and repeated names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list: Vec<String> = Vec::new();
        for name in names.into_iter().map(Into::into) {
            if !name.trim().is_empty() && !list.contains(&name) {
                list.push(name);
            }
        }
        CategoryList(list)
    }

    /// The preselected category of the add expense form.
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|c| c == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for CategoryList {
    fn default() -> Self {
        CategoryList::new(DEFAULT_CATEGORIES.iter().copied())
    }
}

/// Narrows the dashboard's expense list to one category, or shows everything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(String),
}

impl CategoryFilter {
    /// Every filter the dashboard menu offers, "All Categories" first.
    pub fn options(categories: &CategoryList) -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(categories.iter().map(|c| CategoryFilter::Only(c.into())))
            .collect()
    }

    // Exact comparison, "food" does not match "Food"
    pub fn matches(&self, expense: &Expense) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => expense.category() == category,
        }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "All Categories"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}
