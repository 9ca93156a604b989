//! In-memory category storage
//!
//! Categories are kept by id with a secondary title index. The index is what
//! enforces the one-category-per-title invariant at the storage layer: saving
//! a second category with an existing title fails with
//! [`LedgerError::DuplicateCategory`].

use crate::core::traits::CategoryRepository;
use crate::types::{Category, CategoryId, LedgerError, NewCategory};
use std::collections::{BTreeMap, HashMap, HashSet};

/// In-memory category store
#[derive(Debug)]
pub struct CategoryStore {
    categories: BTreeMap<CategoryId, Category>,

    /// Title to id
    by_title: HashMap<String, CategoryId>,

    next_id: CategoryId,
}

impl CategoryStore {
    /// Create a new empty category store
    pub fn new() -> Self {
        CategoryStore {
            categories: BTreeMap::new(),
            by_title: HashMap::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// All categories in ascending id order
    pub fn all(&self) -> Vec<Category> {
        self.categories.values().cloned().collect()
    }

    fn insert(&mut self, category: NewCategory) -> Category {
        let id = self.next_id;
        self.next_id += 1;
        let saved = category.into_category(id);
        self.by_title.insert(saved.title.clone(), id);
        self.categories.insert(id, saved.clone());
        saved
    }

    /// Check a batch of new titles against the store and against each other
    fn check_new_titles<'a>(
        &self,
        titles: impl IntoIterator<Item = &'a str>,
    ) -> Result<usize, LedgerError> {
        let mut seen = HashSet::new();
        for title in titles {
            if self.by_title.contains_key(title) || !seen.insert(title) {
                return Err(LedgerError::duplicate_category(title));
            }
        }

        let count = CategoryId::try_from(seen.len())
            .map_err(|_| LedgerError::persistence("too many categories in one save"))?;
        self.next_id
            .checked_add(count)
            .ok_or_else(|| LedgerError::persistence("category id space exhausted"))?;

        Ok(seen.len())
    }
}

impl Default for CategoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryRepository for CategoryStore {
    fn find_category(&self, id: CategoryId) -> Result<Option<Category>, LedgerError> {
        Ok(self.categories.get(&id).cloned())
    }

    fn find_category_by_title(&self, title: &str) -> Result<Option<Category>, LedgerError> {
        Ok(self
            .by_title
            .get(title)
            .and_then(|id| self.categories.get(id))
            .cloned())
    }

    fn find_categories_by_titles(&self, titles: &[String]) -> Result<Vec<Category>, LedgerError> {
        let wanted: HashSet<&str> = titles.iter().map(String::as_str).collect();

        Ok(self
            .categories
            .values()
            .filter(|category| wanted.contains(category.title.as_str()))
            .cloned()
            .collect())
    }

    fn save_category(&mut self, category: NewCategory) -> Result<Category, LedgerError> {
        self.check_new_titles([category.title.as_str()])?;
        Ok(self.insert(category))
    }

    fn save_categories(
        &mut self,
        categories: Vec<NewCategory>,
    ) -> Result<Vec<Category>, LedgerError> {
        self.check_new_titles(categories.iter().map(|c| c.title.as_str()))?;
        Ok(categories.into_iter().map(|c| self.insert(c)).collect())
    }
}
