//! Category resolution
//!
//! Transactions refer to categories by title. These functions turn titles into
//! persisted categories, creating any that do not exist yet.

use crate::core::traits::CategoryRepository;
use crate::types::{Category, LedgerError, NewCategory};

/// Return the category with this exact title, creating it if needed
///
/// An existing category is returned unchanged. Calling this repeatedly with
/// the same title always yields the same category.
pub fn find_or_create_category<R>(repository: &mut R, title: &str) -> Result<Category, LedgerError>
where
    R: CategoryRepository + ?Sized,
{
    if let Some(category) = repository.find_category_by_title(title)? {
        return Ok(category);
    }

    let category = repository.save_category(NewCategory::new(title))?;
    tracing::debug!(id = category.id, title = %category.title, "created category");
    Ok(category)
}

/// Resolve a set of titles in bulk
///
/// Performs one batched lookup, then creates every title without a match in a
/// single save. The result holds the existing categories followed by the newly
/// created ones (in the order their titles were given).
///
/// `titles` is expected to be free of duplicates.
pub fn find_or_create_categories<R>(
    repository: &mut R,
    titles: &[String],
) -> Result<Vec<Category>, LedgerError>
where
    R: CategoryRepository + ?Sized,
{
    let mut categories = repository.find_categories_by_titles(titles)?;

    let missing: Vec<NewCategory> = titles
        .iter()
        .filter(|title| !categories.iter().any(|existing| &existing.title == *title))
        .map(NewCategory::new)
        .collect();

    if !missing.is_empty() {
        let created = repository.save_categories(missing)?;
        tracing::debug!(count = created.len(), "created categories");
        categories.extend(created);
    }

    Ok(categories)
}
