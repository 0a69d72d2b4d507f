//! Term store rules shared by the category adapters
//!
//! Adapters load the sibling terms they need and run these checks before
//! writing, so every backend rejects the same inputs with the same messages.

use super::validation::{slugify, unique_slug};
use crate::contract::{
    Category, CategoryAttributes, CategoryOrderBy, CategoryQuery, NewCategory, SortOrder,
};
use anyhow::{bail, Result};
use std::cmp::Ordering;

/// Validate a new term and resolve its slug
pub fn prepare_insert(existing: &[Category], category: &NewCategory) -> Result<String> {
    let name = category.name.trim();
    if name.is_empty() {
        bail!("A name is required for this term.");
    }
    check_parent(existing, category.parent, None)?;

    if existing
        .iter()
        .any(|t| t.parent == category.parent && t.name.eq_ignore_ascii_case(name))
    {
        bail!("A term with the name provided already exists with this parent.");
    }

    let base = if category.slug.is_empty() {
        slugify(name)
    } else {
        category.slug.clone()
    };
    if base.is_empty() {
        bail!("Could not derive a slug from the term name.");
    }

    Ok(unique_slug(&base, |candidate| {
        existing.iter().any(|t| t.slug == candidate)
    }))
}

/// Validate replacement attributes for term `id` and resolve the final slug
pub fn prepare_update(
    existing: &[Category],
    id: u64,
    attributes: &CategoryAttributes,
) -> Result<String> {
    let name = attributes.name.trim();
    if name.is_empty() {
        bail!("A name is required for this term.");
    }
    check_parent(existing, attributes.parent, Some(id))?;
    if is_descendant(existing, attributes.parent, id) {
        bail!("A term cannot be moved under one of its own descendants.");
    }

    let others = || existing.iter().filter(move |t| t.id != id);

    if others().any(|t| t.parent == attributes.parent && t.name.eq_ignore_ascii_case(name)) {
        bail!("A term with the name provided already exists with this parent.");
    }

    if attributes.slug.is_empty() {
        let base = slugify(name);
        if base.is_empty() {
            bail!("Could not derive a slug from the term name.");
        }
        return Ok(unique_slug(&base, |candidate| {
            others().any(|t| t.slug == candidate)
        }));
    }

    if others().any(|t| t.slug == attributes.slug) {
        bail!(
            "The slug \"{}\" is already in use by another term.",
            attributes.slug
        );
    }
    Ok(attributes.slug.clone())
}

fn check_parent(existing: &[Category], parent: u64, own_id: Option<u64>) -> Result<()> {
    if parent == 0 {
        return Ok(());
    }
    if Some(parent) == own_id {
        bail!("A term cannot be its own parent.");
    }
    if !existing.iter().any(|t| t.id == parent) {
        bail!("Parent term does not exist.");
    }
    Ok(())
}

/// Walk up from `term` and report whether the chain passes through `ancestor`
fn is_descendant(existing: &[Category], term: u64, ancestor: u64) -> bool {
    let mut current = term;
    // Bounded so a loop already present in storage cannot spin forever
    for _ in 0..existing.len() {
        if current == 0 {
            return false;
        }
        if current == ancestor {
            return true;
        }
        match existing.iter().find(|t| t.id == current) {
            Some(t) => current = t.parent,
            None => return false,
        }
    }
    false
}

/// Filter, order and truncate a term list according to the query
pub fn apply_query(mut terms: Vec<Category>, query: &CategoryQuery) -> Vec<Category> {
    if query.hide_empty {
        terms.retain(|t| t.count > 0);
    }

    terms.sort_by(|a, b| {
        let ordering = compare_by(a, b, query.order_by).then_with(|| a.id.cmp(&b.id));
        match query.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    if let Some(limit) = query.limit {
        terms.truncate(limit);
    }
    terms
}

fn compare_by(a: &Category, b: &Category, order_by: CategoryOrderBy) -> Ordering {
    match order_by {
        CategoryOrderBy::Id => a.id.cmp(&b.id),
        CategoryOrderBy::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        CategoryOrderBy::Slug => a.slug.cmp(&b.slug),
        CategoryOrderBy::Description => a.description.cmp(&b.description),
        CategoryOrderBy::Count => a.count.cmp(&b.count),
        CategoryOrderBy::Parent => a.parent.cmp(&b.parent),
    }
}
