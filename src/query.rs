//! Role-gated visibility, search, owner filter, and pagination.

use crate::{actor::Actor, types::Role, vehicle::VehicleRecord};

/// Fixed number of records per page.
pub const PAGE_SIZE: usize = 5;

/// Search and filter controls, as entered in the view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordFilter {
    /// Case-insensitive substring matched against every textual field.
    /// Empty matches everything.
    pub search: String,
    /// Exact owner-name filter. Empty means no filter.
    pub owner: String,
}

/// One page of the records visible to an actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleSlice {
    /// Records on this page, in store order.
    pub items: Vec<VehicleRecord>,
    /// The page actually served, clamped into `[1, total_pages]`.
    pub page: usize,
    /// Total page count; at least 1 even for an empty set.
    pub total_pages: usize,
}

/// Applies the role visibility gate and, for admins, the filter controls.
///
/// Gating happens before search and filter:
/// - `Consultant` sees nothing. This mirrors the behavior the system has
///   always had for the view-only role and is kept deliberately.
/// - `Operator` sees only records it owns; the filter controls are bypassed.
/// - `Admin` sees everything, reduced by search and owner filter.
pub fn visible_records<'a>(
    actor: &Actor,
    records: &'a [VehicleRecord],
    filter: &RecordFilter,
) -> Vec<&'a VehicleRecord> {
    match actor.role {
        Role::Consultant => Vec::new(),
        Role::Operator => records.iter().filter(|r| r.owner == actor.name).collect(),
        Role::Admin => records
            .iter()
            .filter(|r| r.matches_search(&filter.search))
            .filter(|r| filter.owner.is_empty() || r.owner == filter.owner)
            .collect(),
    }
}

/// Total pages for `count` visible records: `ceil(count / PAGE_SIZE)`, never
/// below 1.
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE).max(1)
}

/// Computes the slice of `records` visible to `actor` on `page`.
///
/// A requested page outside `[1, total_pages]` is clamped rather than
/// served empty, so a shrinking visible set never strands the view on a
/// blank page.
pub fn visible_slice(
    actor: &Actor,
    records: &[VehicleRecord],
    filter: &RecordFilter,
    page: usize,
) -> VisibleSlice {
    let visible = visible_records(actor, records, filter);
    let total_pages = total_pages(visible.len());
    let page = page.clamp(1, total_pages);

    let start = (page - 1) * PAGE_SIZE;
    let items = visible
        .into_iter()
        .skip(start)
        .take(PAGE_SIZE)
        .cloned()
        .collect();

    VisibleSlice {
        items,
        page,
        total_pages,
    }
}
