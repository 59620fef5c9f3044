//! Place Feed State
//!
//! Accumulates paginated places for one (list, status, search) query key,
//! dedupes by id, and applies optimistic status changes with enough
//! history to revert them if the server rejects the write.
//!
//! # Usage
//! ```ignore
//! feed.reset(QueryKey { list_id, filter, search });
//! if let Some(request) = feed.request_next() {
//!     // fetch the page, then feed.apply_page(&request, page)
//! }
//! ```

use crate::api::types::{Place, PlaceStatus, PlacesPage, StatusCounts, StatusFilter};

/// Places fetched per page
pub const PAGE_SIZE: u32 = 12;

/// Identity of one paginated query
///
/// Changing any field invalidates everything accumulated so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryKey {
    pub list_id: u64,
    pub filter: StatusFilter,
    pub search: String,
}

/// Token for one in-flight page fetch
///
/// Responses are applied back through the token so answers for an
/// abandoned key can be recognized and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    generation: u64,
    pub key: QueryKey,
    pub page: u32,
}

/// Record of one optimistic status change
///
/// Holds the prior state so the caller can revert the change when the
/// status write fails on the server.
#[derive(Debug, Clone)]
pub struct StatusChange {
    generation: u64,
    pub place_id: u64,
    pub from: PlaceStatus,
    pub to: PlaceStatus,
    /// Position and pre-change copy, set when the place left the feed
    removed: Option<(usize, Place)>,
}

/// Accumulated place feed for the active query key
#[derive(Debug, Clone)]
pub struct FeedState {
    key: QueryKey,
    places: Vec<Place>,
    counts: StatusCounts,
    /// Next page to request (1-based)
    next_page: u32,
    has_next: bool,
    loading: bool,
    error: Option<String>,
    /// Bumped on every reset; stale requests carry an older value
    generation: u64,
}

impl FeedState {
    /// Create an empty feed for a query key
    pub fn new(key: QueryKey) -> Self {
        Self {
            key,
            places: Vec::new(),
            counts: StatusCounts::default(),
            next_page: 1,
            has_next: true,
            loading: false,
            error: None,
            generation: 0,
        }
    }

    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn counts(&self) -> StatusCounts {
        self.counts
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True while the first page of a fresh key is being fetched
    pub fn is_initial_load(&self) -> bool {
        self.loading && self.places.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.has_next
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Discard everything and point the feed at a new query key
    ///
    /// Outstanding requests keep the old generation and will be ignored
    /// when their responses arrive.
    pub fn reset(&mut self, key: QueryKey) {
        self.generation += 1;
        self.key = key;
        self.places.clear();
        self.counts = StatusCounts::default();
        self.next_page = 1;
        self.has_next = true;
        self.loading = false;
        self.error = None;
    }

    /// Claim the next page fetch, if one should happen
    ///
    /// Returns `None` while a request is already in flight or when the
    /// server reported no further pages. The caller performs the fetch
    /// and hands the result back via [`apply_page`] or [`fail`].
    ///
    /// [`apply_page`]: FeedState::apply_page
    /// [`fail`]: FeedState::fail
    pub fn request_next(&mut self) -> Option<PageRequest> {
        if self.loading || !self.has_next {
            return None;
        }

        self.loading = true;
        self.error = None;

        Some(PageRequest {
            generation: self.generation,
            key: self.key.clone(),
            page: self.next_page,
        })
    }

    /// Merge a fetched page into the feed
    ///
    /// Returns false when the request predates the last reset; the page
    /// is dropped without touching current state.
    pub fn apply_page(&mut self, request: &PageRequest, page: PlacesPage) -> bool {
        if request.generation != self.generation {
            return false;
        }

        self.loading = false;

        // Append distinct-by-id only; overlapping pages can repeat rows
        for place in page.places {
            if !self.places.iter().any(|existing| existing.id == place.id) {
                self.places.push(place);
            }
        }

        self.counts = page.status_counts;
        self.has_next = page.pagination.has_next;
        self.next_page = request.page + 1;

        true
    }

    /// Record a failed page fetch
    ///
    /// Stale failures are ignored the same way stale pages are.
    pub fn fail(&mut self, request: &PageRequest, message: String) -> bool {
        if request.generation != self.generation {
            return false;
        }

        self.loading = false;
        self.error = Some(message);

        true
    }

    /// Apply an optimistic status change to a place in the feed
    ///
    /// Adjusts the tallies and drops the place from the feed when its
    /// new status no longer matches the active filter. Returns the
    /// change record to revert with, or `None` when nothing changed.
    pub fn apply_status(&mut self, place_id: u64, to: PlaceStatus) -> Option<StatusChange> {
        let position = self.places.iter().position(|p| p.id == place_id)?;
        let from = self.places[position].status;

        if from == to {
            return None;
        }

        self.counts.decrement(from);
        self.counts.increment(to);

        let removed = if self.key.filter.matches(to) {
            self.places[position].status = to;
            None
        } else {
            Some((position, self.places.remove(position)))
        };

        Some(StatusChange {
            generation: self.generation,
            place_id,
            from,
            to,
            removed,
        })
    }

    /// Undo an optimistic status change after the server rejected it
    ///
    /// A change recorded before the last reset is ignored; the reload
    /// already restored server truth.
    pub fn revert_status(&mut self, change: StatusChange) {
        if change.generation != self.generation {
            return;
        }

        // A backfill page fetched after the removal can repeat the same
        // row; it arrives with server tallies, so neither the saved copy
        // nor the count adjustment applies then.
        let reappeared = change.removed.is_some()
            && self.places.iter().any(|p| p.id == change.place_id);

        if !reappeared {
            self.counts.increment(change.from);
            self.counts.decrement(change.to);
        }

        match change.removed {
            Some((position, place)) if !reappeared => {
                let position = position.min(self.places.len());
                self.places.insert(position, place);
            }
            _ => {
                if let Some(place) = self.places.iter_mut().find(|p| p.id == change.place_id) {
                    place.status = change.from;
                }
            }
        }
    }

    /// True when the feed thinned out below one page and more rows exist
    pub fn needs_backfill(&self) -> bool {
        self.places.len() < PAGE_SIZE as usize && self.has_next && !self.loading
    }
}

/// Visible subset of a place array for a search term and status filter
///
/// Case-insensitive substring match on name or phone, exact match on
/// status. An empty search term matches everything.
pub fn visible_places<'a>(
    places: &'a [Place],
    search: &str,
    filter: StatusFilter,
) -> Vec<&'a Place> {
    let needle = search.trim().to_lowercase();

    places
        .iter()
        .filter(|place| filter.matches(place.status))
        .filter(|place| {
            needle.is_empty()
                || place.name.to_lowercase().contains(&needle)
                || place.phone.contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::PageInfo;

    fn place(id: u64, name: &str, phone: &str, status: PlaceStatus) -> Place {
        Place {
            id,
            name: name.to_string(),
            phone: phone.to_string(),
            facebook_url: None,
            status,
            formatted_message: None,
        }
    }

    fn key(filter: StatusFilter, search: &str) -> QueryKey {
        QueryKey {
            list_id: 1,
            filter,
            search: search.to_string(),
        }
    }

    fn page(places: Vec<Place>, has_next: bool) -> PlacesPage {
        let mut counts = StatusCounts::default();
        for p in &places {
            counts.increment(p.status);
        }

        PlacesPage {
            places,
            status_counts: counts,
            pagination: PageInfo { has_next },
        }
    }

    #[test]
    fn test_request_next_guards_in_flight() {
        let mut feed = FeedState::new(key(StatusFilter::NotConnected, ""));

        let request = feed.request_next();
        assert!(request.is_some());
        assert_eq!(request.unwrap().page, 1);

        // Second request while the first is unresolved
        assert!(feed.request_next().is_none());
    }

    #[test]
    fn test_apply_page_accumulates_and_advances() {
        let mut feed = FeedState::new(key(StatusFilter::NotConnected, ""));

        let request = feed.request_next().unwrap();
        let applied = feed.apply_page(
            &request,
            page(
                vec![
                    place(1, "Cafe Nile", "+20101111111", PlaceStatus::NotConnected),
                    place(2, "Giza Bakery", "+20102222222", PlaceStatus::NotConnected),
                ],
                true,
            ),
        );

        assert!(applied);
        assert_eq!(feed.places().len(), 2);
        assert!(!feed.is_loading());
        assert!(feed.has_next());

        let next = feed.request_next().unwrap();
        assert_eq!(next.page, 2);
    }

    #[test]
    fn test_apply_page_dedupes_by_id() {
        let mut feed = FeedState::new(key(StatusFilter::NotConnected, ""));

        let first = feed.request_next().unwrap();
        feed.apply_page(
            &first,
            page(
                vec![
                    place(1, "A", "+20101111111", PlaceStatus::NotConnected),
                    place(2, "B", "+20102222222", PlaceStatus::NotConnected),
                ],
                true,
            ),
        );

        // Server pages shifted; row 2 shows up again
        let second = feed.request_next().unwrap();
        feed.apply_page(
            &second,
            page(
                vec![
                    place(2, "B", "+20102222222", PlaceStatus::NotConnected),
                    place(3, "C", "+20103333333", PlaceStatus::NotConnected),
                ],
                false,
            ),
        );

        let ids: Vec<u64> = feed.places().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(!feed.has_next());
        assert!(feed.request_next().is_none());
    }

    #[test]
    fn test_reset_clears_before_new_data() {
        let mut feed = FeedState::new(key(StatusFilter::NotConnected, ""));

        let request = feed.request_next().unwrap();
        feed.apply_page(
            &request,
            page(
                vec![place(1, "A", "+20101111111", PlaceStatus::NotConnected)],
                true,
            ),
        );

        feed.reset(key(StatusFilter::Connected, "cafe"));

        assert!(feed.places().is_empty());
        assert_eq!(feed.counts(), StatusCounts::default());
        assert_eq!(feed.request_next().unwrap().page, 1);
    }

    #[test]
    fn test_stale_page_dropped_after_reset() {
        let mut feed = FeedState::new(key(StatusFilter::NotConnected, ""));

        let stale = feed.request_next().unwrap();
        feed.reset(key(StatusFilter::NotConnected, "other"));

        let applied = feed.apply_page(
            &stale,
            page(
                vec![place(9, "Old", "+20109999999", PlaceStatus::NotConnected)],
                true,
            ),
        );

        assert!(!applied);
        assert!(feed.places().is_empty());

        // The new key still gets its own first page
        let fresh = feed.request_next().unwrap();
        assert_eq!(fresh.page, 1);
    }

    #[test]
    fn test_stale_failure_ignored() {
        let mut feed = FeedState::new(key(StatusFilter::NotConnected, ""));

        let stale = feed.request_next().unwrap();
        feed.reset(key(StatusFilter::NotConnected, "fresh"));

        assert!(!feed.fail(&stale, "Network error: timeout".to_string()));
        assert!(feed.error().is_none());
    }

    #[test]
    fn test_fail_allows_retry() {
        let mut feed = FeedState::new(key(StatusFilter::NotConnected, ""));

        let request = feed.request_next().unwrap();
        feed.fail(&request, "Network error: timeout".to_string());

        assert_eq!(feed.error(), Some("Network error: timeout"));
        assert!(!feed.is_loading());

        // Retry claims the same page again and clears the error
        let retry = feed.request_next().unwrap();
        assert_eq!(retry.page, 1);
        assert!(feed.error().is_none());
    }

    #[test]
    fn test_apply_status_adjusts_counts() {
        let mut feed = FeedState::new(key(StatusFilter::All, ""));

        let request = feed.request_next().unwrap();
        feed.apply_page(
            &request,
            page(
                vec![
                    place(1, "A", "+20101111111", PlaceStatus::NotConnected),
                    place(2, "B", "+20102222222", PlaceStatus::NotConnected),
                ],
                false,
            ),
        );

        let change = feed.apply_status(1, PlaceStatus::Connected).unwrap();

        assert_eq!(change.from, PlaceStatus::NotConnected);
        assert_eq!(change.to, PlaceStatus::Connected);
        assert_eq!(feed.counts().not_connected, 1);
        assert_eq!(feed.counts().connected, 1);
        // Under the all filter the place stays visible with its new status
        assert_eq!(feed.places()[0].status, PlaceStatus::Connected);
    }

    #[test]
    fn test_apply_status_removes_mismatched_place() {
        let mut feed = FeedState::new(key(StatusFilter::NotConnected, ""));

        let request = feed.request_next().unwrap();
        feed.apply_page(
            &request,
            page(
                vec![
                    place(1, "A", "+20101111111", PlaceStatus::NotConnected),
                    place(2, "B", "+20102222222", PlaceStatus::NotConnected),
                ],
                true,
            ),
        );

        let change = feed.apply_status(1, PlaceStatus::Connected).unwrap();

        let ids: Vec<u64> = feed.places().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
        assert!(feed.needs_backfill());

        // Revert puts the place back where it was with its old status
        feed.revert_status(change);
        assert_eq!(feed.places()[0].id, 1);
        assert_eq!(feed.places()[0].status, PlaceStatus::NotConnected);
        assert_eq!(feed.counts().not_connected, 2);
        assert_eq!(feed.counts().connected, 0);
    }

    #[test]
    fn test_revert_keeps_feed_distinct_when_backfill_repeats_row() {
        let mut feed = FeedState::new(key(StatusFilter::NotConnected, ""));

        let request = feed.request_next().unwrap();
        feed.apply_page(
            &request,
            page(
                vec![
                    place(1, "A", "+20101111111", PlaceStatus::NotConnected),
                    place(2, "B", "+20102222222", PlaceStatus::NotConnected),
                ],
                true,
            ),
        );

        let change = feed.apply_status(1, PlaceStatus::Connected).unwrap();

        // The server never saw the failing update, so the shifted next
        // page repeats the row under its old status
        let backfill = feed.request_next().unwrap();
        feed.apply_page(
            &backfill,
            page(
                vec![
                    place(1, "A", "+20101111111", PlaceStatus::NotConnected),
                    place(3, "C", "+20103333333", PlaceStatus::NotConnected),
                ],
                false,
            ),
        );

        feed.revert_status(change);

        let ids: Vec<u64> = feed.places().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
        assert_eq!(feed.places()[1].status, PlaceStatus::NotConnected);
        // Tallies stay what the backfill page reported
        assert_eq!(feed.counts().not_connected, 2);
        assert_eq!(feed.counts().connected, 0);
    }

    #[test]
    fn test_apply_status_noop_when_unchanged() {
        let mut feed = FeedState::new(key(StatusFilter::All, ""));

        let request = feed.request_next().unwrap();
        feed.apply_page(
            &request,
            page(
                vec![place(1, "A", "+20101111111", PlaceStatus::Connected)],
                false,
            ),
        );

        assert!(feed.apply_status(1, PlaceStatus::Connected).is_none());
        assert!(feed.apply_status(99, PlaceStatus::Connected).is_none());
        assert_eq!(feed.counts().connected, 1);
    }

    #[test]
    fn test_revert_ignored_after_reset() {
        let mut feed = FeedState::new(key(StatusFilter::NotConnected, ""));

        let request = feed.request_next().unwrap();
        feed.apply_page(
            &request,
            page(
                vec![place(1, "A", "+20101111111", PlaceStatus::NotConnected)],
                false,
            ),
        );

        let change = feed.apply_status(1, PlaceStatus::Connected).unwrap();
        feed.reset(key(StatusFilter::NotConnected, ""));
        feed.revert_status(change);

        assert!(feed.places().is_empty());
        assert_eq!(feed.counts(), StatusCounts::default());
    }

    #[test]
    fn test_needs_backfill_thresholds() {
        let mut feed = FeedState::new(key(StatusFilter::NotConnected, ""));

        let full: Vec<Place> = (1..=12)
            .map(|id| place(id, "P", "+20100000000", PlaceStatus::NotConnected))
            .collect();

        let request = feed.request_next().unwrap();
        feed.apply_page(&request, page(full, true));
        assert!(!feed.needs_backfill());

        feed.apply_status(1, PlaceStatus::Connected);
        assert!(feed.needs_backfill());

        // No further pages means nothing to backfill from
        let request = feed.request_next().unwrap();
        feed.apply_page(&request, page(Vec::new(), false));
        assert!(!feed.needs_backfill());
    }

    #[test]
    fn test_visible_places_filters_and_searches() {
        let places = vec![
            place(1, "Cafe Nile", "+20101111111", PlaceStatus::NotConnected),
            place(2, "Giza Bakery", "+20102222222", PlaceStatus::Connected),
            place(3, "Nile Pharmacy", "+20103333333", PlaceStatus::NotConnected),
        ];

        let visible = visible_places(&places, "", StatusFilter::NotConnected);
        assert_eq!(visible.len(), 2);

        let visible = visible_places(&places, "NILE", StatusFilter::NotConnected);
        let ids: Vec<u64> = visible.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);

        // Phone substring match
        let visible = visible_places(&places, "0102", StatusFilter::All);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);

        let visible = visible_places(&places, "", StatusFilter::All);
        assert_eq!(visible.len(), 3);
    }
}
