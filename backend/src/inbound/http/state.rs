//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::CommunityQuery;

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use engage_local::domain::CommunityService;
/// use engage_local::domain::ports::FixtureCommunityRepository;
/// use engage_local::inbound::http::state::HttpState;
/// use mockable::DefaultClock;
///
/// let community = CommunityService::new(Arc::new(FixtureCommunityRepository));
/// let state = HttpState::new(Arc::new(community), Arc::new(DefaultClock));
/// let _community = state.community.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    pub community: Arc<dyn CommunityQuery>,
    pub clock: Arc<dyn Clock>,
}

impl HttpState {
    /// Construct state from the community port and the clock used for
    /// response timestamps.
    pub fn new(community: Arc<dyn CommunityQuery>, clock: Arc<dyn Clock>) -> Self {
        Self { community, clock }
    }
}
