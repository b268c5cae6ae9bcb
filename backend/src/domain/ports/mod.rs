//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod community_query;
mod community_repository;

#[cfg(test)]
pub use community_query::MockCommunityQuery;
pub use community_query::CommunityQuery;
#[cfg(test)]
pub use community_repository::MockCommunityRepository;
pub use community_repository::{
    CommunityRepository, CommunityRepositoryError, FixtureCommunityRepository,
};
