//! In-memory implementations of the store collaborators.

mod orders;
mod users;

pub use orders::InMemoryOrderStore;
pub use users::InMemoryUserStore;
