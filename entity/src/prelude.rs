pub use super::company::Entity as Company;
pub use super::listing::Entity as Listing;
pub use super::user::Entity as User;
