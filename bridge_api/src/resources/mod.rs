//! Resource groups: one façade per family of endpoints, each borrowing the
//! [`Client`](crate::Client) that dispatches its requests.

mod accounts;
pub use self::accounts::Accounts;
mod banks;
pub use self::banks::Banks;
mod items;
pub use self::items::Items;
mod transactions;
pub use self::transactions::Transactions;
mod users;
pub use self::users::Users;
