mod account;
pub use self::account::{Account, AccountsResponse, Balances};

mod error;
pub use self::error::{ApiError, ErrorCause};

mod item;
pub use self::item::Item;

mod owner;
pub use self::owner::{Address, AddressData, Email, EmailType, Owner, PhoneNumber, PhoneNumberType};
