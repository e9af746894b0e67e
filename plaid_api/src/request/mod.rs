mod accounts;
pub use self::accounts::{
    AccountsBalanceGetOptions, AccountsBalanceGetRequest, AccountsGetOptions, AccountsGetRequest,
};
