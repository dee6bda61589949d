//! Account entity <-> model mapper

use crm_core::entities::Account;
use crm_core::value_objects::Snowflake;

use crate::models::AccountModel;

impl From<AccountModel> for Account {
    fn from(model: AccountModel) -> Self {
        Account {
            id: Snowflake::new(model.id),
            created_at: model.created_at,
        }
    }
}
