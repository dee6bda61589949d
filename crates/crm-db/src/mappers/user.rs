//! User entity <-> model mapper

use crm_core::entities::User;
use crm_core::value_objects::Snowflake;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            account_id: Snowflake::new(model.account_id),
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            created_at: model.created_at,
        }
    }
}
