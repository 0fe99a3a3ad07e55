//! User entity <-> model mapper

use inbox_core::{AccountRole, DomainError, UserRef};

use crate::models::UserModel;

use super::bad_enum;

/// Convert UserModel to UserRef entity
impl TryFrom<UserModel> for UserRef {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        Ok(UserRef {
            id: model.id,
            role: AccountRole::parse(&model.role)
                .ok_or_else(|| bad_enum("account role", &model.role))?,
        })
    }
}
