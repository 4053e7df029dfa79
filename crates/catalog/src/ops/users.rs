use sea_orm::{QueryFilter, prelude::*};

use crate::{ResultCatalog, users};

use super::Catalog;

impl Catalog {
    /// Look up a user by username.
    ///
    /// This is the whole extent of the login flow: the caller reports
    /// success whether or not a row comes back, and no credential is ever
    /// compared. Kept bug-for-bug with the inherited behavior; unfit for
    /// production until real credential verification lands.
    pub async fn user_by_username(&self, username: &str) -> ResultCatalog<Option<users::Model>> {
        let user = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.database)
            .await?;

        Ok(user)
    }
}
