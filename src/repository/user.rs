//! Repository implementation for users and role membership.

use chrono::Utc;
use diesel::prelude::*;

use crate::domain::user::{NewUser, Role, User};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, UserReader, UserWriter};

impl UserReader for DieselRepository {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>> {
        use crate::models::user::User as DbUser;
        use crate::schema::users;

        let mut conn = self.conn()?;
        let user = users::table.find(id).first::<DbUser>(&mut conn).optional()?;

        Ok(user.map(Into::into))
    }

    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        use crate::models::user::User as DbUser;
        use crate::schema::users;

        let mut conn = self.conn()?;
        let user = users::table
            .filter(users::email.eq(email))
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(user.map(Into::into))
    }

    fn count_users(&self) -> RepositoryResult<usize> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let total: i64 = users::table.count().get_result(&mut conn)?;
        Ok(total as usize)
    }

    fn list_user_roles(&self, user_id: i32) -> RepositoryResult<Vec<String>> {
        use crate::schema::{roles, user_roles};

        let mut conn = self.conn()?;
        let names = user_roles::table
            .inner_join(roles::table)
            .filter(user_roles::user_id.eq(user_id))
            .select(roles::name)
            .load::<String>(&mut conn)?;

        Ok(names)
    }

    fn list_users_with_roles(&self) -> RepositoryResult<Vec<(User, Vec<Role>)>> {
        use crate::models::user::{Role as DbRole, User as DbUser};
        use crate::schema::{roles, user_roles, users};

        let mut conn = self.conn()?;
        let users = users::table
            .order(users::id.asc())
            .load::<DbUser>(&mut conn)?;

        let memberships = user_roles::table
            .inner_join(roles::table)
            .select((user_roles::user_id, roles::all_columns))
            .load::<(i32, DbRole)>(&mut conn)?;

        let users_with_roles = users
            .into_iter()
            .map(|user| {
                let user_roles = memberships
                    .iter()
                    .filter(|(user_id, _)| *user_id == user.id)
                    .map(|(_, role)| role.clone().into())
                    .collect::<Vec<Role>>();
                (user.into(), user_roles)
            })
            .collect();

        Ok(users_with_roles)
    }
}

impl UserWriter for DieselRepository {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User> {
        use crate::models::user::{NewUser as DbNewUser, User as DbUser};
        use crate::schema::users;

        let mut conn = self.conn()?;
        let insertable: DbNewUser = new_user.into();
        let created = diesel::insert_into(users::table)
            .values(&insertable)
            .get_result::<DbUser>(&mut conn)?;

        Ok(created.into())
    }

    fn update_user_name(&self, user_id: i32, name: &str) -> RepositoryResult<User> {
        use crate::models::user::User as DbUser;
        use crate::schema::users;

        let mut conn = self.conn()?;
        let updated = diesel::update(users::table.find(user_id))
            .set((
                users::name.eq(name),
                users::updated_at.eq(Utc::now().naive_utc()),
            ))
            .get_result::<DbUser>(&mut conn)?;

        Ok(updated.into())
    }

    fn update_user_password(&self, user_id: i32, password_hash: &str) -> RepositoryResult<()> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        diesel::update(users::table.find(user_id))
            .set((
                users::password_hash.eq(password_hash),
                users::updated_at.eq(Utc::now().naive_utc()),
            ))
            .execute(&mut conn)?;

        Ok(())
    }

    fn assign_role(&self, user_id: i32, role: &str) -> RepositoryResult<()> {
        use crate::models::user::NewUserRole;
        use crate::schema::{roles, user_roles};

        let mut conn = self.conn()?;

        let role_id = match roles::table
            .filter(roles::name.eq(role))
            .select(roles::id)
            .first::<i32>(&mut conn)
            .optional()?
        {
            Some(id) => id,
            None => diesel::insert_into(roles::table)
                .values(roles::name.eq(role))
                .returning(roles::id)
                .get_result::<i32>(&mut conn)?,
        };

        diesel::insert_into(user_roles::table)
            .values(&NewUserRole { user_id, role_id })
            .on_conflict_do_nothing()
            .execute(&mut conn)?;

        Ok(())
    }

    fn set_user_roles(&self, user_id: i32, role_names: &[String]) -> RepositoryResult<usize> {
        use crate::models::user::NewUserRole;
        use crate::schema::{roles, user_roles};

        let mut conn = self.conn()?;

        conn.transaction::<usize, diesel::result::Error, _>(|conn| {
            diesel::delete(user_roles::table.filter(user_roles::user_id.eq(user_id)))
                .execute(conn)?;

            let role_ids = roles::table
                .filter(roles::name.eq_any(role_names))
                .select(roles::id)
                .load::<i32>(conn)?;

            let memberships = role_ids
                .into_iter()
                .map(|role_id| NewUserRole { user_id, role_id })
                .collect::<Vec<_>>();

            diesel::insert_into(user_roles::table)
                .values(memberships)
                .execute(conn)
        })
        .map_err(Into::into)
    }
}
