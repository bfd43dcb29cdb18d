use diesel::prelude::*;

use crate::domain::contact::{ContactMessage, NewContactMessage};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ContactMessageReader, ContactMessageWriter, DieselRepository, MessageListQuery,
};

impl ContactMessageReader for DieselRepository {
    fn get_message_by_id(&self, id: i32) -> RepositoryResult<Option<ContactMessage>> {
        use crate::models::contact::ContactMessage as DbContactMessage;
        use crate::schema::contact_messages;

        let mut conn = self.conn()?;
        let message = contact_messages::table
            .find(id)
            .first::<DbContactMessage>(&mut conn)
            .optional()?;

        Ok(message.map(Into::into))
    }

    fn list_messages(
        &self,
        query: MessageListQuery,
    ) -> RepositoryResult<(usize, Vec<ContactMessage>)> {
        use crate::models::contact::ContactMessage as DbContactMessage;
        use crate::schema::contact_messages;

        let mut conn = self.conn()?;

        let mut items_query = contact_messages::table.into_boxed();
        let mut count_query = contact_messages::table.count().into_boxed();

        if query.unread_only {
            items_query = items_query.filter(contact_messages::is_read.eq(false));
            count_query = count_query.filter(contact_messages::is_read.eq(false));
        }

        // newest first
        items_query = items_query.order(contact_messages::id.desc());

        if let Some(pagination) = &query.pagination {
            let (limit, offset) = pagination.limit_offset();
            items_query = items_query.limit(limit).offset(offset);
        }

        let items = items_query
            .load::<DbContactMessage>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<ContactMessage>>();

        let total: i64 = count_query.get_result(&mut conn)?;

        Ok((total as usize, items))
    }
}

impl ContactMessageWriter for DieselRepository {
    fn create_message(&self, new_message: &NewContactMessage) -> RepositoryResult<ContactMessage> {
        use crate::models::contact::{
            ContactMessage as DbContactMessage, NewContactMessage as DbNewContactMessage,
        };
        use crate::schema::contact_messages;

        let mut conn = self.conn()?;
        let insertable: DbNewContactMessage = new_message.into();
        let created = diesel::insert_into(contact_messages::table)
            .values(&insertable)
            .get_result::<DbContactMessage>(&mut conn)?;

        Ok(created.into())
    }

    fn mark_message_read(&self, id: i32) -> RepositoryResult<ContactMessage> {
        use crate::models::contact::ContactMessage as DbContactMessage;
        use crate::schema::contact_messages;

        let mut conn = self.conn()?;
        let updated = diesel::update(contact_messages::table.find(id))
            .set(contact_messages::is_read.eq(true))
            .get_result::<DbContactMessage>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_message(&self, id: i32) -> RepositoryResult<()> {
        use crate::schema::contact_messages;

        let mut conn = self.conn()?;
        diesel::delete(contact_messages::table.find(id)).execute(&mut conn)?;
        Ok(())
    }
}
