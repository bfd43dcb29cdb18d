//! Repository implementations for newsletter subscribers and campaigns.

use chrono::Utc;
use diesel::prelude::*;
use diesel::upsert::excluded;

use crate::domain::newsletter::{Campaign, NewCampaign, NewSubscriber, Subscriber, UpdateCampaign};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CampaignReader, CampaignWriter, DieselRepository, SubscriberListQuery, SubscriberReader,
    SubscriberWriter,
};

impl SubscriberReader for DieselRepository {
    fn get_subscriber_by_token(&self, token: &str) -> RepositoryResult<Option<Subscriber>> {
        use crate::models::newsletter::Subscriber as DbSubscriber;
        use crate::schema::subscribers;

        let mut conn = self.conn()?;
        let subscriber = subscribers::table
            .filter(subscribers::token.eq(token))
            .first::<DbSubscriber>(&mut conn)
            .optional()?;

        Ok(subscriber.map(Into::into))
    }

    fn list_subscribers(
        &self,
        query: SubscriberListQuery,
    ) -> RepositoryResult<(usize, Vec<Subscriber>)> {
        use crate::models::newsletter::Subscriber as DbSubscriber;
        use crate::schema::subscribers;

        let mut conn = self.conn()?;

        let mut items_query = subscribers::table.into_boxed();
        let mut count_query = subscribers::table.count().into_boxed();

        if query.subscribed_only {
            items_query = items_query.filter(subscribers::subscribed.eq(true));
            count_query = count_query.filter(subscribers::subscribed.eq(true));
        }

        items_query = items_query.order(subscribers::id.asc());

        if let Some(pagination) = &query.pagination {
            let (limit, offset) = pagination.limit_offset();
            items_query = items_query.limit(limit).offset(offset);
        }

        let items = items_query
            .load::<DbSubscriber>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Subscriber>>();

        let total: i64 = count_query.get_result(&mut conn)?;

        Ok((total as usize, items))
    }

    fn list_subscribed_emails(&self) -> RepositoryResult<Vec<String>> {
        use crate::schema::subscribers;

        let mut conn = self.conn()?;
        let emails = subscribers::table
            .filter(subscribers::subscribed.eq(true))
            .select(subscribers::email)
            .load::<String>(&mut conn)?;

        Ok(emails)
    }
}

impl SubscriberWriter for DieselRepository {
    fn upsert_subscriber(&self, new_subscriber: &NewSubscriber) -> RepositoryResult<Subscriber> {
        use crate::models::newsletter::{
            NewSubscriber as DbNewSubscriber, Subscriber as DbSubscriber,
        };
        use crate::schema::subscribers;

        let mut conn = self.conn()?;
        let insertable: DbNewSubscriber = new_subscriber.into();

        let subscriber = diesel::insert_into(subscribers::table)
            .values(&insertable)
            .on_conflict(subscribers::email)
            .do_update()
            .set((
                subscribers::name.eq(excluded(subscribers::name)),
                subscribers::token.eq(excluded(subscribers::token)),
                subscribers::subscribed.eq(true),
            ))
            .get_result::<DbSubscriber>(&mut conn)?;

        Ok(subscriber.into())
    }

    fn import_subscribers(&self, new_subscribers: &[NewSubscriber]) -> RepositoryResult<usize> {
        use crate::models::newsletter::NewSubscriber as DbNewSubscriber;
        use crate::schema::subscribers;

        let mut conn = self.conn()?;
        let insertables: Vec<DbNewSubscriber> =
            new_subscribers.iter().map(|s| s.into()).collect();

        // existing addresses are left untouched
        let mut affected = 0;
        for insertable in &insertables {
            affected += diesel::insert_into(subscribers::table)
                .values(insertable)
                .on_conflict_do_nothing()
                .execute(&mut conn)?;
        }

        Ok(affected)
    }

    fn set_subscribed(&self, token: &str, subscribed: bool) -> RepositoryResult<Subscriber> {
        use crate::models::newsletter::Subscriber as DbSubscriber;
        use crate::schema::subscribers;

        let mut conn = self.conn()?;
        let updated =
            diesel::update(subscribers::table.filter(subscribers::token.eq(token)))
                .set(subscribers::subscribed.eq(subscribed))
                .get_result::<DbSubscriber>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_subscriber(&self, id: i32) -> RepositoryResult<()> {
        use crate::schema::subscribers;

        let mut conn = self.conn()?;
        diesel::delete(subscribers::table.find(id)).execute(&mut conn)?;
        Ok(())
    }
}

impl CampaignReader for DieselRepository {
    fn get_campaign_by_id(&self, id: i32) -> RepositoryResult<Option<Campaign>> {
        use crate::models::newsletter::Campaign as DbCampaign;
        use crate::schema::campaigns;

        let mut conn = self.conn()?;
        let campaign = campaigns::table
            .find(id)
            .first::<DbCampaign>(&mut conn)
            .optional()?;

        Ok(campaign.map(Into::into))
    }

    fn list_campaigns(&self) -> RepositoryResult<Vec<Campaign>> {
        use crate::models::newsletter::Campaign as DbCampaign;
        use crate::schema::campaigns;

        let mut conn = self.conn()?;
        let items = campaigns::table
            .order(campaigns::id.desc())
            .load::<DbCampaign>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl CampaignWriter for DieselRepository {
    fn create_campaign(&self, new_campaign: &NewCampaign) -> RepositoryResult<Campaign> {
        use crate::models::newsletter::{Campaign as DbCampaign, NewCampaign as DbNewCampaign};
        use crate::schema::campaigns;

        let mut conn = self.conn()?;
        let insertable: DbNewCampaign = new_campaign.into();
        let created = diesel::insert_into(campaigns::table)
            .values(&insertable)
            .get_result::<DbCampaign>(&mut conn)?;

        Ok(created.into())
    }

    fn update_campaign(&self, id: i32, updates: &UpdateCampaign) -> RepositoryResult<Campaign> {
        use crate::models::newsletter::{Campaign as DbCampaign, UpdateCampaign as DbUpdateCampaign};
        use crate::schema::campaigns;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateCampaign = updates.into();

        let updated = diesel::update(campaigns::table.find(id))
            .set(&db_updates)
            .get_result::<DbCampaign>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_campaign(&self, id: i32) -> RepositoryResult<()> {
        use crate::schema::campaigns;

        let mut conn = self.conn()?;
        diesel::delete(campaigns::table.find(id)).execute(&mut conn)?;
        Ok(())
    }

    fn mark_campaign_sent(&self, id: i32) -> RepositoryResult<Campaign> {
        use crate::models::newsletter::Campaign as DbCampaign;
        use crate::schema::campaigns;

        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();
        let updated = diesel::update(campaigns::table.find(id))
            .set((
                campaigns::status.eq("sent"),
                campaigns::sent_at.eq(now),
                campaigns::updated_at.eq(now),
            ))
            .get_result::<DbCampaign>(&mut conn)?;

        Ok(updated.into())
    }
}
