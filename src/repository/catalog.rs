//! Repository implementations for the public catalog: projects, service
//! items, testimonials and FAQ entries.

use chrono::Utc;
use diesel::prelude::*;

use crate::domain::faq::{FaqItem, NewFaqItem, UpdateFaqItem};
use crate::domain::project::{NewProject, Project, UpdateProject};
use crate::domain::service_item::{NewServiceItem, ServiceItem, UpdateServiceItem};
use crate::domain::testimonial::{NewTestimonial, Testimonial, UpdateTestimonial};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    DieselRepository, FaqReader, FaqWriter, ProjectListQuery, ProjectReader, ProjectWriter,
    ServiceItemReader, ServiceItemWriter, TestimonialReader, TestimonialWriter,
};

impl ProjectReader for DieselRepository {
    fn get_project_by_id(&self, id: i32) -> RepositoryResult<Option<Project>> {
        use crate::models::project::Project as DbProject;
        use crate::schema::projects;

        let mut conn = self.conn()?;
        let project = projects::table
            .find(id)
            .first::<DbProject>(&mut conn)
            .optional()?;

        Ok(project.map(Into::into))
    }

    fn list_projects(&self, query: ProjectListQuery) -> RepositoryResult<(usize, Vec<Project>)> {
        use crate::models::project::Project as DbProject;
        use crate::schema::projects;

        let mut conn = self.conn()?;

        let mut items_query = projects::table.into_boxed();
        let mut count_query = projects::table.count().into_boxed();

        if query.active_only {
            items_query = items_query.filter(projects::active.eq(true));
            count_query = count_query.filter(projects::active.eq(true));
        }

        if let Some(search) = &query.search {
            let pattern = format!("%{search}%");
            items_query = items_query.filter(
                projects::title
                    .like(pattern.clone())
                    .or(projects::summary.like(pattern.clone())),
            );
            count_query = count_query.filter(
                projects::title
                    .like(pattern.clone())
                    .or(projects::summary.like(pattern)),
            );
        }

        items_query = items_query.order((projects::sort_order.asc(), projects::id.asc()));

        if let Some(pagination) = &query.pagination {
            let (limit, offset) = pagination.limit_offset();
            items_query = items_query.limit(limit).offset(offset);
        }

        let items = items_query
            .load::<DbProject>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Project>>();

        let total: i64 = count_query.get_result(&mut conn)?;

        Ok((total as usize, items))
    }
}

impl ProjectWriter for DieselRepository {
    fn create_project(&self, new_project: &NewProject) -> RepositoryResult<Project> {
        use crate::models::project::{NewProject as DbNewProject, Project as DbProject};
        use crate::schema::projects;

        let mut conn = self.conn()?;
        let insertable: DbNewProject = new_project.into();
        let created = diesel::insert_into(projects::table)
            .values(&insertable)
            .get_result::<DbProject>(&mut conn)?;

        Ok(created.into())
    }

    fn update_project(&self, id: i32, updates: &UpdateProject) -> RepositoryResult<Project> {
        use crate::models::project::{Project as DbProject, UpdateProject as DbUpdateProject};
        use crate::schema::projects;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateProject = updates.into();

        let updated = diesel::update(projects::table.find(id))
            .set(&db_updates)
            .get_result::<DbProject>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_project(&self, id: i32) -> RepositoryResult<()> {
        use crate::schema::projects;

        let mut conn = self.conn()?;
        diesel::delete(projects::table.find(id)).execute(&mut conn)?;
        Ok(())
    }

    fn set_project_active(&self, id: i32, active: bool) -> RepositoryResult<Project> {
        use crate::models::project::Project as DbProject;
        use crate::schema::projects;

        let mut conn = self.conn()?;
        let updated = diesel::update(projects::table.find(id))
            .set((
                projects::active.eq(active),
                projects::updated_at.eq(Utc::now().naive_utc()),
            ))
            .get_result::<DbProject>(&mut conn)?;

        Ok(updated.into())
    }
}

impl ServiceItemReader for DieselRepository {
    fn get_service_item_by_id(&self, id: i32) -> RepositoryResult<Option<ServiceItem>> {
        use crate::models::service_item::ServiceItem as DbServiceItem;
        use crate::schema::service_items;

        let mut conn = self.conn()?;
        let item = service_items::table
            .find(id)
            .first::<DbServiceItem>(&mut conn)
            .optional()?;

        Ok(item.map(Into::into))
    }

    fn list_service_items(&self, active_only: bool) -> RepositoryResult<Vec<ServiceItem>> {
        use crate::models::service_item::ServiceItem as DbServiceItem;
        use crate::schema::service_items;

        let mut conn = self.conn()?;
        let mut query = service_items::table.into_boxed();
        if active_only {
            query = query.filter(service_items::active.eq(true));
        }

        let items = query
            .order((service_items::sort_order.asc(), service_items::id.asc()))
            .load::<DbServiceItem>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl ServiceItemWriter for DieselRepository {
    fn create_service_item(&self, new_item: &NewServiceItem) -> RepositoryResult<ServiceItem> {
        use crate::models::service_item::{
            NewServiceItem as DbNewServiceItem, ServiceItem as DbServiceItem,
        };
        use crate::schema::service_items;

        let mut conn = self.conn()?;
        let insertable: DbNewServiceItem = new_item.into();
        let created = diesel::insert_into(service_items::table)
            .values(&insertable)
            .get_result::<DbServiceItem>(&mut conn)?;

        Ok(created.into())
    }

    fn update_service_item(
        &self,
        id: i32,
        updates: &UpdateServiceItem,
    ) -> RepositoryResult<ServiceItem> {
        use crate::models::service_item::{
            ServiceItem as DbServiceItem, UpdateServiceItem as DbUpdateServiceItem,
        };
        use crate::schema::service_items;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateServiceItem = updates.into();

        let updated = diesel::update(service_items::table.find(id))
            .set(&db_updates)
            .get_result::<DbServiceItem>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_service_item(&self, id: i32) -> RepositoryResult<()> {
        use crate::schema::service_items;

        let mut conn = self.conn()?;
        diesel::delete(service_items::table.find(id)).execute(&mut conn)?;
        Ok(())
    }

    fn set_service_item_active(&self, id: i32, active: bool) -> RepositoryResult<ServiceItem> {
        use crate::models::service_item::ServiceItem as DbServiceItem;
        use crate::schema::service_items;

        let mut conn = self.conn()?;
        let updated = diesel::update(service_items::table.find(id))
            .set((
                service_items::active.eq(active),
                service_items::updated_at.eq(Utc::now().naive_utc()),
            ))
            .get_result::<DbServiceItem>(&mut conn)?;

        Ok(updated.into())
    }
}

impl TestimonialReader for DieselRepository {
    fn get_testimonial_by_id(&self, id: i32) -> RepositoryResult<Option<Testimonial>> {
        use crate::models::testimonial::Testimonial as DbTestimonial;
        use crate::schema::testimonials;

        let mut conn = self.conn()?;
        let testimonial = testimonials::table
            .find(id)
            .first::<DbTestimonial>(&mut conn)
            .optional()?;

        Ok(testimonial.map(Into::into))
    }

    fn list_testimonials(&self, active_only: bool) -> RepositoryResult<Vec<Testimonial>> {
        use crate::models::testimonial::Testimonial as DbTestimonial;
        use crate::schema::testimonials;

        let mut conn = self.conn()?;
        let mut query = testimonials::table.into_boxed();
        if active_only {
            query = query.filter(testimonials::active.eq(true));
        }

        let items = query
            .order((testimonials::sort_order.asc(), testimonials::id.asc()))
            .load::<DbTestimonial>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl TestimonialWriter for DieselRepository {
    fn create_testimonial(
        &self,
        new_testimonial: &NewTestimonial,
    ) -> RepositoryResult<Testimonial> {
        use crate::models::testimonial::{
            NewTestimonial as DbNewTestimonial, Testimonial as DbTestimonial,
        };
        use crate::schema::testimonials;

        let mut conn = self.conn()?;
        let insertable: DbNewTestimonial = new_testimonial.into();
        let created = diesel::insert_into(testimonials::table)
            .values(&insertable)
            .get_result::<DbTestimonial>(&mut conn)?;

        Ok(created.into())
    }

    fn update_testimonial(
        &self,
        id: i32,
        updates: &UpdateTestimonial,
    ) -> RepositoryResult<Testimonial> {
        use crate::models::testimonial::{
            NewTestimonial as DbNewTestimonial, Testimonial as DbTestimonial,
        };
        use crate::schema::testimonials;

        let mut conn = self.conn()?;
        let db_updates: DbNewTestimonial = updates.into();

        let updated = diesel::update(testimonials::table.find(id))
            .set(&db_updates)
            .get_result::<DbTestimonial>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_testimonial(&self, id: i32) -> RepositoryResult<()> {
        use crate::schema::testimonials;

        let mut conn = self.conn()?;
        diesel::delete(testimonials::table.find(id)).execute(&mut conn)?;
        Ok(())
    }
}

impl FaqReader for DieselRepository {
    fn get_faq_item_by_id(&self, id: i32) -> RepositoryResult<Option<FaqItem>> {
        use crate::models::faq::FaqItem as DbFaqItem;
        use crate::schema::faq_items;

        let mut conn = self.conn()?;
        let item = faq_items::table
            .find(id)
            .first::<DbFaqItem>(&mut conn)
            .optional()?;

        Ok(item.map(Into::into))
    }

    fn list_faq_items(&self, active_only: bool) -> RepositoryResult<Vec<FaqItem>> {
        use crate::models::faq::FaqItem as DbFaqItem;
        use crate::schema::faq_items;

        let mut conn = self.conn()?;
        let mut query = faq_items::table.into_boxed();
        if active_only {
            query = query.filter(faq_items::active.eq(true));
        }

        let items = query
            .order((faq_items::sort_order.asc(), faq_items::id.asc()))
            .load::<DbFaqItem>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl FaqWriter for DieselRepository {
    fn create_faq_item(&self, new_item: &NewFaqItem) -> RepositoryResult<FaqItem> {
        use crate::models::faq::{FaqItem as DbFaqItem, NewFaqItem as DbNewFaqItem};
        use crate::schema::faq_items;

        let mut conn = self.conn()?;
        let insertable: DbNewFaqItem = new_item.into();
        let created = diesel::insert_into(faq_items::table)
            .values(&insertable)
            .get_result::<DbFaqItem>(&mut conn)?;

        Ok(created.into())
    }

    fn update_faq_item(&self, id: i32, updates: &UpdateFaqItem) -> RepositoryResult<FaqItem> {
        use crate::models::faq::{FaqItem as DbFaqItem, NewFaqItem as DbNewFaqItem};
        use crate::schema::faq_items;

        let mut conn = self.conn()?;
        let db_updates: DbNewFaqItem = updates.into();

        let updated = diesel::update(faq_items::table.find(id))
            .set(&db_updates)
            .get_result::<DbFaqItem>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_faq_item(&self, id: i32) -> RepositoryResult<()> {
        use crate::schema::faq_items;

        let mut conn = self.conn()?;
        diesel::delete(faq_items::table.find(id)).execute(&mut conn)?;
        Ok(())
    }
}
