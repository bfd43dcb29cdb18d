//! Site settings and page content key/value storage.

use chrono::Utc;
use diesel::prelude::*;
use diesel::upsert::excluded;

use crate::domain::content::{NewPageContent, PageContent, SiteSetting};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    DieselRepository, PageContentReader, PageContentWriter, SettingReader, SettingWriter,
};

impl SettingReader for DieselRepository {
    fn get_setting(&self, key: &str) -> RepositoryResult<Option<SiteSetting>> {
        use crate::models::content::SiteSetting as DbSiteSetting;
        use crate::schema::site_settings;

        let mut conn = self.conn()?;
        let setting = site_settings::table
            .find(key)
            .first::<DbSiteSetting>(&mut conn)
            .optional()?;

        Ok(setting.map(Into::into))
    }

    fn list_settings(&self) -> RepositoryResult<Vec<SiteSetting>> {
        use crate::models::content::SiteSetting as DbSiteSetting;
        use crate::schema::site_settings;

        let mut conn = self.conn()?;
        let items = site_settings::table
            .order(site_settings::key.asc())
            .load::<DbSiteSetting>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl SettingWriter for DieselRepository {
    fn set_setting(&self, key: &str, value: &str) -> RepositoryResult<SiteSetting> {
        use crate::models::content::{NewSiteSetting, SiteSetting as DbSiteSetting};
        use crate::schema::site_settings;

        let mut conn = self.conn()?;
        let setting = diesel::insert_into(site_settings::table)
            .values(&NewSiteSetting { key, value })
            .on_conflict(site_settings::key)
            .do_update()
            .set((
                site_settings::value.eq(excluded(site_settings::value)),
                site_settings::updated_at.eq(Utc::now().naive_utc()),
            ))
            .get_result::<DbSiteSetting>(&mut conn)?;

        Ok(setting.into())
    }
}

impl PageContentReader for DieselRepository {
    fn get_page_content(
        &self,
        page: &str,
        section: &str,
    ) -> RepositoryResult<Option<PageContent>> {
        use crate::models::content::PageContent as DbPageContent;
        use crate::schema::page_contents;

        let mut conn = self.conn()?;
        let content = page_contents::table
            .filter(page_contents::page.eq(page))
            .filter(page_contents::section.eq(section))
            .first::<DbPageContent>(&mut conn)
            .optional()?;

        Ok(content.map(Into::into))
    }

    fn list_page_contents(&self, page: Option<&str>) -> RepositoryResult<Vec<PageContent>> {
        use crate::models::content::PageContent as DbPageContent;
        use crate::schema::page_contents;

        let mut conn = self.conn()?;
        let mut query = page_contents::table.into_boxed();
        if let Some(page) = page {
            query = query.filter(page_contents::page.eq(page.to_string()));
        }

        let items = query
            .order((page_contents::page.asc(), page_contents::section.asc()))
            .load::<DbPageContent>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl PageContentWriter for DieselRepository {
    fn upsert_page_content(&self, content: &NewPageContent) -> RepositoryResult<PageContent> {
        use crate::models::content::{NewPageContent as DbNewPageContent, PageContent as DbPageContent};
        use crate::schema::page_contents;

        let mut conn = self.conn()?;
        let insertable: DbNewPageContent = content.into();

        let saved = diesel::insert_into(page_contents::table)
            .values(&insertable)
            .on_conflict((page_contents::page, page_contents::section))
            .do_update()
            .set((
                page_contents::body.eq(excluded(page_contents::body)),
                page_contents::updated_at.eq(Utc::now().naive_utc()),
            ))
            .get_result::<DbPageContent>(&mut conn)?;

        Ok(saved.into())
    }

    fn delete_page_content(&self, page: &str, section: &str) -> RepositoryResult<()> {
        use crate::schema::page_contents;

        let mut conn = self.conn()?;
        diesel::delete(
            page_contents::table
                .filter(page_contents::page.eq(page))
                .filter(page_contents::section.eq(section)),
        )
        .execute(&mut conn)?;
        Ok(())
    }
}
