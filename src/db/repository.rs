//! Database repository for CRUD operations.
//!
//! Uses prepared statements; every content write bumps the datastore
//! revision so clients can invalidate cached snapshots.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{
    Activity, ContactMessage, CreateActivityRequest, CreateMemberRequest, CreateMessageRequest,
    CreateNewsRequest, CreateRaceRequest, CreateSponsorRequest, CreateVehicleRequest,
    DashboardStats, NewsItem, Race, RevisionInfo, SiteSetting, Sponsor, TeamMember,
    UpdateActivityRequest, UpdateMemberRequest, UpdateNewsRequest, UpdateRaceRequest,
    UpdateSponsorRequest, UpdateVehicleRequest, Vehicle, VehicleSpec,
};

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get the current revision ID.
    pub async fn get_revision_id(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT revision_id FROM meta WHERE id = 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("revision_id"))
    }

    /// Get revision info.
    pub async fn get_revision_info(&self) -> Result<RevisionInfo, AppError> {
        let row = sqlx::query("SELECT revision_id, generated_at FROM meta WHERE id = 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(RevisionInfo {
            revision_id: row.get("revision_id"),
            generated_at: row.get("generated_at"),
        })
    }

    /// Increment the revision ID and return the new value.
    pub async fn increment_revision(&self) -> Result<i64, AppError> {
        let now = Utc::now().to_rfc3339();
        sqlx::query("UPDATE meta SET revision_id = revision_id + 1, generated_at = ? WHERE id = 1")
            .bind(&now)
            .execute(&self.pool)
            .await?;
        self.get_revision_id().await
    }

    // ==================== MEMBER OPERATIONS ====================

    /// List all members in creation order, newest first. Display ordering is
    /// a roster-module concern, not a query concern.
    pub async fn list_members(&self) -> Result<Vec<TeamMember>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, role, image_url, rank, sub_team, created_at, updated_at
             FROM team_members ORDER BY created_at DESC, id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(member_from_row).collect())
    }

    /// Get a member by ID.
    pub async fn get_member(&self, id: &str) -> Result<Option<TeamMember>, AppError> {
        let row = sqlx::query(
            "SELECT id, name, role, image_url, rank, sub_team, created_at, updated_at
             FROM team_members WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(member_from_row))
    }

    /// Create a new member.
    pub async fn create_member(
        &self,
        request: &CreateMemberRequest,
    ) -> Result<TeamMember, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO team_members (id, name, role, image_url, rank, sub_team, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&request.name)
        .bind(&request.role)
        .bind(&request.image_url)
        .bind(&request.rank)
        .bind(&request.sub_team)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        self.increment_revision().await?;

        Ok(TeamMember {
            id,
            name: request.name.clone(),
            role: request.role.clone(),
            image_url: request.image_url.clone(),
            rank: request.rank.clone(),
            sub_team: request.sub_team.clone(),
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Update a member. Absent request fields keep their stored values.
    pub async fn update_member(
        &self,
        id: &str,
        request: &UpdateMemberRequest,
    ) -> Result<TeamMember, AppError> {
        let existing = self
            .get_member(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member {} not found", id)))?;

        let now = Utc::now().to_rfc3339();
        let name = request.name.as_ref().unwrap_or(&existing.name);
        let role = request.role.as_ref().unwrap_or(&existing.role);
        let image_url = request.image_url.clone().or(existing.image_url.clone());
        let rank = request.rank.as_ref().unwrap_or(&existing.rank);
        let sub_team = request.sub_team.clone().or(existing.sub_team.clone());

        sqlx::query(
            "UPDATE team_members SET name = ?, role = ?, image_url = ?, rank = ?, sub_team = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(name)
        .bind(role)
        .bind(&image_url)
        .bind(rank)
        .bind(&sub_team)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        self.increment_revision().await?;

        Ok(TeamMember {
            id: id.to_string(),
            name: name.clone(),
            role: role.clone(),
            image_url,
            rank: rank.clone(),
            sub_team,
            created_at: existing.created_at,
            updated_at: now,
        })
    }

    /// Delete a member.
    pub async fn delete_member(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM team_members WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Member {} not found", id)));
        }

        self.increment_revision().await?;
        Ok(())
    }

    // ==================== NEWS OPERATIONS ====================

    /// List all news, newest first.
    pub async fn list_news(&self) -> Result<Vec<NewsItem>, AppError> {
        let rows = sqlx::query(
            "SELECT id, title, content, image_url, published_at, updated_at
             FROM news ORDER BY published_at DESC, id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(news_from_row).collect())
    }

    /// Get a news article by ID.
    pub async fn get_news(&self, id: &str) -> Result<Option<NewsItem>, AppError> {
        let row = sqlx::query(
            "SELECT id, title, content, image_url, published_at, updated_at
             FROM news WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(news_from_row))
    }

    /// Create a news article, published now.
    pub async fn create_news(&self, request: &CreateNewsRequest) -> Result<NewsItem, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO news (id, title, content, image_url, published_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&request.title)
        .bind(&request.content)
        .bind(&request.image_url)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        self.increment_revision().await?;

        Ok(NewsItem {
            id,
            title: request.title.clone(),
            content: request.content.clone(),
            image_url: request.image_url.clone(),
            published_at: now.clone(),
            updated_at: now,
        })
    }

    /// Update a news article.
    pub async fn update_news(
        &self,
        id: &str,
        request: &UpdateNewsRequest,
    ) -> Result<NewsItem, AppError> {
        let existing = self
            .get_news(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("News {} not found", id)))?;

        let now = Utc::now().to_rfc3339();
        let title = request.title.as_ref().unwrap_or(&existing.title);
        let content = request.content.as_ref().unwrap_or(&existing.content);
        let image_url = request.image_url.clone().or(existing.image_url.clone());

        sqlx::query("UPDATE news SET title = ?, content = ?, image_url = ?, updated_at = ? WHERE id = ?")
            .bind(title)
            .bind(content)
            .bind(&image_url)
            .bind(&now)
            .bind(id)
            .execute(&self.pool)
            .await?;

        self.increment_revision().await?;

        Ok(NewsItem {
            id: id.to_string(),
            title: title.clone(),
            content: content.clone(),
            image_url,
            published_at: existing.published_at,
            updated_at: now,
        })
    }

    /// Delete a news article.
    pub async fn delete_news(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM news WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("News {} not found", id)));
        }

        self.increment_revision().await?;
        Ok(())
    }

    // ==================== RACE OPERATIONS ====================

    /// List all races, newest first.
    pub async fn list_races(&self) -> Result<Vec<Race>, AppError> {
        let rows = sqlx::query(
            "SELECT id, title, description, result_rank, image_url, year, created_at, updated_at
             FROM races ORDER BY created_at DESC, id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(race_from_row).collect())
    }

    /// Get a race by ID.
    pub async fn get_race(&self, id: &str) -> Result<Option<Race>, AppError> {
        let row = sqlx::query(
            "SELECT id, title, description, result_rank, image_url, year, created_at, updated_at
             FROM races WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(race_from_row))
    }

    /// Create a race entry.
    pub async fn create_race(&self, request: &CreateRaceRequest) -> Result<Race, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO races (id, title, description, result_rank, image_url, year, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&request.title)
        .bind(&request.description)
        .bind(&request.result_rank)
        .bind(&request.image_url)
        .bind(&request.year)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        self.increment_revision().await?;

        Ok(Race {
            id,
            title: request.title.clone(),
            description: request.description.clone(),
            result_rank: request.result_rank.clone(),
            image_url: request.image_url.clone(),
            year: request.year.clone(),
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Update a race entry.
    pub async fn update_race(&self, id: &str, request: &UpdateRaceRequest) -> Result<Race, AppError> {
        let existing = self
            .get_race(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Race {} not found", id)))?;

        let now = Utc::now().to_rfc3339();
        let title = request.title.as_ref().unwrap_or(&existing.title);
        let description = request.description.clone().or(existing.description.clone());
        let result_rank = request.result_rank.clone().or(existing.result_rank.clone());
        let image_url = request.image_url.clone().or(existing.image_url.clone());
        let year = request.year.clone().or(existing.year.clone());

        sqlx::query(
            "UPDATE races SET title = ?, description = ?, result_rank = ?, image_url = ?, year = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(title)
        .bind(&description)
        .bind(&result_rank)
        .bind(&image_url)
        .bind(&year)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        self.increment_revision().await?;

        Ok(Race {
            id: id.to_string(),
            title: title.clone(),
            description,
            result_rank,
            image_url,
            year,
            created_at: existing.created_at,
            updated_at: now,
        })
    }

    /// Delete a race entry.
    pub async fn delete_race(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM races WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Race {} not found", id)));
        }

        self.increment_revision().await?;
        Ok(())
    }

    // ==================== ACTIVITY OPERATIONS ====================

    /// List all activities, newest first.
    pub async fn list_activities(&self) -> Result<Vec<Activity>, AppError> {
        let rows = sqlx::query(
            "SELECT id, title, description, image_url, created_at, updated_at
             FROM activities ORDER BY created_at DESC, id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(activity_from_row).collect())
    }

    /// Get an activity by ID.
    pub async fn get_activity(&self, id: &str) -> Result<Option<Activity>, AppError> {
        let row = sqlx::query(
            "SELECT id, title, description, image_url, created_at, updated_at
             FROM activities WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(activity_from_row))
    }

    /// Create an activity.
    pub async fn create_activity(
        &self,
        request: &CreateActivityRequest,
    ) -> Result<Activity, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO activities (id, title, description, image_url, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&request.title)
        .bind(&request.description)
        .bind(&request.image_url)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        self.increment_revision().await?;

        Ok(Activity {
            id,
            title: request.title.clone(),
            description: request.description.clone(),
            image_url: request.image_url.clone(),
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Update an activity.
    pub async fn update_activity(
        &self,
        id: &str,
        request: &UpdateActivityRequest,
    ) -> Result<Activity, AppError> {
        let existing = self
            .get_activity(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", id)))?;

        let now = Utc::now().to_rfc3339();
        let title = request.title.as_ref().unwrap_or(&existing.title);
        let description = request.description.clone().or(existing.description.clone());
        let image_url = request.image_url.clone().or(existing.image_url.clone());

        sqlx::query(
            "UPDATE activities SET title = ?, description = ?, image_url = ?, updated_at = ? WHERE id = ?",
        )
        .bind(title)
        .bind(&description)
        .bind(&image_url)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        self.increment_revision().await?;

        Ok(Activity {
            id: id.to_string(),
            title: title.clone(),
            description,
            image_url,
            created_at: existing.created_at,
            updated_at: now,
        })
    }

    /// Delete an activity.
    pub async fn delete_activity(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM activities WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Activity {} not found", id)));
        }

        self.increment_revision().await?;
        Ok(())
    }

    // ==================== SPONSOR OPERATIONS ====================

    /// List all sponsors, newest first.
    pub async fn list_sponsors(&self) -> Result<Vec<Sponsor>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, logo_url, website_url, created_at, updated_at
             FROM sponsors ORDER BY created_at DESC, id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(sponsor_from_row).collect())
    }

    /// Get a sponsor by ID.
    pub async fn get_sponsor(&self, id: &str) -> Result<Option<Sponsor>, AppError> {
        let row = sqlx::query(
            "SELECT id, name, logo_url, website_url, created_at, updated_at
             FROM sponsors WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(sponsor_from_row))
    }

    /// Create a sponsor.
    pub async fn create_sponsor(&self, request: &CreateSponsorRequest) -> Result<Sponsor, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO sponsors (id, name, logo_url, website_url, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&request.name)
        .bind(&request.logo_url)
        .bind(&request.website_url)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        self.increment_revision().await?;

        Ok(Sponsor {
            id,
            name: request.name.clone(),
            logo_url: request.logo_url.clone(),
            website_url: request.website_url.clone(),
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Update a sponsor.
    pub async fn update_sponsor(
        &self,
        id: &str,
        request: &UpdateSponsorRequest,
    ) -> Result<Sponsor, AppError> {
        let existing = self
            .get_sponsor(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Sponsor {} not found", id)))?;

        let now = Utc::now().to_rfc3339();
        let name = request.name.as_ref().unwrap_or(&existing.name);
        let logo_url = request.logo_url.clone().or(existing.logo_url.clone());
        let website_url = request.website_url.clone().or(existing.website_url.clone());

        sqlx::query(
            "UPDATE sponsors SET name = ?, logo_url = ?, website_url = ?, updated_at = ? WHERE id = ?",
        )
        .bind(name)
        .bind(&logo_url)
        .bind(&website_url)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        self.increment_revision().await?;

        Ok(Sponsor {
            id: id.to_string(),
            name: name.clone(),
            logo_url,
            website_url,
            created_at: existing.created_at,
            updated_at: now,
        })
    }

    /// Delete a sponsor.
    pub async fn delete_sponsor(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM sponsors WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Sponsor {} not found", id)));
        }

        self.increment_revision().await?;
        Ok(())
    }

    // ==================== VEHICLE OPERATIONS ====================

    /// List all vehicles, newest first.
    pub async fn list_vehicles(&self) -> Result<Vec<Vehicle>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, specs, image_url, created_at, updated_at
             FROM vehicles ORDER BY created_at DESC, id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(vehicle_from_row).collect())
    }

    /// Get a vehicle by ID.
    pub async fn get_vehicle(&self, id: &str) -> Result<Option<Vehicle>, AppError> {
        let row = sqlx::query(
            "SELECT id, name, specs, image_url, created_at, updated_at
             FROM vehicles WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(vehicle_from_row))
    }

    /// Create a vehicle.
    pub async fn create_vehicle(&self, request: &CreateVehicleRequest) -> Result<Vehicle, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        let specs_json = serde_json::to_string(&request.specs).unwrap_or_default();

        sqlx::query(
            "INSERT INTO vehicles (id, name, specs, image_url, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&request.name)
        .bind(&specs_json)
        .bind(&request.image_url)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        self.increment_revision().await?;

        Ok(Vehicle {
            id,
            name: request.name.clone(),
            specs: request.specs.clone(),
            image_url: request.image_url.clone(),
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Update a vehicle.
    pub async fn update_vehicle(
        &self,
        id: &str,
        request: &UpdateVehicleRequest,
    ) -> Result<Vehicle, AppError> {
        let existing = self
            .get_vehicle(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", id)))?;

        let now = Utc::now().to_rfc3339();
        let name = request.name.as_ref().unwrap_or(&existing.name);
        let specs = request.specs.clone().unwrap_or(existing.specs.clone());
        let image_url = request.image_url.clone().or(existing.image_url.clone());
        let specs_json = serde_json::to_string(&specs).unwrap_or_default();

        sqlx::query(
            "UPDATE vehicles SET name = ?, specs = ?, image_url = ?, updated_at = ? WHERE id = ?",
        )
        .bind(name)
        .bind(&specs_json)
        .bind(&image_url)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        self.increment_revision().await?;

        Ok(Vehicle {
            id: id.to_string(),
            name: name.clone(),
            specs,
            image_url,
            created_at: existing.created_at,
            updated_at: now,
        })
    }

    /// Delete a vehicle.
    pub async fn delete_vehicle(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Vehicle {} not found", id)));
        }

        self.increment_revision().await?;
        Ok(())
    }

    // ==================== CONTACT MESSAGE OPERATIONS ====================

    /// List all contact messages, newest first.
    pub async fn list_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, email, message, is_read, created_at
             FROM contact_messages ORDER BY created_at DESC, id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(message_from_row).collect())
    }

    /// Create a contact message from the public form. Does not bump the
    /// revision: messages are not site content and public traffic must not
    /// invalidate content caches.
    pub async fn create_message(
        &self,
        request: &CreateMessageRequest,
    ) -> Result<ContactMessage, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO contact_messages (id, name, email, message, is_read, created_at)
             VALUES (?, ?, ?, ?, 0, ?)",
        )
        .bind(&id)
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.message)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(ContactMessage {
            id,
            name: request.name.clone(),
            email: request.email.clone(),
            message: request.message.clone(),
            is_read: false,
            created_at: now,
        })
    }

    /// Mark a contact message as read.
    pub async fn mark_message_read(&self, id: &str) -> Result<ContactMessage, AppError> {
        let result = sqlx::query("UPDATE contact_messages SET is_read = 1 WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Message {} not found", id)));
        }

        let row = sqlx::query(
            "SELECT id, name, email, message, is_read, created_at
             FROM contact_messages WHERE id = ?",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(message_from_row(&row))
    }

    /// Delete a contact message.
    pub async fn delete_message(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Message {} not found", id)));
        }

        Ok(())
    }

    // ==================== SITE SETTING OPERATIONS ====================

    /// List all site settings.
    pub async fn list_settings(&self) -> Result<Vec<SiteSetting>, AppError> {
        let rows = sqlx::query("SELECT key, value, updated_at FROM site_settings ORDER BY key")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(setting_from_row).collect())
    }

    /// Get a site setting by key.
    pub async fn get_setting(&self, key: &str) -> Result<Option<SiteSetting>, AppError> {
        let row = sqlx::query("SELECT key, value, updated_at FROM site_settings WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(setting_from_row))
    }

    /// Insert or replace a site setting.
    pub async fn put_setting(&self, key: &str, value: &str) -> Result<SiteSetting, AppError> {
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO site_settings (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        self.increment_revision().await?;

        Ok(SiteSetting {
            key: key.to_string(),
            value: value.to_string(),
            updated_at: now,
        })
    }

    // ==================== DASHBOARD ====================

    /// Entity counts for the admin dashboard.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, AppError> {
        let row = sqlx::query(
            r#"SELECT
                (SELECT COUNT(*) FROM team_members) AS members,
                (SELECT COUNT(*) FROM vehicles) AS vehicles,
                (SELECT COUNT(*) FROM news) AS news,
                (SELECT COUNT(*) FROM races) AS races,
                (SELECT COUNT(*) FROM activities) AS activities,
                (SELECT COUNT(*) FROM sponsors) AS sponsors,
                (SELECT COUNT(*) FROM contact_messages) AS messages,
                (SELECT COUNT(*) FROM contact_messages WHERE is_read = 0) AS unread_messages"#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(DashboardStats {
            members: row.get("members"),
            vehicles: row.get("vehicles"),
            news: row.get("news"),
            races: row.get("races"),
            activities: row.get("activities"),
            sponsors: row.get("sponsors"),
            messages: row.get("messages"),
            unread_messages: row.get("unread_messages"),
        })
    }
}

// Helper functions for row conversion

fn member_from_row(row: &sqlx::sqlite::SqliteRow) -> TeamMember {
    TeamMember {
        id: row.get("id"),
        name: row.get("name"),
        role: row.get("role"),
        image_url: row.get("image_url"),
        rank: row.get("rank"),
        sub_team: row.get("sub_team"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn news_from_row(row: &sqlx::sqlite::SqliteRow) -> NewsItem {
    NewsItem {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
        image_url: row.get("image_url"),
        published_at: row.get("published_at"),
        updated_at: row.get("updated_at"),
    }
}

fn race_from_row(row: &sqlx::sqlite::SqliteRow) -> Race {
    Race {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        result_rank: row.get("result_rank"),
        image_url: row.get("image_url"),
        year: row.get("year"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn activity_from_row(row: &sqlx::sqlite::SqliteRow) -> Activity {
    Activity {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        image_url: row.get("image_url"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn sponsor_from_row(row: &sqlx::sqlite::SqliteRow) -> Sponsor {
    Sponsor {
        id: row.get("id"),
        name: row.get("name"),
        logo_url: row.get("logo_url"),
        website_url: row.get("website_url"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn vehicle_from_row(row: &sqlx::sqlite::SqliteRow) -> Vehicle {
    let specs_str: Option<String> = row.get("specs");
    Vehicle {
        id: row.get("id"),
        name: row.get("name"),
        specs: specs_str
            .map(|s| parse_specs(&s))
            .unwrap_or_default(),
        image_url: row.get("image_url"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn message_from_row(row: &sqlx::sqlite::SqliteRow) -> ContactMessage {
    let is_read: i32 = row.get("is_read");
    ContactMessage {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        message: row.get("message"),
        is_read: is_read != 0,
        created_at: row.get("created_at"),
    }
}

fn setting_from_row(row: &sqlx::sqlite::SqliteRow) -> SiteSetting {
    SiteSetting {
        key: row.get("key"),
        value: row.get("value"),
        updated_at: row.get("updated_at"),
    }
}

fn parse_specs(s: &str) -> Vec<VehicleSpec> {
    serde_json::from_str(s).unwrap_or_default()
}
