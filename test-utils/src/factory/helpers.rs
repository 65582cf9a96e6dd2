//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// User ids are externally assigned, so factories draw them from this counter
/// to prevent collisions in tests. Starts high to stay clear of hand-picked ids.
static COUNTER: std::sync::atomic::AtomicI32 = std::sync::atomic::AtomicI32::new(100_000);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `i32` - Next unique counter value
pub fn next_id() -> i32 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Supervising doctors and students for a single idea request or project.
pub struct Team {
    pub doctor: entity::user::Model,
    pub assistant_doctor: entity::user::Model,
    pub team_leader: entity::user::Model,
    pub member: entity::user::Model,
}

impl Team {
    /// Ids of every student on the team, leader first.
    pub fn student_ids(&self) -> Vec<i32> {
        vec![self.team_leader.id, self.member.id]
    }
}

/// Creates a doctor, an assistant doctor and two students.
///
/// The doctor is created with the given project capacity; the assistant keeps
/// the factory default.
///
/// # Arguments
/// - `db` - Database connection
/// - `max_projects` - Capacity of the supervising doctor
///
/// # Returns
/// - `Ok(Team)` - The created users
/// - `Err(DbErr)` - Database error during creation
pub async fn create_team(db: &DatabaseConnection, max_projects: i32) -> Result<Team, DbErr> {
    let doctor = crate::factory::doctor::create_doctor_with_capacity(db, max_projects).await?;
    let assistant_doctor = crate::factory::doctor::create_doctor(db).await?;
    let team_leader = crate::factory::student::create_student(db).await?;
    let member = crate::factory::student::create_student(db).await?;

    Ok(Team {
        doctor,
        assistant_doctor,
        team_leader,
        member,
    })
}
