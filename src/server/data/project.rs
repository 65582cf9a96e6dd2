//! Project data repository for database operations.
//!
//! Projects are stored as a row plus one `project_student` junction row per team
//! member. The repository keeps both in step and returns domain `Project`s with
//! their student ids loaded.

use std::collections::{HashMap, HashSet};

use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait, TransactionSession, TransactionTrait,
};

use crate::server::model::project::{
    CreateProjectParam, Project, ProjectFilter, UpdateProjectParam,
};

async fn insert_students<C: ConnectionTrait>(
    db: &C,
    project_id: i32,
    student_ids: &[i32],
) -> Result<(), DbErr> {
    if student_ids.is_empty() {
        return Ok(());
    }

    entity::prelude::ProjectStudent::insert_many(student_ids.iter().map(|student_id| {
        entity::project_student::ActiveModel {
            project_id: ActiveValue::Set(project_id),
            student_id: ActiveValue::Set(*student_id),
        }
    }))
    .exec_without_returning(db)
    .await?;

    Ok(())
}

/// Repository providing database operations for projects and their teams.
pub struct ProjectRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProjectRepository<'a, C> {
    /// Creates a new ProjectRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Loads junction rows for the given project rows and builds domain models.
    async fn with_students(
        &self,
        models: Vec<entity::project::Model>,
    ) -> Result<Vec<Project>, DbErr> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = models.iter().map(|m| m.id).collect();
        let mut students: HashMap<i32, Vec<i32>> = HashMap::new();
        for row in entity::prelude::ProjectStudent::find()
            .filter(entity::project_student::Column::ProjectId.is_in(ids))
            .all(self.db)
            .await?
        {
            students.entry(row.project_id).or_default().push(row.student_id);
        }

        Ok(models
            .into_iter()
            .map(|m| {
                let student_ids = students.remove(&m.id).unwrap_or_default();
                Project::from_entity(m, student_ids)
            })
            .collect())
    }

    /// Inserts a project and its team in one transaction.
    ///
    /// # Returns
    /// - `Ok(Project)` - The created project with its generated id
    /// - `Err(DbErr)` - Database error during insert; nothing was written
    pub async fn create(&self, param: CreateProjectParam) -> Result<Project, DbErr>
    where
        C: TransactionTrait,
    {
        let txn = self.db.begin().await?;

        let result = entity::prelude::Project::insert(entity::project::ActiveModel {
            title: ActiveValue::Set(param.title.clone()),
            file_url: ActiveValue::Set(param.file_url.clone()),
            team_leader_id: ActiveValue::Set(param.team_leader_id),
            doctor_id: ActiveValue::Set(param.doctor_id),
            assistant_doctor_id: ActiveValue::Set(param.assistant_doctor_id),
            ..Default::default()
        })
        .exec(&txn)
        .await?;

        let id = result.last_insert_id;
        insert_students(&txn, id, &param.student_ids).await?;

        txn.commit().await?;

        let mut student_ids = param.student_ids;
        student_ids.sort_unstable();

        Ok(Project {
            id,
            title: param.title,
            file_url: param.file_url,
            team_leader_id: param.team_leader_id,
            doctor_id: param.doctor_id,
            assistant_doctor_id: param.assistant_doctor_id,
            student_ids,
        })
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Project>, DbErr> {
        let Some(model) = entity::prelude::Project::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.with_students(vec![model]).await?.pop())
    }

    /// Lists projects ordered by id, applying whichever filters are set.
    pub async fn find_all(&self, filter: ProjectFilter) -> Result<Vec<Project>, DbErr> {
        let mut query = entity::prelude::Project::find().order_by_asc(entity::project::Column::Id);

        if let Some(doctor_id) = filter.doctor_id {
            query = query.filter(entity::project::Column::DoctorId.eq(doctor_id));
        }
        if let Some(assistant_doctor_id) = filter.assistant_doctor_id {
            query = query.filter(entity::project::Column::AssistantDoctorId.eq(assistant_doctor_id));
        }

        let models = query.all(self.db).await?;
        self.with_students(models).await
    }

    /// Lists projects a doctor supervises either as doctor or as assistant doctor.
    pub async fn find_by_supervisor(&self, doctor_id: i32) -> Result<Vec<Project>, DbErr> {
        let models = entity::prelude::Project::find()
            .filter(
                Condition::any()
                    .add(entity::project::Column::DoctorId.eq(doctor_id))
                    .add(entity::project::Column::AssistantDoctorId.eq(doctor_id)),
            )
            .order_by_asc(entity::project::Column::Id)
            .all(self.db)
            .await?;

        self.with_students(models).await
    }

    /// Finds the project a student leads or belongs to.
    pub async fn find_by_student(&self, student_id: i32) -> Result<Option<Project>, DbErr> {
        let member_of = entity::prelude::ProjectStudent::find()
            .select_only()
            .column(entity::project_student::Column::ProjectId)
            .filter(entity::project_student::Column::StudentId.eq(student_id))
            .into_query();

        let model = entity::prelude::Project::find()
            .filter(
                Condition::any()
                    .add(entity::project::Column::TeamLeaderId.eq(student_id))
                    .add(entity::project::Column::Id.in_subquery(member_of)),
            )
            .order_by_asc(entity::project::Column::Id)
            .one(self.db)
            .await?;

        let Some(model) = model else {
            return Ok(None);
        };

        Ok(self.with_students(vec![model]).await?.pop())
    }

    /// Ids of projects led or supervised by `user_id` in any capacity.
    pub async fn ids_involving(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Project::find()
            .select_only()
            .column(entity::project::Column::Id)
            .filter(
                Condition::any()
                    .add(entity::project::Column::TeamLeaderId.eq(user_id))
                    .add(entity::project::Column::DoctorId.eq(user_id))
                    .add(entity::project::Column::AssistantDoctorId.eq(user_id)),
            )
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Which of `file_urls` are still the document of some project.
    pub async fn file_urls_in_use(&self, file_urls: &[String]) -> Result<HashSet<String>, DbErr> {
        if file_urls.is_empty() {
            return Ok(HashSet::new());
        }

        let rows: Vec<String> = entity::prelude::Project::find()
            .select_only()
            .column(entity::project::Column::FileUrl)
            .filter(entity::project::Column::FileUrl.is_in(file_urls.to_vec()))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().collect())
    }

    /// Checks whether a student is on any project team.
    pub async fn is_student_in_project(&self, student_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ProjectStudent::find()
            .filter(entity::project_student::Column::StudentId.eq(student_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether any of `student_ids` is on a project team, optionally
    /// ignoring one project (the one being updated).
    pub async fn any_student_in_project(
        &self,
        student_ids: &[i32],
        excluding_project: Option<i32>,
    ) -> Result<bool, DbErr> {
        if student_ids.is_empty() {
            return Ok(false);
        }

        let mut query = entity::prelude::ProjectStudent::find()
            .filter(entity::project_student::Column::StudentId.is_in(student_ids.to_vec()));

        if let Some(project_id) = excluding_project {
            query = query.filter(entity::project_student::Column::ProjectId.ne(project_id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Counts projects where the user is the (main) doctor.
    pub async fn count_by_doctor(&self, doctor_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Project::find()
            .filter(entity::project::Column::DoctorId.eq(doctor_id))
            .count(self.db)
            .await
    }

    /// Replaces a project's fields and team in one transaction.
    ///
    /// # Returns
    /// - `Ok(Some(Project))` - The updated project
    /// - `Ok(None)` - No project with that id
    /// - `Err(DbErr)` - Database error during update; the project is unchanged
    pub async fn update(&self, param: UpdateProjectParam) -> Result<Option<Project>, DbErr>
    where
        C: TransactionTrait,
    {
        let txn = self.db.begin().await?;

        let result = entity::prelude::Project::update_many()
            .col_expr(entity::project::Column::Title, Expr::value(param.title))
            .col_expr(
                entity::project::Column::TeamLeaderId,
                Expr::value(param.team_leader_id),
            )
            .col_expr(entity::project::Column::DoctorId, Expr::value(param.doctor_id))
            .col_expr(
                entity::project::Column::AssistantDoctorId,
                Expr::value(param.assistant_doctor_id),
            )
            .filter(entity::project::Column::Id.eq(param.id))
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        entity::prelude::ProjectStudent::delete_many()
            .filter(entity::project_student::Column::ProjectId.eq(param.id))
            .exec(&txn)
            .await?;
        insert_students(&txn, param.id, &param.student_ids).await?;

        txn.commit().await?;

        self.find_by_id(param.id).await
    }

    /// Deletes projects and their team rows.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of project rows deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_many(&self, ids: &[i32]) -> Result<u64, DbErr>
    where
        C: TransactionTrait,
    {
        if ids.is_empty() {
            return Ok(0);
        }

        let txn = self.db.begin().await?;

        entity::prelude::ProjectStudent::delete_many()
            .filter(entity::project_student::Column::ProjectId.is_in(ids.to_vec()))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Project::delete_many()
            .filter(entity::project::Column::Id.is_in(ids.to_vec()))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected)
    }
}
