//! Project idea request data repository for database operations.
//!
//! Requests are stored as a row plus one `project_idea_request_student` junction
//! row per named student. Besides CRUD, the repository answers the question the
//! accept workflow needs: which other pending requests share a student with a
//! given request.

use std::collections::{HashMap, HashSet};

use entity::sea_orm_active_enums::ProjectIdeaRequestStatus;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait, TransactionSession, TransactionTrait,
};

use crate::server::model::project_idea_request::{
    InsertProjectIdeaRequestParam, ProjectIdeaRequest,
};

/// Repository providing database operations for project idea requests.
pub struct ProjectIdeaRequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProjectIdeaRequestRepository<'a, C> {
    /// Creates a new ProjectIdeaRequestRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    async fn with_students(
        &self,
        models: Vec<entity::project_idea_request::Model>,
    ) -> Result<Vec<ProjectIdeaRequest>, DbErr> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = models.iter().map(|m| m.id).collect();
        let mut students: HashMap<i32, Vec<i32>> = HashMap::new();
        for row in entity::prelude::ProjectIdeaRequestStudent::find()
            .filter(entity::project_idea_request_student::Column::RequestId.is_in(ids))
            .all(self.db)
            .await?
        {
            students.entry(row.request_id).or_default().push(row.student_id);
        }

        Ok(models
            .into_iter()
            .map(|m| {
                let student_ids = students.remove(&m.id).unwrap_or_default();
                ProjectIdeaRequest::from_entity(m, student_ids)
            })
            .collect())
    }

    /// Inserts a pending request and its student links.
    ///
    /// Both inserts run in one transaction, so a failed link leaves no request row.
    ///
    /// # Returns
    /// - `Ok(ProjectIdeaRequest)` - The created request with its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        param: InsertProjectIdeaRequestParam,
    ) -> Result<ProjectIdeaRequest, DbErr>
    where
        C: TransactionTrait,
    {
        let txn = self.db.begin().await?;

        let result =
            entity::prelude::ProjectIdeaRequest::insert(entity::project_idea_request::ActiveModel {
                title: ActiveValue::Set(param.title.clone()),
                status: ActiveValue::Set(ProjectIdeaRequestStatus::Pending),
                file_url: ActiveValue::Set(param.file_url.clone()),
                team_leader_id: ActiveValue::Set(param.team_leader_id),
                doctor_id: ActiveValue::Set(param.doctor_id),
                assistant_doctor_id: ActiveValue::Set(param.assistant_doctor_id),
                requested_on: ActiveValue::Set(param.requested_on),
                ..Default::default()
            })
            .exec(&txn)
            .await?;

        let id = result.last_insert_id;

        if !param.student_ids.is_empty() {
            entity::prelude::ProjectIdeaRequestStudent::insert_many(param.student_ids.iter().map(
                |student_id| entity::project_idea_request_student::ActiveModel {
                    request_id: ActiveValue::Set(id),
                    student_id: ActiveValue::Set(*student_id),
                },
            ))
            .exec_without_returning(&txn)
            .await?;
        }

        txn.commit().await?;

        let mut student_ids = param.student_ids;
        student_ids.sort_unstable();

        Ok(ProjectIdeaRequest {
            id,
            title: param.title,
            status: ProjectIdeaRequestStatus::Pending,
            file_url: param.file_url,
            team_leader_id: param.team_leader_id,
            doctor_id: param.doctor_id,
            assistant_doctor_id: param.assistant_doctor_id,
            student_ids,
            requested_on: param.requested_on,
        })
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ProjectIdeaRequest>, DbErr> {
        let Some(model) = entity::prelude::ProjectIdeaRequest::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.with_students(vec![model]).await?.pop())
    }

    /// Lists requests addressed to a doctor, newest first.
    ///
    /// # Arguments
    /// - `doctor_id` - The doctor the requests name as supervisor
    /// - `status` - Optional status to restrict to
    pub async fn find_by_doctor(
        &self,
        doctor_id: i32,
        status: Option<ProjectIdeaRequestStatus>,
    ) -> Result<Vec<ProjectIdeaRequest>, DbErr> {
        self.find_newest_first(
            Condition::all().add(entity::project_idea_request::Column::DoctorId.eq(doctor_id)),
            status,
        )
        .await
    }

    /// Lists requests submitted by a team leader, newest first.
    pub async fn find_by_team_leader(
        &self,
        team_leader_id: i32,
        status: Option<ProjectIdeaRequestStatus>,
    ) -> Result<Vec<ProjectIdeaRequest>, DbErr> {
        self.find_newest_first(
            Condition::all()
                .add(entity::project_idea_request::Column::TeamLeaderId.eq(team_leader_id)),
            status,
        )
        .await
    }

    async fn find_newest_first(
        &self,
        owner: Condition,
        status: Option<ProjectIdeaRequestStatus>,
    ) -> Result<Vec<ProjectIdeaRequest>, DbErr> {
        let mut query = entity::prelude::ProjectIdeaRequest::find()
            .filter(owner)
            .order_by_desc(entity::project_idea_request::Column::RequestedOn)
            .order_by_desc(entity::project_idea_request::Column::Id);

        if let Some(status) = status {
            query = query.filter(entity::project_idea_request::Column::Status.eq(status));
        }

        let models = query.all(self.db).await?;
        self.with_students(models).await
    }

    /// Requests led or supervised by `user_id` in any capacity.
    pub async fn find_involving(&self, user_id: i32) -> Result<Vec<ProjectIdeaRequest>, DbErr> {
        let models = entity::prelude::ProjectIdeaRequest::find()
            .filter(
                Condition::any()
                    .add(entity::project_idea_request::Column::TeamLeaderId.eq(user_id))
                    .add(entity::project_idea_request::Column::DoctorId.eq(user_id))
                    .add(entity::project_idea_request::Column::AssistantDoctorId.eq(user_id)),
            )
            .order_by_asc(entity::project_idea_request::Column::Id)
            .all(self.db)
            .await?;

        self.with_students(models).await
    }

    /// Sets the status of a single request.
    pub async fn set_status(
        &self,
        id: i32,
        status: ProjectIdeaRequestStatus,
    ) -> Result<(), DbErr> {
        entity::prelude::ProjectIdeaRequest::update_many()
            .col_expr(
                entity::project_idea_request::Column::Status,
                Expr::value(status),
            )
            .filter(entity::project_idea_request::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Finds pending requests, other than `request_id`, that name at least one
    /// of the students named on `request_id`.
    ///
    /// Runs as a single query: the student ids of `request_id` feed a subquery
    /// over the junction table, whose request ids filter the pending requests.
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Ids of the competing pending requests, ascending
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_pending_sharing_students(&self, request_id: i32) -> Result<Vec<i32>, DbErr> {
        let students_of_request = entity::prelude::ProjectIdeaRequestStudent::find()
            .select_only()
            .column(entity::project_idea_request_student::Column::StudentId)
            .filter(entity::project_idea_request_student::Column::RequestId.eq(request_id))
            .into_query();

        let requests_sharing_student = entity::prelude::ProjectIdeaRequestStudent::find()
            .select_only()
            .column(entity::project_idea_request_student::Column::RequestId)
            .filter(
                entity::project_idea_request_student::Column::StudentId
                    .in_subquery(students_of_request),
            )
            .into_query();

        entity::prelude::ProjectIdeaRequest::find()
            .select_only()
            .column(entity::project_idea_request::Column::Id)
            .filter(entity::project_idea_request::Column::Id.ne(request_id))
            .filter(
                entity::project_idea_request::Column::Status
                    .eq(ProjectIdeaRequestStatus::Pending),
            )
            .filter(entity::project_idea_request::Column::Id.in_subquery(requests_sharing_student))
            .order_by_asc(entity::project_idea_request::Column::Id)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Marks the given requests as `Missed`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of requests updated
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_missed(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::ProjectIdeaRequest::update_many()
            .col_expr(
                entity::project_idea_request::Column::Status,
                Expr::value(ProjectIdeaRequestStatus::Missed),
            )
            .filter(entity::project_idea_request::Column::Id.is_in(ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Which of `file_urls` are still the document of some request.
    pub async fn file_urls_in_use(&self, file_urls: &[String]) -> Result<HashSet<String>, DbErr> {
        if file_urls.is_empty() {
            return Ok(HashSet::new());
        }

        let rows: Vec<String> = entity::prelude::ProjectIdeaRequest::find()
            .select_only()
            .column(entity::project_idea_request::Column::FileUrl)
            .filter(entity::project_idea_request::Column::FileUrl.is_in(file_urls.to_vec()))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().collect())
    }

    /// Deletes requests and their student links.
    pub async fn delete_many(&self, ids: &[i32]) -> Result<u64, DbErr>
    where
        C: TransactionTrait,
    {
        if ids.is_empty() {
            return Ok(0);
        }

        let txn = self.db.begin().await?;

        entity::prelude::ProjectIdeaRequestStudent::delete_many()
            .filter(entity::project_idea_request_student::Column::RequestId.is_in(ids.to_vec()))
            .exec(&txn)
            .await?;

        let result = entity::prelude::ProjectIdeaRequest::delete_many()
            .filter(entity::project_idea_request::Column::Id.is_in(ids.to_vec()))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected)
    }
}
