//! User domain models and parameters.
//!
//! A user is an account identified by an externally assigned id (the university
//! id). Role-specific data lives in `RoleDetails` so a doctor always carries a
//! project capacity and a student always carries a GPA.

use entity::sea_orm_active_enums::Role;
use sea_orm::ActiveEnum;

use crate::model::user::{
    CreateAdminDto, CreateDoctorDto, CreateStudentDto, DoctorDetailsDto, RoleDto,
    StudentDetailsDto, UpdateAdminDto, UpdateDoctorDto, UpdateStudentDto, UserDto,
};

/// Role of a user together with the data only that role has.
#[derive(Debug, Clone, PartialEq)]
pub enum RoleDetails {
    Admin,
    Doctor {
        /// Maximum number of projects the doctor may supervise.
        max_projects: i32,
    },
    Student {
        gpa: f64,
    },
}

impl RoleDetails {
    pub fn role(&self) -> Role {
        match self {
            Self::Admin => Role::Admin,
            Self::Doctor { .. } => Role::Doctor,
            Self::Student { .. } => Role::Student,
        }
    }
}

/// Account with its role-specific details.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Externally assigned identifier.
    pub id: i32,
    /// Display name of the user.
    pub name: String,
    pub details: RoleDetails,
}

impl User {
    pub fn role(&self) -> Role {
        self.details.role()
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        let (doctor_details, student_details) = match self.details {
            RoleDetails::Admin => (None, None),
            RoleDetails::Doctor { max_projects } => {
                (Some(DoctorDetailsDto { max_projects }), None)
            }
            RoleDetails::Student { gpa } => (None, Some(StudentDetailsDto { gpa })),
        };

        UserDto {
            id: self.id,
            name: self.name,
            role: role_to_dto(self.details.role()),
            doctor_details,
            student_details,
        }
    }

    /// Converts entity models to a user domain model at the repository boundary.
    ///
    /// Detail rows that do not match the user's role are ignored. A doctor with
    /// no details row has a capacity of zero and a student with none a GPA of zero.
    ///
    /// # Arguments
    /// - `entity` - The user row
    /// - `doctor` - The user's doctor details row, if any
    /// - `student` - The user's student details row, if any
    pub fn from_entity(
        entity: entity::user::Model,
        doctor: Option<entity::doctor_details::Model>,
        student: Option<entity::student_details::Model>,
    ) -> Self {
        let details = match entity.role {
            Role::Admin => RoleDetails::Admin,
            Role::Doctor => RoleDetails::Doctor {
                max_projects: doctor.map(|d| d.max_projects).unwrap_or(0),
            },
            Role::Student => RoleDetails::Student {
                gpa: student.map(|s| s.gpa).unwrap_or(0.0),
            },
        };

        Self {
            id: entity.id,
            name: entity.name,
            details,
        }
    }
}

pub fn role_to_dto(role: Role) -> RoleDto {
    match role {
        Role::Admin => RoleDto::Admin,
        Role::Doctor => RoleDto::Doctor,
        Role::Student => RoleDto::Student,
    }
}

/// Parses a role filter from a query string.
///
/// Only exact role names (`Admin`, `Doctor`, `Student`) are recognised; anything
/// else yields `None`, which callers treat as "no filter".
pub fn parse_role_filter(value: Option<&str>) -> Option<Role> {
    value.and_then(|v| Role::try_from_value(&v.to_string()).ok())
}

/// Parameters for creating an account with a plain-text password.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub id: i32,
    pub name: String,
    /// Plain-text password, hashed by the service before storage.
    pub password: String,
    pub details: RoleDetails,
}

impl From<CreateStudentDto> for CreateUserParam {
    fn from(dto: CreateStudentDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            password: dto.password,
            details: RoleDetails::Student { gpa: dto.gpa },
        }
    }
}

impl From<CreateDoctorDto> for CreateUserParam {
    fn from(dto: CreateDoctorDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            password: dto.password,
            details: RoleDetails::Doctor {
                max_projects: dto.max_projects,
            },
        }
    }
}

impl From<CreateAdminDto> for CreateUserParam {
    fn from(dto: CreateAdminDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            password: dto.password,
            details: RoleDetails::Admin,
        }
    }
}

/// Parameters for inserting an account whose password is already hashed.
#[derive(Debug, Clone)]
pub struct InsertUserParam {
    pub id: i32,
    pub name: String,
    pub hashed_password: String,
    pub details: RoleDetails,
}

/// Parameters for updating a user's name and role details.
///
/// The role is fixed by `details`; only a user already holding that role is
/// updated.
#[derive(Debug, Clone)]
pub struct UpdateUserParam {
    pub id: i32,
    pub name: String,
    pub details: RoleDetails,
}

impl From<UpdateStudentDto> for UpdateUserParam {
    fn from(dto: UpdateStudentDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            details: RoleDetails::Student { gpa: dto.gpa },
        }
    }
}

impl From<UpdateDoctorDto> for UpdateUserParam {
    fn from(dto: UpdateDoctorDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            details: RoleDetails::Doctor {
                max_projects: dto.max_projects,
            },
        }
    }
}

impl From<UpdateAdminDto> for UpdateUserParam {
    fn from(dto: UpdateAdminDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            details: RoleDetails::Admin,
        }
    }
}

/// Parameters for replacing a user's password.
#[derive(Debug, Clone)]
pub struct ResetPasswordParam {
    pub user_id: i32,
    pub password: String,
}
