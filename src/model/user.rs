use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub enum RoleDto {
    Admin,
    Doctor,
    Student,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct DoctorDetailsDto {
    pub max_projects: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct StudentDetailsDto {
    pub gpa: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub role: RoleDto,
    pub doctor_details: Option<DoctorDetailsDto>,
    pub student_details: Option<StudentDetailsDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CreateStudentDto {
    pub id: i32,
    pub name: String,
    pub password: String,
    pub gpa: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CreateDoctorDto {
    pub id: i32,
    pub name: String,
    pub password: String,
    pub max_projects: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CreateAdminDto {
    pub id: i32,
    pub name: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UpdateStudentDto {
    pub id: i32,
    pub name: String,
    pub gpa: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UpdateDoctorDto {
    pub id: i32,
    pub name: String,
    pub max_projects: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UpdateAdminDto {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ResetPasswordDto {
    pub user_id: i32,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub struct UserIdDto {
    pub id: i32,
}
