pub use super::doctor_details::Entity as DoctorDetails;
pub use super::project::Entity as Project;
pub use super::project_idea_request::Entity as ProjectIdeaRequest;
pub use super::project_idea_request_student::Entity as ProjectIdeaRequestStudent;
pub use super::project_student::Entity as ProjectStudent;
pub use super::student_details::Entity as StudentDetails;
pub use super::user::Entity as User;
