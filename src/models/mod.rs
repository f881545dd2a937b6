//! Data models for the laptop fleet

pub mod advice;
pub mod enums;
pub mod laptop;
pub mod reservation;
pub mod workflow;

// Re-export commonly used types
pub use advice::{Advice, CreateAdvice};
pub use enums::{AdviceType, LaptopStatus};
pub use laptop::{CreateLaptop, Laptop, Problem, ProblemState, ReportProblem, ResolveProblem};
pub use reservation::{CreateReservation, Reservation};
pub use workflow::{Decision, RequestStatus, Reviewable};
