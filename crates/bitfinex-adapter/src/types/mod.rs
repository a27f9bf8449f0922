/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Parameter sets, request structs, typed models and response shapes
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod enums;
pub mod models;
pub mod params;
pub mod requests;
pub mod responses;

pub use enums::*;
pub use models::*;
pub use params::*;
pub use requests::*;
pub use responses::*;
