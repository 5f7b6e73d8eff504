pub mod resolver;
pub mod status;
pub mod transport;
pub mod validator;

pub use crate::domain::model::{
    ApiKey, LookupRequest, MacAddress, MacNotation, OutputMode, ResolutionResult,
    TransportResponse,
};
pub use crate::domain::ports::{ConfigProvider, Transport};
pub use crate::utils::error::Result;
